// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point table trait shared by the 2D tree and the flat baseline.

use alloc::boxed::Box;
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use crate::error::Error;

/// A map from planar points to values with spatial queries.
///
/// Implemented by [`KdTree`](crate::KdTree) and by the linear-scan
/// [`FlatTable`](crate::FlatTable), so callers (and tests, and benchmarks) can
/// swap one for the other.
pub trait PointTable<V> {
    /// Number of distinct points stored.
    fn len(&self) -> usize;

    /// True if no point is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Associate `value` with `point`, returning the value it replaced.
    fn put(&mut self, point: Point, value: V) -> Result<Option<V>, Error>;

    /// The value stored at exactly `point`.
    fn get(&self, point: Point) -> Result<Option<&V>, Error>;

    /// Whether exactly `point` is stored.
    fn contains(&self, point: Point) -> Result<bool, Error> {
        Ok(self.get(point)?.is_some())
    }

    /// Every stored point. Each call starts a fresh traversal.
    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Point> + 'a>;

    /// Stored points inside `rect`, boundary included. Order is unspecified.
    fn range(&self, rect: Rect) -> Result<Vec<Point>, Error>;

    /// A stored point with minimal distance to `query`, or `None` when empty.
    fn nearest(&self, query: Point) -> Result<Option<Point>, Error>;
}
