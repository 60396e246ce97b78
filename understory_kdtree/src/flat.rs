// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector table with linear scans. Small and simple; the baseline the tree is measured against.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::error::{Error, check_point, check_rect};
use crate::table::PointTable;
use crate::types::{contains_closed, distance_squared};

/// Flat vector of `(point, value)` entries; every query is a full scan.
///
/// Points are kept in insertion order, which is also the order of
/// [`FlatTable::points`].
#[derive(Clone)]
pub struct FlatTable<V> {
    entries: Vec<(Point, V)>,
}

impl<V> Default for FlatTable<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<V> Debug for FlatTable<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatTable")
            .field("len", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<V> FlatTable<V> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve space for at least `n` more points.
    pub fn reserve(&mut self, n: usize) {
        self.entries.reserve(n);
    }

    fn position(&self, point: Point) -> Option<usize> {
        self.entries.iter().position(|(p, _)| *p == point)
    }
}

impl<V> PointTable<V> for FlatTable<V> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn put(&mut self, point: Point, value: V) -> Result<Option<V>, Error> {
        let point = check_point(point)?;
        if let Some(i) = self.position(point) {
            return Ok(Some(core::mem::replace(&mut self.entries[i].1, value)));
        }
        self.entries.push((point, value));
        Ok(None)
    }

    fn get(&self, point: Point) -> Result<Option<&V>, Error> {
        let point = check_point(point)?;
        Ok(self.position(point).map(|i| &self.entries[i].1))
    }

    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Point> + 'a> {
        Box::new(self.entries.iter().map(|(p, _)| *p))
    }

    fn range(&self, rect: Rect) -> Result<Vec<Point>, Error> {
        let rect = check_rect(rect)?;
        Ok(self
            .entries
            .iter()
            .map(|(p, _)| *p)
            .filter(|p| contains_closed(&rect, *p))
            .collect())
    }

    fn nearest(&self, query: Point) -> Result<Option<Point>, Error> {
        let query = check_point(query)?;
        let mut best: Option<(Point, f64)> = None;
        for (p, _) in &self.entries {
            let d = distance_squared(*p, query);
            if best.is_none_or(|(_, bd)| d < bd) {
                best = Some((*p, d));
            }
        }
        Ok(best.map(|(p, _)| p))
    }
}
