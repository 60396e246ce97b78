// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by every table operation.

use kurbo::{Point, Rect};
use thiserror::Error;

/// An argument was rejected before the table was touched.
///
/// Both variants are programming errors on the caller's side. Nothing is
/// retried and no partial mutation has happened when one is returned.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The point has a NaN or infinite coordinate.
    #[error("invalid point ({}, {}): coordinates must be finite", .0.x, .0.y)]
    InvalidPoint(Point),
    /// The rectangle has a NaN bound, or its minimum exceeds its maximum on some axis.
    #[error(
        "invalid rectangle ({}, {})..({}, {}): bounds must be ordered and not NaN",
        .0.x0, .0.y0, .0.x1, .0.y1
    )]
    InvalidRect(Rect),
}

/// Reject points that would make axis comparisons or distances meaningless.
pub(crate) fn check_point(point: Point) -> Result<Point, Error> {
    if point.x.is_finite() && point.y.is_finite() {
        Ok(point)
    } else {
        Err(Error::InvalidPoint(point))
    }
}

/// Reject rectangles that are NaN or inverted. Infinite bounds are fine.
pub(crate) fn check_rect(rect: Rect) -> Result<Rect, Error> {
    // `<=` is false for NaN, so this also catches NaN bounds.
    if rect.x0 <= rect.x1 && rect.y0 <= rect.y1 {
        Ok(rect)
    } else {
        Err(Error::InvalidRect(rect))
    }
}
