// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Splitting axes and closed-rectangle predicates.
//!
//! Kurbo's [`Rect::contains`] is half-open (`x0 <= x < x1`). The tree needs
//! closed rectangles throughout: a point lying exactly on a query edge is
//! inside the query, and a child region that only touches a query edge still
//! has to be visited, because points on the split line live in it.

use kurbo::{Point, Rect};

/// The whole plane. Every root node is confined to this region.
pub const EVERYWHERE: Rect = Rect::new(
    f64::NEG_INFINITY,
    f64::NEG_INFINITY,
    f64::INFINITY,
    f64::INFINITY,
);

/// Coordinate a tree level orders its points by.
///
/// The root splits on `X`, its children on `Y`, and so on, alternating
/// strictly with depth.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Compare x-coordinates; the split line is vertical.
    X,
    /// Compare y-coordinates; the split line is horizontal.
    Y,
}

/// Which child slot of a node a point belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Strictly less than the split coordinate (left or bottom).
    Lesser,
    /// Greater than or equal to the split coordinate (right or top).
    GreaterOrEqual,
}

impl Axis {
    /// The axis used one level deeper.
    #[inline]
    pub const fn next(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }

    /// The coordinate of `p` on this axis.
    #[inline]
    pub const fn coord(self, p: Point) -> f64 {
        match self {
            Self::X => p.x,
            Self::Y => p.y,
        }
    }

    /// Route `p` relative to a node whose point is `split`.
    #[inline]
    pub fn side(self, p: Point, split: Point) -> Side {
        if self.coord(p) < self.coord(split) {
            Side::Lesser
        } else {
            Side::GreaterOrEqual
        }
    }

    /// Region of the `side` child of a node at `split` confined to `region`.
    ///
    /// The parent's region is cut by the line through `split` perpendicular to
    /// this axis; only the edge on this axis moves, the other axis is untouched.
    pub fn clip(self, region: Rect, split: Point, side: Side) -> Rect {
        let at = self.coord(split);
        match (self, side) {
            (Self::X, Side::Lesser) => Rect { x1: at, ..region },
            (Self::X, Side::GreaterOrEqual) => Rect { x0: at, ..region },
            (Self::Y, Side::Lesser) => Rect { y1: at, ..region },
            (Self::Y, Side::GreaterOrEqual) => Rect { y0: at, ..region },
        }
    }
}

/// Whether `p` lies in `rect`, boundary included.
#[inline]
pub fn contains_closed(rect: &Rect, p: Point) -> bool {
    rect.x0 <= p.x && p.x <= rect.x1 && rect.y0 <= p.y && p.y <= rect.y1
}

/// Whether two rectangles share at least one point, boundary included.
#[inline]
pub fn intersects_closed(a: &Rect, b: &Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Squared distance from `p` to the closest point of `rect`; zero inside.
///
/// Works with infinite bounds, so half-plane and whole-plane regions are fine
/// as long as `p` itself is finite.
#[inline]
pub fn distance_squared_to(rect: &Rect, p: Point) -> f64 {
    let dx = (rect.x0 - p.x).max(p.x - rect.x1).max(0.0);
    let dy = (rect.y0 - p.y).max(p.y - rect.y1).max(0.0);
    dx * dx + dy * dy
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn distance_squared(a: Point, b: Point) -> f64 {
    (a - b).hypot2()
}
