// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_kdtree --heading-base-level=0

//! Understory KD-tree: a point-keyed 2D tree map.
//!
//! Understory KD-tree maps planar points to values and answers spatial questions about them.
//!
//! - Insert and look up values by exact [`Point`](kurbo::Point).
//! - Collect every stored point inside a [`Rect`](kurbo::Rect), boundary included.
//! - Find a stored point nearest to a query point.
//!
//! Points and rectangles are [`kurbo`] types. The tree splits on x at the root, y one level down,
//! and so on; every node records the rectangle its subtree is confined to, and queries use those
//! rectangles to skip subtrees that cannot contribute.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_kdtree::KdTree;
//!
//! let mut tree = KdTree::new();
//! tree.put(Point::new(2.0, 5.0), 1)?;
//! tree.put(Point::new(3.0, 4.0), 2)?;
//! tree.put(Point::new(6.0, 2.0), 3)?;
//!
//! // Re-inserting a point replaces its value and does not grow the tree.
//! assert_eq!(tree.put(Point::new(3.0, 4.0), 20)?, Some(2));
//! assert_eq!(tree.len(), 3);
//!
//! let mut hits = tree.range(Rect::new(0.0, 0.0, 5.0, 5.0))?;
//! hits.sort_by(|a, b| a.x.total_cmp(&b.x));
//! assert_eq!(hits, [Point::new(2.0, 5.0), Point::new(3.0, 4.0)]);
//!
//! assert_eq!(tree.nearest(Point::new(6.0, 2.0))?, Some(Point::new(6.0, 2.0)));
//! # Ok::<(), understory_kdtree::Error>(())
//! ```
//!
//! ## Choosing a table
//!
//! - [`KdTree`]: the 2D tree. Expected sub-linear lookups and queries on well-spread input.
//! - [`FlatTable`]: a flat vector with linear scans. A baseline and a test oracle; fine for tiny sets.
//!
//! Both implement [`PointTable`], so code can be written against either.
//!
//! ### Shape and balance
//!
//! The tree is never rebalanced: its shape is fixed by insertion order. Inserting points in sorted
//! order yields a tree whose height equals its length, and every operation becomes a linear walk.
//! Shuffle bulk input first if its order is not already random. There is no removal.
//!
//! ### Float semantics
//!
//! Points must have finite coordinates and rectangles must not be NaN or inverted; anything else is
//! rejected with [`Error`]. Rectangles may have infinite bounds. Points are matched by exact
//! coordinate equality.
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with `std`.
//! - `libm`: build Kurbo with `libm` for `no_std` targets.
//!
//! The crate emits [`tracing`] events (node creation at `TRACE`, query summaries at `DEBUG`) and
//! never installs a subscriber.

#![no_std]

extern crate alloc;

pub mod error;
pub mod flat;
pub mod table;
pub mod tree;
pub mod types;

pub use error::Error;
pub use flat::FlatTable;
pub use table::PointTable;
pub use tree::{Iter, KdTree};
pub use types::{Axis, EVERYWHERE, Side};
