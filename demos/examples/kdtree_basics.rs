// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! KD-tree basics.
//!
//! Build a small tree, overwrite a value, run each query, and list the points.
//! Set `RUST_LOG=trace` to watch nodes being created.
//!
//! Run:
//! - `cargo run -p understory_examples --example kdtree_basics`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_kdtree::KdTree;

fn main() -> Result<(), understory_kdtree::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut tree = KdTree::new();
    println!("isEmpty: {}", tree.is_empty());

    tree.put(Point::new(2.0, 5.0), "a")?;
    tree.put(Point::new(3.0, 4.0), "b")?;
    tree.put(Point::new(6.0, 2.0), "c")?;
    println!("size: {}, height: {}", tree.len(), tree.height());

    // Same point again: the value changes, the size does not.
    let old = tree.put(Point::new(3.0, 4.0), "b2")?;
    println!("replaced {:?}; size still {}", old, tree.len());

    println!("get (3, 4): {:?}", tree.get(Point::new(3.0, 4.0))?);
    println!("contains (3, 6): {}", tree.contains(Point::new(3.0, 6.0))?);

    let hits = tree.range(Rect::new(0.0, 0.0, 5.0, 5.0))?;
    println!("range [0,5]x[0,5]: {:?}", hits);
    assert_eq!(hits.len(), 2, "(6, 2) lies outside the query");

    let near = tree.nearest(Point::new(6.0, 2.0))?;
    println!("nearest (6, 2): {:?}", near);
    assert_eq!(near, Some(Point::new(6.0, 2.0)));

    for (p, v) in &tree {
        println!("  {:?} => {}", p, v);
    }

    if let Err(e) = tree.put(Point::new(f64::NAN, 1.0), "bad") {
        println!("rejected: {e}");
    }
    Ok(())
}
