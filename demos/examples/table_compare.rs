// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! KD-tree versus flat table.
//!
//! Fill both tables with the same scattered points and check that range and
//! nearest queries agree. Run with `RUST_LOG=debug` to see how many nodes each
//! tree query visited.
//!
//! Run:
//! - `cargo run -p understory_examples --example table_compare`

use kurbo::{Point, Rect};
use tracing_subscriber::EnvFilter;
use understory_kdtree::{FlatTable, KdTree, PointTable};

fn scattered(n: usize) -> Vec<Point> {
    let mut state = 0x9E37_79B9_7F4A_7C15_u64;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        ((state >> 11) as f64) / ((1_u64 << 53) as f64)
    };
    (0..n)
        .map(|_| Point::new(next() * 100.0, next() * 100.0))
        .collect()
}

fn sorted(mut pts: Vec<Point>) -> Vec<Point> {
    pts.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
    pts
}

fn main() -> Result<(), understory_kdtree::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let points = scattered(5_000);
    let mut tree = KdTree::new();
    let mut flat = FlatTable::new();
    for (i, p) in points.iter().copied().enumerate() {
        tree.put(p, i)?;
        flat.put(p, i)?;
    }
    println!(
        "{} points, tree height {} (a balanced tree would be {})",
        tree.len(),
        tree.height(),
        usize::BITS - tree.len().leading_zeros()
    );

    let query = Rect::new(20.0, 20.0, 25.0, 30.0);
    let from_tree = sorted(tree.range(query)?);
    let from_flat = sorted(flat.range(query)?);
    println!("range {:?}: {} points", query, from_tree.len());
    assert_eq!(from_tree, from_flat, "range results differ");

    for q in [Point::new(0.0, 0.0), Point::new(50.0, 50.0), Point::new(120.0, -3.0)] {
        let a = tree.nearest(q)?;
        let b = flat.nearest(q)?;
        println!("nearest {:?}: tree {:?}, flat {:?}", q, a, b);
        let d = |p: Option<Point>| p.map(|p| (p - q).hypot2());
        assert_eq!(d(a), d(b), "nearest distances differ");
    }
    Ok(())
}
