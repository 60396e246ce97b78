// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Understory KD-tree: insert, overwrite, look up, and query.

use kurbo::{Point, Rect};
use understory_kdtree::{Error, KdTree};

fn main() -> Result<(), Error> {
    let mut tree = KdTree::new();
    for (i, (x, y)) in [(1.0, 0.0), (1.0, 1.0), (1.0, 3.0)].into_iter().enumerate() {
        tree.put(Point::new(x, y), i)?;
    }
    println!("size: {}, empty: {}", tree.len(), tree.is_empty());

    tree.put(Point::new(2.0, 5.0), 10)?;
    tree.put(Point::new(2.0, 4.0), 11)?;
    tree.put(Point::new(6.0, 2.0), 12)?;
    println!("size after more points: {}", tree.len());

    println!("get (6, 2): {:?}", tree.get(Point::new(6.0, 2.0))?);
    println!("contains (1, 0): {}", tree.contains(Point::new(1.0, 0.0))?);

    // Query a rectangle
    let hits = tree.range(Rect::new(0.0, 0.0, 2.0, 4.0))?;
    println!("in [0,2]x[0,4]: {:?}", hits);

    println!("nearest to (5, 4): {:?}", tree.nearest(Point::new(5.0, 4.0))?);

    let all: Vec<_> = tree.points().collect();
    println!("breadth-first: {:?}", all);
    Ok(())
}
