// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The 2D tree: node model, insertion and lookup, range and nearest queries.

use alloc::boxed::Box;
use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect};

use crate::error::{Error, check_point, check_rect};
use crate::table::PointTable;
use crate::types::{
    Axis, EVERYWHERE, Side, contains_closed, distance_squared, distance_squared_to,
    intersects_closed,
};

type Link<V> = Option<Box<Node<V>>>;

/// One stored `(point, value)` pair and the subtree below it.
struct Node<V> {
    point: Point,
    value: V,
    /// Every point in this subtree lies in `region`. Fixed at creation by
    /// clipping the parent's region on the parent's axis at the parent's point.
    region: Rect,
    lesser: Link<V>,
    greater_or_equal: Link<V>,
}

impl<V> Node<V> {
    fn new(point: Point, value: V, region: Rect) -> Self {
        Self {
            point,
            value,
            region,
            lesser: None,
            greater_or_equal: None,
        }
    }

    fn child(&self, side: Side) -> &Link<V> {
        match side {
            Side::Lesser => &self.lesser,
            Side::GreaterOrEqual => &self.greater_or_equal,
        }
    }

    fn child_mut(&mut self, side: Side) -> &mut Link<V> {
        match side {
            Side::Lesser => &mut self.lesser,
            Side::GreaterOrEqual => &mut self.greater_or_equal,
        }
    }
}

/// A map from points to values, stored as an unbalanced 2D tree.
///
/// Levels alternate between ordering by x (the root) and by y. Each node
/// remembers the rectangle its subtree is confined to, which lets
/// [`range`](Self::range) and [`nearest`](Self::nearest) skip whole subtrees.
///
/// The shape of the tree is a direct function of insertion order and is never
/// rebalanced. Points inserted in sorted order produce a tree as deep as it is
/// long, and every operation degrades to a linear walk. All traversals use
/// explicit stacks, so a degenerate tree is slow but never overflows the stack.
///
/// ```
/// use kurbo::{Point, Rect};
/// use understory_kdtree::KdTree;
///
/// let mut tree = KdTree::new();
/// tree.put(Point::new(2.0, 5.0), "a")?;
/// tree.put(Point::new(3.0, 4.0), "b")?;
/// tree.put(Point::new(6.0, 2.0), "c")?;
///
/// assert_eq!(tree.get(Point::new(3.0, 4.0))?, Some(&"b"));
/// assert_eq!(tree.range(Rect::new(0.0, 0.0, 5.0, 5.0))?.len(), 2);
/// assert_eq!(tree.nearest(Point::new(5.5, 1.0))?, Some(Point::new(6.0, 2.0)));
/// # Ok::<(), understory_kdtree::Error>(())
/// ```
pub struct KdTree<V> {
    root: Link<V>,
    len: usize,
}

impl<V> Default for KdTree<V> {
    fn default() -> Self {
        Self { root: None, len: 0 }
    }
}

impl<V> Debug for KdTree<V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdTree")
            .field("len", &self.len)
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

impl<V> Drop for KdTree<V> {
    fn drop(&mut self) {
        drop_iteratively(self.root.take());
    }
}

/// Free a subtree without recursing once per level.
fn drop_iteratively<V>(root: Link<V>) {
    let mut stack: Vec<Box<Node<V>>> = root.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        stack.extend(node.lesser.take());
        stack.extend(node.greater_or_equal.take());
    }
}

impl<V> KdTree<V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct points stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no point is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every point.
    pub fn clear(&mut self) {
        drop_iteratively(self.root.take());
        self.len = 0;
    }

    /// Number of levels in the tree; 0 when empty.
    ///
    /// Between `log2(len + 1)` (rounded up) and `len`, depending only on
    /// insertion order.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<(&Node<V>, usize)> =
            self.root.as_deref().map(|n| (n, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            for child in [&node.lesser, &node.greater_or_equal] {
                if let Some(c) = child.as_deref() {
                    stack.push((c, depth + 1));
                }
            }
        }
        height
    }

    /// Associate `value` with `point`.
    ///
    /// If `point` is already stored its value is replaced and the old one
    /// returned; the tree's shape does not change. Otherwise a new node is
    /// hung at the empty slot the descent ends on.
    pub fn put(&mut self, point: Point, value: V) -> Result<Option<V>, Error> {
        let point = check_point(point)?;
        let mut slot = &mut self.root;
        let mut axis = Axis::X;
        let mut region = EVERYWHERE;
        let mut depth = 0_usize;
        while let Some(node) = slot {
            if node.point == point {
                return Ok(Some(core::mem::replace(&mut node.value, value)));
            }
            let side = axis.side(point, node.point);
            region = axis.clip(node.region, node.point, side);
            slot = node.child_mut(side);
            axis = axis.next();
            depth += 1;
        }
        tracing::trace!(x = point.x, y = point.y, depth, axis = ?axis, "new node");
        *slot = Some(Box::new(Node::new(point, value, region)));
        self.len += 1;
        Ok(None)
    }

    /// Insert every pair from `iter`, stopping at the first invalid point.
    ///
    /// Pairs before the invalid one stay inserted.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (Point, V)>,
    {
        for (point, value) in iter {
            self.put(point, value)?;
        }
        Ok(())
    }

    fn find(&self, point: Point) -> Option<&Node<V>> {
        let mut link = &self.root;
        let mut axis = Axis::X;
        while let Some(node) = link {
            if node.point == point {
                return Some(node);
            }
            link = node.child(axis.side(point, node.point));
            axis = axis.next();
        }
        None
    }

    /// The value stored at exactly `point`.
    pub fn get(&self, point: Point) -> Result<Option<&V>, Error> {
        let point = check_point(point)?;
        Ok(self.find(point).map(|n| &n.value))
    }

    /// Mutable access to the value stored at exactly `point`.
    pub fn get_mut(&mut self, point: Point) -> Result<Option<&mut V>, Error> {
        let point = check_point(point)?;
        let mut link = &mut self.root;
        let mut axis = Axis::X;
        while let Some(node) = link {
            if node.point == point {
                return Ok(Some(&mut node.value));
            }
            link = node.child_mut(axis.side(point, node.point));
            axis = axis.next();
        }
        Ok(None)
    }

    /// Whether exactly `point` is stored.
    pub fn contains(&self, point: Point) -> Result<bool, Error> {
        let point = check_point(point)?;
        Ok(self.find(point).is_some())
    }

    /// Breadth-first iterator over every `(point, value)` pair.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            queue: self.root.as_deref().into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Every stored point, breadth-first from the root.
    ///
    /// Each call walks the tree afresh.
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.iter().map(|(p, _)| p)
    }

    /// Stored points inside `rect`, boundary included. Order is unspecified.
    pub fn range(&self, rect: Rect) -> Result<Vec<Point>, Error> {
        let rect = check_rect(rect)?;
        let mut out = Vec::new();
        self.range_visit(&rect, |p, _| out.push(p));
        Ok(out)
    }

    /// Like [`range`](Self::range), with the stored values.
    pub fn range_entries(&self, rect: Rect) -> Result<Vec<(Point, &V)>, Error> {
        let rect = check_rect(rect)?;
        let mut out = Vec::new();
        self.range_visit(&rect, |p, v| out.push((p, v)));
        Ok(out)
    }

    /// Report every node whose point is in `rect`; returns the number of nodes visited.
    ///
    /// A child is only visited when its region intersects `rect`: a region
    /// that misses the query cannot hold a hit.
    fn range_visit<'a>(&'a self, rect: &Rect, mut hit: impl FnMut(Point, &'a V)) -> usize {
        let mut visited = 0;
        let mut hits = 0;
        let mut stack: Vec<&Node<V>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            visited += 1;
            if contains_closed(rect, node.point) {
                hits += 1;
                hit(node.point, &node.value);
            }
            for child in [&node.lesser, &node.greater_or_equal] {
                if let Some(c) = child.as_deref()
                    && intersects_closed(&c.region, rect)
                {
                    stack.push(c);
                }
            }
        }
        tracing::debug!(visited, hits, len = self.len, "range query");
        visited
    }

    /// A stored point closest to `query`, or `None` when the tree is empty.
    ///
    /// Ties are broken by whichever minimal point is found first.
    pub fn nearest(&self, query: Point) -> Result<Option<Point>, Error> {
        Ok(self.nearest_entry(query)?.map(|(p, _)| p))
    }

    /// Like [`nearest`](Self::nearest), with the stored value.
    pub fn nearest_entry(&self, query: Point) -> Result<Option<(Point, &V)>, Error> {
        let query = check_point(query)?;
        Ok(self.nearest_search(query).map(|(node, _)| (node.point, &node.value)))
    }

    /// Depth-first search for the closest node; also returns the number of nodes visited.
    ///
    /// At each node the child whose region holds `query` is searched first,
    /// since it is the likeliest to shrink the bound. A child is skipped when
    /// its region is at least as far from `query` as the best point so far.
    fn nearest_search(&self, query: Point) -> Option<(&Node<V>, usize)> {
        let root = self.root.as_deref()?;
        let mut best = root;
        let mut best_d = distance_squared(root.point, query);
        let mut visited = 0;
        let mut stack = vec![(root, Axis::X)];
        while let Some((node, axis)) = stack.pop() {
            // The bound may have tightened since this node was pushed.
            if distance_squared_to(&node.region, query) >= best_d {
                continue;
            }
            visited += 1;
            let d = distance_squared(node.point, query);
            if d < best_d {
                best = node;
                best_d = d;
            }
            let first = Self::search_first(node, query, axis);
            // Pushed in reverse so `first` is popped, and exhausted, before the other side.
            for side in [opposite(first), first] {
                if let Some(c) = node.child(side).as_deref()
                    && distance_squared_to(&c.region, query) < best_d
                {
                    stack.push((c, axis.next()));
                }
            }
        }
        tracing::debug!(visited, best_d, len = self.len, "nearest query");
        Some((best, visited))
    }

    /// The child to search first: whichever region holds `query`, else the side
    /// of the split line `query` is on.
    fn search_first(node: &Node<V>, query: Point, axis: Axis) -> Side {
        let holds = |side| {
            node.child(side)
                .as_deref()
                .is_some_and(|c| contains_closed(&c.region, query))
        };
        if holds(Side::Lesser) {
            Side::Lesser
        } else if holds(Side::GreaterOrEqual) {
            Side::GreaterOrEqual
        } else {
            axis.side(query, node.point)
        }
    }
}

fn opposite(side: Side) -> Side {
    match side {
        Side::Lesser => Side::GreaterOrEqual,
        Side::GreaterOrEqual => Side::Lesser,
    }
}

impl<V> PointTable<V> for KdTree<V> {
    fn len(&self) -> usize {
        Self::len(self)
    }

    fn put(&mut self, point: Point, value: V) -> Result<Option<V>, Error> {
        Self::put(self, point, value)
    }

    fn get(&self, point: Point) -> Result<Option<&V>, Error> {
        Self::get(self, point)
    }

    fn contains(&self, point: Point) -> Result<bool, Error> {
        Self::contains(self, point)
    }

    fn points<'a>(&'a self) -> Box<dyn Iterator<Item = Point> + 'a> {
        Box::new(Self::points(self))
    }

    fn range(&self, rect: Rect) -> Result<Vec<Point>, Error> {
        Self::range(self, rect)
    }

    fn nearest(&self, query: Point) -> Result<Option<Point>, Error> {
        Self::nearest(self, query)
    }
}

/// Breadth-first iterator over a [`KdTree`], created by [`KdTree::iter`].
pub struct Iter<'a, V> {
    queue: VecDeque<&'a Node<V>>,
    remaining: usize,
}

impl<V> Debug for Iter<'_, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Iter")
            .field("remaining", &self.remaining)
            .finish_non_exhaustive()
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (Point, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.lesser.as_deref());
        self.queue.extend(node.greater_or_equal.as_deref());
        self.remaining -= 1;
        Some((node.point, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a KdTree<V> {
    type Item = (Point, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
