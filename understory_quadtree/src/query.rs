// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lazy traversals over the flat tree.
//!
//! - [`Path`]: the nodes from the root down to the leaf level along one point.
//!   Insertion, point queries, and removal all walk this path.
//! - [`NodeWalk`]: a pre-order walk over the nodes that can own a point of a
//!   query region. Other subtrees are skipped without being visited.
//! - [`RangeQuery`]: the elements inside a query region, built on [`NodeWalk`].
//!
//! None of these allocate. Cloning one forks the traversal at its current
//! position; asking the tree again starts a fresh one.

use core::slice;

use crate::bucket::Bucket;
use crate::layout::{MAX_DEPTH, child_index, children_index, is_leaf_level};
use crate::types::{Located, Point, Quadrant, Quadrants, Region};

/// The nodes visited when descending toward `point`, root first.
///
/// Yields `(index, region)` pairs. Empty if the point is outside the root region.
#[derive(Clone, Debug)]
pub struct Path {
    point: Point,
    count: usize,
    next: Option<(usize, Region)>,
}

impl Path {
    pub(crate) fn new(root: Region, count: usize, point: Point) -> Self {
        Self {
            point,
            count,
            next: (count > 0 && root.contains(point)).then_some((0, root)),
        }
    }
}

impl Iterator for Path {
    type Item = (usize, Region);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, region) = self.next.take()?;
        if !is_leaf_level(index, self.count) {
            let q = region.quadrant_of(self.point);
            let child = child_index(index, q);
            // The final family may be cut short by the end of the array.
            if child < self.count {
                self.next = Some((child, region.quadrant(q)));
            }
        }
        Some((index, region))
    }
}

#[derive(Copy, Clone, Debug)]
struct Frame {
    first_child: usize,
    region: Region,
    pending: Quadrants,
}

impl Frame {
    const EMPTY: Self = Self {
        first_child: 0,
        region: Region::new(0, 0, 0, 0),
        pending: Quadrants::empty(),
    };
}

/// Pre-order walk over the nodes that can own a point of a query region.
///
/// Yields `(index, region)` pairs. A child that owns no point of the query is
/// never yielded, and neither is anything below it. A query that only reaches a
/// midline from the left or top does not enter the children past it.
#[derive(Clone, Debug)]
pub struct NodeWalk {
    query: Region,
    count: usize,
    next: Option<(usize, Region)>,
    frames: [Frame; MAX_DEPTH],
    depth: usize,
}

impl NodeWalk {
    pub(crate) fn new(root: Region, count: usize, query: Region) -> Self {
        Self {
            query,
            count,
            next: (count > 0 && root.intersects(&query)).then_some((0, root)),
            frames: [Frame::EMPTY; MAX_DEPTH],
            depth: 0,
        }
    }

    /// The region this walk is pruned against.
    pub fn query(&self) -> Region {
        self.query
    }

    fn push_children(&mut self, index: usize, region: Region) {
        if is_leaf_level(index, self.count) {
            return;
        }
        let mut pending = region.overlapping_quadrants(&self.query);
        for q in Quadrant::ALL {
            if child_index(index, q) >= self.count {
                pending.remove(q.flag());
            }
        }
        if pending.is_empty() {
            return;
        }
        if let Some(frame) = self.frames.get_mut(self.depth) {
            *frame = Frame {
                first_child: children_index(index),
                region,
                pending,
            };
            self.depth += 1;
        }
    }

    fn pop_sibling(&mut self) -> Option<(usize, Region)> {
        while self.depth > 0 {
            let frame = &mut self.frames[self.depth - 1];
            if let Some(q) = frame.pending.pop_first() {
                return Some((frame.first_child + q.index(), frame.region.quadrant(q)));
            }
            self.depth -= 1;
        }
        None
    }
}

impl Iterator for NodeWalk {
    type Item = (usize, Region);

    fn next(&mut self) -> Option<Self::Item> {
        let (index, region) = match self.next.take() {
            Some(node) => node,
            None => self.pop_sibling()?,
        };
        tracing::trace!(node = index, "visiting");
        self.push_children(index, region);
        Some((index, region))
    }
}

/// Elements whose point lies inside a query region.
///
/// Returned by [`StaticQuadTree::query_range`](crate::StaticQuadTree::query_range).
#[derive(Clone, Debug)]
pub struct RangeQuery<'a, E, const CAP: usize> {
    nodes: &'a [Bucket<E, CAP>],
    walk: NodeWalk,
    current: slice::Iter<'a, E>,
}

impl<'a, E: Copy, const CAP: usize> RangeQuery<'a, E, CAP> {
    pub(crate) fn new(nodes: &'a [Bucket<E, CAP>], walk: NodeWalk) -> Self {
        Self {
            nodes,
            walk,
            current: slice::Iter::default(),
        }
    }
}

impl<E: Copy + Located, const CAP: usize> Iterator for RangeQuery<'_, E, CAP> {
    type Item = E;

    fn next(&mut self) -> Option<E> {
        let query = self.walk.query();
        loop {
            if let Some(e) = self.current.by_ref().find(|e| query.contains(e.point())) {
                return Some(*e);
            }
            let (index, _) = self.walk.next()?;
            self.current = self
                .nodes
                .get(index)
                .map(Bucket::as_slice)
                .unwrap_or_default()
                .iter();
        }
    }
}
