// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The flat, fixed-capacity quadtree.

use core::fmt::{self, Debug};

use crate::bucket::Bucket;
use crate::error::{ConfigError, Error};
use crate::layout::{MAX_DEPTH, is_power_of_four, parent_index, quadrant_in_parent};
use crate::query::{NodeWalk, Path, RangeQuery};
use crate::types::{Located, Point, Quadrant, Region};

/// A quadtree of `COUNT` nodes holding up to `CAP` elements each, stored inline.
///
/// Node `0` covers the root region; the children of node `i` sit at
/// `4i + 1 ..= 4i + 4` (see [`layout`](crate::layout)). Node regions are never
/// stored: they are derived from the root by repeated [`Region::subdivide`].
///
/// Elements land in the shallowest node on their path with a free slot, and
/// removal never moves elements between nodes.
#[derive(Clone)]
pub struct StaticQuadTree<E, const COUNT: usize, const CAP: usize> {
    root: Region,
    len: usize,
    nodes: [Bucket<E, CAP>; COUNT],
}

impl<E, const COUNT: usize, const CAP: usize> StaticQuadTree<E, COUNT, CAP> {
    /// Number of nodes.
    pub const NODE_COUNT: usize = COUNT;
    /// Elements each node holds.
    pub const NODE_CAPACITY: usize = CAP;
    /// Element slots across the whole tree.
    pub const CAPACITY: usize = COUNT * CAP;
    /// Whether `COUNT` is a power of 4 and `CAP` is non-zero.
    pub const VALID: bool = is_power_of_four(COUNT) && CAP > 0;

    /// Check a configuration without building a tree.
    ///
    /// # Errors
    ///
    /// See [`StaticQuadTree::new`].
    pub const fn validate(root: Region) -> Result<(), ConfigError> {
        if !is_power_of_four(COUNT) {
            return Err(ConfigError::NodeCountNotPowerOfFour { count: COUNT });
        }
        if CAP == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if root.is_degenerate() {
            return Err(ConfigError::DegenerateRegion);
        }
        Ok(())
    }

    /// The region covered by node `0`.
    #[inline]
    pub const fn root(&self) -> Region {
        self.root
    }

    /// Number of stored elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// True if nothing is stored.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The region of node `index`, or `None` past the last node.
    pub fn node_region(&self, index: usize) -> Option<Region> {
        if index >= COUNT {
            return None;
        }
        let mut steps = [Quadrant::TopLeft; MAX_DEPTH];
        let mut depth = 0;
        let mut i = index;
        while let Some(q) = quadrant_in_parent(i) {
            steps[depth] = q;
            depth += 1;
            i = parent_index(i);
        }
        let region = steps[..depth]
            .iter()
            .rev()
            .fold(self.root, |region, &q| region.quadrant(q));
        Some(region)
    }

    /// The nodes visited when descending toward `point`, root first.
    pub fn path(&self, point: Point) -> Path {
        Path::new(self.root, COUNT, point)
    }

    /// The nodes that can own a point of `query`, in pre-order.
    pub fn walk(&self, query: Region) -> NodeWalk {
        NodeWalk::new(self.root, COUNT, query)
    }
}

impl<E: Copy + Default, const COUNT: usize, const CAP: usize> StaticQuadTree<E, COUNT, CAP> {
    /// Create an empty tree covering `root`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::NodeCountNotPowerOfFour`] if `COUNT` is not `4^k`.
    /// - [`ConfigError::ZeroCapacity`] if `CAP` is zero.
    /// - [`ConfigError::DegenerateRegion`] if `root` has zero width or height.
    pub fn new(root: Region) -> Result<Self, ConfigError> {
        Self::validate(root)?;
        Ok(Self::empty(root))
    }

    /// Create an empty tree covering `root`, rejecting a bad `COUNT` or `CAP`
    /// at compile time.
    ///
    /// Only the node layout is checked at compile time; `root` is checked when
    /// this runs.
    ///
    /// ```rust
    /// use understory_quadtree::{Point, Region, StaticQuadTree};
    ///
    /// let tree = StaticQuadTree::<Point, 16, 2>::with_bounds(Region::from_width_height(10, 10));
    /// assert!(tree.is_empty());
    /// ```
    ///
    /// A node count that is not a power of 4 does not build:
    ///
    /// ```compile_fail
    /// use understory_quadtree::{Point, Region, StaticQuadTree};
    ///
    /// let _ = StaticQuadTree::<Point, 5, 1>::with_bounds(Region::from_width_height(10, 10));
    /// ```
    ///
    /// # Panics
    ///
    /// If `root` has zero width or height.
    pub fn with_bounds(root: Region) -> Self {
        const {
            assert!(
                is_power_of_four(COUNT),
                "quadtree node count must be a power of 4"
            );
            assert!(CAP > 0, "quadtree nodes must hold at least one element");
        }
        assert!(!root.is_degenerate(), "root region must have positive extent");
        Self::empty(root)
    }

    fn empty(root: Region) -> Self {
        Self {
            root,
            len: 0,
            nodes: [Bucket::new(); COUNT],
        }
    }
}

impl<E: Copy, const COUNT: usize, const CAP: usize> StaticQuadTree<E, COUNT, CAP> {
    /// Number of elements stored in node `index`.
    pub fn node_len(&self, index: usize) -> usize {
        self.nodes.get(index).map_or(0, Bucket::len)
    }

    /// Elements stored in node `index`. Empty past the last node.
    pub fn node_elements(&self, index: usize) -> &[E] {
        self.nodes.get(index).map(Bucket::as_slice).unwrap_or_default()
    }

    /// Every stored element, by node index then slot.
    pub fn iter(&self) -> impl Iterator<Item = &E> + '_ {
        self.nodes.iter().flat_map(Bucket::as_slice)
    }

    /// Remove every element. Node layout is unaffected.
    pub fn clear(&mut self) {
        for bucket in &mut self.nodes {
            bucket.clear();
        }
        self.len = 0;
    }
}

impl<E: Copy + Located, const COUNT: usize, const CAP: usize> StaticQuadTree<E, COUNT, CAP> {
    /// Store `element` in the shallowest node on its path with a free slot.
    ///
    /// Deeper nodes are only used once every node above them on the path is full,
    /// so an insert touches at most one node per level and never moves other elements.
    ///
    /// # Errors
    ///
    /// - [`Error::OutOfBounds`] if the element's point is outside the root region.
    /// - [`Error::CapacityExceeded`] if every node on the path is full.
    pub fn insert(&mut self, element: E) -> Result<(), Error> {
        let point = element.point();
        if !self.root.contains(point) {
            tracing::debug!(x = point.x, y = point.y, "insert outside root region");
            return Err(Error::OutOfBounds { point });
        }
        for (index, _) in Path::new(self.root, COUNT, point) {
            if self.nodes[index].push(element).is_ok() {
                tracing::trace!(node = index, x = point.x, y = point.y, "inserted");
                self.len += 1;
                return Ok(());
            }
        }
        tracing::debug!(x = point.x, y = point.y, "insert path is full");
        Err(Error::CapacityExceeded { point })
    }

    /// The first element stored exactly at `point`, searching from the root down.
    pub fn query_point(&self, point: Point) -> Option<E> {
        self.query_point_all(point).next()
    }

    /// Every element stored exactly at `point`, shallowest first.
    pub fn query_point_all(&self, point: Point) -> impl Iterator<Item = E> + '_ {
        self.path(point).flat_map(move |(index, _)| {
            self.nodes[index]
                .as_slice()
                .iter()
                .filter(move |e| e.point() == point)
                .copied()
        })
    }

    /// Elements whose point lies inside `query`, edges included.
    ///
    /// Lazy: nodes are visited as the iterator advances, and subtrees whose
    /// region misses `query` are skipped entirely.
    pub fn query_range(&self, query: Region) -> RangeQuery<'_, E, CAP> {
        RangeQuery::new(&self.nodes, self.walk(query))
    }

    /// Remove the first element at `point` and return it.
    ///
    /// The hole is filled by the last element of the same node. Nothing is
    /// pulled up from deeper nodes.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no element is stored at `point`.
    pub fn remove_at(&mut self, point: Point) -> Result<E, Error> {
        self.remove_where(point, |e| e.point() == point)
    }

    fn remove_where(&mut self, point: Point, matches: impl Fn(&E) -> bool) -> Result<E, Error> {
        for (index, _) in Path::new(self.root, COUNT, point) {
            let bucket = &mut self.nodes[index];
            if let Some(pos) = bucket.position(&matches) {
                tracing::trace!(node = index, x = point.x, y = point.y, "removed");
                self.len -= 1;
                return Ok(bucket.swap_remove(pos));
            }
        }
        tracing::debug!(x = point.x, y = point.y, "nothing to remove");
        Err(Error::NotFound { point })
    }
}

impl<E: Copy + Located + PartialEq, const COUNT: usize, const CAP: usize>
    StaticQuadTree<E, COUNT, CAP>
{
    /// Remove the stored element equal to `element` and return it.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] if no equal element is stored at its point.
    pub fn remove(&mut self, element: &E) -> Result<E, Error> {
        self.remove_where(element.point(), |e| e == element)
    }
}

impl<E, const COUNT: usize, const CAP: usize> Debug for StaticQuadTree<E, COUNT, CAP> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticQuadTree")
            .field("root", &self.root)
            .field("nodes", &COUNT)
            .field("node_capacity", &CAP)
            .field("len", &self.len)
            .finish_non_exhaustive()
    }
}
