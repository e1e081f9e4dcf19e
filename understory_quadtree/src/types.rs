// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Points, regions, and quadrants over an unsigned integer plane.

use core::fmt;

use crate::error::ConfigError;

/// Scalar used for every coordinate in the tree.
pub type Coord = u32;

/// A position in the plane. `y` grows downward.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: Coord,
    /// Vertical coordinate.
    pub y: Coord,
}

impl Point {
    /// Create a point.
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(Coord, Coord)> for Point {
    fn from((x, y): (Coord, Coord)) -> Self {
        Self { x, y }
    }
}

/// An element with a fixed position, used to place it in the tree.
///
/// Implement this for payload types that carry their own coordinates.
/// For payloads that don't, pair them with a [`Point`] as `(Point, P)`.
pub trait Located {
    /// The point this element is placed at.
    fn point(&self) -> Point;
}

impl Located for Point {
    #[inline]
    fn point(&self) -> Point {
        *self
    }
}

impl Located for (Coord, Coord) {
    #[inline]
    fn point(&self) -> Point {
        Point::new(self.0, self.1)
    }
}

impl<P> Located for (Point, P) {
    #[inline]
    fn point(&self) -> Point {
        self.0
    }
}

/// One of the four children produced by [`Region::subdivide`].
///
/// The discriminant is the child's offset from the first child slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Left of and above the midpoint, midlines included.
    TopLeft = 0,
    /// Right of the vertical midline, above or on the horizontal one.
    TopRight = 1,
    /// Left of or on the vertical midline, below the horizontal one.
    BottomLeft = 2,
    /// Right of and below both midlines.
    BottomRight = 3,
}

impl Quadrant {
    /// All quadrants in child-slot order.
    pub const ALL: [Self; 4] = [
        Self::TopLeft,
        Self::TopRight,
        Self::BottomLeft,
        Self::BottomRight,
    ];

    /// Offset of this quadrant from its parent's first child slot.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Quadrant::index`]; `None` for offsets past 3.
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::TopLeft),
            1 => Some(Self::TopRight),
            2 => Some(Self::BottomLeft),
            3 => Some(Self::BottomRight),
            _ => None,
        }
    }

    /// The single-member [`Quadrants`] set for this quadrant.
    #[inline]
    pub const fn flag(self) -> Quadrants {
        Quadrants::from_bits_truncate(1 << self.index())
    }
}

bitflags::bitflags! {
    /// A set of quadrants, used to record which children of a node a query must visit.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Quadrants: u8 {
        /// [`Quadrant::TopLeft`].
        const TOP_LEFT     = 0b0001;
        /// [`Quadrant::TopRight`].
        const TOP_RIGHT    = 0b0010;
        /// [`Quadrant::BottomLeft`].
        const BOTTOM_LEFT  = 0b0100;
        /// [`Quadrant::BottomRight`].
        const BOTTOM_RIGHT = 0b1000;
    }
}

impl Quadrants {
    /// The member with the lowest child-slot offset.
    pub fn first(self) -> Option<Quadrant> {
        Quadrant::from_index(self.bits().trailing_zeros() as usize)
    }

    /// Remove and return the member with the lowest child-slot offset.
    pub fn pop_first(&mut self) -> Option<Quadrant> {
        let q = self.first()?;
        self.remove(q.flag());
        Some(q)
    }
}

/// An immutable axis-aligned rectangle, inclusive on all four edges.
///
/// Invariant: `min_x <= max_x` and `min_y <= max_y`. A region may be a single
/// line or point; only the root region of a tree must have positive extent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    min_x: Coord,
    min_y: Coord,
    max_x: Coord,
    max_y: Coord,
}

impl Region {
    /// Create a region from its top-left and bottom-right corners.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvertedRegion`] if a minimum exceeds its maximum.
    pub const fn try_new(
        min_x: Coord,
        min_y: Coord,
        max_x: Coord,
        max_y: Coord,
    ) -> Result<Self, ConfigError> {
        if min_x > max_x || min_y > max_y {
            return Err(ConfigError::InvertedRegion);
        }
        Ok(Self {
            min_x,
            min_y,
            max_x,
            max_y,
        })
    }

    /// Create a region from its top-left and bottom-right corners.
    ///
    /// Meant for `const` items, where a bad region becomes a compile error.
    ///
    /// # Panics
    ///
    /// If a minimum exceeds its maximum.
    pub const fn new(min_x: Coord, min_y: Coord, max_x: Coord, max_y: Coord) -> Self {
        match Self::try_new(min_x, min_y, max_x, max_y) {
            Ok(region) => region,
            Err(_) => panic!("region minimum exceeds maximum"),
        }
    }

    /// A region anchored at the origin spanning `0..=width` by `0..=height`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::DegenerateRegion`] if either side is zero.
    pub const fn try_from_width_height(width: Coord, height: Coord) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::DegenerateRegion);
        }
        Ok(Self {
            min_x: 0,
            min_y: 0,
            max_x: width,
            max_y: height,
        })
    }

    /// A region anchored at the origin spanning `0..=width` by `0..=height`.
    ///
    /// # Panics
    ///
    /// If either side is zero.
    pub const fn from_width_height(width: Coord, height: Coord) -> Self {
        match Self::try_from_width_height(width, height) {
            Ok(region) => region,
            Err(_) => panic!("region width and height must be positive"),
        }
    }

    /// Left edge.
    #[inline]
    pub const fn min_x(&self) -> Coord {
        self.min_x
    }

    /// Top edge.
    #[inline]
    pub const fn min_y(&self) -> Coord {
        self.min_y
    }

    /// Right edge.
    #[inline]
    pub const fn max_x(&self) -> Coord {
        self.max_x
    }

    /// Bottom edge.
    #[inline]
    pub const fn max_y(&self) -> Coord {
        self.max_y
    }

    /// Top-left corner.
    pub const fn top_left(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

    /// Bottom-right corner.
    pub const fn bottom_right(&self) -> Point {
        Point::new(self.max_x, self.max_y)
    }

    /// Distance between the left and right edges.
    #[inline]
    pub const fn width(&self) -> Coord {
        self.max_x - self.min_x
    }

    /// Distance between the top and bottom edges.
    #[inline]
    pub const fn height(&self) -> Coord {
        self.max_y - self.min_y
    }

    /// True if the region has no extent along either axis.
    pub const fn is_degenerate(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// The split point, rounded toward the top-left corner.
    pub const fn midpoint(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2,
            self.min_y + self.height() / 2,
        )
    }

    /// Whether `point` lies inside the region, edges included.
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        self.min_x <= point.x
            && point.x <= self.max_x
            && self.min_y <= point.y
            && point.y <= self.max_y
    }

    /// Whether `other` lies entirely inside this region.
    pub const fn contains_region(&self, other: &Self) -> bool {
        self.min_x <= other.min_x
            && other.max_x <= self.max_x
            && self.min_y <= other.min_y
            && other.max_y <= self.max_y
    }

    /// Whether the two regions share at least one point (touching edges count).
    #[inline]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.min_x <= other.max_x
            && other.min_x <= self.max_x
            && self.min_y <= other.max_y
            && other.min_y <= self.max_y
    }

    /// The quadrant that owns `point`.
    ///
    /// Left and top children own the midlines, so the answer is unique even
    /// though neighbouring child regions share their boundary.
    #[inline]
    pub const fn quadrant_of(&self, point: Point) -> Quadrant {
        let mid = self.midpoint();
        match (point.x > mid.x, point.y > mid.y) {
            (false, false) => Quadrant::TopLeft,
            (true, false) => Quadrant::TopRight,
            (false, true) => Quadrant::BottomLeft,
            (true, true) => Quadrant::BottomRight,
        }
    }

    /// The child region for quadrant `q`.
    pub const fn quadrant(&self, q: Quadrant) -> Self {
        let mid = self.midpoint();
        let (min_x, max_x) = match q {
            Quadrant::TopLeft | Quadrant::BottomLeft => (self.min_x, mid.x),
            Quadrant::TopRight | Quadrant::BottomRight => (mid.x, self.max_x),
        };
        let (min_y, max_y) = match q {
            Quadrant::TopLeft | Quadrant::TopRight => (self.min_y, mid.y),
            Quadrant::BottomLeft | Quadrant::BottomRight => (mid.y, self.max_y),
        };
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Split at the midpoint into `[top_left, top_right, bottom_left, bottom_right]`.
    pub const fn subdivide(&self) -> [Self; 4] {
        [
            self.quadrant(Quadrant::TopLeft),
            self.quadrant(Quadrant::TopRight),
            self.quadrant(Quadrant::BottomLeft),
            self.quadrant(Quadrant::BottomRight),
        ]
    }

    /// The quadrants that can own a point of `other`.
    ///
    /// Ownership follows [`quadrant_of`](Self::quadrant_of): a query that only touches a
    /// midline from the left or top does not select the children past it.
    pub fn overlapping_quadrants(&self, other: &Self) -> Quadrants {
        if !self.intersects(other) {
            return Quadrants::empty();
        }
        let mid = self.midpoint();
        let left = other.min_x <= mid.x;
        let right = other.max_x > mid.x;
        let top = other.min_y <= mid.y;
        let bottom = other.max_y > mid.y;

        let mut out = Quadrants::empty();
        out.set(Quadrants::TOP_LEFT, left && top);
        out.set(Quadrants::TOP_RIGHT, right && top);
        out.set(Quadrants::BOTTOM_LEFT, left && bottom);
        out.set(Quadrants::BOTTOM_RIGHT, right && bottom);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered_area(r: &Region) -> u64 {
        u64::from(r.width()) * u64::from(r.height())
    }

    #[test]
    fn from_width_height_anchors_at_origin() {
        let r = Region::from_width_height(1000, 500);
        assert_eq!(r.top_left(), Point::new(0, 0), "origin anchored");
        assert_eq!(r.bottom_right(), Point::new(1000, 500), "far corner");
        assert_eq!(
            Region::try_from_width_height(0, 10),
            Err(ConfigError::DegenerateRegion),
            "zero width rejected"
        );
        assert_eq!(
            Region::try_new(5, 0, 4, 10),
            Err(ConfigError::InvertedRegion),
            "inverted x rejected"
        );
    }

    #[test]
    fn subdivide_partitions_exactly() {
        let samples = [
            Region::new(0, 0, 1000, 1000),
            Region::new(3, 7, 10, 8),
            Region::new(0, 0, 1, 1),
            Region::new(5, 5, 5, 9),
            Region::new(0, 0, Coord::MAX, Coord::MAX),
        ];
        for r in samples {
            let [tl, tr, bl, br] = r.subdivide();
            // Union of the children is the parent.
            let union = Region::new(
                tl.min_x().min(bl.min_x()),
                tl.min_y().min(tr.min_y()),
                tr.max_x().max(br.max_x()),
                bl.max_y().max(br.max_y()),
            );
            assert_eq!(union, r, "bounding box of children for {r:?}");
            // Interiors never overlap, so the areas add up exactly.
            let total: u64 = [tl, tr, bl, br].iter().map(covered_area).sum();
            assert_eq!(total, covered_area(&r), "area partition for {r:?}");
            for child in [tl, tr, bl, br] {
                assert!(r.contains_region(&child), "{child:?} inside {r:?}");
            }
        }
    }

    #[test]
    fn midline_belongs_to_left_and_top() {
        let r = Region::new(0, 0, 10, 10);
        assert_eq!(r.midpoint(), Point::new(5, 5), "midpoint rounds down");
        assert_eq!(r.quadrant_of(Point::new(5, 5)), Quadrant::TopLeft, "center");
        assert_eq!(r.quadrant_of(Point::new(6, 5)), Quadrant::TopRight, "right of midline");
        assert_eq!(r.quadrant_of(Point::new(5, 6)), Quadrant::BottomLeft, "below midline");
        assert_eq!(r.quadrant_of(Point::new(6, 6)), Quadrant::BottomRight, "past both");
        let odd = Region::new(0, 0, 9, 9);
        assert_eq!(odd.midpoint(), Point::new(4, 4), "odd extent rounds down");
    }

    #[test]
    fn owning_quadrant_contains_point() {
        let r = Region::new(2, 3, 17, 40);
        for y in r.min_y()..=r.max_y() {
            for x in r.min_x()..=r.max_x() {
                let p = Point::new(x, y);
                let q = r.quadrant_of(p);
                assert!(r.quadrant(q).contains(p), "{p:?} in its quadrant {q:?}");
            }
        }
    }

    #[test]
    fn intersects_counts_touching_edges() {
        let a = Region::new(0, 0, 10, 10);
        assert!(a.intersects(&Region::new(10, 10, 20, 20)), "corner touch");
        assert!(!a.intersects(&Region::new(11, 0, 20, 10)), "disjoint");
        assert!(a.intersects(&Region::new(2, 2, 3, 3)), "nested");
    }

    #[test]
    fn overlapping_quadrants_selects_children() {
        let r = Region::new(0, 0, 100, 100);
        assert_eq!(
            r.overlapping_quadrants(&Region::new(0, 0, 10, 10)),
            Quadrants::TOP_LEFT,
            "corner query"
        );
        assert_eq!(
            r.overlapping_quadrants(&Region::new(60, 0, 70, 100)),
            Quadrants::TOP_RIGHT | Quadrants::BOTTOM_RIGHT,
            "right strip"
        );
        assert_eq!(
            r.overlapping_quadrants(&Region::new(40, 40, 60, 60)),
            Quadrants::all(),
            "center"
        );
        assert_eq!(
            r.overlapping_quadrants(&Region::new(200, 200, 300, 300)),
            Quadrants::empty(),
            "disjoint"
        );
    }

    #[test]
    fn query_ending_on_midline_stays_left_and_top() {
        let r = Region::new(0, 0, 100, 100);
        // Midline points belong to the top-left child, so nothing past them is selected.
        assert_eq!(
            r.overlapping_quadrants(&Region::new(0, 0, 50, 50)),
            Quadrants::TOP_LEFT,
            "both edges on the midlines"
        );
        assert_eq!(
            r.overlapping_quadrants(&Region::new(50, 0, 51, 10)),
            Quadrants::TOP_LEFT | Quadrants::TOP_RIGHT,
            "straddling the vertical midline"
        );
        assert_eq!(
            r.overlapping_quadrants(&Region::new(0, 50, 10, 100)),
            Quadrants::TOP_LEFT | Quadrants::BOTTOM_LEFT,
            "starting on the horizontal midline"
        );
    }

    #[test]
    fn quadrants_pop_in_slot_order() {
        let mut set = Quadrants::BOTTOM_RIGHT | Quadrants::TOP_RIGHT;
        assert_eq!(set.pop_first(), Some(Quadrant::TopRight), "lowest first");
        assert_eq!(set.pop_first(), Some(Quadrant::BottomRight), "then next");
        assert_eq!(set.pop_first(), None, "drained");
        for q in Quadrant::ALL {
            assert_eq!(Quadrant::from_index(q.index()), Some(q), "index round trip");
            assert_eq!(q.flag().first(), Some(q), "flag round trip");
        }
    }
}
