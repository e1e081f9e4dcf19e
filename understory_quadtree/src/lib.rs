// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a fixed-capacity, non-allocating 2D point index.
//!
//! Understory Quadtree is for code that can't allocate or chase pointers: embedded
//! targets, real-time loops, and hot paths where the index size must be known up front.
//!
//! - The whole tree is one value: `COUNT` nodes of `CAP` elements each, sized by const generics.
//! - Nodes live in a breadth-first array; children are found by index arithmetic, not pointers.
//! - Insert, point query, range query, and removal touch only the nodes along the way.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Point, Region, StaticQuadTree};
//!
//! // 64 nodes of 3 elements each over a 1000×1000 plane.
//! let mut tree: StaticQuadTree<Point, 64, 3> =
//!     StaticQuadTree::new(Region::from_width_height(1000, 1000)).unwrap();
//!
//! for (x, y) in [(10, 10), (990, 990), (10, 990), (990, 10)] {
//!     tree.insert(Point::new(x, y)).unwrap();
//! }
//!
//! // Only the top-left quarter.
//! let hits: Vec<_> = tree.query_range(Region::new(0, 0, 500, 500)).collect();
//! assert_eq!(hits, [Point::new(10, 10)]);
//!
//! tree.remove(&Point::new(990, 990)).unwrap();
//! assert_eq!(tree.query_point(Point::new(990, 990)), None);
//! ```
//!
//! Payloads without their own coordinates can be paired with a [`Point`]:
//!
//! ```rust
//! use understory_quadtree::{Point, Region, StaticQuadTree};
//!
//! let mut tree: StaticQuadTree<(Point, u16), 16, 4> =
//!     StaticQuadTree::with_bounds(Region::new(0, 0, 255, 255));
//! tree.insert((Point::new(3, 4), 7)).unwrap();
//! assert_eq!(tree.query_point(Point::new(3, 4)), Some((Point::new(3, 4), 7)));
//! ```
//!
//! ## Placement policy
//!
//! - An element is stored in the shallowest node on its path that has a free slot.
//!   Nothing cascades: an insert never moves existing elements.
//! - A node whose children would fall past the end of the array is at the leaf level.
//!   When every node on the path is full the insert fails with [`Error::CapacityExceeded`].
//! - Removal compacts the node it removes from and nothing else.
//!
//! ## Regions and boundaries
//!
//! A [`Region`] is inclusive on all edges. [`Region::subdivide`] splits at the midpoint,
//! rounded toward the top-left; neighbouring children share the midlines, and a point on a
//! midline belongs to the left or top child. See [`Region::quadrant_of`].
//!
//! ## Configuration
//!
//! `COUNT` must be a power of 4 and `CAP` must be non-zero.
//! [`StaticQuadTree::new`] reports a bad configuration as a [`ConfigError`];
//! [`StaticQuadTree::with_bounds`] rejects it at compile time.
//!
//! ## Concurrency
//!
//! The tree does no synchronization of its own. Share it behind a lock if needed:
//! queries take `&self`, inserts and removals take `&mut self`.
//!
//! ## Features
//!
//! - `kurbo`: conversions between [`Region`]/[`Point`] and `kurbo::Rect`/`kurbo::Point`.
//! - `std` / `libm`: forwarded to Kurbo to pick its float backend.

#![no_std]

mod bucket;
pub mod error;
pub mod layout;
pub mod query;
pub mod tree;
pub mod types;

#[cfg(feature = "kurbo")]
mod kurbo_compat;

pub use error::{ConfigError, Error};
pub use query::{NodeWalk, Path, RangeQuery};
pub use tree::StaticQuadTree;
pub use types::{Coord, Located, Point, Quadrant, Quadrants, Region};
