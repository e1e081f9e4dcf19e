// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree size.
//!
//! Build the 64-node, 3-per-node tree over a 1000×1000 plane and print how much
//! space the whole structure occupies. Nothing is allocated.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_size`

use understory_quadtree::{Region, StaticQuadTree};

type Tree = StaticQuadTree<i32, 64, 3>;

fn main() {
    let tree = Tree::with_bounds(Region::from_width_height(1000, 1000));
    println!("QuadTree occupies {} bytes", size_of_val(&tree));
    println!(
        "{} nodes x {} slots x {} bytes per element",
        Tree::NODE_COUNT,
        Tree::NODE_CAPACITY,
        size_of::<i32>()
    );
    println!("{tree:?}");
}
