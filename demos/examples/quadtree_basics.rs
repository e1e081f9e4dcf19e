// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree basics.
//!
//! Insert until a path fills up, run point and range queries, and remove.
//! Set `RUST_LOG=understory_quadtree=trace` to watch nodes being visited.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_basics`

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Error, Point, Region, StaticQuadTree};

#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct Marker {
    at: Point,
    id: u16,
}

impl understory_quadtree::Located for Marker {
    fn point(&self) -> Point {
        self.at
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut tree: StaticQuadTree<Marker, 16, 2> =
        match StaticQuadTree::new(Region::from_width_height(1000, 1000)) {
            Ok(tree) => tree,
            Err(e) => {
                warn!("{e}");
                return;
            }
        };

    // Everything lands near the top-left corner, so one path fills up quickly.
    for id in 0..8 {
        let at = Point::new(10 + u32::from(id), 10);
        match tree.insert(Marker { at, id }) {
            Ok(()) => info!(id, %at, "inserted"),
            Err(e @ Error::CapacityExceeded { .. }) => warn!(id, "{e}"),
            Err(e) => warn!(id, "unexpected: {e}"),
        }
    }
    if let Err(e) = tree.insert(Marker {
        at: Point::new(2000, 5),
        id: 99,
    }) {
        warn!("{e}");
    }

    for index in 0..StaticQuadTree::<Marker, 16, 2>::NODE_COUNT {
        let held = tree.node_elements(index);
        if !held.is_empty() {
            info!(index, region = ?tree.node_region(index), ?held, "node");
        }
    }

    let probe = Point::new(12, 10);
    info!(?probe, hit = ?tree.query_point(probe), "point query");

    let query = Region::new(0, 0, 12, 20);
    let hits: Vec<_> = tree.query_range(query).map(|m| m.id).collect();
    info!(rect = ?kurbo::Rect::from(query), ?hits, "range query");

    if let Ok(removed) = tree.remove_at(probe) {
        info!(?removed, "removed");
    }
    // The freed slot is reused before anything deeper.
    match tree.insert(Marker {
        at: Point::new(900, 900),
        id: 100,
    }) {
        Ok(()) => info!(len = tree.len(), "reinserted"),
        Err(e) => warn!("{e}"),
    }
}
