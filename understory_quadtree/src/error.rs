// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use thiserror::Error;

use crate::types::Point;

/// A tree configuration or region that can't produce a usable tree.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The node count is not `4^k` for any `k`.
    #[error("node count {count} is not a power of 4")]
    NodeCountNotPowerOfFour {
        /// The rejected node count.
        count: usize,
    },
    /// Nodes must hold at least one element.
    #[error("per-node capacity must be at least 1")]
    ZeroCapacity,
    /// A region's minimum corner lies past its maximum corner.
    #[error("region minimum exceeds maximum")]
    InvertedRegion,
    /// The root region has zero width or height.
    #[error("region has zero width or height")]
    DegenerateRegion,
    /// A geometry value can't be represented with integer coordinates.
    #[error("region does not fit the integer coordinate space")]
    CoordinateOutOfRange,
}

/// Failure of a tree operation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The tree could not be constructed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    /// The element lies outside the root region. The tree never grows.
    #[error("point {point} lies outside the root region")]
    OutOfBounds {
        /// Position of the rejected element.
        point: Point,
    },
    /// Every node from the root down to the leaf level along the element's path is full.
    #[error("no free slot on the path to {point}")]
    CapacityExceeded {
        /// Position of the rejected element.
        point: Point,
    },
    /// Nothing matching was stored at the point.
    #[error("no matching element at {point}")]
    NotFound {
        /// Position that was searched.
        point: Point,
    },
}
