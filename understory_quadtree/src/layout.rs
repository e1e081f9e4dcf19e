// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Index arithmetic for a quaternary tree stored breadth-first in one array.
//!
//! ```text
//! index   0      1   2   3   4     5 ..= 8     9 ..= 12    ...
//! node    root   TL  TR  BL  BR    TL.*        TR.*        ...
//! ```
//!
//! Children of node `i` occupy `4i + 1 ..= 4i + 4` in [`Quadrant`] order, and the
//! parent of `i > 0` is `(i - 1) / 4`. With `4^k` slots the last level is only
//! partly allocated, so callers check each child slot against the node count.

use crate::types::Quadrant;

/// Upper bound on the depth of any node addressable by a `usize` index.
pub const MAX_DEPTH: usize = (usize::BITS / 2) as usize;

/// True if `n == 4^k` for some `k >= 0`.
pub const fn is_power_of_four(n: usize) -> bool {
    n.is_power_of_two() && n.trailing_zeros().is_multiple_of(2)
}

/// Parent slot of `index`.
///
/// The root maps to itself, so check `index != 0` before treating the result as a parent.
#[inline]
pub const fn parent_index(index: usize) -> usize {
    if index == 0 { 0 } else { (index - 1) / 4 }
}

/// First of the four contiguous child slots of `index`.
///
/// Saturates instead of overflowing; a saturated slot is never below a valid node count.
#[inline]
pub const fn children_index(index: usize) -> usize {
    index.saturating_mul(4).saturating_add(1)
}

/// Slot of the child of `index` in quadrant `q`.
#[inline]
pub const fn child_index(index: usize, q: Quadrant) -> usize {
    children_index(index).saturating_add(q.index())
}

/// Which quadrant of its parent `index` occupies. `None` for the root.
pub const fn quadrant_in_parent(index: usize) -> Option<Quadrant> {
    if index == 0 {
        None
    } else {
        Quadrant::from_index((index - 1) % 4)
    }
}

/// True if the children of `index` would fall outside an array of `count` nodes.
#[inline]
pub const fn is_leaf_level(index: usize, count: usize) -> bool {
    children_index(index) >= count
}

/// Number of levels between the root and `index`.
pub const fn depth(index: usize) -> usize {
    let mut index = index;
    let mut depth = 0;
    while index != 0 {
        index = parent_index(index);
        depth += 1;
    }
    depth
}
