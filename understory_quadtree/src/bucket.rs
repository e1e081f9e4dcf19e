// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-capacity element storage for a single node.

/// Up to `CAP` elements kept densely in `items[..len]`.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Bucket<E, const CAP: usize> {
    items: [E; CAP],
    len: usize,
}

impl<E: Copy + Default, const CAP: usize> Bucket<E, CAP> {
    pub(crate) fn new() -> Self {
        Self {
            items: [E::default(); CAP],
            len: 0,
        }
    }
}

impl<E: Copy, const CAP: usize> Bucket<E, CAP> {
    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    #[cfg(test)]
    pub(crate) const fn is_full(&self) -> bool {
        self.len >= CAP
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[E] {
        &self.items[..self.len]
    }

    /// Append `item`, handing it back if the bucket is full.
    pub(crate) fn push(&mut self, item: E) -> Result<(), E> {
        match self.items.get_mut(self.len) {
            Some(slot) => {
                *slot = item;
                self.len += 1;
                Ok(())
            }
            None => Err(item),
        }
    }

    /// Position of the first element matching `pred`.
    pub(crate) fn position(&self, pred: impl Fn(&E) -> bool) -> Option<usize> {
        self.as_slice().iter().position(pred)
    }

    /// Remove the element at `pos`, moving the last element into its slot.
    ///
    /// `pos` must be below `len`.
    pub(crate) fn swap_remove(&mut self, pos: usize) -> E {
        debug_assert!(pos < self.len, "swap_remove past the occupied slots");
        let last = self.len - 1;
        self.items.swap(pos, last);
        self.len = last;
        self.items[last]
    }

    /// Forget every element. Stale values stay in the slots until overwritten.
    pub(crate) fn clear(&mut self) {
        self.len = 0;
    }
}
