// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Double-array construction from sorted keys.
//!
//! Nodes are placed breadth-first. Free units are kept in a doubly-linked
//! list; for each node the builder walks that list and takes the first
//! unused base at which every child label lands on a free unit.

use std::collections::VecDeque;

use super::unit::{MAX_BASE, MAX_LABEL, TERMINATOR, Unit, byte_label};
use crate::error::{Error, Result};

/// A node waiting for its children to be placed.
struct Pending {
    node_id: usize,
    lo: usize,
    hi: usize,
    depth: usize,
}

/// Keys `lo..hi` share the edge `label` below the current node.
struct Child {
    label: u32,
    lo: usize,
    hi: usize,
}

/// Units are handed out in blocks; only the newest blocks stay open for
/// placement, which bounds the search for a free base.
const BLOCK_SIZE: usize = 256;
const OPEN_BLOCKS: usize = 16;

/// End of the free-unit list.
const NIL: usize = usize::MAX;

pub(crate) struct DoubleArrayBuilder {
    units: Vec<Unit>,
    occupied: Vec<bool>,
    used_bases: Vec<bool>,
    /// Doubly-linked list of free units in open blocks, ascending.
    next_free: Vec<usize>,
    prev_free: Vec<usize>,
    free_head: usize,
    free_tail: usize,
    closed_blocks: usize,
    max_base: u32,
}

impl Default for DoubleArrayBuilder {
    fn default() -> Self {
        Self {
            units: vec![Unit::vacant()],
            occupied: vec![true],
            used_bases: vec![false],
            next_free: vec![NIL],
            prev_free: vec![NIL],
            free_head: NIL,
            free_tail: NIL,
            closed_blocks: 0,
            max_base: MAX_BASE,
        }
    }
}

impl DoubleArrayBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Lower the largest base the builder may assign.
    pub(crate) fn with_max_base(mut self, max_base: u32) -> Self {
        self.max_base = max_base.min(MAX_BASE);
        self
    }

    /// Build the unit array.
    ///
    /// `keys` must be sorted, unique and non-empty, and every value must fit
    /// in 31 bits.
    pub(crate) fn build(mut self, keys: &[&[u8]], values: &[u32]) -> Result<Vec<u32>> {
        debug_assert_eq!(keys.len(), values.len());
        debug_assert!(keys.windows(2).all(|w| w[0] < w[1]));

        let mut queue = VecDeque::new();
        if !keys.is_empty() {
            queue.push_back(Pending {
                node_id: 0,
                lo: 0,
                hi: keys.len(),
                depth: 0,
            });
        }

        let mut children = Vec::new();
        while let Some(pending) = queue.pop_front() {
            collect_children(keys, &pending, &mut children);
            let base = self.find_base(&children)?;
            let last_label = children.last().map_or(0, |c| c.label as usize);
            self.reserve(base + last_label + 1);

            let has_leaf = children.first().is_some_and(|c| c.label == TERMINATOR);
            let label = self.units[pending.node_id].label();
            self.units[pending.node_id] = Unit::node(label, base as u32, has_leaf);
            self.used_bases[base] = true;

            for child in &children {
                let node_id = base + child.label as usize;
                self.occupy(node_id);
                if child.label == TERMINATOR {
                    self.units[node_id] = Unit::leaf(values[child.lo]);
                } else {
                    self.units[node_id] = Unit::node(child.label, 0, false);
                    queue.push_back(Pending {
                        node_id,
                        lo: child.lo,
                        hi: child.hi,
                        depth: pending.depth + 1,
                    });
                }
            }
        }

        while self.units.len() > 1 && !self.occupied[self.units.len() - 1] {
            self.units.pop();
        }

        tracing::debug!(keys = keys.len(), units = self.units.len(), "built double array");
        Ok(self.units.into_iter().map(|unit| unit.0).collect())
    }

    /// First base, in free-list order, where every child lands on a free
    /// unit; past the end of the array when no open unit fits.
    fn find_base(&self, children: &[Child]) -> Result<usize> {
        let first_label = children.first().map_or(0, |c| c.label as usize);

        let mut unit = self.free_head;
        while unit != NIL {
            if unit > first_label {
                let base = unit - first_label;
                if base > self.max_base as usize {
                    return Err(self.too_large());
                }
                if !self.used_bases[base]
                    && children
                        .iter()
                        .all(|c| self.is_free(base + c.label as usize))
                {
                    return Ok(base);
                }
            }
            unit = self.next_free[unit];
        }

        let base = self.units.len();
        if base > self.max_base as usize {
            return Err(self.too_large());
        }
        Ok(base)
    }

    fn too_large(&self) -> Error {
        Error::TrieTooLarge {
            limit: self.max_base as usize + MAX_LABEL as usize + 1,
        }
    }

    fn is_free(&self, node_id: usize) -> bool {
        self.occupied.get(node_id).is_none_or(|&occupied| !occupied)
    }

    /// Grow the array to `len` units, appending the new ones to the free list.
    fn reserve(&mut self, len: usize) {
        let old_len = self.units.len();
        if old_len >= len {
            return;
        }
        self.units.resize(len, Unit::vacant());
        self.occupied.resize(len, false);
        self.used_bases.resize(len, false);
        self.next_free.resize(len, NIL);
        self.prev_free.resize(len, NIL);
        for node_id in old_len..len {
            self.link(node_id);
        }
        self.close_old_blocks();
    }

    /// Drop units of all but the newest blocks from the free list. They stay
    /// vacant for good.
    fn close_old_blocks(&mut self) {
        let num_blocks = self.units.len().div_ceil(BLOCK_SIZE);
        while self.closed_blocks + OPEN_BLOCKS < num_blocks {
            let start = self.closed_blocks * BLOCK_SIZE;
            for node_id in start..start + BLOCK_SIZE {
                if !self.occupied[node_id] {
                    self.unlink(node_id);
                }
            }
            self.closed_blocks += 1;
        }
    }

    fn occupy(&mut self, node_id: usize) {
        self.occupied[node_id] = true;
        self.unlink(node_id);
    }

    fn link(&mut self, node_id: usize) {
        self.prev_free[node_id] = self.free_tail;
        self.next_free[node_id] = NIL;
        if self.free_tail == NIL {
            self.free_head = node_id;
        } else {
            self.next_free[self.free_tail] = node_id;
        }
        self.free_tail = node_id;
    }

    /// Remove `node_id` from the free list; a no-op if it is not listed.
    fn unlink(&mut self, node_id: usize) {
        if self.prev_free[node_id] == NIL && self.free_head != node_id {
            return;
        }
        let (prev, next) = (self.prev_free[node_id], self.next_free[node_id]);
        if prev == NIL {
            self.free_head = next;
        } else {
            self.next_free[prev] = next;
        }
        if next == NIL {
            self.free_tail = prev;
        } else {
            self.prev_free[next] = prev;
        }
        self.prev_free[node_id] = NIL;
        self.next_free[node_id] = NIL;
    }
}

fn label_at(key: &[u8], depth: usize) -> u32 {
    key.get(depth).map_or(TERMINATOR, |&byte| byte_label(byte))
}

/// Group keys of `pending` by their label at `pending.depth`.
fn collect_children(keys: &[&[u8]], pending: &Pending, out: &mut Vec<Child>) {
    out.clear();
    let mut i = pending.lo;
    while i < pending.hi {
        let label = label_at(keys[i], pending.depth);
        let lo = i;
        i += 1;
        while i < pending.hi && label_at(keys[i], pending.depth) == label {
            i += 1;
        }
        out.push(Child { label, lo, hi: i });
    }
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
