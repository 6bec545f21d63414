// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Double-array trie stored as a flat `u32` array.
//!
//! Every index of the array is a node id. [`DoubleArray`] borrows such an
//! array and exposes the traversal primitives the automaton needs: advance a
//! [`Cursor`] by one byte, test for a transition, read a node's value, and
//! place a cursor on an arbitrary node.

mod builder;
mod unit;

pub(crate) use builder::DoubleArrayBuilder;

use unit::{TERMINATOR, Unit, VACANT, byte_label};

use crate::error::{Error, Result};

/// Node id of the root (the empty string).
pub const ROOT_NODE_ID: u32 = 0;

/// Position in the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor {
    node_id: u32,
}

impl Cursor {
    pub fn node_id(self) -> u32 {
        self.node_id
    }

    pub fn is_root(self) -> bool {
        self.node_id == ROOT_NODE_ID
    }
}

/// Read-only view of a double-array trie.
#[derive(Debug, Clone, Copy)]
pub struct DoubleArray<'a> {
    units: &'a [u32],
}

impl<'a> DoubleArray<'a> {
    /// Wrap a trie array, checking that it can be traversed.
    pub fn new(units: &'a [u32]) -> Result<Self> {
        let Some(&root) = units.first() else {
            return Err(Error::InvalidTrie("trie array is empty".to_string()));
        };
        if Unit(root).is_leaf() {
            return Err(Error::InvalidTrie("root unit is a leaf".to_string()));
        }
        if u32::try_from(units.len()).is_err() {
            return Err(Error::InvalidTrie(format!(
                "trie array has {} units, more than node ids can address",
                units.len()
            )));
        }
        Ok(Self { units })
    }

    /// Wrap an array that already passed [`DoubleArray::new`].
    pub(crate) fn from_validated(units: &'a [u32]) -> Self {
        Self { units }
    }

    /// Number of units, which is also the node id bound.
    pub fn num_units(&self) -> usize {
        self.units.len()
    }

    pub fn root(&self) -> Cursor {
        Cursor {
            node_id: ROOT_NODE_ID,
        }
    }

    /// Place a cursor on `node_id`, which need not be reachable from the
    /// current position.
    pub fn cursor_at(&self, node_id: u32) -> Cursor {
        Cursor { node_id }
    }

    /// Whether `node_id` is the root or an inner node (not a leaf or vacant unit).
    pub fn is_node(&self, node_id: u32) -> bool {
        if node_id == ROOT_NODE_ID {
            return true;
        }
        self.unit(node_id)
            .is_some_and(|unit| !unit.is_leaf() && unit.label() != VACANT)
    }

    /// Advance `cursor` by `byte`. On failure the cursor is left unchanged.
    #[inline]
    pub fn try_traverse(&self, cursor: &mut Cursor, byte: u8) -> bool {
        match self.child(*cursor, byte_label(byte)) {
            Some(node_id) => {
                cursor.node_id = node_id;
                true
            }
            None => false,
        }
    }

    #[inline]
    pub fn has_transition(&self, cursor: Cursor, byte: u8) -> bool {
        self.child(cursor, byte_label(byte)).is_some()
    }

    /// Value stored at the cursor's node, if a key ends there.
    #[inline]
    pub fn value(&self, cursor: Cursor) -> Option<u32> {
        let unit = self.unit(cursor.node_id)?;
        if unit.is_leaf() || !unit.has_leaf() {
            return None;
        }
        let leaf = self.unit(unit.base() + TERMINATOR)?;
        leaf.is_leaf().then(|| leaf.value())
    }

    /// Value of `key` if it is one of the stored keys.
    pub fn exact_match(&self, key: &[u8]) -> Option<u32> {
        let mut cursor = self.root();
        for &byte in key {
            if !self.try_traverse(&mut cursor, byte) {
                return None;
            }
        }
        self.value(cursor)
    }

    #[inline]
    fn unit(&self, node_id: u32) -> Option<Unit> {
        self.units.get(node_id as usize).copied().map(Unit)
    }

    #[inline]
    fn child(&self, cursor: Cursor, label: u32) -> Option<u32> {
        let unit = self.unit(cursor.node_id)?;
        if unit.is_leaf() {
            return None;
        }
        let node_id = unit.base() + label;
        (self.unit(node_id)?.label() == label).then_some(node_id)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
