// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Failure-link construction.
//!
//! `fail[n]` is the node for the longest proper suffix of `n`'s path that is
//! also a path in the trie. Nodes are visited breadth-first, so the link of a
//! parent is final before any of its children need it.

use std::collections::VecDeque;

use crate::error::Result;
use crate::trie::{Cursor, DoubleArray, ROOT_NODE_ID};

/// Build the failure-path array for a trie array.
///
/// The result has one entry per trie unit. Entries of units that are not
/// reachable nodes are left pointing at the root.
pub fn build_failure_path(trie_array: &[u32]) -> Result<Vec<u32>> {
    let trie = DoubleArray::new(trie_array)?;
    let fail_path = compute(&trie);
    tracing::debug!(units = fail_path.len(), "built fail path");
    Ok(fail_path)
}

pub(crate) fn compute(trie: &DoubleArray<'_>) -> Vec<u32> {
    let mut fail = vec![ROOT_NODE_ID; trie.num_units()];
    fail[ROOT_NODE_ID as usize] = ROOT_NODE_ID;

    let mut queue: VecDeque<Cursor> = VecDeque::new();
    queue.push_back(trie.root());

    while let Some(current) = queue.pop_front() {
        for byte in 0..=u8::MAX {
            let mut next = current;
            if !trie.try_traverse(&mut next, byte) {
                continue;
            }

            fail[next.node_id() as usize] = if current.is_root() {
                ROOT_NODE_ID
            } else {
                follow(trie, &fail, current, byte)
            };

            queue.push_back(next);
        }
    }

    fail
}

/// Walk `current`'s failure chain to the first node with a `byte`
/// transition and take it; the root when no such node exists.
fn follow(trie: &DoubleArray<'_>, fail: &[u32], current: Cursor, byte: u8) -> u32 {
    let mut prev = trie.cursor_at(fail[current.node_id() as usize]);
    while !prev.is_root() && !trie.has_transition(prev, byte) {
        prev = trie.cursor_at(fail[prev.node_id() as usize]);
    }
    // Fails only at the root without a transition, leaving the root.
    trie.try_traverse(&mut prev, byte);
    prev.node_id()
}

#[cfg(test)]
#[path = "fail_path_tests.rs"]
mod tests;
