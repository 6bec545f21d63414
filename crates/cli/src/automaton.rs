// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aho-Corasick automaton over a double-array trie.
//!
//! An [`Automaton`] owns a trie array and its failure-path array. Both are
//! checked once in [`Automaton::new`] and never change afterwards, so a single
//! instance can be scanned from any number of threads.

use serde::{Deserialize, Serialize};

use crate::build::build_trie;
use crate::error::{Error, Result};
use crate::fail_path::build_failure_path;
use crate::trie::{Cursor, DoubleArray, ROOT_NODE_ID};

/// How the scan recovers from a missing transition and collects output.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ScanMode {
    /// One failure hop per byte; output walk stops at the first node
    /// without a value. Matches the output of existing deployments.
    #[default]
    Compatible,
    /// Climb failure links until a transition exists or the root is
    /// reached; report every value on the failure chain.
    Standard,
}

/// A pattern value reported at a scan position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Match {
    /// Exclusive end offset of the match in the input.
    pub end: usize,
    /// Value of the matched pattern.
    pub value: u32,
}

/// Immutable (trie, failure path) pair ready for scanning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    trie: Box<[u32]>,
    fail_path: Box<[u32]>,
    mode: ScanMode,
}

impl Automaton {
    /// Assemble an automaton from a trie array and its failure-path array.
    ///
    /// The trie is validated first. An empty `fail_path` counts as missing.
    pub fn new(trie: Vec<u32>, fail_path: Vec<u32>) -> Result<Self> {
        let view = DoubleArray::new(&trie)?;
        if fail_path.is_empty() {
            return Err(Error::MissingFailPath);
        }
        if fail_path.len() != view.num_units() {
            return Err(Error::FailPathLength {
                expected: view.num_units(),
                actual: fail_path.len(),
            });
        }
        check_targets(&view, &fail_path)?;
        check_chains(&fail_path)?;

        Ok(Self {
            trie: trie.into_boxed_slice(),
            fail_path: fail_path.into_boxed_slice(),
            mode: ScanMode::default(),
        })
    }

    /// Build trie, failure path and automaton in one go.
    pub fn build<K: AsRef<[u8]>>(keys: &[K], values: &[i32]) -> Result<Self> {
        let trie = build_trie(keys, values)?;
        let fail_path = build_failure_path(&trie)?;
        Self::new(trie, fail_path)
    }

    /// Like [`Automaton::build`], with the value of `keys[i]` set to `i`.
    pub fn build_from_keys<K: AsRef<[u8]>>(keys: &[K]) -> Result<Self> {
        let trie = crate::build::build_trie_from_keys(keys)?;
        let fail_path = build_failure_path(&trie)?;
        Self::new(trie, fail_path)
    }

    pub fn with_scan_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn scan_mode(&self) -> ScanMode {
        self.mode
    }

    pub fn trie_array(&self) -> &[u32] {
        &self.trie
    }

    pub fn fail_path(&self) -> &[u32] {
        &self.fail_path
    }

    /// Number of trie units (node ids).
    pub fn num_units(&self) -> usize {
        self.trie.len()
    }

    /// Give back the two arrays, e.g. for persisting them.
    pub fn into_parts(self) -> (Vec<u32>, Vec<u32>) {
        (self.trie.into_vec(), self.fail_path.into_vec())
    }

    /// Values of all patterns ending at each input position, in scan order.
    pub fn find_all_matches(&self, input: &[u8]) -> Vec<u32> {
        let mut out = Vec::new();
        self.scan(input, |_, value| out.push(value));
        out
    }

    /// Like [`Automaton::find_all_matches`], with end offsets.
    pub fn find_matches(&self, input: &[u8]) -> Vec<Match> {
        let mut out = Vec::new();
        self.scan(input, |end, value| out.push(Match { end, value }));
        out
    }

    fn scan<F: FnMut(usize, u32)>(&self, input: &[u8], mut emit: F) {
        let trie = DoubleArray::from_validated(&self.trie);
        let mut cursor = trie.root();

        for (i, &byte) in input.iter().enumerate() {
            let end = i + 1;
            match self.mode {
                ScanMode::Compatible => {
                    if !trie.try_traverse(&mut cursor, byte) {
                        cursor = self.fail_of(&trie, cursor);
                        trie.try_traverse(&mut cursor, byte);
                    }
                    self.emit_until_valueless(&trie, cursor, end, &mut emit);
                }
                ScanMode::Standard => {
                    while !trie.try_traverse(&mut cursor, byte) && !cursor.is_root() {
                        cursor = self.fail_of(&trie, cursor);
                    }
                    self.emit_chain(&trie, cursor, end, &mut emit);
                }
            }
        }
    }

    #[inline]
    fn fail_of(&self, trie: &DoubleArray<'_>, cursor: Cursor) -> Cursor {
        trie.cursor_at(self.fail_path[cursor.node_id() as usize])
    }

    fn emit_until_valueless<F: FnMut(usize, u32)>(
        &self,
        trie: &DoubleArray<'_>,
        cursor: Cursor,
        end: usize,
        emit: &mut F,
    ) {
        let Some(value) = trie.value(cursor) else {
            return;
        };
        emit(end, value);

        let mut node = self.fail_of(trie, cursor);
        while let Some(value) = trie.value(node) {
            emit(end, value);
            node = self.fail_of(trie, node);
        }
    }

    fn emit_chain<F: FnMut(usize, u32)>(
        &self,
        trie: &DoubleArray<'_>,
        cursor: Cursor,
        end: usize,
        emit: &mut F,
    ) {
        let mut node = cursor;
        while !node.is_root() {
            if let Some(value) = trie.value(node) {
                emit(end, value);
            }
            node = self.fail_of(trie, node);
        }
    }
}

/// Every entry must name the root or a trie node.
fn check_targets(trie: &DoubleArray<'_>, fail_path: &[u32]) -> Result<()> {
    if fail_path[ROOT_NODE_ID as usize] != ROOT_NODE_ID {
        return Err(Error::FailPathTarget {
            node: ROOT_NODE_ID as usize,
            target: fail_path[ROOT_NODE_ID as usize],
            units: trie.num_units(),
        });
    }
    for (node, &target) in fail_path.iter().enumerate() {
        if !trie.is_node(target) {
            return Err(Error::FailPathTarget {
                node,
                target,
                units: trie.num_units(),
            });
        }
    }
    Ok(())
}

/// Every failure chain must end at the root, so scans always terminate.
fn check_chains(fail_path: &[u32]) -> Result<()> {
    const UNSEEN: u8 = 0;
    const ON_PATH: u8 = 1;
    const DONE: u8 = 2;

    let mut state = vec![UNSEEN; fail_path.len()];
    state[ROOT_NODE_ID as usize] = DONE;
    let mut path = Vec::new();

    for start in 0..fail_path.len() {
        let mut node = start;
        while state[node] == UNSEEN {
            state[node] = ON_PATH;
            path.push(node);
            node = fail_path[node] as usize;
        }
        if state[node] == ON_PATH {
            return Err(Error::FailPathCycle { node: start });
        }
        for visited in path.drain(..) {
            state[visited] = DONE;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "automaton_tests.rs"]
mod tests;
