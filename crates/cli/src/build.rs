// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trie construction entry points.

use crate::error::Result;
use crate::patterns::{SortedPatterns, prepare, prepare_indexed};
use crate::trie::DoubleArrayBuilder;

/// Build a trie array from `keys` and their `values`.
///
/// Fails on mismatched lengths, empty or duplicated keys, negative values,
/// or when the keys do not fit in the double-array address space.
pub fn build_trie<K: AsRef<[u8]>>(keys: &[K], values: &[i32]) -> Result<Vec<u32>> {
    build_sorted(DoubleArrayBuilder::new(), &prepare(keys, values)?)
}

/// Build a trie array where the value of `keys[i]` is `i`.
pub fn build_trie_from_keys<K: AsRef<[u8]>>(keys: &[K]) -> Result<Vec<u32>> {
    build_sorted(DoubleArrayBuilder::new(), &prepare_indexed(keys)?)
}

pub(crate) fn build_sorted(
    builder: DoubleArrayBuilder,
    patterns: &SortedPatterns<'_>,
) -> Result<Vec<u32>> {
    tracing::debug!(patterns = patterns.len(), "building trie");
    builder.build(patterns.keys(), patterns.values())
}

#[cfg(test)]
#[path = "build_tests.rs"]
mod tests;
