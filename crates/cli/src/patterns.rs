// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern set validation and ordering.
//!
//! The trie builder expects keys in byte-lexicographic order with their
//! values alongside. This module checks a submitted (keys, values) set and
//! produces that arrangement:
//! - key and value counts must agree
//! - keys must be non-empty and pairwise distinct
//! - values must be non-negative

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Keys sorted in byte-lexicographic order with their values in parallel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedPatterns<'a> {
    keys: Vec<&'a [u8]>,
    values: Vec<u32>,
}

impl<'a> SortedPatterns<'a> {
    /// Sorted keys.
    pub fn keys(&self) -> &[&'a [u8]] {
        &self.keys
    }

    /// Values, `values()[i]` belongs to `keys()[i]`.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Validate `keys`/`values` and sort them by key.
///
/// `values[i]` is the value of `keys[i]`. The first violation found is
/// returned; nothing is sorted in that case.
pub fn prepare<'a, K: AsRef<[u8]>>(keys: &'a [K], values: &[i32]) -> Result<SortedPatterns<'a>> {
    if keys.len() != values.len() {
        return Err(Error::SizeMismatch {
            keys: keys.len(),
            values: values.len(),
        });
    }

    let mut seen: HashMap<&[u8], usize> = HashMap::with_capacity(keys.len());
    for (index, key) in keys.iter().enumerate() {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(Error::EmptyKey { index });
        }
        if let Some(&first_index) = seen.get(key) {
            return Err(Error::DuplicateKey {
                key: String::from_utf8_lossy(key).into_owned(),
                index,
                first_index,
            });
        }
        seen.insert(key, index);
    }

    let mut checked = Vec::with_capacity(values.len());
    for (index, &value) in values.iter().enumerate() {
        match u32::try_from(value) {
            Ok(v) => checked.push(v),
            Err(_) => {
                return Err(Error::NegativeValue {
                    value,
                    key: String::from_utf8_lossy(keys[index].as_ref()).into_owned(),
                    index,
                });
            }
        }
    }

    // Keys are unique, so an unstable sort is deterministic.
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_unstable_by(|&x, &y| keys[x].as_ref().cmp(keys[y].as_ref()));

    Ok(SortedPatterns {
        keys: order.iter().map(|&i| keys[i].as_ref()).collect(),
        values: order.iter().map(|&i| checked[i]).collect(),
    })
}

/// Like [`prepare`], with the value of `keys[i]` set to `i`.
pub fn prepare_indexed<K: AsRef<[u8]>>(keys: &[K]) -> Result<SortedPatterns<'_>> {
    let values = (0..keys.len())
        .map(|i| {
            i32::try_from(i).map_err(|_| {
                Error::Argument(format!(
                    "too many keys: {} (max: {})",
                    keys.len(),
                    i32::MAX as u64 + 1
                ))
            })
        })
        .collect::<Result<Vec<_>>>()?;
    prepare(keys, &values)
}

#[cfg(test)]
#[path = "patterns_tests.rs"]
mod tests;
