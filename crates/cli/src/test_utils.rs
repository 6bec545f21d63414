// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};

use crate::automaton::Automaton;

/// Pattern set used across tests: `{"a":0, "ab":1, "bc":2, "abc":3, "bcd":4, "efg":5}`.
pub const CLASSIC_KEYS: [&str; 6] = ["a", "ab", "bc", "abc", "bcd", "efg"];

/// Values for [`CLASSIC_KEYS`].
pub const CLASSIC_VALUES: [i32; 6] = [0, 1, 2, 3, 4, 5];

/// Automaton over [`CLASSIC_KEYS`].
pub fn classic_automaton() -> Automaton {
    Automaton::build(&CLASSIC_KEYS, &CLASSIC_VALUES).unwrap()
}

/// Writes `content` to `root/name` and returns the path.
pub fn write_file(root: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = root.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    path
}
