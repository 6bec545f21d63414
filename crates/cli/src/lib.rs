// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Double-array Aho-Corasick automaton.
//!
//! Build a trie array with [`build_trie`], its failure-path array with
//! [`build_failure_path`], assemble both into an [`Automaton`], then call
//! [`Automaton::find_all_matches`] as often as needed, from any thread.

pub mod automaton;
pub mod build;
pub mod cli;
pub mod cmd_build;
pub mod cmd_scan;
pub mod config;
pub mod dictionary;
pub mod discovery;
pub mod error;
pub mod fail_path;
pub mod output;
pub mod patterns;
pub mod reader;
pub mod store;
pub mod trie;

pub use automaton::{Automaton, Match, ScanMode};
pub use build::{build_trie, build_trie_from_keys};
pub use config::Config;
pub use dictionary::Dictionary;
pub use error::{Error, ErrorKind, ExitCode, Result};
pub use fail_path::build_failure_path;
pub use patterns::{SortedPatterns, prepare, prepare_indexed};
pub use trie::{Cursor, DoubleArray, ROOT_NODE_ID};

#[cfg(test)]
pub mod test_utils;
