// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for scan results.

pub mod json;
pub mod text;

use std::path::Path;

use serde::Serialize;

use crate::automaton::Match;

/// Matches found in one scanned input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMatches {
    /// Input path as given on the command line (`-` for stdin).
    pub path: String,
    /// Matches in scan order.
    pub matches: Vec<Match>,
}

impl InputMatches {
    pub fn new(path: &Path, matches: Vec<Match>) -> Self {
        Self {
            path: path.display().to_string(),
            matches,
        }
    }
}

/// Total number of matches across inputs.
pub fn total_matches(results: &[InputMatches]) -> usize {
    results.iter().map(|r| r.matches.len()).sum()
}

/// Output formatting options.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// Print only pattern values, one per line.
    pub values_only: bool,
}
