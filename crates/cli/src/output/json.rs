// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use super::{InputMatches, total_matches};
use crate::automaton::ScanMode;

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Top-level JSON document.
#[derive(Debug, Serialize)]
struct ScanOutput<'a> {
    mode: ScanMode,
    total: usize,
    inputs: &'a [InputMatches],
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, mode: ScanMode, results: &[InputMatches]) -> std::io::Result<()> {
        let output = ScanOutput {
            mode,
            total: total_matches(results),
            inputs: results,
        };
        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)?;
        self.writer.flush()
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
