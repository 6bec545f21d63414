// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! One line per match:
//! ```text
//! <path>:<end>:<value>
//! ```
//! or just `<value>` with `--values-only`.

use std::io::Write;

use super::{FormatOptions, InputMatches};

/// Text output formatter.
pub struct TextFormatter<W: Write> {
    writer: W,
    options: FormatOptions,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter.
    pub fn new(writer: W, options: FormatOptions) -> Self {
        Self { writer, options }
    }

    /// Write all matches of all inputs, in input order.
    pub fn write(&mut self, results: &[InputMatches]) -> std::io::Result<()> {
        for result in results {
            for m in &result.matches {
                if self.options.values_only {
                    writeln!(self.writer, "{}", m.value)?;
                } else {
                    writeln!(self.writer, "{}:{}:{}", result.path, m.end, m.value)?;
                }
            }
        }
        self.writer.flush()
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
