// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `daac scan` command.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::Result;
use rayon::prelude::*;

use crate::automaton::{Automaton, ScanMode};
use crate::cli::{Cli, OutputFormat, ScanArgs};
use crate::config::{self, Config};
use crate::discovery::resolve_config;
use crate::error::{self, Error, ExitCode};
use crate::output::json::JsonFormatter;
use crate::output::text::TextFormatter;
use crate::output::{FormatOptions, InputMatches, total_matches};
use crate::reader::{InputReader, STDIN_PATH};
use crate::store;

/// Scan settings after merging config and flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanSettings {
    pub mode: ScanMode,
    pub max_input_bytes: u64,
}

impl ScanSettings {
    /// Flags win over the config file.
    pub fn resolve(config: &Config, args: &ScanArgs) -> Self {
        Self {
            mode: args.mode.unwrap_or(config.scan.mode),
            max_input_bytes: args.max_input_bytes.unwrap_or(config.scan.max_input_bytes),
        }
    }
}

pub fn run(cli: &Cli, args: &ScanArgs) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let config = match resolve_config(cli.config.as_deref(), &cwd)? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            config::load(&path)?
        }
        None => Config::default(),
    };
    let settings = ScanSettings::resolve(&config, args);

    let automaton = store::load(&args.automaton)?.with_scan_mode(settings.mode);
    let inputs = if args.inputs.is_empty() {
        vec![PathBuf::from(STDIN_PATH)]
    } else {
        args.inputs.clone()
    };

    let reader = InputReader::with_max_size(settings.max_input_bytes);
    let results = scan_inputs(&automaton, &reader, &inputs)?;

    let stdout = std::io::stdout();
    let writer = BufWriter::new(stdout.lock());
    match args.format {
        OutputFormat::Text => {
            let options = FormatOptions {
                values_only: args.values_only,
            };
            TextFormatter::new(writer, options).write(&results)?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(writer).write(settings.mode, &results)?;
        }
    }

    if total_matches(&results) > 0 {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::NoMatch)
    }
}

/// Scan every input against one shared automaton, in parallel.
///
/// Results keep the order of `inputs`. The first read error is returned.
/// Standard input can be named at most once.
pub fn scan_inputs(
    automaton: &Automaton,
    reader: &InputReader,
    inputs: &[PathBuf],
) -> error::Result<Vec<InputMatches>> {
    let stdin_count = inputs
        .iter()
        .filter(|path| path.as_os_str() == STDIN_PATH)
        .count();
    if stdin_count > 1 {
        return Err(Error::Argument(format!(
            "standard input (`{}`) given {} times; it can be scanned only once",
            STDIN_PATH, stdin_count
        )));
    }

    inputs
        .par_iter()
        .map(|path| scan_one(automaton, reader, path))
        .collect()
}

fn scan_one(automaton: &Automaton, reader: &InputReader, path: &Path) -> error::Result<InputMatches> {
    let content = reader.read(path)?;
    let matches = automaton.find_matches(&content.bytes);
    tracing::debug!(
        path = %path.display(),
        bytes = content.bytes.len(),
        matches = matches.len(),
        "scanned input"
    );
    Ok(InputMatches::new(&content.path, matches))
}

#[cfg(test)]
#[path = "cmd_scan_tests.rs"]
mod tests;
