// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::automaton::ScanMode;

/// Multi-pattern byte matching with a double-array Aho-Corasick automaton
#[derive(Parser)]
#[command(name = "daac")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "DAAC_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Build an automaton from a dictionary file
    Build(BuildArgs),
    /// Scan inputs with a built automaton
    Scan(ScanArgs),
}

#[derive(clap::Args)]
pub struct BuildArgs {
    /// Dictionary file, one key per line
    #[arg(value_name = "DICT")]
    pub dictionary: PathBuf,

    /// Where to write the automaton (default: DICT with a `.daac` extension)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Lines are `key<TAB>value` instead of bare keys
    #[arg(long)]
    pub with_values: bool,
}

#[derive(clap::Args)]
pub struct ScanArgs {
    /// Automaton file written by `daac build`
    #[arg(short, long, value_name = "FILE")]
    pub automaton: PathBuf,

    /// Files to scan (`-` or none for stdin)
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Matching semantics (overrides config)
    #[arg(long, value_enum)]
    pub mode: Option<ScanMode>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Print only matched values (text format)
    #[arg(long)]
    pub values_only: bool,

    /// Reject inputs larger than this many bytes (overrides config)
    #[arg(long, value_name = "BYTES")]
    pub max_input_bytes: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
