// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Implementation of the `daac build` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::BuildArgs;
use crate::dictionary;
use crate::error::{self, Error, ExitCode};
use crate::store::{self, FILE_EXTENSION};

/// Read the dictionary, build the automaton and store it.
pub fn run(args: &BuildArgs) -> Result<ExitCode> {
    let output = output_path(args)?;
    let dictionary = dictionary::load(&args.dictionary, args.with_values)?;
    let automaton = dictionary.build()?;
    store::save(&automaton, &output)?;

    println!(
        "{}: {} patterns, {} nodes",
        output.display(),
        dictionary.len(),
        automaton.num_units()
    );
    Ok(ExitCode::Success)
}

/// `--output`, or the dictionary path with the store extension.
pub fn output_path(args: &BuildArgs) -> error::Result<PathBuf> {
    let output = match &args.output {
        Some(path) => path.clone(),
        None => args.dictionary.with_extension(FILE_EXTENSION),
    };
    if output == args.dictionary {
        return Err(Error::Argument(format!(
            "output {} would overwrite the dictionary",
            output.display()
        )));
    }
    Ok(output)
}

#[cfg(test)]
#[path = "cmd_build_tests.rs"]
mod tests;
