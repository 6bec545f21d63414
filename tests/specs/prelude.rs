// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Test helpers for behavioral specifications.
//!
//! Provides a small DSL for driving the daac binary from a scratch directory.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::Command;
pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::{Predicate, PredicateBooleanExt};
use std::path::{Path, PathBuf};

/// Returns a Command configured to run the daac binary
pub fn daac_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("daac"));
    cmd.env_remove("DAAC_CONFIG").env_remove("DAAC_LOG");
    cmd
}

/// Scratch directory with a dictionary, inputs and an optional config.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    /// Empty scratch directory.
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Scratch directory with `words.txt` (one pattern per line) built into
    /// `words.daac`.
    pub fn with_patterns(patterns: &[&str]) -> Self {
        let project = Self::empty();
        let mut dictionary = patterns.join("\n");
        dictionary.push('\n');
        project.file("words.txt", &dictionary);
        project
            .daac(&["build", "words.txt", "-o", "words.daac"])
            .assert()
            .success();
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file relative to the project root.
    pub fn file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, content).unwrap();
        path
    }

    /// Runs daac with `args` inside the project directory.
    pub fn daac(&self, args: &[&str]) -> Command {
        let mut cmd = daac_cmd();
        cmd.args(args).current_dir(self.dir.path());
        cmd
    }

    /// Runs `daac scan -a words.daac` with extra args.
    pub fn scan(&self, args: &[&str]) -> Command {
        let mut cmd = self.daac(&["scan", "-a", "words.daac"]);
        cmd.args(args);
        cmd
    }

    /// Stdout of a scan, which must exit with `code`.
    pub fn scan_stdout(&self, args: &[&str], code: i32) -> String {
        let output = self.scan(args).assert().code(code).get_output().clone();
        String::from_utf8(output.stdout).unwrap()
    }
}
