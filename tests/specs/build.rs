// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `daac build`.

use crate::prelude::*;

/// > build reports pattern and node counts
#[test]
fn build_reports_summary() {
    let project = Project::empty();
    project.file("words.txt", "he\nshe\nhis\nhers\n");

    project
        .daac(&["build", "words.txt", "-o", "words.daac"])
        .assert()
        .success()
        .stdout(predicates::str::contains("words.daac: 4 patterns"));

    assert!(project.path().join("words.daac").exists());
}

/// > build creates missing output directories
#[test]
fn build_creates_output_directory() {
    let project = Project::empty();
    project.file("words.txt", "abc\n");

    project
        .daac(&["build", "words.txt", "-o", "out/nested/words.daac"])
        .assert()
        .success();

    assert!(project.path().join("out/nested/words.daac").exists());
}

/// > --with-values reads `key<TAB>value` lines
#[test]
fn build_with_values_uses_given_values() {
    let project = Project::empty();
    project.file("words.txt", "he\t10\nshe\t20\n");

    project
        .daac(&["build", "--with-values", "words.txt", "-o", "words.daac"])
        .assert()
        .success();
    project.file("input.txt", "she");

    let stdout = project.scan_stdout(&["input.txt"], 0);
    assert_eq!(stdout, "input.txt:3:20\ninput.txt:3:10\n");
}

/// > Exit code 2 for duplicate keys
#[test]
fn duplicate_key_fails() {
    let project = Project::empty();
    project.file("words.txt", "abc\nxyz\nabc\n");

    project
        .daac(&["build", "words.txt", "-o", "words.daac"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("duplicate"));

    assert!(!project.path().join("words.daac").exists());
}

/// > Exit code 2 for empty keys
#[test]
fn empty_key_fails() {
    let project = Project::empty();
    project.file("words.txt", "abc\n\nxyz\n");

    project
        .daac(&["build", "words.txt", "-o", "words.daac"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("empty"));
}

/// > Exit code 2 for negative values
#[test]
fn negative_value_fails() {
    let project = Project::empty();
    project.file("words.txt", "abc\t-1\n");

    project
        .daac(&["build", "--with-values", "words.txt", "-o", "words.daac"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("negative"));
}

/// > Exit code 3 when the dictionary cannot be read
#[test]
fn missing_dictionary_fails() {
    let project = Project::empty();

    project
        .daac(&["build", "missing.txt", "-o", "words.daac"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("missing.txt"));
}

/// > Without -o the automaton is written next to the dictionary
#[test]
fn build_defaults_output_to_dictionary_stem() {
    let project = Project::empty();
    project.file("words.txt", "abc\n");

    project
        .daac(&["build", "words.txt"])
        .assert()
        .success()
        .stdout(predicates::str::contains("words.daac: 1 patterns"));

    assert!(project.path().join("words.daac").exists());
    assert!(project.path().join("words.txt").exists());
}

/// > A dictionary named like the temp file is not clobbered
#[test]
fn build_keeps_dictionary_named_like_temp_file() {
    let project = Project::empty();
    project.file("words.tmp", "abc\n");

    project
        .daac(&["build", "words.tmp", "-o", "words.daac"])
        .assert()
        .success();

    assert_eq!(
        std::fs::read_to_string(project.path().join("words.tmp")).unwrap(),
        "abc\n"
    );
}
