// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `daac scan`.

use crate::prelude::*;

/// > Text output is one `path:end:value` line per match
#[test]
fn scan_reports_matches_as_text() {
    let project = Project::with_patterns(&["a", "ab", "bc", "abc", "bcd", "efg"]);
    project.file("input.txt", "abcdef");

    let stdout = project.scan_stdout(&["input.txt"], 0);
    assert_eq!(
        stdout,
        "input.txt:1:0\ninput.txt:2:1\ninput.txt:3:3\ninput.txt:3:2\ninput.txt:4:4\n"
    );
}

/// > --values-only prints bare values
#[test]
fn scan_values_only() {
    let project = Project::with_patterns(&["a", "ab", "bc", "abc", "bcd", "efg"]);
    project.file("input.txt", "abcdef");

    let stdout = project.scan_stdout(&["--values-only", "input.txt"], 0);
    assert_eq!(stdout, "0\n1\n3\n2\n4\n");
}

/// > Exit code 1 when nothing matches
#[test]
fn scan_without_matches_exits_one() {
    let project = Project::with_patterns(&["needle"]);
    project.file("input.txt", "haystack");

    let stdout = project.scan_stdout(&["input.txt"], 1);
    assert!(stdout.is_empty());
}

/// > Input is read from stdin when no paths are given
#[test]
fn scan_reads_stdin() {
    let project = Project::with_patterns(&["he", "she"]);

    project
        .scan(&[])
        .write_stdin("ushers")
        .assert()
        .success()
        .stdout("-:4:1\n-:4:0\n");
}

/// > Inputs are reported in command-line order
#[test]
fn scan_keeps_input_order() {
    let project = Project::with_patterns(&["x"]);
    project.file("b.txt", "x");
    project.file("a.txt", "xx");

    let stdout = project.scan_stdout(&["b.txt", "a.txt"], 0);
    assert_eq!(stdout, "b.txt:1:0\na.txt:1:0\na.txt:2:0\n");
}

/// > JSON output carries mode, total and per-input matches
#[test]
fn scan_json_output() {
    let project = Project::with_patterns(&["he", "she"]);
    project.file("input.txt", "she");

    let stdout = project.scan_stdout(&["-f", "json", "input.txt"], 0);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["mode"], "compatible");
    assert_eq!(json["total"], 2);
    assert_eq!(json["inputs"][0]["path"], "input.txt");
    assert_eq!(json["inputs"][0]["matches"][0]["end"], 3);
    assert_eq!(json["inputs"][0]["matches"][0]["value"], 1);
}

/// > --mode standard reports suffixes hidden behind a failed branch
#[test]
fn scan_standard_mode_differs_from_compatible() {
    let project = Project::with_patterns(&["abc", "b"]);
    project.file("input.txt", "abd");

    let compatible = project.scan_stdout(&["input.txt"], 0);
    assert_eq!(compatible, "input.txt:3:1\n");

    let standard = project.scan_stdout(&["--mode", "standard", "input.txt"], 0);
    assert_eq!(standard, "input.txt:2:1\n");
}

/// > Inputs over --max-input-bytes are rejected
#[test]
fn scan_rejects_oversized_input() {
    let project = Project::with_patterns(&["a"]);
    project.file("input.txt", "aaaaaaaa");

    project
        .scan(&["--max-input-bytes", "4", "input.txt"])
        .assert()
        .code(2)
        .stderr(predicates::str::contains("input.txt"));
}

/// > Exit code 3 when an input cannot be read
#[test]
fn scan_missing_input_fails() {
    let project = Project::with_patterns(&["a"]);

    project.scan(&["missing.txt"]).assert().code(3);
}

/// > Exit code 3 for a corrupt automaton file
#[test]
fn scan_rejects_corrupt_automaton() {
    let project = Project::empty();
    project.file("words.daac", "not an automaton");
    project.file("input.txt", "abc");

    project
        .scan(&["input.txt"])
        .assert()
        .code(3)
        .stderr(predicates::str::contains("words.daac"));
}

/// > Standard input can be named only once
#[test]
fn scan_rejects_repeated_stdin() {
    let project = Project::with_patterns(&["a"]);

    project
        .scan(&["-", "-"])
        .write_stdin("aaa")
        .assert()
        .code(2)
        .stderr(predicates::str::contains("only once"));
}
