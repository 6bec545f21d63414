// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for `daac.toml` handling.

use crate::prelude::*;

/// > scan.mode in daac.toml selects the scan mode
#[test]
fn config_selects_scan_mode() {
    let project = Project::with_patterns(&["abc", "b"]);
    project.file("daac.toml", "version = 1\n[scan]\nmode = \"standard\"\n");
    project.file("input.txt", "abd");

    let stdout = project.scan_stdout(&["input.txt"], 0);
    assert_eq!(stdout, "input.txt:2:1\n");
}

/// > --mode overrides the config file
#[test]
fn flag_overrides_config_mode() {
    let project = Project::with_patterns(&["abc", "b"]);
    project.file("daac.toml", "version = 1\n[scan]\nmode = \"standard\"\n");
    project.file("input.txt", "abd");

    let stdout = project.scan_stdout(&["--mode", "compatible", "input.txt"], 0);
    assert_eq!(stdout, "input.txt:3:1\n");
}

/// > -C <FILE> specifies the config file
#[test]
fn explicit_config_flag_works() {
    let project = Project::with_patterns(&["abc", "b"]);
    project.file("custom.toml", "version = 1\n[scan]\nmode = \"standard\"\n");
    project.file("input.txt", "abd");

    let stdout = project
        .daac(&["-C", "custom.toml", "scan", "-a", "words.daac", "input.txt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    assert_eq!(String::from_utf8(stdout).unwrap(), "input.txt:2:1\n");
}

/// > DAAC_CONFIG sets the config file location
#[test]
fn env_config_sets_path() {
    let project = Project::with_patterns(&["abc", "b"]);
    let config = project.file("custom.toml", "version = 1\n[scan]\nmode = \"standard\"\n");
    project.file("input.txt", "abd");

    project
        .scan(&["input.txt"])
        .env("DAAC_CONFIG", &config)
        .assert()
        .success()
        .stdout("input.txt:2:1\n");
}

/// > Unknown keys are warnings
#[test]
fn unknown_config_key_warns() {
    let project = Project::with_patterns(&["a"]);
    project.file("daac.toml", "version = 1\nunknown_key = true\n");
    project.file("input.txt", "a");

    project
        .scan(&["input.txt"])
        .assert()
        .success()
        .stderr(predicates::str::contains("unrecognized"));
}

/// > Unsupported config versions are rejected
#[test]
fn unsupported_version_fails() {
    let project = Project::with_patterns(&["a"]);
    project.file("daac.toml", "version = 99\n");
    project.file("input.txt", "a");

    project.scan(&["input.txt"]).assert().code(2);
}

/// > A missing explicit config file is an error
#[test]
fn missing_explicit_config_fails() {
    let project = Project::with_patterns(&["a"]);
    project.file("input.txt", "a");

    project
        .daac(&["-C", "nope.toml", "scan", "-a", "words.daac", "input.txt"])
        .assert()
        .code(2);
}
