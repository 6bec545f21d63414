// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles daac.toml parsing with version validation and unknown key warnings.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use serde::Deserialize;

use crate::automaton::ScanMode;
use crate::error::{Error, Result};
use crate::reader::MAX_FILE_SIZE;

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[serde(default)]
    scan: Option<toml::Value>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Scan settings.
    pub scan: ScanConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: SUPPORTED_VERSION,
            scan: ScanConfig::default(),
        }
    }
}

/// `[scan]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanConfig {
    /// Matching semantics (default: "compatible").
    #[serde(default)]
    pub mode: ScanMode,

    /// Inputs larger than this are rejected.
    #[serde(default = "ScanConfig::default_max_input_bytes")]
    pub max_input_bytes: u64,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mode: ScanMode::default(),
            max_input_bytes: Self::default_max_input_bytes(),
        }
    }
}

impl ScanConfig {
    pub(crate) fn default_max_input_bytes() -> u64 {
        MAX_FILE_SIZE
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "daac.toml";

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "scan"];

/// Known `[scan]` keys in the config.
const KNOWN_SCAN_KEYS: &[&str] = &["mode", "max_input_bytes"];

/// Load config from a file, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content, warning on unknown keys.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let invalid = |message: String| Error::Config {
        message,
        path: Some(path.to_path_buf()),
    };

    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| invalid(e.to_string()))?;
    let version = version_check
        .version
        .ok_or_else(|| invalid("missing required field: version".to_string()))?;
    check_version(version, path)?;

    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| invalid(e.to_string()))?;

    let mut unknown_keys = BTreeSet::new();
    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            unknown_keys.insert(key.clone());
        }
    }

    let scan = match flexible.scan {
        Some(toml::Value::Table(t)) => {
            for key in t.keys() {
                if !KNOWN_SCAN_KEYS.contains(&key.as_str()) {
                    unknown_keys.insert(format!("scan.{}", key));
                }
            }
            toml::Value::Table(t)
                .try_into::<ScanConfig>()
                .map_err(|e| invalid(format!("[scan]: {}", e)))?
        }
        Some(_) => return Err(invalid("[scan] must be a table".to_string())),
        None => ScanConfig::default(),
    };

    for key in &unknown_keys {
        warn_unknown_key(path, key);
    }

    Ok(Config { version, scan })
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade daac to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "daac: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
