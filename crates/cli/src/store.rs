// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence of automata.
//!
//! The trie array and the failure-path array are written together into one
//! postcard-encoded file, so they cannot be separated. Loading goes through
//! [`Automaton::new`], which re-runs every assembly check.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::automaton::Automaton;
use crate::error::{Error, Result};

/// Store format version.
/// v1: Initial layout (trie units, fail path).
pub const FORMAT_VERSION: u32 = 1;

/// Extension of stored automata; `daac build` defaults to it.
pub const FILE_EXTENSION: &str = "daac";

/// On-disk layout.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct StoredAutomaton {
    pub(crate) format_version: u32,
    pub(crate) trie: Vec<u32>,
    pub(crate) fail_path: Vec<u32>,
}

/// Encode an automaton's arrays.
pub fn to_bytes(automaton: &Automaton) -> Result<Vec<u8>> {
    let stored = StoredAutomaton {
        format_version: FORMAT_VERSION,
        trie: automaton.trie_array().to_vec(),
        fail_path: automaton.fail_path().to_vec(),
    };
    postcard::to_allocvec(&stored).map_err(|e| Error::Internal(format!("encode failed: {e}")))
}

/// Decode and assemble an automaton. `path` is only used in error messages.
pub fn from_bytes(bytes: &[u8], path: &Path) -> Result<Automaton> {
    let stored: StoredAutomaton = postcard::from_bytes(bytes).map_err(|e| Error::Format {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if stored.format_version != FORMAT_VERSION {
        return Err(Error::Format {
            path: path.to_path_buf(),
            message: format!(
                "unsupported format version {} (supported: {})",
                stored.format_version, FORMAT_VERSION
            ),
        });
    }

    Automaton::new(stored.trie, stored.fail_path)
}

/// Write an automaton to `path`, atomically via a temp file.
pub fn save(automaton: &Automaton, path: &Path) -> Result<()> {
    let bytes = to_bytes(automaton)?;
    let temp_path = temp_path_for(path);
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(&temp_path, &bytes).map_err(io_err)?;
    std::fs::rename(&temp_path, path).map_err(io_err)?;

    tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved automaton");
    Ok(())
}

/// Sibling of `path` with `.tmp` appended to the full file name, so no
/// other file in the directory is touched.
fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Read and assemble an automaton from `path`.
pub fn load(path: &Path) -> Result<Automaton> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let automaton = from_bytes(&bytes, path)?;
    tracing::debug!(
        path = %path.display(),
        units = automaton.num_units(),
        "loaded automaton"
    );
    Ok(automaton)
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
