// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Size-gated input reading.
//!
//! Scan inputs are read whole into memory. Inputs above the configured
//! limit are rejected before reading; `-` reads standard input.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Size at which to log a large input (16MB).
pub const LARGE_FILE_WARN: u64 = 16 * 1024 * 1024;

/// Default maximum input size (100MB).
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Input content with the path it was read from.
#[derive(Debug)]
pub struct InputContent {
    /// Path as given (`-` for standard input).
    pub path: PathBuf,

    /// The input as bytes.
    pub bytes: Vec<u8>,
}

/// Size-gated input reader.
#[derive(Debug, Clone, Copy)]
pub struct InputReader {
    /// Maximum input size to read.
    max_size: u64,
}

impl Default for InputReader {
    fn default() -> Self {
        Self {
            max_size: MAX_FILE_SIZE,
        }
    }
}

impl InputReader {
    /// Create a new reader with the default limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Read a file, or standard input for `-`.
    pub fn read(&self, path: &Path) -> Result<InputContent> {
        let bytes = if path.as_os_str() == STDIN_PATH {
            self.read_limited(std::io::stdin().lock(), path)?
        } else {
            self.read_file(path)?
        };

        Ok(InputContent {
            path: path.to_path_buf(),
            bytes,
        })
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        let io_err = |source| Error::Io {
            path: path.to_path_buf(),
            source,
        };

        let size = std::fs::metadata(path).map_err(io_err)?.len();
        if size > self.max_size {
            return Err(Error::InputTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_FILE_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "Reading large input"
            );
        }

        let file = File::open(path).map_err(io_err)?;
        self.read_limited(file, path)
    }

    /// Read at most `max_size` bytes; a longer stream is an error.
    fn read_limited<R: Read>(&self, source: R, path: &Path) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        source
            .take(self.max_size.saturating_add(1))
            .read_to_end(&mut buffer)
            .map_err(|e| Error::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        if buffer.len() as u64 > self.max_size {
            return Err(Error::InputTooLarge {
                path: path.to_path_buf(),
                size: buffer.len() as u64,
                max_size: self.max_size,
            });
        }
        Ok(buffer)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
