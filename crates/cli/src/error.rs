// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::PathBuf;

/// daac error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Key and value sequences differ in length.
    #[error("the sizes of keys and values must be equal (keys: {keys}, values: {values})")]
    SizeMismatch { keys: usize, values: usize },

    /// The empty key cannot be stored in the trie.
    #[error("empty key at index {index} is not supported")]
    EmptyKey { index: usize },

    /// The same key was submitted twice.
    #[error("duplicated key {key:?} at index {index} (first seen at index {first_index})")]
    DuplicateKey {
        key: String,
        index: usize,
        first_index: usize,
    },

    /// Values must be non-negative.
    #[error("all values must be non-negative, found {value} for key {key:?} at index {index}")]
    NegativeValue { value: i32, key: String, index: usize },

    /// Automaton assembly without a failure-path array.
    #[error("fail path array is missing")]
    MissingFailPath,

    /// Failure-path array does not cover the trie.
    #[error("fail path length {actual} does not match trie node count {expected}")]
    FailPathLength { expected: usize, actual: usize },

    /// Failure-path entry points outside the trie.
    #[error("fail path entry for node {node} points to {target}, outside {units} nodes")]
    FailPathTarget { node: usize, target: u32, units: usize },

    /// Failure links starting at `node` never reach the root.
    #[error("fail path chain starting at node {node} does not reach the root")]
    FailPathCycle { node: usize },

    /// Trie array failed its own validation.
    #[error("invalid trie array: {0}")]
    InvalidTrie(String),

    /// The pattern set does not fit in the double-array address space.
    #[error("trie construction failed: base space exhausted (limit: {limit} units)")]
    TrieTooLarge { limit: usize },

    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments or input files
    #[error("argument error: {0}")]
    Argument(String),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Scan input exceeds the configured size limit.
    #[error("input too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    InputTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Stored automaton could not be decoded or encoded.
    #[error("format error: {}: {message}", .path.display())]
    Format { path: PathBuf, message: String },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller supplied keys, values or arrays that cannot be used.
    InvalidArgument,
    /// The trie builder could not produce an array.
    Construction,
    /// Configuration problem.
    Config,
    /// Reading or writing files failed.
    Io,
}

impl Error {
    /// Classify the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SizeMismatch { .. }
            | Error::EmptyKey { .. }
            | Error::DuplicateKey { .. }
            | Error::NegativeValue { .. }
            | Error::MissingFailPath
            | Error::FailPathLength { .. }
            | Error::FailPathTarget { .. }
            | Error::FailPathCycle { .. }
            | Error::InvalidTrie(_)
            | Error::InputTooLarge { .. }
            | Error::Argument(_) => ErrorKind::InvalidArgument,
            Error::TrieTooLarge { .. } | Error::Internal(_) => ErrorKind::Construction,
            Error::Config { .. } => ErrorKind::Config,
            Error::Io { .. } | Error::Format { .. } => ErrorKind::Io,
        }
    }
}

/// Result type using daac Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes of the `daac` binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command succeeded (scan found at least one match)
    Success = 0,
    /// Scan completed without any match
    NoMatch = 1,
    /// Configuration, argument or dictionary error
    ConfigError = 2,
    /// Internal or I/O error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err.kind() {
            ErrorKind::InvalidArgument | ErrorKind::Config => ExitCode::ConfigError,
            ErrorKind::Construction | ErrorKind::Io => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
