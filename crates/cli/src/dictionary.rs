// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern dictionaries read from files.
//!
//! One key per `\n`-terminated line, taken as raw bytes. With values
//! enabled each line is `key<TAB>value`, split at the last TAB.

use std::path::Path;

use memchr::{memchr_iter, memrchr};

use crate::automaton::Automaton;
use crate::error::{Error, Result};

/// Keys and, optionally, explicit values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    pub keys: Vec<Vec<u8>>,
    /// `None` means each key's value is its line index.
    pub values: Option<Vec<i32>>,
}

impl Dictionary {
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Build the automaton for this dictionary.
    pub fn build(&self) -> Result<Automaton> {
        match &self.values {
            Some(values) => Automaton::build(&self.keys, values),
            None => Automaton::build_from_keys(&self.keys),
        }
    }
}

/// Parse dictionary content.
pub fn parse(content: &[u8], with_values: bool) -> Result<Dictionary> {
    let mut keys = Vec::new();
    let mut values = with_values.then(Vec::new);

    for (index, line) in lines(content).enumerate() {
        let line_no = index + 1;
        match values.as_mut() {
            None => keys.push(line.to_vec()),
            Some(values) => {
                let (key, value) = split_value(line, line_no)?;
                keys.push(key.to_vec());
                values.push(value);
            }
        }
    }

    Ok(Dictionary { keys, values })
}

/// Read and parse a dictionary file.
pub fn load(path: &Path, with_values: bool) -> Result<Dictionary> {
    let content = std::fs::read(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    let dictionary = parse(&content, with_values).map_err(|e| match e {
        Error::Argument(message) => Error::Argument(format!("{}: {}", path.display(), message)),
        other => other,
    })?;
    tracing::debug!(path = %path.display(), keys = dictionary.len(), "loaded dictionary");
    Ok(dictionary)
}

/// Lines without their `\n`; a trailing newline does not start a new line.
fn lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    let mut start = 0;
    let mut ends = memchr_iter(b'\n', content);
    std::iter::from_fn(move || {
        if let Some(end) = ends.next() {
            let line = &content[start..end];
            start = end + 1;
            Some(line)
        } else if start < content.len() {
            let line = &content[start..];
            start = content.len();
            Some(line)
        } else {
            None
        }
    })
}

fn split_value(line: &[u8], line_no: usize) -> Result<(&[u8], i32)> {
    let Some(tab) = memrchr(b'\t', line) else {
        return Err(Error::Argument(format!(
            "line {}: expected `key<TAB>value`",
            line_no
        )));
    };

    let raw = &line[tab + 1..];
    let value = std::str::from_utf8(raw)
        .ok()
        .and_then(|s| s.trim().parse::<i32>().ok())
        .ok_or_else(|| {
            Error::Argument(format!(
                "line {}: invalid value {:?}",
                line_no,
                String::from_utf8_lossy(raw)
            ))
        })?;

    Ok((&line[..tab], value))
}

#[cfg(test)]
#[path = "dictionary_tests.rs"]
mod tests;
