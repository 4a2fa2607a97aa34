// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading documents: a JSON array, or JSON Lines.
//!
//! The format is sniffed from the first non-whitespace byte. `[` means one array
//! of documents; anything else is read as one document per line, blank lines
//! skipped. JSON Lines errors carry the 1-based line number. A single document
//! that isn't an array is [`InputError::NotAnArray`].

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::error::{kind_of, InputError};

/// Parse documents from text.
pub fn parse_documents(text: &str) -> Result<Vec<Value>, InputError> {
    if text.trim_start().starts_with('[') {
        return serde_json::from_str(text).map_err(|source| InputError::Json {
            line: source.line(),
            source,
        });
    }

    let lines: Result<Vec<Value>, InputError> = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str(line).map_err(|source| InputError::Json { line: index + 1, source })
        })
        .collect();

    // A pretty-printed single document isn't JSON Lines; say so instead of
    // reporting a syntax error on line 1.
    match lines {
        Err(error) => match serde_json::from_str::<Value>(text) {
            Ok(single) => Err(InputError::NotAnArray(kind_of(&single))),
            Err(_) => Err(error),
        },
        ok => ok,
    }
}

/// Read and parse a document file. `-` reads stdin.
pub fn load_documents(path: impl AsRef<Path>) -> Result<Vec<Value>, InputError> {
    let path = path.as_ref();
    let io_error = |source| InputError::Io {
        path: PathBuf::from(path),
        source,
    };

    let text = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map_err(io_error)?;
        buffer
    } else {
        fs::read_to_string(path).map_err(io_error)?
    };

    let documents = parse_documents(&text)?;
    debug!(path = %path.display(), documents = documents.len(), "loaded documents");
    Ok(documents)
}
