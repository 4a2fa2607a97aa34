// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors that mean "this query is broken", as opposed to "this document is messy".
//!
//! Messy data never shows up here. A missing field, an unparsable timestamp or a
//! value that isn't a coordinate just scores 0 for its leaf. Everything in
//! [`QueryError`] is fatal and surfaces from the top-level call, because a malformed
//! query would otherwise silently rank every document as a non-match.

use std::path::PathBuf;

/// Structural errors raised while building or evaluating a query tree.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// A combinator keyword (`_and`, `_or`, `_not`) appeared where a leaf operator belongs.
    #[error("unexpected operator {operator} on field '{field}': combinators take a list of sub-queries")]
    UnexpectedOperator { field: String, operator: String },

    #[error("unknown operator {operator} on field '{field}'")]
    UnknownOperator { field: String, operator: String },

    /// The operand's shape does not fit the operator (e.g. `_in` with a scalar).
    #[error("invalid operand for {operator} on field '{field}': {reason}")]
    InvalidOperand {
        field: String,
        operator: String,
        reason: String,
    },

    #[error("cannot compare {found} with {expected} for {operator} on field '{field}'")]
    Incomparable {
        field: String,
        operator: String,
        found: &'static str,
        expected: &'static str,
    },

    #[error("invalid pattern for _regex on field '{field}': {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid modifier '{key}' on field '{field}': {reason}")]
    InvalidModifier {
        field: String,
        key: String,
        reason: String,
    },

    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors while reading a document collection.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON on line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected a JSON array of documents, found {0}")]
    NotAnArray(&'static str),
}

/// Human name of a JSON value's type, for error messages.
pub(crate) fn kind_of(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
