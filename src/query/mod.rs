// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query normalizer: JSON in, [`Query`] tree out.
//!
//! Two syntaxes describe the same trees. Use whichever reads better.
//!
//! **Mapping** (fields are keys, combinators are `_and`/`_or`/`_not` keys):
//!
//! ```json
//! {
//!   "title": {"_sim": "Amsterdam", "w": 2},
//!   "_or": [{"province": {"_eq": "NH"}}, {"province": {"_eq": "UT"}}]
//! }
//! ```
//!
//! **Pair sequence** (ordered; a field may be a key path):
//!
//! ```json
//! [
//!   ["title", ["_sim", "Amsterdam", "w", 2]],
//!   [["address", "city"], {"_eq": "Utrecht"}],
//!   ["_or", [["province", ["_eq", "NH"]], ["province", ["_eq", "UT"]]]]
//! ]
//! ```
//!
//! Every entry becomes one top-level part. Combinators take a list of sub-queries
//! in either syntax; a sub-query with several parts becomes an `AND`. Inside a
//! combinator list, an array starting with a string is read as a single pair.
//!
//! Validation happens here, once: unknown operators, misplaced combinators,
//! malformed modifiers and bad regexes are [`QueryError`]s before any document is
//! touched.

mod predicate;

use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{kind_of, QueryError, Result};
use crate::types::{Combinator, FieldPath, Node, Query};

/// Normalize a JSON query into a tree.
pub fn parse(query: &Value) -> Result<Query> {
    let parts = parse_parts(query)?;
    debug!(parts = parts.len(), "parsed query");
    Ok(Query::new(parts))
}

impl Query {
    /// See [`parse`].
    pub fn from_json(query: &Value) -> Result<Self> {
        parse(query)
    }
}

impl FromStr for Query {
    type Err = QueryError;

    fn from_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| QueryError::InvalidQuery(format!("not valid JSON: {}", e)))?;
        parse(&value)
    }
}

fn parse_parts(query: &Value) -> Result<Vec<Node>> {
    match query {
        Value::Object(map) => parse_mapping(map),
        Value::Array(entries) => {
            let mut parts = Vec::with_capacity(entries.len());
            for entry in entries {
                match entry {
                    Value::Array(pair) => parts.push(parse_pair(pair)?),
                    Value::Object(map) => parts.extend(parse_mapping(map)?),
                    other => {
                        return Err(QueryError::InvalidQuery(format!(
                            "expected a [field, predicate] pair, found {}",
                            kind_of(other)
                        )))
                    }
                }
            }
            Ok(parts)
        }
        other => Err(QueryError::InvalidQuery(format!(
            "a query is a mapping or a list of pairs, found {}",
            kind_of(other)
        ))),
    }
}

fn parse_mapping(map: &Map<String, Value>) -> Result<Vec<Node>> {
    map.iter()
        .map(|(key, value)| match Combinator::from_token(key) {
            Some(kind) => combinator(kind, value),
            None => field(FieldPath::parse(key), value),
        })
        .collect()
}

fn parse_pair(pair: &[Value]) -> Result<Node> {
    let [head, predicate] = pair else {
        return Err(QueryError::InvalidQuery(format!(
            "a pair has two elements, found {}",
            pair.len()
        )));
    };
    match head {
        Value::String(key) => match Combinator::from_token(key) {
            Some(kind) => combinator(kind, predicate),
            None => field(FieldPath::parse(key), predicate),
        },
        Value::Array(keys) => field(key_path(keys)?, predicate),
        other => Err(QueryError::InvalidQuery(format!(
            "a field is a string or a list of keys, found {}",
            kind_of(other)
        ))),
    }
}

fn key_path(keys: &[Value]) -> Result<FieldPath> {
    keys.iter()
        .map(|key| {
            key.as_str().map(str::to_string).ok_or_else(|| {
                QueryError::InvalidQuery(format!("field keys must be strings, found {}", kind_of(key)))
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(FieldPath::from)
}

fn field(path: FieldPath, predicate: &Value) -> Result<Node> {
    match predicate {
        Value::Object(map) => predicate::build(path, map.iter().map(|(k, v)| (k.as_str(), v))),
        Value::Array(flat) => {
            let entries = predicate::pairs(&path, flat)?;
            predicate::build(path, entries)
        }
        other => Err(QueryError::InvalidQuery(format!(
            "predicate for field '{}' must be a mapping or a list, found {}",
            path,
            kind_of(other)
        ))),
    }
}

fn combinator(kind: Combinator, subqueries: &Value) -> Result<Node> {
    let Value::Array(subqueries) = subqueries else {
        return Err(QueryError::InvalidQuery(format!(
            "{} takes a list of sub-queries, found {}",
            kind.token(),
            kind_of(subqueries)
        )));
    };

    let children = subqueries.iter().map(subquery).collect::<Result<Vec<_>>>()?;
    Ok(Node::Combinator { kind, children })
}

fn subquery(query: &Value) -> Result<Node> {
    if let Value::Array(pair) = query {
        if pair.first().is_some_and(Value::is_string) {
            return parse_pair(pair);
        }
    }
    let mut parts = parse_parts(query)?;
    Ok(if parts.len() == 1 {
        parts.remove(0)
    } else {
        Node::and(parts)
    })
}
