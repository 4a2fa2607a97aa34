// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Score JSON documents against structured queries.
//!
//! A query is a tree: `AND`/`OR`/`NOT` combinators over leaf predicates like
//! `title _sim "Amsterdam"` or `location _geo {lat, lon}`. Evaluating the tree
//! against a document yields a continuous score (0 = no match, higher = better)
//! plus auxiliary data such as distances and regex captures. Callers rank by score
//! or filter on `score > 0`.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  query/     │────▶│  evaluate.rs │────▶│  batch.rs    │
//! │ (JSON →     │     │ (tree walk,  │     │ (score_all,  │
//! │  Node tree) │     │  NE/NIN)     │     │  filter_all) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                        │        │
//!          ┌─────────────┘        └───────────┐
//!          ▼                                  ▼
//! ┌─────────────────────────────┐   ┌─────────────────────┐
//! │        operators/           │   │      scoring/       │
//! │ (eq, in, lt.., regex, sim,  │   │ (log_score, weigh,  │
//! │  geo, time: raw [0,1])      │   │  and / or / not)    │
//! └─────────────────────────────┘   └─────────────────────┘
//!          │
//!          ▼
//! ┌─────────────┐
//! │  field.rs   │
//! │ (path walk) │
//! └─────────────┘
//! ```
//!
//! # Scoring
//!
//! | Node     | Score                                        |
//! |----------|----------------------------------------------|
//! | leaf     | raw score in `[0, 1]`, then `w`/`b` weighting |
//! | `AND`    | product of children (empty: 1)               |
//! | `OR`     | sum of children (empty: 0)                   |
//! | `NOT`    | sum of inverted children (`0 → 1`, else `0`) |
//!
//! Scores are unbounded above: weights boost and `OR` sums.
//!
//! # Usage
//!
//! ```
//! use docmatch::{filter_all, Query};
//! use serde_json::json;
//!
//! let query = Query::from_json(&json!({
//!     "title": {"_eq": "Amsterdam"},
//!     "key": {"_eq": "GM0363    "}
//! })).unwrap();
//!
//! let docs = vec![
//!     json!({"title": "Amsterdam", "key": "GM0363    "}),
//!     json!({"title": "Utrecht", "key": "GM0344    "}),
//! ];
//! let matches = filter_all(&docs, &query).unwrap();
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].result.score, 1.0);
//! ```

pub mod batch;
pub mod contracts;
pub mod error;
pub mod evaluate;
pub mod field;
pub mod input;
pub mod operators;
pub mod query;
pub mod scoring;
pub mod testing;
mod types;

pub use batch::{filter_all, score_all, score_with, sort_by_score, Mode, Scored};
pub use error::{InputError, QueryError, Result};
pub use evaluate::{evaluate, filter_score, match_score};
pub use input::{load_documents, parse_documents};
pub use operators::geo::{haversine, Coordinates, EARTH_RADIUS_METERS};
pub use operators::similarity::string_sim;
pub use operators::time::parse_timestamp;
pub use query::parse;
pub use scoring::{log_score, weigh};
pub use types::{
    Auxiliary, Combinator, Document, FieldPath, Leaf, MatchResult, Modifiers, Node, Operand, Operator,
    Query, DEFAULT_MAX_DISTANCE, DEFAULT_MAX_TIME, DEFAULT_WEIGHT, OPERATOR_TOKENS,
    RESERVED_COMBINATORS,
};
