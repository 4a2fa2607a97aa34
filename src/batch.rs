// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Score many documents with one query.
//!
//! The evaluator is pure and the tree is shared read-only, so documents score
//! independently. With the `parallel` feature (on by default) rayon spreads them
//! across threads; without it they go one by one. Either way results come back in
//! input order.
//!
//! A structural error in the query fails the whole batch. It would fail on every
//! document anyway, and a batch full of silent zeros is worse than an error.

use std::cmp::Ordering;

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde_json::Value;
use tracing::debug;

use crate::error::Result;
use crate::evaluate::{filter_score, match_score};
use crate::types::{MatchResult, Query};

/// How a query's top-level parts combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Every part must match (AND). Filtering.
    All,
    /// Any part may match (OR); more matches score higher. Ranking.
    #[default]
    Any,
}

/// A document with its result.
#[derive(Debug, Clone)]
pub struct Scored<'a> {
    pub document: &'a Value,
    pub result: MatchResult,
}

impl Scored<'_> {
    pub fn score(&self) -> f64 {
        self.result.score
    }

    /// The document with a `match` record attached.
    ///
    /// Objects get a `"match"` key (replacing any existing one). Anything else is
    /// wrapped: `{"value": <document>, "match": {...}}`.
    pub fn annotated(&self) -> Value {
        let record = self.result.to_record();
        match self.document {
            Value::Object(map) => {
                let mut map = map.clone();
                map.insert("match".to_string(), record);
                Value::Object(map)
            }
            other => {
                let mut map = serde_json::Map::new();
                map.insert("value".to_string(), other.clone());
                map.insert("match".to_string(), record);
                Value::Object(map)
            }
        }
    }
}

/// Score every document, in input order.
pub fn score_with<'a>(documents: &'a [Value], query: &Query, mode: Mode) -> Result<Vec<Scored<'a>>> {
    let score = |document: &'a Value| -> Result<Scored<'a>> {
        let result = match mode {
            Mode::All => filter_score(query, document)?,
            Mode::Any => match_score(query, document)?,
        };
        Ok(Scored { document, result })
    };

    // INVARIANT: output order is input order (indexed collect keeps positions)
    #[cfg(feature = "parallel")]
    let scored = documents.par_iter().map(score).collect::<Result<Vec<_>>>()?;

    #[cfg(not(feature = "parallel"))]
    let scored = documents.iter().map(score).collect::<Result<Vec<_>>>()?;

    debug!(
        documents = documents.len(),
        matches = scored.iter().filter(|s| s.result.is_match()).count(),
        ?mode,
        "scored batch"
    );
    Ok(scored)
}

/// Rank: every document, scored with the parts ORed.
pub fn score_all<'a>(documents: &'a [Value], query: &Query) -> Result<Vec<Scored<'a>>> {
    score_with(documents, query, Mode::Any)
}

/// Filter: only documents where every part matches, in input order.
pub fn filter_all<'a>(documents: &'a [Value], query: &Query) -> Result<Vec<Scored<'a>>> {
    let mut scored = score_with(documents, query, Mode::All)?;
    scored.retain(|s| s.result.is_match());
    debug!(kept = scored.len(), "filtered batch");
    Ok(scored)
}

/// Highest score first. Stable, so ties keep input order.
pub fn sort_by_score(scored: &mut [Scored<'_>]) {
    scored.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(Ordering::Equal));
}
