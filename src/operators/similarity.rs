// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `_sim`: fuzzy string similarity.
//!
//! Two metrics, take the better one. Normalized Levenshtein is good at typos in long
//! strings; Jaro-Winkler is good at short strings and shared prefixes. Neither is
//! right everywhere, and a permissive max lets each cover the other's blind spot.
//!
//! When the document holds a list, the best-matching member wins.

use serde_json::Value;

use super::{operand_value, scalar_text, unexpected_operand, LeafScore};
use crate::error::Result;
use crate::types::Leaf;

/// Similarity in `[0, 1]`. Two empty strings score 0: nothing matched nothing.
pub fn string_sim(a: &str, b: &str) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 0.0;
    }
    let edit = strsim::normalized_levenshtein(a, b);
    let jaro = strsim::jaro_winkler(a, b);
    edit.max(jaro).clamp(0.0, 1.0)
}

pub fn sim(value: Option<&Value>, leaf: &Leaf) -> Result<LeafScore> {
    let operand = operand_value(leaf)?;
    let Some(target) = scalar_text(operand) else {
        return Err(unexpected_operand(leaf, "a string or number", operand));
    };

    let score = match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(scalar_text)
            .map(|item| string_sim(&item, &target))
            .fold(0.0, f64::max),
        Some(other) => scalar_text(other).map_or(0.0, |text| string_sim(&text, &target)),
        None => 0.0,
    };
    Ok(LeafScore::of(score))
}
