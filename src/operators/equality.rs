// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `_eq` and `_in`.
//!
//! `_eq` is three operators in a trench coat, picked by the shapes involved:
//!
//! | Document | Operand | Score                  |
//! |----------|---------|------------------------|
//! | list     | list    | overlap (see below)    |
//! | list     | scalar  | membership (1 or 0)    |
//! | scalar   | any     | equality (1 or 0)      |
//!
//! ```text
//! overlap = 1 - count(operand items not in document) / max(count(operand), count(document))
//! ```
//!
//! Counts are over distinct elements. Two empty lists score 1. A document holding
//! every requested item scores 1 whatever else it holds; each requested item it
//! lacks costs `1 / max(..)`.

use serde_json::Value;

use super::{contains, operand_value, unexpected_operand, values_equal, LeafScore};
use crate::error::Result;
use crate::types::Leaf;

pub fn eq(value: Option<&Value>, leaf: &Leaf) -> Result<LeafScore> {
    let operand = operand_value(leaf)?;
    let Some(value) = value else {
        return Ok(LeafScore::zero());
    };

    let score = match (value, operand) {
        (Value::Array(items), Value::Array(expected)) => LeafScore::of(overlap(items, expected)),
        (Value::Array(items), scalar) => LeafScore::hit(contains(items, scalar)),
        (value, operand) => LeafScore::hit(values_equal(value, operand)),
    };
    Ok(score)
}

/// `_in`: is the document value one of the listed options?
pub fn within(value: Option<&Value>, leaf: &Leaf) -> Result<LeafScore> {
    let operand = operand_value(leaf)?;
    let Value::Array(options) = operand else {
        return Err(unexpected_operand(leaf, "a list", operand));
    };
    Ok(LeafScore::hit(value.is_some_and(|v| contains(options, v))))
}

/// How much of `expected` the document's `items` cover.
pub fn overlap(items: &[Value], expected: &[Value]) -> f64 {
    let items = distinct(items);
    let expected = distinct(expected);

    let largest = items.len().max(expected.len());
    if largest == 0 {
        return 1.0;
    }

    let missing = expected
        .iter()
        .filter(|wanted| !items.iter().any(|item| values_equal(item, wanted)))
        .count();

    1.0 - missing as f64 / largest as f64
}

fn distinct(values: &[Value]) -> Vec<&Value> {
    let mut seen: Vec<&Value> = Vec::with_capacity(values.len());
    for value in values {
        if !seen.iter().any(|s| values_equal(s, value)) {
            seen.push(value);
        }
    }
    seen
}
