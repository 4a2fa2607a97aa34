// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `_lt`, `_lte`, `_gt`, `_gte`.
//!
//! Numbers compare numerically, strings lexicographically, bools `false < true`.
//! A missing field scores 0. Comparing across kinds (a string field against a
//! numeric bound) is a query error rather than a quiet 0: the bound almost
//! certainly has the wrong type, and scoring every document 0 would hide that.

use std::cmp::Ordering;

use serde_json::Value;

use super::{operand_value, unexpected_operand, LeafScore};
use crate::error::{kind_of, QueryError, Result};
use crate::types::Leaf;

/// Compare the document value against the operand; `accept` decides which
/// orderings count as a hit (`Ordering::is_lt` for `_lt`, and so on).
pub fn compare(value: Option<&Value>, leaf: &Leaf, accept: fn(Ordering) -> bool) -> Result<LeafScore> {
    let operand = operand_value(leaf)?;
    if !matches!(operand, Value::Number(_) | Value::String(_) | Value::Bool(_)) {
        return Err(unexpected_operand(leaf, "a number, string or bool", operand));
    }

    let Some(value) = value else {
        return Ok(LeafScore::zero());
    };

    let ordering = match (value, operand) {
        (Value::Number(a), Value::Number(b)) => match (a.as_f64(), b.as_f64()) {
            (Some(a), Some(b)) => a.partial_cmp(&b),
            _ => None,
        },
        (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
        (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
        _ => {
            return Err(QueryError::Incomparable {
                field: leaf.field.to_string(),
                operator: leaf.operator.to_string(),
                found: kind_of(value),
                expected: kind_of(operand),
            })
        }
    };

    Ok(LeafScore::hit(ordering.is_some_and(accept)))
}
