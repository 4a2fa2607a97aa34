// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Leaf operator handlers: one function per operator kind.
//!
//! Every handler takes the resolved document value (`None` when the field is
//! missing) and the leaf, and returns a raw score in `[0, 1]` plus optional
//! auxiliary data. Handlers never weigh; that happens once, in the evaluator.
//!
//! Handlers split failures in two:
//!
//! - **Bad data** (missing field, wrong type in the document, unparsable timestamp)
//!   scores 0 and returns `Ok`.
//! - **Bad query** (operand shape that can't work for this operator, incomparable
//!   types) returns a [`QueryError`].
//!
//! | Module       | Operators                   |
//! |--------------|-----------------------------|
//! | `equality`   | `_eq`, `_in`                |
//! | `compare`    | `_lt`, `_lte`, `_gt`, `_gte`|
//! | `pattern`    | `_regex`, inverse `_regex`  |
//! | `similarity` | `_sim`                      |
//! | `geo`        | `_geo`                      |
//! | `time`       | `_time`                     |
//!
//! `_ne` and `_nin` have no handler. The evaluator rewrites them to `NOT` over `_eq`
//! and `_in`.

pub mod compare;
pub mod equality;
pub mod geo;
pub mod pattern;
pub mod similarity;
pub mod time;

use std::borrow::Cow;

use serde_json::Value;

use crate::error::{kind_of, QueryError, Result};
use crate::types::{Auxiliary, Leaf, Operand};

/// Raw (unweighted) output of a leaf handler.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafScore {
    pub score: f64,
    pub auxiliary: Auxiliary,
}

impl LeafScore {
    pub fn zero() -> Self {
        Self::of(0.0)
    }

    pub fn of(score: f64) -> Self {
        Self {
            score,
            auxiliary: Auxiliary::new(),
        }
    }

    /// 1 for a hit, 0 for a miss.
    pub fn hit(matched: bool) -> Self {
        Self::of(if matched { 1.0 } else { 0.0 })
    }
}

/// The operand as a plain JSON value. A compiled pattern here means the tree was
/// built wrong.
pub(crate) fn operand_value(leaf: &Leaf) -> Result<&Value> {
    match &leaf.operand {
        Operand::Value(value) => Ok(value),
        Operand::Pattern(_) => Err(invalid_operand(leaf, "expected a JSON value, found a regex pattern")),
    }
}

pub(crate) fn invalid_operand(leaf: &Leaf, reason: impl Into<String>) -> QueryError {
    QueryError::InvalidOperand {
        field: leaf.field.to_string(),
        operator: leaf.operator.to_string(),
        reason: reason.into(),
    }
}

pub(crate) fn unexpected_operand(leaf: &Leaf, expected: &str, found: &Value) -> QueryError {
    invalid_operand(leaf, format!("expected {}, found {}", expected, kind_of(found)))
}

/// Text form of a scalar. Strings borrow, numbers and bools render. Arrays, objects
/// and null have no text form.
pub(crate) fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// JSON equality where `1` and `1.0` are the same number, at any depth.
pub(crate) fn values_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x == y || x.as_f64() == y.as_f64(),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| values_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            xs.len() == ys.len()
                && xs
                    .iter()
                    .all(|(key, x)| ys.get(key).is_some_and(|y| values_equal(x, y)))
        }
        _ => a == b,
    }
}

pub(crate) fn contains(items: &[Value], needle: &Value) -> bool {
    items.iter().any(|item| values_equal(item, needle))
}
