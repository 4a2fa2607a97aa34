// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! One field's predicate: operators, operands and modifiers into leaves.
//!
//! ```text
//! {"_eq": "Amsterdam", "_sim": "Amsterdam", "w": 2}
//! ["_eq", "Amsterdam", "_sim", "Amsterdam", "w", 2]
//! ```
//!
//! Both read as: two leaves on this field, both weighted 2, ANDed together.

use regex::Regex;
use serde_json::Value;

use crate::error::{kind_of, QueryError, Result};
use crate::types::{FieldPath, Leaf, Modifiers, Node, Operand, Operator, RESERVED_COMBINATORS};

/// Build the node for one field from its `(key, value)` entries.
pub(super) fn build<'a, I>(field: FieldPath, entries: I) -> Result<Node>
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    let mut operators: Vec<(Operator, &Value)> = Vec::new();
    let mut modifiers = Modifiers::default();

    for (key, value) in entries {
        if RESERVED_COMBINATORS.contains(&key) {
            return Err(QueryError::UnexpectedOperator {
                field: field.to_string(),
                operator: key.to_string(),
            });
        }
        if let Some(operator) = Operator::from_token(key) {
            operators.push((operator, value));
            continue;
        }
        if key.starts_with('_') {
            return Err(QueryError::UnknownOperator {
                field: field.to_string(),
                operator: key.to_string(),
            });
        }
        apply_modifier(&mut modifiers, &field, key, value)?;
    }

    if operators.is_empty() {
        return Err(QueryError::InvalidQuery(format!("field '{}' has no operator", field)));
    }

    let mut leaves = operators
        .into_iter()
        .map(|(operator, operand)| leaf(&field, operator, operand, modifiers))
        .collect::<Result<Vec<Node>>>()?;

    Ok(if leaves.len() == 1 {
        leaves.remove(0)
    } else {
        Node::and(leaves)
    })
}

/// Pair up a flat `[key, value, key, value, ...]` list.
pub(super) fn pairs<'a>(field: &FieldPath, flat: &'a [Value]) -> Result<Vec<(&'a str, &'a Value)>> {
    if flat.len() % 2 != 0 {
        return Err(QueryError::InvalidQuery(format!(
            "predicate for field '{}' must alternate keys and values",
            field
        )));
    }
    flat.chunks_exact(2)
        .map(|chunk| match &chunk[0] {
            Value::String(key) => Ok((key.as_str(), &chunk[1])),
            other => Err(QueryError::InvalidQuery(format!(
                "predicate key for field '{}' must be a string, found {}",
                field,
                kind_of(other)
            ))),
        })
        .collect()
}

fn leaf(field: &FieldPath, operator: Operator, operand: &Value, modifiers: Modifiers) -> Result<Node> {
    let (operator, operand) = match operator {
        Operator::Regex if modifiers.inverse => match operand {
            Value::String(_) => (Operator::RegexInverse, Operand::Value(operand.clone())),
            other => return Err(bad_operand(field, "a string", other)),
        },
        Operator::Regex => match operand {
            Value::String(pattern) => {
                let compiled = Regex::new(pattern).map_err(|source| QueryError::InvalidPattern {
                    field: field.to_string(),
                    source,
                })?;
                (Operator::Regex, Operand::Pattern(compiled))
            }
            other => return Err(bad_operand(field, "a pattern string", other)),
        },
        other => (other, Operand::Value(operand.clone())),
    };

    Ok(Node::Leaf(Leaf {
        field: field.clone(),
        operator,
        operand,
        modifiers,
    }))
}

fn bad_operand(field: &FieldPath, expected: &str, found: &Value) -> QueryError {
    QueryError::InvalidOperand {
        field: field.to_string(),
        operator: Operator::Regex.to_string(),
        reason: format!("expected {}, found {}", expected, kind_of(found)),
    }
}

fn apply_modifier(modifiers: &mut Modifiers, field: &FieldPath, key: &str, value: &Value) -> Result<()> {
    let invalid = |reason: String| QueryError::InvalidModifier {
        field: field.to_string(),
        key: key.to_string(),
        reason,
    };
    let number = || {
        value
            .as_f64()
            .filter(|n| n.is_finite())
            .ok_or_else(|| invalid(format!("expected a number, found {}", kind_of(value))))
    };
    let non_negative = || -> Result<f64> {
        let n = number()?;
        if n < 0.0 {
            return Err(invalid(format!("must be >= 0, found {}", n)));
        }
        Ok(n)
    };
    let flag = || {
        value
            .as_bool()
            .ok_or_else(|| invalid(format!("expected a bool, found {}", kind_of(value))))
    };

    match key {
        "w" => modifiers.weight = non_negative()?,
        "b" => modifiers.binary = flag()?,
        "max_distance" => modifiers.max_distance = non_negative()?,
        "max_time" => modifiers.max_time = non_negative()?,
        "inverse" => modifiers.inverse = flag()?,
        _ => return Err(invalid("unknown modifier".to_string())),
    }
    Ok(())
}
