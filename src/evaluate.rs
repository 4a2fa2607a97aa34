// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The evaluator: walk a query tree against one document.
//!
//! ```text
//! evaluate(node, doc)
//!   ├─ Combinator → evaluate every child → and / or / not
//!   └─ Leaf
//!        ├─ _ne / _nin → rewrite to NOT[_eq] / NOT[_in] → evaluate
//!        └─ field::get → handler → contract → weigh → MatchResult
//! ```
//!
//! Combinators never short-circuit. An `AND` whose first child scores 0 still
//! evaluates the rest, so a structural error anywhere in the tree surfaces on every
//! document, not only on documents that happen to reach it.
//!
//! Pure function: no I/O, no shared state. Safe to call from many threads with the
//! same tree.

use std::cmp::Ordering;

use serde_json::Value;
use tracing::trace;

use crate::contracts::{check_raw_score, check_weighted_score};
use crate::error::{QueryError, Result};
use crate::field;
use crate::operators::{compare, equality, geo, pattern, similarity, time, LeafScore};
use crate::scoring::{combine, weigh};
use crate::types::{Combinator, Leaf, MatchResult, Node, Operator, Query};

/// Score one node against one document.
pub fn evaluate(node: &Node, document: &Value) -> Result<MatchResult> {
    match node {
        Node::Leaf(leaf) => evaluate_leaf(leaf, document),
        Node::Combinator { kind, children } => {
            // INVARIANT: every child is evaluated, even after a zero
            let results = children
                .iter()
                .map(|child| evaluate(child, document))
                .collect::<Result<Vec<_>>>()?;
            Ok(match kind {
                Combinator::And => combine::and(results),
                Combinator::Or => combine::or(results),
                Combinator::Not => combine::not(results),
            })
        }
    }
}

/// Every top-level part must match: the parts are ANDed.
pub fn filter_score(query: &Query, document: &Value) -> Result<MatchResult> {
    Ok(combine::and(score_parts(query, document)?))
}

/// Any top-level part may match: the parts are ORed, so more matches rank higher.
pub fn match_score(query: &Query, document: &Value) -> Result<MatchResult> {
    Ok(combine::or(score_parts(query, document)?))
}

fn score_parts(query: &Query, document: &Value) -> Result<Vec<MatchResult>> {
    query.parts.iter().map(|part| evaluate(part, document)).collect()
}

impl Query {
    /// See [`filter_score`].
    pub fn filter_score(&self, document: &Value) -> Result<MatchResult> {
        filter_score(self, document)
    }

    /// See [`match_score`].
    pub fn match_score(&self, document: &Value) -> Result<MatchResult> {
        match_score(self, document)
    }
}

fn evaluate_leaf(leaf: &Leaf, document: &Value) -> Result<MatchResult> {
    check_weight(leaf)?;

    let value = field::get(document, &leaf.field);
    if value.is_none() {
        trace!(field = %leaf.field, operator = %leaf.operator, "field missing");
    }

    let LeafScore { score, auxiliary } = match leaf.operator {
        Operator::Ne => return evaluate(&negate(leaf, Operator::Eq), document),
        Operator::Nin => return evaluate(&negate(leaf, Operator::In), document),
        Operator::Eq => equality::eq(value, leaf)?,
        Operator::In => equality::within(value, leaf)?,
        Operator::Lt => compare::compare(value, leaf, Ordering::is_lt)?,
        Operator::Lte => compare::compare(value, leaf, Ordering::is_le)?,
        Operator::Gt => compare::compare(value, leaf, Ordering::is_gt)?,
        Operator::Gte => compare::compare(value, leaf, Ordering::is_ge)?,
        Operator::Regex if leaf.modifiers.inverse => pattern::regex_inverse(value, leaf)?,
        Operator::Regex => pattern::regex(value, leaf)?,
        Operator::RegexInverse => pattern::regex_inverse(value, leaf)?,
        Operator::Sim => similarity::sim(value, leaf)?,
        Operator::Geo => geo::geo(value, leaf)?,
        Operator::Time => time::time(value, leaf)?,
    };

    check_raw_score(score, &leaf.field, leaf.operator);
    let weighted = weigh(score, &leaf.modifiers);
    check_weighted_score(weighted, &leaf.field, leaf.operator);

    Ok(MatchResult::with_auxiliary(weighted, auxiliary))
}

/// `field _ne x` is `NOT[field _eq x]`, modifiers and all.
///
/// `w` and `b` land on the inner leaf, and `NOT` turns whatever it scored into 0
/// or 1. So `_ne` and `_nin` always score exactly 0 or 1: a weight there never
/// boosts.
fn negate(leaf: &Leaf, positive: Operator) -> Node {
    Node::not(vec![Node::Leaf(Leaf {
        operator: positive,
        ..leaf.clone()
    })])
}

/// Weights scale scores and must keep them non-negative and finite.
fn check_weight(leaf: &Leaf) -> Result<()> {
    let weight = leaf.modifiers.weight;
    if weight.is_finite() && weight >= 0.0 {
        return Ok(());
    }
    Err(QueryError::InvalidModifier {
        field: leaf.field.to_string(),
        key: "w".to_string(),
        reason: format!("weight must be a finite number >= 0, found {}", weight),
    })
}
