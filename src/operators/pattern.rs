// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `_regex`, in both directions.
//!
//! Forward: the operand is a pattern, the document value is the subject. The score
//! is how much of the subject the pattern covered, measured by the capture group
//! named `match` (or the whole match when the pattern has no such group). Every
//! other named group that participated comes back as auxiliary data.
//!
//! Inverse: the document value is the pattern (case-insensitive, `.` matches
//! newlines) and the operand is the subject. Useful when documents carry patterns,
//! e.g. a list of alias regexes matched against a user's query string. A document
//! value that doesn't compile is bad data and scores 0.

use std::borrow::Cow;

use regex::{Regex, RegexBuilder};
use serde_json::Value;
use tracing::trace;

use super::{invalid_operand, scalar_text, unexpected_operand, LeafScore};
use crate::error::{QueryError, Result};
use crate::types::{Auxiliary, Leaf, Operand};

/// Name of the capture group whose span is scored.
pub const MATCH_GROUP: &str = "match";

pub fn regex(value: Option<&Value>, leaf: &Leaf) -> Result<LeafScore> {
    let pattern: Cow<'_, Regex> = match &leaf.operand {
        Operand::Pattern(pattern) => Cow::Borrowed(pattern),
        Operand::Value(Value::String(text)) => {
            Cow::Owned(Regex::new(text).map_err(|source| QueryError::InvalidPattern {
                field: leaf.field.to_string(),
                source,
            })?)
        }
        Operand::Value(other) => return Err(unexpected_operand(leaf, "a pattern string", other)),
    };

    let subject = value.and_then(scalar_text).unwrap_or_default();
    Ok(score_captures(&pattern, &subject))
}

pub fn regex_inverse(value: Option<&Value>, leaf: &Leaf) -> Result<LeafScore> {
    let subject = match &leaf.operand {
        Operand::Value(Value::String(subject)) => subject,
        Operand::Value(other) => return Err(unexpected_operand(leaf, "a string", other)),
        Operand::Pattern(_) => {
            return Err(invalid_operand(leaf, "inverse _regex takes a literal string, not a pattern"))
        }
    };

    let Some(source) = value.and_then(scalar_text) else {
        return Ok(LeafScore::zero());
    };
    if source.is_empty() {
        return Ok(LeafScore::zero());
    }

    let pattern = match RegexBuilder::new(&source)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
    {
        Ok(pattern) => pattern,
        Err(error) => {
            trace!(field = %leaf.field, %error, "document value is not a valid pattern");
            return Ok(LeafScore::zero());
        }
    };

    Ok(score_captures(&pattern, subject))
}

/// Matched length over subject length, plus the named captures.
fn score_captures(pattern: &Regex, subject: &str) -> LeafScore {
    if subject.is_empty() {
        return LeafScore::zero();
    }
    let Some(captures) = pattern.captures(subject) else {
        return LeafScore::zero();
    };

    let has_match_group = pattern.capture_names().flatten().any(|name| name == MATCH_GROUP);
    let matched = if has_match_group {
        captures.name(MATCH_GROUP)
    } else {
        captures.get(0)
    };
    let Some(matched) = matched.filter(|m| !m.is_empty()) else {
        return LeafScore::zero();
    };

    let score = matched.as_str().chars().count() as f64 / subject.chars().count() as f64;

    let mut auxiliary = Auxiliary::new();
    for name in pattern.capture_names().flatten() {
        if name == MATCH_GROUP {
            continue;
        }
        if let Some(group) = captures.name(name) {
            auxiliary.insert(name.to_string(), Value::String(group.as_str().to_string()));
        }
    }

    LeafScore { score, auxiliary }
}
