// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query parsing and evaluation.
//!
//! Arbitrary bytes become a JSON query and a JSON document. Most inputs aren't
//! valid JSON, and most valid JSON isn't a valid query; both are fine. What isn't
//! fine is a panic, a negative score, or a score that differs on a second run.
//! Weights are unclamped, so huge boosts may legitimately overflow; with every
//! weight at most 1 the score must also be finite.

#![no_main]

use arbitrary::Arbitrary;
use docmatch::{filter_score, match_score, Node, Query};
use libfuzzer_sys::fuzz_target;
use serde_json::Value;

/// Fuzz input: raw query and document text.
#[derive(Debug, Arbitrary)]
struct EvalInput {
    query: String,
    document: String,
}

/// Largest weight anywhere in the tree.
fn max_weight(node: &Node) -> f64 {
    match node {
        Node::Leaf(leaf) => leaf.modifiers.weight,
        Node::Combinator { children, .. } => children.iter().map(max_weight).fold(0.0, f64::max),
    }
}

fuzz_target!(|input: EvalInput| {
    // Cap lengths to keep regex compilation and deep trees cheap
    if input.query.len() > 1024 || input.document.len() > 4096 {
        return;
    }

    let Ok(query) = input.query.parse::<Query>() else {
        return;
    };
    let Ok(document) = serde_json::from_str::<Value>(&input.document) else {
        return;
    };

    let bounded = query.parts.iter().map(max_weight).fold(0.0, f64::max) <= 1.0;

    for score in [filter_score, match_score] {
        let first = score(&query, &document);
        let second = score(&query, &document);

        match (first, second) {
            (Ok(a), Ok(b)) => {
                // INVARIANT: scores are never negative
                assert!(!(a.score < 0.0), "negative score: {}", a.score);

                // INVARIANT: unboosted scores are finite
                if bounded {
                    assert!(a.score.is_finite(), "score not finite: {}", a.score);
                }

                // INVARIANT: evaluation is deterministic
                assert_eq!(a.score.to_bits(), b.score.to_bits(), "score changed between runs");
                assert_eq!(a.auxiliary, b.auxiliary, "auxiliary changed between runs");
            }
            (Err(_), Err(_)) => {}
            _ => panic!("same query succeeded once and failed once"),
        }
    }
});
