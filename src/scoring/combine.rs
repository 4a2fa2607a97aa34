// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Folding sibling results under AND, OR and NOT.
//!
//! | Combinator | Identity | Reducer              |
//! |------------|----------|----------------------|
//! | AND        | 1        | product              |
//! | OR         | 0        | sum                  |
//! | NOT        | 0        | sum of inverted kids |
//!
//! NOT inverts each child on its own (`0 → 1`, anything positive `→ 0`) and then sums.
//! That makes `NOT[a, b]` an OR of negations, not the complement of `a AND b`, and it
//! collapses continuous scores: `NOT NOT 0.4 = 1`. Rankings built on this depend on
//! it, so it stays.
//!
//! # Auxiliary merge
//!
//! Folding left to right, the accumulator's value wins for keys both sides carry.
//! The first sibling to report a `distance` owns it; later siblings can add new keys
//! but never overwrite.

use crate::types::MatchResult;

/// Merge `current` into `acc`: reduce the scores, keep first-seen auxiliary values.
fn merge(mut acc: MatchResult, current: MatchResult, reducer: fn(f64, f64) -> f64) -> MatchResult {
    acc.score = reducer(current.score, acc.score);
    // INVARIANT: first seen wins - a later sibling never overwrites a key
    for (key, value) in current.auxiliary {
        acc.auxiliary.entry(key).or_insert(value);
    }
    acc
}

/// Left fold over `results`, starting from `{score: identity, auxiliary: {}}`.
pub fn combine<I>(results: I, identity: f64, reducer: fn(f64, f64) -> f64) -> MatchResult
where
    I: IntoIterator<Item = MatchResult>,
{
    results
        .into_iter()
        .fold(MatchResult::new(identity), |acc, current| merge(acc, current, reducer))
}

/// Product of scores. Empty input scores 1.
pub fn and<I: IntoIterator<Item = MatchResult>>(results: I) -> MatchResult {
    combine(results, 1.0, |a, b| a * b)
}

/// Sum of scores. Empty input scores 0.
pub fn or<I: IntoIterator<Item = MatchResult>>(results: I) -> MatchResult {
    combine(results, 0.0, |a, b| a + b)
}

/// Sum of per-child inversions. Empty input scores 0.
pub fn not<I: IntoIterator<Item = MatchResult>>(results: I) -> MatchResult {
    or(results.into_iter().map(invert))
}

/// Toggle "matched": zero becomes 1, anything else becomes 0. Auxiliary data survives.
pub fn invert(result: MatchResult) -> MatchResult {
    let score = if result.score == 0.0 { 1.0 } else { 0.0 };
    MatchResult {
        score,
        auxiliary: result.auxiliary,
    }
}
