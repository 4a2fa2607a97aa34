// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a single leaf score.
//!
//! Raw scores live in `[0, 1]`. Weighting multiplies them, so a leaf with `w = 2` can
//! score 2. That is a boost, not a bug: scores rank documents, they are not
//! probabilities.
//!
//! # Key Invariant: Zero Is Absorbing
//!
//! ```text
//! weigh(0, m) = 0                for every m
//! weigh(s, m) = (b ? 1 : s) * w  for s > 0
//! ```
//!
//! A non-match stays a non-match no matter how heavily it's weighted or whether the
//! binary clamp is on.

use crate::types::Modifiers;

/// Log-scaled proximity: 1 at distance 0, decaying to 0 at `max_value`.
///
/// ```text
/// log_score(0, m) = 1
/// log_score(v, m) = max(1 - ln(1 + v) / ln(1 + m), 0)
/// ```
///
/// The log makes the curve steep near zero and flat far away, so 10m vs 100m
/// matters much more than 50km vs 60km. Never negative, monotonically decreasing in
/// `value`. A non-positive horizon or a non-finite value scores 0.
pub fn log_score(value: f64, max_value: f64) -> f64 {
    if value == 0.0 {
        return 1.0;
    }
    if !value.is_finite() || max_value <= 0.0 {
        return 0.0;
    }
    // INVARIANT: result in [0, 1]; ln_1p(value) > 0 for value > 0
    (1.0 - value.abs().ln_1p() / max_value.ln_1p()).max(0.0)
}

/// Apply the binary clamp and weight to a raw leaf score.
pub fn weigh(raw: f64, modifiers: &Modifiers) -> f64 {
    // INVARIANT: zero is absorbing - neither weight nor binary touch a non-match
    if raw == 0.0 {
        return 0.0;
    }
    let score = if modifiers.binary && raw > 0.0 { 1.0 } else { raw };
    score * modifiers.weight
}
