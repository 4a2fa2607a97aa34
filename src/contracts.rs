// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for scores.
//!
//! Debug-mode assertions that catch a leaf handler or the weighting step producing a
//! score outside its range. They compile to nothing in release builds.
//!
//! | Contract Function       | Property                                      |
//! |-------------------------|-----------------------------------------------|
//! | `check_raw_score`       | Raw leaf score is finite and in `[0, 1]`      |
//! | `check_weighted_score`  | Weighted score is non-negative and not NaN    |
//!
//! Weighted scores are not upper-bounded: `w > 1` is an intentional boost.

// ============================================================================
// COMPILE-TIME ASSERTIONS (evaluated at build time)
// ============================================================================

/// Defaults must describe a usable horizon and a neutral weight.
const _: () = {
    use crate::types::{DEFAULT_MAX_DISTANCE, DEFAULT_MAX_TIME, DEFAULT_WEIGHT};

    assert!(DEFAULT_MAX_DISTANCE > 0.0);
    assert!(DEFAULT_MAX_TIME > 0.0);
    assert!(DEFAULT_WEIGHT == 1.0);
};

use crate::types::{FieldPath, Operator};

/// Check that a handler returned a raw score in `[0, 1]`.
///
/// # Panics (debug builds only)
/// Panics if the score is NaN, infinite, negative or above 1.
#[inline]
pub fn check_raw_score(score: f64, field: &FieldPath, operator: Operator) {
    debug_assert!(
        score.is_finite() && (0.0..=1.0).contains(&score),
        "Contract violation: raw score {} for {} {} outside [0, 1]",
        score,
        field,
        operator
    );
}

/// Check that a weighted score is usable for ranking.
///
/// # Panics (debug builds only)
/// Panics if the score is NaN or negative. Negative weights are the usual culprit.
#[inline]
pub fn check_weighted_score(score: f64, field: &FieldPath, operator: Operator) {
    debug_assert!(
        !score.is_nan() && score >= 0.0,
        "Contract violation: weighted score {} for {} {} is negative or NaN",
        score,
        field,
        operator
    );
}
