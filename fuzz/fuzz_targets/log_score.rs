// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the log-scaled proximity curve.
//!
//! `_geo` and `_time` both funnel through `log_score`, so its bounds are the
//! bounds of every proximity score: never negative, never above 1, never NaN,
//! and never increasing with distance.

#![no_main]

use arbitrary::Arbitrary;
use docmatch::log_score;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct CurveInput {
    value: f64,
    max_value: f64,
    step: f64,
}

fuzz_target!(|input: CurveInput| {
    let score = log_score(input.value, input.max_value);

    // INVARIANT: bounded
    assert!(!score.is_nan(), "NaN for {:?}", input);
    assert!((0.0..=1.0).contains(&score), "out of range {} for {:?}", score, input);

    // INVARIANT: zero distance is a perfect score
    assert_eq!(log_score(0.0, input.max_value), 1.0);

    // INVARIANT: monotone non-increasing for distances past zero
    if input.value > 0.0 && input.step.is_finite() && input.step > 0.0 {
        let further = input.value + input.step;
        assert!(
            log_score(further, input.max_value) <= score,
            "score went up from {} to {} for {:?}",
            input.value,
            further,
            input
        );
    }
});
