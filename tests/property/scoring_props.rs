//! Properties of the numeric helpers.

use docmatch::{log_score, string_sim, weigh, Modifiers};
use proptest::prelude::*;

proptest! {
    /// log_score stays in [0, 1] for any input.
    #[test]
    fn prop_log_score_bounded(value in any::<f64>(), max in any::<f64>()) {
        let s = log_score(value, max);
        prop_assert!(!s.is_nan());
        prop_assert!((0.0..=1.0).contains(&s));
    }

    /// Farther is never better.
    #[test]
    fn prop_log_score_monotone(a in 0.0f64..1e7, b in 0.0f64..1e7, max in 1.0f64..1e7) {
        let (near, far) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(log_score(far, max) <= log_score(near, max));
    }

    /// Inside the horizon, strictly farther is strictly worse.
    #[test]
    fn prop_log_score_strict_inside_horizon(a in 1.0f64..1e4, gap in 1.0f64..1e4) {
        let max = 1e9;
        prop_assert!(log_score(a + gap, max) < log_score(a, max));
    }

    /// Zero stays zero whatever the modifiers say.
    #[test]
    fn prop_weigh_zero_absorbing(weight in 0.0f64..1e6, binary in any::<bool>()) {
        let m = Modifiers { weight, binary, ..Modifiers::default() };
        prop_assert_eq!(weigh(0.0, &m), 0.0);
    }

    /// Binary forces the weight through unchanged.
    #[test]
    fn prop_weigh_binary_is_weight(raw in 1e-9f64..=1.0, weight in 0.0f64..100.0) {
        let m = Modifiers { weight, binary: true, ..Modifiers::default() };
        prop_assert_eq!(weigh(raw, &m), weight);
    }

    /// Similarity is bounded and identical non-empty strings score 1.
    #[test]
    fn prop_string_sim_bounded(a in "\\PC{0,12}", b in "\\PC{0,12}") {
        let s = string_sim(&a, &b);
        prop_assert!((0.0..=1.0).contains(&s));
        if !a.is_empty() {
            prop_assert_eq!(string_sim(&a, &a), 1.0);
        }
    }
}
