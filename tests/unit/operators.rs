//! One leaf, one document: each operator through `evaluate`.

use crate::common::{assert_close, place};
use docmatch::{evaluate, log_score, Leaf, Node, Operator, QueryError};
use regex::Regex;
use serde_json::{json, Value};

fn score(leaf: Leaf, doc: &Value) -> f64 {
    evaluate(&Node::from(leaf), doc).unwrap().score
}

// ============================================================================
// EQUALITY AND MEMBERSHIP
// ============================================================================

#[test]
fn test_eq_scalar() {
    let doc = place("Amsterdam");
    assert_eq!(score(Leaf::new("title", Operator::Eq, json!("Amsterdam")), doc), 1.0);
    assert_eq!(score(Leaf::new("title", Operator::Eq, json!("amsterdam")), doc), 0.0);
    assert_eq!(score(Leaf::new("mayor", Operator::Eq, json!("x")), doc), 0.0);
}

#[test]
fn test_eq_numbers_ignore_representation() {
    let doc = json!({"population": 931298});
    assert_eq!(score(Leaf::new("population", Operator::Eq, json!(931298.0)), &doc), 1.0);
}

#[test]
fn test_eq_list_overlap() {
    let doc = json!({"tags": ["a", "c"]});
    assert_eq!(score(Leaf::new("tags", Operator::Eq, json!(["a", "b"])), &doc), 0.5);
}

#[test]
fn test_eq_list_overlap_rewards_covering_documents() {
    let partial = json!({"tags": ["a"]});
    let superset = json!({"tags": ["a", "b", "c", "d"]});
    assert_eq!(score(Leaf::new("tags", Operator::Eq, json!(["a", "b"])), &partial), 0.5);
    assert_eq!(score(Leaf::new("tags", Operator::Eq, json!(["a"])), &superset), 1.0);
    assert_eq!(score(Leaf::new("tags", Operator::Eq, json!(["a", "b", "c", "d"])), &partial), 0.25);
}

#[test]
fn test_eq_list_membership() {
    let doc = place("Amsterdam");
    assert_eq!(score(Leaf::new("aliases", Operator::Eq, json!("Mokum")), doc), 1.0);
    assert_eq!(score(Leaf::new("aliases", Operator::Eq, json!("Domstad")), doc), 0.0);
}

#[test]
fn test_in_and_nin() {
    let doc = place("Utrecht");
    assert_eq!(score(Leaf::new("province", Operator::In, json!(["UT", "NH"])), doc), 1.0);
    assert_eq!(score(Leaf::new("province", Operator::Nin, json!(["UT", "NH"])), doc), 0.0);
    assert_eq!(score(Leaf::new("province", Operator::Nin, json!(["ZH"])), doc), 1.0);
}

#[test]
fn test_ne_collapses_partial_scores() {
    // _ne is NOT[_eq]: a 0.5 overlap is "some match", so NOT gives 0
    let doc = json!({"tags": ["a", "c"]});
    assert_eq!(score(Leaf::new("tags", Operator::Ne, json!(["a", "b"])), &doc), 0.0);
}

// ============================================================================
// COMPARISONS
// ============================================================================

#[test]
fn test_comparisons() {
    let doc = place("Utrecht");
    assert_eq!(score(Leaf::new("population", Operator::Lt, json!(400_000)), doc), 1.0);
    assert_eq!(score(Leaf::new("population", Operator::Gte, json!(367_984)), doc), 1.0);
    assert_eq!(score(Leaf::new("population", Operator::Gt, json!(367_984)), doc), 0.0);
    assert_eq!(score(Leaf::new("title", Operator::Lte, json!("Z")), doc), 1.0);
}

#[test]
fn test_incomparable_kinds_are_errors() {
    let leaf = Leaf::new("title", Operator::Lt, json!(10));
    let err = evaluate(&leaf.into(), place("Utrecht")).unwrap_err();
    assert!(matches!(err, QueryError::Incomparable { .. }));
    assert!(err.to_string().contains("title"));
}

// ============================================================================
// REGEX
// ============================================================================

#[test]
fn test_regex_scores_match_group_share() {
    let pattern = Regex::new("(?P<match>Rotter)").unwrap();
    let s = score(Leaf::new("title", Operator::Regex, pattern), place("Rotterdam"));
    assert_close(s, 6.0 / 9.0);
}

#[test]
fn test_regex_captures_in_auxiliary() {
    let pattern = Regex::new(r"(?P<match>(?P<prefix>[A-Z]{2})(?P<code>\d+))").unwrap();
    let leaf = Leaf::new("key", Operator::Regex, pattern);
    let result = evaluate(&leaf.into(), place("Amsterdam")).unwrap();
    assert_close(result.score, 6.0 / 10.0);
    assert_eq!(result.get("prefix"), Some(&json!("GM")));
    assert_eq!(result.get("code"), Some(&json!("0363")));
}

#[test]
fn test_regex_inverse() {
    let doc = json!({"pattern": "amster\\w+"});
    let leaf = Leaf::new("pattern", Operator::RegexInverse, json!("AMSTERDAM"));
    assert_eq!(score(leaf, &doc), 1.0);
}

// ============================================================================
// SIMILARITY
// ============================================================================

#[test]
fn test_sim_exact_and_typo() {
    let doc = place("Amsterdam");
    assert_eq!(score(Leaf::new("title", Operator::Sim, json!("Amsterdam")), doc), 1.0);
    let typo = score(Leaf::new("title", Operator::Sim, json!("Amsterdma")), doc);
    let other = score(Leaf::new("title", Operator::Sim, json!("Maastricht")), doc);
    assert!(typo > other, "typo {} should beat unrelated {}", typo, other);
}

#[test]
fn test_sim_over_list_takes_best() {
    let s = score(Leaf::new("aliases", Operator::Sim, json!("Mokum")), place("Amsterdam"));
    assert_eq!(s, 1.0);
}

#[test]
fn test_string_sim_empty() {
    assert_eq!(docmatch::string_sim("", ""), 0.0);
}

// ============================================================================
// GEO
// ============================================================================

#[test]
fn test_geo_every_coordinate_shape() {
    // Each fixture document stores its location in a different shape
    let centre = json!({"lat": 52.0, "lon": 5.0});
    for title in ["Amsterdam", "Utrecht", "Rotterdam", "New York"] {
        let leaf = Leaf::new("location", Operator::Geo, centre.clone()).max_distance(10_000_000.0);
        let result = evaluate(&leaf.into(), crate::common::place(title)).unwrap();
        assert!(result.score > 0.0, "{} did not coerce", title);
        assert!(result.get("distance").is_some());
    }
}

#[test]
fn test_geo_score_matches_curve() {
    let doc = place("Amsterdam");
    let leaf = Leaf::new("location", Operator::Geo, json!([4.8926, 52.3731]));
    let result = evaluate(&leaf.into(), doc).unwrap();
    let distance = result.get("distance").and_then(Value::as_f64).unwrap();
    assert_close(result.score, log_score(distance, 100_000.0));
}

#[test]
fn test_geo_zero_horizon() {
    let leaf = Leaf::new("location", Operator::Geo, json!([4.8926, 52.3731])).max_distance(0.0);
    assert_eq!(score(leaf, place("Amsterdam")), 0.0);
}

// ============================================================================
// TIME
// ============================================================================

#[test]
fn test_time_same_day() {
    let leaf = Leaf::new("founded", Operator::Time, json!("1275-10-27T00:00:00Z"));
    assert_eq!(score(leaf, place("Amsterdam")), 1.0);
}

#[test]
fn test_time_wider_horizon_scores_higher() {
    let doc = place("Amsterdam");
    let tight = Leaf::new("founded", Operator::Time, json!("1275-10-28")).max_time(86_400.0 * 2.0);
    let loose = Leaf::new("founded", Operator::Time, json!("1275-10-28")).max_time(86_400.0 * 30.0);
    let (tight, loose) = (score(tight, doc), score(loose, doc));
    assert!(loose > tight && tight > 0.0);
}
