//! Batch scoring: ordering, modes and error propagation.

use crate::common::{eq, make_places, sim, titles};
use docmatch::{filter_all, score_all, score_with, sort_by_score, Leaf, Mode, Operator, Query, QueryError};
use serde_json::{json, Value};

#[test]
fn test_results_keep_input_order() {
    let docs = make_places();
    let query = Query::from(sim("title", "Rotterdam"));
    let scored = score_all(&docs, &query).unwrap();
    assert_eq!(titles(&scored), vec!["Amsterdam", "Utrecht", "Rotterdam", "New York"]);
}

#[test]
fn test_large_batch_keeps_order() {
    let docs: Vec<Value> = (0..2_000).map(|i| json!({"n": i})).collect();
    let query = Query::from(docmatch::Node::from(Leaf::new("n", Operator::Gte, json!(1_000))));
    let scored = score_all(&docs, &query).unwrap();
    for (i, s) in scored.iter().enumerate() {
        assert_eq!(s.document["n"], i);
        assert_eq!(s.score(), if i >= 1_000 { 1.0 } else { 0.0 });
    }
}

#[test]
fn test_any_versus_all() {
    let docs = make_places();
    let query = Query::new(vec![eq("province", json!("NH")), eq("province", json!("UT"))]);

    let any = score_with(&docs, &query, Mode::Any).unwrap();
    let all = score_with(&docs, &query, Mode::All).unwrap();
    let any_scores: Vec<f64> = any.iter().map(|s| s.score()).collect();
    let all_scores: Vec<f64> = all.iter().map(|s| s.score()).collect();

    assert_eq!(any_scores, vec![1.0, 1.0, 0.0, 0.0]);
    assert_eq!(all_scores, vec![0.0, 0.0, 0.0, 0.0]);
}

#[test]
fn test_empty_query_and_empty_batch() {
    let docs = make_places();
    let empty = Query::default();
    assert_eq!(filter_all(&docs, &empty).unwrap().len(), docs.len());
    assert!(score_all(&docs, &empty).unwrap().iter().all(|s| s.score() == 0.0));
    assert!(score_all(&[], &Query::from(eq("title", json!("x")))).unwrap().is_empty());
}

#[test]
fn test_sort_ties_keep_input_order() {
    let docs = make_places();
    let query = Query::from(eq("title", json!("Rotterdam")));
    let mut scored = score_all(&docs, &query).unwrap();
    sort_by_score(&mut scored);
    assert_eq!(titles(&scored), vec!["Rotterdam", "Amsterdam", "Utrecht", "New York"]);
}

#[test]
fn test_structural_error_surfaces_from_every_entry_point() {
    let docs = make_places();
    let bad = Query::from(docmatch::Node::from(Leaf::new("province", Operator::In, json!("NH"))));

    assert!(matches!(score_all(&docs, &bad), Err(QueryError::InvalidOperand { .. })));
    assert!(matches!(filter_all(&docs, &bad), Err(QueryError::InvalidOperand { .. })));
    assert!(bad.filter_score(&docs[0]).is_err());
    assert!(bad.match_score(&docs[0]).is_err());
}

#[test]
fn test_incomparable_types_are_structural() {
    let docs = make_places();
    let query = Query::from(docmatch::Node::from(Leaf::new("title", Operator::Gt, json!(5))));
    assert!(matches!(score_all(&docs, &query), Err(QueryError::Incomparable { .. })));
}

#[test]
fn test_annotated_output_carries_score_and_auxiliary() {
    let docs = make_places();
    let query = Query::from(crate::common::near(52.3676, 4.9041));
    let scored = score_all(&docs, &query).unwrap();

    let first = scored[0].annotated();
    assert_eq!(first["title"], "Amsterdam");
    assert_eq!(first["match"]["score"], 1.0);
    assert_eq!(first["match"]["distance"], 0.0);
}
