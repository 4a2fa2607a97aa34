//! Combinators, weighting and auxiliary merging through whole trees.

use crate::common::{assert_close, eq, near, place};
use docmatch::{evaluate, Leaf, Node, Operator};
use regex::Regex;
use serde_json::json;

#[test]
fn test_and_multiplies() {
    let doc = json!({"tags": ["a", "c"], "title": "Amsterdam"});
    let tree = Node::and(vec![
        Leaf::new("tags", Operator::Eq, json!(["a", "b"])).into(),
        Leaf::new("tags", Operator::Eq, json!(["a", "d"])).into(),
        eq("title", json!("Amsterdam")),
    ]);
    assert_eq!(evaluate(&tree, &doc).unwrap().score, 0.25);
}

#[test]
fn test_or_sums_past_one() {
    let doc = place("Amsterdam");
    let tree = Node::or(vec![eq("title", json!("Amsterdam")), eq("province", json!("NH"))]);
    assert_eq!(evaluate(&tree, doc).unwrap().score, 2.0);
}

#[test]
fn test_not_is_or_of_negations() {
    let doc = place("Amsterdam");
    // neither child matches, so both invert to 1 and sum to 2
    let tree = Node::not(vec![eq("title", json!("Utrecht")), eq("province", json!("UT"))]);
    assert_eq!(evaluate(&tree, doc).unwrap().score, 2.0);

    // one matches: 0 + 1
    let tree = Node::not(vec![eq("title", json!("Amsterdam")), eq("province", json!("UT"))]);
    assert_eq!(evaluate(&tree, doc).unwrap().score, 1.0);
}

#[test]
fn test_double_negation_collapses_to_binary() {
    let doc = place("Amsterdam");
    let partial: Node = Leaf::new("title", Operator::Sim, json!("Amsterdma")).into();
    let direct = evaluate(&partial, doc).unwrap().score;
    assert!(direct > 0.0 && direct < 1.0);

    let twice = Node::not(vec![Node::not(vec![partial])]);
    assert_eq!(evaluate(&twice, doc).unwrap().score, 1.0);
}

#[test]
fn test_weight_zero_is_absorbing() {
    let doc = place("Amsterdam");
    let miss: Node = Leaf::new("title", Operator::Eq, json!("Utrecht")).weight(100.0).binary().into();
    assert_eq!(evaluate(&miss, doc).unwrap().score, 0.0);
}

#[test]
fn test_binary_then_weight() {
    let doc = place("Amsterdam");
    let leaf = Leaf::new("title", Operator::Regex, Regex::new("dam").unwrap());
    let raw = evaluate(&leaf.clone().into(), doc).unwrap().score;
    assert_close(raw, 3.0 / 9.0);

    let boosted = evaluate(&leaf.binary().weight(4.0).into(), doc).unwrap().score;
    assert_eq!(boosted, 4.0);
}

#[test]
fn test_first_seen_auxiliary_wins() {
    let doc = place("Amsterdam");
    let tree = Node::or(vec![near(52.3676, 4.9041), near(52.0907, 5.1214)]);
    let result = evaluate(&tree, doc).unwrap();
    assert_eq!(result.get("distance"), Some(&json!(0.0)));
}

#[test]
fn test_auxiliary_survives_not() {
    let doc = place("Amsterdam");
    let tree = Node::not(vec![near(40.7128, -74.0060)]);
    let result = evaluate(&tree, doc).unwrap();
    assert_eq!(result.score, 1.0);
    assert!(result.get("distance").and_then(|d| d.as_f64()).unwrap() > 5_000_000.0);
}
