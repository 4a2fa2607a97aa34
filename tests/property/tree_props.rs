//! Properties of whole-tree evaluation.

use super::{document_strategy, leaf_strategy, tree_strategy};
use docmatch::{evaluate, filter_all, score_all, Node, Query};
use proptest::prelude::*;

proptest! {
    /// Scores are finite, non-negative and deterministic.
    #[test]
    fn prop_scores_well_formed(tree in tree_strategy(), doc in document_strategy()) {
        let first = evaluate(&tree, &doc).unwrap();
        let second = evaluate(&tree, &doc).unwrap();
        prop_assert!(first.score.is_finite());
        prop_assert!(first.score >= 0.0);
        prop_assert_eq!(first, second);
    }

    /// Wrapping in a one-child AND or OR changes nothing.
    #[test]
    fn prop_singleton_combinators_are_identity(tree in tree_strategy(), doc in document_strategy()) {
        let direct = evaluate(&tree, &doc).unwrap().score;
        let and = evaluate(&Node::and(vec![tree.clone()]), &doc).unwrap().score;
        let or = evaluate(&Node::or(vec![tree]), &doc).unwrap().score;
        prop_assert_eq!(direct, and);
        prop_assert_eq!(direct, or);
    }

    /// NOT NOT x is 1 exactly when x matched.
    #[test]
    fn prop_double_negation_is_match_indicator(tree in tree_strategy(), doc in document_strategy()) {
        let direct = evaluate(&tree, &doc).unwrap().score;
        let twice = evaluate(&Node::not(vec![Node::not(vec![tree])]), &doc).unwrap().score;
        prop_assert_eq!(twice, if direct == 0.0 { 0.0 } else { 1.0 });
    }

    /// NOT of a single child only ever yields 0 or 1.
    #[test]
    fn prop_not_single_is_binary(leaf in leaf_strategy(), doc in document_strategy()) {
        let s = evaluate(&Node::not(vec![leaf.into()]), &doc).unwrap().score;
        prop_assert!(s == 0.0 || s == 1.0);
    }

    /// filter_all keeps exactly the positive scores of the AND reading, in order.
    #[test]
    fn prop_filter_is_positive_subset(
        parts in prop::collection::vec(tree_strategy(), 0..3),
        docs in prop::collection::vec(document_strategy(), 0..8),
    ) {
        let query = Query::new(parts);
        let all = docmatch::score_with(&docs, &query, docmatch::Mode::All).unwrap();
        let kept = filter_all(&docs, &query).unwrap();

        let expected: Vec<f64> = all.iter().map(|s| s.result.score).filter(|s| *s > 0.0).collect();
        let actual: Vec<f64> = kept.iter().map(|s| s.result.score).collect();
        prop_assert_eq!(expected, actual);
    }

    /// score_all returns one result per document, in input order.
    #[test]
    fn prop_score_all_preserves_order(
        parts in prop::collection::vec(tree_strategy(), 0..3),
        docs in prop::collection::vec(document_strategy(), 0..8),
    ) {
        let query = Query::new(parts);
        let scored = score_all(&docs, &query).unwrap();
        prop_assert_eq!(scored.len(), docs.len());
        for (s, doc) in scored.iter().zip(&docs) {
            prop_assert!(std::ptr::eq(s.document, doc));
        }
    }
}
