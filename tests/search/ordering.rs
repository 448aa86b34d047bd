//! Result ordering: score descending, ties in input order, zero scores dropped.

use super::common::{ids, phone_catalog, storefront_catalog};
use sokoni::{compare_scored, rank, SearchRanker};
use std::cmp::Ordering;

#[test]
fn test_ties_keep_input_order() {
    let results = rank("flagship", &phone_catalog());
    assert_eq!(ids(&results), vec!["1", "2"]);

    let mut reversed = phone_catalog();
    reversed.reverse();
    let results = rank("flagship", &reversed);
    assert_eq!(ids(&results), vec!["2", "1"]);
}

#[test]
fn test_multi_word_queries() {
    let catalog = storefront_catalog();
    let results = rank("sony headphones", &catalog);
    assert_eq!(ids(&results), vec!["3", "7"]);
    assert_eq!(results[0].score, 105);
    assert_eq!(results[1].score, 35);

    let results = rank("apple pro", &catalog);
    assert_eq!(ids(&results), vec!["2", "1", "6"]);
    let scores: Vec<u32> = results.iter().map(|p| p.score).collect();
    assert_eq!(scores, vec![95, 75, 70]);
}

#[test]
fn test_zero_scores_are_dropped() {
    let results = rank("camera", &storefront_catalog());
    assert_eq!(ids(&results), vec!["5"]);
    assert_eq!(results[0].score, 175);
}

#[test]
fn test_ranking_is_deterministic() {
    let catalog = storefront_catalog();
    let ranker = SearchRanker::default();
    let first = ranker.rank("pro", &catalog);
    for _ in 0..5 {
        assert_eq!(ranker.rank("pro", &catalog), first);
    }
}

#[test]
fn test_results_carry_the_full_product() {
    let catalog = storefront_catalog();
    let results = rank("titanium", &catalog);
    let top = &results[0];
    assert_eq!(top.product, catalog[0]);
}

#[test]
fn test_compare_scored_is_descending() {
    let results = rank("pro", &storefront_catalog());
    assert_eq!(compare_scored(&results[0], &results[1]), Ordering::Less);
    assert_eq!(compare_scored(&results[1], &results[0]), Ordering::Greater);
    assert_eq!(compare_scored(&results[0], &results[0]), Ordering::Equal);
}
