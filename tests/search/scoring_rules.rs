//! Per-rule scoring tests.
//!
//! Each test scores a single product (so relatedness can't kick in) and checks
//! the rule-by-rule breakdown.

use super::common::make_full_product;
use sokoni::{Product, ScoreBreakdown, ScoringWeights, SearchRanker};

fn explain(query: &str, product: &Product) -> ScoreBreakdown {
    SearchRanker::default().explain(query, product, std::slice::from_ref(product))
}

#[test]
fn test_every_substring_rule_fires() {
    let product = make_full_product("1", "Pro Stand", Some("ProGear"), "professional", "pro pro");
    let b = explain("pro", &product);
    assert_eq!(b.name, 100);
    assert_eq!(b.brand, 80);
    assert_eq!(b.description, 60);
    assert_eq!(b.category, 40);
    // pro, pro, pro, progear; "pro" is too short for the fuzzy rule
    assert_eq!(b.partial, 80);
    assert_eq!(b.fuzzy, 0);
    assert_eq!(b.total(), 360);
}

#[test]
fn test_word_rules_count_every_pair() {
    let product = make_full_product("1", "Laptop", None, "laptops", "laptop sleeve");
    let b = explain("laptop", &product);
    assert_eq!(b.category, 40);
    assert_eq!(b.partial, 40);
    assert_eq!(b.fuzzy, 30);
    assert_eq!(b.total(), 270);
}

#[test]
fn test_two_char_query_skips_word_rules() {
    let product = make_full_product("1", "ab cd", None, "x", "ab");
    let b = explain("ab", &product);
    assert_eq!(b.partial, 0);
    assert_eq!(b.fuzzy, 0);
    assert_eq!(b.total(), 160);
}

#[test]
fn test_three_char_query_gets_partial_not_fuzzy() {
    let product = make_full_product("1", "zabcz", None, "x", "");
    let b = explain("abc", &product);
    assert_eq!(b.partial, 20);
    assert_eq!(b.fuzzy, 0);
    assert_eq!(b.total(), 120);
}

#[test]
fn test_fuzzy_alone() {
    let product = make_full_product("1", "Color Printer", None, "office", "");
    assert_eq!(explain("colour", &product).total(), 15);
    let product = make_full_product("1", "Printer", None, "office", "");
    assert_eq!(explain("printers", &product).total(), 15);
}

#[test]
fn test_lengths_are_counted_in_chars() {
    let product = make_full_product("1", "Café Grinder", None, "kitchen", "");
    assert_eq!(explain("café", &product).total(), 135);
    // One substitution in four chars: 0.75 similar
    assert_eq!(explain("cafe", &product).fuzzy, 15);
}

#[test]
fn test_category_is_substring_matched_case_insensitively() {
    let product = make_full_product("1", "Thing", None, "Smartphones", "");
    assert_eq!(explain("phone", &product).category, 40);
}

#[test]
fn test_missing_brand_scores_nothing() {
    let product = make_full_product("1", "Thing", None, "misc", "");
    assert!(explain("apple", &product).is_empty());
}

#[test]
fn test_custom_weights() {
    let weights = ScoringWeights {
        name: 1000,
        fuzzy_word: 0,
        ..ScoringWeights::default()
    };
    let ranker = SearchRanker::new(weights);
    let product = make_full_product("1", "Laptop", None, "laptops", "laptop sleeve");
    let b = ranker.explain("laptop", &product, std::slice::from_ref(&product));
    assert_eq!(b.name, 1000);
    assert_eq!(b.fuzzy, 0);
    assert_eq!(b.total(), 1000 + 60 + 40 + 40);
}

#[test]
fn test_stricter_threshold_drops_typos() {
    let weights = ScoringWeights {
        similarity_threshold: 0.8,
        ..ScoringWeights::default()
    };
    let product = make_full_product("1", "Café Grinder", None, "kitchen", "");
    let b = SearchRanker::new(weights).explain("cafe", &product, std::slice::from_ref(&product));
    assert!(b.is_empty());
}
