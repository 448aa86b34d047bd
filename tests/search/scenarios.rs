//! Storefront search scenarios against the sample catalog export.
//!
//! Expected scores are worked out by hand from the rule table in
//! `sokoni::scoring`; ids are abbreviated to their last digit in comments.

use super::common::{fixture_catalog, ids, score_of};
use sokoni::rank;

fn id(n: u32) -> String {
    format!("b3f1c2a0-{:04}", n)
}

fn ranked(query: &str) -> Vec<(String, u32)> {
    rank(query, fixture_catalog().listing())
        .into_iter()
        .map(|p| (p.product.id, p.score))
        .collect()
}

fn expect(pairs: &[(u32, u32)]) -> Vec<(String, u32)> {
    pairs.iter().map(|&(n, score)| (id(n), score)).collect()
}

// ============================================================================
// NAME AND BRAND QUERIES
// ============================================================================

#[test]
fn test_iphone_query() {
    // 1 is the only name hit; 2 and 6 are related by brand, 4 by category
    assert_eq!(
        ranked("iphone"),
        expect(&[(1, 135), (2, 15), (6, 15), (4, 10)])
    );
}

#[test]
fn test_brand_query_apple() {
    assert_eq!(ranked("apple"), expect(&[(6, 250), (1, 130), (2, 130)]));
}

#[test]
fn test_brand_query_sony() {
    assert_eq!(ranked("sony"), expect(&[(3, 250), (7, 130)]));
}

#[test]
fn test_titanium_matches_two_phones() {
    assert_eq!(
        ranked("titanium"),
        expect(&[(1, 230), (4, 135), (2, 15), (6, 15)])
    );
}

#[test]
fn test_galaxy() {
    assert_eq!(ranked("galaxy"), expect(&[(4, 230), (1, 10)]));
}

#[test]
fn test_unbranded_product_found_by_name() {
    // 9 has no brand, so nothing is related to it by brand
    assert_eq!(ranked("cable"), expect(&[(9, 230)]));
}

// ============================================================================
// SHORT AND MULTI-WORD QUERIES
// ============================================================================

#[test]
fn test_pro_hits_names_and_descriptions() {
    assert_eq!(
        ranked("pro"),
        expect(&[(2, 220), (1, 200), (6, 15), (4, 10), (8, 10)])
    );
}

#[test]
fn test_three_letter_query() {
    assert_eq!(ranked("xps"), expect(&[(8, 120), (2, 10)]));
}

#[test]
fn test_multi_word_query_scores_words_independently() {
    // No product contains "samsung phone" as a whole
    assert_eq!(
        ranked("samsung phone"),
        expect(&[(4, 70), (1, 35), (3, 20)])
    );
}

#[test]
fn test_multi_word_query_with_typo() {
    assert_eq!(ranked("wireless headfones"), expect(&[(3, 50)]));
}

// ============================================================================
// MISSPELLINGS
// ============================================================================

#[test]
fn test_labtop_finds_laptops_by_description_and_name() {
    let results = rank("labtop", fixture_catalog().listing());
    assert_eq!(ids(&results), vec![id(2).as_str(), id(8).as_str()]);
    assert_eq!(score_of(&results, &id(2)), Some(15));
    assert_eq!(score_of(&results, &id(8)), Some(15));
}

#[test]
fn test_correct_spelling_outranks_typo() {
    let exact = rank("laptop", fixture_catalog().listing());
    let typo = rank("labtop", fixture_catalog().listing());
    assert_eq!(exact[0].product.id, id(8));
    assert!(score_of(&exact, &id(8)) > score_of(&typo, &id(8)));
}

#[test]
fn test_headphones() {
    assert_eq!(ranked("headphones"), expect(&[(3, 175), (7, 15)]));
}

#[test]
fn test_playstation() {
    assert_eq!(ranked("playstation"), expect(&[(7, 135), (3, 15)]));
}

// ============================================================================
// NO RESULTS
// ============================================================================

#[test]
fn test_nothing_matches() {
    assert!(ranked("refrigerator").is_empty());
}

#[test]
fn test_inactive_query() {
    assert!(ranked("").is_empty());
    assert!(ranked(" \t ").is_empty());
}

#[test]
fn test_query_case_and_padding_ignored() {
    assert_eq!(ranked("  ApPlE "), ranked("apple"));
}
