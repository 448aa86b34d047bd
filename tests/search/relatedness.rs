//! Relatedness fallback: products pulled in by sharing a category or brand
//! with a product whose name contains the query.

use super::common::{make_full_product, phone_catalog, score_of};
use sokoni::{rank, SearchRanker};

#[test]
fn test_shared_category_and_brand() {
    let catalog = vec![
        make_full_product("1", "Ultra Phone", Some("Acme"), "phones", ""),
        make_full_product("2", "Budget Handset", Some("Acme"), "tablets", ""),
        make_full_product("3", "Other", Some(""), "phones", ""),
        make_full_product("4", "X", None, "misc", ""),
    ];
    let results = rank("ultra", &catalog);
    assert_eq!(score_of(&results, "1"), Some(135));
    assert_eq!(score_of(&results, "2"), Some(15));
    assert_eq!(score_of(&results, "3"), Some(10));
    assert_eq!(score_of(&results, "4"), None);
}

#[test]
fn test_empty_brands_are_never_related() {
    let catalog = vec![
        make_full_product("1", "Nova Phone", Some(""), "phones", ""),
        make_full_product("2", "Plain Case", Some(""), "phones", ""),
    ];
    let ranker = SearchRanker::default();
    let b = ranker.explain("nova", &catalog[1], &catalog);
    assert_eq!(b.related_category, 10);
    assert_eq!(b.related_brand, 0);
}

#[test]
fn test_description_hit_suppresses_relatedness() {
    let catalog = vec![
        make_full_product("1", "Nova Phone", Some("Acme"), "phones", ""),
        make_full_product("2", "Plain Case", Some("Acme"), "phones", "a nova case"),
    ];
    let b = SearchRanker::default().explain("nova", &catalog[1], &catalog);
    assert_eq!(b.description, 60);
    assert_eq!(b.related_category, 0);
    assert_eq!(b.related_brand, 0);
    assert_eq!(b.total(), 95);
}

#[test]
fn test_category_and_brand_equality_is_exact() {
    let catalog = vec![
        make_full_product("1", "Nova Phone", Some("Acme"), "phones", ""),
        make_full_product("2", "Plain Case", Some("acme"), "Phones", ""),
    ];
    let results = rank("nova", &catalog);
    assert_eq!(score_of(&results, "2"), None);
}

#[test]
fn test_no_name_hit_means_no_relatedness() {
    // "flagship" is only in descriptions
    let results = rank("flagship", &phone_catalog());
    let ranker = SearchRanker::default();
    let catalog = phone_catalog();
    for product in &catalog {
        let b = ranker.explain("flagship", product, &catalog);
        assert_eq!(b.related_category, 0);
        assert_eq!(b.related_brand, 0);
    }
    assert_eq!(score_of(&results, "1"), Some(95));
    assert_eq!(score_of(&results, "2"), Some(95));
}

#[test]
fn test_same_category_phone_rides_along() {
    let results = rank("iphone", &phone_catalog());
    assert_eq!(score_of(&results, "1"), Some(150));
    assert_eq!(score_of(&results, "2"), Some(10));
}

#[test]
fn test_relatedness_uses_the_full_catalog() {
    let catalog = phone_catalog();
    // Scored alone, the Galaxy has nothing to be related to
    let alone = SearchRanker::default().explain("iphone", &catalog[1], &catalog[1..]);
    assert!(alone.is_empty());
    let with_iphone = SearchRanker::default().explain("iphone", &catalog[1], &catalog);
    assert_eq!(with_iphone.related_category, 10);
}
