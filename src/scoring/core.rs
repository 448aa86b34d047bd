// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind product relevance.
//!
//! A score is a plain sum of independent bonuses. Nothing is normalized and
//! nothing is capped, so a product that hits the query in several places
//! simply accumulates more points.
//!
//! # Rules
//!
//! | Rule              | Condition                                              | Points |
//! |-------------------|--------------------------------------------------------|--------|
//! | Name              | name contains the query                                | 100    |
//! | Brand             | brand contains the query                               | 80     |
//! | Description       | description contains the query                         | 60     |
//! | Category          | category contains the query                            | 40     |
//! | Partial word      | per (query word, product word), product word contains query word, query word > 2 chars | 20 |
//! | Fuzzy word        | per (query word, product word), both > 3 chars, similarity > 0.7 | 15 |
//! | Related category  | no name/description hit, shares category with a name hit | 10   |
//! | Related brand     | no name/description hit, shares brand with a name hit  | 15     |
//!
//! Product words are the name's words, then the description's, then the
//! brand's. The word rules count every pair, so a query word that appears in
//! both the name and the description scores twice, and a pair can earn both
//! the partial and the fuzzy bonus.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::fuzzy::is_similar;
use crate::types::{Product, ScoreBreakdown};
use crate::utils::{char_len, is_active_query, normalize_query, words};

/// Points for a name containing the query.
pub const NAME_MATCH_SCORE: u32 = 100;

/// Points for a brand containing the query.
pub const BRAND_MATCH_SCORE: u32 = 80;

/// Points for a description containing the query.
pub const DESCRIPTION_MATCH_SCORE: u32 = 60;

/// Points for a category containing the query.
pub const CATEGORY_MATCH_SCORE: u32 = 40;

/// Points per (query word, product word) substring hit.
pub const PARTIAL_WORD_SCORE: u32 = 20;

/// Points per (query word, product word) near-miss spelling.
pub const FUZZY_WORD_SCORE: u32 = 15;

/// Points for sharing a category with a product whose name matches.
pub const RELATED_CATEGORY_SCORE: u32 = 10;

/// Points for sharing a brand with a product whose name matches.
pub const RELATED_BRAND_SCORE: u32 = 15;

/// Similarity must be strictly above this for the fuzzy bonus.
pub const SIMILARITY_THRESHOLD: f64 = 0.7;

/// Query words must be longer than this to take part in partial matching.
pub const PARTIAL_MIN_EXCLUSIVE: usize = 2;

/// Both words must be longer than this to take part in fuzzy matching.
pub const FUZZY_MIN_EXCLUSIVE: usize = 3;

/// Largest point value a config file may give a single rule.
pub const MAX_RULE_WEIGHT: u32 = 1_000_000;

/// Point values for every rule, plus the fuzzy threshold.
///
/// `Default` is the storefront's tuning (the constants above). Config files
/// may override individual fields; missing ones keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub name: u32,
    pub brand: u32,
    pub description: u32,
    pub category: u32,
    pub partial_word: u32,
    pub fuzzy_word: u32,
    pub related_category: u32,
    pub related_brand: u32,
    pub similarity_threshold: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            name: NAME_MATCH_SCORE,
            brand: BRAND_MATCH_SCORE,
            description: DESCRIPTION_MATCH_SCORE,
            category: CATEGORY_MATCH_SCORE,
            partial_word: PARTIAL_WORD_SCORE,
            fuzzy_word: FUZZY_WORD_SCORE,
            related_category: RELATED_CATEGORY_SCORE,
            related_brand: RELATED_BRAND_SCORE,
            similarity_threshold: SIMILARITY_THRESHOLD,
        }
    }
}

impl ScoringWeights {
    /// Every rule's point value, keyed by its config field name.
    pub fn points(&self) -> [(&'static str, u32); 8] {
        [
            ("name", self.name),
            ("brand", self.brand),
            ("description", self.description),
            ("category", self.category),
            ("partial_word", self.partial_word),
            ("fuzzy_word", self.fuzzy_word),
            ("related_category", self.related_category),
            ("related_brand", self.related_brand),
        ]
    }
}

/// A query word with its length cached.
#[derive(Debug, Clone)]
struct QueryWord {
    text: String,
    len: usize,
}

/// Everything about a query that doesn't depend on the product being scored.
///
/// Built once per search. The relatedness rules need to know which categories
/// and brands belong to products whose *name* contains the query; collecting
/// those up front keeps per-product scoring linear in the catalog instead of
/// quadratic.
#[derive(Debug, Clone)]
pub struct QueryContext<'a> {
    query: String,
    words: Vec<QueryWord>,
    hit_categories: HashSet<&'a str>,
    hit_brands: HashSet<&'a str>,
}

impl<'a> QueryContext<'a> {
    /// Prepare `query` against the full `catalog`.
    ///
    /// Returns `None` for an inactive (empty or whitespace-only) query.
    pub fn new(query: &str, catalog: &'a [Product]) -> Option<Self> {
        if !is_active_query(query) {
            return None;
        }

        let query = normalize_query(query);
        let words = words(&query)
            .map(|w| QueryWord {
                text: w.to_string(),
                len: char_len(w),
            })
            .collect();

        let mut hit_categories = HashSet::new();
        let mut hit_brands = HashSet::new();
        for product in catalog {
            if product.name.to_lowercase().contains(&query) {
                hit_categories.insert(product.category.as_str());
                if let Some(brand) = product.brand.as_deref().filter(|b| !b.is_empty()) {
                    hit_brands.insert(brand);
                }
            }
        }

        Some(Self {
            query,
            words,
            hit_categories,
            hit_brands,
        })
    }

    /// The normalized query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Did any product's name contain the query?
    pub fn has_name_hits(&self) -> bool {
        !self.hit_categories.is_empty()
    }

    /// Total score for one product.
    pub fn score(&self, product: &Product, weights: &ScoringWeights) -> u32 {
        self.breakdown(product, weights).total()
    }

    /// Score one product, rule by rule.
    pub fn breakdown(&self, product: &Product, weights: &ScoringWeights) -> ScoreBreakdown {
        let q = self.query.as_str();
        let name = product.name.to_lowercase();
        let description = product.description.to_lowercase();
        let brand = product.brand_str().to_lowercase();
        let category = product.category.to_lowercase();

        let mut breakdown = ScoreBreakdown::default();

        let name_hit = name.contains(q);
        let description_hit = description.contains(q);
        if name_hit {
            breakdown.name = weights.name;
        }
        if brand.contains(q) {
            breakdown.brand = weights.brand;
        }
        if description_hit {
            breakdown.description = weights.description;
        }
        if category.contains(q) {
            breakdown.category = weights.category;
        }

        let product_words: Vec<(&str, usize)> = words(&name)
            .chain(words(&description))
            .chain(words(&brand))
            .map(|w| (w, char_len(w)))
            .collect();

        for query_word in &self.words {
            let partial_eligible = query_word.len > PARTIAL_MIN_EXCLUSIVE;
            let fuzzy_eligible = query_word.len > FUZZY_MIN_EXCLUSIVE;
            if !partial_eligible {
                continue;
            }

            for &(word, word_len) in &product_words {
                if word.contains(query_word.text.as_str()) {
                    breakdown.partial =
                        breakdown.partial.saturating_add(weights.partial_word);
                }
                if fuzzy_eligible
                    && word_len > FUZZY_MIN_EXCLUSIVE
                    && is_similar(&query_word.text, word, weights.similarity_threshold)
                {
                    breakdown.fuzzy =
                        breakdown.fuzzy.saturating_add(weights.fuzzy_word);
                }
            }
        }

        // Only products that don't match on their own get pulled in by association.
        // A product's own name never contains the query here, so the hit sets
        // only ever describe *other* products.
        if !name_hit && !description_hit {
            if self.hit_categories.contains(product.category.as_str()) {
                breakdown.related_category = weights.related_category;
            }
            if let Some(own_brand) = product.brand.as_deref().filter(|b| !b.is_empty()) {
                if self.hit_brands.contains(own_brand) {
                    breakdown.related_brand = weights.related_brand;
                }
            }
        }

        breakdown
    }
}

/// Score a single product against `query`, with `catalog` as the full collection.
///
/// Convenience for one-off scoring; ranking many products should build one
/// `QueryContext` and reuse it.
pub fn score_product(query: &str, product: &Product, catalog: &[Product]) -> u32 {
    QueryContext::new(query, catalog)
        .map(|ctx| ctx.score(product, &ScoringWeights::default()))
        .unwrap_or(0)
}
