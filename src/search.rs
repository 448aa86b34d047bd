// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Product search: score every product, keep the hits, best first.
//!
//! This is the one place ranking happens. The catalog listing and the search
//! results page both go through `SearchRanker::rank`, so they can't drift apart.
//!
//! Ranking is a pure function of the query and the product slice. It does no
//! I/O and holds no state between calls, so it is fine to rerun it on every
//! keystroke: a newer query just replaces the old result.

use tracing::{debug, trace};

use crate::scoring::ranking::finalize;
use crate::scoring::{QueryContext, ScoringWeights};
use crate::types::{Product, ScoreBreakdown, ScoredProduct};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Ranks catalog products against free-text queries.
#[derive(Debug, Clone, Default)]
pub struct SearchRanker {
    weights: ScoringWeights,
}

impl SearchRanker {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank `products` against `query`.
    ///
    /// `products` doubles as the full collection for the relatedness rules.
    /// Returns only products with a positive score, highest first; equal
    /// scores keep their order from `products`. An inactive query returns
    /// nothing.
    pub fn rank(&self, query: &str, products: &[Product]) -> Vec<ScoredProduct> {
        let Some(ctx) = QueryContext::new(query, products) else {
            return Vec::new();
        };

        let scored = products
            .iter()
            .map(|product| {
                let score = ctx.score(product, &self.weights);
                trace!(id = %product.id, score, "scored product");
                ScoredProduct::new(product.clone(), score)
            })
            .collect();

        let ranked = finalize(scored);
        debug!(
            query = ctx.query(),
            candidates = products.len(),
            results = ranked.len(),
            name_hits = ctx.has_name_hits(),
            "ranked catalog"
        );
        ranked
    }

    /// Same output as `rank`, with per-product scoring spread over the rayon pool.
    ///
    /// Scores are collected back in input order before the stable sort, so ties
    /// resolve exactly as in the sequential path.
    #[cfg(feature = "parallel")]
    pub fn rank_parallel(&self, query: &str, products: &[Product]) -> Vec<ScoredProduct> {
        let Some(ctx) = QueryContext::new(query, products) else {
            return Vec::new();
        };

        let scored: Vec<ScoredProduct> = products
            .par_iter()
            .map(|product| ScoredProduct::new(product.clone(), ctx.score(product, &self.weights)))
            .collect();

        let ranked = finalize(scored);
        debug!(
            query = ctx.query(),
            candidates = products.len(),
            results = ranked.len(),
            name_hits = ctx.has_name_hits(),
            "ranked catalog (parallel)"
        );
        ranked
    }

    /// Score one product, with `catalog` as the full collection.
    pub fn score(&self, query: &str, product: &Product, catalog: &[Product]) -> u32 {
        self.explain(query, product, catalog).total()
    }

    /// Rule-by-rule breakdown of one product's score.
    pub fn explain(&self, query: &str, product: &Product, catalog: &[Product]) -> ScoreBreakdown {
        QueryContext::new(query, catalog)
            .map(|ctx| ctx.breakdown(product, &self.weights))
            .unwrap_or_default()
    }
}

/// Rank `products` against `query` with the default weights.
pub fn rank(query: &str, products: &[Product]) -> Vec<ScoredProduct> {
    SearchRanker::default().rank(query, products)
}
