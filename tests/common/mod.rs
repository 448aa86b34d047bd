//! Shared test utilities and fixtures.

#![allow(dead_code)]

use sokoni::{Catalog, ScoredProduct};
use std::sync::LazyLock;

// Re-export canonical test utilities from sokoni::testing
pub use sokoni::testing::{make_full_product, make_product, phone_catalog, storefront_catalog};

/// Path to the sample catalog export.
pub const FIXTURE_CATALOG: &str = "data/catalog.json";

/// Sample catalog, loaded once per test binary.
static FIXTURE: LazyLock<Catalog> =
    LazyLock::new(|| Catalog::load(FIXTURE_CATALOG).expect("Failed to load fixture catalog"));

/// The sample catalog export.
pub fn fixture_catalog() -> &'static Catalog {
    &FIXTURE
}

/// Product ids of a result list, in order.
pub fn ids(results: &[ScoredProduct]) -> Vec<&str> {
    results.iter().map(|p| p.product.id.as_str()).collect()
}

/// Score of the product with `id`, or `None` if it was filtered out.
pub fn score_of(results: &[ScoredProduct], id: &str) -> Option<u32> {
    results.iter().find(|p| p.product.id == id).map(|p| p.score)
}
