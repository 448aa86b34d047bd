//! Fuzzy product search for a small storefront catalog.
//!
//! The storefront reads its whole catalog into memory and ranks it against
//! whatever is typed in the search box. This crate is that ranker, plus the
//! catalog plumbing around it (listing order, category filter, "load more"
//! pagination).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  scoring/    │────▶│  search.rs   │
//! │ (Product,   │     │ (QueryContext│     │ (SearchRanker│
//! │ ScoredProd.)│     │  weights)    │     │  rank)       │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        │                   ▼                    ▼
//!        │            ┌──────────────┐     ┌──────────────┐
//!        │            │  fuzzy/      │     │  catalog/    │
//!        │            │ (Levenshtein │     │ (listing,    │
//!        └───────────▶│  similarity) │     │  browse, page│
//!                     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use sokoni::{rank, testing::phone_catalog};
//!
//! let products = phone_catalog();
//! let results = rank("iphone", &products);
//! assert_eq!(results[0].product.name, "iPhone 15 Pro");
//! assert!(results[0].score >= 100);
//! ```

// Module declarations
pub mod catalog;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod scoring;
mod search;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use catalog::{
    category_title, load_more, Browse, BrowseMode, Catalog, Page, ALL_CATEGORIES,
    GRID_PAGE_SIZE, SEARCH_PAGE_SIZE,
};
pub use config::Config;
pub use error::{CatalogError, ConfigError};
pub use fuzzy::{is_similar, levenshtein_distance, levenshtein_within, similarity};
pub use scoring::ranking::compare_scored;
pub use scoring::{score_product, QueryContext, ScoringWeights};
pub use search::{rank, SearchRanker};
pub use types::{Product, ScoreBreakdown, ScoredProduct};
pub use utils::{is_active_query, normalize_query, words};
