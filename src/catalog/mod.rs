// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! An in-memory snapshot of the Catalog Store.
//!
//! The storefront never pushes search down to the database: it reads the whole
//! `products` table newest-first and filters in memory. `Catalog` is that
//! snapshot. It owns listing order and the category filter, and it decides
//! whether a request is a search (ranked) or a plain listing.

mod page;

pub use page::*;

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{CatalogError, Result};
use crate::search::SearchRanker;
use crate::types::{Product, ScoredProduct};
use crate::utils::is_active_query;

/// Category id that means "no filter".
pub const ALL_CATEGORIES: &str = "all";

/// A catalog export: either a bare array, or the array under `products`.
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Product>),
    Wrapped { products: Vec<Product> },
}

impl From<CatalogFile> for Vec<Product> {
    fn from(file: CatalogFile) -> Self {
        match file {
            CatalogFile::Bare(products) | CatalogFile::Wrapped { products } => products,
        }
    }
}

/// Products in listing order: newest first, undated last.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, putting products in listing order.
    ///
    /// Products with equal (or missing) `created_at` keep their relative order.
    pub fn new(mut products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: product.id.clone(),
                });
            }
        }

        // Option orders None < Some, so descending puts undated products last
        products.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(Self { products })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| CatalogError::json(e, None))?;
        Self::new(file.into())
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let file: CatalogFile =
            serde_json::from_reader(reader).map_err(|e| CatalogError::json(e, None))?;
        Self::new(file.into())
    }

    /// Load a catalog export from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| CatalogError::IoError {
            path: path.to_path_buf(),
            source: e,
        })?;
        let file: CatalogFile =
            serde_json::from_str(&content).map_err(|e| CatalogError::json(e, Some(path)))?;
        let catalog = Self::new(file.into())?;
        info!(path = %path.display(), products = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Every product, in listing order.
    pub fn listing(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Distinct categories, in the order they first appear in the listing.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .map(|p| p.category.as_str())
            .filter(|c| seen.insert(*c))
            .collect()
    }

    /// Products in `category`, in listing order.
    ///
    /// `"all"` (any case) disables the filter; anything else must equal the
    /// stored category exactly.
    pub fn in_category(&self, category: &str) -> Vec<&Product> {
        if category.eq_ignore_ascii_case(ALL_CATEGORIES) {
            return self.products.iter().collect();
        }
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    /// What the storefront shows for a (query, category) request.
    ///
    /// An active query ranks the whole catalog and ignores `category`: starting
    /// a search resets the category filter to "all". Otherwise it is the
    /// category listing, every entry with score 0.
    pub fn browse(&self, ranker: &SearchRanker, query: &str, category: &str) -> Browse {
        if is_active_query(query) {
            let items = ranker.rank(query, &self.products);
            debug!(query, results = items.len(), "browse: search");
            return Browse {
                mode: BrowseMode::Search {
                    query: query.trim().to_string(),
                },
                items,
            };
        }

        let items: Vec<ScoredProduct> = self
            .in_category(category)
            .into_iter()
            .map(|p| ScoredProduct::new(p.clone(), 0))
            .collect();
        debug!(category, results = items.len(), "browse: listing");
        Browse {
            mode: BrowseMode::Listing {
                category: category.to_string(),
            },
            items,
        }
    }
}

/// Whether a `Browse` came from a search or a category listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseMode {
    Search { query: String },
    Listing { category: String },
}

/// The product list for one storefront request.
#[derive(Debug, Clone)]
pub struct Browse {
    pub mode: BrowseMode,
    pub items: Vec<ScoredProduct>,
}

impl Browse {
    pub fn is_search(&self) -> bool {
        matches!(self.mode, BrowseMode::Search { .. })
    }

    /// Heading the view shows above the results.
    pub fn heading(&self) -> String {
        match &self.mode {
            BrowseMode::Search { query } => format!("Search Results for \"{}\"", query),
            BrowseMode::Listing { category } => category_title(category),
        }
    }

    /// The first `visible` items, plus load-more state.
    pub fn page(&self, visible: usize) -> Page<'_, ScoredProduct> {
        Page::of(&self.items, visible)
    }
}

/// Display title for a category id: "All Products", or the id capitalized.
pub fn category_title(category: &str) -> String {
    if category.eq_ignore_ascii_case(ALL_CATEGORIES) {
        return "All Products".to_string();
    }
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
