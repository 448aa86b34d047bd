// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through search and listing.
//!
//! `Product` mirrors a row of the storefront's `products` table, using the
//! table's snake_case column names so a JSON export of the table loads as-is.
//! The ranker only ever reads products; nothing in this crate mutates one.
//!
//! | Rust Type        | Purpose                                         |
//! |------------------|-------------------------------------------------|
//! | `Product`        | A catalog entry, read-only input to the ranker  |
//! | `ScoredProduct`  | A product plus its relevance for one query      |
//! | `ScoreBreakdown` | Per-rule contributions behind a score           |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog entry as stored by the Catalog Store.
///
/// `brand` is optional in the store; a missing brand matches nothing (it is
/// treated as the empty string for substring checks and never equals another
/// product's brand for the relatedness fallback).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque identifier (a UUID in the hosted store, but never parsed).
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub category: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<f64>,
    /// Star rating, 0 through 5.
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub reviews: u32,
    /// Discount percentage shown as a badge, e.g. `8` renders as `-8%`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
    #[serde(default)]
    pub is_new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    /// Insertion time; only used for newest-first listing order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Product {
    /// Brand for matching purposes: missing brand is the empty string.
    pub fn brand_str(&self) -> &str {
        self.brand.as_deref().unwrap_or("")
    }

    /// Price the way the product card prints it: `$1199.99`.
    pub fn display_price(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Strike-through price, present only when the product is on sale.
    pub fn display_original_price(&self) -> Option<String> {
        self.original_price.map(|p| format!("${:.2}", p))
    }

    /// Discount badge text (`-8%`). A zero discount shows no badge.
    pub fn display_discount(&self) -> Option<String> {
        match self.discount {
            Some(d) if d > 0 => Some(format!("-{}%", d)),
            _ => None,
        }
    }
}

/// A product with its relevance score for one query.
///
/// Computed per search, discarded after rendering. Serializes as the product's
/// own fields plus `score`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredProduct {
    #[serde(flatten)]
    pub product: Product,
    pub score: u32,
}

impl ScoredProduct {
    pub fn new(product: Product, score: u32) -> Self {
        Self { product, score }
    }
}

/// Where a score came from, rule by rule.
///
/// Each field holds the points a rule contributed (not a count of hits), so
/// `total()` is exactly the score the ranker assigns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Name contains the query verbatim.
    pub name: u32,
    /// Brand contains the query verbatim.
    pub brand: u32,
    /// Description contains the query verbatim.
    pub description: u32,
    /// Category contains the query verbatim.
    pub category: u32,
    /// Sum over (query word, product word) substring hits.
    pub partial: u32,
    /// Sum over (query word, product word) near-miss spellings.
    pub fuzzy: u32,
    /// Shares a category with a product whose name matches.
    pub related_category: u32,
    /// Shares a brand with a product whose name matches.
    pub related_brand: u32,
}

impl ScoreBreakdown {
    /// Sum of every rule's points, saturating at `u32::MAX`.
    pub fn total(&self) -> u32 {
        [
            self.brand,
            self.description,
            self.category,
            self.partial,
            self.fuzzy,
            self.related_category,
            self.related_brand,
        ]
        .into_iter()
        .fold(self.name, u32::saturating_add)
    }

    /// Did the product match nothing at all?
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
