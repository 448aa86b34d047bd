// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored products get sorted.
//!
//! Higher score first. Equal scores keep the order the catalog handed them
//! over in (newest first, for a store listing), which is why this is a stable
//! sort with no further tiebreakers.

use crate::types::ScoredProduct;
use std::cmp::Ordering;

/// Compare two scored products for ranking: descending by score only.
///
/// Returns `Equal` for equal scores on purpose; pair it with a stable sort so
/// input order decides ties.
pub fn compare_scored(a: &ScoredProduct, b: &ScoredProduct) -> Ordering {
    b.score.cmp(&a.score)
}

/// Drop zero scores and sort the rest best-first, keeping input order on ties.
pub fn finalize(mut scored: Vec<ScoredProduct>) -> Vec<ScoredProduct> {
    scored.retain(|p| p.score > 0);
    // slice::sort_by is stable
    scored.sort_by(compare_scored);
    scored
}
