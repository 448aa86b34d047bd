// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via edit distance.
//!
//! The ranker only ever compares single words, so a plain two-row Levenshtein
//! is plenty. `is_similar` adds a bounded fast path for the thresholded check.

mod levenshtein;

pub use levenshtein::*;
