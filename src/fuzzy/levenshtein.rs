// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with an early-exit optimization.
//!
//! The key insight: `|len(a) - len(b)|` is a lower bound on edit distance.
//! If two strings differ in length by more than the threshold, skip the O(nm) DP.
//! The similarity check the ranker runs for every word pair leans on this: most
//! pairs in a catalog are nowhere near each other and bail out before the DP.
//!
//! All lengths are in characters, not bytes. Callers lowercase before comparing;
//! nothing here folds case.

/// Classic Levenshtein distance: insertions, deletions and substitutions each cost 1.
///
/// Two-row DP, so memory is O(len(b)).
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    let b_len = b.chars().count();
    if a.is_empty() {
        return b_len;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = if ac == bc { 0 } else { 1 };
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
        }
    }

    dp[b_len]
}

/// Are these strings within `max` edits of each other?
///
/// Bounded Levenshtein with two early-exit paths:
/// 1. If length difference exceeds `max`, return false immediately
/// 2. If minimum row value exceeds `max`, abandon the DP early
///
/// Both are sound: row minimums never decrease, so a row that is already over
/// budget can't recover.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    // Early-exit: length difference is a lower bound on edit distance
    if a_len.abs_diff(b_len) > max {
        return false;
    }

    let mut dp: Vec<usize> = (0..=b_len).collect();
    for (i, ac) in a.chars().enumerate() {
        let mut prev = dp[0];
        dp[0] = i + 1;
        let mut min_row = dp[0];

        for (j, bc) in b.chars().enumerate() {
            let temp = dp[j + 1];
            let cost = if ac == bc { 0 } else { 1 };
            dp[j + 1] = (dp[j + 1] + 1).min(dp[j] + 1).min(prev + cost);
            prev = temp;
            if dp[j + 1] < min_row {
                min_row = dp[j + 1];
            }
        }

        // Early-exit: if minimum in this row exceeds max, no point continuing
        if min_row > max {
            return false;
        }
    }

    dp[b_len] <= max
}

/// Normalized similarity in `[0, 1]`: `(max_len - distance) / max_len`.
///
/// Two empty strings are identical (1.0).
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let distance = levenshtein_distance(a, b);
    ratio(max_len, distance)
}

/// `similarity(a, b) > threshold`, without running the full DP when it can't be.
///
/// The similarity ratio falls as the distance grows, so the largest distance
/// that still clears `threshold` turns the question into a bounded Levenshtein
/// check. That budget is found with the same float expression `similarity`
/// uses, so the two never disagree at the boundary.
pub fn is_similar(a: &str, b: &str, threshold: f64) -> bool {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0 > threshold;
    }
    if ratio(max_len, 0) <= threshold {
        return false;
    }

    let mut budget = 0;
    while budget < max_len && ratio(max_len, budget + 1) > threshold {
        budget += 1;
    }

    levenshtein_within(a, b, budget)
}

#[inline]
fn ratio(max_len: usize, distance: usize) -> f64 {
    (max_len - distance) as f64 / max_len as f64
}
