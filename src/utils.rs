//! Utility functions for string processing.

/// Normalize a query for matching: lowercase, with surrounding whitespace trimmed.
///
/// Inner whitespace is kept as typed, so `"galaxy  s24"` only substring-matches
/// text with the same double space. Word-level matching splits on any
/// whitespace run and doesn't care.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Is there anything to search for?
///
/// An empty or whitespace-only query means "no active search": callers show
/// the plain category listing instead of ranked results.
pub fn is_active_query(query: &str) -> bool {
    !query.trim().is_empty()
}

/// Whitespace-delimited words of already-lowercased text.
pub fn words(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}

/// Length in characters, which is what every word-length rule counts.
#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}
