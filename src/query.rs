//! Query normalization: raw user input to matchable tokens.
//!
//! Splitting happens on runs of non-alphanumeric characters, so punctuation,
//! quotes, and whitespace all separate tokens. Tokens are lowercased,
//! stop words dropped, and duplicates collapsed preserving first-seen order -
//! query semantics are set-based, each distinct token must match.
//!
//! Tokens shorter than the configured minimum are kept but flagged `short`.
//! Short tokens still participate in exact and object matching; they are
//! excluded from the substring scan, where a one- or two-character fragment
//! would match most of the vocabulary.

use crate::index::IndexStore;

/// One normalized query token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerm {
    /// Lowercased token text. Never empty.
    pub text: String,
    /// Too short for substring matching.
    pub short: bool,
}

/// Normalize a raw query string into distinct, matchable tokens.
///
/// An empty return for a non-empty query is normal: all-stop-word and
/// all-punctuation queries normalize to nothing.
pub fn normalize_query(raw: &str, store: &IndexStore, min_partial_len: usize) -> Vec<QueryTerm> {
    let mut terms: Vec<QueryTerm> = Vec::new();

    for token in raw.to_lowercase().split(|c: char| !c.is_alphanumeric()) {
        if token.is_empty() || store.is_stop_word(token) {
            continue;
        }
        if terms.iter().any(|t| t.text == token) {
            continue;
        }
        terms.push(QueryTerm {
            text: token.to_string(),
            short: token.chars().count() < min_partial_len,
        });
    }

    terms
}
