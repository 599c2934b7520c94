//! Scoring weights and result ordering.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! ## EXACT_DOMINANCE
//! Exact-match weights must exceed their partial counterparts:
//!
//! ```text
//! title > partial_title        15.0 > 7.0   ✓
//! term  > partial_term          1.0 > 0.3   ✓
//! ```
//!
//! A document matched only by substring containment must never outrank one
//! with an exact hit, all else equal. The defaults keep a comfortable gap;
//! deployments tuning these values need to preserve the inequalities.
//!
//! ## TITLE_DOMINANCE
//! `title > term`: a term found in a title outranks the same term found in
//! body text. With the defaults, 15.0 > 1.0.
//!
//! The constants are carried on [`SearchConfig`] rather than as globals so
//! two engines with different tunings can coexist in one process.

use crate::aggregate::DocScore;
use crate::index::IndexStore;
use std::cmp::Ordering;

/// Scoring and matching parameters for a [`crate::SearchEngine`].
///
/// Plain struct with public fields; construct with struct-update syntax from
/// `Default` to override individual knobs:
///
/// ```
/// use talpa::SearchConfig;
///
/// let config = SearchConfig {
///     scan_cap: 1_000,
///     ..SearchConfig::default()
/// };
/// assert_eq!(config.title, 15.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchConfig {
    /// Exact match in a document title.
    pub title: f64,
    /// Substring match against a title term.
    pub partial_title: f64,
    /// Exact match in body text.
    pub term: f64,
    /// Substring match against a body term.
    pub partial_term: f64,
    /// Object hit on the full qualified name.
    pub object_name: f64,
    /// Object hit on a `.suffix` of the qualified name.
    pub object_partial: f64,
    /// Rank boost indexed by object priority; priorities outside the table
    /// contribute nothing.
    pub priority_boosts: Vec<f64>,
    /// Tokens shorter than this are excluded from substring matching.
    pub min_partial_len: usize,
    /// Soft cap on vocabulary entries scanned per table per token. Hitting
    /// it stops accumulating partial matches; it never fails the query.
    pub scan_cap: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            title: 15.0,
            partial_title: 7.0,
            term: 1.0,
            partial_term: 0.3,
            object_name: 11.0,
            object_partial: 6.0,
            priority_boosts: vec![15.0, 5.0, -5.0],
            min_partial_len: 3,
            scan_cap: 10_000,
        }
    }
}

impl SearchConfig {
    /// Rank boost for an object priority code.
    pub fn priority_boost(&self, priority: i32) -> f64 {
        usize::try_from(priority)
            .ok()
            .and_then(|p| self.priority_boosts.get(p))
            .copied()
            .unwrap_or(0.0)
    }
}

/// Compare two aggregated documents for ranking.
///
/// Sort order:
/// 1. **Score** - descending; the sum over every contributing channel.
/// 2. **Title hit** - a document with any title-channel contribution beats
///    one without, when scores tie.
/// 3. **Title length** - shorter display title wins.
/// 4. **Doc index** - ascending, for absolute determinism.
pub fn compare_results(a: &DocScore, b: &DocScore, store: &IndexStore) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => match b.title_hit.cmp(&a.title_hit) {
            Ordering::Equal => {
                let a_len = store.title_of(a.doc).len();
                let b_len = store.title_of(b.doc).len();
                match a_len.cmp(&b_len) {
                    Ordering::Equal => a.doc.cmp(&b.doc),
                    ord => ord,
                }
            }
            ord => ord,
        },
    }
}
