//! The search engine: orchestration of normalize, match, aggregate, rank.
//!
//! [`SearchEngine::search`] is a pure function of the store and the query
//! string: no side effects, no index mutation, same ordered output for the
//! same inputs. The engine holds the store by value and hands out results
//! by value, so callers on any number of threads can share one engine by
//! `&` borrow.

use crate::aggregate::aggregate;
use crate::index::IndexStore;
use crate::matcher::match_token;
use crate::query::normalize_query;
use crate::scoring::{compare_results, SearchConfig};
use crate::types::SearchResult;

/// Query engine over one validated, immutable index.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    store: IndexStore,
    config: SearchConfig,
}

impl SearchEngine {
    /// Build an engine from a validated store and explicit configuration.
    pub fn new(store: IndexStore, config: SearchConfig) -> SearchEngine {
        SearchEngine { store, config }
    }

    /// Build an engine with the default weights.
    pub fn with_defaults(store: IndexStore) -> SearchEngine {
        SearchEngine::new(store, SearchConfig::default())
    }

    /// The underlying store.
    pub fn store(&self) -> &IndexStore {
        &self.store
    }

    /// The active configuration.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Resolve a raw query into a ranked result sequence.
    ///
    /// Every outcome is total: empty queries, all-stop-word queries, and
    /// queries matching nothing all return an empty vector.
    pub fn search(&self, raw_query: &str) -> Vec<SearchResult> {
        let tokens = normalize_query(raw_query, &self.store, self.config.min_partial_len);
        if tokens.is_empty() {
            return Vec::new();
        }

        let per_token: Vec<_> = tokens
            .iter()
            .map(|token| match_token(&self.store, &self.config, token))
            .collect();

        let mut scored = aggregate(&per_token);
        scored.sort_by(|a, b| compare_results(a, b, &self.store));

        scored
            .into_iter()
            .map(|ds| SearchResult {
                doc: ds.doc,
                score: ds.score,
                title: self.store.title_of(ds.doc).to_string(),
                path: self.store.path_of(ds.doc).to_string(),
                category: ds.category,
            })
            .collect()
    }
}
