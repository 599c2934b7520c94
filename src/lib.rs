//! Deterministic query and ranking engine for precomputed documentation
//! search indexes.
//!
//! An offline indexer (not part of this crate) emits a JSON index: document
//! metadata, a term table for body text, a term table for titles, and a
//! table of named API objects. This crate consumes that index and answers
//! queries - it never re-scans source text.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  types.rs    │───▶│  index.rs    │───▶│  query.rs    │
//! │ (Index,      │    │ (IndexStore, │    │ (normalize_  │
//! │  TermEntry)  │    │  validation) │    │  query)      │
//! └──────────────┘    └──────────────┘    └──────┬───────┘
//!                                                │
//!        ┌──────────────┬──────────────┬─────────┘
//!        ▼              ▼              ▼
//! ┌──────────────┐ ┌──────────────┐ ┌──────────────┐
//! │  matcher.rs  │▶│ aggregate.rs │▶│  scoring.rs  │
//! │ (per-token   │ │ (AND across  │ │ (weights,    │
//! │  hits)       │ │  tokens)     │ │  ranking)    │
//! └──────────────┘ └──────────────┘ └──────────────┘
//!                        orchestrated by search.rs
//! ```
//!
//! # Usage
//!
//! ```
//! use talpa::{Index, IndexStore, SearchConfig, SearchEngine};
//!
//! let json = r#"{
//!     "documents": [
//!         {"name": "templates", "title": "Templates", "path": "templates.rst"}
//!     ],
//!     "terms": {"template": 0},
//!     "titleterms": {"template": 0}
//! }"#;
//!
//! let index = Index::from_json(json).unwrap();
//! let store = IndexStore::new(index).unwrap();
//! let engine = SearchEngine::new(store, SearchConfig::default());
//!
//! let results = engine.search("template");
//! assert_eq!(results[0].score, 16.0); // 1.0 body + 15.0 title
//! ```
//!
//! # Guarantees
//!
//! - **Total**: every query-time path returns a (possibly empty) result
//!   vector; only [`IndexStore::new`] can fail, and only on a structurally
//!   invalid index.
//! - **Deterministic**: the same query against the same index yields the
//!   same ordered sequence, and reordering query tokens changes nothing.
//! - **Shareable**: the engine takes `&self`; concurrent queries need no
//!   locking because the index is never mutated after construction.

// Module declarations
mod aggregate;
mod index;
mod matcher;
mod query;
mod scoring;
mod search;
mod types;

#[doc(hidden)]
pub mod testing;

// Re-exports for public API
pub use index::{IndexError, IndexStore, ObjectMatch};
pub use query::{normalize_query, QueryTerm};
pub use scoring::SearchConfig;
pub use search::SearchEngine;
pub use types::{Channel, Document, Index, ObjectEntry, SearchResult, TermEntry};
