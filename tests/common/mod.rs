//! Shared test utilities and fixtures.

#![allow(dead_code)]

use talpa::{Index, IndexStore, SearchConfig, SearchEngine};

// Re-export canonical fixture builders from talpa::testing
pub use talpa::testing::{doc, overlapping_index, two_doc_index};

/// Build an engine with default weights over a raw index.
///
/// Panics on an invalid index - integration fixtures are expected to be
/// well formed.
pub fn engine_over(index: Index) -> SearchEngine {
    SearchEngine::with_defaults(IndexStore::new(index).expect("fixture index must validate"))
}

/// Build an engine with an explicit configuration.
pub fn engine_with(index: Index, config: SearchConfig) -> SearchEngine {
    SearchEngine::new(IndexStore::new(index).expect("fixture index must validate"), config)
}

/// A documentation corpus in the exact wire shape the offline indexer
/// emits, covering every table: documents, body terms (both entry
/// representations), title terms, objects, categories, and stopwords.
pub const CORPUS_JSON: &str = r#"{
    "documents": [
        {"name": "aliases", "title": "Template Aliases", "path": "aliases.rst"},
        {"name": "class-templates", "title": "Class Templates", "path": "class-templates.rst"},
        {"name": "function-templates", "title": "Function Templates", "path": "function-templates.rst"},
        {"name": "index", "title": "Generic Programming", "path": "index.md"},
        {"name": "variable-templates", "title": "Variable Templates", "path": "variable-templates.rst"}
    ],
    "terms": {
        "alias": 0,
        "declar": [0, 1, 4],
        "deduc": [1, 2],
        "generic": [1, 3],
        "instanti": [1, 2, 4],
        "paramet": [0, 1, 2, 4],
        "specializ": [1, 2],
        "templat": [0, 1, 2, 3, 4],
        "typedef": 0,
        "variabl": 4
    },
    "titleterms": {
        "alias": 0,
        "class": 1,
        "function": 2,
        "generic": 3,
        "templat": [0, 1, 2, 4],
        "variabl": 4
    },
    "objects": {
        "std": [
            [1, 0, 1, "std-vector", "vector"],
            [2, 1, 0, "std-make-pair", "make_pair"]
        ],
        "": [
            [4, 2, 2, "pi-v", "pi_v"]
        ]
    },
    "categories": {"0": "class", "1": "function", "2": "variable"},
    "stopwords": ["the", "a", "an", "of", "in"]
}"#;

/// Engine over [`CORPUS_JSON`] with default weights.
pub fn corpus_engine() -> SearchEngine {
    engine_over(Index::from_json(CORPUS_JSON).expect("corpus fixture must parse"))
}
