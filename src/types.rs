// Copyright 2025-present The Talpa Authors
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a precomputed search index.
//!
//! These types mirror the shape the offline indexer emits: an ordered list
//! of documents, two term tables (body and title occurrences), and a table
//! of named API objects grouped by module prefix. Everything here is plain
//! data - validation lives in [`crate::IndexStore`], matching and scoring
//! live in the engine modules.
//!
//! # Invariants (checked at [`crate::IndexStore`] construction)
//!
//! - Every document index stored in `terms`, `titleterms`, or `objects`
//!   is a valid index into `documents`.
//! - Term keys are never empty.
//!
//! Downstream code indexes `documents` without bounds checks on the
//! strength of that validation, so don't hand a raw [`Index`] to anything
//! except `IndexStore::new`.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// DOCUMENTS
// =============================================================================

/// One indexed document.
///
/// `name` is the unique document key, `title` the display title, and `path`
/// the source file the document was generated from. The path is carried for
/// linking only - matching never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub name: String,
    pub title: String,
    pub path: String,
}

// =============================================================================
// TERM TABLES
// =============================================================================

/// Documents a term occurs in.
///
/// The source format stores a bare integer when a term occurs in exactly one
/// document and an array otherwise - a space optimization that matters at
/// tens of thousands of terms. The tagged variant keeps both cases
/// representable while letting matching code iterate uniformly via
/// [`TermEntry::docs`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TermEntry {
    /// Term occurs in exactly one document.
    Single(u32),
    /// Term occurs in several documents.
    Many(Vec<u32>),
}

impl TermEntry {
    /// The referenced document indices, regardless of representation.
    pub fn docs(&self) -> &[u32] {
        match self {
            TermEntry::Single(doc) => std::slice::from_ref(doc),
            TermEntry::Many(docs) => docs,
        }
    }

    /// Number of documents this entry references.
    pub fn len(&self) -> usize {
        self.docs().len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs().is_empty()
    }
}

// =============================================================================
// OBJECTS
// =============================================================================

/// Wire representation of an object: `[doc, typeCode, priority, anchor, name]`.
type ObjectTuple = (u32, u32, i32, String, String);

/// A named API symbol indexed separately from free text.
///
/// The fully qualified name is `prefix.name` where `prefix` is the grouping
/// key in [`Index::objects`] (an empty prefix means the name stands alone).
/// `type_code` selects a human-readable category label from
/// [`Index::categories`]; `priority` selects a rank boost from the
/// configured priority table. `anchor` is the page fragment consumers use
/// for deep links - it is carried through untouched and never matched on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ObjectTuple", into = "ObjectTuple")]
pub struct ObjectEntry {
    pub doc: u32,
    pub type_code: u32,
    pub priority: i32,
    pub anchor: String,
    pub name: String,
}

impl From<ObjectTuple> for ObjectEntry {
    fn from((doc, type_code, priority, anchor, name): ObjectTuple) -> Self {
        ObjectEntry {
            doc,
            type_code,
            priority,
            anchor,
            name,
        }
    }
}

impl From<ObjectEntry> for ObjectTuple {
    fn from(entry: ObjectEntry) -> Self {
        (
            entry.doc,
            entry.type_code,
            entry.priority,
            entry.anchor,
            entry.name,
        )
    }
}

// =============================================================================
// THE INDEX
// =============================================================================

/// The complete precomputed index, exactly as the offline indexer emits it.
///
/// Term keys arrive already normalized (lowercase, stemmed); the engine never
/// re-tokenizes document text. `BTreeMap` rather than `HashMap` keeps every
/// iteration over the tables in a fixed order, which the determinism
/// guarantee of [`crate::SearchEngine::search`] leans on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Index {
    /// Ordered document list; term and object tables refer to positions here.
    pub documents: Vec<Document>,
    /// Term -> documents whose body text contains it.
    pub terms: BTreeMap<String, TermEntry>,
    /// Term -> documents whose title contains it.
    #[serde(default)]
    pub titleterms: BTreeMap<String, TermEntry>,
    /// Module prefix -> objects defined under it.
    #[serde(default)]
    pub objects: BTreeMap<String, Vec<ObjectEntry>>,
    /// Object type code -> human-readable category label.
    #[serde(default)]
    pub categories: BTreeMap<u32, String>,
    /// Terms excluded from both indexing and querying.
    #[serde(default)]
    pub stopwords: BTreeSet<String>,
}

impl Index {
    /// Parse an index from its JSON wire shape.
    pub fn from_json(json: &str) -> serde_json::Result<Index> {
        serde_json::from_str(json)
    }
}

// =============================================================================
// MATCH CHANNELS AND RESULTS
// =============================================================================

/// Where a match came from.
///
/// A document whose title and body both contain a term receives a hit on
/// both channels - the contributions are summed, not deduplicated, so the
/// doubly-matched document outranks one matched in a single place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Title,
    Body,
    Object,
}

/// One ranked search result.
///
/// `doc` indexes into the engine's document list; `title` and `path` are
/// resolved copies so a presentation layer needs nothing but this row.
/// `category` is set when an object match contributed to the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub doc: u32,
    pub score: f64,
    pub title: String,
    pub path: String,
    pub category: Option<String>,
}
