// Copyright 2025-present The Talpa Authors
// SPDX-License-Identifier: Apache-2.0

//! The validated, immutable index store.
//!
//! [`IndexStore::new`] is the only fallible operation in the crate: it checks
//! every structural invariant of the raw [`Index`] once, and everything
//! downstream indexes into the document list on the strength of that check.
//! After construction the store is never mutated, so any number of queries
//! can share it by `&` borrow without coordination.
//!
//! Besides validation, the store precomputes one thing: the body and title
//! vocabularies sorted by (term length, lexicographic). The substring scan
//! in the matcher walks these lists under a soft cap, and the precomputed
//! order makes that scan deterministic while preferring stored terms closest
//! to an exact match. Sorting here costs one pass at load time instead of
//! one per query.

use crate::types::{Index, ObjectEntry, TermEntry};
use std::fmt;

/// Error type for index invariant violations, surfaced at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexError {
    /// A term table references a document index out of range.
    TermDocOutOfRange {
        table: &'static str,
        term: String,
        doc: u32,
        doc_count: usize,
    },
    /// An object references a document index out of range.
    ObjectDocOutOfRange {
        prefix: String,
        name: String,
        doc: u32,
        doc_count: usize,
    },
    /// A term table contains an empty term key.
    EmptyTerm { table: &'static str },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::TermDocOutOfRange {
                table,
                term,
                doc,
                doc_count,
            } => {
                write!(
                    f,
                    "{} entry for {:?} references doc {} >= documents.len() {}",
                    table, term, doc, doc_count
                )
            }
            IndexError::ObjectDocOutOfRange {
                prefix,
                name,
                doc,
                doc_count,
            } => {
                write!(
                    f,
                    "object {:?} under prefix {:?} references doc {} >= documents.len() {}",
                    name, prefix, doc, doc_count
                )
            }
            IndexError::EmptyTerm { table } => {
                write!(f, "{} table contains an empty term key", table)
            }
        }
    }
}

impl std::error::Error for IndexError {}

/// A matched object together with how it matched.
///
/// `exact` distinguishes a full-name hit from a suffix hit; the two carry
/// different base weights.
#[derive(Debug, Clone)]
pub struct ObjectMatch<'a> {
    pub entry: &'a ObjectEntry,
    pub exact: bool,
}

/// Immutable index wrapper with validated invariants.
///
/// All accessors are pure lookups; "absent" is a normal outcome for unknown
/// terms, never an error.
#[derive(Debug, Clone)]
pub struct IndexStore {
    index: Index,
    /// Body vocabulary sorted by (length, lexicographic).
    body_vocab: Vec<String>,
    /// Title vocabulary sorted by (length, lexicographic).
    title_vocab: Vec<String>,
}

impl IndexStore {
    /// Validate a raw index and build the store.
    ///
    /// Returns the first violated invariant. A rejected index carries a
    /// reference to a document that does not exist, so no lookup against it
    /// can be trusted.
    pub fn new(index: Index) -> Result<IndexStore, IndexError> {
        let doc_count = index.documents.len();

        for (table, map) in [("terms", &index.terms), ("titleterms", &index.titleterms)] {
            for (term, entry) in map {
                if term.is_empty() {
                    return Err(IndexError::EmptyTerm { table });
                }
                for &doc in entry.docs() {
                    if doc as usize >= doc_count {
                        return Err(IndexError::TermDocOutOfRange {
                            table,
                            term: term.clone(),
                            doc,
                            doc_count,
                        });
                    }
                }
            }
        }

        for (prefix, entries) in &index.objects {
            for entry in entries {
                if entry.doc as usize >= doc_count {
                    return Err(IndexError::ObjectDocOutOfRange {
                        prefix: prefix.clone(),
                        name: entry.name.clone(),
                        doc: entry.doc,
                        doc_count,
                    });
                }
            }
        }

        let body_vocab = sorted_vocab(&index.terms);
        let title_vocab = sorted_vocab(&index.titleterms);

        Ok(IndexStore {
            index,
            body_vocab,
            title_vocab,
        })
    }

    /// Number of indexed documents.
    pub fn doc_count(&self) -> usize {
        self.index.documents.len()
    }

    /// Display title of a document.
    pub fn title_of(&self, doc: u32) -> &str {
        &self.index.documents[doc as usize].title
    }

    /// Source path of a document.
    pub fn path_of(&self, doc: u32) -> &str {
        &self.index.documents[doc as usize].path
    }

    /// Unique name key of a document.
    pub fn name_of(&self, doc: u32) -> &str {
        &self.index.documents[doc as usize].name
    }

    /// Documents whose body text contains `term` exactly.
    pub fn body_hits(&self, term: &str) -> Option<&TermEntry> {
        self.index.terms.get(term)
    }

    /// Documents whose title contains `term` exactly.
    pub fn title_hits(&self, term: &str) -> Option<&TermEntry> {
        self.index.titleterms.get(term)
    }

    /// Whether `term` is excluded from matching.
    pub fn is_stop_word(&self, term: &str) -> bool {
        self.index.stopwords.contains(term)
    }

    /// Human-readable category label for an object type code.
    pub fn category_label(&self, type_code: u32) -> Option<&str> {
        self.index.categories.get(&type_code).map(String::as_str)
    }

    /// Body vocabulary, sorted by (length, lexicographic).
    pub(crate) fn body_vocab(&self) -> &[String] {
        &self.body_vocab
    }

    /// Title vocabulary, sorted by (length, lexicographic).
    pub(crate) fn title_vocab(&self) -> &[String] {
        &self.title_vocab
    }

    /// Objects whose fully qualified name equals `fragment` or ends in
    /// `.fragment`, case-insensitively.
    ///
    /// Iterates prefixes in key order, so the result sequence is fixed for a
    /// given index.
    pub fn objects_matching(&self, fragment: &str) -> Vec<ObjectMatch<'_>> {
        let mut matches = Vec::new();
        if fragment.is_empty() {
            return matches;
        }
        let suffix = format!(".{}", fragment);

        for (prefix, entries) in &self.index.objects {
            for entry in entries {
                let full_name = if prefix.is_empty() {
                    entry.name.to_lowercase()
                } else {
                    format!("{}.{}", prefix, entry.name).to_lowercase()
                };
                if full_name == fragment {
                    matches.push(ObjectMatch { entry, exact: true });
                } else if full_name.ends_with(&suffix) {
                    matches.push(ObjectMatch { entry, exact: false });
                }
            }
        }
        matches
    }
}

/// Vocabulary of a term table, sorted by (length, lexicographic).
fn sorted_vocab(map: &std::collections::BTreeMap<String, TermEntry>) -> Vec<String> {
    let mut vocab: Vec<String> = map.keys().cloned().collect();
    vocab.sort_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    vocab
}
