//! Test fixtures shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixture builders to avoid duplication.

#![doc(hidden)]

use crate::types::{Document, Index, TermEntry};

/// Create a document record.
pub fn doc(name: &str, title: &str, path: &str) -> Document {
    Document {
        name: name.to_string(),
        title: title.to_string(),
        path: path.to_string(),
    }
}

/// The canonical two-document fixture.
///
/// Doc 0 "Templates" holds "template" in body and title; doc 1 "Aliases"
/// holds "alias" in body only. Exercises the exact-match weights directly:
/// "template" scores 16.0 (1 body + 15 title), "alias" scores 1.0.
pub fn two_doc_index() -> Index {
    let mut index = Index {
        documents: vec![
            doc("templates", "Templates", "templates.rst"),
            doc("aliases", "Aliases", "aliases.rst"),
        ],
        ..Index::default()
    };
    index
        .terms
        .insert("template".to_string(), TermEntry::Single(0));
    index.terms.insert("alias".to_string(), TermEntry::Single(1));
    index
        .titleterms
        .insert("template".to_string(), TermEntry::Single(0));
    index
}

/// A larger fixture with overlapping vocabulary across several documents.
///
/// Terms are distributed so multi-token queries have non-trivial
/// intersections:
/// - "parser" occurs in docs 0, 1, 2 (body) and doc 0 (title)
/// - "grammar" occurs in docs 1, 2, 3 (body)
/// - "token" occurs in doc 2 only
pub fn overlapping_index() -> Index {
    let mut index = Index {
        documents: vec![
            doc("parsing", "Parsing", "parsing.rst"),
            doc("grammars", "Grammars", "grammars.rst"),
            doc("internals", "Internals", "internals.rst"),
            doc("reference", "Reference", "reference.rst"),
        ],
        ..Index::default()
    };
    index
        .terms
        .insert("parser".to_string(), TermEntry::Many(vec![0, 1, 2]));
    index
        .terms
        .insert("grammar".to_string(), TermEntry::Many(vec![1, 2, 3]));
    index.terms.insert("token".to_string(), TermEntry::Single(2));
    index
        .titleterms
        .insert("parser".to_string(), TermEntry::Single(0));
    index
}
