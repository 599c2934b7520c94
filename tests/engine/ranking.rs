//! Ranking order: score, then title hit, then title length, then doc index.

use super::common::{corpus_engine, doc, engine_over, engine_with};
use talpa::{Index, SearchConfig, TermEntry};

#[test]
fn full_corpus_ranking_for_a_common_term() {
    // "templat" is in every body; titles boost four of the five docs to
    // 16.0. Within the 16.0 tie the shorter title wins, and the equal
    // "… Templates" titles fall back to doc index.
    let results = corpus_engine().search("templat");
    let docs: Vec<u32> = results.iter().map(|r| r.doc).collect();
    assert_eq!(docs, vec![1, 0, 2, 4, 3]);
    assert_eq!(results[0].score, 16.0);
    assert_eq!(results[4].score, 1.0);
}

#[test]
fn title_only_beats_body_only() {
    let mut index = Index {
        documents: vec![
            doc("body", "Body Doc", "body.rst"),
            doc("title", "Title Doc", "title.rst"),
        ],
        ..Index::default()
    };
    index.terms.insert("probe".to_string(), TermEntry::Single(0));
    index
        .titleterms
        .insert("probe".to_string(), TermEntry::Single(1));

    let results = engine_over(index).search("probe");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].doc, 1);
    assert_eq!(results[0].score, 15.0);
    assert_eq!(results[1].score, 1.0);
}

#[test]
fn partial_only_never_beats_any_exact() {
    // Doc 1 accumulates several partial hits; doc 0 has a single exact
    // body hit. Exact still wins with the default weights.
    let mut index = Index {
        documents: vec![
            doc("exact", "Exact", "exact.rst"),
            doc("partials", "Partials", "partials.rst"),
        ],
        ..Index::default()
    };
    index.terms.insert("temp".to_string(), TermEntry::Single(0));
    index
        .terms
        .insert("template".to_string(), TermEntry::Single(1));
    index
        .terms
        .insert("temporary".to_string(), TermEntry::Single(1));

    let results = engine_over(index).search("temp");
    assert_eq!(results[0].doc, 0);
    assert_eq!(results[0].score, 1.0);
    assert_eq!(results[1].doc, 1);
    assert!((results[1].score - 0.6).abs() < 1e-9);
}

#[test]
fn partial_match_ranks_by_substring_weights() {
    // "param" only partial-matches "paramet"; no title terms contain it.
    let results = corpus_engine().search("param");
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r.score == 0.3));
    let docs: Vec<u32> = results.iter().map(|r| r.doc).collect();
    assert_eq!(docs, vec![1, 0, 2, 4]); // title length, then doc index
}

#[test]
fn title_hit_breaks_equal_scores() {
    // Same total score, one doc matched in title and one in body only:
    // the title-channel doc ranks first.
    let mut index = Index {
        documents: vec![
            doc("one", "Doc One", "one.rst"),
            doc("two", "Doc Two", "two.rst"),
        ],
        ..Index::default()
    };
    index.terms.insert("probe".to_string(), TermEntry::Single(0));
    index
        .titleterms
        .insert("probe".to_string(), TermEntry::Single(1));

    // Flatten the weights so both docs score exactly 1.0.
    let config = SearchConfig {
        title: 1.0,
        ..SearchConfig::default()
    };
    let results = engine_with(index, config).search("probe");
    assert_eq!(results[0].doc, 1);
    assert_eq!(results[1].doc, 0);
    assert_eq!(results[0].score, results[1].score);
}

#[test]
fn custom_weights_change_totals_but_not_totality() {
    let config = SearchConfig {
        title: 2.0,
        term: 0.5,
        ..SearchConfig::default()
    };
    let results = engine_with(super::common::two_doc_index(), config).search("template");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 2.5);
}
