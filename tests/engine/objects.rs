//! Object-symbol matching: exact and suffix hits on qualified names.

use super::common::{corpus_engine, doc, engine_over};
use talpa::{Index, ObjectEntry};

fn object(doc: u32, type_code: u32, priority: i32, name: &str) -> ObjectEntry {
    ObjectEntry {
        doc,
        type_code,
        priority,
        anchor: String::new(),
        name: name.to_string(),
    }
}

#[test]
fn suffix_match_on_qualified_name() {
    // "vector" hits "std.vector" as a suffix: 6.0 base + 5.0 priority-1
    // boost.
    let results = corpus_engine().search("vector");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc, 1);
    assert_eq!(results[0].score, 11.0);
    assert_eq!(results[0].category.as_deref(), Some("class"));
}

#[test]
fn exact_match_on_full_qualified_name() {
    let mut index = Index {
        documents: vec![doc("api", "API", "api.rst")],
        ..Index::default()
    };
    index.categories.insert(0, "class".to_string());
    index
        .objects
        .insert("std".to_string(), vec![object(0, 0, 1, "vector")]);
    let engine = engine_over(index);

    // The full name only survives normalization as separate tokens, so the
    // exact-name path is reachable for objects with undotted names.
    let results = engine.search("vector");
    assert_eq!(results[0].score, 11.0); // suffix: 6.0 + 5.0

    let mut index = Index {
        documents: vec![doc("api", "API", "api.rst")],
        ..Index::default()
    };
    index
        .objects
        .insert(String::new(), vec![object(0, 0, 1, "vector")]);
    let results = engine_over(index).search("vector");
    assert_eq!(results[0].score, 16.0); // exact: 11.0 + 5.0
}

#[test]
fn priority_boost_applies_per_entry() {
    // Same name under two docs with different priorities; both are
    // returned, ranked by the boosted scores.
    let mut index = Index {
        documents: vec![
            doc("one", "One", "one.rst"),
            doc("two", "Two", "two.rst"),
        ],
        ..Index::default()
    };
    index.objects.insert(
        "lib".to_string(),
        vec![object(0, 0, 0, "thing"), object(1, 0, 2, "thing")],
    );
    let results = engine_over(index).search("thing");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].doc, 0);
    assert_eq!(results[0].score, 6.0 + 15.0);
    assert_eq!(results[1].doc, 1);
    assert_eq!(results[1].score, 6.0 - 5.0);
}

#[test]
fn object_match_counts_toward_and_semantics() {
    // "deduc vector": "deduc" matches docs {1, 2} in body; "vector" only
    // matches doc 1 via the object table. Doc 1 qualifies with the object
    // score stacked on the body score.
    let results = corpus_engine().search("deduc vector");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].doc, 1);
    assert_eq!(results[0].score, 1.0 + 11.0);
    assert_eq!(results[0].category.as_deref(), Some("class"));
}

#[test]
fn missing_category_label_degrades_to_none() {
    let mut index = Index {
        documents: vec![doc("api", "API", "api.rst")],
        ..Index::default()
    };
    // type_code 7 has no entry in categories.
    index
        .objects
        .insert(String::new(), vec![object(0, 7, 1, "widget")]);
    let results = engine_over(index).search("widget");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].category, None);
}

#[test]
fn object_names_match_case_insensitively() {
    let mut index = Index {
        documents: vec![doc("api", "API", "api.rst")],
        ..Index::default()
    };
    index
        .objects
        .insert(String::new(), vec![object(0, 0, 1, "Vector")]);
    let results = engine_over(index).search("VECTOR");
    assert_eq!(results.len(), 1);
}
