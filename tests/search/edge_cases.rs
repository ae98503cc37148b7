//! Edge cases: blank input, punctuation, unicode, odd ids.

use super::common::{fixture_documents, make_doc};
use book_search::{parse_documents, DocKey, DocumentIndex, Error, IndexOptions};

fn fixture_index() -> DocumentIndex {
    DocumentIndex::build(fixture_documents(), IndexOptions::default()).unwrap()
}

#[test]
fn test_blank_queries_return_nothing() {
    let index = fixture_index();
    assert!(index.search("", 10).is_empty());
    assert!(index.search("   ", 10).is_empty());
    assert!(index.search("--- ...", 10).is_empty());
}

#[test]
fn test_zero_limit_returns_nothing() {
    assert!(fixture_index().search("search", 0).is_empty());
}

#[test]
fn test_no_match_returns_nothing() {
    assert!(fixture_index().search("kubernetes", 10).is_empty());
}

#[test]
fn test_case_insensitive() {
    let index = fixture_index();
    for query in ["MENU", "Menu", "mEnU"] {
        assert_eq!(index.search(query, 10)[0].title, "Menu");
    }
}

#[cfg(feature = "unicode-normalization")]
#[test]
fn test_diacritics_fold_both_ways() {
    let index = fixture_index();
    assert_eq!(index.search("cafe", 10)[0].title, "Café Notes");
    assert_eq!(index.search("CAFÉ", 10)[0].title, "Café Notes");
}

#[test]
fn test_punctuation_in_query_splits_terms() {
    let index = DocumentIndex::build(
        vec![make_doc(1, "Flags", "pass --release to cargo build", "CLI")],
        IndexOptions::default(),
    )
    .unwrap();
    assert_eq!(index.search("--release", 10).len(), 1);
    assert_eq!(index.search("cargo/build", 10).len(), 1);
}

#[test]
fn test_string_ids_round_trip() {
    let hits = fixture_index().search("changelog", 10);
    assert_eq!(hits[0].id, DocKey::Text("changelog".to_string()));
}

#[test]
fn test_missing_optional_fields_default_empty() {
    let docs = parse_documents(r#"[{"id": 1, "title": "Bare", "href": "/bare"}]"#).unwrap();
    assert_eq!(docs[0].content, "");
    assert_eq!(docs[0].section, "");

    let index = DocumentIndex::build(docs, IndexOptions::default()).unwrap();
    assert_eq!(index.search("bare", 10)[0].section, "");
}

#[test]
fn test_malformed_file_is_parse_error() {
    assert!(matches!(parse_documents("{\"id\": 1}"), Err(Error::Parse(_))));
    assert!(matches!(parse_documents("[{\"title\": \"x\"}]"), Err(Error::Parse(_))));
}

#[test]
fn test_empty_collection_builds() {
    let index = DocumentIndex::build(Vec::new(), IndexOptions::default()).unwrap();
    assert!(index.is_empty());
    assert!(index.search("anything", 10).is_empty());
}
