//! Page-supplied index options.

use super::common::fixture_documents;
use book_search::{DocumentIndex, Error, IndexOptions, Tokenize};
use serde_json::json;

fn index_with(options: serde_json::Value) -> DocumentIndex {
    let options = IndexOptions::from_json(options).unwrap();
    DocumentIndex::build(fixture_documents(), options).unwrap()
}

#[test]
fn test_strict_tokenizer_needs_whole_words() {
    let index = index_with(json!({ "tokenize": "strict", "fuzzy": 0 }));
    assert!(index.search("shortcode", 10).is_empty());
    assert_eq!(index.search("shortcodes", 10)[0].title, "Shortcodes");
    assert_eq!(index.options().tokenize, Tokenize::Strict);
}

#[test]
fn test_full_tokenizer_matches_inside_words() {
    let index = index_with(json!({ "tokenize": "full" }));
    let titles: Vec<String> = index
        .search("codes", 10)
        .into_iter()
        .map(|hit| hit.title)
        .collect();
    assert_eq!(titles[0], "Shortcodes");
}

#[test]
fn test_fuzzy_zero_disables_typo_tolerance() {
    let tolerant = index_with(json!({}));
    let exact = index_with(json!({ "fuzzy": 0 }));
    assert!(!tolerant.search("menus", 10).is_empty());
    assert!(exact.search("menus", 10).is_empty());
}

#[test]
fn test_wider_fuzzy_finds_transpositions() {
    let index = index_with(json!({ "fuzzy": 2 }));
    assert_eq!(index.search("mneu", 10)[0].title, "Menu");
}

#[test]
fn test_unrecognized_options_are_kept() {
    let index = index_with(json!({ "encode": "balance", "threshold": 0, "async": false }));
    let extra = &index.options().extra;
    assert_eq!(extra.len(), 3);
    assert_eq!(extra["encode"], json!("balance"));
}

#[test]
fn test_bad_option_types_are_rejected() {
    let result = IndexOptions::from_json(json!({ "fuzzy": "yes" }));
    assert!(matches!(result, Err(Error::Parse(_))));

    let result = IndexOptions::from_json(json!({ "doc": { "field": "title" } }));
    assert!(matches!(result, Err(Error::Parse(_))));
}

#[test]
fn test_reverse_finds_suffixes() {
    let index = index_with(json!({ "tokenize": "reverse" }));
    assert_eq!(index.options().tokenize, Tokenize::Reverse);
    let hits = index.search("codes", 10);
    assert_eq!(hits[0].title, "Shortcodes");
}
