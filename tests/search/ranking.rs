//! Ranking: field weight, match tier, position, and tie order.

use super::common::{fixture_documents, make_doc};
use book_search::{DocKey, DocumentIndex, IndexOptions};

fn fixture_index() -> DocumentIndex {
    DocumentIndex::build(fixture_documents(), IndexOptions::default()).unwrap()
}

fn titles(index: &DocumentIndex, query: &str) -> Vec<String> {
    index
        .search(query, 10)
        .into_iter()
        .map(|hit| hit.title)
        .collect()
}

#[test]
fn test_title_match_ranks_first() {
    let index = fixture_index();
    let results = titles(&index, "search");
    assert_eq!(results[0], "Search");
    assert!(results.len() > 1, "content matches should follow");
}

#[test]
fn test_exact_beats_prefix_in_same_field() {
    let index = DocumentIndex::build(
        vec![
            make_doc(1, "Installation", "", "Guide"),
            make_doc(2, "Install", "", "Guide"),
        ],
        IndexOptions::default(),
    )
    .unwrap();

    assert_eq!(titles(&index, "install"), vec!["Install", "Installation"]);
}

#[test]
fn test_prefix_beats_fuzzy() {
    let index = DocumentIndex::build(
        vec![
            make_doc(1, "Cable", "", "Guide"),
            make_doc(2, "Tables", "", "Guide"),
        ],
        IndexOptions::default(),
    )
    .unwrap();

    // "tables" starts with the term, "cable" is one edit away
    assert_eq!(titles(&index, "table"), vec!["Tables", "Cable"]);
}

#[test]
fn test_earlier_position_wins_within_field() {
    let index = DocumentIndex::build(
        vec![
            make_doc(1, "Notes", "alpha beta gamma delta theme", "Guide"),
            make_doc(2, "Notes", "theme alpha beta gamma delta", "Guide"),
        ],
        IndexOptions::default(),
    )
    .unwrap();

    let hits = index.search("theme", 10);
    assert_eq!(hits[0].id, DocKey::from(2));
    assert_eq!(hits[1].id, DocKey::from(1));
}

#[test]
fn test_equal_scores_keep_file_order() {
    let index = DocumentIndex::build(
        vec![
            make_doc(3, "Guide", "", "A"),
            make_doc(1, "Guide", "", "B"),
            make_doc(2, "Guide", "", "C"),
        ],
        IndexOptions::default(),
    )
    .unwrap();

    let sections: Vec<String> = index
        .search("guide", 10)
        .into_iter()
        .map(|hit| hit.section)
        .collect();
    assert_eq!(sections, vec!["A", "B", "C"]);
}

#[test]
fn test_multi_term_scores_add_up() {
    let index = fixture_index();
    let hits = index.search("search input", 10);
    // Only the Search page mentions both
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Search");
}

#[test]
fn test_ranking_is_deterministic() {
    let index = fixture_index();
    let first = index.search("content", 10);
    for _ in 0..5 {
        assert_eq!(index.search("content", 10), first);
    }
}
