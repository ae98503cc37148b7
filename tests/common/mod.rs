//! Shared test utilities and fixtures.

#![allow(dead_code)]

use book_search::testing::FakeSurface;
use book_search::{parse_documents, Document, SearchWidget, WidgetConfig};
use std::fs;

// Re-export canonical test utilities from book_search::testing
pub use book_search::testing::make_doc;

/// Search-data file shaped like a real documentation site build.
pub const FIXTURE_PATH: &str = "tests/fixtures/search-data.json";

/// URL the test widget is configured with.
pub const INDEX_URL: &str = "/en.search-data.min.json";

pub fn fixture_documents() -> Vec<Document> {
    let raw = fs::read_to_string(FIXTURE_PATH).expect("Failed to read fixture");
    parse_documents(&raw).expect("Invalid fixture")
}

/// Widget over a fake DOM, still Uninitialized.
pub fn new_widget() -> SearchWidget<FakeSurface> {
    SearchWidget::new(FakeSurface::with_hotkeys("s/"), WidgetConfig::new(INDEX_URL))
}

/// Widget that has been focused and has finished loading `documents`.
pub fn ready_widget(documents: Vec<Document>) -> SearchWidget<FakeSurface> {
    let mut widget = new_widget();
    let request = widget.trigger_init().expect("first focus must request the index");
    assert_eq!(request.url, INDEX_URL);
    widget
        .finish_loading(Ok(documents))
        .expect("fixture documents must build");
    widget
}

/// Simulate typing: set the input value, then fire key-up.
pub fn type_query(widget: &mut SearchWidget<FakeSurface>, text: &str) {
    widget.surface_mut().value = text.to_string();
    let request = widget.on_key_up();
    assert!(request.is_none(), "typing after init must not request a reload");
}

/// Titles currently rendered in the fake results list.
pub fn rendered_titles(widget: &SearchWidget<FakeSurface>) -> Vec<String> {
    widget
        .surface()
        .results
        .iter()
        .map(|entry| entry.title.clone())
        .collect()
}
