// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client-side search and click-to-copy for static documentation sites.
//!
//! The site build emits a search-data file (a JSON array of pages). In the
//! browser, the search widget fetches it on first focus, builds a small ranked
//! index in memory, and renders the top hits as the reader types. The
//! clipboard helper is unrelated to search; it just shares the bundle.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  index/      │────▶│  widget/     │
//! │ (Document,  │     │ (DocumentIdx,│     │ (state machine,
//! │  SearchHit) │     │  options)    │     │  SearchSurface)
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  utils.rs   │     │  scoring/    │     │  wasm/       │
//! │ (normalize) │     │  fuzzy/      │     │ (web-sys DOM,│
//! └─────────────┘     └──────────────┘     │  fetch, log) │
//!                                          └──────────────┘
//! ```
//!
//! Nothing outside `wasm/` touches the DOM. The widget talks to the page
//! through `SearchSurface`, the clipboard helper through `CopyHost`, so both
//! run unchanged in native tests.
//!
//! # Usage
//!
//! ```
//! use book_search::{parse_documents, DocumentIndex, IndexOptions};
//!
//! let docs = parse_documents(
//!     r#"[{"id": 1, "title": "Install", "content": "run the installer",
//!          "href": "/install", "section": "Guide"}]"#,
//! )?;
//! let index = DocumentIndex::build(docs, IndexOptions::default())?;
//!
//! let hits = index.search("install", 10);
//! assert_eq!(hits[0].href, "/install");
//! # Ok::<(), book_search::Error>(())
//! ```

pub mod clipboard;
pub mod config;
mod error;
pub mod fuzzy;
mod index;
pub mod scoring;
mod types;
mod utils;
pub mod widget;

pub mod testing;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use clipboard::{copy_container, CopyHost, CopyOutcome};
pub use config::WidgetConfig;
pub use error::{Error, Result};
pub use fuzzy::{bounded_levenshtein, levenshtein_within};
pub use index::{
    parse_documents, DocDescriptor, DocumentIndex, IndexOptions, Tokenize, DEFAULT_FUZZY,
    FUZZY_MIN_TERM_LEN,
};
pub use types::{DocKey, Document, Field, SearchHit};
pub use utils::{normalize, query_terms, words};
pub use widget::{
    HotkeySet, LoadRequest, ResultEntry, SearchSurface, SearchWidget, WidgetState, RESULT_LIMIT,
};
