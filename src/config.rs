// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Page-supplied configuration and the DOM contract names.

use crate::error::Result;
use crate::index::IndexOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Search input element id.
pub const INPUT_ID: &str = "book-search-input";

/// Results list element id.
pub const RESULTS_ID: &str = "book-search-results";

/// Attribute on the search input listing hotkey characters.
pub const HOTKEYS_ATTRIBUTE: &str = "data-hotkeys";

/// Elements the clipboard helper attaches to.
pub const CODE_BLOCK_SELECTOR: &str = "pre code";

/// Configuration handed to the search widget by the page.
///
/// ```json
/// { "indexUrl": "/en.search-data.min.3f2a.json", "indexConfig": { "tokenize": "full" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WidgetConfig {
    /// Fingerprinted URL of the search-data file.
    pub index_url: String,
    /// Pass-through index options. `doc` is always replaced by the widget layout.
    pub index_config: IndexOptions,
}

impl WidgetConfig {
    pub fn new(index_url: impl Into<String>) -> Self {
        Self {
            index_url: index_url.into(),
            index_config: IndexOptions::default(),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Index options the widget actually builds with.
    pub fn effective_index_options(&self) -> IndexOptions {
        self.index_config.clone().with_widget_layout()
    }
}

/// Read pass-through index options from a JSON file.
pub fn load_index_options(path: &Path) -> Result<IndexOptions> {
    let raw = fs::read_to_string(path)?;
    IndexOptions::from_json(serde_json::from_str(&raw)?)
}
