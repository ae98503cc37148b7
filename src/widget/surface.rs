// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The widget's view of the page.

use crate::types::SearchHit;
use serde::Serialize;

/// Everything the widget needs from the search input and the results list.
///
/// The browser implementation lives in `wasm::dom`; tests use
/// `testing::FakeSurface`.
pub trait SearchSurface {
    /// Current text of the search input.
    fn input_value(&self) -> String;

    /// Toggle the input's `required` marker ("index not ready yet").
    fn set_required(&mut self, required: bool);

    /// Remove every rendered result.
    fn clear_results(&mut self);

    fn append_result(&mut self, entry: ResultEntry);

    /// Raw `data-hotkeys` attribute of the input, if present.
    fn hotkeys(&self) -> Option<String>;

    fn input_has_focus(&self) -> bool;

    fn focus_input(&mut self);
}

/// One rendered result: `<li><a href>title</a><small>section</small></li>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultEntry {
    pub title: String,
    pub href: String,
    pub section: String,
}

impl From<SearchHit> for ResultEntry {
    fn from(hit: SearchHit) -> Self {
        Self {
            title: hit.title,
            href: hit.href,
            section: hit.section,
        }
    }
}

impl ResultEntry {
    /// Markup equivalent of what the DOM surface builds.
    pub fn to_html(&self) -> String {
        format!(
            "<li><a href=\"{}\">{}</a><small>{}</small></li>",
            escape_html(&self.href),
            escape_html(&self.title),
            escape_html(&self.section)
        )
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
