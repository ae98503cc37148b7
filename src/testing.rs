// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! Always compiled but hidden from documentation: integration tests in
//! `tests/` need the same fake DOM as the unit tests.

#![doc(hidden)]

use crate::clipboard::CopyHost;
use crate::types::{DocKey, Document};
use crate::widget::{ResultEntry, SearchSurface};

/// Create a test document with href `/docs/{id}`.
pub fn make_doc(id: u64, title: &str, content: &str, section: &str) -> Document {
    Document {
        id: DocKey::from(id),
        title: title.to_string(),
        content: content.to_string(),
        href: format!("/docs/{}", id),
        section: section.to_string(),
    }
}

/// In-memory stand-in for the search input and results list.
#[derive(Debug, Default)]
pub struct FakeSurface {
    pub value: String,
    pub required: bool,
    pub hotkeys: Option<String>,
    pub focused: bool,
    pub results: Vec<ResultEntry>,
    /// Number of times the list was cleared.
    pub clears: usize,
}

impl FakeSurface {
    pub fn with_hotkeys(hotkeys: &str) -> Self {
        Self {
            hotkeys: Some(hotkeys.to_string()),
            ..Self::default()
        }
    }
}

impl SearchSurface for FakeSurface {
    fn input_value(&self) -> String {
        self.value.clone()
    }

    fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    fn clear_results(&mut self) {
        self.results.clear();
        self.clears += 1;
    }

    fn append_result(&mut self, entry: ResultEntry) {
        self.results.push(entry);
    }

    fn hotkeys(&self) -> Option<String> {
        self.hotkeys.clone()
    }

    fn input_has_focus(&self) -> bool {
        self.focused
    }

    fn focus_input(&mut self) {
        self.focused = true;
    }
}

/// One `pre` container in the fake page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeBlock {
    pub text: String,
}

/// In-memory stand-in for the document selection and the system clipboard.
#[derive(Debug, Default)]
pub struct FakeCopyHost {
    /// Containers currently spanned by the selection.
    pub selection: Vec<FakeBlock>,
    /// `None` models a browser without a clipboard API.
    pub clipboard: Option<Vec<String>>,
}

impl FakeCopyHost {
    pub fn with_clipboard() -> Self {
        Self {
            selection: Vec::new(),
            clipboard: Some(Vec::new()),
        }
    }
}

impl CopyHost for FakeCopyHost {
    type Node = FakeBlock;

    fn select_contents(&mut self, node: &FakeBlock) {
        self.selection.clear();
        self.selection.push(node.clone());
    }

    fn text_content(&self, node: &FakeBlock) -> String {
        node.text.clone()
    }

    fn clipboard_available(&self) -> bool {
        self.clipboard.is_some()
    }

    fn write_clipboard(&mut self, text: String) {
        if let Some(writes) = self.clipboard.as_mut() {
            writes.push(text);
        }
    }
}
