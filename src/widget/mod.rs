// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search widget: lazy index loading plus search-as-you-type rendering.
//!
//! # States
//!
//! ```text
//!                 trigger_init()                finish_loading(Ok)
//! Uninitialized ───────────────▶ Loading ─────────────────────────▶ Ready
//!                                   │
//!                                   │ finish_loading(Err)
//!                                   ▼
//!                                 Failed
//! ```
//!
//! The widget never performs I/O itself. `trigger_init` hands back a
//! `LoadRequest` exactly once; whoever owns the event loop fetches it and
//! reports back through `finish_loading`. That keeps the only suspension
//! point outside this type and lets the whole machine run in native tests.
//!
//! While Loading, key-ups only clear the list. The Ready transition re-runs
//! the query with whatever the input holds at that moment, so the latest
//! keystroke wins and nothing typed during the fetch is lost.

mod hotkeys;
mod surface;

pub use hotkeys::HotkeySet;
pub use surface::{ResultEntry, SearchSurface};

use crate::config::WidgetConfig;
use crate::error::Result;
use crate::index::DocumentIndex;
use crate::types::Document;

/// Results rendered per query. A hard cut, not a page size.
pub const RESULT_LIMIT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    /// Nothing fetched; waiting for the first focus.
    Uninitialized,
    /// Fetch in flight; input marked required.
    Loading,
    /// Index built; every key-up queries it.
    Ready,
    /// Fetch or build failed. Terminal: no retry.
    Failed,
}

/// Instruction to fetch the search-data file. Issued once per widget.
#[must_use = "the index is only loaded if the request is fetched"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadRequest {
    pub url: String,
}

pub struct SearchWidget<S: SearchSurface> {
    surface: S,
    config: WidgetConfig,
    state: WidgetState,
    index: Option<DocumentIndex>,
}

impl<S: SearchSurface> SearchWidget<S> {
    pub fn new(surface: S, config: WidgetConfig) -> Self {
        Self {
            surface,
            config,
            state: WidgetState::Uninitialized,
            index: None,
        }
    }

    pub fn state(&self) -> WidgetState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn index(&self) -> Option<&DocumentIndex> {
        self.index.as_ref()
    }

    /// Uninitialized → Loading. Returns the fetch to perform, or `None` if
    /// the transition already happened.
    pub fn trigger_init(&mut self) -> Option<LoadRequest> {
        if self.state != WidgetState::Uninitialized {
            return None;
        }

        self.state = WidgetState::Loading;
        self.surface.set_required(true);
        log::debug!("loading search index from {}", self.config.index_url);

        Some(LoadRequest {
            url: self.config.index_url.clone(),
        })
    }

    /// Loading → Ready (or Failed). Ignored in any other state.
    ///
    /// On success the pending query (current input value) runs immediately.
    /// On failure the error is logged, handed back, and the list stays empty.
    pub fn finish_loading(&mut self, loaded: Result<Vec<Document>>) -> Result<()> {
        if self.state != WidgetState::Loading {
            log::debug!("ignoring index load in state {:?}", self.state);
            return Ok(());
        }

        let built = loaded.and_then(|documents| {
            DocumentIndex::build(documents, self.config.effective_index_options())
        });
        self.surface.set_required(false);

        match built {
            Ok(index) => {
                log::info!("search index ready: {} documents", index.len());
                self.index = Some(index);
                self.state = WidgetState::Ready;
                let pending = self.surface.input_value();
                self.run_query(&pending);
                Ok(())
            }
            Err(e) => {
                log::warn!("search disabled: {}", e);
                self.state = WidgetState::Failed;
                self.surface.clear_results();
                Err(e)
            }
        }
    }

    /// Key-up in the search input.
    ///
    /// In Uninitialized this doubles as the init trigger. Before Ready the
    /// list is just cleared; the query is picked up by `finish_loading`.
    pub fn on_key_up(&mut self) -> Option<LoadRequest> {
        match self.state {
            WidgetState::Ready => {
                let text = self.surface.input_value();
                self.run_query(&text);
                None
            }
            WidgetState::Uninitialized => {
                self.surface.clear_results();
                self.trigger_init()
            }
            WidgetState::Loading | WidgetState::Failed => {
                self.surface.clear_results();
                None
            }
        }
    }

    /// Replace the rendered list with the top hits for `text`.
    pub fn run_query(&mut self, text: &str) {
        self.surface.clear_results();

        if text.is_empty() {
            return;
        }

        let Some(index) = &self.index else {
            return;
        };

        for hit in index.search(text, RESULT_LIMIT) {
            self.surface.append_result(ResultEntry::from(hit));
        }
    }

    /// Is `ch` one of the input's configured hotkeys?
    pub fn is_hotkey_char(&self, ch: char) -> bool {
        HotkeySet::from_attribute(self.surface.hotkeys()).contains(ch)
    }

    /// Should a page-level key-press of `ch` move focus into the input?
    ///
    /// Split from `on_global_key_press` because focusing fires the input's
    /// focus handler synchronously, and that handler needs the widget.
    pub fn wants_focus(&self, ch: char) -> bool {
        !self.surface.input_has_focus() && self.is_hotkey_char(ch)
    }

    /// Key-press anywhere on the page. Returns `true` when the widget took
    /// the key (focus moved), in which case the caller suppresses the default.
    pub fn on_global_key_press(&mut self, ch: char) -> bool {
        if !self.wants_focus(ch) {
            return false;
        }
        self.surface.focus_input();
        true
    }
}
