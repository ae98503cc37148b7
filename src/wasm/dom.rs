// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! web-sys implementations of the widget and clipboard host traits.

use crate::clipboard::CopyHost;
use crate::config::HOTKEYS_ATTRIBUTE;
use crate::error::{Error, Result};
use crate::index::parse_documents;
use crate::types::Document;
use crate::widget::{ResultEntry, SearchSurface};
use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document as HtmlDocument, Element, HtmlInputElement, Response, Window};

/// Stringify a JS exception for our error type.
pub(crate) fn js_error(value: JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

/// GET the search-data file and parse it.
pub(crate) async fn fetch_documents(window: &Window, url: &str) -> Result<Vec<Document>> {
    let response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| Error::Fetch(js_error(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| Error::Fetch(js_error(e)))?;

    if !response.ok() {
        return Err(Error::Http {
            status: response.status(),
            url: url.to_string(),
        });
    }

    let body = response.text().map_err(|e| Error::Fetch(js_error(e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| Error::Fetch(js_error(e)))?;
    parse_documents(&body.as_string().unwrap_or_default())
}

/// `#book-search-input` and `#book-search-results`.
pub(crate) struct DomSurface {
    document: HtmlDocument,
    input: HtmlInputElement,
    results: Element,
}

impl DomSurface {
    pub(crate) fn new(document: HtmlDocument, input: HtmlInputElement, results: Element) -> Self {
        Self {
            document,
            input,
            results,
        }
    }

    fn build_entry(&self, entry: &ResultEntry) -> std::result::Result<Element, JsValue> {
        let li = self.document.create_element("li")?;
        let a = self.document.create_element("a")?;
        let small = self.document.create_element("small")?;

        a.set_attribute("href", &entry.href)?;
        a.set_text_content(Some(&entry.title));
        small.set_text_content(Some(&entry.section));

        li.append_child(&a)?;
        li.append_child(&small)?;
        Ok(li)
    }
}

impl SearchSurface for DomSurface {
    fn input_value(&self) -> String {
        self.input.value()
    }

    fn set_required(&mut self, required: bool) {
        self.input.set_required(required);
    }

    fn clear_results(&mut self) {
        self.results.set_text_content(None);
    }

    fn append_result(&mut self, entry: ResultEntry) {
        let appended = self
            .build_entry(&entry)
            .and_then(|li| self.results.append_child(&li));
        if let Err(e) = appended {
            log::warn!("failed to render result {}: {}", entry.href, js_error(e));
        }
    }

    fn hotkeys(&self) -> Option<String> {
        self.input.get_attribute(HOTKEYS_ATTRIBUTE)
    }

    fn input_has_focus(&self) -> bool {
        let input: &Element = self.input.as_ref();
        self.document
            .active_element()
            .is_some_and(|active| active == *input)
    }

    fn focus_input(&mut self) {
        if let Err(e) = self.input.focus() {
            log::debug!("focus failed: {}", js_error(e));
        }
    }
}

/// Document selection plus `navigator.clipboard`.
pub(crate) struct DomCopyHost {
    window: Window,
    document: HtmlDocument,
}

impl DomCopyHost {
    pub(crate) fn new(window: Window, document: HtmlDocument) -> Self {
        Self { window, document }
    }

    /// `navigator.clipboard`, if this browser (and context) exposes one.
    fn clipboard(&self) -> Option<JsValue> {
        Reflect::get(&self.window.navigator(), &JsValue::from_str("clipboard"))
            .ok()
            .filter(|clipboard| !clipboard.is_undefined() && !clipboard.is_null())
    }

    fn try_select(&self, node: &Element) -> std::result::Result<(), JsValue> {
        let Some(selection) = self.window.get_selection()? else {
            return Ok(());
        };
        let range = self.document.create_range()?;
        range.select_node_contents(node)?;
        selection.remove_all_ranges()?;
        selection.add_range(&range)
    }
}

impl CopyHost for DomCopyHost {
    type Node = Element;

    fn select_contents(&mut self, node: &Element) {
        if let Err(e) = self.try_select(node) {
            log::debug!("selection failed: {}", js_error(e));
        }
    }

    fn text_content(&self, node: &Element) -> String {
        node.text_content().unwrap_or_default()
    }

    fn clipboard_available(&self) -> bool {
        self.clipboard().is_some()
    }

    fn write_clipboard(&mut self, text: String) {
        let Some(clipboard) = self.clipboard() else {
            return;
        };
        let written = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
            .and_then(|write| write.dyn_into::<Function>())
            .and_then(|write| write.call1(&clipboard, &JsValue::from_str(&text)));
        if let Err(e) = written {
            log::debug!("clipboard write failed: {}", js_error(e));
        }
    }
}
