// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly entry points.
//!
//! Two independent components, wired up from the page:
//!
//! ```js
//! import init, { initSearch, initClipboard } from "./book_search.js";
//!
//! await init();
//! initClipboard();
//! initSearch({ indexUrl: "/en.search-data.min.json", indexConfig: {} });
//! ```
//!
//! `BookSearchIndex` is also exported for pages that render their own UI.
//!
//! # Event wiring
//!
//! The widget sits in an `Rc<RefCell<_>>` shared by three listeners. No borrow
//! is held across the fetch `.await` or across `input.focus()`, which fires
//! the focus listener synchronously.

mod console;
mod dom;

use crate::clipboard::copy_container;
use crate::config::{WidgetConfig, CODE_BLOCK_SELECTOR, INPUT_ID, RESULTS_ID};
use crate::error::Error;
use crate::index::{parse_documents, DocumentIndex, IndexOptions};
use crate::widget::{LoadRequest, SearchWidget, RESULT_LIMIT};
use dom::{fetch_documents, js_error, DomCopyHost, DomSurface};
use serde_wasm_bindgen::{from_value, to_value};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{AddEventListenerOptions, Event, HtmlInputElement, KeyboardEvent};

type SharedWidget = Rc<RefCell<SearchWidget<DomSurface>>>;

impl From<Error> for JsValue {
    fn from(error: Error) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

/// Attach the search widget. Returns `false` (and does nothing) when the
/// page has no `#book-search-input`.
#[wasm_bindgen(js_name = initSearch)]
pub fn init_search(config: JsValue) -> Result<bool, JsValue> {
    console::init();

    let config: WidgetConfig = if config.is_undefined() || config.is_null() {
        WidgetConfig::default()
    } else {
        from_value(config).map_err(|e| e.to_string())?
    };

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;

    let Some(input) = document.get_element_by_id(INPUT_ID) else {
        return Ok(false);
    };
    let input: HtmlInputElement = input
        .dyn_into()
        .map_err(|_| format!("#{} is not an input element", INPUT_ID))?;
    let Some(results) = document.get_element_by_id(RESULTS_ID) else {
        log::warn!("#{} missing, search disabled", RESULTS_ID);
        return Ok(false);
    };

    let surface = DomSurface::new(document.clone(), input.clone(), results);
    let widget: SharedWidget = Rc::new(RefCell::new(SearchWidget::new(surface, config)));

    // One-shot: the browser drops the listener after the first focus.
    let on_focus = {
        let widget = widget.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let request = widget.borrow_mut().trigger_init();
            if let Some(request) = request {
                spawn_load(widget.clone(), request);
            }
        })
    };
    let once = AddEventListenerOptions::new();
    once.set_once(true);
    input.add_event_listener_with_callback_and_add_event_listener_options(
        "focus",
        on_focus.as_ref().unchecked_ref(),
        &once,
    )?;
    on_focus.forget();

    let on_key_up = {
        let widget = widget.clone();
        Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            let request = widget.borrow_mut().on_key_up();
            if let Some(request) = request {
                spawn_load(widget.clone(), request);
            }
        })
    };
    input.add_event_listener_with_callback("keyup", on_key_up.as_ref().unchecked_ref())?;
    on_key_up.forget();

    let on_key_press = {
        let input = input.clone();
        Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            let Some(ch) = single_char(&event.key()) else {
                return;
            };
            if !widget.borrow().wants_focus(ch) {
                return;
            }
            if let Err(e) = input.focus() {
                log::debug!("focus failed: {}", js_error(e));
                return;
            }
            event.prevent_default();
        })
    };
    document.add_event_listener_with_callback("keypress", on_key_press.as_ref().unchecked_ref())?;
    on_key_press.forget();

    Ok(true)
}

/// Attach click-to-copy to every `pre code` block currently on the page.
/// Returns the number of blocks wired.
#[wasm_bindgen(js_name = initClipboard)]
pub fn init_clipboard() -> Result<u32, JsValue> {
    console::init();

    let window = web_sys::window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let host = Rc::new(RefCell::new(DomCopyHost::new(window, document.clone())));

    let blocks = document.query_selector_all(CODE_BLOCK_SELECTOR)?;
    let mut wired = 0;
    for i in 0..blocks.length() {
        let Some(code) = blocks.item(i) else {
            continue;
        };
        let Some(container) = code.parent_element() else {
            continue;
        };

        let on_click = {
            let host = host.clone();
            Closure::<dyn FnMut(Event)>::new(move |_: Event| {
                copy_container(&mut *host.borrow_mut(), &container);
            })
        };
        code.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
        wired += 1;
    }

    Ok(wired)
}

fn spawn_load(widget: SharedWidget, request: LoadRequest) {
    spawn_local(async move {
        let loaded = match web_sys::window() {
            Some(window) => fetch_documents(&window, &request.url).await,
            None => Err(Error::Fetch("no window".to_string())),
        };
        // finish_loading already logged the failure
        let _ = widget.borrow_mut().finish_loading(loaded);
    });
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Some(ch),
        _ => None,
    }
}

/// Standalone index for pages that render their own results.
#[wasm_bindgen]
pub struct BookSearchIndex {
    index: DocumentIndex,
}

#[wasm_bindgen]
impl BookSearchIndex {
    /// Build from search-data JSON text and optional pass-through options.
    #[wasm_bindgen(constructor)]
    pub fn new(search_data: &str, options: JsValue) -> Result<BookSearchIndex, JsValue> {
        console::init();
        let options: IndexOptions = if options.is_undefined() || options.is_null() {
            IndexOptions::default()
        } else {
            from_value(options).map_err(|e| e.to_string())?
        };
        let documents = parse_documents(search_data)?;
        let index = DocumentIndex::build(documents, options.with_widget_layout())?;
        Ok(BookSearchIndex { index })
    }

    #[wasm_bindgen(js_name = docCount)]
    pub fn doc_count(&self) -> usize {
        self.index.len()
    }

    /// Ranked hits as `[{id, title, href, section, score}]`.
    pub fn search(&self, query: &str, limit: Option<usize>) -> Result<JsValue, JsValue> {
        let hits = self.index.search(query, limit.unwrap_or(RESULT_LIMIT));
        to_value(&hits).map_err(|e| e.to_string().into())
    }
}
