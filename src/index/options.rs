// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Build options for `DocumentIndex`.
//!
//! Pages hand these over as an opaque JSON object. The index understands
//! `doc`, `tokenize` and `fuzzy`; every other key is carried along untouched
//! in `extra` so nothing a page sets is lost.

use crate::error::{Error, Result};
use crate::types::Field;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Maximum edit distance used when a page does not set `fuzzy`.
pub const DEFAULT_FUZZY: usize = 1;

/// Query terms shorter than this never match fuzzily ("go" ~ "do" is noise).
pub const FUZZY_MIN_TERM_LEN: usize = 4;

/// How query terms are allowed to match document words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tokenize {
    /// Whole words only.
    Strict,
    /// Whole words or word prefixes (search-as-you-type).
    #[default]
    Forward,
    /// Whole words, word prefixes or word suffixes.
    Reverse,
    /// Any substring of a word.
    Full,
}

/// Unknown tokenizers degrade to the default instead of failing the page.
fn lenient_tokenize<'de, D>(deserializer: D) -> std::result::Result<Tokenize, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Value::deserialize(deserializer)?;
    match Tokenize::deserialize(&raw) {
        Ok(tokenize) => Ok(tokenize),
        Err(e) => {
            log::warn!("ignoring tokenize option {}: {}", raw, e);
            Ok(Tokenize::default())
        }
    }
}

/// Which document fields are keyed, searched and stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocDescriptor {
    pub id: String,
    pub field: Vec<String>,
    pub store: Vec<String>,
}

impl Default for DocDescriptor {
    /// The widget layout: search title and content, return title, href and section.
    fn default() -> Self {
        Self {
            id: "id".to_string(),
            field: vec!["title".to_string(), "content".to_string()],
            store: vec![
                "title".to_string(),
                "href".to_string(),
                "section".to_string(),
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexOptions {
    pub doc: DocDescriptor,
    #[serde(deserialize_with = "lenient_tokenize")]
    pub tokenize: Tokenize,
    pub fuzzy: usize,
    /// Keys the index does not interpret, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            doc: DocDescriptor::default(),
            tokenize: Tokenize::default(),
            fuzzy: DEFAULT_FUZZY,
            extra: Map::new(),
        }
    }
}

impl IndexOptions {
    /// Parse page-supplied options. `null` or a missing object means defaults.
    pub fn from_json(value: Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Force the widget's document layout, whatever the page asked for.
    pub fn with_widget_layout(mut self) -> Self {
        self.doc = DocDescriptor::default();
        self
    }

    pub(crate) fn resolve(&self) -> Result<ResolvedLayout> {
        if self.doc.id != "id" {
            return Err(Error::UnknownField(self.doc.id.clone()));
        }
        Ok(ResolvedLayout {
            fields: resolve_fields(&self.doc.field)?,
            store: resolve_fields(&self.doc.store)?,
        })
    }
}

/// `DocDescriptor` with names checked against the document schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ResolvedLayout {
    pub fields: Vec<Field>,
    pub store: Vec<Field>,
}

fn resolve_fields(names: &[String]) -> Result<Vec<Field>> {
    names
        .iter()
        .map(|name| Field::parse(name).ok_or_else(|| Error::UnknownField(name.clone())))
        .collect()
}
