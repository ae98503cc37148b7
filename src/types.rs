// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search index.
//!
//! A `Document` is what the site build emits into the search-data file. A
//! `SearchHit` is what comes back out of a query: only the stored display
//! fields, never the body text.
//!
//! # Invariants
//!
//! - **Document**: immutable once the collection is loaded.
//! - **DocumentIndex**: one document per `DocKey`. Duplicate keys are rejected
//!   at build time rather than silently merged.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// Document identifier as it appears in the search-data file.
///
/// Site generators emit either page counters (`"id": 3`) or slugs
/// (`"id": "docs/install"`), so both shapes are accepted. Any JSON number
/// is a valid key, negative and fractional ones included; `1` and `1.0`
/// are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocKey {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for DocKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocKey::Number(n) => write!(f, "{}", n),
            DocKey::Text(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<u64> for DocKey {
    fn from(id: u64) -> Self {
        DocKey::Number(id.into())
    }
}

impl From<&str> for DocKey {
    fn from(id: &str) -> Self {
        DocKey::Text(id.to_string())
    }
}

/// One indexable page (or page section) of the documentation site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocKey,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub href: String,
    #[serde(default)]
    pub section: String,
}

impl Document {
    /// Look up a field by the name used in index options.
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Content => &self.content,
            Field::Href => &self.href,
            Field::Section => &self.section,
        }
    }
}

/// Named document fields that index options can refer to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Content,
    Href,
    Section,
}

impl Field {
    pub fn parse(name: &str) -> Option<Field> {
        match name {
            "title" => Some(Field::Title),
            "content" => Some(Field::Content),
            "href" => Some(Field::Href),
            "section" => Some(Field::Section),
            _ => None,
        }
    }
}

// =============================================================================
// RESULT TYPES
// =============================================================================

/// One ranked query result.
///
/// Carries only the stored display fields. Rank is the position in the
/// returned `Vec`; `score` is kept for the CLI and for tests.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchHit {
    pub id: DocKey,
    pub title: String,
    pub href: String,
    pub section: String,
    pub score: f64,
}
