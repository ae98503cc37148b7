// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error type shared by the index, the widget and the CLI.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Search data or index options are not valid JSON for their schema.
    #[error("invalid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two documents in one collection share an `id`.
    #[error("duplicate document id {0}")]
    DuplicateDocument(String),

    /// An index option names a document field that does not exist.
    #[error("unknown document field '{0}' (expected title, content, href or section)")]
    UnknownField(String),

    /// The index fetch was rejected by the host (network error, CORS, ...).
    #[error("failed to fetch search index: {0}")]
    Fetch(String),

    /// The index fetch completed with a non-success HTTP status.
    #[error("search index request to {url} returned HTTP {status}")]
    Http { status: u16, url: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
