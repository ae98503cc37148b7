// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The in-memory ranked index behind the search widget.
//!
//! Built once from the full document collection and read-only afterwards.
//! Each document keeps its searchable fields as pre-normalized word lists and
//! its stored fields as plain strings, so a query never re-touches the source
//! documents.
//!
//! # Query semantics
//!
//! - The query is normalized and split into terms (see `utils`).
//! - Every term must match some word of some searched field (AND).
//! - Per term, the best-scoring (field, word) pair counts; a document's score
//!   is the sum over terms.
//! - Matching runs once per distinct word (the vocabulary), not once per
//!   occurrence; documents then only look their words up.
//! - Ranking and truncation live in `scoring::ranking`.

mod options;

pub use options::{DocDescriptor, IndexOptions, Tokenize, DEFAULT_FUZZY, FUZZY_MIN_TERM_LEN};

use crate::error::{Error, Result};
use crate::fuzzy::bounded_levenshtein;
use crate::scoring::ranking::{rank, ScoredDoc};
use crate::scoring::{match_score, MatchTier};
use crate::types::{DocKey, Document, Field, SearchHit};
use crate::utils::{normalize, query_terms, words};
use std::collections::{HashMap, HashSet};

/// Parse a search-data file: a JSON array of documents.
pub fn parse_documents(json: &str) -> Result<Vec<Document>> {
    Ok(serde_json::from_str(json)?)
}

/// Stored display fields. Fields missing from `doc.store` stay empty.
#[derive(Debug, Clone, Default)]
struct StoredFields {
    title: String,
    href: String,
    section: String,
}

#[derive(Debug, Clone)]
struct IndexedDoc {
    id: DocKey,
    stored: StoredFields,
    /// One normalized word list per searched field, in `doc.field` order.
    fields: Vec<Vec<String>>,
}

#[derive(Debug, Clone)]
pub struct DocumentIndex {
    docs: Vec<IndexedDoc>,
    /// Distinct words across all searched fields.
    vocabulary: HashSet<String>,
    options: IndexOptions,
}

impl DocumentIndex {
    /// Build the index from a full collection.
    ///
    /// Fails on duplicate ids and on option field names that do not exist.
    pub fn build(documents: Vec<Document>, options: IndexOptions) -> Result<Self> {
        let layout = options.resolve()?;
        let mut seen: HashSet<DocKey> = HashSet::with_capacity(documents.len());
        let mut docs = Vec::with_capacity(documents.len());
        let mut vocabulary = HashSet::new();

        for document in documents {
            if !seen.insert(document.id.clone()) {
                return Err(Error::DuplicateDocument(document.id.to_string()));
            }

            let fields: Vec<Vec<String>> = layout
                .fields
                .iter()
                .map(|&field| {
                    let normalized = normalize(document.field(field));
                    words(&normalized).into_iter().map(str::to_string).collect()
                })
                .collect();
            for word in fields.iter().flatten() {
                if !vocabulary.contains(word) {
                    vocabulary.insert(word.clone());
                }
            }

            let mut stored = StoredFields::default();
            for &field in &layout.store {
                match field {
                    Field::Title => stored.title = document.title.clone(),
                    Field::Href => stored.href = document.href.clone(),
                    Field::Section => stored.section = document.section.clone(),
                    // Content is searchable, never displayed
                    Field::Content => {}
                }
            }

            docs.push(IndexedDoc {
                id: document.id,
                stored,
                fields,
            });
        }

        log::debug!(
            "indexed {} documents ({} distinct words) over fields {:?}",
            docs.len(),
            vocabulary.len(),
            options.doc.field
        );
        Ok(Self {
            docs,
            vocabulary,
            options,
        })
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn options(&self) -> &IndexOptions {
        &self.options
    }

    /// Number of distinct searchable words.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Ranked query, at most `limit` hits. Blank queries return nothing.
    pub fn search(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let terms = query_terms(query);
        if terms.is_empty() || limit == 0 {
            return Vec::new();
        }

        let mut matches = Vec::with_capacity(terms.len());
        for term in &terms {
            let matched = self.matching_words(term);
            if matched.is_empty() {
                return Vec::new();
            }
            matches.push(matched);
        }

        let scored: Vec<ScoredDoc> = self
            .docs
            .iter()
            .enumerate()
            .filter_map(|(slot, doc)| {
                let mut total = 0.0;
                for matched in &matches {
                    total += best_term_score(doc, matched)?;
                }
                Some(ScoredDoc { slot, score: total })
            })
            .collect();

        rank(scored, limit)
            .into_iter()
            .map(|scored| {
                let doc = &self.docs[scored.slot];
                SearchHit {
                    id: doc.id.clone(),
                    title: doc.stored.title.clone(),
                    href: doc.stored.href.clone(),
                    section: doc.stored.section.clone(),
                    score: scored.score,
                }
            })
            .collect()
    }

    /// Every vocabulary word `term` matches, with its tier.
    fn matching_words(&self, term: &str) -> HashMap<&str, MatchTier> {
        self.vocabulary
            .iter()
            .filter_map(|word| Some((word.as_str(), self.match_word(term, word)?)))
            .collect()
    }

    fn match_word(&self, term: &str, word: &str) -> Option<MatchTier> {
        if word == term {
            return Some(MatchTier::Exact);
        }

        let tokenize = self.options.tokenize;
        if tokenize != Tokenize::Strict && word.starts_with(term) {
            return Some(MatchTier::Prefix);
        }

        if self.options.fuzzy > 0 && term.chars().count() >= FUZZY_MIN_TERM_LEN {
            if let Some(distance) = bounded_levenshtein(term, word, self.options.fuzzy) {
                return Some(MatchTier::Fuzzy { distance });
            }
        }

        let substring = match tokenize {
            Tokenize::Full => word.contains(term),
            Tokenize::Reverse => word.ends_with(term),
            Tokenize::Strict | Tokenize::Forward => false,
        };
        substring.then_some(MatchTier::Substring)
    }
}

/// Best score of one term anywhere in `doc`, or `None` if it matches nowhere.
fn best_term_score(doc: &IndexedDoc, matched: &HashMap<&str, MatchTier>) -> Option<f64> {
    let mut best: Option<f64> = None;
    for (position, field_words) in doc.fields.iter().enumerate() {
        for (word_index, word) in field_words.iter().enumerate() {
            if let Some(&tier) = matched.get(word.as_str()) {
                let score = match_score(tier, position, word_index, field_words.len());
                if best.map_or(true, |b| score > b) {
                    best = Some(score);
                }
            }
        }
    }
    best
}
