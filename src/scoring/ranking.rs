// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored documents get sorted and cut.
//!
//! Only the score orders results. Equal scores keep insertion order (the
//! order documents appear in the search-data file), which is what a stable
//! sort gives for free. There is deliberately no title or id tiebreaker.

use std::cmp::Ordering;

/// A document that matched every query term, with its summed score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDoc {
    /// Position of the document in the index (insertion order).
    pub slot: usize,
    pub score: f64,
}

/// Compare two scored documents: higher score first.
pub fn compare_scored(a: &ScoredDoc, b: &ScoredDoc) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Sort by score (stable) and keep the first `limit`.
pub fn rank(mut scored: Vec<ScoredDoc>, limit: usize) -> Vec<ScoredDoc> {
    scored.sort_by(compare_scored);
    scored.truncate(limit);
    scored
}
