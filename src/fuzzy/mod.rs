// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search: typo tolerance via edit distance.
//!
//! Vocabularies on a documentation site are a few thousand words at most, so a
//! bounded Levenshtein per candidate word is all the machinery needed.

mod levenshtein;

pub use levenshtein::*;
