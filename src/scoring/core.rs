// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! # Key Invariant: Field Dominance
//!
//! The weakest primary-field match (fuzzy distance 3+, last word) must
//! outscore the strongest secondary-field match (exact, first word):
//!
//! ```text
//! FUZZY_DISTANCE_3_SCORE * PRIMARY_FIELD_WEIGHT  >  (EXACT_SCORE + MAX_POSITION_BONUS) * SECONDARY_FIELD_WEIGHT
//!                 5 * 1000 = 5000                 >                 (100 + 0.5) * 1 = 100.5
//! ```
//!
//! Changing any constant below means re-checking that inequality
//! (`test_primary_field_dominates`).

/// Tier 1: query term equals a document word.
pub const EXACT_SCORE: f64 = 100.0;

/// Tier 2: query term is a prefix of a document word.
pub const PREFIX_SCORE: f64 = 50.0;

/// Tier 3: document word within `fuzzy` edits of the query term.
pub const FUZZY_DISTANCE_1_SCORE: f64 = 30.0;
pub const FUZZY_DISTANCE_2_SCORE: f64 = 15.0;
pub const FUZZY_DISTANCE_3_SCORE: f64 = 5.0;

/// Tier 4: query term occurs inside a document word (full tokenizer only).
pub const SUBSTRING_SCORE: f64 = 20.0;

/// Maximum position bonus (matches on the first word get all of it).
pub const MAX_POSITION_BONUS: f64 = 0.5;

/// Weight of the first searched field (the title, in the widget's layout).
pub const PRIMARY_FIELD_WEIGHT: f64 = 1000.0;

/// Weight of every later searched field.
pub const SECONDARY_FIELD_WEIGHT: f64 = 1.0;

/// How a single query term matched a single document word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTier {
    Exact,
    Prefix,
    Substring,
    Fuzzy { distance: usize },
}

/// Base score of a match tier.
pub fn tier_score(tier: MatchTier) -> f64 {
    match tier {
        MatchTier::Exact => EXACT_SCORE,
        MatchTier::Prefix => PREFIX_SCORE,
        MatchTier::Substring => SUBSTRING_SCORE,
        MatchTier::Fuzzy { distance: 0 | 1 } => FUZZY_DISTANCE_1_SCORE,
        MatchTier::Fuzzy { distance: 2 } => FUZZY_DISTANCE_2_SCORE,
        MatchTier::Fuzzy { .. } => FUZZY_DISTANCE_3_SCORE,
    }
}

/// Weight for the field at `position` in the searched-field list.
pub fn field_weight(position: usize) -> f64 {
    if position == 0 {
        PRIMARY_FIELD_WEIGHT
    } else {
        SECONDARY_FIELD_WEIGHT
    }
}

/// Linear bonus in `[0, MAX_POSITION_BONUS]`: word 0 gets the full bonus,
/// the last word of the field gets none.
pub fn position_bonus(word_index: usize, word_count: usize) -> f64 {
    if word_count <= 1 {
        return MAX_POSITION_BONUS;
    }
    let ratio = word_index as f64 / (word_count - 1) as f64;
    MAX_POSITION_BONUS * (1.0 - ratio.min(1.0))
}

/// Final score of one term matching one field.
pub fn match_score(tier: MatchTier, field_position: usize, word_index: usize, word_count: usize) -> f64 {
    (tier_score(tier) + position_bonus(word_index, word_count)) * field_weight(field_position)
}
