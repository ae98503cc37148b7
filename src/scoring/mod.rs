// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search hits get their numbers and their order.
//!
//! Field weight dominates everything else. A title match with the worst
//! position bonus still beats a content match with the best one.

mod core;
pub mod ranking;

pub use self::core::*;
