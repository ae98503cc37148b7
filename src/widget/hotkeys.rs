// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Hotkeys that pull focus into the search input.

/// Characters from the input's `data-hotkeys` attribute, e.g. `"s/"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HotkeySet(String);

impl HotkeySet {
    /// An absent attribute behaves like an empty one.
    pub fn from_attribute(attribute: Option<String>) -> Self {
        Self(attribute.unwrap_or_default())
    }

    pub fn contains(&self, ch: char) -> bool {
        self.0.contains(ch)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
