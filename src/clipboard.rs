// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Click-to-copy for code blocks.
//!
//! A click on a `pre code` block selects the whole `pre` container and, when
//! the browser exposes a clipboard, writes the container's text to it. The
//! visible selection is the fallback when there is no clipboard, so a missing
//! clipboard is not an error.

/// Selection and clipboard access for one page.
pub trait CopyHost {
    /// Handle to a container element.
    type Node;

    /// Collapse any existing selection, then select all of `node`'s contents.
    fn select_contents(&mut self, node: &Self::Node);

    /// Plain text of `node`, markup stripped.
    fn text_content(&self, node: &Self::Node) -> String;

    fn clipboard_available(&self) -> bool;

    /// Fire-and-forget clipboard write.
    fn write_clipboard(&mut self, text: String);
}

/// What a click ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Selected,
    SelectedAndCopied,
}

/// Handle a click on a code block whose enclosing container is `container`.
pub fn copy_container<H: CopyHost>(host: &mut H, container: &H::Node) -> CopyOutcome {
    host.select_contents(container);

    if !host.clipboard_available() {
        return CopyOutcome::Selected;
    }

    let text = host.text_content(container);
    host.write_clipboard(text);
    CopyOutcome::SelectedAndCopied
}
