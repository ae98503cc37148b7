//! Click-to-copy over a fake selection and clipboard.

use book_search::testing::{FakeBlock, FakeCopyHost};
use book_search::{copy_container, CopyOutcome};

fn pre(text: &str) -> FakeBlock {
    FakeBlock {
        text: text.to_string(),
    }
}

#[test]
fn test_copies_exact_container_text() {
    let mut host = FakeCopyHost::with_clipboard();
    let block = pre("fn main() {\n    println!(\"hi\");\n}\n");

    let outcome = copy_container(&mut host, &block);

    assert_eq!(outcome, CopyOutcome::SelectedAndCopied);
    assert_eq!(host.selection, vec![block.clone()]);
    assert_eq!(host.clipboard.as_deref(), Some(&[block.text][..]));
}

#[test]
fn test_missing_clipboard_keeps_selection_fallback() {
    let mut host = FakeCopyHost::default();
    let block = pre("npm install");

    assert_eq!(copy_container(&mut host, &block), CopyOutcome::Selected);
    assert_eq!(host.selection, vec![block]);
    assert_eq!(host.clipboard, None);
}

#[test]
fn test_whitespace_preserved() {
    let mut host = FakeCopyHost::with_clipboard();
    let block = pre("  indented\n\ttabbed\n");
    copy_container(&mut host, &block);
    assert_eq!(host.clipboard, Some(vec!["  indented\n\ttabbed\n".to_string()]));
}
