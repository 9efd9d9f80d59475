// src/core/text_nodes.rs
use markup5ever_rcdom::{Handle, NodeData};

use super::dom::Descendants;

/// Every text node under a root, in document order.
///
/// One-shot: once drained it stays drained. Build a new one for a fresh walk.
/// Comments, doctypes and processing instructions are skipped.
pub struct TextNodes {
    inner: Descendants,
}

impl TextNodes {
    pub fn new(root: &Handle) -> Self {
        Self { inner: Descendants::new(root) }
    }
}

impl Iterator for TextNodes {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        self.inner.find(|n| matches!(n.data, NodeData::Text { .. }))
    }
}

/// Contents of a text node. Empty for anything that isn't one.
pub fn text_of(node: &Handle) -> String {
    match node.data {
        NodeData::Text { ref contents } => contents.borrow().to_string(),
        _ => s!(),
    }
}

/// Overwrite a text node's contents. Returns false (no-op) for non-text nodes.
pub fn set_text_of(node: &Handle, text: &str) -> bool {
    match node.data {
        NodeData::Text { ref contents } => {
            let mut c = contents.borrow_mut();
            if &**c != text {
                c.clear();
                c.push_slice(text);
            }
            true
        }
        _ => false,
    }
}

/// Rewrite every text node under `root` with `f`. Returns how many changed.
pub fn rewrite_text_nodes<F>(root: &Handle, mut f: F) -> usize
where
    F: FnMut(&str) -> String,
{
    let mut changed = 0;
    for node in TextNodes::new(root) {
        let before = text_of(&node);
        let after = f(&before);
        if after != before {
            set_text_of(&node, &after);
            changed += 1;
        }
    }
    changed
}
