// src/core/dom.rs
//! Thin page DOM over `markup5ever_rcdom`.
//!
//! Everything here mirrors what a content script gets from the browser:
//! element queries, `textContent`, `innerHTML` read/write, sibling/parent
//! navigation. Absence is always `None`, never an error.
use std::{cell::RefCell, error::Error, rc::Rc};

use html5ever::{
    parse_document, parse_fragment,
    serialize::{serialize, SerializeOpts, TraversalScope},
    tendril::{StrTendril, TendrilSink},
    ParseOpts,
};
use markup5ever_rcdom::{Handle, Node, NodeData, RcDom, SerializableHandle};

/// A parsed page.
pub struct Page {
    dom: RcDom,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
        Self { dom }
    }

    pub fn document(&self) -> Handle {
        self.dom.document.clone()
    }

    /// Serialize the whole document back to markup.
    pub fn to_html(&self) -> Result<String, Box<dyn Error>> {
        inner_html(&self.dom.document)
    }

    /// First element in document order matching `pred`.
    pub fn find_first<P>(&self, mut pred: P) -> Option<Handle>
    where
        P: FnMut(&Handle) -> bool,
    {
        Descendants::new(&self.dom.document).find(|n| is_element(n) && pred(n))
    }

    /// All elements in document order matching `pred`.
    pub fn find_all<P>(&self, mut pred: P) -> Vec<Handle>
    where
        P: FnMut(&Handle) -> bool,
    {
        Descendants::new(&self.dom.document)
            .filter(|n| is_element(n) && pred(n))
            .collect()
    }

    /// `document.getElementById`
    pub fn find_by_id(&self, id: &str) -> Option<Handle> {
        self.find_first(|n| attr(n, "id").as_deref() == Some(id))
    }
}

/* ---------------- traversal ---------------- */

/// Pre-order walk of everything below a root (root excluded).
pub struct Descendants {
    stack: Vec<Handle>,
}

impl Descendants {
    pub fn new(root: &Handle) -> Self {
        let mut stack: Vec<Handle> = root.children.borrow().iter().cloned().collect();
        stack.reverse();
        Self { stack }
    }
}

impl Iterator for Descendants {
    type Item = Handle;

    fn next(&mut self) -> Option<Handle> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.borrow().iter().rev().cloned());
        Some(node)
    }
}

/* ---------------- element inspection ---------------- */

pub fn is_element(node: &Handle) -> bool {
    matches!(node.data, NodeData::Element { .. })
}

/// Lowercase local tag name, `None` for non-elements.
pub fn tag_name(node: &Node) -> Option<&str> {
    match node.data {
        NodeData::Element { ref name, .. } => Some(name.local.as_ref()),
        _ => None,
    }
}

pub fn has_tag(node: &Handle, tag: &str) -> bool {
    tag_name(node) == Some(tag)
}

pub fn attr(node: &Handle, name: &str) -> Option<String> {
    match node.data {
        NodeData::Element { ref attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.as_ref() == name)
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

/// `textContent`: concatenated descendant text.
pub fn text_content(node: &Handle) -> String {
    if let NodeData::Text { ref contents } = node.data {
        return contents.borrow().to_string();
    }
    let mut out = s!();
    for n in Descendants::new(node) {
        if let NodeData::Text { ref contents } = n.data {
            out.push_str(&contents.borrow());
        }
    }
    out
}

/* ---------------- navigation ---------------- */

pub fn parent(node: &Handle) -> Option<Handle> {
    let weak = node.parent.take();
    let parent = weak.as_ref().and_then(|w| w.upgrade());
    node.parent.set(weak);
    parent
}

pub fn parent_element(node: &Handle) -> Option<Handle> {
    parent(node).filter(is_element)
}

/// `nextSibling`: any node kind.
pub fn next_sibling(node: &Handle) -> Option<Handle> {
    let parent = parent(node)?;
    let siblings = parent.children.borrow();
    let idx = siblings.iter().position(|c| Rc::ptr_eq(c, node))?;
    siblings.get(idx + 1).cloned()
}

/// `nextElementSibling`
pub fn next_element_sibling(node: &Handle) -> Option<Handle> {
    let parent = parent(node)?;
    let siblings = parent.children.borrow();
    let idx = siblings.iter().position(|c| Rc::ptr_eq(c, node))?;
    siblings[idx + 1..].iter().find(|c| is_element(c)).cloned()
}

/* ---------------- mutation ---------------- */

fn detach_children(node: &Handle) {
    for child in node.children.borrow_mut().drain(..) {
        child.parent.set(None);
    }
}

fn append_child(node: &Handle, child: Handle) {
    child.parent.set(Some(Rc::downgrade(node)));
    node.children.borrow_mut().push(child);
}

/// `textContent = text`: drop all children, leave one text node.
pub fn set_text(node: &Handle, text: &str) {
    detach_children(node);
    let text_node = Node::new(NodeData::Text {
        contents: RefCell::new(StrTendril::from_slice(text)),
    });
    append_child(node, text_node);
}

/// `innerHTML` read.
pub fn inner_html(node: &Handle) -> Result<String, Box<dyn Error>> {
    let mut buf = Vec::new();
    let opts = SerializeOpts {
        traversal_scope: TraversalScope::ChildrenOnly(None),
        ..Default::default()
    };
    serialize(&mut buf, &SerializableHandle::from(node.clone()), opts)?;
    Ok(String::from_utf8(buf)?)
}

/// `innerHTML = markup`. The markup is parsed as a fragment with `node` as
/// its context element, so table-cell content parses as table-cell content.
pub fn set_inner_html(node: &Handle, markup: &str) -> Result<(), Box<dyn Error>> {
    let context = match node.data {
        NodeData::Element { ref name, .. } => name.clone(),
        _ => return Err("innerHTML target is not an element".into()),
    };
    let frag = parse_fragment(RcDom::default(), ParseOpts::default(), context, Vec::new())
        .one(markup);

    // Fragment parsing roots everything under a synthetic <html> element
    let root = frag
        .document
        .children
        .borrow()
        .first()
        .cloned()
        .ok_or("fragment parse produced no root")?;
    let parsed: Vec<Handle> = root.children.borrow_mut().drain(..).collect();

    detach_children(node);
    for child in parsed {
        append_child(node, child);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_element_sibling_skips_whitespace() {
        let page = Page::parse("<table><tr><td id=a>x</td>\n <td id=b>y</td></tr></table>");
        let a = page.find_by_id("a").unwrap();
        let b = next_element_sibling(&a).unwrap();
        assert_eq!(attr(&b, "id").as_deref(), Some("b"));
        assert!(next_element_sibling(&b).is_none());
    }

    #[test]
    fn inner_html_round_trips_in_a_cell() {
        let page = Page::parse("<table><tr><td id=c>Wave <b>(MR, WL)</b>.</td></tr></table>");
        let cell = page.find_by_id("c").unwrap();
        let before = inner_html(&cell).unwrap();
        set_text(&cell, "gone");
        assert_eq!(text_content(&cell), "gone");
        set_inner_html(&cell, &before).unwrap();
        assert_eq!(inner_html(&cell).unwrap(), before);
        assert_eq!(text_content(&cell), "Wave (MR, WL).");
    }
}
