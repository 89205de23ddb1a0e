//! HTML serialization for element trees.
//!
//! Output is deterministic so tests can compare it byte for byte: the
//! `class` attribute always comes first, remaining attributes follow in
//! name order, and no whitespace is invented between nodes. Text and
//! attribute values are escaped with the `html-escape` crate, so the output
//! is well-formed markup for any tree content.

use crate::element::{Element, Node};

/// Tags that never take children or a closing tag in HTML.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta",
    "param", "source", "track", "wbr",
];

fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.contains(&tag)
}

impl Element {
    /// Serialize this element and its whole subtree.
    pub fn outer_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }

    /// Serialize the element's children only, without the enclosing tag.
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for node in self.child_nodes() {
            write_node(&node, &mut out);
        }
        out
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag());
    let classes = el.classes();
    if !classes.is_empty() {
        out.push_str(" class=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(
            &classes.to_string(),
        ));
        out.push('"');
    }
    for (name, value) in el.attributes() {
        out.push(' ');
        out.push_str(&name);
        out.push_str("=\"");
        out.push_str(&html_escape::encode_double_quoted_attribute(&value));
        out.push('"');
    }
    out.push('>');
    if is_void(el.tag()) {
        return;
    }
    for node in el.child_nodes() {
        write_node(&node, out);
    }
    out.push_str("</");
    out.push_str(el.tag());
    out.push('>');
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(el) => write_element(el, out),
        Node::Text(text) => out.push_str(&html_escape::encode_text(text)),
    }
}
