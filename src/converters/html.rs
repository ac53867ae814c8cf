//! HTML serialization of the markup tree.
//!
//! Produces the compact HTML a DOCX-to-HTML renderer emits for the same
//! document (`<p><strong>System:</strong> 3T Scanner</p>`), which is handy
//! for inspecting what the extractors see.

use crate::markup::{Element, Node};

/// Serialize a list of nodes to HTML.
pub fn render_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        write_node(node, &mut out);
    }
    out
}

/// Serialize a single element, including its own tag.
pub fn render_element(element: &Element) -> String {
    let mut out = String::new();
    write_element(element, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    let name = element.tag.html_name();
    out.push('<');
    out.push_str(name);
    for (key, value) in &element.attributes {
        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }

    if element.tag.is_void() {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(name);
    out.push('>');
}

/// Escape text content.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value (double-quoted).
pub fn escape_attribute(value: &str) -> String {
    escape_text(value).replace('"', "&quot;")
}
