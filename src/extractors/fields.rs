//! Single-line labeled fields.
//!
//! A field is a paragraph that starts with a bold `Label:` span, followed by
//! the value as ordinary inline text:
//!
//! ```text
//! <p><strong>System:</strong> 3T Scanner</p>
//! ```

use crate::markup::{Element, MarkupTree, Node, Tag};

/// Extract the value following a bold `label:` marker.
///
/// Returns an empty string when no paragraph carries the label. The label
/// must be followed by a colon inside the bold span; a label without the
/// colon, or emphasized some other way, counts as absent.
pub fn extract_field(label: &str, tree: &MarkupTree) -> String {
    match find_field(label, tree) {
        Some(value) => value,
        None => {
            log::warn!("{} entry does not exist!", label);
            String::new()
        },
    }
}

/// First labeled value in document order, if any.
pub fn find_field(label: &str, tree: &MarkupTree) -> Option<String> {
    let marker = format!("{}:", label);
    tree.find_all(Tag::Paragraph)
        .find_map(|para| labeled_value(para, &marker))
}

fn labeled_value(para: &Element, marker: &str) -> Option<String> {
    let (first, rest) = para.children.split_first()?;
    let strong = first.as_element().filter(|e| e.tag == Tag::Strong)?;
    if strong.text().trim() != marker {
        return None;
    }

    let value: String = rest.iter().map(Node::text).collect();
    // Only the separator after the colon is dropped.
    let value = value.strip_prefix(char::is_whitespace).unwrap_or(&value);
    Some(value.to_string())
}
