//! Bulleted lists introduced by a heading.

use crate::markup::{Descendants, Element, MarkupTree, Node, Tag};
use regex::Regex;

/// Lazily yields the item texts of one list.
///
/// When the heading or its list cannot be found the iterator yields exactly
/// one empty string. Callers that persist the result rely on this sentinel,
/// so a missing list serializes as `[""]` rather than `[]`.
#[derive(Debug, Clone)]
pub struct ListItems<'a> {
    state: ListState<'a>,
}

#[derive(Debug, Clone)]
enum ListState<'a> {
    Sentinel,
    Items(Descendants<'a>),
    Done,
}

impl<'a> ListItems<'a> {
    fn sentinel() -> Self {
        Self {
            state: ListState::Sentinel,
        }
    }

    fn items(list: &'a Element) -> Self {
        Self {
            state: ListState::Items(list.descendants()),
        }
    }

    /// Whether this is the missing-list sentinel (before it was consumed).
    pub fn is_sentinel(&self) -> bool {
        matches!(self.state, ListState::Sentinel)
    }
}

impl Iterator for ListItems<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        match &mut self.state {
            ListState::Sentinel => {
                self.state = ListState::Done;
                Some(String::new())
            },
            ListState::Items(nodes) => {
                let item = nodes
                    .filter_map(Node::as_element)
                    .find(|element| element.tag == Tag::ListItem);
                match item {
                    Some(item) => Some(item.text()),
                    None => {
                        self.state = ListState::Done;
                        None
                    },
                }
            },
            ListState::Done => None,
        }
    }
}

/// Items of the first bulleted list after `heading`.
///
/// `heading` is searched as a pattern in the document's text nodes; the first
/// matching text node anchors the search for the next `ul` in document order.
/// Every `li` inside that list is yielded, nested items included.
pub fn extract_list<'a>(heading: &str, tree: &'a MarkupTree) -> ListItems<'a> {
    match find_list(heading, tree) {
        Some(list) => ListItems::items(list),
        None => {
            log::warn!("{} list does not exist!", heading);
            ListItems::sentinel()
        },
    }
}

/// The `ul` element following the heading text, if any.
pub fn find_list<'a>(heading: &str, tree: &'a MarkupTree) -> Option<&'a Element> {
    let pattern = match Regex::new(heading) {
        Ok(pattern) => pattern,
        Err(e) => {
            log::warn!("Invalid list heading pattern '{}': {}", heading, e);
            return None;
        },
    };

    let mut nodes = tree.descendants();
    nodes
        .by_ref()
        .find(|node| node.as_text().is_some_and(|text| pattern.is_match(text)))?;

    nodes
        .filter_map(Node::as_element)
        .find(|element| element.tag == Tag::UnorderedList)
}
