//! Document-order traversal of the markup tree.
//!
//! Pre-order: a node is visited before its children, and everything after a
//! node in the iteration is what follows it in the rendered document.

use super::Node;

/// Pre-order iterator over a node list and all of its descendants.
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Descendants<'a> {
    pub(crate) fn new(nodes: &'a [Node]) -> Self {
        Self {
            stack: nodes.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Node::Element(element) = node {
            self.stack.extend(element.children.iter().rev());
        }
        Some(node)
    }
}
