//! Markup tree for rendered documents.
//!
//! The document loader renders a `.docx` into the same element structure an
//! HTML rendering of the document would have: headings, paragraphs, bold and
//! italic spans, bulleted and numbered lists, and tables. The tree is built
//! once and only queried afterwards.

mod traversal;

pub use traversal::Descendants;

use std::fmt;

/// Element kinds that can appear in a rendered document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Root of the tree
    Document,
    /// Heading with level 1 to 6
    Heading(u8),
    /// Paragraph
    Paragraph,
    /// Bold span
    Strong,
    /// Italic span
    Emphasis,
    /// Hard line break
    LineBreak,
    /// Bulleted list
    UnorderedList,
    /// Numbered list
    OrderedList,
    /// List item
    ListItem,
    /// Table
    Table,
    /// Table row
    TableRow,
    /// Header cell
    TableHeaderCell,
    /// Data cell
    TableCell,
}

impl Tag {
    /// HTML element name for this tag.
    pub fn html_name(&self) -> &'static str {
        match self {
            Tag::Document => "body",
            Tag::Heading(1) => "h1",
            Tag::Heading(2) => "h2",
            Tag::Heading(3) => "h3",
            Tag::Heading(4) => "h4",
            Tag::Heading(5) => "h5",
            Tag::Heading(_) => "h6",
            Tag::Paragraph => "p",
            Tag::Strong => "strong",
            Tag::Emphasis => "em",
            Tag::LineBreak => "br",
            Tag::UnorderedList => "ul",
            Tag::OrderedList => "ol",
            Tag::ListItem => "li",
            Tag::Table => "table",
            Tag::TableRow => "tr",
            Tag::TableHeaderCell => "th",
            Tag::TableCell => "td",
        }
    }

    /// Whether the element never has children.
    pub fn is_void(&self) -> bool {
        matches!(self, Tag::LineBreak)
    }
}

/// A node in the markup tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Element with children
    Element(Element),
    /// Text run
    Text(String),
}

impl Node {
    /// Text content of this node and all of its descendants.
    pub fn text(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text(),
        }
    }

    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    /// The text, if this node is a text node.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Text(text) => Some(text),
            Node::Element(_) => None,
        }
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Markup element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element kind
    pub tag: Tag,
    /// Attributes in insertion order
    pub attributes: Vec<(String, String)>,
    /// Child nodes in document order
    pub children: Vec<Node>,
}

impl Element {
    /// Create an empty element.
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create an element with the given children.
    pub fn with_children(tag: Tag, children: Vec<Node>) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children,
        }
    }

    /// Create an element holding a single text node.
    pub fn with_text(tag: Tag, text: impl Into<String>) -> Self {
        Self::with_children(tag, vec![Node::Text(text.into())])
    }

    /// Add an attribute.
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child node.
    pub fn push(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    /// Look up an attribute value.
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Concatenated text of all descendant text nodes.
    ///
    /// Line breaks contribute nothing, matching how an HTML text query
    /// treats `<br />`.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for node in self.descendants() {
            if let Node::Text(text) = node {
                out.push_str(text);
            }
        }
        out
    }

    /// All descendant nodes in document (pre-)order, excluding `self`.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants::new(&self.children)
    }

    /// Descendant elements with the given tag, in document order.
    pub fn find_all(&self, tag: Tag) -> impl Iterator<Item = &Element> + '_ {
        self.descendants()
            .filter_map(Node::as_element)
            .filter(move |element| element.tag == tag)
    }

    /// First descendant element with the given tag.
    pub fn find(&self, tag: Tag) -> Option<&Element> {
        self.find_all(tag).next()
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> + '_ {
        self.children.iter().filter_map(Node::as_element)
    }
}

/// A rendered document.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkupTree {
    root: Element,
}

impl MarkupTree {
    /// Wrap top-level nodes in a document root.
    pub fn new(children: Vec<Node>) -> Self {
        Self {
            root: Element::with_children(Tag::Document, children),
        }
    }

    /// Root element.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// All nodes in document order.
    pub fn descendants(&self) -> Descendants<'_> {
        self.root.descendants()
    }

    /// Elements with the given tag, in document order.
    pub fn find_all(&self, tag: Tag) -> impl Iterator<Item = &Element> + '_ {
        self.root.find_all(tag)
    }

    /// First element with the given tag.
    pub fn find(&self, tag: Tag) -> Option<&Element> {
        self.root.find(tag)
    }

    /// Serialize the document body to HTML.
    pub fn to_html(&self) -> String {
        crate::converters::html::render_nodes(&self.root.children)
    }
}

impl fmt::Display for MarkupTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_html())
    }
}
