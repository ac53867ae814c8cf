//! Rendering parsed DOCX blocks into markup.
//!
//! Adjacent runs with the same formatting collapse into one span, numbered
//! paragraphs group into (nested) lists, and header rows get header cells.

use super::docx::{Block, DocumentParagraph, RunContent, TableBlock, TextRun};
use super::numbering::{ListKind, NumberingDefinitions};
use super::styles::{NumberingRef, RunStyle, StyleSheet};
use super::OfficeConfig;
use crate::markup::{Element, MarkupTree, Node, Tag};

/// Lookup tables shared by every block of one document.
struct RenderContext<'a> {
    styles: &'a StyleSheet,
    numbering: &'a NumberingDefinitions,
    config: &'a OfficeConfig,
}

/// Render body blocks into a markup tree.
pub(crate) fn render_document(
    blocks: &[Block],
    styles: &StyleSheet,
    numbering: &NumberingDefinitions,
    config: &OfficeConfig,
) -> MarkupTree {
    let ctx = RenderContext {
        styles,
        numbering,
        config,
    };
    MarkupTree::new(render_blocks(blocks, &ctx))
}

fn render_blocks(blocks: &[Block], ctx: &RenderContext<'_>) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut lists = ListBuilder::default();

    for block in blocks {
        match block {
            Block::Paragraph(para) => {
                let inline = render_runs(&para.runs);
                if inline.is_empty() && ctx.config.ignore_empty_paragraphs {
                    continue;
                }

                let heading = para
                    .style_id
                    .as_deref()
                    .and_then(|id| ctx.styles.heading_level(id));

                match (heading, list_numbering(para, ctx)) {
                    (None, Some(numbering)) => {
                        let kind = ctx.numbering.list_kind(&numbering.num_id, numbering.level);
                        lists.add_item(&numbering.num_id, numbering.level, kind, inline);
                    },
                    (Some(level), _) => {
                        nodes.extend(lists.finish());
                        nodes.push(Element::with_children(Tag::Heading(level), inline).into());
                    },
                    (None, None) => {
                        nodes.extend(lists.finish());
                        nodes.push(Element::with_children(Tag::Paragraph, inline).into());
                    },
                }
            },
            Block::Table(table) => {
                nodes.extend(lists.finish());
                nodes.push(render_table(table, ctx).into());
            },
        }
    }

    nodes.extend(lists.finish());
    nodes
}

/// Direct numbering wins over numbering inherited from the paragraph style.
fn list_numbering<'p>(para: &'p DocumentParagraph, ctx: &RenderContext<'p>) -> Option<&'p NumberingRef> {
    match para.numbering.as_ref() {
        Some(direct) if direct.is_active() => Some(direct),
        Some(_) => None,
        None => para
            .style_id
            .as_deref()
            .and_then(|id| ctx.styles.numbering(id)),
    }
}

fn render_table(table: &TableBlock, ctx: &RenderContext<'_>) -> Element {
    let mut element = Element::new(Tag::Table);
    for row in &table.rows {
        let mut tr = Element::new(Tag::TableRow);
        let cell_tag = if row.is_header {
            Tag::TableHeaderCell
        } else {
            Tag::TableCell
        };

        for cell in row.cells.iter().filter(|cell| !cell.merged_continuation) {
            let mut td = Element::with_children(cell_tag, render_blocks(&cell.blocks, ctx));
            if cell.grid_span > 1 {
                td = td.attribute("colspan", cell.grid_span.to_string());
            }
            tr.push(td);
        }
        element.push(tr);
    }
    element
}

/// Merge runs with identical formatting, then wrap each group in its spans.
pub(crate) fn render_runs(runs: &[TextRun]) -> Vec<Node> {
    let mut groups: Vec<(RunStyle, Vec<&RunContent>)> = Vec::new();
    for run in runs {
        match groups.last_mut() {
            Some((style, content)) if *style == run.style => content.extend(run.content.iter()),
            _ => groups.push((run.style, run.content.iter().collect())),
        }
    }

    let mut nodes = Vec::new();
    for (style, content) in groups {
        let mut inner = Vec::new();
        for piece in content {
            match piece {
                RunContent::Text(text) => match inner.last_mut() {
                    Some(Node::Text(existing)) => existing.push_str(text),
                    _ => inner.push(Node::Text(text.clone())),
                },
                RunContent::Break => inner.push(Element::new(Tag::LineBreak).into()),
            }
        }
        if inner.is_empty() {
            continue;
        }

        if style.italic {
            inner = vec![Element::with_children(Tag::Emphasis, inner).into()];
        }
        if style.bold {
            inner = vec![Element::with_children(Tag::Strong, inner).into()];
        }
        for node in inner {
            match (nodes.last_mut(), node) {
                (Some(Node::Text(existing)), Node::Text(text)) => existing.push_str(&text),
                (_, node) => nodes.push(node),
            }
        }
    }
    nodes
}

/// One open list level.
#[derive(Debug)]
struct OpenList {
    num_id: String,
    level: u8,
    kind: ListKind,
    element: Element,
}

impl OpenList {
    fn new(num_id: &str, level: u8, kind: ListKind) -> Self {
        let tag = match kind {
            ListKind::Bullet => Tag::UnorderedList,
            ListKind::Ordered => Tag::OrderedList,
        };
        Self {
            num_id: num_id.to_string(),
            level,
            kind,
            element: Element::new(tag),
        }
    }
}

/// Groups consecutive numbered paragraphs into nested lists.
#[derive(Debug, Default)]
struct ListBuilder {
    stack: Vec<OpenList>,
    done: Vec<Node>,
}

impl ListBuilder {
    fn add_item(&mut self, num_id: &str, level: u8, kind: ListKind, inline: Vec<Node>) {
        // A different numbering instance ends the open lists.
        if self.stack.first().is_some_and(|open| open.num_id != num_id) {
            self.close_all();
        }
        while self.stack.last().is_some_and(|open| open.level > level) {
            self.close_top();
        }

        match self.stack.last() {
            Some(open) if open.level == level && open.kind != kind => {
                self.close_top();
                self.stack.push(OpenList::new(num_id, level, kind));
            },
            Some(open) if open.level == level => {},
            _ => self.stack.push(OpenList::new(num_id, level, kind)),
        }

        if let Some(open) = self.stack.last_mut() {
            open.element
                .push(Element::with_children(Tag::ListItem, inline));
        }
    }

    /// Close the innermost list, nesting it in the last item of its parent.
    fn close_top(&mut self) {
        let Some(closed) = self.stack.pop() else {
            return;
        };
        match self.stack.last_mut() {
            Some(parent) => {
                let needs_item = !matches!(
                    parent.element.children.last(),
                    Some(Node::Element(Element {
                        tag: Tag::ListItem,
                        ..
                    }))
                );
                if needs_item {
                    parent.element.push(Element::new(Tag::ListItem));
                }
                if let Some(Node::Element(item)) = parent.element.children.last_mut() {
                    item.push(closed.element);
                }
            },
            None => self.done.push(closed.element.into()),
        }
    }

    fn close_all(&mut self) {
        while !self.stack.is_empty() {
            self.close_top();
        }
    }

    /// Close every open list and hand back the finished top-level lists.
    fn finish(&mut self) -> Vec<Node> {
        self.close_all();
        std::mem::take(&mut self.done)
    }
}
