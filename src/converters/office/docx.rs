//! DOCX to markup conversion.
//!
//! Parses Microsoft Word documents (.docx) and renders them into a
//! [`MarkupTree`].
//!
//! DOCX files are ZIP archives containing XML files in Open XML format.
//! The main content is in `word/document.xml`; list kinds come from
//! `word/numbering.xml` and heading styles from `word/styles.xml`.

use super::numbering::NumberingDefinitions;
use super::render::render_document;
use super::styles::{toggle_value, NumberingRef, RunStyle, StyleSheet};
use super::{get_attribute, OfficeConfig};
use crate::error::{Error, Result};
use crate::markup::MarkupTree;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::Reader;
use std::io::{Cursor, Read, Seek};
use zip::ZipArchive;

/// Elements whose whole subtree is skipped (drawings, text boxes, embedded objects).
const SKIPPED_ELEMENTS: &[&[u8]] = &[b"drawing", b"pict", b"object", b"AlternateContent"];

/// DOCX to markup converter.
pub struct DocxConverter {
    config: OfficeConfig,
}

impl DocxConverter {
    /// Create a new DOCX converter.
    pub fn new(config: OfficeConfig) -> Self {
        Self { config }
    }

    /// Convert DOCX bytes to a markup tree.
    pub fn convert(&self, bytes: &[u8]) -> Result<MarkupTree> {
        let cursor = Cursor::new(bytes);
        let mut archive = ZipArchive::new(cursor)?;

        let document_xml = read_part(&mut archive, "word/document.xml")?
            .ok_or_else(|| Error::InvalidDocument("word/document.xml not found".to_string()))?;

        let styles = match read_part(&mut archive, "word/styles.xml")? {
            Some(xml) => StyleSheet::parse(&xml)?,
            None => StyleSheet::default(),
        };
        let numbering = match read_part(&mut archive, "word/numbering.xml")? {
            Some(xml) => NumberingDefinitions::parse(&xml)?,
            None => NumberingDefinitions::default(),
        };

        let blocks = parse_body(&document_xml)?;
        log::debug!("Parsed {} top-level blocks from document.xml", blocks.len());

        Ok(render_document(&blocks, &styles, &numbering, &self.config))
    }
}

/// Read a part of the package as UTF-8 text; `None` if the part is absent.
fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> Result<Option<String>> {
    let mut file = match archive.by_name(name) {
        Ok(file) => file,
        Err(zip::result::ZipError::FileNotFound) => return Ok(None),
        Err(e) => return Err(e.into()),
    };
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| Error::InvalidDocument(format!("Failed to read {}: {}", name, e)))?;
    Ok(Some(content))
}

/// Content of a text run.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RunContent {
    Text(String),
    Break,
}

/// A text run within a paragraph.
#[derive(Debug, Default, Clone)]
pub(crate) struct TextRun {
    pub style: RunStyle,
    pub content: Vec<RunContent>,
}

impl TextRun {
    fn push_text(&mut self, text: &str) {
        match self.content.last_mut() {
            Some(RunContent::Text(existing)) => existing.push_str(text),
            _ => self.content.push(RunContent::Text(text.to_string())),
        }
    }
}

/// A parsed paragraph from the document.
#[derive(Debug, Default, Clone)]
pub(crate) struct DocumentParagraph {
    pub style_id: Option<String>,
    pub numbering: Option<NumberingRef>,
    pub runs: Vec<TextRun>,
}

impl DocumentParagraph {
    /// Get the full text content of the paragraph.
    #[cfg(test)]
    pub fn get_text(&self) -> String {
        self.runs
            .iter()
            .flat_map(|run| run.content.iter())
            .filter_map(|content| match content {
                RunContent::Text(text) => Some(text.as_str()),
                RunContent::Break => None,
            })
            .collect()
    }
}

/// A table cell: nested blocks plus merge information.
#[derive(Debug, Clone)]
pub(crate) struct TableCellBlock {
    pub blocks: Vec<Block>,
    pub grid_span: u32,
    pub merged_continuation: bool,
}

impl Default for TableCellBlock {
    fn default() -> Self {
        Self {
            blocks: Vec::new(),
            grid_span: 1,
            merged_continuation: false,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub(crate) struct TableRowBlock {
    pub is_header: bool,
    pub cells: Vec<TableCellBlock>,
}

#[derive(Debug, Default, Clone)]
pub(crate) struct TableBlock {
    pub rows: Vec<TableRowBlock>,
}

/// Body-level content.
#[derive(Debug, Clone)]
pub(crate) enum Block {
    Paragraph(DocumentParagraph),
    Table(TableBlock),
}

/// An open `w:tbl` with its current row and cell.
#[derive(Debug, Default)]
struct TableFrame {
    table: TableBlock,
    row: Option<TableRowBlock>,
    cell: Option<TableCellBlock>,
}

/// Streaming state while walking `word/document.xml`.
#[derive(Debug, Default)]
struct BodyParser {
    blocks: Vec<Block>,
    tables: Vec<TableFrame>,
    paragraph: Option<DocumentParagraph>,
    run: Option<TextRun>,
    in_text: bool,
    in_run_props: bool,
    in_numbering_props: bool,
}

impl BodyParser {
    fn start(&mut self, e: &BytesStart) {
        match e.local_name().as_ref() {
            b"p" => {
                self.paragraph = Some(DocumentParagraph::default());
            },
            b"r" => {
                if self.paragraph.is_some() {
                    self.run = Some(TextRun::default());
                }
            },
            b"rPr" => self.in_run_props = self.run.is_some(),
            b"numPr" => self.in_numbering_props = true,
            b"t" => self.in_text = self.run.is_some(),
            b"tbl" => self.tables.push(TableFrame::default()),
            b"tr" => {
                if let Some(frame) = self.tables.last_mut() {
                    frame.row = Some(TableRowBlock::default());
                }
            },
            b"tc" => {
                if let Some(frame) = self.tables.last_mut() {
                    frame.cell = Some(TableCellBlock::default());
                }
            },
            _ => self.property(e),
        }
    }

    /// Self-closing elements: properties, tabs and breaks.
    fn empty(&mut self, e: &BytesStart) {
        match e.local_name().as_ref() {
            // `<w:p/>` is an empty paragraph, `<w:t/>` an empty text.
            b"p" | b"t" | b"r" => {},
            _ => self.property(e),
        }
    }

    fn property(&mut self, e: &BytesStart) {
        match e.local_name().as_ref() {
            b"b" => {
                if let (true, Some(run)) = (self.in_run_props, self.run.as_mut()) {
                    run.style.bold = toggle_value(get_attribute(e, "val").as_deref());
                }
            },
            b"i" => {
                if let (true, Some(run)) = (self.in_run_props, self.run.as_mut()) {
                    run.style.italic = toggle_value(get_attribute(e, "val").as_deref());
                }
            },
            b"tab" => {
                // Tab stops in pPr share the element name; only runs carry tab characters.
                if let (false, Some(run)) = (self.in_run_props, self.run.as_mut()) {
                    run.push_text("\t");
                }
            },
            b"br" | b"cr" => {
                if let (false, Some(run)) = (self.in_run_props, self.run.as_mut()) {
                    run.content.push(RunContent::Break);
                }
            },
            b"pStyle" => {
                if let Some(para) = self.paragraph.as_mut() {
                    para.style_id = get_attribute(e, "val");
                }
            },
            b"numId" => {
                if let (true, Some(para)) = (self.in_numbering_props, self.paragraph.as_mut()) {
                    para.numbering.get_or_insert_with(NumberingRef::default).num_id =
                        get_attribute(e, "val").unwrap_or_default();
                }
            },
            b"ilvl" => {
                if let (true, Some(para)) = (self.in_numbering_props, self.paragraph.as_mut()) {
                    para.numbering.get_or_insert_with(NumberingRef::default).level =
                        get_attribute(e, "val").and_then(|v| v.parse().ok()).unwrap_or(0);
                }
            },
            b"tblHeader" => {
                if let Some(row) = self.tables.last_mut().and_then(|f| f.row.as_mut()) {
                    row.is_header = toggle_value(get_attribute(e, "val").as_deref());
                }
            },
            b"gridSpan" => {
                if let Some(cell) = self.tables.last_mut().and_then(|f| f.cell.as_mut()) {
                    cell.grid_span = get_attribute(e, "val")
                        .and_then(|v| v.parse().ok())
                        .unwrap_or(1);
                }
            },
            b"vMerge" => {
                if let Some(cell) = self.tables.last_mut().and_then(|f| f.cell.as_mut()) {
                    cell.merged_continuation =
                        get_attribute(e, "val").as_deref() != Some("restart");
                }
            },
            _ => {},
        }
    }

    fn end(&mut self, local_name: &[u8]) {
        match local_name {
            b"t" => self.in_text = false,
            b"rPr" => self.in_run_props = false,
            b"numPr" => self.in_numbering_props = false,
            b"r" => {
                if let Some(run) = self.run.take() {
                    if let (false, Some(para)) = (run.content.is_empty(), self.paragraph.as_mut()) {
                        para.runs.push(run);
                    }
                }
            },
            b"p" => {
                if let Some(para) = self.paragraph.take() {
                    self.push_block(Block::Paragraph(para));
                }
            },
            b"tc" => {
                if let Some(frame) = self.tables.last_mut() {
                    if let (Some(cell), Some(row)) = (frame.cell.take(), frame.row.as_mut()) {
                        row.cells.push(cell);
                    }
                }
            },
            b"tr" => {
                if let Some(frame) = self.tables.last_mut() {
                    if let Some(row) = frame.row.take() {
                        frame.table.rows.push(row);
                    }
                }
            },
            b"tbl" => {
                if let Some(frame) = self.tables.pop() {
                    self.push_block(Block::Table(frame.table));
                }
            },
            _ => {},
        }
    }

    fn text(&mut self, text: &str) {
        if let (true, Some(run)) = (self.in_text, self.run.as_mut()) {
            run.push_text(text);
        }
    }

    /// Attach a finished block to the innermost open cell, or to the body.
    fn push_block(&mut self, block: Block) {
        match self.tables.last_mut() {
            Some(frame) => {
                if let Some(cell) = frame.cell.as_mut() {
                    cell.blocks.push(block);
                }
            },
            None => self.blocks.push(block),
        }
    }
}

/// Parse the main document part into body blocks.
pub(crate) fn parse_body(xml: &str) -> Result<Vec<Block>> {
    let mut reader = Reader::from_str(xml);
    // Leading spaces in `w:t` are content (" 3T Scanner").
    reader.trim_text(false);

    let mut parser = BodyParser::default();
    let mut buf = Vec::new();
    let mut skip_buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(ref e)) => {
                if SKIPPED_ELEMENTS.contains(&e.local_name().as_ref()) {
                    let end = e.name().as_ref().to_vec();
                    reader.read_to_end_into(QName(&end), &mut skip_buf)?;
                    skip_buf.clear();
                } else {
                    parser.start(e);
                }
            },
            Ok(Event::Empty(ref e)) => parser.empty(e),
            Ok(Event::End(ref e)) => parser.end(e.local_name().as_ref()),
            Ok(Event::Text(ref e)) => {
                if parser.in_text {
                    let text = e.unescape()?;
                    parser.text(&text);
                }
            },
            Ok(Event::Eof) => break,
            Err(e) => return Err(e.into()),
            _ => {},
        }
        buf.clear();
    }

    Ok(parser.blocks)
}
