//! Office document to markup conversion.
//!
//! Word documents are XML-based archives (Open XML / OOXML format) that can
//! be parsed directly. This module renders them into a [`MarkupTree`]:
//! - Paragraphs, headings and bold/italic spans from `word/document.xml`
//! - Bulleted and numbered lists using `word/numbering.xml`
//! - Tables with header rows, merged cells and nested content
//!
//! # Example
//!
//! ```no_run
//! use protocol_converter::converters::office::OfficeConverter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let converter = OfficeConverter::new();
//! let tree = converter.convert_docx("protocols/mr_hjarna.docx")?;
//! println!("{}", tree.to_html());
//! # Ok(())
//! # }
//! ```

mod docx;
mod numbering;
mod render;
mod styles;

pub use docx::DocxConverter;
pub use numbering::ListKind;

use crate::error::Result;
use crate::markup::MarkupTree;
use quick_xml::events::BytesStart;
use std::path::Path;

/// Configuration for Office to markup conversion.
#[derive(Debug, Clone)]
pub struct OfficeConfig {
    /// Drop paragraphs without any text
    pub ignore_empty_paragraphs: bool,
}

impl Default for OfficeConfig {
    fn default() -> Self {
        Self {
            ignore_empty_paragraphs: true,
        }
    }
}

impl OfficeConfig {
    /// Keep or drop empty paragraphs.
    pub fn with_ignore_empty_paragraphs(mut self, ignore: bool) -> Self {
        self.ignore_empty_paragraphs = ignore;
        self
    }
}

/// Main converter for Office documents to markup.
#[derive(Debug, Clone, Default)]
pub struct OfficeConverter {
    config: OfficeConfig,
}

impl OfficeConverter {
    /// Create a new converter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter with custom configuration.
    pub fn with_config(config: OfficeConfig) -> Self {
        Self { config }
    }

    /// Get the current configuration.
    pub fn config(&self) -> &OfficeConfig {
        &self.config
    }

    /// Convert a DOCX file to a markup tree.
    ///
    /// The extension is not checked; anything that is not an Open XML
    /// package fails with [`crate::Error::InvalidDocument`].
    pub fn convert_docx(&self, path: impl AsRef<Path>) -> Result<MarkupTree> {
        let bytes = std::fs::read(path.as_ref())?;
        self.convert_docx_bytes(&bytes)
    }

    /// Convert DOCX bytes to a markup tree.
    pub fn convert_docx_bytes(&self, bytes: &[u8]) -> Result<MarkupTree> {
        let converter = DocxConverter::new(self.config.clone());
        converter.convert(bytes)
    }
}

/// Helper to get an attribute value from an XML element.
pub(crate) fn get_attribute(e: &BytesStart, name: &str) -> Option<String> {
    // Check both with and without namespace prefix
    for attr in e.attributes().flatten() {
        let key = attr.key.local_name();
        if key.as_ref() == name.as_bytes() {
            return Some(String::from_utf8_lossy(&attr.value).to_string());
        }
    }
    None
}
