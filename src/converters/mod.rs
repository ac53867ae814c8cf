//! Format converters for protocol documents.
//!
//! - **Office**: `.docx` packages rendered into a [`crate::markup::MarkupTree`]
//! - **HTML**: serialization of a markup tree for inspection
//!
//! # Examples
//!
//! ```no_run
//! use protocol_converter::converters::OfficeConverter;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let tree = OfficeConverter::new().convert_docx("protocol.docx")?;
//! let html = tree.to_html();
//! # Ok(())
//! # }
//! ```

pub mod html;
pub mod office;

pub use office::{DocxConverter, OfficeConfig, OfficeConverter};
