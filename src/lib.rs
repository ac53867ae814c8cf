//! # Protocol Converter
//!
//! Converts imaging protocol documents (`.docx`) into fixed-schema JSON
//! records: scanner system, coil, contrast, examination code and time,
//! indication and preparation lists, and the sequence table.
//!
//! ## Pipeline
//!
//! 1. [`converters::office`] renders the document into a [`markup::MarkupTree`]
//!    (paragraphs, bold spans, lists, tables).
//! 2. [`extractors`] pull labeled fields, heading-anchored lists and the
//!    sequence table out of the tree. Missing pieces become empty values.
//! 3. [`record`] assembles a [`ProtocolRecord`] and writes
//!    `output/<document>.json`.
//! 4. [`batch`] runs the pipeline for one document or a directory of them.
//!
//! ## Quick Start
//!
//! ```no_run
//! use protocol_converter::{BatchConverter, ConverterConfig};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let batch = BatchConverter::new(ConverterConfig::default());
//! let report = batch.run(Path::new("protocols/"))?;
//! println!("{} records written", report.converted());
//! # Ok(())
//! # }
//! ```
//!
//! ## License
//!
//! Licensed under either of:
//!
//! * Apache License, Version 2.0 (<http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license (<http://opensource.org/licenses/MIT>)
//!
//! at your option.

#![warn(missing_docs)]

// Error handling
pub mod error;

// Configuration
pub mod config;

// Document model
pub mod markup;

// Format converters
pub mod converters;

// Field, list and table extraction
pub mod extractors;

// Output records
pub mod record;

// Batch driver
pub mod batch;

// Re-exports
pub use batch::{BatchConverter, BatchReport, InputKind};
pub use config::{ConverterConfig, JsonLayout, ProtocolTemplate};
pub use error::{Error, Result};
pub use extractors::{extract_field, extract_list, extract_table, RowRecord, SequenceTable};
pub use markup::MarkupTree;
pub use record::{ProtocolRecord, RecordWriter};

// Version info
/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
