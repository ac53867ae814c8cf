//! Error types for protocol conversion.
//!
//! Only document-level failures are errors. Missing fields, lists, tables and
//! short table rows are recovered inside the extractors with a default value
//! and a logged diagnostic.

use std::path::PathBuf;

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting protocol documents.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Input path is neither a file nor a directory
    #[error("argument needs to be either a word file with .docx or a directory of word files: {}", .0.display())]
    InvalidInput(PathBuf),

    /// Document is not a readable Open XML package
    #[error("Invalid document: {0}")]
    InvalidDocument(String),

    /// Malformed XML inside a document part
    #[error("XML parse error: {0}")]
    Xml(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::InvalidDocument(format!("Failed to open DOCX archive: {}", err))
    }
}
