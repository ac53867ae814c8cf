//! Batch conversion of a document or a directory of documents.
//!
//! Documents are converted one at a time. In a directory batch a document
//! that fails to load is reported and skipped; the rest still convert.

use crate::config::{ConverterConfig, ProtocolTemplate};
use crate::converters::office::OfficeConverter;
use crate::error::{Error, Result};
use crate::record::{ProtocolRecord, RecordWriter};
use std::path::{Path, PathBuf};

/// What the input argument names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKind {
    /// A single document
    File(PathBuf),
    /// A directory of documents
    Directory(PathBuf),
}

/// Classify the input path.
pub fn resolve_input(path: &Path) -> Result<InputKind> {
    if path.is_file() {
        Ok(InputKind::File(path.to_path_buf()))
    } else if path.is_dir() {
        Ok(InputKind::Directory(path.to_path_buf()))
    } else {
        Err(Error::InvalidInput(path.to_path_buf()))
    }
}

/// Documents directly inside `dir` with the given extension, sorted by name.
///
/// Subdirectories are not searched. Word lock files (`~$name.docx`) are
/// skipped.
pub fn discover_documents(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut documents = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if !path.is_file() {
            continue;
        }

        let matches_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(extension));
        let is_lock_file = path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with("~$"));

        if matches_extension && !is_lock_file {
            documents.push(path);
        }
    }
    documents.sort();
    Ok(documents)
}

/// Outcome of a batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Records written
    pub written: Vec<PathBuf>,
    /// Documents that failed, with the error message
    pub failed: Vec<(PathBuf, String)>,
}

impl BatchReport {
    /// Number of converted documents.
    pub fn converted(&self) -> usize {
        self.written.len()
    }

    /// Whether any document failed.
    pub fn has_failures(&self) -> bool {
        !self.failed.is_empty()
    }
}

/// Runs the conversion pipeline over the input.
#[derive(Debug, Clone, Default)]
pub struct BatchConverter {
    config: ConverterConfig,
    template: ProtocolTemplate,
    converter: OfficeConverter,
}

impl BatchConverter {
    /// Create a batch converter.
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Use a different document template.
    pub fn with_template(mut self, template: ProtocolTemplate) -> Self {
        self.template = template;
        self
    }

    /// Get the current configuration.
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert the document or directory named by `input`.
    ///
    /// Fails only when `input` is neither a file nor a directory, the
    /// directory cannot be listed, or the output directory cannot be created.
    /// Per-document failures end up in [`BatchReport::failed`].
    pub fn run(&self, input: &Path) -> Result<BatchReport> {
        let writer = RecordWriter::new(&self.config);
        writer.prepare()?;

        let documents = match resolve_input(input)? {
            InputKind::File(path) => vec![path],
            InputKind::Directory(dir) => {
                let documents = discover_documents(&dir, &self.config.extension)?;
                log::info!("Found {} documents in {}", documents.len(), dir.display());
                documents
            },
        };

        let mut report = BatchReport::default();
        for document in documents {
            match self.convert_document(&document, &writer) {
                Ok(path) => report.written.push(path),
                Err(e) => {
                    log::error!("Failed to convert {}: {}", document.display(), e);
                    report.failed.push((document, e.to_string()));
                },
            }
        }
        Ok(report)
    }

    /// Load, extract and write one document.
    pub fn convert_document(&self, document: &Path, writer: &RecordWriter) -> Result<PathBuf> {
        log::info!("parsing {}", document.display());
        let tree = self.converter.convert_docx(document)?;
        log::trace!("{}", tree.to_html());

        let record = ProtocolRecord::extract(&tree, &self.template);
        let path = writer.write(&record, document)?;
        log::info!("{} done writing data to {}", document.display(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_resolve_input() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.docx");
        std::fs::write(&file, b"x").unwrap();

        assert_eq!(resolve_input(&file).unwrap(), InputKind::File(file.clone()));
        assert_eq!(
            resolve_input(dir.path()).unwrap(),
            InputKind::Directory(dir.path().to_path_buf())
        );
        assert!(matches!(
            resolve_input(&dir.path().join("missing")),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_discover_documents_flat() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("b.docx"), b"").unwrap();
        std::fs::write(dir.path().join("a.DOCX"), b"").unwrap();
        std::fs::write(dir.path().join("notes.txt"), b"").unwrap();
        std::fs::write(dir.path().join("~$b.docx"), b"").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();
        std::fs::write(dir.path().join("sub/c.docx"), b"").unwrap();

        let found = discover_documents(dir.path(), "docx").unwrap();
        let names: Vec<String> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.DOCX", "b.docx"]);
    }

    #[test]
    fn test_invalid_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("output");
        let batch = BatchConverter::new(ConverterConfig::new().with_output_dir(&out));
        let result = batch.run(&dir.path().join("nope"));
        assert!(matches!(result, Err(Error::InvalidInput(_))));
        assert_eq!(std::fs::read_dir(&out).unwrap().count(), 0);
    }

    #[test]
    fn test_bad_document_reported() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("broken.docx");
        std::fs::write(&doc, b"not a zip").unwrap();
        let out = dir.path().join("output");

        let batch = BatchConverter::new(ConverterConfig::new().with_output_dir(&out));
        let report = batch.run(&doc).unwrap();
        assert_eq!(report.converted(), 0);
        assert!(report.has_failures());
        assert!(!out.join("broken.json").exists());
    }

    #[test]
    fn test_report_default() {
        let report = BatchReport::default();
        assert_eq!(report.converted(), 0);
        assert!(!report.has_failures());
    }
}
