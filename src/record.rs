//! Protocol records and their JSON output.

use crate::config::{ConverterConfig, JsonLayout, ProtocolTemplate};
use crate::error::Result;
use crate::extractors::{extract_field, extract_list, extract_table, SequenceTable};
use crate::markup::MarkupTree;
use serde::{Deserialize, Serialize};
use serde_json::ser::{CompactFormatter, Formatter, PrettyFormatter, Serializer};
use std::io;
use std::path::{Path, PathBuf};

/// The JSON record written for one protocol document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtocolRecord {
    /// Scanner system
    pub system: String,
    /// Coil
    pub spool: String,
    /// Contrast agent
    pub contrast: String,
    /// Examination code
    pub code: String,
    /// Examination time
    pub time: String,
    /// Common indications
    pub indications: Vec<String>,
    /// Patient preparations
    pub preparations: Vec<String>,
    /// Sequence table
    pub sequences: SequenceTable,
}

impl ProtocolRecord {
    /// Run every extractor of the template against a rendered document.
    pub fn extract(tree: &MarkupTree, template: &ProtocolTemplate) -> Self {
        Self {
            system: extract_field(&template.system_label, tree),
            spool: extract_field(&template.spool_label, tree),
            contrast: extract_field(&template.contrast_label, tree),
            code: extract_field(&template.code_label, tree),
            time: extract_field(&template.time_label, tree),
            indications: extract_list(&template.indications_heading, tree).collect(),
            preparations: extract_list(&template.preparations_heading, tree).collect(),
            sequences: extract_table(tree),
        }
    }

    /// Serialize with the given layout. Non-ASCII text is written as is.
    pub fn to_json(&self, layout: JsonLayout) -> Result<String> {
        let mut out = Vec::new();
        match layout {
            JsonLayout::Legacy => serialize_with(self, &mut out, LegacyFormatter)?,
            JsonLayout::Compact => serialize_with(self, &mut out, CompactFormatter)?,
            JsonLayout::Pretty => serialize_with(self, &mut out, PrettyFormatter::new())?,
        }
        // serde_json only emits valid UTF-8
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

fn serialize_with<T, F>(value: &T, out: &mut Vec<u8>, formatter: F) -> Result<()>
where
    T: Serialize,
    F: Formatter,
{
    let mut serializer = Serializer::with_formatter(out, formatter);
    value.serialize(&mut serializer)?;
    Ok(())
}

/// Single-line layout with `", "` and `": "` separators.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyFormatter;

impl Formatter for LegacyFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }
}

/// Writes records into the output directory.
#[derive(Debug, Clone)]
pub struct RecordWriter {
    output_dir: PathBuf,
    layout: JsonLayout,
}

impl RecordWriter {
    /// Create a writer for the configured output directory.
    pub fn new(config: &ConverterConfig) -> Self {
        Self {
            output_dir: config.output_dir.clone(),
            layout: config.json_layout,
        }
    }

    /// Create the output directory (and parents) if it does not exist yet.
    pub fn prepare(&self) -> Result<()> {
        std::fs::create_dir_all(&self.output_dir)?;
        Ok(())
    }

    /// Output path for a source document: `<output_dir>/<file stem>.json`.
    pub fn output_path(&self, source: &Path) -> PathBuf {
        let stem = source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        self.output_dir.join(format!("{}.json", stem))
    }

    /// Serialize and write a record, replacing any previous output.
    ///
    /// The text is serialized completely before the file is opened.
    pub fn write(&self, record: &ProtocolRecord, source: &Path) -> Result<PathBuf> {
        let json = record.to_json(self.layout)?;
        let path = self.output_path(source);
        std::fs::write(&path, json)?;
        Ok(path)
    }
}
