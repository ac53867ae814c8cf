//! Configuration for protocol conversion.

use std::path::PathBuf;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

/// Default document extension for directory batches.
pub const DEFAULT_EXTENSION: &str = "docx";

/// JSON text layout of written records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonLayout {
    /// One line, `", "` and `": "` separators (the legacy tool's layout)
    #[default]
    Legacy,
    /// One line, no separator whitespace
    Compact,
    /// Indented
    Pretty,
}

/// Conversion configuration.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    /// Directory records are written to.
    pub output_dir: PathBuf,

    /// Extension (without dot) of documents picked up from a directory.
    pub extension: String,

    /// Layout of the JSON text.
    pub json_layout: JsonLayout,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConverterConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            extension: DEFAULT_EXTENSION.to_string(),
            json_layout: JsonLayout::default(),
        }
    }

    /// Write records somewhere else.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Pick up a different extension from directories.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// Change the JSON layout.
    pub fn with_json_layout(mut self, layout: JsonLayout) -> Self {
        self.json_layout = layout;
        self
    }
}

/// Labels and headings of the protocol document template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolTemplate {
    /// Bold label of the scanner system line.
    pub system_label: String,
    /// Bold label of the coil line.
    pub spool_label: String,
    /// Bold label of the contrast line.
    pub contrast_label: String,
    /// Bold label of the examination code line.
    pub code_label: String,
    /// Bold label of the examination time line.
    pub time_label: String,
    /// Heading in front of the indications list.
    pub indications_heading: String,
    /// Heading in front of the preparations list.
    pub preparations_heading: String,
}

impl Default for ProtocolTemplate {
    fn default() -> Self {
        Self {
            system_label: "System".to_string(),
            spool_label: "Spole".to_string(),
            contrast_label: "Kontrast".to_string(),
            code_label: "Undersökningskod".to_string(),
            time_label: "Undersökningstid".to_string(),
            indications_heading: "Vanliga indikationer".to_string(),
            preparations_heading: "Förberedelser".to_string(),
        }
    }
}
