//! Office style mapping.
//!
//! Maps run formatting and paragraph styles from `word/styles.xml` to the
//! markup the loader emits.

use super::get_attribute;
use crate::error::Result;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;

/// Run formatting that survives into markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStyle {
    /// Bold
    pub bold: bool,
    /// Italic
    pub italic: bool,
}

/// Numbering reference of a paragraph (`w:numPr`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NumberingRef {
    /// `w:numId`
    pub num_id: String,
    /// `w:ilvl`
    pub level: u8,
}

impl NumberingRef {
    /// `numId` 0 explicitly removes numbering.
    pub fn is_active(&self) -> bool {
        !self.num_id.is_empty() && self.num_id != "0"
    }
}

/// Paragraph style definition.
#[derive(Debug, Clone, Default)]
pub struct StyleDef {
    /// Display name, e.g. `heading 1`
    pub name: String,
    /// Numbering inherited by paragraphs using the style
    pub numbering: Option<NumberingRef>,
}

/// Paragraph styles by style id.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: HashMap<String, StyleDef>,
}

impl StyleSheet {
    /// Parse `word/styles.xml`.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut styles = HashMap::new();
        let mut buf = Vec::new();
        let mut current: Option<(String, StyleDef)> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) | Event::Empty(ref e) => match e.local_name().as_ref() {
                    b"style" => {
                        if let Some(id) = get_attribute(e, "styleId") {
                            current = Some((id, StyleDef::default()));
                        }
                    },
                    b"name" => {
                        if let (Some((_, def)), Some(val)) = (current.as_mut(), get_attribute(e, "val")) {
                            def.name = val;
                        }
                    },
                    b"numId" => {
                        if let (Some((_, def)), Some(val)) = (current.as_mut(), get_attribute(e, "val")) {
                            def.numbering.get_or_insert_with(NumberingRef::default).num_id = val;
                        }
                    },
                    b"ilvl" => {
                        if let (Some((_, def)), Some(val)) = (current.as_mut(), get_attribute(e, "val")) {
                            def.numbering.get_or_insert_with(NumberingRef::default).level =
                                val.parse().unwrap_or(0);
                        }
                    },
                    _ => {},
                },
                Event::End(ref e) => {
                    if e.local_name().as_ref() == b"style" {
                        if let Some((id, def)) = current.take() {
                            styles.insert(id, def);
                        }
                    }
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(Self { styles })
    }

    /// Look up a style by id.
    pub fn get(&self, style_id: &str) -> Option<&StyleDef> {
        self.styles.get(style_id)
    }

    /// Heading level of a paragraph style, if it is a heading.
    pub fn heading_level(&self, style_id: &str) -> Option<u8> {
        let name = self
            .get(style_id)
            .map(|def| def.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(style_id);
        heading_level_from_name(name)
    }

    /// Numbering a paragraph inherits from its style.
    pub fn numbering(&self, style_id: &str) -> Option<&NumberingRef> {
        self.get(style_id)
            .and_then(|def| def.numbering.as_ref())
            .filter(|numbering| numbering.is_active())
    }
}

/// Heading level from a style name or id (`heading 2`, `Heading2`, `Title`).
pub fn heading_level_from_name(name: &str) -> Option<u8> {
    let compact: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_lowercase();

    if compact == "title" {
        return Some(1);
    }

    let digits = compact.strip_prefix("heading")?;
    match digits.parse::<u8>() {
        Ok(level @ 1..=6) => Some(level),
        _ => None,
    }
}

/// Interpret an on/off property (`<w:b/>`, `<w:b w:val="0"/>`).
pub fn toggle_value(val: Option<&str>) -> bool {
    !matches!(val, Some("0") | Some("false") | Some("off") | Some("none"))
}
