//! List numbering definitions from `word/numbering.xml`.
//!
//! A paragraph points at a `w:num` by id; the `w:num` points at an
//! `w:abstractNum`, whose per-level `w:numFmt` says whether the level is a
//! bullet list or a numbered one.

use super::get_attribute;
use crate::error::Result;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;

/// Kind of list a numbered paragraph belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Bulleted (`ul`)
    Bullet,
    /// Numbered (`ol`)
    Ordered,
}

/// Parsed numbering part.
#[derive(Debug, Clone, Default)]
pub struct NumberingDefinitions {
    /// (abstractNumId, level) -> numFmt
    formats: HashMap<(String, u8), String>,
    /// numId -> abstractNumId
    instances: HashMap<String, String>,
}

impl NumberingDefinitions {
    /// Parse `word/numbering.xml`.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        reader.trim_text(true);

        let mut defs = Self::default();
        let mut buf = Vec::new();
        let mut abstract_id: Option<String> = None;
        let mut level: Option<u8> = None;
        let mut num_id: Option<String> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Start(ref e) | Event::Empty(ref e) => match e.local_name().as_ref() {
                    b"abstractNum" => abstract_id = get_attribute(e, "abstractNumId"),
                    b"lvl" => level = get_attribute(e, "ilvl").and_then(|v| v.parse().ok()),
                    b"numFmt" => {
                        if let (Some(id), Some(lvl), Some(fmt)) =
                            (abstract_id.as_ref(), level, get_attribute(e, "val"))
                        {
                            defs.formats.insert((id.clone(), lvl), fmt);
                        }
                    },
                    b"num" => num_id = get_attribute(e, "numId"),
                    b"abstractNumId" => {
                        if let (Some(id), Some(target)) = (num_id.as_ref(), get_attribute(e, "val")) {
                            defs.instances.insert(id.clone(), target);
                        }
                    },
                    _ => {},
                },
                Event::End(ref e) => match e.local_name().as_ref() {
                    b"abstractNum" => abstract_id = None,
                    b"lvl" => level = None,
                    b"num" => num_id = None,
                    _ => {},
                },
                Event::Eof => break,
                _ => {},
            }
            buf.clear();
        }

        Ok(defs)
    }

    /// List kind for a numbering instance and level.
    ///
    /// Unknown ids and missing formats are treated as bullets.
    pub fn list_kind(&self, num_id: &str, level: u8) -> ListKind {
        let format = self
            .instances
            .get(num_id)
            .and_then(|abstract_id| self.formats.get(&(abstract_id.clone(), level)));

        match format.map(String::as_str) {
            Some("bullet") | None => ListKind::Bullet,
            Some(_) => ListKind::Ordered,
        }
    }
}
