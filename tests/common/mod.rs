//! Builds small `.docx` packages in memory for integration tests.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Bullet list numbering id in [`NUMBERING_XML`].
pub const BULLET_LIST: &str = "1";
/// Decimal list numbering id in [`NUMBERING_XML`].
pub const NUMBERED_LIST: &str = "2";

pub const NUMBERING_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="10">
    <w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val=""/></w:lvl>
    <w:lvl w:ilvl="1"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="o"/></w:lvl>
  </w:abstractNum>
  <w:abstractNum w:abstractNumId="20">
    <w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/></w:lvl>
  </w:abstractNum>
  <w:num w:numId="1"><w:abstractNumId w:val="10"/></w:num>
  <w:num w:numId="2"><w:abstractNumId w:val="20"/></w:num>
</w:numbering>"#;

pub const STYLES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/></w:style>
  <w:style w:type="paragraph" w:styleId="Rubrik1"><w:name w:val="heading 1"/></w:style>
  <w:style w:type="paragraph" w:styleId="Rubrik2"><w:name w:val="heading 2"/></w:style>
</w:styles>"#;

/// Escape text for use inside `w:t`.
pub fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// A run with optional bold formatting.
pub fn run(text: &str, bold: bool) -> String {
    let props = if bold { "<w:rPr><w:b/></w:rPr>" } else { "" };
    format!(
        r#"<w:r>{}<w:t xml:space="preserve">{}</w:t></w:r>"#,
        props,
        xml_escape(text)
    )
}

/// Plain paragraph.
pub fn paragraph(text: &str) -> String {
    format!("<w:p>{}</w:p>", run(text, false))
}

/// `Label:` in bold followed by the value, the way the template writes fields.
pub fn field(label: &str, value: &str) -> String {
    format!("<w:p>{}{}</w:p>", run(&format!("{}:", label), true), run(value, false))
}

/// Heading paragraph using the localized heading style ids.
pub fn heading(level: u8, text: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:pStyle w:val="Rubrik{}"/></w:pPr>{}</w:p>"#,
        level,
        run(text, false)
    )
}

/// List paragraph.
pub fn list_item(num_id: &str, level: u8, text: &str) -> String {
    format!(
        r#"<w:p><w:pPr><w:pStyle w:val="Liststycke"/><w:numPr><w:ilvl w:val="{}"/><w:numId w:val="{}"/></w:numPr></w:pPr>{}</w:p>"#,
        level,
        num_id,
        run(text, false)
    )
}

/// Table; the first row is marked as a repeating header row.
pub fn table(rows: &[&[&str]]) -> String {
    let mut xml = String::from("<w:tbl><w:tblPr><w:tblStyle w:val=\"Tabellrutnt\"/></w:tblPr>");
    for (index, cells) in rows.iter().enumerate() {
        xml.push_str("<w:tr>");
        if index == 0 {
            xml.push_str("<w:trPr><w:tblHeader/></w:trPr>");
        }
        for cell in cells.iter() {
            xml.push_str("<w:tc><w:tcPr><w:tcW w:w=\"2000\" w:type=\"dxa\"/></w:tcPr>");
            if cell.is_empty() {
                xml.push_str("<w:p/>");
            } else {
                xml.push_str(&paragraph(cell));
            }
            xml.push_str("</w:tc>");
        }
        xml.push_str("</w:tr>");
    }
    xml.push_str("</w:tbl>");
    xml
}

/// Wrap body XML into a complete `word/document.xml`.
pub fn document_xml(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}<w:sectPr/></w:body></w:document>"#,
        W_NS, body
    )
}

/// Package a body into `.docx` bytes with styles and numbering parts.
pub fn build_docx(body: &str) -> Vec<u8> {
    build_package(&[
        ("word/document.xml", document_xml(body)),
        ("word/styles.xml", STYLES_XML.to_string()),
        ("word/numbering.xml", NUMBERING_XML.to_string()),
    ])
}

/// Package arbitrary parts.
pub fn build_package(parts: &[(&str, String)]) -> Vec<u8> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Stored);

    zip.start_file("[Content_Types].xml", options).unwrap();
    zip.write_all(
        br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#,
    )
    .unwrap();

    for (name, content) in parts {
        zip.start_file(*name, options).unwrap();
        zip.write_all(content.as_bytes()).unwrap();
    }

    zip.finish().unwrap().into_inner()
}

/// A complete protocol in the shape the template produces.
pub fn sample_protocol() -> Vec<u8> {
    let body = [
        heading(1, "MR Hjärna"),
        field("System", "3T Scanner"),
        field("Spole", "Huvud 20ch"),
        field("Kontrast", "Gadovist 0,1 ml/kg"),
        field("Undersökningskod", "MR123"),
        field("Undersökningstid", "30 min"),
        heading(2, "Vanliga indikationer"),
        list_item(BULLET_LIST, 0, "Headache"),
        list_item(BULLET_LIST, 0, "Trauma"),
        heading(2, "Förberedelser"),
        list_item(BULLET_LIST, 0, "Metallkontroll"),
        list_item(BULLET_LIST, 0, "Fasta 2 h"),
        heading(2, "Sekvenser"),
        table(&[
            &["#", "Sekvens", "Plan", "Snitt", "Övrigt"],
            &["", "Check protocol", "", "", ""],
            &["2", "T1", "Axial", "5mm"],
            &["3", "T2 FLAIR", "Sag", "3mm", "Efter kontrast"],
        ]),
    ]
    .concat();
    build_docx(&body)
}
