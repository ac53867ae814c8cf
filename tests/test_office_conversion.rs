//! Integration tests for DOCX to markup rendering.

mod common;

use common::*;
use protocol_converter::converters::OfficeConverter;
use protocol_converter::markup::Tag;
use protocol_converter::{extract_list, Error};

fn render(body: &str) -> String {
    OfficeConverter::new()
        .convert_docx_bytes(&build_docx(body))
        .unwrap()
        .to_html()
}

#[test]
fn test_bold_label_paragraph() {
    let html = render(&field("System", "3T Scanner"));
    assert_eq!(html, "<p><strong>System:</strong>3T Scanner</p>");
}

#[test]
fn test_headings_from_localized_styles() {
    let html = render(&[heading(1, "MR Hjärna"), heading(2, "Förberedelser")].concat());
    assert_eq!(html, "<h1>MR Hjärna</h1><h2>Förberedelser</h2>");
}

#[test]
fn test_bullet_numbering_becomes_unordered_list() {
    let body = [
        list_item(BULLET_LIST, 0, "Headache"),
        list_item(BULLET_LIST, 1, "Migraine"),
        list_item(BULLET_LIST, 0, "Trauma"),
    ]
    .concat();
    assert_eq!(
        render(&body),
        "<ul><li>Headache<ul><li>Migraine</li></ul></li><li>Trauma</li></ul>"
    );
}

#[test]
fn test_decimal_numbering_becomes_ordered_list() {
    let body = [
        list_item(NUMBERED_LIST, 0, "Metallkontroll"),
        list_item(NUMBERED_LIST, 0, "Fasta"),
    ]
    .concat();
    assert_eq!(render(&body), "<ol><li>Metallkontroll</li><li>Fasta</li></ol>");
}

#[test]
fn test_list_closed_by_paragraph() {
    let body = [
        list_item(BULLET_LIST, 0, "a"),
        paragraph("between"),
        list_item(BULLET_LIST, 0, "b"),
    ]
    .concat();
    assert_eq!(render(&body), "<ul><li>a</li></ul><p>between</p><ul><li>b</li></ul>");
}

#[test]
fn test_table_header_row_uses_th() {
    let tree = OfficeConverter::new()
        .convert_docx_bytes(&build_docx(&table(&[&["#", "Sekvens"], &["1", "T1"]])))
        .unwrap();

    let headers: Vec<String> = tree.find_all(Tag::TableHeaderCell).map(|th| th.text()).collect();
    assert_eq!(headers, vec!["#", "Sekvens"]);

    let cells: Vec<String> = tree.find_all(Tag::TableCell).map(|td| td.text()).collect();
    assert_eq!(cells, vec!["1", "T1"]);
}

#[test]
fn test_empty_cell_kept() {
    let tree = OfficeConverter::new()
        .convert_docx_bytes(&build_docx(&table(&[&["#", "A"], &["", "note"]])))
        .unwrap();
    let cells: Vec<String> = tree.find_all(Tag::TableCell).map(|td| td.text()).collect();
    assert_eq!(cells, vec!["", "note"]);
}

#[test]
fn test_text_is_escaped_in_html() {
    let html = render(&paragraph("a < b & c"));
    assert_eq!(html, "<p>a &lt; b &amp; c</p>");
}

#[test]
fn test_package_without_styles_or_numbering() {
    let bytes = build_package(&[("word/document.xml", document_xml(&paragraph("plain")))]);
    let tree = OfficeConverter::new().convert_docx_bytes(&bytes).unwrap();
    assert_eq!(tree.to_html(), "<p>plain</p>");
}

#[test]
fn test_package_without_document_part() {
    let bytes = build_package(&[("word/styles.xml", STYLES_XML.to_string())]);
    let result = OfficeConverter::new().convert_docx_bytes(&bytes);
    assert!(matches!(result, Err(Error::InvalidDocument(_))));
}

#[test]
fn test_not_a_package() {
    let result = OfficeConverter::new().convert_docx_bytes(b"%PDF-1.7");
    assert!(matches!(result, Err(Error::InvalidDocument(_))));
}

#[test]
fn test_list_ends_at_new_numbering_instance() {
    let body = [
        heading(2, "Vanliga indikationer"),
        list_item(BULLET_LIST, 0, "Headache"),
        list_item("3", 0, "Other list item"),
    ]
    .concat();
    let tree = OfficeConverter::new()
        .convert_docx_bytes(&build_docx(&body))
        .unwrap();

    assert_eq!(
        tree.to_html(),
        "<h2>Vanliga indikationer</h2><ul><li>Headache</li></ul><ul><li>Other list item</li></ul>"
    );
    let items: Vec<String> = extract_list("Vanliga indikationer", &tree).collect();
    assert_eq!(items, vec!["Headache"]);
}
