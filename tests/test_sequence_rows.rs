//! Property tests for sequence table extraction.

use proptest::prelude::*;
use protocol_converter::extractors::{table_records, RowRecord};
use protocol_converter::markup::{Element, Tag};

fn build_table(header: &[String], rows: &[Vec<String>]) -> Element {
    let mut table = Element::new(Tag::Table);

    let mut tr = Element::new(Tag::TableRow);
    for cell in header {
        tr.push(Element::with_text(Tag::TableHeaderCell, cell.clone()));
    }
    table.push(tr);

    for row in rows {
        let mut tr = Element::new(Tag::TableRow);
        for cell in row {
            tr.push(Element::with_text(Tag::TableCell, cell.clone()));
        }
        table.push(tr);
    }
    table
}

fn cell() -> impl Strategy<Value = String> {
    prop_oneof![Just(String::new()), "[A-Za-zåäö0-9 ]{1,12}"]
}

proptest! {
    #[test]
    fn row_ids_are_sequential(
        header in prop::collection::vec("[A-Za-z]{1,8}", 1..6),
        rows in prop::collection::vec(prop::collection::vec(cell(), 0..7), 0..20),
    ) {
        let records = table_records(&build_table(&header, &rows));

        prop_assert_eq!(records.headers.len(), header.len() - 1);
        prop_assert_eq!(records.data.len(), rows.len());
        for (index, record) in records.data.iter().enumerate() {
            prop_assert_eq!(record.id(), index + 1);
        }
    }

    #[test]
    fn label_cell_decides_row_kind(row in prop::collection::vec(cell(), 0..7)) {
        let records = table_records(&build_table(&["#".to_string()], std::slice::from_ref(&row)));
        let label = row.first().map(|c| c.trim()).unwrap_or("");

        match &records.data[0] {
            RowRecord::Info { row_info, .. } => {
                prop_assert!(label.is_empty());
                prop_assert_eq!(row_info.as_str(), row.get(1).map(|c| c.trim()).unwrap_or(""));
            },
            RowRecord::Data { sequences, extra_info, .. } => {
                prop_assert!(!label.is_empty());
                prop_assert_eq!(sequences.as_str(), row.get(1).map(|c| c.trim()).unwrap_or(""));
                prop_assert_eq!(extra_info.as_str(), row.get(4).map(|c| c.trim()).unwrap_or(""));
            },
        }
    }
}
