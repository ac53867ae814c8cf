//! Sequence table extraction.
//!
//! The protocol's sequence table has a label column followed by the sequence
//! columns. The first header cell names the label column and is dropped; the
//! first row is the header row and is skipped.
//!
//! Rows whose label cell is empty carry a free-text note in the next cell
//! (e.g. "Kontrast ges här") and become [`RowRecord::Info`]; every other row
//! becomes [`RowRecord::Data`].

use crate::markup::{Element, MarkupTree, Tag};
use serde::{Deserialize, Serialize};

/// One table row in the output record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowRecord {
    /// Annotation row: empty label cell, note in the second cell.
    Info {
        /// 1-based row position
        id: usize,
        /// Note text
        row_info: String,
    },
    /// Sequence row.
    Data {
        /// 1-based row position
        id: usize,
        /// Sequence name
        sequences: String,
        /// Scan planes
        scan_planes: String,
        /// Slice thickness
        slice_thickness: String,
        /// Remaining notes
        extra_info: String,
    },
}

impl RowRecord {
    /// Build a record from the trimmed cell texts of one row.
    ///
    /// Positions past the end of a short row become empty strings.
    pub fn from_cells(id: usize, cells: &[String]) -> Self {
        if cell_at(cells, 0).is_empty() {
            RowRecord::Info {
                id,
                row_info: cell_at(cells, 1),
            }
        } else {
            RowRecord::Data {
                id,
                sequences: cell_at(cells, 1),
                scan_planes: cell_at(cells, 2),
                slice_thickness: cell_at(cells, 3),
                extra_info: cell_at(cells, 4),
            }
        }
    }

    /// Row position.
    pub fn id(&self) -> usize {
        match self {
            RowRecord::Info { id, .. } | RowRecord::Data { id, .. } => *id,
        }
    }
}

fn cell_at(cells: &[String], index: usize) -> String {
    match cells.get(index) {
        Some(cell) => cell.clone(),
        None => {
            log::info!("\tinserting empty string in row");
            String::new()
        },
    }
}

/// The `sequences` object of the output record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceTable {
    /// Column headers without the label column
    pub headers: Vec<String>,
    /// Row records, ids `1..=N`
    pub data: Vec<RowRecord>,
}

/// Extract the first table of the document.
///
/// A document without a table yields an empty [`SequenceTable`].
pub fn extract_table(tree: &MarkupTree) -> SequenceTable {
    match tree.find(Tag::Table) {
        Some(table) => table_records(table),
        None => {
            log::warn!("sequence table does not exist!");
            SequenceTable::default()
        },
    }
}

/// Convert a table element into headers and row records.
pub fn table_records(table: &Element) -> SequenceTable {
    let headers = table
        .find_all(Tag::TableHeaderCell)
        .skip(1)
        .map(|th| th.text().trim().to_string())
        .collect();

    let data = table
        .find_all(Tag::TableRow)
        .skip(1)
        .map(row_cells)
        .enumerate()
        .map(|(index, cells)| RowRecord::from_cells(index + 1, &cells))
        .collect();

    SequenceTable { headers, data }
}

fn row_cells(row: &Element) -> Vec<String> {
    row.find_all(Tag::TableCell)
        .map(|td| td.text().trim().to_string())
        .collect()
}
