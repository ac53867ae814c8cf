//! Field, list and table extraction from rendered protocol documents.
//!
//! Every extractor is best-effort: a missing element yields its default
//! value (empty string, the `[""]` list sentinel, an empty table) plus a
//! logged diagnostic, never an error.

pub mod fields;
pub mod lists;
pub mod tables;

pub use fields::{extract_field, find_field};
pub use lists::{extract_list, find_list, ListItems};
pub use tables::{extract_table, table_records, RowRecord, SequenceTable};
