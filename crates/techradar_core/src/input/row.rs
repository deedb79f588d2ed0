//! Row shapes flowing through the pipeline.

use serde::Serialize;
use std::collections::BTreeMap;

pub const COLUMN_NAME: &str = "name";
pub const COLUMN_RING: &str = "ring";
pub const COLUMN_QUADRANT: &str = "quadrant";
pub const COLUMN_IS_NEW: &str = "isNew";
pub const COLUMN_TOPIC: &str = "topic";
pub const COLUMN_DESCRIPTION: &str = "description";

/// Columns every document must provide.
pub const REQUIRED_COLUMNS: &[&str] = &[COLUMN_NAME, COLUMN_RING, COLUMN_QUADRANT, COLUMN_IS_NEW];
/// Columns that default to an empty string when absent.
pub const OPTIONAL_COLUMNS: &[&str] = &[COLUMN_TOPIC, COLUMN_DESCRIPTION];

/// One raw row as delivered by the tabular source: column name -> cell text.
pub type RawRow = BTreeMap<String, String>;

/// Looks up a cell by column name, tolerating whitespace around headers.
pub fn raw_field<'a>(row: &'a RawRow, column: &str) -> Option<&'a str> {
    if let Some(value) = row.get(column) {
        return Some(value.as_str());
    }
    row.iter()
        .find(|(key, _)| key.trim() == column)
        .map(|(_, value)| value.as_str())
}

/// Canonical row shape used by ring and quadrant assembly.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SanitizedRow {
    pub name: String,
    pub ring: String,
    pub quadrant: String,
    pub is_new: bool,
    pub topic: String,
    pub description: String,
}
