//! In-memory workbook implementation of `TabularSource`.

use crate::input::row::RawRow;
use crate::source::TabularSource;
use serde::Deserialize;

/// One named sheet: header columns plus data rows.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Sheet {
    pub name: String,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<RawRow>,
}

impl Sheet {
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<RawRow>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }
}

/// Loaded document, e.g. `{ "title": "...", "sheets": [ { "name", "columns", "rows" } ] }`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Workbook {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new(title: Option<String>, sheets: Vec<Sheet>) -> Self {
        Self { title, sheets }
    }
}

impl TabularSource for Workbook {
    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|sheet| sheet.name.as_str()).collect()
    }

    fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.name == name)
    }
}
