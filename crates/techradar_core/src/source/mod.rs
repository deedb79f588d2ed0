//! Tabular source seam.
//!
//! # Responsibility
//! - Describe what the pipeline needs from an already-fetched document.
//! - Resolve which sheet a pipeline run reads.
//!
//! # Invariants
//! - Fetching, session setup and existence checks happen before this seam.
//! - An explicitly requested sheet must exist; no silent fallback.

pub mod workbook;

use crate::error::SheetNotFoundError;
pub use workbook::{Sheet, Workbook};

/// Already-loaded tabular document with one or more named sheets.
pub trait TabularSource {
    /// Document title, if the source exposes one.
    fn title(&self) -> Option<&str>;
    /// Sheet names in document order.
    fn sheet_names(&self) -> Vec<&str>;
    /// Returns one sheet by exact name.
    fn sheet(&self, name: &str) -> Option<&Sheet>;
}

/// Picks the requested sheet, or the first one when no name is given.
pub fn select_sheet<'s, S: TabularSource + ?Sized>(
    source: &'s S,
    sheet_name: Option<&str>,
) -> Result<&'s Sheet, SheetNotFoundError> {
    let requested = sheet_name.map(str::trim).filter(|name| !name.is_empty());
    let resolved = match requested {
        Some(name) => name,
        None => match source.sheet_names().first() {
            Some(first) => *first,
            None => return Err(SheetNotFoundError::NoSheets),
        },
    };

    source
        .sheet(resolved)
        .ok_or_else(|| SheetNotFoundError::MissingSheet(resolved.to_string()))
}
