//! Document-level content validation.
//!
//! # Responsibility
//! - Reject empty batches and documents missing required columns before any
//!   row is sanitized.
//!
//! # Invariants
//! - Checks are pure: they only inspect column names and the row count.

use crate::error::MalformedDataError;
use crate::input::row::REQUIRED_COLUMNS;

/// Validates column metadata and row presence of one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentValidator {
    columns: Vec<String>,
    row_count: usize,
}

impl ContentValidator {
    pub fn new<I, S>(columns: I, row_count: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            columns: columns
                .into_iter()
                .map(|column| column.as_ref().trim().to_string())
                .collect(),
            row_count,
        }
    }

    /// Fails when the sheet has no data rows beyond its header.
    pub fn verify_content(&self) -> Result<(), MalformedDataError> {
        if self.row_count == 0 {
            return Err(MalformedDataError::MissingContent);
        }
        Ok(())
    }

    /// Fails when any of `name`, `ring`, `quadrant`, `isNew` is absent.
    ///
    /// `topic` and `description` are optional.
    pub fn verify_headers(&self) -> Result<(), MalformedDataError> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !self.columns.iter().any(|column| column == *required))
            .map(|required| required.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(MalformedDataError::MissingHeaders { missing });
        }
        Ok(())
    }
}
