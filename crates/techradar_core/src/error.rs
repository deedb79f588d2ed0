//! Classified pipeline errors.
//!
//! # Responsibility
//! - Define the error taxonomy shared by validation, assembly and source selection.
//! - Turn a classified error into presentation-ready messaging.
//!
//! # Invariants
//! - Every failure of a pipeline run maps to exactly one `RadarError` variant.
//! - `RadarError::kind()` values are stable and safe to log.

use log::error;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RadarResult<T> = Result<T, RadarError>;

/// Prefix shown before data-related failures.
pub const LOAD_FAILURE_PREFIX: &str =
    "Oops! It seems like there are some problems with loading your data. ";

/// Hint appended to every user-facing failure message.
pub const FAQ_HINT: &str =
    "Please check the FAQs (https://info.thoughtworks.com/visualize-your-tech-strategy-guide.html#faq) for possible solutions.";

/// Content-level problems found in the row batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedDataError {
    /// The batch holds no data rows beyond the header.
    MissingContent,
    /// One or more required columns are absent.
    MissingHeaders { missing: Vec<String> },
    /// A distinct ring appeared after the ring limit was reached.
    TooManyRings { limit: usize, ring: String },
    /// A row referenced a ring that was never registered.
    UnknownRing(String),
}

impl Display for MalformedDataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingContent => write!(f, "Document is missing content."),
            Self::MissingHeaders { missing } => write!(
                f,
                "Document is missing one or more required headers or they are misspelled \
                 (missing: {}). Check that your document contains headers for \
                 \"name\", \"ring\", \"quadrant\", \"isNew\".",
                missing.join(", ")
            ),
            Self::TooManyRings { limit, ring } => write!(
                f,
                "More than {limit} rings (found extra ring `{ring}`)."
            ),
            Self::UnknownRing(ring) => write!(f, "Ring `{ring}` was not registered."),
        }
    }
}

impl Error for MalformedDataError {}

/// The requested data source could not be located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SheetNotFoundError {
    /// The document itself (file, URL) does not exist.
    MissingDocument(String),
    /// The document exists but has no sheet with this name.
    MissingSheet(String),
    /// The document exists but holds no sheets at all.
    NoSheets,
}

impl Display for SheetNotFoundError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingDocument(location) => write!(
                f,
                "Oops! We can't find the document `{location}` you've entered. Can you check the location?"
            ),
            Self::MissingSheet(name) => write!(
                f,
                "Oops! We can't find the sheet `{name}` you've entered. Can you check the name?"
            ),
            Self::NoSheets => write!(f, "Oops! The document you've entered has no sheets."),
        }
    }
}

impl Error for SheetNotFoundError {}

/// Tagged outcome of a failed pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RadarError {
    MalformedData(MalformedDataError),
    SheetNotFound(SheetNotFoundError),
    /// Anything unexpected; carries a diagnostic message only.
    Other(String),
}

impl RadarError {
    /// Stable snake_case classification for logs and FFI envelopes.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedData(_) => "malformed_data",
            Self::SheetNotFound(_) => "sheet_not_found",
            Self::Other(_) => "other",
        }
    }

    /// Builds the message the presentation layer shows for this failure.
    ///
    /// Unclassified errors never leak their details to the user; callers log
    /// them through `log_unclassified`.
    pub fn user_message(&self) -> String {
        match self {
            Self::MalformedData(err) => format!("{LOAD_FAILURE_PREFIX}{err}\n{FAQ_HINT}"),
            Self::SheetNotFound(err) => format!("{err}\n{FAQ_HINT}"),
            Self::Other(_) => format!("{LOAD_FAILURE_PREFIX}\n{FAQ_HINT}"),
        }
    }

    /// Logs the details of an unclassified error once, at the presentation
    /// boundary. Classified errors are already logged by the pipeline.
    pub fn log_unclassified(&self, module: &str) {
        if let Self::Other(details) = self {
            error!(
                "event=radar_error module={} status=error error_kind=other details={}",
                module,
                details.replace(['\n', '\r'], " ")
            );
        }
    }
}

impl Display for RadarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MalformedData(err) => write!(f, "{err}"),
            Self::SheetNotFound(err) => write!(f, "{err}"),
            Self::Other(details) => write!(f, "unexpected radar error: {details}"),
        }
    }
}

impl Error for RadarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::MalformedData(err) => Some(err),
            Self::SheetNotFound(err) => Some(err),
            Self::Other(_) => None,
        }
    }
}

impl From<MalformedDataError> for RadarError {
    fn from(value: MalformedDataError) -> Self {
        Self::MalformedData(value)
    }
}

impl From<SheetNotFoundError> for RadarError {
    fn from(value: SheetNotFoundError) -> Self {
        Self::SheetNotFound(value)
    }
}

#[cfg(test)]
mod tests {
    use super::{MalformedDataError, RadarError, SheetNotFoundError, FAQ_HINT, LOAD_FAILURE_PREFIX};

    #[test]
    fn malformed_data_message_includes_rule_and_hint() {
        let err = RadarError::from(MalformedDataError::TooManyRings {
            limit: 4,
            ring: "Retire".to_string(),
        });
        let message = err.user_message();
        assert!(message.starts_with(LOAD_FAILURE_PREFIX));
        assert!(message.contains("More than 4 rings"));
        assert!(message.ends_with(FAQ_HINT));
        assert_eq!(err.kind(), "malformed_data");
    }

    #[test]
    fn sheet_not_found_message_replaces_generic_prefix() {
        let err = RadarError::from(SheetNotFoundError::MissingSheet("Q3".to_string()));
        let message = err.user_message();
        assert!(!message.starts_with(LOAD_FAILURE_PREFIX));
        assert!(message.contains("`Q3`"));
        assert_eq!(err.kind(), "sheet_not_found");
    }

    #[test]
    fn other_errors_hide_details_from_user() {
        let err = RadarError::Other("index out of bounds".to_string());
        let message = err.user_message();
        assert!(!message.contains("index out of bounds"));
        assert!(message.ends_with(FAQ_HINT));
        assert_eq!(err.kind(), "other");
        assert_eq!(err.user_message(), message);
    }

    #[test]
    fn missing_document_is_not_called_a_sheet() {
        let message = SheetNotFoundError::MissingDocument("/tmp/radar.json".to_string()).to_string();
        assert!(message.contains("document `/tmp/radar.json`"));
        assert!(!message.contains("sheet"));
    }

    #[test]
    fn missing_headers_lists_absent_columns() {
        let err = MalformedDataError::MissingHeaders {
            missing: vec!["ring".to_string(), "isNew".to_string()],
        };
        assert!(err.to_string().contains("missing: ring, isNew"));
    }
}
