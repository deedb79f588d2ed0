//! Pipeline configuration.

use crate::assembly::ring_registry::MAX_RINGS;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Tunables for one pipeline instance.
///
/// Deserializable so hosts can load it from their own settings documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PipelineOptions {
    /// Maximum number of distinct rings; a further distinct ring is fatal.
    pub max_rings: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_rings: MAX_RINGS,
        }
    }
}

impl PipelineOptions {
    pub fn validate(&self) -> Result<(), PipelineOptionsError> {
        if self.max_rings == 0 {
            return Err(PipelineOptionsError::ZeroRingLimit);
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOptionsError {
    ZeroRingLimit,
}

impl Display for PipelineOptionsError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroRingLimit => write!(f, "max_rings must be at least 1"),
        }
    }
}

impl Error for PipelineOptionsError {}

#[cfg(test)]
mod tests {
    use super::{PipelineOptions, PipelineOptionsError};

    #[test]
    fn defaults_to_four_rings() {
        let options = PipelineOptions::default();
        assert_eq!(options.max_rings, 4);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn loads_from_host_settings() {
        let defaults: PipelineOptions = serde_json::from_str("{}").expect("empty settings");
        assert_eq!(defaults, PipelineOptions::default());
        assert!(defaults.validate().is_ok());

        let custom: PipelineOptions =
            serde_json::from_str(r#"{"max_rings":2}"#).expect("custom settings");
        assert_eq!(custom.max_rings, 2);
        assert!(custom.validate().is_ok());

        let zero: PipelineOptions =
            serde_json::from_str(r#"{"max_rings":0}"#).expect("parses before validation");
        assert_eq!(zero.validate().unwrap_err(), PipelineOptionsError::ZeroRingLimit);
    }

    #[test]
    fn rejects_zero_ring_limit() {
        let options = PipelineOptions { max_rings: 0 };
        assert_eq!(
            options.validate().unwrap_err(),
            PipelineOptionsError::ZeroRingLimit
        );
    }
}
