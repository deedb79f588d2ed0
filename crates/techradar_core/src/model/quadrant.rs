//! Quadrant domain model.

use crate::model::blip::Blip;
use serde::Serialize;

/// Named partition of the radar holding blips in source row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quadrant {
    #[serde(rename = "name")]
    display_name: String,
    blips: Vec<Blip>,
}

impl Quadrant {
    /// Creates an empty quadrant with an already-formatted display name.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            blips: Vec::new(),
        }
    }

    /// Appends one blip, preserving insertion order.
    pub fn add(&mut self, blip: Blip) {
        self.blips.push(blip);
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn blips(&self) -> &[Blip] {
        &self.blips
    }

    pub fn len(&self) -> usize {
        self.blips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blips.is_empty()
    }
}

/// Capitalizes a quadrant identifier for display.
///
/// First character upper-cased, the rest lower-cased: `tools` and `TOOLS`
/// both become `Tools`.
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
