//! Radar aggregate.
//!
//! # Responsibility
//! - Hold the assembled quadrants handed to the rendering collaborator.
//!
//! # Invariants
//! - Every quadrant holds at least one blip.
//! - Every blip ring belongs to the ring registry of the same run.
//! - No mutation API exists after assembly; a reload builds a new radar.

use crate::model::quadrant::Quadrant;
use crate::model::ring::Ring;
use serde::Serialize;
use std::collections::BTreeMap;

/// Complete radar model ready for rendering.
///
/// Quadrant order follows first appearance in the source; visual placement is
/// up to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Radar {
    title: Option<String>,
    quadrants: Vec<Quadrant>,
}

impl Radar {
    /// Collects built quadrants into a radar.
    pub fn assemble(quadrants: impl IntoIterator<Item = Quadrant>) -> Self {
        Self {
            title: None,
            quadrants: quadrants.into_iter().collect(),
        }
    }

    /// Attaches the document title shown by the host.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn quadrants(&self) -> &[Quadrant] {
        &self.quadrants
    }

    /// Finds the first quadrant with this display name.
    ///
    /// Raw ids that differ only in case (`tools`, `TOOLS`) build separate
    /// quadrants sharing one display name; only the first-seen one is
    /// returned here. Iterate `quadrants()` to see all of them.
    pub fn quadrant(&self, display_name: &str) -> Option<&Quadrant> {
        self.quadrants
            .iter()
            .find(|quadrant| quadrant.display_name() == display_name)
    }

    /// Returns distinct rings referenced by blips, sorted by `order`.
    pub fn rings(&self) -> Vec<Ring> {
        let mut by_order = BTreeMap::<usize, Ring>::new();
        for blip in self.quadrants.iter().flat_map(|quadrant| quadrant.blips()) {
            by_order
                .entry(blip.ring.order)
                .or_insert_with(|| blip.ring.as_ref().clone());
        }
        by_order.into_values().collect()
    }

    pub fn blip_count(&self) -> usize {
        self.quadrants.iter().map(Quadrant::len).sum()
    }
}
