//! Blip domain model.

use crate::model::ring::Ring;
use serde::Serialize;
use std::sync::Arc;

/// One visualized radar entry.
///
/// `ring` points into the run's ring registry; it is never copied per blip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blip {
    pub name: String,
    pub ring: Arc<Ring>,
    /// Serialized as `isNew` to match the source column naming.
    #[serde(rename = "isNew")]
    pub is_new: bool,
    pub topic: String,
    pub description: String,
}

impl Blip {
    pub fn new(
        name: impl Into<String>,
        ring: Arc<Ring>,
        is_new: bool,
        topic: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            ring,
            is_new,
            topic: topic.into(),
            description: description.into(),
        }
    }

    /// Returns whether this blip shares the given ring instance.
    pub fn shares_ring(&self, ring: &Arc<Ring>) -> bool {
        Arc::ptr_eq(&self.ring, ring)
    }
}
