//! Ring domain model.
//!
//! # Invariants
//! - `order` is the zero-based first-seen position of the ring in its batch.
//! - One `Ring` instance exists per distinct name per pipeline run; blips
//!   share it through `Arc`.

use serde::Serialize;

/// Concentric category (adoption stage) a blip is placed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Ring {
    pub name: String,
    pub order: usize,
}

impl Ring {
    pub fn new(name: impl Into<String>, order: usize) -> Self {
        Self {
            name: name.into(),
            order,
        }
    }
}
