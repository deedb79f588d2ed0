//! Radar domain model handed to the rendering collaborator.
//!
//! # Responsibility
//! - Define the immutable-after-construction radar structure.
//! - Keep ring identity shared between blips of one run.
//!
//! # Invariants
//! - A radar is built once per data load and never updated in place.

pub mod blip;
pub mod quadrant;
pub mod radar;
pub mod ring;
