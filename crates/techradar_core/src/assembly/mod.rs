//! Ring discovery and quadrant grouping.
//!
//! # Responsibility
//! - Resolve shared ring references in first-seen order under a cap.
//! - Partition rows by quadrant identifier into blip sequences.
//!
//! # Invariants
//! - All state here is local to one pipeline run; nothing is process-global.

pub mod quadrant_builder;
pub mod ring_registry;
