//! Grouping of sanitized rows into quadrants of blips.
//!
//! # Invariants
//! - One quadrant per distinct `quadrant` value (exact match), in first-seen order.
//! - Blips keep source row order inside their quadrant.
//! - Every blip references a ring already present in the registry.

use crate::assembly::ring_registry::RingRegistry;
use crate::error::MalformedDataError;
use crate::input::row::SanitizedRow;
use crate::model::blip::Blip;
use crate::model::quadrant::{capitalize, Quadrant};
use std::collections::BTreeMap;

/// Incremental quadrant grouping bound to one run's ring registry.
pub struct QuadrantBuilder<'r> {
    rings: &'r RingRegistry,
    quadrants: Vec<Quadrant>,
    index: BTreeMap<String, usize>,
}

impl<'r> QuadrantBuilder<'r> {
    pub fn new(rings: &'r RingRegistry) -> Self {
        Self {
            rings,
            quadrants: Vec::new(),
            index: BTreeMap::new(),
        }
    }

    /// Adds one row as a blip of its quadrant.
    ///
    /// Fails on an unregistered ring instead of creating a dangling reference.
    pub fn add(&mut self, row: &SanitizedRow) -> Result<(), MalformedDataError> {
        let ring = self
            .rings
            .get(&row.ring)
            .ok_or_else(|| MalformedDataError::UnknownRing(row.ring.clone()))?;

        let slot = match self.index.get(&row.quadrant).copied() {
            Some(slot) => slot,
            None => {
                let slot = self.quadrants.len();
                self.quadrants.push(Quadrant::new(capitalize(&row.quadrant)));
                self.index.insert(row.quadrant.clone(), slot);
                slot
            }
        };

        self.quadrants[slot].add(Blip::new(
            row.name.clone(),
            ring,
            row.is_new,
            row.topic.clone(),
            row.description.clone(),
        ));
        Ok(())
    }

    /// Consumes the builder, returning quadrants in first-seen order.
    pub fn finish(self) -> Vec<Quadrant> {
        self.quadrants
    }
}

/// Groups all rows into quadrants using an already-built ring registry.
pub fn build_quadrants(
    rows: &[SanitizedRow],
    rings: &RingRegistry,
) -> Result<Vec<Quadrant>, MalformedDataError> {
    let mut builder = QuadrantBuilder::new(rings);
    for row in rows {
        builder.add(row)?;
    }
    Ok(builder.finish())
}
