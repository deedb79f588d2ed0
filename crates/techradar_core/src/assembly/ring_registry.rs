//! Ring discovery with first-seen ordering and a cardinality cap.
//!
//! # Invariants
//! - `order` values are `0..len()` assigned in first-seen row order.
//! - Ring name equality is an exact string match.
//! - Registering a distinct ring past the limit fails and leaves the
//!   registry unchanged.

use crate::error::MalformedDataError;
use crate::input::row::SanitizedRow;
use crate::model::ring::Ring;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Maximum number of distinct rings a radar may hold.
pub const MAX_RINGS: usize = 4;

/// Ordered ring-name -> `Ring` mapping local to one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingRegistry {
    rings: Vec<Arc<Ring>>,
    index: BTreeMap<String, usize>,
    limit: usize,
}

impl RingRegistry {
    pub fn new(limit: usize) -> Self {
        Self {
            rings: Vec::new(),
            index: BTreeMap::new(),
            limit,
        }
    }

    /// Discovers rings across `rows`, stopping at the first ring over the limit.
    pub fn build(rows: &[SanitizedRow], limit: usize) -> Result<Self, MalformedDataError> {
        let mut registry = Self::new(limit);
        for row in rows {
            registry.register(&row.ring)?;
        }
        Ok(registry)
    }

    /// Returns the ring for `name`, creating it on first sight.
    pub fn register(&mut self, name: &str) -> Result<Arc<Ring>, MalformedDataError> {
        if let Some(ring) = self.get(name) {
            return Ok(ring);
        }
        let order = self.rings.len();
        if order >= self.limit {
            return Err(MalformedDataError::TooManyRings {
                limit: self.limit,
                ring: name.to_string(),
            });
        }

        let ring = Arc::new(Ring::new(name, order));
        self.rings.push(Arc::clone(&ring));
        self.index.insert(name.to_string(), order);
        Ok(ring)
    }

    /// Returns the shared ring handle for `name`.
    pub fn get(&self, name: &str) -> Option<Arc<Ring>> {
        self.index
            .get(name)
            .map(|order| Arc::clone(&self.rings[*order]))
    }

    /// Returns rings sorted by `order`.
    pub fn rings(&self) -> &[Arc<Ring>] {
        &self.rings
    }

    pub fn len(&self) -> usize {
        self.rings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{RingRegistry, MAX_RINGS};
    use crate::error::MalformedDataError;
    use std::sync::Arc;

    #[test]
    fn register_reuses_existing_instance() {
        let mut registry = RingRegistry::new(MAX_RINGS);
        let first = registry.register("Adopt").expect("first ring");
        let again = registry.register("Adopt").expect("same ring");
        assert!(Arc::ptr_eq(&first, &again));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn ring_names_are_case_sensitive() {
        let mut registry = RingRegistry::new(MAX_RINGS);
        registry.register("adopt").expect("lowercase ring");
        registry.register("Adopt").expect("capitalized ring");
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("Adopt").expect("registered").order, 1);
        let names: Vec<&str> = registry.rings().iter().map(|ring| ring.name.as_str()).collect();
        assert_eq!(names, vec!["adopt", "Adopt"]);
        assert!(!registry.is_empty());
    }

    #[test]
    fn rejected_ring_leaves_registry_unchanged() {
        let mut registry = RingRegistry::new(2);
        registry.register("A").expect("A");
        registry.register("B").expect("B");

        let err = registry.register("C").unwrap_err();
        assert_eq!(
            err,
            MalformedDataError::TooManyRings {
                limit: 2,
                ring: "C".to_string(),
            }
        );
        assert_eq!(registry.len(), 2);
        assert!(registry.get("C").is_none());
        registry.register("A").expect("known rings still resolve at the limit");
    }
}
