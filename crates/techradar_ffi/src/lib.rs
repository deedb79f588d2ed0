//! Flutter-facing bindings for the tech radar core.

pub mod api;
