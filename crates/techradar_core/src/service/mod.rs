//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate validation and assembly steps into use-case level APIs.
//! - Keep FFI/CLI layers decoupled from pipeline internals.

pub mod radar_service;
