//! Input validation and row sanitization.
//!
//! # Responsibility
//! - Gate a sheet on column and content checks.
//! - Normalize raw rows into the canonical `SanitizedRow` shape.

pub mod row;
pub mod sanitizer;
pub mod validator;
