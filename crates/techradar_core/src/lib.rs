//! Core domain logic for the tech radar.
//! This crate is the single source of truth for radar data invariants.

pub mod assembly;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod model;
pub mod service;
pub mod source;

pub use assembly::quadrant_builder::{build_quadrants, QuadrantBuilder};
pub use assembly::ring_registry::{RingRegistry, MAX_RINGS};
pub use config::{PipelineOptions, PipelineOptionsError};
pub use error::{MalformedDataError, RadarError, RadarResult, SheetNotFoundError};
pub use input::row::{RawRow, SanitizedRow, OPTIONAL_COLUMNS, REQUIRED_COLUMNS};
pub use input::sanitizer::sanitize;
pub use input::validator::ContentValidator;
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::blip::Blip;
pub use model::quadrant::Quadrant;
pub use model::radar::Radar;
pub use model::ring::Ring;
pub use service::radar_service::{build_radar, RadarService};
pub use source::{select_sheet, Sheet, TabularSource, Workbook};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
