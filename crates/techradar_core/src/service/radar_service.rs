//! Radar build pipeline.
//!
//! # Responsibility
//! - Sequence validation, sanitization, ring discovery, quadrant grouping and
//!   radar assembly for one sheet.
//! - Emit metadata-only diagnostics for each run.
//!
//! # Invariants
//! - Steps run in order and the first failure aborts the run.
//! - No partial radar is ever returned.
//! - Every run builds fresh registries; runs never share mutable state.

use crate::assembly::quadrant_builder::build_quadrants;
use crate::assembly::ring_registry::RingRegistry;
use crate::config::{PipelineOptions, PipelineOptionsError};
use crate::error::{RadarError, RadarResult};
use crate::input::row::{RawRow, SanitizedRow};
use crate::input::sanitizer::sanitize;
use crate::input::validator::ContentValidator;
use crate::model::radar::Radar;
use crate::source::{select_sheet, Sheet, TabularSource};
use log::{debug, info, warn};
use uuid::Uuid;

/// Use-case entry point turning tabular rows into a `Radar`.
#[derive(Debug, Clone, Default)]
pub struct RadarService {
    options: PipelineOptions,
}

impl RadarService {
    /// Creates a service with default options (4 rings).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a service with validated custom options.
    pub fn with_options(options: PipelineOptions) -> Result<Self, PipelineOptionsError> {
        options.validate()?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    /// Runs the pipeline over column names and raw rows.
    ///
    /// # Contract
    /// - Content and header checks run before any row is read.
    /// - Returns `RadarError::MalformedData` on the first violated rule.
    pub fn build<S: AsRef<str>>(&self, column_names: &[S], rows: &[RawRow]) -> RadarResult<Radar> {
        let run_id = Uuid::new_v4();
        let result = self.run(column_names, rows);
        log_outcome(run_id, rows.len(), &result);
        result
    }

    /// Runs the pipeline over one sheet.
    pub fn build_sheet(&self, sheet: &Sheet) -> RadarResult<Radar> {
        self.build(&sheet.columns, &sheet.rows)
    }

    /// Selects a sheet from `source` and runs the pipeline over it.
    ///
    /// With no `sheet_name` the first sheet is used. The source title, when
    /// present, is attached to the radar.
    pub fn build_from_source<T: TabularSource + ?Sized>(
        &self,
        source: &T,
        sheet_name: Option<&str>,
    ) -> RadarResult<Radar> {
        let sheet = match select_sheet(source, sheet_name) {
            Ok(sheet) => sheet,
            Err(err) => {
                warn!(
                    "event=radar_build module=pipeline status=error error_kind=sheet_not_found sheet_count={}",
                    source.sheet_names().len()
                );
                return Err(RadarError::from(err));
            }
        };

        let radar = self.build_sheet(sheet)?;
        Ok(match source.title() {
            Some(title) => radar.with_title(title),
            None => radar,
        })
    }

    fn run<S: AsRef<str>>(&self, column_names: &[S], rows: &[RawRow]) -> RadarResult<Radar> {
        let validator = ContentValidator::new(column_names, rows.len());
        validator.verify_content()?;
        validator.verify_headers()?;

        let sanitized: Vec<SanitizedRow> = rows.iter().map(sanitize).collect();
        let rings = RingRegistry::build(&sanitized, self.options.max_rings)?;
        debug!(
            "event=ring_registry module=pipeline status=ok rings={}",
            rings.len()
        );

        let quadrants = build_quadrants(&sanitized, &rings)?;
        Ok(Radar::assemble(quadrants))
    }
}

/// Runs the pipeline with default options.
pub fn build_radar<S: AsRef<str>>(column_names: &[S], rows: &[RawRow]) -> RadarResult<Radar> {
    RadarService::new().build(column_names, rows)
}

fn log_outcome(run_id: Uuid, row_count: usize, result: &RadarResult<Radar>) {
    match result {
        Ok(radar) => info!(
            "event=radar_build module=pipeline status=ok run_id={} rows={} rings={} quadrants={} blips={}",
            run_id,
            row_count,
            radar.rings().len(),
            radar.quadrants().len(),
            radar.blip_count()
        ),
        Err(err) => warn!(
            "event=radar_build module=pipeline status=error run_id={} rows={} error_kind={}",
            run_id,
            row_count,
            err.kind()
        ),
    }
}
