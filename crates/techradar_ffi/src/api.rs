//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose radar building as sync calls returning plain envelopes.
//! - Act as the presentation boundary: failures arrive as classified kinds
//!   plus ready-to-show messages.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - A failed build never carries a partial radar.

use log::error;
use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use techradar_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    Radar, RadarError, RadarResult, RadarService, RawRow, Sheet, Workbook,
};

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// Ring as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RingView {
    pub name: String,
    pub order: u32,
}

/// Blip flattened for Dart; the ring is referenced by name and order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlipView {
    pub name: String,
    pub ring_name: String,
    pub ring_order: u32,
    pub is_new: bool,
    pub topic: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadrantView {
    pub name: String,
    pub blips: Vec<BlipView>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarView {
    pub title: Option<String>,
    pub rings: Vec<RingView>,
    pub quadrants: Vec<QuadrantView>,
}

/// Response envelope for radar builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarBuildResponse {
    pub ok: bool,
    /// `malformed_data|sheet_not_found|other` on failure.
    pub error_kind: Option<String>,
    /// User-facing message; empty on success.
    pub message: String,
    pub radar: Option<RadarView>,
}

impl RadarBuildResponse {
    fn from_result(result: RadarResult<Radar>) -> Self {
        match result {
            Ok(radar) => Self {
                ok: true,
                error_kind: None,
                message: String::new(),
                radar: Some(to_radar_view(&radar)),
            },
            Err(err) => {
                err.log_unclassified("ffi");
                Self {
                    ok: false,
                    error_kind: Some(err.kind().to_string()),
                    message: err.user_message(),
                    radar: None,
                }
            }
        }
    }
}

/// Builds a radar from one sheet's columns and rows.
///
/// # FFI contract
/// - Sync call, CPU-only.
/// - Never panics; unexpected failures surface as `error_kind = "other"`.
#[flutter_rust_bridge::frb(sync)]
pub fn build_radar(
    column_names: Vec<String>,
    rows: Vec<HashMap<String, String>>,
) -> RadarBuildResponse {
    let rows: Vec<RawRow> = rows
        .into_iter()
        .map(|row| -> RawRow { row.into_iter().collect() })
        .collect();
    RadarBuildResponse::from_result(guarded(|| {
        RadarService::new().build(&column_names, &rows)
    }))
}

/// Builds a radar from a named sheet of a loaded document.
///
/// `sheet_name = None` selects the first sheet.
#[flutter_rust_bridge::frb(sync)]
pub fn build_radar_from_sheets(
    title: Option<String>,
    sheet_names: Vec<String>,
    sheet_columns: Vec<Vec<String>>,
    sheet_rows: Vec<Vec<HashMap<String, String>>>,
    sheet_name: Option<String>,
) -> RadarBuildResponse {
    if sheet_names.len() != sheet_columns.len() || sheet_names.len() != sheet_rows.len() {
        return RadarBuildResponse::from_result(Err(RadarError::Other(format!(
            "sheet arrays differ in length: names={} columns={} rows={}",
            sheet_names.len(),
            sheet_columns.len(),
            sheet_rows.len()
        ))));
    }

    let sheets = sheet_names
        .into_iter()
        .zip(sheet_columns)
        .zip(sheet_rows)
        .map(|((name, columns), rows)| {
            Sheet::new(
                name,
                columns,
                rows.into_iter()
                    .map(|row| -> RawRow { row.into_iter().collect() })
                    .collect(),
            )
        })
        .collect::<Vec<Sheet>>();
    let workbook = Workbook::new(title, sheets);

    RadarBuildResponse::from_result(guarded(|| {
        RadarService::new().build_from_source(&workbook, sheet_name.as_deref())
    }))
}

fn guarded(build: impl FnOnce() -> RadarResult<Radar>) -> RadarResult<Radar> {
    match catch_unwind(AssertUnwindSafe(build)) {
        Ok(result) => result,
        Err(_) => {
            error!("event=radar_build module=ffi status=error error_kind=panic");
            Err(RadarError::Other("radar build panicked".to_string()))
        }
    }
}

fn to_radar_view(radar: &Radar) -> RadarView {
    RadarView {
        title: radar.title().map(str::to_string),
        rings: radar
            .rings()
            .into_iter()
            .map(|ring| RingView {
                name: ring.name,
                order: ring.order as u32,
            })
            .collect(),
        quadrants: radar
            .quadrants()
            .iter()
            .map(|quadrant| QuadrantView {
                name: quadrant.display_name().to_string(),
                blips: quadrant
                    .blips()
                    .iter()
                    .map(|blip| BlipView {
                        name: blip.name.clone(),
                        ring_name: blip.ring.name.clone(),
                        ring_order: blip.ring.order as u32,
                        is_new: blip.is_new,
                        topic: blip.topic.clone(),
                        description: blip.description.clone(),
                    })
                    .collect(),
            })
            .collect(),
    }
}
