//! Command-line entry point.
//!
//! # Responsibility
//! - Load an already-exported workbook document from disk.
//! - Run the radar pipeline and print the radar as JSON, or the user-facing
//!   error message on failure.

use clap::Parser;
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use techradar_core::{
    core_version, default_log_level, init_logging, RadarError, RadarService, SheetNotFoundError,
    Workbook,
};

#[derive(Parser)]
#[command(name = "techradar")]
#[command(version)]
#[command(about = "Validate a radar workbook and print the assembled radar", long_about = None)]
struct Cli {
    /// Workbook JSON: { "title", "sheets": [ { "name", "columns", "rows" } ] }
    input: PathBuf,

    /// Sheet to read (defaults to the first sheet)
    #[arg(long, value_name = "NAME")]
    sheet: Option<String>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off without it
    #[arg(long, value_name = "DIR")]
    log_dir: Option<PathBuf>,

    /// Pretty-print the radar JSON
    #[arg(long)]
    pretty: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(dir) = &cli.log_dir {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &dir.to_string_lossy()) {
            eprintln!("techradar: logging disabled: {err}");
        }
    }
    info!(
        "event=cli_start module=cli status=ok version={}",
        core_version()
    );

    match run(&cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            err.log_unclassified("cli");
            eprintln!("{}", err.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, RadarError> {
    let workbook = load_workbook(&cli.input)?;
    let radar = RadarService::new().build_from_source(&workbook, cli.sheet.as_deref())?;
    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&radar)
    } else {
        serde_json::to_string(&radar)
    };
    rendered.map_err(|err| RadarError::Other(format!("radar serialization failed: {err}")))
}

/// Reads a workbook document; a missing file is a missing document.
fn load_workbook(path: &Path) -> Result<Workbook, RadarError> {
    let raw = std::fs::read_to_string(path).map_err(|err| {
        if err.kind() == std::io::ErrorKind::NotFound {
            RadarError::SheetNotFound(SheetNotFoundError::MissingDocument(
                path.display().to_string(),
            ))
        } else {
            RadarError::Other(format!("cannot read `{}`: {err}", path.display()))
        }
    })?;
    serde_json::from_str(&raw)
        .map_err(|err| RadarError::Other(format!("invalid workbook `{}`: {err}", path.display())))
}
