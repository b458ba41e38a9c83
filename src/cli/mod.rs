//! Command-line interface definitions and handlers.
//!
//! `scangrid <INPUT_FILE> [OUTPUT_DIR]` converts one Nmap text report.

mod convert;

pub use convert::Conversion;

use crate::config::AppSettings;
use crate::error::ConfigResult;
use clap::{ArgAction, CommandFactory, Parser};
use std::path::PathBuf;

/// scangrid - turn Nmap text reports into per-host port spreadsheets.
///
/// Reads a report produced with `nmap -oN` (or copied from the terminal) and
/// writes `<name>_filtered.xlsx` with one column per host and one row per
/// port/service seen on any host.
#[derive(Parser, Debug)]
#[command(name = "scangrid")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert Nmap text reports into port state spreadsheets", long_about = None)]
pub struct Cli {
    /// Nmap normal-output report to convert
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: Option<PathBuf>,

    /// Directory for the generated file (defaults to the configured directory)
    #[arg(value_name = "OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Xlsx)]
    pub format: OutputFormat,

    /// Path to custom configuration file
    #[arg(long, value_name = "PATH", env = "SCANGRID_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also print the port matrix to the terminal
    #[arg(short, long)]
    pub preview: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// One-line usage text.
    pub fn usage() -> String {
        Self::command().render_usage().to_string()
    }

    /// Load settings from `--config` or the default location.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        match &self.config {
            Some(path) => AppSettings::load_from(path),
            None => AppSettings::load(),
        }
    }
}

/// Output format for the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Excel workbook with colored state cells
    #[default]
    Xlsx,
    /// CSV with the same layout as the workbook
    Csv,
    /// The parsed report as JSON
    Json,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Install the tracing subscriber. `RUST_LOG` overrides the verbosity flags.
pub fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
