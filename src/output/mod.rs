//! Output formatting module.
//!
//! Lays a parsed report out as a [`Grid`] and writes it as an xlsx workbook,
//! CSV, or JSON.

pub mod grid;
mod csv_format;
mod json_format;
mod plain;
mod xlsx;

pub use csv_format::{write_csv, write_csv_file};
pub use grid::{Grid, PortRow, StateCell};
pub use json_format::write_json_file;
pub use plain::{print_error, print_grid, print_info, print_success, print_warning, write_grid};
pub use xlsx::{render_worksheet, write_empty_workbook, write_xlsx};

use crate::cli::OutputFormat;
use crate::config::AppSettings;
use crate::error::EmitResult;
use crate::types::ScanReport;
use std::path::Path;

/// Write a parsed report to `path` in the requested format.
///
/// A report without hosts still produces a file: an empty workbook, an
/// empty CSV, or JSON holding only the summary.
pub fn write_report(
    report: &ScanReport,
    settings: &AppSettings,
    format: OutputFormat,
    path: &Path,
) -> EmitResult<()> {
    match format {
        OutputFormat::Xlsx if report.is_empty() => write_empty_workbook(path),
        OutputFormat::Xlsx => write_xlsx(&Grid::build(report), settings, path),
        OutputFormat::Csv if report.is_empty() => {
            std::fs::File::create(path)?;
            Ok(())
        }
        OutputFormat::Csv => write_csv_file(&Grid::build(report), path),
        OutputFormat::Json => write_json_file(report, path),
    }
}
