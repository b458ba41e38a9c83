//! Report conversion: locate input, parse, write the output artifact.

use super::Cli;
use crate::config::AppSettings;
use crate::error::{CliError, CliResult, EmitError, ReportError};
use crate::output;
use crate::parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Result of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    /// File that was written.
    pub output_path: PathBuf,
    /// Number of hosts in the report.
    pub hosts: usize,
}

impl Cli {
    /// Convert `input` according to the parsed arguments.
    pub fn execute(&self, input: &Path, settings: &AppSettings) -> CliResult<Conversion> {
        if !input.exists() {
            return Err(ReportError::InputNotFound(input.to_path_buf()).into());
        }

        let output_path = self.output_path(input, settings)?;
        let report = parser::parse_file(input)?;

        if report.is_empty() && !self.quiet {
            output::print_warning("no host data found to process");
        }

        output::write_report(&report, settings, self.format, &output_path)?;
        info!(path = %output_path.display(), hosts = report.hosts.len(), "report written");

        if self.preview && !report.is_empty() {
            output::print_grid(&output::Grid::build(&report)).map_err(EmitError::from)?;
        }

        if !self.quiet {
            if report.is_empty() {
                output::print_info(&format!("Created empty report: {}", output_path.display()));
            } else {
                output::print_success(&format!("Report saved as: {}", output_path.display()));
            }
        }

        Ok(Conversion {
            output_path,
            hosts: report.hosts.len(),
        })
    }

    /// Build `<dir>/<stem><suffix>.<ext>`, creating `dir` if needed.
    fn output_path(&self, input: &Path, settings: &AppSettings) -> CliResult<PathBuf> {
        let dir = settings.resolve_output_dir(self.output_dir.as_deref())?;
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(&dir).map_err(|source| CliError::OutputDir {
                path: dir.clone(),
                source,
            })?;
        }

        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let file_name = format!(
            "{}{}.{}",
            stem,
            settings.output_suffix,
            self.format.extension()
        );

        Ok(dir.join(file_name))
    }
}
