//! Error types for scangrid.
//!
//! Uses `thiserror` for ergonomic error definitions. Malformed report lines
//! are never errors; only the surrounding I/O can fail.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading a scan report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("file '{}' not found", .0.display())]
    InputNotFound(PathBuf),

    #[error("failed to read '{}': {source}", .path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for report parsing.
pub type ReportResult<T> = Result<T, ReportError>;

/// Errors raised while writing an output artifact.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("spreadsheet error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for emitters.
pub type EmitResult<T> = Result<T, EmitError>;

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {reason}", .path.display())]
    ReadFailed { path: PathBuf, reason: String },

    #[error("invalid config format: {0}")]
    InvalidFormat(String),

    #[error("invalid color '{value}' for state '{state}' (expected 6 hex digits)")]
    InvalidColor { state: String, value: String },

    #[error("could not determine the executable directory: {0}")]
    ExecutableDir(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        Self::InvalidFormat(e.to_string())
    }
}

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level CLI errors.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Emit(#[from] EmitError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to create output directory '{}': {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl CliError {
    /// Process exit code for this error.
    ///
    /// A missing input file is a usage problem (1); anything that goes wrong
    /// after the input was located is a processing failure (2).
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Report(ReportError::InputNotFound(_)) => 1,
            _ => 2,
        }
    }
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_input_exits_with_one() {
        let err = CliError::from(ReportError::InputNotFound(PathBuf::from("scan.txt")));
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "file 'scan.txt' not found");
    }

    #[test]
    fn test_processing_failures_exit_with_two() {
        let read = CliError::from(ReportError::ReadFailed {
            path: PathBuf::from("scan.txt"),
            source: io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        });
        assert_eq!(read.exit_code(), 2);

        let config = CliError::from(ConfigError::InvalidFormat("expected value".into()));
        assert_eq!(config.exit_code(), 2);
    }
}
