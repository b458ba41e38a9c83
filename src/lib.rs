//! # scangrid - Nmap text reports as port state spreadsheets
//!
//! scangrid reads the human-readable report Nmap writes with `-oN` and lays
//! it out as a matrix: one column per host, one row per `port/service` key
//! seen on any host, each cell holding that host's state for the key.
//!
//! ## Example Usage
//!
//! ```rust
//! use scangrid::parser::parse_str;
//! use scangrid::output::Grid;
//!
//! let report = parse_str(
//!     "Nmap scan report for gw.lan (10.0.0.1)\n\
//!      PORT   STATE SERVICE\n\
//!      22/tcp open  ssh\n",
//! );
//! assert_eq!(report.hosts[0].state_of("22/ssh"), Some("open"));
//!
//! let grid = Grid::build(&report);
//! assert_eq!(grid.ports[0].key, "22/ssh");
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Host, summary, and state classification types
//! - [`parser`] - The line-oriented report parser
//! - [`output`] - Grid layout and xlsx/CSV/JSON emitters
//! - [`config`] - Color table and output path settings
//! - [`cli`] - Command-line definition and conversion driver
//! - [`error`] - Error types

pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod parser;
pub mod types;

// Re-export commonly used types
pub use error::{CliError, ConfigError, EmitError, ReportError};
pub use parser::{parse_file, parse_reader, parse_str, ReportParser};
pub use types::{Host, ScanReport, ScanSummary, StateCategory};
