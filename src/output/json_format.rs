//! JSON output formatting.

use crate::error::EmitResult;
use crate::types::ScanReport;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write the parsed report as pretty-printed JSON.
pub fn write_json_file(report: &ScanReport, path: &Path) -> EmitResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, report)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
