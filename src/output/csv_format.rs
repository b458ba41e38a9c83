//! CSV output formatting.

use super::grid::Grid;
use crate::error::EmitResult;
use std::io;
use std::path::Path;

/// Write the grid layout as CSV to any writer.
pub fn write_csv<W: io::Write>(grid: &Grid, writer: W) -> EmitResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for row in grid.to_rows() {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the grid layout as a CSV file.
pub fn write_csv_file(grid: &Grid, path: &Path) -> EmitResult<()> {
    let file = std::fs::File::create(path)?;
    write_csv(grid, io::BufWriter::new(file))
}
