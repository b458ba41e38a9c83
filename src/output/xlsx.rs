//! Spreadsheet rendering with `rust_xlsxwriter`.

use super::grid::{rows, Grid, PORTS_LABEL, TITLE};
use crate::config::AppSettings;
use crate::error::EmitResult;
use crate::types::StateCategory;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet, XlsxError};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Cell formats shared by every sheet.
struct Styles {
    header: Format,
    header_centered: Format,
    body: Format,
    fills: HashMap<StateCategory, Format>,
}

impl Styles {
    fn new(settings: &AppSettings) -> Self {
        let body = Format::new().set_border(FormatBorder::Thin);
        let header = body.clone().set_bold();
        let header_centered = header
            .clone()
            .set_align(FormatAlign::Center)
            .set_align(FormatAlign::VerticalCenter);

        let fills = [
            StateCategory::Open,
            StateCategory::Closed,
            StateCategory::Filtered,
            StateCategory::Default,
        ]
        .into_iter()
        .map(|category| {
            let color = Color::RGB(settings.palette.rgb_for(category));
            (category, body.clone().set_background_color(color))
        })
        .collect();

        Self {
            header,
            header_centered,
            body,
            fills,
        }
    }

    fn fill(&self, category: StateCategory) -> &Format {
        self.fills.get(&category).unwrap_or(&self.body)
    }
}

/// Write `text` with `format`, or a formatted blank cell when empty.
fn write_cell(
    sheet: &mut Worksheet,
    row: u32,
    col: u16,
    text: &str,
    format: &Format,
) -> Result<(), XlsxError> {
    if text.is_empty() {
        sheet.write_blank(row, col, format)?;
    } else {
        sheet.write_string_with_format(row, col, text, format)?;
    }
    Ok(())
}

/// Write a full-width title row, merged when there is more than one column.
fn write_title(
    sheet: &mut Worksheet,
    row: u32,
    last_col: u16,
    text: &str,
    format: &Format,
) -> Result<(), XlsxError> {
    if last_col == 0 {
        write_cell(sheet, row, 0, text, format)
    } else {
        sheet.merge_range(row, 0, row, last_col, text, format)?;
        Ok(())
    }
}

/// Render the grid into a worksheet.
pub fn render_worksheet(grid: &Grid, settings: &AppSettings) -> Result<Worksheet, XlsxError> {
    let styles = Styles::new(settings);
    let text = grid.to_rows();
    let last_col = (grid.width() - 1) as u16;

    let mut sheet = Worksheet::new();
    sheet.set_name(&settings.sheet_name)?;

    write_title(&mut sheet, rows::TITLE, last_col, TITLE, &styles.header_centered)?;

    for row in rows::START_TIME..rows::PORTS_TITLE {
        let format = match row {
            rows::HOSTS | rows::HOSTNAMES => &styles.header_centered,
            _ => &styles.header,
        };
        for (col, value) in text[row as usize].iter().enumerate() {
            write_cell(&mut sheet, row, col as u16, value, format)?;
        }
    }

    write_title(
        &mut sheet,
        rows::PORTS_TITLE,
        last_col,
        PORTS_LABEL,
        &styles.header_centered,
    )?;

    for (offset, port) in grid.ports.iter().enumerate() {
        let row = rows::FIRST_PORT + offset as u32;
        write_cell(&mut sheet, row, 0, &port.key, &styles.header)?;
        for (idx, cell) in port.cells.iter().enumerate() {
            write_cell(
                &mut sheet,
                row,
                idx as u16 + 1,
                &cell.state,
                styles.fill(cell.category),
            )?;
        }
    }

    for (col, width) in grid.column_widths().into_iter().enumerate() {
        sheet.set_column_width(col as u16, width as f64)?;
    }

    Ok(sheet)
}

/// Render the grid and save it as an `.xlsx` workbook.
pub fn write_xlsx(grid: &Grid, settings: &AppSettings, path: &Path) -> EmitResult<()> {
    let sheet = render_worksheet(grid, settings)?;
    let mut workbook = Workbook::new();
    workbook.push_worksheet(sheet);
    workbook.save(path)?;
    debug!(
        path = %path.display(),
        hosts = grid.hosts.len(),
        ports = grid.ports.len(),
        "wrote workbook"
    );
    Ok(())
}

/// Save a workbook holding a single empty worksheet.
pub fn write_empty_workbook(path: &Path) -> EmitResult<()> {
    let mut workbook = Workbook::new();
    workbook.add_worksheet();
    workbook.save(path)?;
    Ok(())
}
