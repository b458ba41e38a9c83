//! Plain text output formatting.
//!
//! Status messages for the CLI and a colored terminal preview of the grid.

use super::grid::{Grid, HOSTS_LABEL, HOSTNAMES_LABEL};
use crate::types::StateCategory;
use console::{style, Style};
use std::io::{self, Write};

/// Widest column the terminal preview will print.
const MAX_PREVIEW_WIDTH: usize = 24;

fn category_style(category: StateCategory) -> Style {
    match category {
        StateCategory::Open => Style::new().green().bold(),
        StateCategory::Closed => Style::new().red(),
        StateCategory::Filtered => Style::new().yellow(),
        StateCategory::Default => Style::new().dim(),
    }
}

/// Print the metadata block and port matrix to stdout.
pub fn print_grid(grid: &Grid) -> io::Result<()> {
    let stdout = io::stdout();
    write_grid(grid, &mut stdout.lock())
}

/// Write the terminal preview of the grid.
pub fn write_grid<W: Write>(grid: &Grid, out: &mut W) -> io::Result<()> {
    let widths: Vec<usize> = grid
        .column_widths()
        .into_iter()
        .map(|w| w.min(MAX_PREVIEW_WIDTH))
        .collect();
    let cell = |text: &str, col: usize| {
        format!("{:<w$}", truncate_string(text, widths[col]), w = widths[col])
    };

    writeln!(out)?;
    for (label, value) in &grid.metadata {
        writeln!(out, "  {} {}", style(label).bold(), value)?;
    }
    writeln!(out)?;

    write!(out, "  {}", style(cell(HOSTS_LABEL, 0)).bold())?;
    for (idx, ip) in grid.hosts.iter().enumerate() {
        write!(out, "{}", style(cell(ip, idx + 1)).cyan().bold())?;
    }
    writeln!(out)?;

    write!(out, "  {}", style(cell(HOSTNAMES_LABEL, 0)).bold())?;
    for (idx, name) in grid.hostnames.iter().enumerate() {
        write!(out, "{}", style(cell(name, idx + 1)).dim())?;
    }
    writeln!(out)?;

    if grid.ports.is_empty() {
        writeln!(out, "  {}", style("No ports to display.").dim())?;
    }

    for port in &grid.ports {
        write!(out, "  {}", style(cell(&port.key, 0)).bold())?;
        for (idx, state) in port.cells.iter().enumerate() {
            let text = cell(&state.state, idx + 1);
            write!(out, "{}", category_style(state.category).apply_to(text))?;
        }
        writeln!(out)?;
    }
    writeln!(out)?;

    Ok(())
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}

/// Print a success message.
pub fn print_success(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

/// Print an info message.
pub fn print_info(msg: &str) {
    println!("{} {}", style("ℹ").blue().bold(), msg);
}

/// Truncate a string to a maximum length in characters, adding ellipsis if truncated.
fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 8), "hello...");
        assert_eq!(truncate_string("сервер-приложений", 9), "сервер...");
    }

    #[test]
    fn test_preview_lists_every_port_row() {
        console::set_colors_enabled(false);
        let report = parse_str(
            "Nmap scan report for gw (10.0.0.1)\nPORT STATE SERVICE\n22/tcp open ssh\n80/tcp closed http\n",
        );
        let grid = Grid::build(&report);

        let mut buf = Vec::new();
        write_grid(&grid, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("10.0.0.1"));
        assert!(text.contains("22/ssh"));
        assert!(text.contains("80/http"));
        assert!(text.contains("closed"));
        assert!(!text.contains("No ports to display."));
    }
}
