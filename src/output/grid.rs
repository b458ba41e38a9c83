//! Format-independent layout of the host/port matrix.
//!
//! The layout is fixed: a metadata block, a blank spacer row, the host and
//! hostname rows, a "Ports:" title, then one row per distinct port key.

use crate::types::{ScanReport, StateCategory};

/// Placeholder for metadata the report did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

pub const TITLE: &str = "General information";
pub const HOSTS_LABEL: &str = "Hosts:";
pub const HOSTNAMES_LABEL: &str = "hostname:";
pub const PORTS_LABEL: &str = "Ports:";

/// Zero-based row indices of the fixed layout.
pub mod rows {
    pub const TITLE: u32 = 0;
    pub const START_TIME: u32 = 1;
    pub const SOURCE_HOST: u32 = 2;
    pub const COMMAND: u32 = 3;
    pub const HOSTS_PROCESSED: u32 = 4;
    pub const SPACER: u32 = 5;
    pub const HOSTS: u32 = 6;
    pub const HOSTNAMES: u32 = 7;
    pub const PORTS_TITLE: u32 = 8;
    pub const FIRST_PORT: u32 = 9;
}

/// One state cell of the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateCell {
    /// Recorded state, empty when the host has no entry for the key.
    pub state: String,
    pub category: StateCategory,
}

impl StateCell {
    fn new(state: Option<&str>) -> Self {
        let state = state.unwrap_or_default().to_string();
        let category = StateCategory::classify(&state);
        Self { state, category }
    }
}

/// One port key and the state of every host for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortRow {
    pub key: String,
    pub cells: Vec<StateCell>,
}

/// The complete grid ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Label/value pairs of the metadata block, in row order.
    pub metadata: Vec<(&'static str, String)>,
    pub hosts: Vec<String>,
    pub hostnames: Vec<String>,
    pub ports: Vec<PortRow>,
}

impl Grid {
    /// Lay out a parsed report.
    pub fn build(report: &ScanReport) -> Self {
        let summary = &report.summary;
        let metadata = vec![
            (
                "Scan start time:",
                summary
                    .start_time
                    .clone()
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            ("Source host:", NOT_AVAILABLE.to_string()),
            (
                "Command:",
                summary
                    .command
                    .clone()
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            ),
            ("Hosts processed:", summary.hosts_line()),
        ];

        let ports = report
            .port_keys()
            .into_iter()
            .map(|key| PortRow {
                key: key.to_string(),
                cells: report
                    .hosts
                    .iter()
                    .map(|host| StateCell::new(host.state_of(key)))
                    .collect(),
            })
            .collect();

        Self {
            metadata,
            hosts: report.hosts.iter().map(|h| h.ip.clone()).collect(),
            hostnames: report
                .hosts
                .iter()
                .map(|h| h.display_hostname().to_string())
                .collect(),
            ports,
        }
    }

    /// Number of columns: the label column plus one per host.
    pub fn width(&self) -> usize {
        self.hosts.len() + 1
    }

    /// Total number of rows in the layout.
    pub fn height(&self) -> usize {
        rows::FIRST_PORT as usize + self.ports.len()
    }

    /// The whole layout as text, every row padded to [`Grid::width`].
    ///
    /// Rows are never narrower than two cells so the metadata values survive
    /// a grid without hosts.
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        let width = self.width().max(2);
        let pad = |mut row: Vec<String>| {
            row.resize(width, String::new());
            row
        };

        let mut out = Vec::with_capacity(self.height());
        out.push(pad(vec![TITLE.to_string()]));
        for (label, value) in &self.metadata {
            out.push(pad(vec![label.to_string(), value.clone()]));
        }
        out.push(pad(Vec::new()));
        out.push(pad(
            std::iter::once(HOSTS_LABEL.to_string())
                .chain(self.hosts.iter().cloned())
                .collect(),
        ));
        out.push(pad(
            std::iter::once(HOSTNAMES_LABEL.to_string())
                .chain(self.hostnames.iter().cloned())
                .collect(),
        ));
        out.push(pad(vec![PORTS_LABEL.to_string()]));
        for row in &self.ports {
            out.push(pad(
                std::iter::once(row.key.clone())
                    .chain(row.cells.iter().map(|c| c.state.clone()))
                    .collect(),
            ));
        }
        out
    }

    /// Column widths: longest text plus two, clamped to 15..=50 characters.
    pub fn column_widths(&self) -> Vec<usize> {
        let rows = self.to_rows();
        (0..self.width())
            .map(|col| {
                let longest = rows
                    .iter()
                    .map(|row| row[col].chars().count())
                    .max()
                    .unwrap_or(0);
                (longest + 2).clamp(15, 50)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Host, ScanSummary};

    fn report(hosts: Vec<Host>) -> ScanReport {
        ScanReport {
            summary: ScanSummary {
                start_time: Some("2024-03-01 09:15 UTC".into()),
                command: None,
                total_ips: 256,
                hosts_up: 2,
            },
            hosts,
        }
    }

    #[test]
    fn test_single_host_rows_sorted_and_classified() {
        let mut host = Host::new("10.0.0.1", None);
        host.record_port("80", "http", "closed");
        host.record_port("22", "ssh", "open");

        let grid = Grid::build(&report(vec![host]));
        assert_eq!(grid.ports.len(), 2);
        assert_eq!(grid.ports[0].key, "22/ssh");
        assert_eq!(grid.ports[1].key, "80/http");
        assert_eq!(grid.ports[0].cells[0].category, StateCategory::Open);
        assert_eq!(grid.ports[1].cells[0].category, StateCategory::Closed);
    }

    #[test]
    fn test_missing_entries_are_blank_default_cells() {
        let mut a = Host::new("10.0.0.1", Some("a.lan".into()));
        a.record_port("22", "ssh", "open");
        let mut b = Host::new("10.0.0.2", None);
        b.record_port("443", "https", "open");

        let grid = Grid::build(&report(vec![a, b]));
        assert_eq!(grid.hosts, vec!["10.0.0.1", "10.0.0.2"]);
        assert_eq!(grid.hostnames, vec!["a.lan", ""]);

        let ssh = &grid.ports[0];
        assert_eq!(ssh.key, "22/ssh");
        assert_eq!(ssh.cells[0].state, "open");
        assert_eq!(ssh.cells[1].state, "");
        assert_eq!(ssh.cells[1].category, StateCategory::Default);

        let https = &grid.ports[1];
        assert_eq!(https.cells[0].state, "");
        assert_eq!(https.cells[1].state, "open");
    }

    #[test]
    fn test_metadata_defaults() {
        let grid = Grid::build(&report(Vec::new()));
        assert_eq!(grid.metadata[0].1, "2024-03-01 09:15 UTC");
        assert_eq!(grid.metadata[1].1, NOT_AVAILABLE);
        assert_eq!(grid.metadata[2], ("Command:", NOT_AVAILABLE.to_string()));
        assert_eq!(grid.metadata[3].1, "2 (of 256)");
    }

    #[test]
    fn test_rows_follow_fixed_layout() {
        let mut host = Host::new("10.0.0.1", Some("gw".into()));
        host.record_port("22", "ssh", "open");
        let grid = Grid::build(&report(vec![host]));
        let rows = grid.to_rows();

        assert_eq!(rows.len(), grid.height());
        assert!(rows.iter().all(|r| r.len() == 2));
        assert_eq!(rows[rows::TITLE as usize][0], TITLE);
        assert_eq!(rows[rows::SPACER as usize], vec!["", ""]);
        assert_eq!(rows[rows::HOSTS as usize], vec![HOSTS_LABEL, "10.0.0.1"]);
        assert_eq!(rows[rows::HOSTNAMES as usize], vec![HOSTNAMES_LABEL, "gw"]);
        assert_eq!(rows[rows::PORTS_TITLE as usize][0], PORTS_LABEL);
        assert_eq!(rows[rows::FIRST_PORT as usize], vec!["22/ssh", "open"]);
    }

    #[test]
    fn test_rows_without_hosts_keep_metadata() {
        let grid = Grid::build(&report(Vec::new()));
        let rows = grid.to_rows();

        assert_eq!(grid.width(), 1);
        assert_eq!(
            rows[rows::START_TIME as usize],
            vec!["Scan start time:", "2024-03-01 09:15 UTC"]
        );
        assert_eq!(rows[rows::HOSTS_PROCESSED as usize][1], "2 (of 256)");
        assert_eq!(rows[rows::HOSTS as usize], vec![HOSTS_LABEL, ""]);
    }

    #[test]
    fn test_column_widths_are_clamped() {
        let long_name = "x".repeat(80);
        let host = Host::new("10.0.0.1", Some(long_name));
        let grid = Grid::build(&report(vec![host]));
        let widths = grid.column_widths();
        // Label column is driven by "General information" (19 chars).
        assert_eq!(widths[0], 21);
        assert_eq!(widths[1], 50);

        let short = Grid::build(&ScanReport {
            summary: ScanSummary::default(),
            hosts: vec![Host::new("1.1.1.1", None)],
        });
        assert_eq!(short.column_widths()[1], 15);
    }
}
