//! Scan-level metadata and the complete parsed report.

use super::Host;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Metadata describing the scan as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanSummary {
    /// Timestamp token from the first "Starting Nmap" line.
    pub start_time: Option<String>,
    /// Command line of the scan. No report line populates this yet.
    pub command: Option<String>,
    /// Number of addresses covered by the scan.
    pub total_ips: u64,
    /// Number of hosts that responded.
    pub hosts_up: u64,
}

impl ScanSummary {
    /// Render the "hosts processed" figure, e.g. `12 (of 254)`.
    pub fn hosts_line(&self) -> String {
        format!("{} (of {})", self.hosts_up, self.total_ips)
    }
}

/// Everything extracted from one report: the summary plus hosts in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    pub summary: ScanSummary,
    pub hosts: Vec<Host>,
}

impl ScanReport {
    /// True when no host header was found.
    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }

    /// Union of port keys across all hosts, sorted lexicographically.
    pub fn port_keys(&self) -> Vec<&str> {
        self.hosts
            .iter()
            .flat_map(|host| host.ports.keys().map(String::as_str))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
