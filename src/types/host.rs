//! Host records extracted from a scan report.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Service name used when a port row carries no service column.
pub const UNKNOWN_SERVICE: &str = "unknown";

/// One scanned endpoint and the port states recorded for it.
///
/// Ports are keyed by `"<port>/<service>"` (the protocol is not part of the
/// key). States are stored lower-cased exactly as the report spelled them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Host {
    /// Address as written in the report header.
    pub ip: String,
    /// Resolved name, if the header carried one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,
    /// Port key to lower-cased state.
    pub ports: BTreeMap<String, String>,
}

impl Host {
    /// Create a host with no recorded ports.
    pub fn new(ip: impl Into<String>, hostname: Option<String>) -> Self {
        Self {
            ip: ip.into(),
            hostname,
            ports: BTreeMap::new(),
        }
    }

    /// Build the composite key for a port row.
    pub fn port_key(port: &str, service: &str) -> String {
        format!("{}/{}", port, service)
    }

    /// Record a port state, replacing any earlier entry with the same key.
    pub fn record_port(&mut self, port: &str, service: &str, state: &str) {
        self.ports
            .insert(Self::port_key(port, service), state.to_lowercase());
    }

    /// State recorded for `key`, if any.
    pub fn state_of(&self, key: &str) -> Option<&str> {
        self.ports.get(key).map(String::as_str)
    }

    /// Number of distinct port keys recorded.
    pub fn port_count(&self) -> usize {
        self.ports.len()
    }

    /// Hostname for display, empty when absent.
    pub fn display_hostname(&self) -> &str {
        self.hostname.as_deref().unwrap_or("")
    }
}
