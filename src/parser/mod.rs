//! Nmap normal-output report parser.
//!
//! A single-pass, line-oriented state machine. It tracks the host currently
//! being filled and whether the port table is active; a host is sealed only
//! when the next host header arrives or the input ends.
//!
//! Malformed lines are skipped, never reported as errors. The only failure
//! modes are those of the underlying reader.

mod rules;

pub use rules::{
    classify_section_line, is_port_table_header, LineMatcher, SectionAction, SECTION_RULES,
};

use crate::error::{ReportError, ReportResult};
use crate::types::{Host, ScanReport, ScanSummary, UNKNOWN_SERVICE};
use regex::Regex;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info, trace};

const START_MARKER: &str = "Starting Nmap";
const START_SEPARATOR: &str = " at ";
const DONE_MARKER: &str = "Nmap done:";

static HOST_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Nmap scan report for (?:([\w\-. ]+)\s)?\(?([\d.]+)\)?")
        .expect("host header pattern is valid")
});

// Plural "addresses" only: a single-target "1 IP address" line leaves the
// counts at 0, which existing reports rely on.
static DONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Nmap done: (\d+) IP addresses \((\d+) hosts? up\)")
        .expect("completion pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Incremental report parser.
///
/// Feed lines in order with [`ReportParser::feed_line`], then call
/// [`ReportParser::finish`] to seal the last host.
#[derive(Debug, Default)]
pub struct ReportParser {
    summary: ScanSummary,
    hosts: Vec<Host>,
    current: Option<Host>,
    in_ports_section: bool,
}

impl ReportParser {
    /// Create a parser with empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one raw line of report text.
    pub fn feed_line(&mut self, raw: &str) {
        let line = raw.trim();

        self.scan_metadata(line);

        if let Some(host) = parse_host_header(line) {
            self.start_host(host);
            return;
        }

        if self.current.is_none() {
            return;
        }

        if is_port_table_header(line) {
            self.in_ports_section = true;
            return;
        }

        if !self.in_ports_section {
            return;
        }

        match classify_section_line(line) {
            SectionAction::EndSection => self.in_ports_section = false,
            SectionAction::Discard => trace!(line, "discarded port table note"),
            SectionAction::PortRow => self.port_row(line),
        }
    }

    /// Seal the pending host and return the parsed report.
    pub fn finish(mut self) -> ScanReport {
        if let Some(host) = self.current.take() {
            self.hosts.push(host);
        }

        info!(
            hosts = self.hosts.len(),
            hosts_up = self.summary.hosts_up,
            total_ips = self.summary.total_ips,
            "parsed scan report"
        );

        ScanReport {
            summary: self.summary,
            hosts: self.hosts,
        }
    }

    fn scan_metadata(&mut self, line: &str) {
        if self.summary.start_time.is_none() && line.starts_with(START_MARKER) {
            let stamp = line.rsplit(START_SEPARATOR).next().unwrap_or(line);
            self.summary.start_time = Some(stamp.to_string());
        }

        if line.contains(DONE_MARKER) {
            if let Some((total, up)) = parse_done_counts(line) {
                self.summary.total_ips = total;
                self.summary.hosts_up = up;
            }
        }
    }

    fn start_host(&mut self, host: Host) {
        debug!(ip = %host.ip, hostname = ?host.hostname, "host header");
        if let Some(previous) = self.current.replace(host) {
            self.hosts.push(previous);
        }
        self.in_ports_section = false;
    }

    fn port_row(&mut self, line: &str) {
        let Some(host) = self.current.as_mut() else {
            return;
        };

        let fields: Vec<&str> = WHITESPACE.splitn(line, 3).collect();
        if fields.len() < 2 {
            debug!(line, "skipping port row without a state column");
            return;
        }

        let Some((port, _protocol)) = fields[0].split_once('/') else {
            debug!(line, "skipping port row without port/protocol");
            return;
        };

        let service = fields
            .get(2)
            .and_then(|rest| rest.split_whitespace().next())
            .unwrap_or(UNKNOWN_SERVICE);

        host.record_port(port, service, fields[1]);
    }
}

/// Match a `Nmap scan report for ...` header.
fn parse_host_header(line: &str) -> Option<Host> {
    let caps = HOST_PATTERN.captures(line)?;
    let ip = caps.get(2)?.as_str();
    let hostname = caps
        .get(1)
        .map(|m| m.as_str().trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string);
    Some(Host::new(ip, hostname))
}

/// Extract `(total_ips, hosts_up)` from the completion line.
fn parse_done_counts(line: &str) -> Option<(u64, u64)> {
    let caps = DONE_PATTERN.captures(line)?;
    let total = caps.get(1)?.as_str().parse().ok()?;
    let up = caps.get(2)?.as_str().parse().ok()?;
    Some((total, up))
}

/// Parse report text already held in memory.
pub fn parse_str(text: &str) -> ScanReport {
    let mut parser = ReportParser::new();
    for line in text.lines() {
        parser.feed_line(line);
    }
    parser.finish()
}

/// Parse a report from any buffered reader.
///
/// Fails if the reader fails, including on invalid UTF-8.
pub fn parse_reader<R: BufRead>(reader: R) -> ReportResult<ScanReport> {
    let mut parser = ReportParser::new();
    for line in reader.lines() {
        parser.feed_line(&line?);
    }
    Ok(parser.finish())
}

/// Open and parse a report file.
pub fn parse_file(path: &Path) -> ReportResult<ScanReport> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => ReportError::InputNotFound(path.to_path_buf()),
        _ => ReportError::ReadFailed {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    debug!(path = %path.display(), "reading scan report");

    parse_reader(BufReader::new(file)).map_err(|e| match e {
        ReportError::Io(source) => ReportError::ReadFailed {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })
}
