//! Line classification rules for the port table.
//!
//! Rules are evaluated in order and the first match wins. Keeping them as a
//! table makes the overlap between summary notes and real rows explicit.

/// How a rule inspects a trimmed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatcher {
    Blank,
    StartsWith(&'static str),
    Contains(&'static str),
}

impl LineMatcher {
    pub fn matches(self, line: &str) -> bool {
        match self {
            Self::Blank => line.is_empty(),
            Self::StartsWith(prefix) => line.starts_with(prefix),
            Self::Contains(needle) => line.contains(needle),
        }
    }
}

/// What to do with a line inside the port table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionAction {
    /// Leave the port table.
    EndSection,
    /// Drop the line, stay in the table.
    Discard,
    /// Parse the line as a port row.
    PortRow,
}

/// Rules applied while the port table is active.
///
/// `Contains("filtered")` also swallows genuine rows whose state is
/// `filtered` (e.g. `25/tcp filtered smtp`), not only the
/// "N filtered ports" note. Existing reports depend on this output.
pub const SECTION_RULES: &[(LineMatcher, SectionAction)] = &[
    (LineMatcher::Blank, SectionAction::EndSection),
    (LineMatcher::StartsWith("Nmap scan"), SectionAction::EndSection),
    (LineMatcher::StartsWith("Not shown:"), SectionAction::Discard),
    (LineMatcher::StartsWith("All "), SectionAction::Discard),
    (LineMatcher::Contains("filtered"), SectionAction::Discard),
];

/// Classify a trimmed line seen inside the port table.
pub fn classify_section_line(line: &str) -> SectionAction {
    SECTION_RULES
        .iter()
        .find(|(matcher, _)| matcher.matches(line))
        .map_or(SectionAction::PortRow, |&(_, action)| action)
}

/// True for the `PORT STATE SERVICE` header that opens a port table.
pub fn is_port_table_header(line: &str) -> bool {
    line.starts_with("PORT") && line.contains("STATE") && line.contains("SERVICE")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_terminators() {
        assert_eq!(classify_section_line(""), SectionAction::EndSection);
        assert_eq!(
            classify_section_line("Nmap scan report for 10.0.0.9"),
            SectionAction::EndSection
        );
    }

    #[test]
    fn test_summary_notes_are_discarded() {
        assert_eq!(
            classify_section_line("Not shown: 997 closed tcp ports (conn-refused)"),
            SectionAction::Discard
        );
        assert_eq!(
            classify_section_line("All 1000 scanned ports on 10.0.0.1 are in ignored states."),
            SectionAction::Discard
        );
        assert_eq!(
            classify_section_line("995 filtered ports"),
            SectionAction::Discard
        );
    }

    #[test]
    fn test_filtered_row_is_discarded() {
        assert_eq!(
            classify_section_line("25/tcp   filtered smtp"),
            SectionAction::Discard
        );
        assert_eq!(
            classify_section_line("161/udp  open|filtered snmp"),
            SectionAction::Discard
        );
    }

    #[test]
    fn test_regular_rows() {
        assert_eq!(
            classify_section_line("22/tcp   open  ssh"),
            SectionAction::PortRow
        );
        assert_eq!(classify_section_line("443/tcp closed"), SectionAction::PortRow);
    }

    #[test]
    fn test_port_table_header() {
        assert!(is_port_table_header("PORT     STATE SERVICE"));
        assert!(is_port_table_header("PORT    STATE  SERVICE VERSION"));
        assert!(!is_port_table_header("PORT STATE"));
        assert!(!is_port_table_header("  PORT STATE SERVICE"));
    }
}
