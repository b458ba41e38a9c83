//! Display classification of port state strings.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual category of a state cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StateCategory {
    Open,
    Closed,
    Filtered,
    /// Anything else, including blank cells.
    Default,
}

/// Ordered substring rules; the first keyword contained in the state wins.
///
/// Order matters for compound states such as `open|filtered`, which
/// classify as `Open`.
pub const CLASSIFICATION_RULES: &[(&str, StateCategory)] = &[
    ("open", StateCategory::Open),
    ("closed", StateCategory::Closed),
    ("filtered", StateCategory::Filtered),
];

impl StateCategory {
    /// Classify a state string by substring containment (case-insensitive).
    pub fn classify(state: &str) -> Self {
        let state = state.to_lowercase();
        CLASSIFICATION_RULES
            .iter()
            .find(|(keyword, _)| state.contains(keyword))
            .map_or(Self::Default, |&(_, category)| category)
    }
}

impl fmt::Display for StateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Closed => write!(f, "closed"),
            Self::Filtered => write!(f, "filtered"),
            Self::Default => write!(f, "default"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_plain_states() {
        assert_eq!(StateCategory::classify("open"), StateCategory::Open);
        assert_eq!(StateCategory::classify("closed"), StateCategory::Closed);
        assert_eq!(StateCategory::classify("filtered"), StateCategory::Filtered);
    }

    #[test]
    fn test_classify_priority_on_compound_states() {
        assert_eq!(StateCategory::classify("open|filtered"), StateCategory::Open);
        assert_eq!(StateCategory::classify("closed|filtered"), StateCategory::Closed);
        assert_eq!(StateCategory::classify("unfiltered"), StateCategory::Filtered);
    }

    #[test]
    fn test_classify_falls_back_to_default() {
        assert_eq!(StateCategory::classify(""), StateCategory::Default);
        assert_eq!(StateCategory::classify("tcpwrapped"), StateCategory::Default);
    }
}
