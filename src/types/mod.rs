//! Core data model shared by the parser and the emitters.

mod host;
mod state;
mod summary;

pub use host::{Host, UNKNOWN_SERVICE};
pub use state::{StateCategory, CLASSIFICATION_RULES};
pub use summary::{ScanReport, ScanSummary};
