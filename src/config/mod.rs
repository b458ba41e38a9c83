//! Configuration management for scangrid.
//!
//! Provides the color table and output path defaults, loaded from an
//! XDG-compliant settings file when present.

mod settings;

pub use settings::{parse_hex_color, AppSettings, Palette, Paths};
