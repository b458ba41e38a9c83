//! Application settings and paths.
//!
//! Settings are plain data passed explicitly to the emitters. They come from
//! `--config`, the XDG settings file, or built-in defaults, in that order.

use crate::error::{ConfigError, ConfigResult};
use crate::types::StateCategory;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/scangrid)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Locate the platform directories, if the home directory is known.
    pub fn discover() -> Option<Self> {
        let project = ProjectDirs::from("com", "scangrid", "scangrid")?;
        Some(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Fill colors for state cells, as `RRGGBB` hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub open: String,
    pub closed: String,
    pub filtered: String,
    /// Reserved for states the scanner could not determine. No
    /// classification rule selects it at present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub undefined: Option<String>,
    pub default: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            open: "90EE90".to_string(),
            closed: "FFCCCB".to_string(),
            filtered: "FFFFE0".to_string(),
            undefined: Some("D3D3D3".to_string()),
            default: "FFFFFF".to_string(),
        }
    }
}

impl Palette {
    /// Hex color for a state category.
    pub fn color_for(&self, category: StateCategory) -> &str {
        match category {
            StateCategory::Open => &self.open,
            StateCategory::Closed => &self.closed,
            StateCategory::Filtered => &self.filtered,
            StateCategory::Default => &self.default,
        }
    }

    /// Numeric RGB value for a state category.
    ///
    /// Call [`Palette::validate`] first; invalid entries fall back to white.
    pub fn rgb_for(&self, category: StateCategory) -> u32 {
        parse_hex_color(self.color_for(category)).unwrap_or(0xFFFFFF)
    }

    /// Check that every configured color is a 6-digit hex value.
    pub fn validate(&self) -> ConfigResult<()> {
        let mut entries = vec![
            ("open", self.open.as_str()),
            ("closed", self.closed.as_str()),
            ("filtered", self.filtered.as_str()),
            ("default", self.default.as_str()),
        ];
        if let Some(undefined) = self.undefined.as_deref() {
            entries.push(("undefined", undefined));
        }

        for (state, value) in entries {
            if parse_hex_color(value).is_none() {
                return Err(ConfigError::InvalidColor {
                    state: state.to_string(),
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Parse `RRGGBB` (optionally prefixed with `#`) into a packed RGB value.
pub fn parse_hex_color(value: &str) -> Option<u32> {
    let hex = value.strip_prefix('#').unwrap_or(value);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(hex, 16).ok()
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Cell fill colors.
    pub palette: Palette,
    /// Where reports go when no directory is given on the command line.
    /// Empty means next to the executable.
    pub default_output_dir: String,
    /// Appended to the input file stem before the extension.
    pub output_suffix: String,
    /// Worksheet title.
    pub sheet_name: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            default_output_dir: String::new(),
            output_suffix: "_filtered".to_string(),
            sheet_name: "Scan Results".to_string(),
        }
    }
}

impl AppSettings {
    /// Load settings from the default location, or defaults if none exist.
    pub fn load() -> ConfigResult<Self> {
        match Paths::discover().map(|paths| paths.settings_file()) {
            Some(file) if file.exists() => Self::load_from(&file),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings: Self = serde_json::from_str(&content)?;
        settings.palette.validate()?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Pick the output directory: command line, then configuration, then the
    /// directory holding the running executable. An empty path at either
    /// level counts as unset.
    pub fn resolve_output_dir(&self, cli_dir: Option<&Path>) -> ConfigResult<PathBuf> {
        if let Some(dir) = cli_dir.filter(|dir| !dir.as_os_str().is_empty()) {
            return Ok(dir.to_path_buf());
        }

        if !self.default_output_dir.is_empty() {
            return Ok(PathBuf::from(&self.default_output_dir));
        }

        let exe = std::env::current_exe().map_err(|e| ConfigError::ExecutableDir(e.to_string()))?;
        exe.parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| ConfigError::ExecutableDir(exe.display().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.output_suffix, "_filtered");
        assert_eq!(settings.palette.open, "90EE90");
        assert!(settings.palette.validate().is_ok());
    }

    #[test]
    fn test_palette_lookup() {
        let palette = Palette::default();
        assert_eq!(palette.rgb_for(StateCategory::Open), 0x90EE90);
        assert_eq!(palette.rgb_for(StateCategory::Closed), 0xFFCCCB);
        assert_eq!(palette.rgb_for(StateCategory::Filtered), 0xFFFFE0);
        assert_eq!(palette.rgb_for(StateCategory::Default), 0xFFFFFF);
    }

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("90EE90"), Some(0x90EE90));
        assert_eq!(parse_hex_color("#ffcccb"), Some(0xFFCCCB));
        assert_eq!(parse_hex_color("FFF"), None);
        assert_eq!(parse_hex_color("GGGGGG"), None);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"palette": {{"open": "00FF00"}}, "default_output_dir": "/tmp/out"}}"#)
            .unwrap();

        let settings = AppSettings::load_from(file.path()).unwrap();
        assert_eq!(settings.palette.open, "00FF00");
        assert_eq!(settings.palette.closed, "FFCCCB");
        assert_eq!(settings.default_output_dir, "/tmp/out");
        assert_eq!(settings.sheet_name, "Scan Results");
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"palette": {{"closed": "red"}}}}"#).unwrap();

        let err = AppSettings::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidColor { ref state, .. } if state == "closed"));
    }

    #[test]
    fn test_resolve_output_dir_precedence() {
        let settings = AppSettings {
            default_output_dir: "/srv/reports".to_string(),
            ..Default::default()
        };
        assert_eq!(
            settings.resolve_output_dir(Some(Path::new("out"))).unwrap(),
            PathBuf::from("out")
        );
        assert_eq!(
            settings.resolve_output_dir(None).unwrap(),
            PathBuf::from("/srv/reports")
        );

        let beside_exe = AppSettings::default().resolve_output_dir(None).unwrap();
        assert!(beside_exe.is_dir());
    }

    #[test]
    fn test_empty_cli_dir_falls_back_to_executable_dir() {
        let exe_dir = std::env::current_exe()
            .unwrap()
            .parent()
            .unwrap()
            .to_path_buf();

        let resolved = AppSettings::default()
            .resolve_output_dir(Some(Path::new("")))
            .unwrap();
        assert_eq!(resolved, exe_dir);

        let configured = AppSettings {
            default_output_dir: "/srv/reports".to_string(),
            ..Default::default()
        };
        assert_eq!(
            configured.resolve_output_dir(Some(Path::new(""))).unwrap(),
            PathBuf::from("/srv/reports")
        );
    }

    #[test]
    fn test_settings_serialization() {
        let settings = AppSettings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, settings);
    }
}
