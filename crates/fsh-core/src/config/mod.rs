//! # Pure Data Module - Data Transfer Objects Only
//!
//! ## Responsibilities
//!
//! - ✅ Define configuration data structures
//! - ✅ Provide TOML → DTO mapping
//!
//! ## Prohibited
//!
//! ❌ **No business logic or policies**
//! ❌ **No validation logic**
//!
//! Hard limits live in [`crate::limits`]; they are not configurable.

use std::path::PathBuf;

pub const DEFAULT_PREVIEW_TEXT: &str = "The quick brown fox jumps over the lazy dog";
pub const DEFAULT_PREVIEW_FONT_SIZE_PX: u16 = 32;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq)]
pub struct ShelfConfig {
    /// Root directory of the record store (path info only, no existence check)
    pub data_dir: PathBuf,

    /// Storage quota in bytes. `None` means quota introspection is unavailable.
    pub quota_bytes: Option<u64>,

    /// Preview text shown on every card until the user edits it
    pub preview_text: String,

    /// Preview size used by the gallery and the print export
    pub preview_font_size_px: u16,

    /// Whether to also write logs to `<data_dir>/logs`
    pub log_to_file: bool,
}

impl ShelfConfig {
    /// Create ShelfConfig from TOML value
    ///
    /// **Prohibited**: This method must NOT contain any validation.
    /// Missing keys map to their empty value; empty strings are valid facts.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            data_dir: PathBuf::from(
                toml_value
                    .get("storage")
                    .and_then(|s| s.get("data_dir"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
            quota_bytes: toml_value
                .get("storage")
                .and_then(|s| s.get("quota_bytes"))
                .and_then(|v| v.as_integer())
                .map(|v| v.max(0) as u64),
            preview_text: toml_value
                .get("preview")
                .and_then(|p| p.get("text"))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            preview_font_size_px: toml_value
                .get("preview")
                .and_then(|p| p.get("font_size_px"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0) as u16,
            log_to_file: toml_value
                .get("logging")
                .and_then(|l| l.get("file"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty ShelfConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            quota_bytes: None,
            preview_text: String::new(),
            preview_font_size_px: 0,
            log_to_file: false,
        }
    }

    /// Create ShelfConfig with system-default values for production use
    ///
    /// The base directory is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            quota_bytes: None,
            preview_text: DEFAULT_PREVIEW_TEXT.to_string(),
            preview_font_size_px: DEFAULT_PREVIEW_FONT_SIZE_PX,
            log_to_file: false,
        }
    }

    /// Preview text, or the built-in sample when the config left it empty.
    pub fn effective_preview_text(&self) -> &str {
        if self.preview_text.trim().is_empty() {
            DEFAULT_PREVIEW_TEXT
        } else {
            &self.preview_text
        }
    }

    pub fn effective_preview_font_size_px(&self) -> u16 {
        if self.preview_font_size_px == 0 {
            DEFAULT_PREVIEW_FONT_SIZE_PX
        } else {
            self.preview_font_size_px
        }
    }
}
