//! # Configuration Loader
//!
//! ## Responsibilities
//!
//! - ✅ Read TOML configuration files
//! - ✅ Parse TOML into the `ShelfConfig` DTO
//! - ✅ Report I/O and parsing errors with context
//! - ✅ Fill the data directory from the platform defaults when unset
//!
//! ## Prohibited
//!
//! ❌ **No validation logic**
//! ❌ **No business rules**

use anyhow::Context;
use fsh_core::ShelfConfig;
use std::path::{Path, PathBuf};

const APP_DIR_NAME: &str = "fontshelf";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
///
/// Pure data loading: missing keys map to empty values and nothing is
/// validated.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<ShelfConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    ShelfConfig::from_toml(&toml_value)
}

/// `<platform data dir>/fontshelf`, or `./fontshelf` where the platform has none.
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// `<platform config dir>/fontshelf/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Resolve the effective configuration for one run.
///
/// An explicit `--config` path must exist. Without one, the default
/// location is used when present, otherwise system defaults apply.
/// `--data-dir` wins over whatever the file says.
pub fn resolve_config(
    explicit: Option<PathBuf>,
    data_dir_override: Option<PathBuf>,
) -> anyhow::Result<ShelfConfig> {
    let config = match explicit {
        Some(path) => load_config(path)?,
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => load_config(path)?,
            None => ShelfConfig::with_system_defaults(default_data_dir()),
        },
    };
    Ok(apply_data_dir(config, &default_data_dir(), data_dir_override))
}

fn apply_data_dir(
    mut config: ShelfConfig,
    fallback: &Path,
    data_dir_override: Option<PathBuf>,
) -> ShelfConfig {
    if let Some(dir) = data_dir_override {
        config.data_dir = dir;
    } else if config.data_dir.as_os_str().is_empty() {
        config.data_dir = fallback.to_path_buf();
    }
    config
}
