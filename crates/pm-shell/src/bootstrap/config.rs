//! # Configuration Loader
//!
//! Reads a TOML file and maps it onto [`ShellConfig`]. Pure data loading:
//! no validation, whatever the file holds is accepted.

use anyhow::Context;
use pm_core::config::ShellConfig;
use std::path::{Path, PathBuf};

/// Environment variable naming the configuration file.
pub const CONFIG_PATH_ENV: &str = "PROMO_CONFIG";

/// Load configuration from a TOML file
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<ShellConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    ShellConfig::from_toml(&toml_value)
}

/// Resolve the configuration for this process.
///
/// Uses the file named by `PROMO_CONFIG` when set. Falls back to defaults
/// when unset or unreadable; the returned warning explains why.
pub fn resolve_config(config_path: Option<&Path>) -> (ShellConfig, Option<String>) {
    match config_path {
        None => (ShellConfig::default(), None),
        Some(path) => match load_config(path.to_path_buf()) {
            Ok(config) => (config, None),
            Err(err) => (
                ShellConfig::default(),
                Some(format!("using default config: {err:#}")),
            ),
        },
    }
}
