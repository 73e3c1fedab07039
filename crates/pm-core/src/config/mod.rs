//! # Pure Data Module - Data Transfer Objects Only
//!
//! Shell configuration and its TOML mapping. No validation happens here:
//! whatever the file holds is taken as fact, missing keys fall back to the
//! built-in defaults.

use std::path::PathBuf;

/// Delay between entering the splash screen and the automatic advance.
pub const DEFAULT_SPLASH_DELAY_MS: u64 = 3000;

/// Shell configuration DTO
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Splash auto-advance delay in milliseconds
    pub splash_delay_ms: u64,

    /// Whether the simulated verifier refuses codes with empty slots
    pub require_complete_code: bool,

    /// Whether switching login method clears the entered value
    pub clear_login_value_on_method_switch: bool,

    /// Log directory (empty means platform default)
    pub log_directory: PathBuf,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            splash_delay_ms: DEFAULT_SPLASH_DELAY_MS,
            require_complete_code: false,
            clear_login_value_on_method_switch: false,
            log_directory: PathBuf::new(),
        }
    }
}

impl ShellConfig {
    /// Create ShellConfig from TOML value
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            splash_delay_ms: toml_value
                .get("splash")
                .and_then(|s| s.get("delay_ms"))
                .and_then(|v| v.as_integer())
                .and_then(|v| u64::try_from(v).ok())
                .unwrap_or(defaults.splash_delay_ms),
            require_complete_code: toml_value
                .get("otp")
                .and_then(|o| o.get("require_complete_code"))
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.require_complete_code),
            clear_login_value_on_method_switch: toml_value
                .get("login")
                .and_then(|l| l.get("clear_value_on_method_switch"))
                .and_then(|v| v.as_bool())
                .unwrap_or(defaults.clear_login_value_on_method_switch),
            log_directory: PathBuf::from(
                toml_value
                    .get("logging")
                    .and_then(|l| l.get("directory"))
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }
}
