//! Settings for routeset-based services.
//!
//! This module provides the [`Settings`] struct with sensible defaults and
//! TOML loading. Services embedding the registry typically load settings at
//! startup and pass them to [`setup_logging`](crate::logging::setup_logging).

use serde::{Deserialize, Serialize};

/// Service configuration.
///
/// # Examples
///
/// ```
/// use routeset_core::Settings;
///
/// let settings = Settings::from_toml_str(r#"
///     debug = true
///     log_level = "debug"
/// "#).unwrap();
/// assert!(settings.debug);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whether the service runs in debug mode. Controls the log format.
    pub debug: bool,
    /// The log level filter (e.g. "debug", "info", "warn", "error").
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: false,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    /// Parses settings from a TOML string. Missing keys fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns a `toml::de::Error` if the content is not valid TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}
