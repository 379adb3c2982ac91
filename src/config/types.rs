//! Configuration data types.

use anyhow::Result;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::validation;

/// Main configuration structure.
///
/// The filter-related fields are carried as raw strings exactly as the
/// operator wrote them; `FilterSpec::build` owns their interpretation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the JSON file containing filter conditions (optional)
    pub filters_path: Option<PathBuf>,

    /// Comma-separated list of event names to drop unconditionally (optional)
    pub events_to_drop: Option<String>,

    /// "Yes" keeps conditions on absent properties satisfied; anything else
    /// (including absence) treats them as unsatisfied
    pub keep_undefined_properties: Option<String>,

    /// Enable debug logging to file
    pub debug: bool,

    /// Path to log directory
    pub log_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            filters_path: None,
            events_to_drop: None,
            keep_undefined_properties: None,
            debug: false,
            log_path: default_log_path(),
        }
    }
}

impl Config {
    /// Validate configuration and return errors if invalid.
    /// Delegates to the validation module.
    pub fn validate(&self) -> Result<()> {
        validation::validate(self)
    }
}

/// Get default log path (relative to config directory).
/// This returns a placeholder; the actual path is set by ConfigService based on config file location.
pub fn default_log_path() -> PathBuf {
    default_log_path_for_config_dir(None)
}

/// Get log path based on config directory.
pub fn default_log_path_for_config_dir(config_dir: Option<&Path>) -> PathBuf {
    config_dir
        .map(|d| d.to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config")
                .join("event-gate")
        })
        .join("logs")
}
