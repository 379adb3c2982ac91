//! Configuration service for loading and generating config files.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::types::default_log_path_for_config_dir;
use super::Config;
use crate::domain::FilterSpec;

/// Configuration service.
pub struct ConfigService;

impl ConfigService {
    /// Get the default configuration file path.
    /// Always uses ~/.config/event-gate/config.toml for cross-platform consistency.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("event-gate")
            .join("config.toml")
    }

    /// Load configuration from file.
    ///
    /// If `path` is `None`, uses the default path.
    /// If the file doesn't exist, creates default configuration file.
    /// Validates configuration after loading.
    /// Log path defaults to the same directory as config file.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        let path = path.map(PathBuf::from).unwrap_or_else(Self::default_path);
        let config_dir = path.parent();

        if !path.exists() {
            Self::generate_at(&path)?;
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        // If log_path was not explicitly set in config, use config file directory
        let general_default = default_log_path_for_config_dir(None);
        if config.log_path == general_default {
            config.log_path = default_log_path_for_config_dir(config_dir);
        }

        config
            .validate()
            .with_context(|| format!("Invalid configuration in {}", path.display()))?;

        Ok(config)
    }

    /// Build the FilterSpec from configuration.
    ///
    /// `filters_path` overrides the path from the config file when given. A
    /// failure here is fatal: the host must not process events against a
    /// partially-applied rule set.
    pub fn load_filter_spec(config: &Config, filters_path: Option<&Path>) -> Result<FilterSpec> {
        let path = filters_path.or(config.filters_path.as_deref());

        let raw_conditions = match path {
            Some(p) => Some(
                fs::read_to_string(p)
                    .with_context(|| format!("Failed to read filters file: {}", p.display()))?,
            ),
            None => None,
        };

        let spec = FilterSpec::build(
            raw_conditions.as_deref(),
            config.events_to_drop.as_deref(),
            config.keep_undefined_properties.as_deref(),
        )
        .with_context(|| match path {
            Some(p) => format!("Invalid filter conditions in {}", p.display()),
            None => "Invalid filter configuration".to_string(),
        })?;

        Ok(spec)
    }

    /// Generate default configuration file at the default path.
    pub fn generate_default() -> Result<()> {
        Self::generate_at(&Self::default_path())
    }

    /// Generate default configuration file at the specified path.
    pub fn generate_at(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = Self::default_config_content();
        fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Generate default configuration content with comments.
    fn default_config_content() -> String {
        r#"# event-gate configuration file

# Path to the JSON file containing filter conditions.
# The file holds an array of condition records, for example:
#   [
#     { "property": "$host", "type": "string", "operator": "not_contains", "value": "localhost" },
#     { "property": "foo", "type": "number", "operator": "gt", "value": 10 },
#     { "property": "bar", "type": "boolean", "operator": "is", "value": true }
#   ]
# Registered operators per type:
#   string:  is, is_not, contains, not_contains, regex, not_regex
#   number:  gt, lt, gte, lte, eq, neq
#   boolean: is, is_not
# filters_path = "~/.config/event-gate/filters.json"

# Comma-separated list of event names to drop unconditionally
# events_to_drop = "debug_event, internal_heartbeat"

# Set to "Yes" (case-sensitive) to treat conditions on properties missing from
# an event as satisfied; any other value drops such events (default: "No")
# keep_undefined_properties = "No"

# Enable debug logging to file (default: false)
debug = false

# Path to log directory (default: same directory as config.toml/logs)
# If --config is specified, logs go to that directory/logs
# log_path = "~/.config/event-gate/logs"
"#
        .to_string()
    }
}
