//! Configuration validation.

use anyhow::{bail, Result};

use super::Config;

/// Validate configuration.
///
/// Filter conditions themselves are validated separately when the FilterSpec
/// is built; this only checks the shape of the config file.
pub fn validate(config: &Config) -> Result<()> {
    // Validate log path
    if !config.log_path.as_os_str().is_empty() && config.log_path.to_string_lossy().contains('\0') {
        bail!("Invalid log_path: contains null character");
    }

    // Validate filters path
    if let Some(path) = &config.filters_path {
        if path.as_os_str().is_empty() {
            bail!("filters_path cannot be empty when set");
        }
    }

    // Validate drop list: names must survive trimming
    if let Some(raw) = &config.events_to_drop {
        if !raw.is_empty() && raw.split(',').all(|name| name.trim().is_empty()) {
            bail!("events_to_drop: no usable event names in '{}'", raw);
        }
    }

    Ok(())
}
