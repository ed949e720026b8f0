// src/config/validate.rs

use crate::config::model::ConfigFile;
use crate::errors::{FlickerError, Result};

/// Run basic semantic validation against a loaded configuration.
///
/// This checks:
/// - `[watch].device` is non-empty (it is passed to `flutter run -d`)
/// - `[watch].directories` lists at least one directory
///
/// Whether the listed directories actually exist is checked later, when the
/// watcher registers them; missing directories are a warning, not an error.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    if cfg.watch.device.trim().is_empty() {
        return Err(FlickerError::Config(
            "[watch].device must not be empty".to_string(),
        ));
    }

    if cfg.watch.directories.is_empty() {
        return Err(FlickerError::Config(
            "[watch].directories must list at least one directory".to_string(),
        ));
    }

    Ok(())
}
