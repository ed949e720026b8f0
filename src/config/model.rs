// src/config/model.rs

use serde::{Deserialize, Serialize};

/// Top-level configuration as read from a TOML file.
///
/// This is the whole document:
///
/// ```toml
/// [watch]
/// directories = ["lib"]
/// device = "chrome"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Watch targets and launch device from `[watch]`.
    pub watch: WatchSection,
}

/// `[watch]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchSection {
    /// Directories to watch for changes, in registration order.
    ///
    /// Directories that do not exist at startup are skipped with a warning.
    #[serde(default = "default_directories")]
    pub directories: Vec<String>,

    /// Device identifier passed to `flutter run` / `flutter attach` via `-d`.
    #[serde(default = "default_device")]
    pub device: String,
}

fn default_directories() -> Vec<String> {
    vec!["lib".to_string()]
}

fn default_device() -> String {
    "chrome".to_string()
}

impl Default for WatchSection {
    fn default() -> Self {
        Self {
            directories: default_directories(),
            device: default_device(),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            watch: WatchSection::default(),
        }
    }
}
