// Chunk: docs/chunks/editor_config - JSON editor configuration

//! Editor configuration.
//!
//! Settings live in a small JSON file:
//! - macOS: `~/Library/Application Support/gap-edit/config.json`
//! - Linux: `~/.config/gap-edit/config.json`
//!
//! Every field has a default, so a missing file or a file that omits a field
//! still yields a usable configuration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use gap_edit_buffer::DEFAULT_CAPACITY_HINT;

/// Application name used for the config directory.
const APP_NAME: &str = "gap-edit";

/// Config file name.
const CONFIG_FILENAME: &str = "config.json";

/// Errors that can occur while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Tunables for an editing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Capacity hint for every buffer the session creates.
    pub capacity_hint: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            capacity_hint: DEFAULT_CAPACITY_HINT,
        }
    }
}

impl EditorConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads the user's configuration, falling back to defaults.
    ///
    /// A missing file is silent; an unreadable or malformed one is logged.
    pub fn load_or_default() -> Self {
        let Some(path) = config_file_path() else {
            return Self::default();
        };
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "ignoring config file");
                Self::default()
            }
        }
    }
}

/// Returns the path to the config file, if a config directory exists.
pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_NAME).join(CONFIG_FILENAME))
}
