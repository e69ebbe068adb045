//! User configuration read from `config.json` in the config directory.

use crate::core::dirs::get_config_directory;
use crate::core::error::{GitBrowserError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "config.json";
const DEFAULT_LABEL_WIDTH: u16 = 10;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BrowserConfig {
    /// Pager command line, e.g. `less -R`.
    pub pager: Option<String>,
    /// Colored style table; `false` selects the monochrome one.
    pub colors: bool,
    /// Width of the kind label column.
    pub label_width: u16,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            pager: None,
            colors: true,
            label_width: DEFAULT_LABEL_WIDTH,
        }
    }
}

impl BrowserConfig {
    pub fn config_path() -> PathBuf {
        get_config_directory().join(CONFIG_FILE)
    }

    /// Load the user's configuration, falling back to defaults when there is none.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            log::debug!("no config at {}, using defaults", config_file.display());
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(config_file)?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| GitBrowserError::invalid_config(config_file, e))?;
        log::debug!("loaded config from {}: {config:?}", config_file.display());
        Ok(config)
    }
}
