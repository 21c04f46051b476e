//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit
//! path). A missing file yields defaults; an unreadable or invalid file
//! yields defaults plus a warning for the caller to log.

use std::fs;
use std::path::{Path, PathBuf};

mod types;

pub use types::{
    Config, DEFAULT_BASE_URL, DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_QUERY_CHARS, DEFAULT_TIMEOUT_MS,
    SearchConfig, ServiceConfig,
};

use crate::error::SearchError;

const APP_DIR: &str = "catalog-search";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of loading the configuration
#[derive(Debug)]
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Default config file location, if the platform has a config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// Load configuration from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    let path = match path.map(Path::to_path_buf).or_else(default_config_path) {
        Some(p) => p,
        None => {
            return ConfigResult {
                config: Config::default(),
                warning: None,
            };
        }
    };

    if !path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    match read_config(&path) {
        Ok(config) => ConfigResult {
            config,
            warning: None,
        },
        Err(e) => ConfigResult {
            config: Config::default(),
            warning: Some(format!("{} ({}), using defaults", e, path.display())),
        },
    }
}

fn read_config(path: &Path) -> Result<Config, SearchError> {
    let content = fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| SearchError::Config(e.message().to_string()))
}
