//! Configuration management

use crate::domain::{CalculationMethod, ISO_DATE_FORMAT};
use crate::error::{GestateError, Result};
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at the config file
pub const CONFIG_ENV_VAR: &str = "GESTATE_CONFIG";

/// Config file used when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "gestate.toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub method: CalculationMethod,
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            method: CalculationMethod::default(),
            date_format: ISO_DATE_FORMAT.to_string(),
        }
    }
}

impl Config {
    /// Pick the config path: explicit flag, then environment, then default file
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        if let Some(path) = explicit {
            return path.to_path_buf();
        }

        std::env::var_os(CONFIG_ENV_VAR)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load config from `path`; a missing file means defaults
    pub fn load(path: &Path) -> Result<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(GestateError::Io(e)),
        };

        let config: Config = toml::from_str(&contents).map_err(|e| {
            GestateError::Config(format!(
                "Failed to parse {}: {}",
                path.display(),
                e
            ))
        })?;
        validate_date_format(&config.date_format)?;

        Ok(config)
    }

    /// Save config to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }
}

/// Reject strftime patterns chrono cannot interpret
pub fn validate_date_format(format: &str) -> Result<()> {
    if format.trim().is_empty() {
        return Err(GestateError::Config(
            "Invalid date format: must not be empty".to_string(),
        ));
    }

    if StrftimeItems::new(format).any(|item| matches!(item, Item::Error)) {
        return Err(GestateError::Config(format!(
            "Invalid date format: '{}'",
            format
        )));
    }

    Ok(())
}
