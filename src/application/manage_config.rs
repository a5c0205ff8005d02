//! Config management use case

use crate::domain::CalculationMethod;
use crate::error::{GestateError, Result};
use crate::infrastructure::config::validate_date_format;
use crate::infrastructure::Config;
use std::path::PathBuf;
use std::str::FromStr;

/// Service for managing the preferences file
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Create a new config service for the file at `path`
    pub fn new(path: PathBuf) -> Self {
        ConfigService { path }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = Config::load(&self.path)?;

        match key {
            "method" => Ok(config.method.to_string()),
            "date_format" => Ok(config.date_format),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = Config::load(&self.path)?;

        match key {
            "method" => {
                config.method = CalculationMethod::from_str(value).map_err(GestateError::Config)?;
            }
            "date_format" => {
                validate_date_format(value)?;
                config.date_format = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }

        config.save(&self.path)?;
        tracing::info!(key, value, path = %self.path.display(), "config updated");
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        Config::load(&self.path)
    }
}

fn unknown_key(key: &str) -> GestateError {
    GestateError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: method, date_format",
        key
    ))
}
