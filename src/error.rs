//! Error types for gestate

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for gestate application
#[derive(Debug, Error)]
pub enum GestateError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(NaiveDate),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GestateError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GestateError::InvalidDate(_) => 3,
            GestateError::DateOutOfRange(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            GestateError::InvalidDate(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Suggestions:\n\
                    • Use the YYYY-MM-DD format (e.g., 2025-01-01)\n\
                    • Check the configured format: gestate config date_format\n\
                    • Make sure the day exists in that month",
                    input
                )
            }
            GestateError::DateOutOfRange(date) => {
                format!(
                    "Date out of range: {}\n\n\
                    The estimated dates for this anchor cannot be represented.\n\
                    Use a date within a few thousand years of today.",
                    date
                )
            }
            GestateError::Config(msg) => {
                if msg.contains("Invalid method") {
                    format!(
                        "{}\n\n\
                        Valid methods: lmp, due\n\
                        Example: gestate config method due",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using GestateError
pub type Result<T> = std::result::Result<T, GestateError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(GestateError::InvalidDate("x".to_string()).exit_code(), 3);
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        assert_eq!(GestateError::DateOutOfRange(date).exit_code(), 4);
        assert_eq!(GestateError::Config("bad".to_string()).exit_code(), 1);
    }

    #[test]
    fn test_invalid_date_suggestions() {
        let err = GestateError::InvalidDate("2025-02-30".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("'2025-02-30'"));
        assert!(msg.contains("YYYY-MM-DD"));
        assert!(msg.contains("gestate config date_format"));
    }

    #[test]
    fn test_out_of_range_message() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let msg = GestateError::DateOutOfRange(date).display_with_suggestions();
        assert!(msg.contains("2025-01-01"));
        assert!(msg.contains("cannot be represented"));
    }

    #[test]
    fn test_config_invalid_method_suggestions() {
        let err = GestateError::Config("Invalid method: 'xyz'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("Valid methods: lmp, due"));
        assert!(msg.contains("gestate config method due"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = GestateError::Config("Unknown config key".to_string());
        assert_eq!(err.display_with_suggestions(), "Unknown config key");

        let io = GestateError::Io(std::io::Error::other("disk full"));
        assert_eq!(io.display_with_suggestions(), "IO error: disk full");
    }
}
