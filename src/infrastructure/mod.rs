//! Infrastructure layer - Preferences file

pub mod config;

pub use config::Config;
