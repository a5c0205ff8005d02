//! gestate - Pregnancy milestone calculator
//!
//! Estimates due date, conception date, gestational week and trimester from
//! either the last menstrual period or a known due date, and renders a
//! shareable summary.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use domain::{compute, format_share_text, AnchorInput, GestationResult, Trimester};
pub use error::GestateError;
