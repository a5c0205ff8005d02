//! Domain layer - Gestational date calculation and share text

pub mod anchor;
pub mod gestation;
pub mod share;

pub use anchor::{parse_date, AnchorInput, CalculationMethod, ISO_DATE_FORMAT};
pub use gestation::{compute, GestationResult, Trimester};
pub use share::{format_long_date, format_share_text, share_payload, SharePayload};
