//! Application layer - Use cases and orchestration

pub mod calculate;
pub mod manage_config;
pub mod state;

pub use calculate::{Calculation, CalculateService};
pub use manage_config::ConfigService;
pub use state::{AppState, View};
