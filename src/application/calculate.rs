//! Calculate milestones use case

use crate::application::state::AppState;
use crate::domain::{AnchorInput, CalculationMethod, GestationResult};
use crate::error::{GestateError, Result};
use crate::infrastructure::Config;
use chrono::NaiveDate;
use tracing::{debug, info};

/// A completed calculation with the anchor it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculation {
    pub anchor: AnchorInput,
    pub result: GestationResult,
}

/// Service turning raw user input into a gestation result
pub struct CalculateService {
    config: Config,
}

impl CalculateService {
    /// Create a new calculate service
    pub fn new(config: Config) -> Self {
        CalculateService { config }
    }

    /// Parse `raw` for `method` (or the configured method) and compute as of `now`
    pub fn execute(
        &self,
        method: Option<CalculationMethod>,
        raw: &str,
        now: NaiveDate,
    ) -> Result<Calculation> {
        let method = method.unwrap_or(self.config.method);
        let state = AppState::new(method)
            .with_date_format(self.config.date_format.clone())
            .with_input(raw);

        let anchor = state
            .anchor()
            .ok_or_else(|| GestateError::InvalidDate(raw.to_string()))?;
        debug!(%method, anchor = %anchor.date(), %now, "computing gestation");

        let view = state.view(now);
        let result = view
            .result
            .ok_or(GestateError::DateOutOfRange(anchor.date()))?;

        info!(
            due_date = %result.due_date,
            week = result.current_week,
            trimester = %result.trimester,
            "gestation computed"
        );

        Ok(Calculation { anchor, result })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_execute_uses_configured_method() {
        let service = CalculateService::new(Config {
            method: CalculationMethod::DueDate,
            ..Config::default()
        });

        let calc = service.execute(None, "2025-12-25", date(2025, 12, 25)).unwrap();
        assert_eq!(calc.anchor, AnchorInput::KnownDueDate(date(2025, 12, 25)));
        assert_eq!(calc.result.due_date, date(2025, 12, 25));
        assert_eq!(calc.result.days_remaining, 0);
    }

    #[test]
    fn test_execute_method_override() {
        let service = CalculateService::new(Config::default());

        let calc = service
            .execute(Some(CalculationMethod::DueDate), "2025-10-08", date(2025, 1, 1))
            .unwrap();
        assert_eq!(calc.result.conception_date, date(2025, 1, 15));
        assert_eq!(calc.result.current_week, 0);
    }

    #[test]
    fn test_execute_configured_format() {
        let service = CalculateService::new(Config {
            date_format: "%d-%m-%Y".to_string(),
            ..Config::default()
        });

        let calc = service.execute(None, "01-01-2025", date(2025, 4, 9)).unwrap();
        assert_eq!(calc.result.current_week, 14);
    }

    #[test]
    fn test_execute_invalid_date() {
        let service = CalculateService::new(Config::default());

        match service.execute(None, "not-a-date", date(2025, 1, 1)).unwrap_err() {
            GestateError::InvalidDate(input) => assert_eq!(input, "not-a-date"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }
}
