//! Anchor dates and calculation methods

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Date format accepted when no other format matches
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Calculation method determines which kind of date the user supplies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CalculationMethod {
    /// First day of the last menstrual period
    #[default]
    Lmp,
    /// A due date already estimated elsewhere
    DueDate,
}

impl CalculationMethod {
    /// Pair this method with a date to form an anchor
    pub fn anchor(&self, date: NaiveDate) -> AnchorInput {
        match self {
            CalculationMethod::Lmp => AnchorInput::LastMenstrualPeriod(date),
            CalculationMethod::DueDate => AnchorInput::KnownDueDate(date),
        }
    }

    /// Human-readable label for the date this method expects
    pub fn label(&self) -> &'static str {
        match self {
            CalculationMethod::Lmp => "Last period",
            CalculationMethod::DueDate => "Due date",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculationMethod::Lmp => "lmp",
            CalculationMethod::DueDate => "due-date",
        }
    }
}

impl fmt::Display for CalculationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculationMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lmp" | "last-period" => Ok(CalculationMethod::Lmp),
            "due" | "due-date" | "duedate" => Ok(CalculationMethod::DueDate),
            _ => Err(format!(
                "Invalid method: '{}'. Valid methods are: lmp, due",
                s
            )),
        }
    }
}

/// The single date a calculation starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnchorInput {
    LastMenstrualPeriod(NaiveDate),
    KnownDueDate(NaiveDate),
}

impl AnchorInput {
    pub fn method(&self) -> CalculationMethod {
        match self {
            AnchorInput::LastMenstrualPeriod(_) => CalculationMethod::Lmp,
            AnchorInput::KnownDueDate(_) => CalculationMethod::DueDate,
        }
    }

    pub fn date(&self) -> NaiveDate {
        match self {
            AnchorInput::LastMenstrualPeriod(date) | AnchorInput::KnownDueDate(date) => *date,
        }
    }
}

/// Parse a calendar date, trying `format` first and ISO `YYYY-MM-DD` second.
///
/// Returns `None` for anything that is not a real calendar date; callers treat
/// that as "no result" rather than an error.
pub fn parse_date(input: &str, format: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(trimmed, format)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, ISO_DATE_FORMAT))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!(
            CalculationMethod::from_str("lmp").unwrap(),
            CalculationMethod::Lmp
        );
        assert_eq!(
            CalculationMethod::from_str("LMP").unwrap(),
            CalculationMethod::Lmp
        );
        assert_eq!(
            CalculationMethod::from_str("due").unwrap(),
            CalculationMethod::DueDate
        );
        assert_eq!(
            CalculationMethod::from_str("Due-Date").unwrap(),
            CalculationMethod::DueDate
        );
        assert!(CalculationMethod::from_str("ultrasound").is_err());
    }

    #[test]
    fn test_method_display_round_trips() {
        for method in [CalculationMethod::Lmp, CalculationMethod::DueDate] {
            assert_eq!(
                CalculationMethod::from_str(&method.to_string()).unwrap(),
                method
            );
        }
    }

    #[test]
    fn test_method_anchor() {
        let d = date(2025, 1, 1);
        assert_eq!(
            CalculationMethod::Lmp.anchor(d),
            AnchorInput::LastMenstrualPeriod(d)
        );
        assert_eq!(
            CalculationMethod::DueDate.anchor(d),
            AnchorInput::KnownDueDate(d)
        );
        assert_eq!(AnchorInput::KnownDueDate(d).method(), CalculationMethod::DueDate);
        assert_eq!(AnchorInput::KnownDueDate(d).date(), d);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_date("2025-01-01", ISO_DATE_FORMAT), Some(date(2025, 1, 1)));
        assert_eq!(parse_date("  2025-12-25 ", ISO_DATE_FORMAT), Some(date(2025, 12, 25)));
    }

    #[test]
    fn test_parse_custom_format_with_iso_fallback() {
        assert_eq!(parse_date("17-01-2025", "%d-%m-%Y"), Some(date(2025, 1, 17)));
        assert_eq!(parse_date("2025-01-17", "%d-%m-%Y"), Some(date(2025, 1, 17)));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_date("", ISO_DATE_FORMAT), None);
        assert_eq!(parse_date("   ", ISO_DATE_FORMAT), None);
        assert_eq!(parse_date("2025-02-30", ISO_DATE_FORMAT), None);
        assert_eq!(parse_date("2025-13-01", ISO_DATE_FORMAT), None);
        assert_eq!(parse_date("tomorrow", ISO_DATE_FORMAT), None);
    }
}
