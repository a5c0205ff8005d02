//! Output formatting utilities

use crate::application::Calculation;
use crate::domain::{format_long_date, AnchorInput, CalculationMethod, GestationResult};
use crate::error::Result;
use crate::infrastructure::Config;
use serde::Serialize;

/// Format a calculation as a labelled summary for the terminal
pub fn format_summary(calc: &Calculation) -> String {
    let result = &calc.result;
    let mut output = String::new();

    // A known due date is already the "Due date" line
    if let AnchorInput::LastMenstrualPeriod(lmp) = calc.anchor {
        output.push_str(&format!(
            "{:<16} {}\n",
            format!("{}:", CalculationMethod::Lmp.label()),
            format_long_date(lmp)
        ));
    }
    output.push_str(&format!(
        "{:<16} {}\n",
        "Due date:",
        format_long_date(result.due_date)
    ));
    output.push_str(&format!(
        "{:<16} {}\n",
        "Conception date:",
        format_long_date(result.conception_date)
    ));
    output.push_str(&format!("{:<16} {}\n", "Current week:", result.current_week));
    output.push_str(&format!("{:<16} {}\n", "Days remaining:", result.days_remaining));
    if result.is_overdue() {
        output.push_str(&format!("{:<16} {}\n", "Days overdue:", result.days_overdue));
    }
    output.push_str(&format!("{:<16} {}\n", "Trimester:", result.trimester));

    output
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    method: String,
    anchor_date: String,
    #[serde(flatten)]
    result: &'a GestationResult,
}

/// Format a calculation as pretty-printed JSON
pub fn format_json(calc: &Calculation) -> Result<String> {
    let output = JsonOutput {
        method: calc.anchor.method().to_string(),
        anchor_date: calc.anchor.date().format("%Y-%m-%d").to_string(),
        result: &calc.result,
    };
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format every config value, one `key = value` per line
pub fn format_config(config: &Config) -> String {
    format!(
        "method = {}\ndate_format = {}\n",
        config.method, config.date_format
    )
}
