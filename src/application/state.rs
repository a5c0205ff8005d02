//! Immutable application state and its derived view

use crate::domain::{
    format_share_text, parse_date, AnchorInput, CalculationMethod, GestationResult,
    ISO_DATE_FORMAT,
};
use chrono::NaiveDate;

/// Everything the user has entered so far.
///
/// Each update returns a new state; the view is derived from it on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    method: CalculationMethod,
    lmp_input: String,
    due_date_input: String,
    date_format: String,
}

impl Default for AppState {
    fn default() -> Self {
        AppState {
            method: CalculationMethod::default(),
            lmp_input: String::new(),
            due_date_input: String::new(),
            date_format: ISO_DATE_FORMAT.to_string(),
        }
    }
}

/// What a caller renders for a given state and day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub method: CalculationMethod,
    pub anchor: Option<AnchorInput>,
    pub result: Option<GestationResult>,
    pub share_text: String,
}

impl AppState {
    pub fn new(method: CalculationMethod) -> Self {
        AppState {
            method,
            ..AppState::default()
        }
    }

    pub fn method(&self) -> CalculationMethod {
        self.method
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Raw input for the selected method
    pub fn input(&self) -> &str {
        match self.method {
            CalculationMethod::Lmp => &self.lmp_input,
            CalculationMethod::DueDate => &self.due_date_input,
        }
    }

    /// Switch method, keeping what was typed for each one
    pub fn with_method(self, method: CalculationMethod) -> Self {
        AppState { method, ..self }
    }

    /// Replace the raw input of the selected method
    pub fn with_input(self, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let method = self.method;
        match method {
            CalculationMethod::Lmp => AppState {
                lmp_input: raw,
                ..self
            },
            CalculationMethod::DueDate => AppState {
                due_date_input: raw,
                ..self
            },
        }
    }

    pub fn with_date_format(self, format: impl Into<String>) -> Self {
        AppState {
            date_format: format.into(),
            ..self
        }
    }

    /// The anchor for the selected method, if its input parses
    pub fn anchor(&self) -> Option<AnchorInput> {
        parse_date(self.input(), &self.date_format).map(|date| self.method.anchor(date))
    }

    /// Derive the view as of `now`
    pub fn view(&self, now: NaiveDate) -> View {
        let anchor = self.anchor();
        let result = anchor.and_then(|a| GestationResult::compute(a, now));

        View {
            method: self.method,
            anchor,
            result,
            share_text: format_share_text(result.as_ref()),
        }
    }
}
