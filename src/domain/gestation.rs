//! Gestational date calculation

use crate::domain::anchor::AnchorInput;
use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Days from LMP to the estimated due date (Naegele's rule)
pub const PREGNANCY_DAYS: i64 = 280;

/// Days from LMP to the estimated conception date
pub const CONCEPTION_OFFSET_DAYS: i64 = 14;

/// Last completed week that still counts as the first trimester
const FIRST_TRIMESTER_LAST_WEEK: u32 = 12;

/// Last completed week that still counts as the second trimester
const SECOND_TRIMESTER_LAST_WEEK: u32 = 27;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trimester {
    First,
    Second,
    Third,
}

impl Trimester {
    /// Trimester for a number of completed gestational weeks
    pub fn for_week(week: u32) -> Self {
        if week <= FIRST_TRIMESTER_LAST_WEEK {
            Trimester::First
        } else if week <= SECOND_TRIMESTER_LAST_WEEK {
            Trimester::Second
        } else {
            Trimester::Third
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Trimester::First => "First",
            Trimester::Second => "Second",
            Trimester::Third => "Third",
        }
    }
}

impl fmt::Display for Trimester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Milestones derived from an anchor date as of a given day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GestationResult {
    pub due_date: NaiveDate,
    pub conception_date: NaiveDate,
    /// Completed weeks since LMP, never negative
    pub current_week: u32,
    /// Days until the due date, clamped at zero once it has passed
    pub days_remaining: u32,
    /// Days past the due date, zero until it has passed
    pub days_overdue: u32,
    pub trimester: Trimester,
}

impl GestationResult {
    /// Compute milestones for `anchor` as of the calendar day `now`.
    ///
    /// Returns `None` when the derived dates fall outside the range chrono
    /// can represent.
    pub fn compute(anchor: AnchorInput, now: NaiveDate) -> Option<Self> {
        let lmp = match anchor {
            AnchorInput::LastMenstrualPeriod(lmp) => lmp,
            AnchorInput::KnownDueDate(due) => {
                due.checked_sub_signed(Duration::days(PREGNANCY_DAYS))?
            }
        };

        let due_date = lmp.checked_add_signed(Duration::days(PREGNANCY_DAYS))?;
        let conception_date = lmp.checked_add_signed(Duration::days(CONCEPTION_OFFSET_DAYS))?;

        let days_since_lmp = now.signed_duration_since(lmp).num_days();
        let days_until_due = due_date.signed_duration_since(now).num_days();

        let current_week = clamp_to_u32(days_since_lmp.div_euclid(7));

        Some(GestationResult {
            due_date,
            conception_date,
            current_week,
            days_remaining: clamp_to_u32(days_until_due),
            days_overdue: clamp_to_u32(-days_until_due),
            trimester: Trimester::for_week(current_week),
        })
    }

    /// Same as [`GestationResult::compute`], ignoring the time of day of `now`.
    pub fn compute_at(anchor: AnchorInput, now: NaiveDateTime) -> Option<Self> {
        Self::compute(anchor, now.date())
    }

    pub fn is_overdue(&self) -> bool {
        self.days_overdue > 0
    }
}

/// Free-function form of [`GestationResult::compute`]
pub fn compute(anchor: AnchorInput, now: NaiveDate) -> Option<GestationResult> {
    GestationResult::compute(anchor, now)
}

fn clamp_to_u32(days: i64) -> u32 {
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}
