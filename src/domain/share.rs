//! Shareable summaries of a gestation result

use crate::domain::gestation::GestationResult;
use chrono::NaiveDate;
use serde::Serialize;

/// Title used for native share targets
pub const SHARE_TITLE: &str = "My Pregnancy Timeline";

/// Long date form, e.g. "Wednesday, October 8, 2025"
const LONG_DATE_FORMAT: &str = "%A, %B %-d, %Y";

/// Render a date in the long human-readable form used for sharing
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

/// Build the emoji-annotated summary for a result.
///
/// An absent result yields an empty string.
pub fn format_share_text(result: Option<&GestationResult>) -> String {
    let Some(result) = result else {
        return String::new();
    };

    with_title(SHARE_TITLE, &share_body(result))
}

/// The milestone lines without the title line
fn share_body(result: &GestationResult) -> String {
    format!(
        "📅 Due Date: {}\n\
        💕 Conception Date: {}\n\
        📊 Current Week: {}\n\
        ⏳ Days Remaining: {}\n\
        🌸 Trimester: {}",
        format_long_date(result.due_date),
        format_long_date(result.conception_date),
        result.current_week,
        result.days_remaining,
        result.trimester.name(),
    )
}

fn with_title(title: &str, body: &str) -> String {
    format!("🤰 {}\n{}", title, body)
}

/// Title and body handed to a native share sheet.
///
/// Share targets show `title` themselves, so `text` holds only the milestones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
}

impl SharePayload {
    /// Text to copy when no share target is available
    pub fn clipboard_text(&self) -> String {
        with_title(&self.title, &self.text)
    }
}

pub fn share_payload(result: Option<&GestationResult>) -> Option<SharePayload> {
    result.map(|r| SharePayload {
        title: SHARE_TITLE.to_string(),
        text: share_body(r),
    })
}
