/// Utilities for date and time formatting
///
/// Provides the "last updated" stamp shown in the dashboard header
use chrono::NaiveDateTime;

/// Format a local timestamp for the header
/// Example: 2026-10-18 14:05 -> "Last Updated: Sun, Oct 18, 2026, 02:05 PM"
pub fn format_last_updated(at: &NaiveDateTime) -> String {
    format!("Last Updated: {}", at.format("%a, %b %-d, %Y, %I:%M %p"))
}

/// Current local time, as shown in the header
pub fn now_local() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
