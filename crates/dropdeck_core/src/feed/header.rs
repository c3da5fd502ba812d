//! Date section header labels.

use crate::model::date::NotificationDate;

/// Label used for the section whose date equals the injected "today".
pub const TODAY_LABEL: &str = "Today";

const LONG_DATE_FORMAT: &str = "%A, %B %-d";

/// Formats a date header relative to the caller-provided `today`.
///
/// Returns `"Today"` for the same calendar day, otherwise the en-US long
/// form `Weekday, Month day` (for example `Wednesday, May 28`).
pub fn format_date_header(date: NotificationDate, today: NotificationDate) -> String {
    if date == today {
        return TODAY_LABEL.to_string();
    }
    date.as_naive().format(LONG_DATE_FORMAT).to_string()
}
