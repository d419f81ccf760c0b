//! Calendar date helpers.
//!
//! # Responsibility
//! - Fix the calendar representation used across records and views.
//! - Provide the weekly-meeting date computation for the dashboard.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Calendar date attached to every record.
///
/// Serialized as an ISO `YYYY-MM-DD` string in stored payloads, which also
/// makes the derived ordering match lexicographic ordering of the stored
/// form.
pub type CalendarDate = NaiveDate;

/// Returns the date of the next weekly meeting (Friday) on or after `from`.
///
/// A `from` that already falls on a Friday is returned unchanged.
pub fn next_meeting(from: CalendarDate) -> CalendarDate {
    let days_ahead = (Weekday::Fri.num_days_from_monday() + 7
        - from.weekday().num_days_from_monday())
        % 7;
    from + Duration::days(i64::from(days_ahead))
}
