//! Human-readable formatting with a pinned invariant English locale.

use crate::date::CalendarDate;
use crate::datetime::LocalDateTime;

/// Renders a date as `"{FullMonthName} {day:02}, {year}"`,
/// e.g. `"January 15, 2024"`.
///
/// Month names come from the crate's invariant English table, never from
/// the environment locale.
pub fn readable_date(date: CalendarDate) -> String {
    format!(
        "{} {:02}, {}",
        date.month_typed().name(),
        date.day(),
        date.year()
    )
}

/// Renders a date-time as
/// `"{FullMonthName} {day:02}, {year} at {hour12}:{minute:02} {AM|PM}"`,
/// e.g. `"January 15, 2024 at 3:30 PM"`.
///
/// The hour is on the 12-hour clock with no leading zero; midnight is
/// `12:.. AM` and noon is `12:.. PM`.
pub fn readable_datetime(datetime: LocalDateTime) -> String {
    let time = datetime.time();
    let (hour12, marker) = match time.hour() {
        0 => (12, "AM"),
        hour @ 1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        hour => (hour - 12, "PM"),
    };
    format!(
        "{} at {}:{:02} {}",
        readable_date(datetime.date()),
        hour12,
        time.minute(),
        marker
    )
}
