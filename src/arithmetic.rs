//! Date arithmetic: day and year distances, age, business days, and
//! month boundaries.

use crate::clock::{Clock, SystemClock};
use crate::date::CalendarDate;
use crate::types::Day;

/// Signed count of whole days from `start` to `end` (`end - start`).
///
/// Exact calendar-day distance; negative when `end` precedes `start`, and
/// antisymmetric: `days_between(a, b) == -days_between(b, a)`.
pub fn days_between(start: CalendarDate, end: CalendarDate) -> i64 {
    end.day_number() - start.day_number()
}

/// Signed count of complete calendar years from `start` to `end`,
/// truncated toward zero.
///
/// A year counts only once the anniversary of `start` has been reached,
/// so 2020-06-01 to 2024-05-31 is 3 years, not 4. A Feb 29 anniversary
/// completes on Feb 29 in leap years and only after Feb 28 in common years.
pub fn years_between(start: CalendarDate, end: CalendarDate) -> i64 {
    if end < start {
        return -years_between(end, start);
    }
    let mut years = i64::from(end.year()) - i64::from(start.year());
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    years
}

/// Complete years elapsed from `birth_date` to the current system date.
pub fn calculate_age(birth_date: CalendarDate) -> i64 {
    calculate_age_with(birth_date, &SystemClock)
}

/// Complete years elapsed from `birth_date` to the clock's today.
pub fn calculate_age_with(birth_date: CalendarDate, clock: &impl Clock) -> i64 {
    years_between(birth_date, clock.today())
}

/// The earliest date strictly after `date` that falls on a weekday.
///
/// Skips at most two weekend days. Returns `None` only when stepping
/// forward would leave the supported calendar range (past 9999-12-31).
pub fn next_business_day(date: CalendarDate) -> Option<CalendarDate> {
    let mut next = date.next_day()?;
    while next.weekday().is_weekend() {
        next = next.next_day()?;
    }
    Some(next)
}

/// The first day of `date`'s month.
pub fn first_day_of_month(date: CalendarDate) -> CalendarDate {
    CalendarDate::from_parts(date.year_typed(), date.month_typed(), Day::FIRST)
}

/// The last day of `date`'s month, accounting for leap years.
pub fn last_day_of_month(date: CalendarDate) -> CalendarDate {
    let last = Day::last_of(date.year(), date.month());
    CalendarDate::from_parts(date.year_typed(), date.month_typed(), last)
}
