//! Date predicates: comparisons against today and day-of-week checks.

use crate::clock::{Clock, SystemClock};
use crate::date::CalendarDate;

/// True iff `date` is the current system date.
pub fn is_today(date: CalendarDate) -> bool {
    is_today_with(date, &SystemClock)
}

/// True iff `date` equals the clock's today.
pub fn is_today_with(date: CalendarDate, clock: &impl Clock) -> bool {
    date == clock.today()
}

/// True iff `date` is strictly before the current system date.
pub fn is_past(date: CalendarDate) -> bool {
    is_past_with(date, &SystemClock)
}

/// True iff `date` is strictly before the clock's today.
pub fn is_past_with(date: CalendarDate, clock: &impl Clock) -> bool {
    date < clock.today()
}

/// True iff `date` is strictly after the current system date.
pub fn is_future(date: CalendarDate) -> bool {
    is_future_with(date, &SystemClock)
}

/// True iff `date` is strictly after the clock's today.
pub fn is_future_with(date: CalendarDate, clock: &impl Clock) -> bool {
    date > clock.today()
}

/// True iff `date` falls on a Saturday or Sunday.
pub fn is_weekend(date: CalendarDate) -> bool {
    date.weekday().is_weekend()
}

/// True iff `date` falls on a Monday through Friday.
pub fn is_weekday(date: CalendarDate) -> bool {
    !is_weekend(date)
}
