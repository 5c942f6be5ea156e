//! Construction helpers for test bodies. Inputs are literals that are
//! known valid, so panicking on failure is fine here.

use crate::date::CalendarDate;
use crate::datetime::{LocalDateTime, TimeOfDay};

pub fn date(year: u16, month: u8, day: u8) -> CalendarDate {
    CalendarDate::new(year, month, day).unwrap()
}

pub fn time(hour: u8, minute: u8, second: u8) -> TimeOfDay {
    TimeOfDay::new(hour, minute, second).unwrap()
}

pub fn datetime(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> LocalDateTime {
    LocalDateTime::new(date(year, month, day), time(hour, minute, second))
}
