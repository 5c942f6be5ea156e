//! Day boundaries and conversion between epoch milliseconds and local
//! wall-clock time.

use crate::date::CalendarDate;
use crate::datetime::{LocalDateTime, TimeOfDay};
use crate::error::DateError;
use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeDelta, TimeZone, Utc};

/// The first second of `date`: 00:00:00 on the same calendar day.
pub fn start_of_day(date: CalendarDate) -> LocalDateTime {
    LocalDateTime::new(date, TimeOfDay::MIDNIGHT)
}

/// The last whole second of `date`: 23:59:59 on the same calendar day.
///
/// Deliberately not 23:59:59.999; inclusive-range queries want the last
/// whole second.
pub fn end_of_day(date: CalendarDate) -> LocalDateTime {
    LocalDateTime::new(date, TimeOfDay::LAST_SECOND)
}

/// Converts UTC epoch milliseconds into wall-clock time in the system's
/// local timezone.
///
/// Sub-second milliseconds floor to the containing second, so negative
/// timestamps land on the correct earlier second.
///
/// # Errors
/// Returns `DateError::TimestampOutOfRange` when the local result falls
/// outside the supported years 1..=9999.
pub fn from_timestamp(epoch_millis: i64) -> Result<LocalDateTime, DateError> {
    let utc: DateTime<Utc> = DateTime::from_timestamp_millis(epoch_millis)
        .ok_or(DateError::TimestampOutOfRange {
            millis: epoch_millis,
        })?;
    let local = utc.with_timezone(&Local).naive_local();
    LocalDateTime::try_from(local).map_err(|_| DateError::TimestampOutOfRange {
        millis: epoch_millis,
    })
}

/// Interprets `datetime` as wall-clock time in the system's local timezone
/// and returns the UTC epoch milliseconds it corresponds to.
///
/// Total over its input: a DST fold resolves to the earlier instant, and a
/// wall time inside a DST gap resolves to the instant just after the
/// transition. Away from transitions,
/// `from_timestamp(to_timestamp(t)) == t` for any whole-second `t`.
pub fn to_timestamp(datetime: LocalDateTime) -> i64 {
    let naive = NaiveDateTime::from(datetime);
    match Local.from_local_datetime(&naive) {
        LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
            instant.timestamp_millis()
        }
        // Inside a gap: an hour later is on the far side of the transition
        // and maps to the same instant the skipped wall time would.
        LocalResult::None => match Local.from_local_datetime(&(naive + TimeDelta::hours(1))) {
            LocalResult::Single(instant) | LocalResult::Ambiguous(instant, _) => {
                instant.timestamp_millis()
            }
            LocalResult::None => naive.and_utc().timestamp_millis(),
        },
    }
}
