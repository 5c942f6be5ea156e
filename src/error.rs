/// Error type for all fallible operations in this crate.
///
/// Construction is the only failure boundary: once a value exists it is
/// valid, and the utility functions over it are total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Returned when a year is 0, negative, or greater than `MAX_YEAR`.
    #[error("invalid year: {year} (must be 1..=9999)")]
    InvalidYear {
        /// The invalid year value that was provided.
        year: i32,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day is 0 or past the end of the given month.
    #[error("invalid day: {day} for {year}-{month:02} (max {max_day})")]
    InvalidDay {
        /// The year the day was checked against.
        year: u16,
        /// The month the day was checked against.
        month: u8,
        /// The invalid day number that was provided.
        day: u8,
        /// The maximum valid day for the given year and month.
        max_day: u8,
    },

    /// Returned when any time-of-day component is out of range.
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// The hour that was provided.
        hour: u8,
        /// The minute that was provided.
        minute: u8,
        /// The second that was provided.
        second: u8,
    },

    /// Returned when an epoch-millisecond conversion leaves the supported
    /// calendar range (years 1..=9999).
    #[error("timestamp out of supported range: {millis} ms")]
    TimestampOutOfRange {
        /// The epoch-millisecond value that was provided.
        millis: i64,
    },

    /// Returned when a string does not match the expected format.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// Returned when a string to parse is empty.
    #[error("empty input")]
    EmptyInput,
}
