use crate::consts::{DATETIME_SEPARATOR, MAX_HOUR, MAX_MINUTE, MAX_SECOND, TIME_SEPARATOR};
use crate::date::{CalendarDate, parse_u8};
use crate::error::DateError;
use crate::prelude::*;
use chrono::{NaiveDate, NaiveDateTime, Timelike};
use std::str::FromStr;

/// A whole-second wall-clock time of day, validated at construction.
///
/// Displays as `HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:02}:{:02}:{:02}", "hour", "minute", "second")]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
    second: u8,
}

impl TimeOfDay {
    /// 00:00:00, the first second of a day.
    pub const MIDNIGHT: Self = Self {
        hour: 0,
        minute: 0,
        second: 0,
    };

    /// 23:59:59, the last whole second of a day.
    pub const LAST_SECOND: Self = Self {
        hour: MAX_HOUR,
        minute: MAX_MINUTE,
        second: MAX_SECOND,
    };

    /// Creates a new time of day, validating every component.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTime` if hour > 23 or minute/second > 59.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Result<Self, DateError> {
        if hour > MAX_HOUR || minute > MAX_MINUTE || second > MAX_SECOND {
            return Err(DateError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
        })
    }

    /// Returns the hour (0..=23)
    #[inline]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59)
    #[inline]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59)
    #[inline]
    pub const fn second(self) -> u8 {
        self.second
    }
}

impl FromStr for TimeOfDay {
    type Err = DateError;

    /// Parses `HH:MM` or `HH:MM:SS` (seconds default to 0).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(TIME_SEPARATOR).map(str::trim).collect();
        let (hour, minute, second) = match parts.as_slice() {
            [h, m] => (parse_u8(h)?, parse_u8(m)?, 0),
            [h, m, s] => (parse_u8(h)?, parse_u8(m)?, parse_u8(s)?),
            _ => return Err(DateError::InvalidFormat(trimmed.to_owned())),
        };
        Self::new(hour, minute, second)
    }
}

/// A timezone-naive date with a whole-second time of day.
///
/// Displays and parses as ISO 8601 `YYYY-MM-DDTHH:MM:SS`; parsing also
/// accepts a single space as the separator and an omitted seconds field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}T{}", "date", "time")]
pub struct LocalDateTime {
    date: CalendarDate,
    time: TimeOfDay,
}

impl LocalDateTime {
    /// Combines a date and a time of day.
    pub const fn new(date: CalendarDate, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// Creates a date-time from raw components, validating each one.
    ///
    /// # Errors
    /// Returns the first `DateError` produced by date or time validation.
    pub fn from_ymd_hms(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, DateError> {
        let date = CalendarDate::new(year, month, day)?;
        let time = TimeOfDay::new(hour, minute, second)?;
        Ok(Self { date, time })
    }

    /// Returns the date component
    #[inline]
    pub const fn date(self) -> CalendarDate {
        self.date
    }

    /// Returns the time-of-day component
    #[inline]
    pub const fn time(self) -> TimeOfDay {
        self.time
    }
}

impl FromStr for LocalDateTime {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let (date_part, time_part) = trimmed
            .split_once(DATETIME_SEPARATOR)
            .or_else(|| trimmed.split_once(' '))
            .ok_or_else(|| DateError::InvalidFormat(trimmed.to_owned()))?;

        let date: CalendarDate = date_part.parse()?;
        let time: TimeOfDay = time_part.parse()?;
        Ok(Self { date, time })
    }
}

impl serde::Serialize for LocalDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for LocalDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl TryFrom<NaiveDateTime> for LocalDateTime {
    type Error = DateError;

    /// Sub-second precision is truncated.
    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        let date = CalendarDate::try_from(value.date())?;
        let time = TimeOfDay::new(
            value.hour() as u8,
            value.minute() as u8,
            // chrono represents leap seconds as second 59 with nanos >= 1s
            value.second().min(59) as u8,
        )?;
        Ok(Self { date, time })
    }
}

impl From<LocalDateTime> for NaiveDateTime {
    fn from(value: LocalDateTime) -> Self {
        let time = value.time();
        NaiveDate::from(value.date())
            .and_hms_opt(
                u32::from(time.hour()),
                u32::from(time.minute()),
                u32::from(time.second()),
            )
            .expect("valid time within chrono's range")
    }
}
