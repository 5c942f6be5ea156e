use crate::consts::{DATE_SEPARATOR, JANUARY, MAX_MONTH, MAX_YEAR, MIN_DAY};
use crate::error::DateError;
use crate::prelude::*;
use crate::types::{Day, Month, Year, days_in_month};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A timezone-naive civil date (year, month, day) in the proleptic
/// Gregorian calendar, guaranteed valid at construction.
///
/// Displays and parses as ISO 8601 `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", "year.get()", "month.get()", "day.get()")]
pub struct CalendarDate {
    year: Year,
    month: Month,
    day: Day,
}

/// Day of the week, Monday through Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Returns the invariant English name ("Monday".."Sunday")
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    /// True for Saturday and Sunday
    pub const fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl CalendarDate {
    /// Creates a new date, validating every component.
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear`, `InvalidMonth`, or `InvalidDay`
    /// if any component is out of range for the given year and month.
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let year_t = Year::new(year)?;
        let month_t = Month::new(month)?;
        let day_t = Day::new(day, year, month)?;
        Ok(Self::from_parts(year_t, month_t, day_t))
    }

    /// Creates a date from already-validated components.
    pub(crate) const fn from_parts(year: Year, month: Month, day: Day) -> Self {
        Self { year, month, day }
    }

    /// Returns the year (1..=9999)
    #[inline]
    pub const fn year(self) -> u16 {
        self.year.get()
    }

    /// Returns the month (1..=12)
    #[inline]
    pub const fn month(self) -> u8 {
        self.month.get()
    }

    /// Returns the day of month (1..=31)
    #[inline]
    pub const fn day(self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(self) -> Day {
        self.day
    }

    /// Number of days since 1970-01-01 (negative before the epoch).
    ///
    /// Howard Hinnant's civil calendar algorithm: exact calendar-day
    /// distance with no millisecond approximation.
    pub(crate) fn day_number(self) -> i64 {
        let year = i64::from(self.year());
        let month = i64::from(self.month());
        let day = i64::from(self.day());

        let y = if month <= 2 { year - 1 } else { year };
        let m = if month <= 2 { month + 9 } else { month - 3 };
        let era = y.div_euclid(400);
        let yoe = y - era * 400;
        let doy = (153 * m + 2) / 5 + day - 1;
        let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
        era * 146097 + doe - 719468
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        // 1970-01-01 was a Thursday (index 3 counting from Monday)
        let index = (self.day_number() + 3).rem_euclid(7);
        Weekday::ALL[index as usize]
    }

    /// The following calendar day, rolling over month and year boundaries.
    /// Returns `None` past 9999-12-31.
    pub fn next_day(self) -> Option<Self> {
        let (year, month, day) = if self.day() < days_in_month(self.year(), self.month()) {
            (self.year(), self.month(), self.day() + 1)
        } else if self.month() < MAX_MONTH {
            (self.year(), self.month() + 1, MIN_DAY)
        } else if self.year() < MAX_YEAR {
            (self.year() + 1, JANUARY, MIN_DAY)
        } else {
            return None;
        };
        Self::new(year, month, day).ok()
    }
}

pub(crate) fn parse_u16(s: &str) -> Result<u16, DateError> {
    s.parse::<u16>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

pub(crate) fn parse_u8(s: &str) -> Result<u8, DateError> {
    s.parse::<u8>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Parses strict ISO 8601 `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        if parts.len() != 3 {
            return Err(DateError::InvalidFormat(trimmed.to_owned()));
        }

        let year = parse_u16(parts[0])?;
        let month = parse_u8(parts[1])?;
        let day = parse_u8(parts[2])?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for CalendarDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl TryFrom<NaiveDate> for CalendarDate {
    type Error = DateError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        let year = u16::try_from(value.year()).map_err(|_| DateError::InvalidYear {
            year: value.year(),
        })?;
        Self::new(year, value.month() as u8, value.day() as u8)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        // 1..=9999 is well inside chrono's representable range
        Self::from_ymd_opt(
            i32::from(date.year()),
            u32::from(date.month()),
            u32::from(date.day()),
        )
        .expect("valid date within chrono's range")
    }
}
