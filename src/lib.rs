//! Stateless convenience functions over calendar dates and timestamps:
//! predicates against "today", day/year arithmetic, business days, month
//! boundaries, date sequences, human-readable formatting, and conversion
//! between epoch milliseconds and local wall-clock time.
//!
//! Values are validated at construction ([`CalendarDate`], [`TimeOfDay`],
//! [`LocalDateTime`]); every function over them is total. The one piece of
//! ambient state, the system clock, is injectable: each "now"-dependent
//! operation has a `*_with` form taking any [`Clock`], with
//! [`SystemClock`] as the production default and [`FixedClock`] for
//! deterministic tests.
//!
//! ```
//! use datewise::{CalendarDate, next_business_day, readable_date};
//!
//! let friday: CalendarDate = "2024-01-05".parse().unwrap();
//! let monday = next_business_day(friday).unwrap();
//! assert_eq!(readable_date(monday), "January 08, 2024");
//! ```

mod arithmetic;
mod clock;
mod consts;
mod convert;
mod date;
mod datetime;
mod error;
mod format;
mod predicates;
mod prelude;
mod sequence;
#[cfg(test)]
mod test_utils;
mod types;

pub use arithmetic::{
    calculate_age, calculate_age_with, days_between, first_day_of_month, last_day_of_month,
    next_business_day, years_between,
};
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use convert::{end_of_day, from_timestamp, start_of_day, to_timestamp};
pub use date::{CalendarDate, Weekday};
pub use datetime::{LocalDateTime, TimeOfDay};
pub use error::DateError;
pub use format::{readable_date, readable_datetime};
pub use predicates::{
    is_future, is_future_with, is_past, is_past_with, is_today, is_today_with, is_weekday,
    is_weekend,
};
pub use sequence::{DatesBetween, dates_between};
pub use types::{Day, Month, Year, days_in_month, is_leap_year};
