use crate::date::CalendarDate;
use crate::datetime::LocalDateTime;
use chrono::Local;

/// A source of the current local date and time.
///
/// Every operation that compares against "now" takes its clock through this
/// trait, so callers can substitute a fixed clock and test deterministically.
/// [`SystemClock`] is the production implementation.
pub trait Clock: Send + Sync {
    /// Returns the current local date and time.
    fn now(&self) -> LocalDateTime;

    /// Returns the current local date.
    fn today(&self) -> CalendarDate {
        self.now().date()
    }
}

/// The process-wide system clock in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> LocalDateTime {
        // The wall clock reads well inside the supported 1..=9999 range.
        LocalDateTime::try_from(Local::now().naive_local())
            .expect("system clock within supported calendar range")
    }
}

/// A clock frozen at a fixed instant, for deterministic tests.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: LocalDateTime,
}

impl FixedClock {
    /// Creates a clock that always reports the given instant.
    pub const fn new(now: LocalDateTime) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> LocalDateTime {
        self.now
    }
}
