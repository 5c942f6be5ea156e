//! Generation of contiguous date sequences.

use crate::arithmetic::days_between;
use crate::date::CalendarDate;
use std::iter::FusedIterator;

/// Every calendar date from `start` to `end` inclusive, ascending in
/// one-day steps.
///
/// A reversed range (`start > end`) yields the empty sequence; this is
/// part of the contract, not an accident of the loop condition.
///
/// # Example
///
/// ```
/// use datewise::{CalendarDate, dates_between};
///
/// let start = CalendarDate::new(2024, 1, 1).unwrap();
/// let end = CalendarDate::new(2024, 1, 5).unwrap();
/// let dates: Vec<_> = dates_between(start, end).collect();
/// assert_eq!(dates.len(), 5);
/// assert_eq!(dates[0], start);
/// assert_eq!(dates[4], end);
/// ```
pub fn dates_between(start: CalendarDate, end: CalendarDate) -> DatesBetween {
    DatesBetween {
        next: (start <= end).then_some(start),
        end,
    }
}

/// Lazy iterator over an inclusive ascending date range.
/// Created by [`dates_between`].
#[derive(Debug, Clone)]
pub struct DatesBetween {
    next: Option<CalendarDate>,
    end: CalendarDate,
}

impl Iterator for DatesBetween {
    type Item = CalendarDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = if current < self.end {
            current.next_day()
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl ExactSizeIterator for DatesBetween {
    fn len(&self) -> usize {
        match self.next {
            Some(next) => usize::try_from(days_between(next, self.end) + 1).unwrap_or(0),
            None => 0,
        }
    }
}

impl FusedIterator for DatesBetween {}
