//! Inclusive date ranges and day counting over them.

use crate::date::{DateTime, MS_PER_DAY};
use crate::error::DateError;

/// An inclusive range of instants.
///
/// `start <= end` is not enforced; a reversed period simply contains no
/// dates and yields a non-positive day count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Period {
    /// First instant of the range (inclusive).
    pub start: DateTime,
    /// Last instant of the range (inclusive).
    pub end: DateTime,
}

impl Period {
    /// Creates a period from two instants.
    pub fn new(start: DateTime, end: DateTime) -> Self {
        Self { start, end }
    }

    /// Parses a period from two date strings.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Unparseable`] if either string cannot be
    /// parsed.
    pub fn parse(start: &str, end: &str) -> Result<Self, DateError> {
        Ok(Self {
            start: DateTime::parse(start)?,
            end: DateTime::parse(end)?,
        })
    }

    /// Returns `true` when `date` lies within the period, inclusive on
    /// both ends.
    pub fn contains(&self, date: DateTime) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Counts the days in the inclusive period between two date strings:
/// `floor((end - start) / 86_400_000) + 1`.
///
/// A reversed period yields zero or a negative count, not an error.
///
/// # Errors
///
/// Returns [`DateError::Unparseable`] if either string cannot be parsed.
pub fn days_in_period(start: &str, end: &str) -> Result<i64, DateError> {
    let period = Period::parse(start, end)?;
    let span = period.end.timestamp_millis() - period.start.timestamp_millis();
    Ok(span.div_euclid(MS_PER_DAY) + 1)
}

/// Returns `true` when the date string lies within the period, inclusive
/// on both ends.
///
/// # Errors
///
/// Returns [`DateError::Unparseable`] if the date string cannot be parsed.
pub fn is_date_in_period(date: &str, period: &Period) -> Result<bool, DateError> {
    Ok(period.contains(DateTime::parse(date)?))
}
