//! Gregorian date-time value with epoch-day arithmetic.

use crate::error::DateError;
use crate::month::days_in_month;
use crate::parse;
use crate::weekday::Weekday;

/// Milliseconds per calendar day.
pub(crate) const MS_PER_DAY: i64 = 86_400_000;

const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

/// An instant in the proleptic Gregorian calendar with second resolution.
///
/// All fields live in a single fixed reference timezone; the crate never
/// applies offsets. Values are immutable: arithmetic such as
/// [`DateTime::add_days`] returns a new value and never mutates the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    year: i32,
    month: u8,
    day: u8,
    hour: u8,
    minute: u8,
    second: u8,
}

impl DateTime {
    /// Creates a new `DateTime` from calendar and time-of-day fields.
    ///
    /// # Errors
    ///
    /// Returns [`DateError`] if the month, day (leap-aware), or any
    /// time-of-day field is out of range.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, DateError> {
        let max_day = days_in_month(month, year)?;
        if !(1..=max_day).contains(&day) {
            return Err(DateError::InvalidDay {
                day,
                month,
                year,
                max_day,
            });
        }
        if hour > 23 || minute > 59 || second > 59 {
            return Err(DateError::InvalidTime {
                hour,
                minute,
                second,
            });
        }
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Creates a new `DateTime` at midnight.
    ///
    /// # Errors
    ///
    /// Returns [`DateError`] if the month or day is out of range.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        Self::new(year, month, day, 0, 0, 0)
    }

    /// Parses a date string in any of the accepted formats.
    ///
    /// See the [`crate::parse`] module documentation for the format list.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::Unparseable`] if the string matches no accepted
    /// format or names an impossible calendar date.
    pub fn parse(input: &str) -> Result<Self, DateError> {
        parse::parse_datetime(input)
    }

    /// Returns the year.
    pub fn year(self) -> i32 {
        self.year
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the hour (0..=23).
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute (0..=59).
    pub fn minute(self) -> u8 {
        self.minute
    }

    /// Returns the second (0..=59).
    pub fn second(self) -> u8 {
        self.second
    }

    /// Returns the day of the week.
    pub fn weekday(self) -> Weekday {
        // The epoch day 0 (1970-01-01) was a Thursday, number 4.
        let number = (self.epoch_days() + 4).rem_euclid(7);
        Weekday::from_number(number as u8)
    }

    /// Returns the number of whole days between the epoch (1970-01-01) and
    /// this date. Negative for dates before the epoch.
    pub(crate) fn epoch_days(self) -> i64 {
        days_from_civil(self.year, self.month, self.day)
    }

    /// Returns milliseconds since 1970-01-01 00:00:00 in the reference
    /// timezone. Negative for instants before the epoch.
    pub fn timestamp_millis(self) -> i64 {
        let seconds = i64::from(self.hour) * SECONDS_PER_HOUR
            + i64::from(self.minute) * SECONDS_PER_MINUTE
            + i64::from(self.second);
        self.epoch_days() * MS_PER_DAY + seconds * 1_000
    }

    /// Returns the date `days` calendar days later (earlier for negative
    /// `days`), keeping the time-of-day.
    pub fn add_days(self, days: i64) -> Self {
        let (year, month, day) = civil_from_days(self.epoch_days() + days);
        Self {
            year,
            month,
            day,
            ..self
        }
    }

    /// Returns the following calendar day, keeping the time-of-day.
    pub fn next_day(self) -> Self {
        self.add_days(1)
    }

    /// Returns the same instant with the day-of-month replaced.
    ///
    /// # Errors
    ///
    /// Returns [`DateError::InvalidDay`] if `day` does not exist in this
    /// date's month.
    pub fn with_day(self, day: u8) -> Result<Self, DateError> {
        Self::new(self.year, self.month, day, self.hour, self.minute, self.second)
    }

    /// Returns `true` when this date's year is a Gregorian leap year.
    pub fn is_leap_year(self) -> bool {
        crate::year::is_leap_year(self.year)
    }
}

/// Parses a date string and returns its timestamp in milliseconds since
/// the epoch.
///
/// # Errors
///
/// Returns [`DateError::Unparseable`] if the string cannot be parsed.
pub fn date_to_timestamp(input: &str) -> Result<i64, DateError> {
    Ok(DateTime::parse(input)?.timestamp_millis())
}

/// Days from 1970-01-01 to the given proleptic Gregorian date.
///
/// Era-based civil calendar arithmetic; exact over the full `i32` year
/// range.
fn days_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let year = i64::from(year) - i64::from(month <= 2);
    let era = if year >= 0 { year } else { year - 399 } / 400;
    let year_of_era = year - era * 400;
    let month_shifted = (i64::from(month) + 9) % 12;
    let day_of_year = (153 * month_shifted + 2) / 5 + i64::from(day) - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(days: i64) -> (i32, u8, u8) {
    let shifted = days + 719_468;
    let era = shifted.div_euclid(146_097);
    let day_of_era = shifted.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1_460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_shifted = (5 * day_of_year + 2) / 153;
    let day = (day_of_year - (153 * month_shifted + 2) / 5 + 1) as u8;
    let month = if month_shifted < 10 {
        (month_shifted + 3) as u8
    } else {
        (month_shifted - 9) as u8
    };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year as i32, month, day)
}
