//! Error types for the almanac crate.

/// Error type for all fallible operations in the almanac crate.
///
/// Covers parse failures for date strings and validation failures for
/// month, day-of-month, and time-of-day fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Returned when a date string matches none of the accepted formats,
    /// or matches a format but names an impossible calendar date.
    #[error("unparseable date: {input:?}")]
    Unparseable {
        /// The input string that could not be parsed.
        input: String,
    },

    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given
    /// month of the given year.
    #[error("invalid day: {day} for month {month} of year {year} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The year, which decides the length of February.
        year: i32,
        /// The maximum valid day for the given month and year.
        max_day: u8,
    },

    /// Returned when an hour, minute, or second field is out of range.
    #[error("invalid time: {hour:02}:{minute:02}:{second:02}")]
    InvalidTime {
        /// The hour field (valid range 0..=23).
        hour: u8,
        /// The minute field (valid range 0..=59).
        minute: u8,
        /// The second field (valid range 0..=59).
        second: u8,
    },
}
