//! Day-of-week enum with the Sunday-first numbering and English names.

use crate::date::DateTime;
use crate::error::DateError;

/// A day of the week, numbered 0 = Sunday .. 6 = Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    /// Creates a `Weekday` from its Sunday-first number.
    ///
    /// Only called with values already reduced modulo 7.
    pub(crate) fn from_number(number: u8) -> Self {
        match number {
            0 => Self::Sunday,
            1 => Self::Monday,
            2 => Self::Tuesday,
            3 => Self::Wednesday,
            4 => Self::Thursday,
            5 => Self::Friday,
            6 => Self::Saturday,
            _ => unreachable!("weekday numbers are reduced modulo 7"),
        }
    }

    /// Returns the Sunday-first number (0..=6).
    pub fn number(self) -> u8 {
        self as u8
    }

    /// Returns the English name of the day.
    pub fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Returns `true` for Saturday and Sunday.
    pub fn is_weekend(self) -> bool {
        matches!(self, Self::Saturday | Self::Sunday)
    }
}

/// Returns the English weekday name of a date string.
///
/// # Errors
///
/// Returns [`DateError::Unparseable`] if the string matches none of the
/// accepted date formats.
pub fn day_name(input: &str) -> Result<&'static str, DateError> {
    Ok(DateTime::parse(input)?.weekday().name())
}
