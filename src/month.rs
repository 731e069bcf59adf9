//! Month-level queries: month lengths and weekend counting.

use crate::date::DateTime;
use crate::error::DateError;
use crate::year::is_leap_year;

/// Number of days in each common-year month (index 0 unused, index 1 =
/// January, ..., index 12 = December).
const DAYS_PER_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns the number of days in the given month of the given year.
///
/// February is leap-aware.
///
/// # Errors
///
/// Returns [`DateError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(month: u8, year: i32) -> Result<u8, DateError> {
    if !(1..=12).contains(&month) {
        return Err(DateError::InvalidMonth { month });
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(DAYS_PER_MONTH[month as usize])
}

/// Counts the Saturdays and Sundays in the given month of the given year.
///
/// # Errors
///
/// Returns [`DateError::InvalidMonth`] if `month` is not in 1..=12.
pub fn count_weekends(month: u8, year: i32) -> Result<u8, DateError> {
    let length = days_in_month(month, year)?;
    let first = DateTime::from_ymd(year, month, 1)
        .expect("day 1 exists in every valid month");
    let mut count = 0;
    let mut current = first;
    for _ in 0..length {
        if current.weekday().is_weekend() {
            count += 1;
        }
        current = current.next_day();
    }
    Ok(count)
}
