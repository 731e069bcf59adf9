//! Year-level queries: leap years, quarters, week numbers.

use crate::date::DateTime;

/// Returns `true` when `year` is a Gregorian leap year (divisible by 4,
/// except century years not divisible by 400).
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the quarter (1..=4) the date falls in.
pub fn quarter(date: DateTime) -> u8 {
    (date.month() - 1) / 3 + 1
}

/// Returns the week number of the date within its year, starting at 1.
///
/// Weeks are Sunday-based and counted from January 1: the first (possibly
/// partial) week containing January 1 is week 1, and each Sunday starts a
/// new week. Computed as `ceil((days_since_jan1 + weekday_of_jan1 + 1) / 7)`.
pub fn week_number(date: DateTime) -> u32 {
    let jan1 = DateTime::from_ymd(date.year(), 1, 1)
        .expect("January 1 exists in every year");
    let days_since_jan1 = date.epoch_days() - jan1.epoch_days();
    let offset = days_since_jan1 + i64::from(jan1.weekday().number()) + 1;
    // Integer ceiling division by 7.
    ((offset + 6) / 7) as u32
}
