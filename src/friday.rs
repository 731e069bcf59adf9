//! Friday searches: the next Friday and the next Friday the 13th.

use tracing::debug;

use crate::date::DateTime;
use crate::weekday::Weekday;

/// Returns the next Friday strictly after `date`, keeping the
/// time-of-day.
///
/// When `date` is itself a Friday the result is the Friday seven days
/// later, never the input.
pub fn next_friday(date: DateTime) -> DateTime {
    let ahead = (5 - i64::from(date.weekday().number())).rem_euclid(7);
    let ahead = if ahead == 0 { 7 } else { ahead };
    date.add_days(ahead)
}

/// Returns the next 13th-of-month falling on a Friday, strictly after
/// `date`, keeping the time-of-day.
///
/// The day-of-month is pinned at 13, so the search jumps month by month
/// rather than day by day; only the weekday of each candidate varies.
pub fn next_friday_the_13th(date: DateTime) -> DateTime {
    let mut candidate = date
        .with_day(13)
        .expect("day 13 exists in every month");
    while candidate.weekday() != Weekday::Friday || candidate <= date {
        let (year, month) = month_after(candidate.year(), candidate.month());
        candidate = DateTime::new(
            year,
            month,
            13,
            date.hour(),
            date.minute(),
            date.second(),
        )
        .expect("day 13 exists in every month");
    }
    debug!(
        year = candidate.year(),
        month = candidate.month(),
        "found Friday the 13th"
    );
    candidate
}

fn month_after(year: i32, month: u8) -> (i32, u8) {
    if month == 12 { (year + 1, 1) } else { (year, month + 1) }
}
