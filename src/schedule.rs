//! Repeating work/off-day schedule generation.

use tracing::debug;

use crate::date::DateTime;
use crate::error::DateError;
use crate::format::format_day_month_year;
use crate::parse::parse_day_month_year;

/// Generates a repeating work schedule over an inclusive period.
///
/// `start` and `end` are `DD-MM-YYYY` strings. Walking forward from
/// `start`, each cycle emits `count_work_days` consecutive days (formatted
/// back to `DD-MM-YYYY`) and then skips `count_off_days` days without
/// emitting; cycles repeat while the walking date has not passed `end`.
/// The last cycle may be truncated: the emit loop re-checks the bound
/// before every day, and an off-day skip that carries the walker past
/// `end` simply ends the schedule.
///
/// `count_work_days == 0` yields an empty schedule.
///
/// # Errors
///
/// Returns [`DateError::Unparseable`] if either bound is not a valid
/// `DD-MM-YYYY` date.
#[tracing::instrument]
pub fn work_schedule(
    start: &str,
    end: &str,
    count_work_days: u32,
    count_off_days: u32,
) -> Result<Vec<String>, DateError> {
    let start = parse_day_month_year(start)?;
    let end = parse_day_month_year(end)?;

    let mut schedule = Vec::new();
    if count_work_days == 0 {
        return Ok(schedule);
    }

    let mut current = start;
    while current <= end {
        for _ in 0..count_work_days {
            if current > end {
                break;
            }
            schedule.push(format_day_month_year(current));
            current = current.next_day();
        }
        current = current.add_days(i64::from(count_off_days));
    }

    debug!(emitted = schedule.len(), "work schedule generated");
    Ok(schedule)
}
