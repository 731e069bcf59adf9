//! String parsing for the accepted date formats.
//!
//! [`parse_datetime`] tries, in order:
//!
//! 1. ISO calendar date with optional time: `YYYY-MM-DD`,
//!    `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DDTHH:MM:SS`, optionally suffixed
//!    with `Z` or ` UTC`.
//! 2. Day-first English: `DD Mon YYYY HH:MM:SS UTC` (time and zone suffix
//!    optional, month names case-insensitive).
//! 3. en-US 12-hour: `M/D/YYYY, h:mm:ss AM/PM`, the shape produced by
//!    [`crate::format::format_date_value`].
//!
//! `DD-MM-YYYY` is handled only by [`parse_day_month_year`] because it is
//! ambiguous against the slash format when parsed blind.

use crate::date::DateTime;
use crate::error::DateError;

/// Full English month names, used for prefix matching of month tokens.
const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parses a date string in any accepted format.
pub(crate) fn parse_datetime(input: &str) -> Result<DateTime, DateError> {
    let trimmed = input.trim();
    parse_iso(trimmed)
        .or_else(|| parse_day_first(trimmed))
        .or_else(|| parse_us_12_hour(trimmed))
        .ok_or_else(|| DateError::Unparseable {
            input: input.to_string(),
        })
}

/// Parses a `DD-MM-YYYY` date at midnight (work-schedule wire format).
pub(crate) fn parse_day_month_year(input: &str) -> Result<DateTime, DateError> {
    try_day_month_year(input.trim()).ok_or_else(|| DateError::Unparseable {
        input: input.to_string(),
    })
}

fn try_day_month_year(s: &str) -> Option<DateTime> {
    let mut fields = s.split('-');
    let day: u8 = fields.next()?.parse().ok()?;
    let month: u8 = fields.next()?.parse().ok()?;
    let year: i32 = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    DateTime::from_ymd(year, month, day).ok()
}

fn parse_iso(s: &str) -> Option<DateTime> {
    let s = s
        .strip_suffix(" UTC")
        .or_else(|| s.strip_suffix('Z'))
        .unwrap_or(s);
    let (date_part, time_part) = match s.split_once('T').or_else(|| s.split_once(' ')) {
        Some((date, time)) => (date, Some(time)),
        None => (s, None),
    };
    let mut fields = date_part.split('-');
    let year: i32 = fields.next()?.parse().ok()?;
    let month: u8 = fields.next()?.parse().ok()?;
    let day: u8 = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    let (hour, minute, second) = match time_part {
        Some(time) => parse_hms(time)?,
        None => (0, 0, 0),
    };
    DateTime::new(year, month, day, hour, minute, second).ok()
}

fn parse_day_first(s: &str) -> Option<DateTime> {
    let mut tokens = s.split_whitespace();
    let day: u8 = tokens.next()?.parse().ok()?;
    let month = month_from_name(tokens.next()?)?;
    let year: i32 = tokens.next()?.parse().ok()?;
    let (hour, minute, second) = match tokens.next() {
        Some(time) => parse_hms(time)?,
        None => (0, 0, 0),
    };
    if let Some(zone) = tokens.next() {
        if !zone.eq_ignore_ascii_case("UTC") && !zone.eq_ignore_ascii_case("GMT") {
            return None;
        }
    }
    if tokens.next().is_some() {
        return None;
    }
    DateTime::new(year, month, day, hour, minute, second).ok()
}

fn parse_us_12_hour(s: &str) -> Option<DateTime> {
    let (date_part, rest) = s.split_once(", ").or_else(|| s.split_once(' '))?;
    let (time_part, meridiem) = rest.rsplit_once(' ')?;
    let mut fields = date_part.split('/');
    let month: u8 = fields.next()?.parse().ok()?;
    let day: u8 = fields.next()?.parse().ok()?;
    let year: i32 = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }
    let (hour12, minute, second) = parse_hms(time_part)?;
    if !(1..=12).contains(&hour12) {
        return None;
    }
    let hour = if meridiem.eq_ignore_ascii_case("AM") {
        if hour12 == 12 { 0 } else { hour12 }
    } else if meridiem.eq_ignore_ascii_case("PM") {
        if hour12 == 12 { 12 } else { hour12 + 12 }
    } else {
        return None;
    };
    DateTime::new(year, month, day, hour, minute, second).ok()
}

/// `HH:MM` or `HH:MM:SS`; the seconds default to zero.
fn parse_hms(s: &str) -> Option<(u8, u8, u8)> {
    let mut parts = s.split(':');
    let hour: u8 = parts.next()?.parse().ok()?;
    let minute: u8 = parts.next()?.parse().ok()?;
    let second: u8 = match parts.next() {
        Some(part) => part.parse().ok()?,
        None => 0,
    };
    if parts.next().is_some() {
        return None;
    }
    Some((hour, minute, second))
}

/// Matches a month token as a prefix of the full English name; at least
/// three characters are required so `jun`/`jul` and `mar`/`may` stay
/// unambiguous.
fn month_from_name(token: &str) -> Option<u8> {
    let lower = token.to_ascii_lowercase();
    if lower.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(&lower))
        .map(|index| index as u8 + 1)
}
