//! Fixed-convention date and time formatters.
//!
//! Every formatted string the crate produces goes through one of the
//! functions here, so the fixed conventions (24-hour clock, en-US 12-hour
//! date-time, `DD-MM-YYYY` wire format) are named explicitly and can be
//! swapped in one place instead of living as an implicit locale default.

use crate::date::DateTime;
use crate::error::DateError;

/// Formats the time-of-day as zero-padded 24-hour `HH:MM:SS`.
pub fn format_time(date: DateTime) -> String {
    format!("{:02}:{:02}:{:02}", date.hour(), date.minute(), date.second())
}

/// Formats a date-time in the en-US 12-hour convention:
/// `M/D/YYYY, h:mm:ss AM/PM`. Month, day, and hour carry no zero padding.
pub fn format_date_value(date: DateTime) -> String {
    let (hour12, meridiem) = twelve_hour(date.hour());
    format!(
        "{}/{}/{}, {}:{:02}:{:02} {}",
        date.month(),
        date.day(),
        date.year(),
        hour12,
        date.minute(),
        date.second(),
        meridiem
    )
}

/// Parses a date string and re-formats it in the en-US 12-hour convention.
///
/// # Errors
///
/// Returns [`DateError::Unparseable`] if the string cannot be parsed.
pub fn format_date(input: &str) -> Result<String, DateError> {
    Ok(format_date_value(DateTime::parse(input)?))
}

/// Formats the calendar date as `DD-MM-YYYY` (work-schedule wire format).
pub fn format_day_month_year(date: DateTime) -> String {
    format!("{:02}-{:02}-{:04}", date.day(), date.month(), date.year())
}

/// Maps a 24-hour value onto the 12-hour clock: 0 becomes 12 AM and 12
/// stays 12 PM.
fn twelve_hour(hour: u8) -> (u8, &'static str) {
    match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_zero_padded() {
        let date = DateTime::new(2024, 1, 1, 5, 3, 9).unwrap();
        assert_eq!(format_time(date), "05:03:09");
    }

    #[test]
    fn time_midnight() {
        let date = DateTime::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(format_time(date), "00:00:00");
    }

    #[test]
    fn time_end_of_day() {
        let date = DateTime::new(2024, 1, 1, 23, 59, 59).unwrap();
        assert_eq!(format_time(date), "23:59:59");
    }

    #[test]
    fn us_format_midnight_is_12_am() {
        let date = DateTime::new(1995, 12, 4, 0, 12, 0).unwrap();
        assert_eq!(format_date_value(date), "12/4/1995, 12:12:00 AM");
    }

    #[test]
    fn us_format_noon_is_12_pm() {
        let date = DateTime::new(2024, 6, 15, 12, 0, 0).unwrap();
        assert_eq!(format_date_value(date), "6/15/2024, 12:00:00 PM");
    }

    #[test]
    fn us_format_afternoon() {
        let date = DateTime::new(2024, 6, 15, 13, 5, 9).unwrap();
        assert_eq!(format_date_value(date), "6/15/2024, 1:05:09 PM");
    }

    #[test]
    fn us_format_from_string() {
        assert_eq!(
            format_date("2024-01-02 09:30:00").unwrap(),
            "1/2/2024, 9:30:00 AM"
        );
    }

    #[test]
    fn us_format_unparseable() {
        assert!(format_date("??").is_err());
    }

    #[test]
    fn wire_format_zero_padded() {
        let date = DateTime::from_ymd(2024, 1, 5).unwrap();
        assert_eq!(format_day_month_year(date), "05-01-2024");
    }

    #[test]
    fn twelve_hour_mapping() {
        assert_eq!(twelve_hour(0), (12, "AM"));
        assert_eq!(twelve_hour(1), (1, "AM"));
        assert_eq!(twelve_hour(11), (11, "AM"));
        assert_eq!(twelve_hour(12), (12, "PM"));
        assert_eq!(twelve_hour(13), (1, "PM"));
        assert_eq!(twelve_hour(23), (11, "PM"));
    }
}
