//! # almanac
//!
//! Pure calendar arithmetic over a proleptic Gregorian [`DateTime`] value:
//! timestamp conversion, fixed-convention formatting, weekday and weekend
//! counting, week numbers, Friday searches, and repeating work-schedule
//! generation. Every operation is a stateless transformation; nothing is
//! shared or mutated across calls.
//!
//! ## Quick Start
//!
//! ```
//! use almanac::{DateTime, day_name, days_in_month, next_friday, work_schedule};
//!
//! // Parsing and weekday lookup
//! assert_eq!(day_name("2024-01-01").unwrap(), "Monday");
//!
//! // Month lengths are leap-aware
//! assert_eq!(days_in_month(2, 2024).unwrap(), 29);
//!
//! // Friday search preserves the input; a new value is returned
//! let monday = DateTime::from_ymd(2024, 1, 1).unwrap();
//! assert_eq!(next_friday(monday).day(), 5);
//!
//! // Work/off-day cycles over an inclusive DD-MM-YYYY period
//! let schedule = work_schedule("01-01-2024", "10-01-2024", 3, 2).unwrap();
//! assert_eq!(schedule.len(), 6);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | `DateTime` value type and epoch-day arithmetic |
//! | `parse` | String parsing for the accepted date formats |
//! | `format` | Fixed-convention formatters (24-hour, en-US 12-hour, `DD-MM-YYYY`) |
//! | `weekday` | Day-of-week enum and English names |
//! | `month` | Month lengths and weekend counting |
//! | `year` | Leap years, quarters, week numbers |
//! | `period` | Inclusive date ranges and day counting |
//! | `friday` | Next-Friday and Friday-the-13th searches |
//! | `schedule` | Repeating work/off-day schedule generation |
//! | `error` | Error types |

mod date;
mod error;
mod format;
mod friday;
mod month;
mod parse;
mod period;
mod schedule;
mod weekday;
mod year;

pub use date::{DateTime, date_to_timestamp};
pub use error::DateError;
pub use format::{format_date, format_date_value, format_day_month_year, format_time};
pub use friday::{next_friday, next_friday_the_13th};
pub use month::{count_weekends, days_in_month};
pub use period::{Period, days_in_period, is_date_in_period};
pub use schedule::work_schedule;
pub use weekday::{Weekday, day_name};
pub use year::{is_leap_year, quarter, week_number};
