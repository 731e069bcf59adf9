use almanac::{DateTime, date_to_timestamp, day_name, format_date, format_time};

#[test]
fn epoch_string_is_timestamp_zero() {
    assert_eq!(date_to_timestamp("01 Jan 1970 00:00:00 UTC").unwrap(), 0);
}

#[test]
fn known_timestamp() {
    assert_eq!(
        date_to_timestamp("04 Dec 1995 00:12:00 UTC").unwrap(),
        818_035_920_000
    );
}

#[test]
fn iso_and_day_first_agree() {
    assert_eq!(
        date_to_timestamp("1995-12-04 00:12:00").unwrap(),
        date_to_timestamp("04 Dec 1995 00:12:00 UTC").unwrap()
    );
}

#[test]
fn day_name_across_a_week() {
    assert_eq!(day_name("2024-01-01").unwrap(), "Monday");
    assert_eq!(day_name("2024-01-02").unwrap(), "Tuesday");
    assert_eq!(day_name("2024-01-03").unwrap(), "Wednesday");
    assert_eq!(day_name("2024-01-04").unwrap(), "Thursday");
    assert_eq!(day_name("2024-01-05").unwrap(), "Friday");
    assert_eq!(day_name("2024-01-06").unwrap(), "Saturday");
    assert_eq!(day_name("2024-01-07").unwrap(), "Sunday");
}

#[test]
fn day_name_rejects_garbage() {
    assert!(day_name("definitely not a date").is_err());
    assert!(day_name("").is_err());
}

#[test]
fn format_time_24_hour() {
    let date = DateTime::new(2024, 6, 15, 18, 5, 7).unwrap();
    assert_eq!(format_time(date), "18:05:07");
}

#[test]
fn format_date_round_trips_calendar_date() {
    // Formatting and re-parsing must land on the same calendar date, even
    // though the string shape changes.
    for input in [
        "2024-02-29 23:59:59",
        "04 Dec 1995 00:12:00 UTC",
        "1970-01-01",
        "2024-06-15T12:00:00",
    ] {
        let original = DateTime::parse(input).unwrap();
        let formatted = format_date(input).unwrap();
        let reparsed = DateTime::parse(&formatted).unwrap();
        assert_eq!(reparsed, original, "round trip failed for {input:?}");
    }
}

#[test]
fn format_date_examples() {
    assert_eq!(
        format_date("04 Dec 1995 00:12:00 UTC").unwrap(),
        "12/4/1995, 12:12:00 AM"
    );
    assert_eq!(format_date("2024-06-15 13:05:09").unwrap(), "6/15/2024, 1:05:09 PM");
}
