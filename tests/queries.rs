use almanac::{
    DateTime, count_weekends, days_in_month, days_in_period, is_date_in_period, is_leap_year,
    quarter, week_number, Period,
};

#[test]
fn days_in_month_leap_aware() {
    assert_eq!(days_in_month(2, 2024).unwrap(), 29);
    assert_eq!(days_in_month(2, 2023).unwrap(), 28);
    assert_eq!(days_in_month(9, 2024).unwrap(), 30);
}

#[test]
fn leap_year_rule() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2023));
}

#[test]
fn leap_year_on_date_value() {
    assert!(DateTime::from_ymd(2024, 6, 1).unwrap().is_leap_year());
    assert!(!DateTime::from_ymd(2023, 6, 1).unwrap().is_leap_year());
}

#[test]
fn quarter_of_january_and_december() {
    assert_eq!(quarter(DateTime::from_ymd(2024, 1, 10).unwrap()), 1);
    assert_eq!(quarter(DateTime::from_ymd(2024, 12, 10).unwrap()), 4);
}

#[test]
fn inclusive_day_count() {
    assert_eq!(days_in_period("2024-01-01", "2024-01-01").unwrap(), 1);
    assert_eq!(days_in_period("2024-01-01", "2024-01-10").unwrap(), 10);
}

#[test]
fn day_count_over_year_boundary() {
    assert_eq!(days_in_period("2023-12-30", "2024-01-02").unwrap(), 4);
}

#[test]
fn reversed_period_counts_non_positive() {
    assert!(days_in_period("2024-01-10", "2024-01-01").unwrap() <= 0);
}

#[test]
fn membership_is_inclusive_both_ends() {
    let period = Period::parse("2024-01-01", "2024-03-31").unwrap();
    assert!(is_date_in_period("2024-01-01", &period).unwrap());
    assert!(is_date_in_period("2024-02-15", &period).unwrap());
    assert!(is_date_in_period("2024-03-31", &period).unwrap());
    assert!(!is_date_in_period("2024-04-01", &period).unwrap());
    assert!(!is_date_in_period("2023-12-31", &period).unwrap());
}

#[test]
fn weekend_count_february_2024() {
    assert_eq!(count_weekends(2, 2024).unwrap(), 8);
}

#[test]
fn weekend_counts_whole_year_2024() {
    // 2024 has 104 weekend days.
    let total: u32 = (1..=12)
        .map(|month| u32::from(count_weekends(month, 2024).unwrap()))
        .sum();
    assert_eq!(total, 104);
}

#[test]
fn week_numbers_through_the_year() {
    assert_eq!(week_number(DateTime::from_ymd(2024, 1, 1).unwrap()), 1);
    assert_eq!(week_number(DateTime::from_ymd(2024, 1, 7).unwrap()), 2);
    assert_eq!(week_number(DateTime::from_ymd(2024, 12, 31).unwrap()), 53);
    assert!(week_number(DateTime::from_ymd(2025, 1, 1).unwrap()) >= 1);
}
