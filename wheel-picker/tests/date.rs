use chrono::NaiveDate;
use wheel_picker::{CalendarDate, PickerError};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

#[test]
fn test_new_rejects_impossible_dates() {
    assert_eq!(
        CalendarDate::new(2023, 2, 29),
        Err(PickerError::InvalidDate {
            year: 2023,
            month: 2,
            day: 29
        })
    );
    assert!(CalendarDate::new(2024, 13, 1).is_err());
    assert!(CalendarDate::new(2024, 1, 0).is_err());
    assert!(CalendarDate::new(2024, 2, 29).is_ok());
}

#[test]
fn test_with_month_clamps_day() {
    assert_eq!(date(2024, 1, 31).with_month(2), date(2024, 2, 29));
    assert_eq!(date(2023, 1, 31).with_month(2), date(2023, 2, 28));
    assert_eq!(date(2024, 1, 31).with_month(4), date(2024, 4, 30));
    assert_eq!(date(2024, 1, 15).with_month(2), date(2024, 2, 15));
}

#[test]
fn test_with_year_clamps_leap_day() {
    assert_eq!(date(2024, 2, 29).with_year(2023), date(2023, 2, 28));
    assert_eq!(date(2024, 2, 29).with_year(2028), date(2028, 2, 29));
}

#[test]
fn test_with_day_clamps_to_month_length() {
    assert_eq!(date(2023, 2, 10).with_day(31), date(2023, 2, 28));
    assert_eq!(date(2023, 2, 10).with_day(0), date(2023, 2, 1));
}

#[test]
fn test_ordering_is_chronological() {
    assert!(date(2024, 1, 31) < date(2024, 2, 1));
    assert!(date(2023, 12, 31) < date(2024, 1, 1));
    assert!(date(2024, 6, 15) > date(2024, 6, 14));
}

#[test]
fn test_display_is_iso() {
    assert_eq!(date(987, 3, 4).to_string(), "0987-03-04");
}

#[test]
fn test_chrono_interop() {
    let naive = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    let converted = CalendarDate::from(naive);
    assert_eq!(converted, date(2024, 2, 29));
    assert_eq!(NaiveDate::try_from(converted), Ok(naive));
}
