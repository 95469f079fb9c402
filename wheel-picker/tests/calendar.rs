use chrono::{Datelike, NaiveDate};
use wheel_picker::calendar::{
    MAX_YEAR_SPAN, MonthLabels, YearRange, day_texts, days_in_month, is_leap_year, month_texts,
};
use wheel_picker::PickerError;

fn chrono_month_length(month: u32, year: i32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
    };
    next.signed_duration_since(first).num_days() as u32
}

#[test]
fn test_days_in_month_matches_gregorian_calendar() {
    for year in [1900, 1999, 2000, 2023, 2024, 2100] {
        for month in 1..=12 {
            assert_eq!(
                days_in_month(month, year),
                chrono_month_length(month, year),
                "{year}-{month}"
            );
        }
    }
}

#[test]
fn test_leap_years() {
    assert!(is_leap_year(2024));
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2023));
    assert_eq!(days_in_month(2, 2000), 29);
    assert_eq!(days_in_month(2, 1900), 28);
}

#[test]
fn test_day_texts_are_one_based_labels() {
    let days = day_texts(2, 2024);
    assert_eq!(days.len(), 29);
    assert_eq!(days.first().map(String::as_str), Some("1"));
    assert_eq!(days.last().map(String::as_str), Some("29"));
    assert_eq!(day_texts(4, 2024).len(), 30);
}

#[test]
fn test_month_texts_full_and_short() {
    let full = month_texts(MonthLabels::Full);
    let short = month_texts(MonthLabels::Short);
    assert_eq!(full.len(), 12);
    assert_eq!(short.len(), 12);
    assert_eq!(full[0], "January");
    assert_eq!(full[8], "September");
    assert_eq!(short[8], "Sep");
    assert_eq!(short[11], "Dec");
}

#[test]
fn test_year_range_lookup() {
    let range = YearRange::new(2000, 2030).unwrap();
    assert_eq!(range.len(), 31);
    assert!(range.contains(2000));
    assert!(range.contains(2030));
    assert!(!range.contains(2031));
    assert_eq!(range.index_of(2024), Some(24));
    assert_eq!(range.index_of(1999), None);
    assert_eq!(range.texts()[24], "2024");
}

#[test]
fn test_year_range_rejects_inverted_bounds() {
    assert_eq!(
        YearRange::new(2030, 2000),
        Err(PickerError::EmptyYearRange {
            min: 2030,
            max: 2000
        })
    );
    assert!(YearRange::try_from(1990..=1990).is_ok());
}

#[test]
fn test_year_range_span_limit() {
    assert!(matches!(
        YearRange::new(i32::MIN, i32::MAX),
        Err(PickerError::YearRangeTooLong { .. })
    ));
    assert!(YearRange::new(0, MAX_YEAR_SPAN as i32).is_err());

    let widest = YearRange::new(1, MAX_YEAR_SPAN as i32).unwrap();
    assert_eq!(widest.len(), MAX_YEAR_SPAN);
    assert_eq!(widest.index_of(MAX_YEAR_SPAN as i32), Some(MAX_YEAR_SPAN - 1));

    let negative = YearRange::new(-50, 49).unwrap();
    assert_eq!(negative.len(), 100);
    assert_eq!(negative.index_of(-50), Some(0));
    assert_eq!(negative.index_of(0), Some(50));
}

#[test]
fn test_default_year_range() {
    let range = YearRange::default();
    assert_eq!((range.min(), range.max()), (1922, 2122));
    let today = chrono::Local::now().date_naive();
    assert!(range.contains(today.year()));
}
