use std::cell::RefCell;
use std::rc::Rc;

use wheel_picker::{CalendarDate, DateSynchronizer, PickerError, SnappedDate, YearRange};

fn date(y: i32, m: u32, d: u32) -> CalendarDate {
    CalendarDate::new(y, m, d).unwrap()
}

fn years() -> Option<YearRange> {
    Some(YearRange::new(2000, 2030).unwrap())
}

#[test]
fn test_start_year_outside_range_fails() {
    let err =
        DateSynchronizer::new(date(1900, 1, 1), Some(YearRange::DEFAULT), false).unwrap_err();
    assert_eq!(
        err,
        PickerError::StartYearOutOfRange {
            year: 1900,
            min: 1922,
            max: 2122
        }
    );
}

#[test]
fn test_no_year_range_accepts_any_start() {
    let sync = DateSynchronizer::new(date(1500, 3, 1), None, false).unwrap();
    assert_eq!(sync.date(), date(1500, 3, 1));
}

#[test]
fn test_initial_day_texts_follow_start_month() {
    let sync = DateSynchronizer::new(date(2023, 2, 10), years(), false).unwrap();
    assert_eq!(sync.day_texts().len(), 28);
}

#[test]
fn test_year_change_shrinks_february() {
    let mut sync = DateSynchronizer::new(date(2024, 2, 29), years(), false).unwrap();
    assert_eq!(sync.day_texts().len(), 29);

    let resolved = sync.settle_year(23);

    assert_eq!(resolved, Some(23));
    assert_eq!(sync.date(), date(2023, 2, 28));
    assert_eq!(sync.day_texts().len(), 28);
}

#[test]
fn test_month_change_clamps_day() {
    let mut sync = DateSynchronizer::new(date(2024, 1, 31), years(), false).unwrap();

    let resolved = sync.settle_month(1);

    assert_eq!(resolved, 1);
    assert_eq!(sync.date(), date(2024, 2, 29));
    assert_eq!(sync.day_texts().len(), 29);
}

#[test]
fn test_month_index_past_december_clamps() {
    let mut sync = DateSynchronizer::new(date(2024, 5, 5), years(), false).unwrap();
    assert_eq!(sync.settle_month(20), 11);
    assert_eq!(sync.date(), date(2024, 12, 5));
}

#[test]
fn test_backwards_disabled_rejects_earlier_month() {
    let mut sync = DateSynchronizer::new(date(2024, 6, 15), years(), true).unwrap();

    let resolved = sync.settle_month(0);

    assert_eq!(sync.date(), date(2024, 6, 15));
    assert_eq!(resolved, 5);
}

#[test]
fn test_backwards_disabled_accepts_later_month() {
    let mut sync = DateSynchronizer::new(date(2024, 6, 15), years(), true).unwrap();
    assert_eq!(sync.settle_month(6), 6);
    assert_eq!(sync.date(), date(2024, 7, 15));
}

#[test]
fn test_backwards_disabled_rejects_earlier_day_and_year() {
    let mut sync = DateSynchronizer::new(date(2024, 6, 15), years(), true).unwrap();

    assert_eq!(sync.settle_day(9), 14);
    assert_eq!(sync.date(), date(2024, 6, 15));

    assert_eq!(sync.settle_year(23), Some(24));
    assert_eq!(sync.date(), date(2024, 6, 15));
}

#[test]
fn test_backwards_guard_compares_whole_date() {
    let mut sync = DateSynchronizer::new(date(2024, 6, 15), years(), true).unwrap();
    // July first, then back to day 1 of July is still after the start
    sync.settle_month(6);
    assert_eq!(sync.settle_day(0), 0);
    assert_eq!(sync.date(), date(2024, 7, 1));
    // Going back to June now lands on June 1st, which is before the start
    assert_eq!(sync.settle_month(5), 6);
    assert_eq!(sync.date(), date(2024, 7, 1));
}

#[test]
fn test_backwards_enabled_applies_everything() {
    let mut sync = DateSynchronizer::new(date(2024, 6, 15), years(), false).unwrap();

    sync.settle_month(0);
    assert_eq!(sync.date(), date(2024, 1, 15));
    sync.settle_day(0);
    assert_eq!(sync.date(), date(2024, 1, 1));
    sync.settle_year(0);
    assert_eq!(sync.date(), date(2000, 1, 1));
}

#[test]
fn test_year_index_past_end_resolves_to_last_year() {
    let mut sync = DateSynchronizer::new(date(2024, 6, 15), years(), false).unwrap();

    let resolved = sync.settle_year(999);

    assert_eq!(resolved, Some(30));
    assert_eq!(sync.date(), date(2030, 6, 15));
}

#[test]
fn test_year_settle_without_range_is_ignored() {
    let mut sync = DateSynchronizer::new(date(2024, 6, 15), None, false).unwrap();
    assert_eq!(sync.settle_year(3), None);
    assert_eq!(sync.date(), date(2024, 6, 15));
}

#[test]
fn test_day_index_past_label_count_is_clamped() {
    let mut sync = DateSynchronizer::new(date(2023, 2, 10), years(), false).unwrap();

    assert_eq!(sync.settle_day(28), 27);
    assert_eq!(sync.date(), date(2023, 2, 28));

    assert_eq!(sync.settle_day(40), 27);
    assert_eq!(sync.date(), date(2023, 2, 28));
}

#[test]
fn test_huge_indices_clamp_to_last_entry() {
    let mut sync = DateSynchronizer::new(date(2023, 2, 10), years(), false).unwrap();

    assert_eq!(sync.settle_day(4_294_967_300), 27);
    assert_eq!(sync.date(), date(2023, 2, 28));

    assert_eq!(sync.settle_day(usize::MAX), 27);
    assert_eq!(sync.settle_month(usize::MAX), 11);
    assert_eq!(sync.date(), date(2023, 12, 28));

    assert_eq!(sync.settle_year(usize::MAX), Some(30));
    assert_eq!(sync.date().year(), 2030);
}

#[test]
fn test_callback_receives_each_settle() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut sync = DateSynchronizer::new(date(2024, 6, 15), years(), false)
        .unwrap()
        .on_snapped(move |snapped| {
            sink.borrow_mut().push(*snapped);
            None
        });

    sync.settle_day(19);
    sync.settle_month(2);
    sync.settle_year(25);

    let seen = seen.borrow();
    assert_eq!(
        *seen,
        vec![
            SnappedDate::DayOfMonth {
                date: date(2024, 6, 20),
                index: 19
            },
            SnappedDate::Month {
                date: date(2024, 3, 20),
                index: 2
            },
            SnappedDate::Year {
                date: date(2025, 3, 20),
                index: 25
            },
        ]
    );
}

#[test]
fn test_callback_override_is_returned() {
    let mut sync = DateSynchronizer::new(date(2024, 6, 15), years(), false)
        .unwrap()
        .on_snapped(|snapped| match snapped {
            SnappedDate::Month { .. } => Some(0),
            _ => None,
        });

    assert_eq!(sync.settle_month(3), 0);
    // The date follows the settle, not the override
    assert_eq!(sync.date(), date(2024, 4, 15));
    assert_eq!(sync.settle_day(0), 0);
}

#[test]
fn test_rejected_settle_reports_prior_date() {
    let seen = Rc::new(RefCell::new(None));
    let sink = seen.clone();
    let mut sync = DateSynchronizer::new(date(2024, 6, 15), years(), true)
        .unwrap()
        .on_snapped(move |snapped| {
            *sink.borrow_mut() = Some(*snapped);
            None
        });

    sync.settle_month(0);

    assert_eq!(
        *seen.borrow(),
        Some(SnappedDate::Month {
            date: date(2024, 6, 15),
            index: 5
        })
    );
}
