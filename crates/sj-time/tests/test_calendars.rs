//! Integration tests for the `Calendar` trait on the Japan calendar.

use sj_time::calendar::Calendar;
use sj_time::calendars::japan::Japan;
use sj_time::{Date, DayInfo};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

/// Assert that every date in `expected` is a holiday, and every weekday
/// holiday in the range is in `expected`.
fn check_holidays(cal: &dyn Calendar, from: Date, to: Date, expected: &[Date]) {
    let calculated = cal.holiday_list(from, to, false);
    let calc_set: std::collections::HashSet<_> = calculated.iter().copied().collect();
    let exp_set: std::collections::HashSet<_> = expected.iter().copied().collect();

    for &d in &calculated {
        assert!(
            exp_set.contains(&d),
            "{}: {} calculated as holiday but not expected ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
    for &d in expected {
        assert!(
            calc_set.contains(&d),
            "{}: {} expected as holiday but not found ({})",
            cal.name(),
            d,
            d.weekday()
        );
    }
}

// ─── Japan holidays ───────────────────────────────────────────────────────────

#[test]
fn test_japan_holidays_2009() {
    let expected = vec![
        date(2009, 1, 1),
        date(2009, 1, 12),
        date(2009, 2, 11),
        date(2009, 3, 20),
        date(2009, 4, 29),
        // May 3 is Sunday, excluded
        date(2009, 5, 4),
        date(2009, 5, 5),
        date(2009, 7, 20),
        date(2009, 9, 21),
        date(2009, 9, 22),
        date(2009, 9, 23),
        date(2009, 10, 12),
        date(2009, 11, 3),
        date(2009, 11, 23),
        date(2009, 12, 23),
    ];
    check_holidays(&Japan, date(2009, 1, 1), date(2009, 12, 31), &expected);
}

#[test]
fn test_japan_holidays_1989() {
    let expected = vec![
        // Jan 1 and Jan 15 are Sundays, excluded
        date(1989, 1, 2),
        date(1989, 1, 16),
        // Feb 11 is Saturday, excluded
        date(1989, 2, 24),
        date(1989, 3, 21),
        // Apr 29 is Saturday, excluded
        date(1989, 5, 3),
        date(1989, 5, 4),
        date(1989, 5, 5),
        date(1989, 9, 15),
        // Sep 23 is Saturday, excluded
        date(1989, 10, 10),
        date(1989, 11, 3),
        date(1989, 11, 23),
        // Dec 23 is Saturday, excluded
    ];
    check_holidays(&Japan, date(1989, 1, 1), date(1989, 12, 31), &expected);
}

#[test]
fn test_holiday_list_with_weekends() {
    let listed = Japan.holiday_list(date(2009, 5, 1), date(2009, 5, 7), true);
    assert_eq!(
        listed,
        vec![date(2009, 5, 2), date(2009, 5, 3), date(2009, 5, 4), date(2009, 5, 5)]
    );
}

#[test]
fn test_holiday_list_single_day() {
    let d = date(2024, 1, 1);
    assert_eq!(Japan.holiday_list(d, d, false), vec![d]);
    assert!(Japan.holiday_list(date(2024, 1, 2), date(2024, 1, 1), false).is_empty());
}

#[test]
fn test_holiday_list_stops_at_the_last_supported_date() {
    // No weekday holiday in the last week of 9999; the walk must not step past it.
    assert!(Japan.holiday_list(date(9999, 12, 25), Date::MAX, false).is_empty());
}

// ─── Day info ─────────────────────────────────────────────────────────────────

#[test]
fn test_day_info_matches_calendar() {
    for info in DayInfo::for_month(2009, 9).unwrap() {
        let d = info.date();
        if Japan.is_business_day(d) {
            assert!(!info.is_day_off(), "{d}");
        }
        assert_eq!(info.observance(), Japan.observance(d), "{d}");
    }
}
