//! Integration tests for solar terms and the Qi calendar.
//!
//! Fixed dates are checked against the regression table; the round trip
//! is checked as a property over the formulas' valid span.

use kyusei_time::{
    CalendarDate, DoyouSeason, QiDate, SolarTerm, doyou_window, major_term_entry, major_terms,
    summer_solstice, winter_solstice,
};
use proptest::prelude::*;

fn d(y: i32, m: u32, day: u32) -> CalendarDate {
    CalendarDate::new(y, m, day).unwrap()
}

// ---------------------------------------------------------------------------
// Solar terms
// ---------------------------------------------------------------------------

#[test]
fn major_terms_2024() {
    let terms = major_terms(2024);
    let expected = [
        d(2024, 2, 4),
        d(2024, 3, 5),
        d(2024, 4, 4),
        d(2024, 5, 5),
        d(2024, 6, 5),
        d(2024, 7, 6),
        d(2024, 8, 7),
        d(2024, 9, 7),
        d(2024, 10, 8),
        d(2024, 11, 7),
        d(2024, 12, 7),
        d(2025, 1, 5),
    ];
    assert_eq!(terms, expected);
}

#[test]
fn solstices_2024() {
    assert_eq!(summer_solstice(2024), d(2024, 6, 21));
    assert_eq!(winter_solstice(2024), d(2024, 12, 21));
}

#[test]
fn winter_doyou_spans_year_end() {
    let w = doyou_window(2024, DoyouSeason::Winter);
    assert_eq!(w.begin, d(2025, 1, 17));
    assert_eq!(w.end, major_term_entry(2025, SolarTerm::Risshun));
}

// ---------------------------------------------------------------------------
// Qi calendar
// ---------------------------------------------------------------------------

#[test]
fn qi_month_index_fixtures() {
    assert_eq!(QiDate::of(d(2024, 2, 15)).month_index(), 0);
    assert_eq!(QiDate::of(d(2024, 3, 15)).month_index(), 1);
    assert_eq!(QiDate::of(d(1985, 3, 10)).month_index(), 1);
    assert_eq!(QiDate::of(d(1990, 5, 15)).month_index(), 3);
}

#[test]
fn risshun_edges() {
    for (before, after, year) in [
        (d(2020, 2, 3), d(2020, 2, 4), 2020),
        (d(2021, 2, 2), d(2021, 2, 3), 2021),
        (d(2024, 2, 3), d(2024, 2, 4), 2024),
    ] {
        assert_eq!(QiDate::of(before).year(), year - 1, "{before}");
        assert_eq!(QiDate::of(after).year(), year, "{after}");
    }
}

proptest! {
    #[test]
    fn round_trip_reproduces_date(days in -25_000i64..47_000) {
        // roughly 1901-12 .. 2098-08
        let date = CalendarDate::from_days_since_epoch(days);
        let q = QiDate::of(date);
        prop_assert_eq!(q.to_date(), date);
        prop_assert!(q.month_index() < 12);
        prop_assert!(q.day_offset() < q.month_length());
    }

    #[test]
    fn day_steps_never_skip_months(days in -25_000i64..47_000) {
        let date = CalendarDate::from_days_since_epoch(days);
        let a = QiDate::of(date);
        let b = a.plus_days(1);
        if a.month_index() == b.month_index() {
            prop_assert_eq!(b.day_offset(), a.day_offset() + 1);
        } else {
            prop_assert_eq!(b.day_offset(), 0);
            prop_assert_eq!(b.month_index(), (a.month_index() + 1) % 12);
        }
    }
}
