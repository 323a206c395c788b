//! Qi calendar: months opened by the 12 major solar terms.
//!
//! A Qi year starts at 立春 and its twelve months start at successive
//! major-term entries. January dates before 立春 belong to the previous
//! Qi year, as month index 10 (before 小寒) or 11 (from 小寒 on).

use serde::Serialize;

use crate::date::CalendarDate;
use crate::solar_term::{
    DoyouSeason, DoyouWindow, SolarTerm, doyou_window, major_term_entry, major_terms,
};

/// A date located in the Qi calendar.
///
/// Invariant: `boundary().plus_days(day_offset)` equals `date()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct QiDate {
    year: i32,
    month_index: usize,
    day_offset: u32,
    date: CalendarDate,
}

impl QiDate {
    /// Map a Gregorian date onto the Qi calendar.
    pub fn of(date: CalendarDate) -> Self {
        let terms = major_terms(date.year());
        let (year, month_index) = if date < terms[0] {
            let prev = date.year().saturating_sub(1);
            if date < major_term_entry(prev, SolarTerm::Shoukan) {
                (prev, 10)
            } else {
                (prev, 11)
            }
        } else {
            let passed = terms[1..11].iter().take_while(|b| **b <= date).count();
            (date.year(), passed)
        };
        let boundary = major_term_entry(year, SolarTerm::from_index(month_index));
        Self {
            year,
            month_index,
            day_offset: boundary.days_until(date) as u32,
            date,
        }
    }

    /// Qi date `day_offset` days into month `month_index` of `year`.
    ///
    /// Offsets running past the month end roll into later months.
    pub fn from_parts(year: i32, month_index: usize, day_offset: u32) -> Self {
        let (year, month_index) = normalize(year, month_index as i64);
        let boundary = major_term_entry(year, SolarTerm::from_index(month_index));
        Self::of(boundary.plus_days(day_offset as i64))
    }

    pub const fn year(&self) -> i32 {
        self.year
    }

    /// 0-based month index (0 = 立春 month .. 11 = 小寒 month).
    pub const fn month_index(&self) -> usize {
        self.month_index
    }

    /// Days since the month's opening term.
    pub const fn day_offset(&self) -> u32 {
        self.day_offset
    }

    /// The Gregorian date this Qi date was built from.
    pub const fn date(&self) -> CalendarDate {
        self.date
    }

    /// Major term opening this month.
    pub const fn term(&self) -> SolarTerm {
        SolarTerm::from_index(self.month_index)
    }

    /// Entry date of this month's opening term.
    pub fn boundary(&self) -> CalendarDate {
        major_term_entry(self.year, self.term())
    }

    /// Rebuild the Gregorian date from boundary plus offset.
    pub fn to_date(&self) -> CalendarDate {
        self.boundary().plus_days(self.day_offset as i64)
    }

    /// Month number 1..=12 counted from February (立春 month = 2, 小寒 month = 1).
    pub const fn month12(&self) -> u32 {
        let m = self.month_index as u32 + 2;
        if m > 12 { m - 12 } else { m }
    }

    /// Month number 2..=13 counted from February without wrapping.
    pub const fn month13(&self) -> u32 {
        self.month_index as u32 + 2
    }

    /// First day of this Qi year (立春).
    pub fn year_begin(&self) -> CalendarDate {
        major_term_entry(self.year, SolarTerm::Risshun)
    }

    /// Last day of this Qi year (the day before next 立春).
    pub fn year_end(&self) -> CalendarDate {
        major_term_entry(self.year.saturating_add(1), SolarTerm::Risshun).minus_days(1)
    }

    /// Last day of this Qi month.
    pub fn month_end(&self) -> CalendarDate {
        next_boundary(self.year, self.month_index).minus_days(1)
    }

    /// Number of days in this Qi month.
    pub fn month_length(&self) -> u32 {
        self.boundary().days_until(next_boundary(self.year, self.month_index)) as u32
    }

    /// Doyou window that falls inside this month, if the month has one.
    pub fn doyou_window(&self) -> Option<DoyouWindow> {
        DoyouSeason::for_month_index(self.month_index).map(|s| doyou_window(self.year, s))
    }

    /// Whether the date lies inside a doyou window.
    pub fn is_doyou(&self) -> bool {
        self.doyou_window().is_some_and(|w| w.contains(self.date))
    }

    /// Shift by whole Qi months.
    ///
    /// The day offset is kept when the target month is long enough and
    /// clamped to its last day otherwise.
    pub fn plus_months(&self, months: i64) -> Self {
        let (year, month_index) = normalize(self.year, self.month_index as i64 + months);
        let boundary = major_term_entry(year, SolarTerm::from_index(month_index));
        let length = boundary.days_until(next_boundary(year, month_index)) as u32;
        let day_offset = self.day_offset.min(length.saturating_sub(1));
        Self {
            year,
            month_index,
            day_offset,
            date: boundary.plus_days(day_offset as i64),
        }
    }

    /// Shift by whole Qi years, keeping month index and clamped offset.
    pub fn plus_years(&self, years: i64) -> Self {
        self.plus_months(years * 12)
    }

    /// Shift by calendar days and re-map.
    pub fn plus_days(&self, days: i64) -> Self {
        Self::of(self.date.plus_days(days))
    }

    pub fn minus_days(&self, days: i64) -> Self {
        self.plus_days(-days)
    }
}

/// Fold an overflowing month index into the Qi year.
fn normalize(year: i32, month_index: i64) -> (i32, usize) {
    let years = month_index.div_euclid(12).clamp(i32::MIN as i64, i32::MAX as i64) as i32;
    (year.saturating_add(years), month_index.rem_euclid(12) as usize)
}

/// Opening date of the month after (`year`, `month_index`).
fn next_boundary(year: i32, month_index: usize) -> CalendarDate {
    let (y, m) = normalize(year, month_index as i64 + 1);
    major_term_entry(y, SolarTerm::from_index(m))
}
