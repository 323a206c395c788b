//! Proleptic Gregorian calendar date.
//!
//! `CalendarDate` is an immutable (year, month, day) value. Arithmetic goes
//! through a continuous day count (days since 1970-01-01) using the
//! era-based civil conversion, so it is exact for any year that fits `i32`.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Serialize, Serializer};

use crate::error::TimeError;

/// Days from 0000-03-01 to 1970-01-01 in the era-based day count.
const UNIX_EPOCH_SHIFT: i64 = 719_468;
/// Days in a 400-year Gregorian era.
const DAYS_PER_ERA: i64 = 146_097;

/// A calendar day in the proleptic Gregorian calendar.
///
/// Field order makes the derived `Ord` chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Build a validated date.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, TimeError> {
        if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Build a date letting month and day overflow into neighbouring
    /// months and years.
    ///
    /// Month 13 is January of the next year; day 0 is the last day of the
    /// previous month; day 32 of a 31-day month is the 1st of the next.
    pub fn from_ymd_lenient(year: i32, month: i32, day: i64) -> Self {
        let months = year as i64 * 12 + (month as i64 - 1);
        let y = months.div_euclid(12) as i32;
        let m = months.rem_euclid(12) as u32 + 1;
        let first = Self {
            year: y,
            month: m,
            day: 1,
        };
        first.plus_days(day - 1)
    }

    /// Date from a day count relative to 1970-01-01.
    pub fn from_days_since_epoch(days: i64) -> Self {
        let (year, month, day) = civil_from_days(days);
        Self { year, month, day }
    }

    /// Day count relative to 1970-01-01 (negative before it).
    pub fn days_since_epoch(self) -> i64 {
        days_from_civil(self.year as i64, self.month, self.day)
    }

    pub const fn year(self) -> i32 {
        self.year
    }

    pub const fn month(self) -> u32 {
        self.month
    }

    pub const fn day(self) -> u32 {
        self.day
    }

    pub fn plus_days(self, days: i64) -> Self {
        if days == 0 {
            return self;
        }
        Self::from_days_since_epoch(self.days_since_epoch() + days)
    }

    pub fn minus_days(self, days: i64) -> Self {
        self.plus_days(-days)
    }

    /// Whole calendar days from `self` to `other` (positive when `other` is later).
    pub fn days_until(self, other: Self) -> i64 {
        other.days_since_epoch() - self.days_since_epoch()
    }

    /// Number of days in this date's month.
    pub fn length_of_month(self) -> u32 {
        days_in_month(self.year, self.month)
    }
}

/// Gregorian leap-year rule.
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Length of `month` (1-12) in `year`; 0 for an out-of-range month.
pub const fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * DAYS_PER_ERA + doe - UNIX_EPOCH_SHIFT
}

fn civil_from_days(days: i64) -> (i32, u32, u32) {
    let z = days + UNIX_EPOCH_SHIFT;
    let era = z.div_euclid(DAYS_PER_ERA);
    let doe = z - era * DAYS_PER_ERA;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let month = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year as i32, month, day)
}

impl Display for CalendarDate {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.year < 0 {
            write!(f, "-{:04}-{:02}-{:02}", -(self.year as i64), self.month, self.day)
        } else {
            write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
        }
    }
}

impl FromStr for CalendarDate {
    type Err = TimeError;

    /// Parse `YYYY-MM-DD` (an optional leading `-` marks a negative year).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = |reason| TimeError::Parse {
            input: s.to_string(),
            reason,
        };
        let trimmed = s.trim();
        let (negative, body) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };
        let mut parts = body.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(parse_err("expected YYYY-MM-DD"));
        };
        if y.len() < 4 || m.len() != 2 || d.len() != 2 {
            return Err(parse_err("expected YYYY-MM-DD"));
        }
        let year: i32 = y.parse().map_err(|_| parse_err("year is not a number"))?;
        let month: u32 = m.parse().map_err(|_| parse_err("month is not a number"))?;
        let day: u32 = d.parse().map_err(|_| parse_err("day is not a number"))?;
        let year = if negative { -year } else { year };
        Self::new(year, month, day)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
