//! Types for the solstice-anchored day-star engine.

use kyusei_time::{CalendarDate, Solstice, summer_solstice, winter_solstice};
use serde::Serialize;

use crate::star::Kyusei;

/// Kirikae gap that marks a leap run.
pub const LEAP_GAP_DAYS: i64 = 240;
/// Days a leap run's closing kirikae is pulled back.
pub const LEAP_PULLBACK_DAYS: i64 = 30;
/// Kirikae gaps accepted without a leap.
pub const REGULAR_GAP_DAYS: [i64; 2] = [180, 210];

/// Counting direction of a day-star run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RunDirection {
    /// After the winter kirikae: 1, 2, .. 9, 1, ..
    Ascending,
    /// After the summer kirikae: 9, 8, .. 1, 9, ..
    Descending,
}

impl RunDirection {
    /// Star on the kirikae day that opens a run.
    ///
    /// A run that follows a leap run starts from the alternate star.
    pub const fn start_star(self, after_leap: bool) -> u8 {
        match (self, after_leap) {
            (Self::Ascending, false) => 1,
            (Self::Ascending, true) => 7,
            (Self::Descending, false) => 9,
            (Self::Descending, true) => 3,
        }
    }

    /// Star on the following day.
    pub const fn step(self, star: u8) -> u8 {
        match self {
            Self::Ascending => {
                if star >= 9 {
                    1
                } else {
                    star + 1
                }
            }
            Self::Descending => {
                if star <= 1 {
                    9
                } else {
                    star - 1
                }
            }
        }
    }

    /// Direction of the run that follows.
    pub const fn switch(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    /// Solstice closing a run opened on `opened`.
    ///
    /// An ascending run opened in October or later (a pulled-back winter
    /// kirikae) runs to the next year's summer solstice.
    pub fn closing_solstice(self, opened: CalendarDate) -> (Solstice, CalendarDate) {
        match self {
            Self::Descending => (Solstice::Winter, winter_solstice(opened.year())),
            Self::Ascending => {
                let year = if opened.month() >= 10 {
                    opened.year().saturating_add(1)
                } else {
                    opened.year()
                };
                (Solstice::Summer, summer_solstice(year))
            }
        }
    }

    pub const fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }
}

/// One run between two kirikae dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KirikaeRun {
    /// Counting direction inside the run.
    pub direction: RunDirection,
    /// Kirikae that opened the run (first day of the run).
    pub opened: CalendarDate,
    /// Solstice the run heads towards.
    pub solstice: Solstice,
    /// Date of that solstice.
    pub solstice_date: CalendarDate,
    /// Kirikae that closes the run, after any leap pull-back.
    pub next_kirikae: CalendarDate,
    /// Days from `opened` to the natural closing kirikae (180, 210 or 240).
    pub gap_days: i64,
    /// Whether the gap was 240 days and the close was pulled back.
    pub leap: bool,
}

impl KirikaeRun {
    /// Days actually covered by the run.
    pub fn length(&self) -> i64 {
        self.opened.days_until(self.next_kirikae)
    }
}

/// Day star of one date, with run metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayStarRecord {
    /// The date.
    pub date: CalendarDate,
    /// Star ruling the day.
    pub star: Kyusei,
    /// Whether the date sits in an ascending run.
    pub ascending: bool,
    /// Days since the run's opening kirikae.
    pub run_day: u32,
    /// The date is a solstice.
    pub is_solstice: bool,
    /// The date is the last day before a kirikae.
    pub is_boundary_before: bool,
    /// The date is a kirikae.
    pub is_boundary_after: bool,
    /// The kirikae on this date closes a leap run.
    pub is_leap_run: bool,
    /// Solstice named by the kirikae on this date.
    pub boundary: Option<Solstice>,
}
