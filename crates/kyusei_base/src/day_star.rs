//! Solstice-anchored day stars (日家九星).
//!
//! Day stars count up from the kirikae near the winter solstice and down
//! from the kirikae near the summer solstice. A kirikae is the 甲子 day
//! closest to the solstice, chosen by the solstice's own day pillar:
//! pillars up to the threshold pull back, the rest push forward. The
//! threshold is 28 up to 2010-04-27 and 29 afterwards.
//!
//! Consecutive kirikae are 180, 210 or 240 days apart. A 240-day gap is a
//! leap run: its closing kirikae is pulled back 30 days and the next run
//! starts from the alternate star.

use kyusei_time::{CalendarDate, summer_solstice};
use tracing::{debug, error, trace};

use crate::day_star_types::{
    DayStarRecord, KirikaeRun, LEAP_GAP_DAYS, LEAP_PULLBACK_DAYS, REGULAR_GAP_DAYS, RunDirection,
};
use crate::error::KyuseiError;
use crate::star::{ALL_KYUSEI, Kyusei};
use crate::stem_branch::day_pillar;

/// Last date judged with the old threshold.
const THRESHOLD_CHANGE: (i32, u32, u32) = (2010, 4, 27);
const THRESHOLD_BEFORE: u8 = 28;
const THRESHOLD_AFTER: u8 = 29;

/// Kirikae date for a solstice date.
pub fn kirikae_of(solstice: CalendarDate) -> CalendarDate {
    let pillar = day_pillar(solstice).index();
    let threshold = if (solstice.year(), solstice.month(), solstice.day()) <= THRESHOLD_CHANGE {
        THRESHOLD_BEFORE
    } else {
        THRESHOLD_AFTER
    };
    if pillar <= threshold {
        solstice.minus_days(pillar as i64)
    } else {
        solstice.plus_days(60 - pillar as i64)
    }
}

impl KirikaeRun {
    /// Open a run on the kirikae `opened`, locating and checking its close.
    pub fn open(direction: RunDirection, opened: CalendarDate) -> Result<Self, KyuseiError> {
        let (solstice, solstice_date) = direction.closing_solstice(opened);
        let natural = kirikae_of(solstice_date);
        let gap_days = opened.days_until(natural);
        let leap = if gap_days == LEAP_GAP_DAYS {
            debug!(from = %opened, to = %natural, "leap run");
            true
        } else if REGULAR_GAP_DAYS.contains(&gap_days) {
            false
        } else {
            error!(from = %opened, to = %natural, gap_days, "kirikae gap out of cycle");
            return Err(KyuseiError::UnexpectedKirikaeGap {
                from: opened,
                to: natural,
                days: gap_days,
            });
        };
        let next_kirikae = if leap {
            natural.minus_days(LEAP_PULLBACK_DAYS)
        } else {
            natural
        };
        Ok(Self {
            direction,
            opened,
            solstice,
            solstice_date,
            next_kirikae,
            gap_days,
            leap,
        })
    }
}

/// Dense day-star table covering a date range.
///
/// The table starts at the summer kirikae two years before the first
/// requested date, so every requested date lies after at least one
/// switch and does not depend on where the walk began.
#[derive(Debug, Clone)]
pub struct DayStarTable {
    records: Vec<DayStarRecord>,
    runs: Vec<KirikaeRun>,
    first: CalendarDate,
}

impl DayStarTable {
    /// Walk day by day through `[begin, end]` (order-insensitive).
    pub fn build(begin: CalendarDate, end: CalendarDate) -> Result<Self, KyuseiError> {
        let (begin, end) = if begin <= end { (begin, end) } else { (end, begin) };
        let origin = kirikae_of(summer_solstice(begin.year().saturating_sub(2)));
        trace!(%origin, %begin, %end, "walking day stars");

        let mut run = KirikaeRun::open(RunDirection::Descending, origin)?;
        let mut runs = vec![run];
        let mut star = run.direction.start_star(false);
        let mut run_day = 0u32;
        let mut records = Vec::with_capacity(origin.days_until(end).max(0) as usize + 1);
        records.push(plain_record(origin, star, run.direction, run_day));

        let mut current = origin.plus_days(1);
        while current <= end {
            if run.next_kirikae <= current {
                let next = KirikaeRun::open(run.direction.switch(), run.next_kirikae)?;
                star = next.direction.start_star(run.leap);
                debug!(at = %current, direction = ?next.direction, star, "kirikae");
                run = next;
                runs.push(run);
                run_day = 0;
            } else {
                star = run.direction.step(star);
                run_day += 1;
            }
            records.push(plain_record(current, star, run.direction, run_day));
            current = current.plus_days(1);
        }

        let mut table = Self {
            records,
            runs,
            first: origin,
        };
        table.annotate();
        Ok(table)
    }

    /// Mark solstices and kirikae edges before the table is handed out.
    fn annotate(&mut self) {
        for run in self.runs.clone() {
            if let Some(r) = self.get_mut(run.solstice_date) {
                r.is_solstice = true;
            }
            if let Some(r) = self.get_mut(run.next_kirikae) {
                r.is_boundary_after = true;
                r.is_leap_run = run.leap;
                r.boundary = Some(run.solstice);
            }
            if let Some(r) = self.get_mut(run.next_kirikae.minus_days(1)) {
                r.is_boundary_before = true;
            }
        }
    }

    fn slot(&self, date: CalendarDate) -> Option<usize> {
        let offset = self.first.days_until(date);
        if offset < 0 || offset as usize >= self.records.len() {
            return None;
        }
        Some(offset as usize)
    }

    fn get_mut(&mut self, date: CalendarDate) -> Option<&mut DayStarRecord> {
        let i = self.slot(date)?;
        self.records.get_mut(i)
    }

    /// Record for `date`, if the table covers it.
    pub fn get(&self, date: CalendarDate) -> Option<&DayStarRecord> {
        self.slot(date).and_then(|i| self.records.get(i))
    }

    /// Records for `[begin, end]` clipped to the table.
    pub fn range(&self, begin: CalendarDate, end: CalendarDate) -> &[DayStarRecord] {
        let last = self.records.len() as i64 - 1;
        let lo = self.first.days_until(begin).clamp(0, last + 1) as usize;
        let hi = (self.first.days_until(end) + 1).clamp(0, last + 1) as usize;
        if lo >= hi { &[] } else { &self.records[lo..hi] }
    }

    /// Every record, including the lead-in before the requested range.
    pub fn records(&self) -> &[DayStarRecord] {
        &self.records
    }

    /// Runs walked, in order.
    pub fn runs(&self) -> &[KirikaeRun] {
        &self.runs
    }
}

fn plain_record(
    date: CalendarDate,
    star: u8,
    direction: RunDirection,
    run_day: u32,
) -> DayStarRecord {
    DayStarRecord {
        date,
        star: star_of(star),
        ascending: direction.is_ascending(),
        run_day,
        is_solstice: false,
        is_boundary_before: false,
        is_boundary_after: false,
        is_leap_run: false,
        boundary: None,
    }
}

fn star_of(value: u8) -> Kyusei {
    ALL_KYUSEI[(value as usize + 8) % 9]
}

/// Day-star records for every date in `[begin, end]`.
pub fn day_stars(
    begin: CalendarDate,
    end: CalendarDate,
) -> Result<Vec<DayStarRecord>, KyuseiError> {
    let (lo, hi) = if begin <= end { (begin, end) } else { (end, begin) };
    let table = DayStarTable::build(lo, hi)?;
    Ok(table.range(lo, hi).to_vec())
}

/// Day-star record for a single date.
pub fn day_star(date: CalendarDate) -> Result<DayStarRecord, KyuseiError> {
    let table = DayStarTable::build(date, date)?;
    table
        .get(date)
        .copied()
        .ok_or(KyuseiError::NotCovered { date })
}

/// Day-star records for arbitrary dates, in input order, from one walk.
pub fn day_stars_for(dates: &[CalendarDate]) -> Result<Vec<DayStarRecord>, KyuseiError> {
    let (Some(&lo), Some(&hi)) = (dates.iter().min(), dates.iter().max()) else {
        return Ok(Vec::new());
    };
    let table = DayStarTable::build(lo, hi)?;
    Ok(dates.iter().filter_map(|d| table.get(*d).copied()).collect())
}
