//! Solar-term entry dates from the empirical regression formulas.
//!
//! Each term enters on
//! `day = trunc(D + A*(Y - 1900)) - trunc((Y - 1900) / 4)` of its month,
//! with `Y = year + year_offset`. The constants are reference data and the
//! formulas are only meaningful for roughly 1900-2100; outside that span the
//! dates drift silently.

use serde::Serialize;

use crate::date::CalendarDate;

/// Regression constants for one solar term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TermCoefficients {
    /// Gregorian month the term falls in.
    pub month: u32,
    /// Base day (D).
    pub base: f64,
    /// Yearly drift (A).
    pub drift: f64,
    /// Added to the requested year before evaluating the drift.
    pub year_offset: i32,
}

impl TermCoefficients {
    /// Entry date of the term in Gregorian `year`.
    pub fn entry_date(&self, year: i32) -> CalendarDate {
        let t = (year as i64 + self.year_offset as i64 - 1900) as f64;
        let day = (self.base + self.drift * t).trunc() as i64 - (t / 4.0).trunc() as i64;
        CalendarDate::from_ymd_lenient(year, self.month as i32, day)
    }
}

/// The 12 major solar terms (節) that open the Qi-calendar months,
/// in Qi-month order starting from 立春.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    Risshun,
    Keichitsu,
    Seimei,
    Rikka,
    Boushu,
    Shousho,
    Risshuu,
    Hakuro,
    Kanro,
    Rittou,
    Taisetsu,
    Shoukan,
}

/// All 12 major terms in Qi-month order (index 0 = 立春).
pub const ALL_SOLAR_TERMS: [SolarTerm; 12] = [
    SolarTerm::Risshun,
    SolarTerm::Keichitsu,
    SolarTerm::Seimei,
    SolarTerm::Rikka,
    SolarTerm::Boushu,
    SolarTerm::Shousho,
    SolarTerm::Risshuu,
    SolarTerm::Hakuro,
    SolarTerm::Kanro,
    SolarTerm::Rittou,
    SolarTerm::Taisetsu,
    SolarTerm::Shoukan,
];

const MAJOR_TERM_COEFFICIENTS: [TermCoefficients; 12] = [
    coeff(2, 4.8693, 0.242713, -1),
    coeff(3, 6.3968, 0.242512, 0),
    coeff(4, 5.6280, 0.242231, 0),
    coeff(5, 6.3771, 0.241945, 0),
    coeff(6, 6.5733, 0.241731, 0),
    coeff(7, 8.0091, 0.241642, 0),
    coeff(8, 8.4102, 0.241703, 0),
    coeff(9, 8.5186, 0.241898, 0),
    coeff(10, 9.1414, 0.242179, 0),
    coeff(11, 8.2396, 0.242469, 0),
    coeff(12, 7.9152, 0.242689, 0),
    coeff(1, 6.3811, 0.242778, -1),
];

const SUMMER_SOLSTICE: TermCoefficients = coeff(6, 22.2747, 0.241669, 0);
const WINTER_SOLSTICE: TermCoefficients = coeff(12, 22.6587, 0.242752, 0);

const DOYOU_ENTRIES: [TermCoefficients; 4] = [
    coeff(4, 17.8647, 0.242113, 0),
    coeff(7, 20.5896, 0.241649, 0),
    coeff(10, 21.2361, 0.242298, 0),
    coeff(1, 18.1552, 0.242770, -1),
];

const fn coeff(month: u32, base: f64, drift: f64, year_offset: i32) -> TermCoefficients {
    TermCoefficients {
        month,
        base,
        drift,
        year_offset,
    }
}

impl SolarTerm {
    /// Japanese name of the term.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Risshun => "立春",
            Self::Keichitsu => "啓蟄",
            Self::Seimei => "清明",
            Self::Rikka => "立夏",
            Self::Boushu => "芒種",
            Self::Shousho => "小暑",
            Self::Risshuu => "立秋",
            Self::Hakuro => "白露",
            Self::Kanro => "寒露",
            Self::Rittou => "立冬",
            Self::Taisetsu => "大雪",
            Self::Shoukan => "小寒",
        }
    }

    /// 0-based Qi-month index this term opens (立春=0 .. 小寒=11).
    pub const fn index(self) -> usize {
        match self {
            Self::Risshun => 0,
            Self::Keichitsu => 1,
            Self::Seimei => 2,
            Self::Rikka => 3,
            Self::Boushu => 4,
            Self::Shousho => 5,
            Self::Risshuu => 6,
            Self::Hakuro => 7,
            Self::Kanro => 8,
            Self::Rittou => 9,
            Self::Taisetsu => 10,
            Self::Shoukan => 11,
        }
    }

    /// Term opening Qi-month `index`, wrapping modulo 12.
    pub const fn from_index(index: usize) -> Self {
        ALL_SOLAR_TERMS[index % 12]
    }

    /// Regression constants of this term.
    pub const fn coefficients(self) -> TermCoefficients {
        MAJOR_TERM_COEFFICIENTS[self.index()]
    }
}

/// The two solstices anchoring the day-star cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Solstice {
    Summer,
    Winter,
}

impl Solstice {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Summer => "夏至",
            Self::Winter => "冬至",
        }
    }

    /// Solstice date in Gregorian `year`.
    pub fn date(self, year: i32) -> CalendarDate {
        match self {
            Self::Summer => SUMMER_SOLSTICE.entry_date(year),
            Self::Winter => WINTER_SOLSTICE.entry_date(year),
        }
    }
}

/// The four doyou (土用) seasonal-transition windows of a Qi year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DoyouSeason {
    /// Before 立夏, inside Qi month 2.
    Spring,
    /// Before 立秋, inside Qi month 5.
    Summer,
    /// Before 立冬, inside Qi month 8.
    Autumn,
    /// Before the next 立春, inside Qi month 11.
    Winter,
}

/// All four doyou seasons in Qi-year order.
pub const ALL_DOYOU_SEASONS: [DoyouSeason; 4] = [
    DoyouSeason::Spring,
    DoyouSeason::Summer,
    DoyouSeason::Autumn,
    DoyouSeason::Winter,
];

impl DoyouSeason {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Spring => "春土用",
            Self::Summer => "夏土用",
            Self::Autumn => "秋土用",
            Self::Winter => "冬土用",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Spring => 0,
            Self::Summer => 1,
            Self::Autumn => 2,
            Self::Winter => 3,
        }
    }

    /// Season whose window lies inside Qi-month `month_index`, if any.
    pub const fn for_month_index(month_index: usize) -> Option<Self> {
        match month_index {
            2 => Some(Self::Spring),
            5 => Some(Self::Summer),
            8 => Some(Self::Autumn),
            11 => Some(Self::Winter),
            _ => None,
        }
    }
}

/// Half-open doyou window `[begin, end)`; `end` is the next major-term entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DoyouWindow {
    pub season: DoyouSeason,
    pub begin: CalendarDate,
    pub end: CalendarDate,
}

impl DoyouWindow {
    pub fn contains(&self, date: CalendarDate) -> bool {
        self.begin <= date && date < self.end
    }

    /// Length of the window in days.
    pub fn days(&self) -> i64 {
        self.begin.days_until(self.end)
    }
}

/// Entry date of a major term within Qi year `qi_year`.
///
/// 小寒 closes the Qi year, so it is taken from January of `qi_year + 1`.
pub fn major_term_entry(qi_year: i32, term: SolarTerm) -> CalendarDate {
    let year = match term {
        SolarTerm::Shoukan => qi_year.saturating_add(1),
        _ => qi_year,
    };
    term.coefficients().entry_date(year)
}

/// All 12 month boundaries of Qi year `qi_year`, in order.
pub fn major_terms(qi_year: i32) -> [CalendarDate; 12] {
    ALL_SOLAR_TERMS.map(|term| major_term_entry(qi_year, term))
}

/// 夏至 of Gregorian `year`.
pub fn summer_solstice(year: i32) -> CalendarDate {
    Solstice::Summer.date(year)
}

/// 冬至 of Gregorian `year`.
pub fn winter_solstice(year: i32) -> CalendarDate {
    Solstice::Winter.date(year)
}

/// Doyou window of `season` within Qi year `qi_year`.
pub fn doyou_window(qi_year: i32, season: DoyouSeason) -> DoyouWindow {
    let (begin_year, exit) = match season {
        DoyouSeason::Spring => (qi_year, major_term_entry(qi_year, SolarTerm::Rikka)),
        DoyouSeason::Summer => (qi_year, major_term_entry(qi_year, SolarTerm::Risshuu)),
        DoyouSeason::Autumn => (qi_year, major_term_entry(qi_year, SolarTerm::Rittou)),
        DoyouSeason::Winter => {
            let next = qi_year.saturating_add(1);
            (next, major_term_entry(next, SolarTerm::Risshun))
        }
    };
    DoyouWindow {
        season,
        begin: DOYOU_ENTRIES[season.index()].entry_date(begin_year),
        end: exit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> CalendarDate {
        CalendarDate::new(y, m, day).unwrap()
    }

    #[test]
    fn risshun_known_years() {
        assert_eq!(major_term_entry(2000, SolarTerm::Risshun), d(2000, 2, 4));
        assert_eq!(major_term_entry(2020, SolarTerm::Risshun), d(2020, 2, 4));
        assert_eq!(major_term_entry(2021, SolarTerm::Risshun), d(2021, 2, 3));
    }

    #[test]
    fn entry_day_truncates_toward_zero() {
        // t = -1 in 1900: trunc gives 4 - 0, a floor would give 4 - (-1)
        assert_eq!(major_term_entry(1900, SolarTerm::Risshun), d(1900, 2, 4));
    }

    #[test]
    fn extreme_years_saturate() {
        let _ = major_terms(i32::MAX);
        let _ = major_terms(i32::MIN);
        let _ = doyou_window(i32::MAX, DoyouSeason::Winter);
    }

    #[test]
    fn shoukan_belongs_to_next_january() {
        assert_eq!(major_term_entry(1999, SolarTerm::Shoukan), d(2000, 1, 6));
    }

    #[test]
    fn boundaries_strictly_increase() {
        for year in [1901, 1950, 1999, 2000, 2024, 2099] {
            let terms = major_terms(year);
            for pair in terms.windows(2) {
                assert!(pair[0] < pair[1], "{year}: {} !< {}", pair[0], pair[1]);
            }
            assert!(terms[11] < major_term_entry(year + 1, SolarTerm::Risshun));
        }
    }

    #[test]
    fn solstices_land_near_expected_days() {
        for year in 1950..2050 {
            let summer = summer_solstice(year);
            let winter = winter_solstice(year);
            assert_eq!(summer.month(), 6);
            assert!((20..=22).contains(&summer.day()), "{summer}");
            assert_eq!(winter.month(), 12);
            assert!((21..=23).contains(&winter.day()), "{winter}");
        }
    }

    #[test]
    fn doyou_windows_are_about_18_days() {
        for year in [1980, 2000, 2024] {
            for season in ALL_DOYOU_SEASONS {
                let w = doyou_window(year, season);
                assert!((17..=20).contains(&w.days()), "{year} {season:?}: {}", w.days());
            }
        }
    }

    #[test]
    fn doyou_for_month_index() {
        assert_eq!(DoyouSeason::for_month_index(2), Some(DoyouSeason::Spring));
        assert_eq!(DoyouSeason::for_month_index(11), Some(DoyouSeason::Winter));
        assert_eq!(DoyouSeason::for_month_index(0), None);
    }

    #[test]
    fn term_index_round_trip() {
        for (i, t) in ALL_SOLAR_TERMS.iter().enumerate() {
            assert_eq!(t.index(), i);
            assert_eq!(SolarTerm::from_index(i), *t);
        }
    }
}
