//! Reports printed by the subcommands, as JSON or plain text.

use std::fmt;

use kyusei_base::{ALL_DIRECTIONS, DayStarRecord, DirectionFortunes, DirectionLabels, Kyusei};
use kyusei_rs::{QuickCheck, StarProfile, StarSummary};
use kyusei_time::{
    ALL_DOYOU_SEASONS, ALL_SOLAR_TERMS, CalendarDate, QiDate, doyou_window, major_term_entry,
    summer_solstice, winter_solstice,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct QiDateReport {
    pub date: CalendarDate,
    pub qi_year: i32,
    pub month_index: usize,
    pub day_offset: u32,
    pub month12: u32,
    pub month13: u32,
    pub term: &'static str,
    pub month_begin: CalendarDate,
    pub month_end: CalendarDate,
    pub is_doyou: bool,
}

impl From<QiDate> for QiDateReport {
    fn from(qi: QiDate) -> Self {
        Self {
            date: qi.date(),
            qi_year: qi.year(),
            month_index: qi.month_index(),
            day_offset: qi.day_offset(),
            month12: qi.month12(),
            month13: qi.month13(),
            term: qi.term().name(),
            month_begin: qi.boundary(),
            month_end: qi.month_end(),
            is_doyou: qi.is_doyou(),
        }
    }
}

impl fmt::Display for QiDateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: Qi year {}, month index {}", self.date, self.qi_year, self.month_index)?;
        writeln!(
            f,
            "  month {} ({}), day {} of {} .. {}",
            self.month12,
            self.term,
            self.day_offset + 1,
            self.month_begin,
            self.month_end
        )?;
        write!(f, "  doyou: {}", if self.is_doyou { "yes" } else { "no" })
    }
}

#[derive(Serialize)]
pub struct TermEntry {
    pub name: &'static str,
    pub date: CalendarDate,
}

#[derive(Serialize)]
pub struct DoyouEntry {
    pub name: &'static str,
    pub begin: CalendarDate,
    pub end: CalendarDate,
}

#[derive(Serialize)]
pub struct SolarTermsReport {
    pub year: i32,
    pub terms: Vec<TermEntry>,
    pub summer_solstice: CalendarDate,
    pub winter_solstice: CalendarDate,
    pub doyou: Vec<DoyouEntry>,
}

impl SolarTermsReport {
    pub fn new(year: i32) -> Self {
        let terms = ALL_SOLAR_TERMS
            .iter()
            .map(|&t| TermEntry {
                name: t.name(),
                date: major_term_entry(year, t),
            })
            .collect();
        let doyou = ALL_DOYOU_SEASONS
            .iter()
            .map(|&s| {
                let w = doyou_window(year, s);
                DoyouEntry {
                    name: s.name(),
                    begin: w.begin,
                    end: w.end,
                }
            })
            .collect();
        Self {
            year,
            terms,
            summer_solstice: summer_solstice(year),
            winter_solstice: winter_solstice(year),
            doyou,
        }
    }
}

impl fmt::Display for SolarTermsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Qi year {}", self.year)?;
        for t in &self.terms {
            writeln!(f, "  {}  {}", t.name, t.date)?;
        }
        writeln!(f, "  夏至  {}", self.summer_solstice)?;
        writeln!(f, "  冬至  {}", self.winter_solstice)?;
        for (i, d) in self.doyou.iter().enumerate() {
            write!(f, "  {}  {} .. {}", d.name, d.begin, d.end)?;
            if i + 1 < self.doyou.len() {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
pub struct BoardReport {
    pub date: CalendarDate,
    pub level: &'static str,
    pub center: StarSummary,
    pub kiban8: [u8; 8],
    pub kiban12: [u8; 12],
}

impl BoardReport {
    pub fn new(date: CalendarDate, level: &'static str, star: Kyusei) -> Self {
        Self {
            date,
            level,
            center: star.into(),
            kiban8: star.kiban8(),
            kiban12: star.kiban12(),
        }
    }
}

impl fmt::Display for BoardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {} board: {}", self.date, self.level, self.center.name)?;
        for d in ALL_DIRECTIONS {
            writeln!(f, "  {:<4} {}", d.name(), self.kiban8[d.index()])?;
        }
        write!(f, "  kiban12: {:?}", self.kiban12)
    }
}

pub fn render_day_stars(records: &[DayStarRecord]) -> String {
    records
        .iter()
        .map(|r| {
            let mut flags = Vec::new();
            if r.is_solstice {
                flags.push("solstice");
            }
            if r.is_boundary_before {
                flags.push("before-kirikae");
            }
            if r.is_boundary_after {
                flags.push("kirikae");
            }
            if r.is_leap_run {
                flags.push("leap");
            }
            format!(
                "{}  {}  {}  {}",
                r.date,
                r.star.name(),
                if r.ascending { "+" } else { "-" },
                flags.join(",")
            )
            .trim_end()
            .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
pub struct FortuneReport {
    pub birth: CalendarDate,
    pub target: CalendarDate,
    pub fortunes: DirectionFortunes,
}

fn write_board(f: &mut fmt::Formatter<'_>, title: &str, board: &DirectionLabels) -> fmt::Result {
    writeln!(f, "{title}")?;
    for d in ALL_DIRECTIONS {
        let names: Vec<_> = board[d.index()].iter().map(|l| l.name()).collect();
        writeln!(f, "  {:<4} {}", d.name(), names.join(" "))?;
    }
    Ok(())
}

impl fmt::Display for FortuneReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "birth {} / target {}", self.birth, self.target)?;
        write_board(f, "year:", &self.fortunes.year)?;
        write_board(f, "month:", &self.fortunes.month)?;
        write_board(f, "day:", &self.fortunes.day)
    }
}

#[derive(Serialize)]
pub struct LuckyReport {
    pub star: StarSummary,
    pub lucky_stars: Vec<u8>,
    pub text: String,
}

impl fmt::Display for LuckyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.star.name, self.text)
    }
}

fn star_line(label: &str, s: &StarSummary) -> String {
    format!(
        "  {label:<6} {} ({}) {} {}",
        s.name,
        s.reading,
        s.gogyou,
        s.direction.unwrap_or("中央")
    )
}

pub fn render_profile(p: &StarProfile) -> String {
    let b = &p.birth;
    let mut lines = vec![
        format!("birth {}", b.date),
        star_line("year", &b.year),
        star_line("month", &b.month),
        star_line("day", &b.day),
        format!(
            "  pillars {} / {} / {}  納音 {}",
            b.year_pillar.name, b.month_pillar.name, b.day_pillar.name, b.nattin
        ),
        format!("  傾斜 {} ({})", b.keisha, b.keisha_reading),
    ];
    if let Some(c) = &p.current {
        lines.push(format!("current {}", c.date));
        lines.push(star_line("year", &c.year));
        lines.push(star_line("month", &c.month));
        lines.push(star_line("day", &c.day));
    }
    lines.join("\n")
}

pub fn render_quick_check(q: &QuickCheck) -> String {
    let mut lines = vec![
        format!(
            "birth {} ({}) / target {}",
            q.birth_date, q.birth_star.name, q.target_date
        ),
        format!(
            "  boards: year {} / month {} / day {}",
            q.year_board.name, q.month_board.name, q.day_board.name
        ),
        format!("  lucky: {}", q.lucky_text),
    ];
    for v in &q.directions {
        let verdict = v.curse.or(v.blessing).map(|l| l.name()).unwrap_or("");
        lines.push(
            format!(
                "  {:<4} {} {} {}  {}",
                v.name, v.year_star, v.month_star, v.day_star, verdict
            )
            .trim_end()
            .to_string(),
        );
    }
    lines.join("\n")
}
