//! Star profile of a birth date, optionally with a target date's stars.

use kyusei_base::{Kyusei, StarGroup, StemBranch, day_pillar, month_pillar, year_pillar};
use kyusei_time::CalendarDate;
use serde::Serialize;
use tracing::debug;

use crate::error::KyuseiRsError;

/// One star with its catalog data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarSummary {
    pub index: u8,
    pub name: &'static str,
    pub reading: &'static str,
    pub gogyou: &'static str,
    /// Board-style home direction; `None` for 五黄.
    pub direction: Option<&'static str>,
}

impl From<Kyusei> for StarSummary {
    fn from(star: Kyusei) -> Self {
        Self {
            index: star.index(),
            name: star.name(),
            reading: star.reading(),
            gogyou: star.gogyou().name(),
            direction: star.direction().map(|d| d.name()),
        }
    }
}

/// A stem-branch pillar broken into its parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PillarSummary {
    pub index: u8,
    pub name: String,
    pub stem: &'static str,
    pub stem_reading: &'static str,
    pub branch: &'static str,
}

impl From<StemBranch> for PillarSummary {
    fn from(sb: StemBranch) -> Self {
        Self {
            index: sb.index(),
            name: sb.name(),
            stem: sb.stem().name(),
            stem_reading: sb.stem().reading(),
            branch: sb.branch().name(),
        }
    }
}

/// Stars and pillars of a birth date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BirthProfile {
    pub date: CalendarDate,
    pub year: StarSummary,
    pub month: StarSummary,
    pub day: StarSummary,
    pub year_pillar: PillarSummary,
    pub month_pillar: PillarSummary,
    pub day_pillar: PillarSummary,
    /// 納音 of the year pillar.
    pub nattin: &'static str,
    /// Inclination of the year star.
    pub keisha: &'static str,
    pub keisha_reading: &'static str,
}

/// Stars of a target date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetStars {
    pub date: CalendarDate,
    pub year: StarSummary,
    pub month: StarSummary,
    pub day: StarSummary,
}

impl From<StarGroup> for TargetStars {
    fn from(g: StarGroup) -> Self {
        Self {
            date: g.date,
            year: g.year.into(),
            month: g.month.into(),
            day: g.day.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarProfile {
    pub birth: BirthProfile,
    pub current: Option<TargetStars>,
}

/// Profile of `birth`, plus the stars of `current` when given.
///
/// Day stars come from the solstice-anchored engine.
pub fn star_profile(
    birth: CalendarDate,
    current: Option<CalendarDate>,
) -> Result<StarProfile, KyuseiRsError> {
    let group = StarGroup::resolve(birth)?;
    let year = year_pillar(birth);
    let keisha = group.year.inclination();
    debug!(%birth, year_star = group.year.index(), "star profile");

    let birth = BirthProfile {
        date: birth,
        year: group.year.into(),
        month: group.month.into(),
        day: group.day.into(),
        year_pillar: year.into(),
        month_pillar: month_pillar(birth).into(),
        day_pillar: day_pillar(birth).into(),
        nattin: year.nattin(),
        keisha: keisha.name(),
        keisha_reading: keisha.reading(),
    };
    let current = current
        .map(StarGroup::resolve)
        .transpose()?
        .map(TargetStars::from);
    Ok(StarProfile { birth, current })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_center_star_has_no_direction() {
        let s = StarSummary::from(Kyusei::Goou);
        assert_eq!(s.index, 5);
        assert_eq!(s.direction, None);
        assert_eq!(s.gogyou, "土");
    }

    #[test]
    fn pillar_summary_parts() {
        let p = PillarSummary::from(StemBranch::new(40));
        assert_eq!(p.name, "甲辰");
        assert_eq!(p.stem, "甲");
        assert_eq!(p.branch, "辰");
    }
}
