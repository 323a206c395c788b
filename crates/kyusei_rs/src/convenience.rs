use kyusei_base::{
    DayStarRecord, DirectionFortunes, Kyusei, LuckyStarSource, StarGroup, day_star, day_stars,
    direction_fortunes, legacy_day_star, month_star, year_star,
};
use kyusei_config::FortuneConfig;
use kyusei_time::CalendarDate;
use tracing::debug;

use crate::error::KyuseiRsError;

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(text: &str) -> Result<CalendarDate, KyuseiRsError> {
    Ok(text.parse()?)
}

/// Star ruling the Qi year of `date`.
pub fn resolve_year_star(date: CalendarDate) -> Kyusei {
    year_star(date)
}

/// Star ruling the Qi month of `date`.
pub fn resolve_month_star(date: CalendarDate) -> Kyusei {
    month_star(date)
}

/// Day star from the plain 9-day rotation.
///
/// Not aligned with [`resolve_day_star_precise`]; kept for the quick check.
pub fn resolve_day_star_legacy(date: CalendarDate) -> Kyusei {
    legacy_day_star(date)
}

/// Solstice-anchored day-star records for every date in `[begin, end]`.
pub fn resolve_day_star_precise(
    begin: CalendarDate,
    end: CalendarDate,
) -> Result<Vec<DayStarRecord>, KyuseiRsError> {
    Ok(day_stars(begin, end)?)
}

/// Solstice-anchored day-star record for one date.
pub fn resolve_day_star(date: CalendarDate) -> Result<DayStarRecord, KyuseiRsError> {
    Ok(day_star(date)?)
}

/// 8-direction board with `star` in the centre.
pub fn star_layout8(star: Kyusei) -> [u8; 8] {
    star.kiban8()
}

/// 12-slot board with `star` in the centre.
pub fn star_layout12(star: Kyusei) -> [u8; 12] {
    star.kiban12()
}

/// Stars compatible with `star`, sorted ascending.
pub fn own_lucky_stars(star: Kyusei) -> Vec<u8> {
    star.lucky_stars()
}

/// Year, month and precise day star of `date`.
pub fn star_group(date: CalendarDate) -> Result<StarGroup, KyuseiRsError> {
    Ok(StarGroup::resolve(date)?)
}

/// Direction fortunes of `target` for someone born on `birth`.
pub fn fortunes_between<L: LuckyStarSource + ?Sized>(
    birth: CalendarDate,
    target: CalendarDate,
    lucky: &L,
) -> Result<DirectionFortunes, KyuseiRsError> {
    let birth_group = StarGroup::resolve(birth)?;
    let target_group = StarGroup::resolve(target)?;
    debug!(%birth, %target, "direction fortunes");
    Ok(direction_fortunes(&birth_group, lucky, &target_group))
}

/// As [`fortunes_between`], with disabled labels removed.
pub fn fortunes_between_with_config<L: LuckyStarSource + ?Sized>(
    birth: CalendarDate,
    target: CalendarDate,
    lucky: &L,
    config: &FortuneConfig,
) -> Result<DirectionFortunes, KyuseiRsError> {
    let full = fortunes_between(birth, target, lucky)?;
    Ok(config.apply(&full))
}
