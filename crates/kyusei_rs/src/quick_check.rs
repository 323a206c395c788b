//! Simplified direction check over the year and month boards.
//!
//! Unlike [`kyusei_base::direction_fortunes`], each direction gets at most
//! one verdict, chosen by a fixed priority:
//! 五黄殺, 暗剣殺, 本命殺, 本命的殺, then 最大吉方 or 吉方.
//! The day board uses the legacy day star and is informational only.

use kyusei_base::{
    ALL_DIRECTIONS, CENTER_STAR, Direction, DirectionLabel, Kyusei, legacy_day_star, month_star,
    position_of, stars_to_text, year_star,
};
use kyusei_time::CalendarDate;
use serde::Serialize;
use tracing::debug;

/// A board's centre star and its layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSummary {
    pub index: u8,
    pub name: &'static str,
    pub layout: [u8; 8],
}

impl From<Kyusei> for BoardSummary {
    fn from(star: Kyusei) -> Self {
        Self {
            index: star.index(),
            name: star.name(),
            layout: star.kiban8(),
        }
    }
}

/// Verdict for one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectionVerdict {
    pub direction: Direction,
    /// Compass-style name (北, 北東, ...).
    pub name: &'static str,
    pub year_star: u8,
    pub month_star: u8,
    pub day_star: u8,
    /// 最大吉方 or 吉方.
    pub blessing: Option<DirectionLabel>,
    /// 五黄殺, 暗剣殺, 本命殺 or 本命的殺.
    pub curse: Option<DirectionLabel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickCheck {
    pub birth_date: CalendarDate,
    pub target_date: CalendarDate,
    pub birth_star: BoardSummary,
    pub year_board: BoardSummary,
    pub month_board: BoardSummary,
    pub day_board: BoardSummary,
    pub lucky_stars: Vec<u8>,
    pub lucky_text: String,
    pub directions: Vec<DirectionVerdict>,
}

/// Opposite of `value`'s position; `None` when the layout lacks it.
fn facing(layout: &[u8; 8], value: u8) -> Option<usize> {
    position_of(layout, value).map(|p| (p + 4) % 8)
}

fn verdict(
    i: usize,
    year: &[u8; 8],
    month: &[u8; 8],
    birth: u8,
    lucky: &[u8],
) -> (Option<DirectionLabel>, Option<DirectionLabel>) {
    let (n, g) = (year[i], month[i]);
    let faces = |value| facing(year, value) == Some(i) || facing(month, value) == Some(i);

    if n == CENTER_STAR || g == CENTER_STAR {
        (None, Some(DirectionLabel::Goou))
    } else if faces(CENTER_STAR) {
        (None, Some(DirectionLabel::Anken))
    } else if n == birth || g == birth {
        (None, Some(DirectionLabel::Honmei))
    } else if faces(birth) {
        (None, Some(DirectionLabel::HonmeiTeki))
    } else if lucky.contains(&n) && lucky.contains(&g) {
        let label = if n == g {
            DirectionLabel::Saidai
        } else {
            DirectionLabel::Daiki
        };
        (Some(label), None)
    } else {
        (None, None)
    }
}

/// Quick lucky-direction check of `target` for someone born on `birth`.
pub fn quick_direction_check(birth: CalendarDate, target: CalendarDate) -> QuickCheck {
    let birth_star = year_star(birth);
    let year = year_star(target);
    let month = month_star(target);
    let day = legacy_day_star(target);
    let lucky = birth_star.lucky_stars();
    debug!(%birth, %target, birth_star = birth_star.index(), "quick direction check");

    let (year_layout, month_layout, day_layout) = (year.kiban8(), month.kiban8(), day.kiban8());
    let directions = ALL_DIRECTIONS
        .iter()
        .map(|&direction| {
            let i = direction.index();
            let (blessing, curse) =
                verdict(i, &year_layout, &month_layout, birth_star.index(), &lucky);
            DirectionVerdict {
                direction,
                name: direction.compass_name(),
                year_star: year_layout[i],
                month_star: month_layout[i],
                day_star: day_layout[i],
                blessing,
                curse,
            }
        })
        .collect();

    QuickCheck {
        birth_date: birth,
        target_date: target,
        birth_star: birth_star.into(),
        year_board: year.into(),
        month_board: month.into(),
        day_board: day.into(),
        lucky_text: stars_to_text(&lucky),
        lucky_stars: lucky,
        directions,
    }
}
