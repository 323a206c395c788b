//! Direction fortunes (吉方・凶方) for a birth profile on a target date.
//!
//! Each board (year, month, day) is the ruling star's `kiban8`. Every
//! direction is checked against all rules independently, so a direction
//! can be lucky and unlucky at the same time. Curses are listed before
//! blessings.

use kyusei_time::{CalendarDate, QiDate};
use tracing::trace;

use crate::day_star::day_star;
use crate::direction::{Direction, tendo};
use crate::error::KyuseiError;
use crate::fortune_types::{
    DirectionFortunes, DirectionLabel, DirectionLabels, Granularity, LuckyStarSource, StarGroup,
};
use crate::star::{CENTER_STAR, KOUTEN_JOUI, Kyusei, SENTEN_JOUI, position_of};
use crate::star_resolve::{month_star, year_star};
use crate::stem_branch::{StemBranch, day_pillar, month_pillar, year_pillar};

impl StarGroup {
    /// Year, month and precise day star of `date`.
    pub fn resolve(date: CalendarDate) -> Result<Self, KyuseiError> {
        Ok(Self::new(
            date,
            year_star(date),
            month_star(date),
            day_star(date)?.star,
        ))
    }
}

/// Rules that only apply on one board.
#[derive(Debug, Clone, Copy)]
enum BoardExtras {
    Year {
        great_triad: Direction,
    },
    Month {
        heavenly_path: Direction,
        child_peril: u8,
        recurring: bool,
    },
    Day {
        heavenly_path: Direction,
    },
}

/// Evaluates every direction of one board.
struct BoardEvaluator<'a, L: ?Sized> {
    layout: [u8; 8],
    reigning: Direction,
    disaster: Direction,
    break_label: DirectionLabel,
    reigning_label: DirectionLabel,
    birth_year: u8,
    birth_month: u8,
    lucky: &'a L,
    is_target: bool,
    same_meeting: Option<u8>,
    extras: BoardExtras,
}

impl<'a, L: LuckyStarSource + ?Sized> BoardEvaluator<'a, L> {
    fn new(
        granularity: Granularity,
        birth: &StarGroup,
        lucky: &'a L,
        current: &StarGroup,
    ) -> Self {
        let star = current.star(granularity);
        let layout = star.kiban8();
        let year = year_pillar(current.date);
        let (pillar, break_label, reigning_label) = match granularity {
            Granularity::Year => (year, DirectionLabel::Saiha, DirectionLabel::Taisai),
            Granularity::Month => (
                month_pillar(current.date),
                DirectionLabel::Geppa,
                DirectionLabel::Gekken,
            ),
            Granularity::Day => (
                day_pillar(current.date),
                DirectionLabel::Nippa,
                DirectionLabel::Nissin,
            ),
        };
        let reigning = pillar.branch().direction();
        let extras = board_extras(granularity, year, current, star);
        Self {
            layout,
            reigning,
            disaster: reigning.opposite(),
            break_label,
            reigning_label,
            birth_year: birth.year.index(),
            birth_month: birth.month.index(),
            lucky,
            is_target: birth.date != current.date,
            same_meeting: position_of(&layout, birth.year.index()).map(|p| KOUTEN_JOUI[p]),
            extras,
        }
    }

    fn evaluate(&self) -> DirectionLabels {
        std::array::from_fn(|i| {
            let mut labels = self.evaluate_position(i);
            labels.sort_by_key(|l| l.is_blessing());
            labels
        })
    }

    fn evaluate_position(&self, i: usize) -> Vec<DirectionLabel> {
        let k = self.layout[i];
        let mut out = Vec::new();

        if k == CENTER_STAR {
            out.push(DirectionLabel::Goou);
        }
        if self.layout[(i + 4) % 8] == CENTER_STAR {
            out.push(DirectionLabel::Anken);
        }
        if self.disaster.index() == i {
            out.push(self.break_label);
        }
        if self.reigning.index() == i {
            out.push(self.reigning_label);
        }

        if let Some(p) = position_of(&self.layout, self.birth_year) {
            if p == i {
                out.push(DirectionLabel::Honmei);
            }
            if (p + 4) % 8 == i {
                out.push(DirectionLabel::HonmeiTeki);
            }
        }
        if let Some(p) = position_of(&self.layout, self.birth_month) {
            if p == i {
                out.push(DirectionLabel::Getumei);
            }
            if (p + 4) % 8 == i {
                out.push(DirectionLabel::GetumeiTeki);
            }
        }

        let home = Kyusei::from_index(k).and_then(Kyusei::direction);
        if home.is_some_and(|d| d.opposite().index() == i) {
            out.push(DirectionLabel::TeiiTeki);
        }

        if self.lucky.max_lucky_stars().contains(&k) {
            out.push(DirectionLabel::Saidai);
        }
        if self.lucky.big_lucky_stars().contains(&k) {
            out.push(DirectionLabel::Daiki);
        }
        if self.is_target && self.same_meeting == Some(k) {
            out.push(DirectionLabel::Doukai);
        }

        match self.extras {
            BoardExtras::Year { great_triad } => {
                if great_triad.index() == i {
                    out.push(DirectionLabel::Daisan);
                }
            }
            BoardExtras::Month {
                heavenly_path,
                child_peril,
                recurring,
            } => {
                if heavenly_path.index() == i {
                    out.push(DirectionLabel::Tendo);
                }
                if self.is_target && k == child_peril {
                    out.push(DirectionLabel::Koji);
                }
                if recurring && self.is_target && is_recurring_position(&self.layout, i) {
                    if out.iter().any(|l| !l.is_blessing()) {
                        out.push(DirectionLabel::RinjuKyou);
                    } else if out.iter().any(|l| l.is_blessing()) {
                        out.push(DirectionLabel::RinjuKiti);
                    }
                }
            }
            BoardExtras::Day { heavenly_path } => {
                if heavenly_path.index() == i {
                    out.push(DirectionLabel::Tendo);
                }
            }
        }
        out
    }
}

fn board_extras(
    granularity: Granularity,
    year: StemBranch,
    current: &StarGroup,
    star: Kyusei,
) -> BoardExtras {
    match granularity {
        Granularity::Year => BoardExtras::Year {
            great_triad: year.branch().triad().direction(),
        },
        Granularity::Month => BoardExtras::Month {
            heavenly_path: tendo(QiDate::of(current.date).month_index()),
            child_peril: year.branch().child_peril_star(),
            recurring: current.year == star,
        },
        Granularity::Day => BoardExtras::Day {
            heavenly_path: tendo(QiDate::of(current.date).month_index()),
        },
    }
}

/// Round trip through the pre-heaven and post-heaven boards.
///
/// The star at `i` is found on the pre-heaven board; the star facing it
/// there is located on the post-heaven board; the position qualifies when
/// that lands back on `i`.
pub fn is_recurring_position(layout: &[u8; 8], i: usize) -> bool {
    let Some(k) = layout.get(i) else {
        return false;
    };
    let Some(p) = position_of(&SENTEN_JOUI, *k) else {
        return false;
    };
    let facing = SENTEN_JOUI[(p + 4) % 8];
    position_of(&KOUTEN_JOUI, facing) == Some(i)
}

/// Labels for one board.
pub fn board_fortunes<L: LuckyStarSource + ?Sized>(
    granularity: Granularity,
    birth: &StarGroup,
    lucky: &L,
    current: &StarGroup,
) -> DirectionLabels {
    trace!(?granularity, star = current.star(granularity).index(), "evaluating board");
    BoardEvaluator::new(granularity, birth, lucky, current).evaluate()
}

/// Labels for all three boards of `current`, seen from `birth`.
pub fn direction_fortunes<L: LuckyStarSource + ?Sized>(
    birth: &StarGroup,
    lucky: &L,
    current: &StarGroup,
) -> DirectionFortunes {
    DirectionFortunes {
        year: board_fortunes(Granularity::Year, birth, lucky, current),
        month: board_fortunes(Granularity::Month, birth, lucky, current),
        day: board_fortunes(Granularity::Day, birth, lucky, current),
    }
}

/// Labels of the birth chart itself (birth date against itself).
pub fn birth_fortunes<L: LuckyStarSource + ?Sized>(
    birth: &StarGroup,
    lucky: &L,
) -> DirectionFortunes {
    direction_fortunes(birth, lucky, birth)
}
