//! Nine-Star-Ki catalogs and engines built on the Qi calendar.
//!
//! This crate provides:
//! - Catalogs for the nine stars, five elements, stems, branches and directions
//! - Year, month and legacy day star resolution
//! - The solstice-anchored day-star engine (日家九星)
//! - Direction fortunes for the year, month and day boards
//!
//! Catalog lookups are total. Only the day-star walk can fail, when two
//! kirikae dates fall outside the known cycle.

pub mod day_star;
pub mod day_star_types;
pub mod direction;
pub mod element;
pub mod error;
pub mod fortune;
pub mod fortune_types;
pub mod star;
pub mod star_resolve;
pub mod stem_branch;

pub use day_star::{DayStarTable, day_star, day_stars, day_stars_for, kirikae_of};
pub use day_star_types::{
    DayStarRecord, KirikaeRun, LEAP_GAP_DAYS, LEAP_PULLBACK_DAYS, REGULAR_GAP_DAYS, RunDirection,
};
pub use direction::{ALL_DIRECTIONS, CENTER_NAME, Direction, TENDO, tendo};
pub use element::{ALL_GOGYOU, Gogyou};
pub use error::KyuseiError;
pub use fortune::{birth_fortunes, board_fortunes, direction_fortunes, is_recurring_position};
pub use fortune_types::{
    ALL_DIRECTION_LABELS, ALL_GRANULARITIES, DirectionFortunes, DirectionLabel, DirectionLabels,
    Granularity, LabelKind, LuckyStarSource, LuckyStars, StarGroup,
};
pub use star::{
    ALL_KYUSEI, CENTER_STAR, EMPTY_STAR_TEXT, KIBAN12_PATTERN, KOUTEN_JOUI, Keisha, Kyusei,
    SENTEN_JOUI, find_kipous, find_waki, layout12, position_of, stars_to_text,
};
pub use star_resolve::{
    MONTH_TABLE, legacy_day_star, month_star, month_star_of, year_star, year_star_of,
};
pub use stem_branch::{
    ALL_JIKKAN, ALL_JUNISHI, Jikkan, Junishi, Sangou, StemBranch, day_pillar, month_pillar,
    year_pillar,
};
