//! Convenience query surface for the Nine-Star-Ki engine.
//!
//! Wraps `kyusei_time`, `kyusei_base` and `kyusei_config` behind date-based
//! functions, and adds the profile summary and the quick direction check.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use kyusei_rs::*;
//!
//! let birth = parse_date("1990-05-15")?;
//! let target = parse_date("2024-06-20")?;
//! let lucky = LuckyStars::from_own_lucky(resolve_year_star(birth));
//! let fortunes = fortunes_between(birth, target, &lucky)?;
//! println!("{:?}", fortunes.year);
//! ```

pub mod convenience;
pub mod error;
pub mod profile;
pub mod quick_check;

pub use convenience::{
    fortunes_between, fortunes_between_with_config, own_lucky_stars, parse_date,
    resolve_day_star, resolve_day_star_legacy, resolve_day_star_precise, resolve_month_star,
    resolve_year_star, star_group, star_layout8, star_layout12,
};
pub use error::KyuseiRsError;
pub use profile::{BirthProfile, PillarSummary, StarProfile, StarSummary, TargetStars, star_profile};
pub use quick_check::{BoardSummary, DirectionVerdict, QuickCheck, quick_direction_check};

// Re-export the types callers need without depending on the inner crates.
pub use kyusei_base::{
    DayStarRecord, Direction, DirectionFortunes, DirectionLabel, Granularity, Kyusei,
    LuckyStarSource, LuckyStars, StarGroup, direction_fortunes,
};
pub use kyusei_config::{ConfigError, FortuneConfig};
pub use kyusei_time::{CalendarDate, QiDate};
