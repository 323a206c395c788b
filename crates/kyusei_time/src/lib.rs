//! Calendar layer for the Nine-Star-Ki engine.
//!
//! This crate provides:
//! - `CalendarDate`, an immutable proleptic Gregorian date with day arithmetic
//! - Solar-term entry dates from the empirical regression table
//! - `QiDate`, the solar-term-delimited Qi calendar
//!
//! Everything here is pure and total except parsing and validated
//! construction of dates from untrusted input.

pub mod date;
pub mod error;
pub mod qi_date;
pub mod solar_term;

pub use date::{CalendarDate, days_in_month, is_leap_year};
pub use error::TimeError;
pub use qi_date::QiDate;
pub use solar_term::{
    ALL_DOYOU_SEASONS, ALL_SOLAR_TERMS, DoyouSeason, DoyouWindow, SolarTerm, Solstice,
    TermCoefficients, doyou_window, major_term_entry, major_terms, summer_solstice,
    winter_solstice,
};
