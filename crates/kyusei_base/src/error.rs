//! Error types for Nine-Star-Ki calculations.

use kyusei_time::CalendarDate;

/// Errors from the star engines.
///
/// Catalog lookups never fail; a broken kirikae cycle is the one fatal case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum KyuseiError {
    /// Two consecutive kirikae dates are not 180, 210 or 240 days apart.
    #[error("unexpected kirikae gap of {days} days between {from} and {to}")]
    UnexpectedKirikaeGap {
        /// Kirikae that opened the run.
        from: CalendarDate,
        /// Kirikae that should close it.
        to: CalendarDate,
        /// Days between the two.
        days: i64,
    },
    /// A day-star table was asked for a date it does not cover.
    #[error("date {date} is outside the day-star table")]
    NotCovered {
        /// The requested date.
        date: CalendarDate,
    },
}
