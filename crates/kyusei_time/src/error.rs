//! Error types for calendar construction and parsing.

/// Errors from building or parsing a [`CalendarDate`](crate::CalendarDate).
///
/// Date arithmetic itself is total; only untrusted input can fail.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The (year, month, day) triple does not name a real calendar day.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate {
        /// Requested year.
        year: i32,
        /// Requested month (1-12 when valid).
        month: u32,
        /// Requested day of month.
        day: u32,
    },
    /// An ISO-8601 `YYYY-MM-DD` string could not be parsed.
    #[error("cannot parse date '{input}': {reason}")]
    Parse {
        /// The rejected input.
        input: String,
        /// What was wrong with it.
        reason: &'static str,
    },
}
