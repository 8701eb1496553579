//! Error types for the dayvec-calendar crate.

use chrono::NaiveDate;

/// Error type for all fallible operations in the dayvec-calendar crate.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalendarError {
    /// Returned when a string is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid ISO-8601 date {input:?}: {reason}")]
    InvalidIsoDate {
        /// The string that failed to parse.
        input: String,
        /// Why parsing failed.
        reason: String,
    },

    /// Returned when a day offset moves a date outside chrono's supported range.
    #[error("date out of range: {date} offset by {days} days")]
    DateOutOfRange {
        /// The starting date.
        date: NaiveDate,
        /// The requested offset in days.
        days: i64,
    },
}
