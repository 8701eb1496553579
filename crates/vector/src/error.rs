//! Error types for the dayvec-vector crate.

use dayvec_calendar::CalendarError;

/// Error type for all fallible operations in the dayvec-vector crate.
///
/// A resize whose window does not overlap the source is not an error; it is
/// reported as `Ok(None)`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum VectorError {
    /// Returned when a date-aware operation runs on a vector whose first
    /// day has not been set.
    #[error("first day is not set")]
    FirstDayUnset,

    /// Calendar error (malformed date string or out-of-range date).
    #[error(transparent)]
    Calendar(#[from] CalendarError),
}
