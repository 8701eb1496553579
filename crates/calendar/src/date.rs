//! ISO-8601 normalization and day arithmetic.

use chrono::{NaiveDate, TimeDelta};

use crate::error::CalendarError;

/// Conversion into an optional calendar day.
///
/// Implemented for [`NaiveDate`], ISO-8601 `YYYY-MM-DD` strings, and
/// `Option` of either. `None` means "no date" and normalizes to `Ok(None)`.
pub trait IntoDay {
    /// Normalizes `self` into a date, or `None` if no date was given.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::InvalidIsoDate`] for malformed strings.
    fn into_day(self) -> Result<Option<NaiveDate>, CalendarError>;
}

impl IntoDay for NaiveDate {
    fn into_day(self) -> Result<Option<NaiveDate>, CalendarError> {
        Ok(Some(self))
    }
}

impl IntoDay for &NaiveDate {
    fn into_day(self) -> Result<Option<NaiveDate>, CalendarError> {
        Ok(Some(*self))
    }
}

impl IntoDay for &str {
    fn into_day(self) -> Result<Option<NaiveDate>, CalendarError> {
        parse_iso_date(self).map(Some)
    }
}

impl IntoDay for String {
    fn into_day(self) -> Result<Option<NaiveDate>, CalendarError> {
        parse_iso_date(&self).map(Some)
    }
}

impl IntoDay for &String {
    fn into_day(self) -> Result<Option<NaiveDate>, CalendarError> {
        parse_iso_date(self).map(Some)
    }
}

impl<T: IntoDay> IntoDay for Option<T> {
    fn into_day(self) -> Result<Option<NaiveDate>, CalendarError> {
        match self {
            Some(x) => x.into_day(),
            None => Ok(None),
        }
    }
}

/// Normalizes a date, an ISO-8601 string, or nothing into `Option<NaiveDate>`.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidIsoDate`] if a string is given and it is
/// not a valid `YYYY-MM-DD` date.
///
/// # Example
///
/// ```ignore
/// assert_eq!(dateify("2013-06-02")?, NaiveDate::from_ymd_opt(2013, 6, 2));
/// assert_eq!(dateify(None::<NaiveDate>)?, None);
/// ```
pub fn dateify(x: impl IntoDay) -> Result<Option<NaiveDate>, CalendarError> {
    x.into_day()
}

/// Parses a strict `YYYY-MM-DD` date.
///
/// chrono alone accepts unpadded fields such as `2013-6-2`; those are
/// rejected here so that only the extended ISO-8601 form is valid. Leading
/// or trailing whitespace is rejected too, never trimmed.
///
/// # Errors
///
/// Returns [`CalendarError::InvalidIsoDate`] on a shape mismatch or an
/// impossible date such as `2013-02-30`.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, CalendarError> {
    let invalid = |reason: String| CalendarError::InvalidIsoDate {
        input: s.to_string(),
        reason,
    };

    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid("expected YYYY-MM-DD".to_string()));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| invalid(e.to_string()))
}

/// Returns how many days `a` is ahead of `b` (`a - b`).
///
/// Positive when `a` is later than `b`, negative when earlier.
pub fn days_diff(a: NaiveDate, b: NaiveDate) -> i64 {
    a.signed_duration_since(b).num_days()
}

/// Offsets `date` by `days` (which may be negative).
///
/// # Errors
///
/// Returns [`CalendarError::DateOutOfRange`] if the result falls outside
/// the range chrono can represent.
pub fn add_days(date: NaiveDate, days: i64) -> Result<NaiveDate, CalendarError> {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .ok_or(CalendarError::DateOutOfRange { date, days })
}
