//! Contiguous day sequence generation.

use chrono::NaiveDate;

/// Generates a contiguous sequence of calendar days.
///
/// Starting from `start`, produces `n_days` consecutive dates. Month, year,
/// and leap-day boundaries follow the proleptic Gregorian calendar. The
/// sequence stops early only if it would run past [`NaiveDate::MAX`].
///
/// # Example
///
/// ```ignore
/// let start = NaiveDate::from_ymd_opt(2012, 2, 28).unwrap();
/// let dates = day_sequence(start, 3);
/// // Feb 28, Feb 29, Mar 1
/// ```
pub fn day_sequence(start: NaiveDate, n_days: usize) -> Vec<NaiveDate> {
    let mut dates = Vec::with_capacity(n_days);
    if n_days == 0 {
        return dates;
    }
    dates.push(start);
    let mut current = start;
    for _ in 1..n_days {
        match current.succ_opt() {
            Some(next) => current = next,
            None => break,
        }
        dates.push(current);
    }
    dates
}
