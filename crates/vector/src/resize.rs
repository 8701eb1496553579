//! Re-aligning a vector to a new date window.
//!
//! A resize is planned first ([`ResizePlan`]) and then applied. Pure
//! shrinks borrow the source buffer; anything that grows allocates.

use dayvec_calendar::{IntoDay, NaiveDate, dateify, days_diff};
use ndarray::{Array1, CowArray, s};
use num_traits::Zero;
use tracing::debug;

use crate::error::VectorError;
use crate::vector::DateVector;

/// How many elements to drop and pad on each side of the source.
///
/// Per side, at most one of `trim_*` / `add_*` is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ResizePlan {
    pub first_day: NaiveDate,
    pub trim_start: usize,
    pub add_start: usize,
    pub trim_end: usize,
    pub add_end: usize,
}

impl ResizePlan {
    /// Plans moving the window `[src_first, src_last]` to `[fd_new, ld_new]`.
    ///
    /// Returns `None` when the target window does not overlap the source.
    pub(crate) fn new(
        src_first: NaiveDate,
        src_last: NaiveDate,
        fd_new: NaiveDate,
        ld_new: NaiveDate,
    ) -> Option<Self> {
        if fd_new.max(src_first) > ld_new.min(src_last) {
            return None;
        }
        // Positive: new window starts later, drop from the front.
        let delta_start = days_diff(fd_new, src_first);
        // Positive: new window ends earlier, drop from the back.
        let delta_end = days_diff(src_last, ld_new);
        // Day counts between two NaiveDates always fit in usize.
        Some(Self {
            first_day: fd_new,
            trim_start: delta_start.max(0) as usize,
            add_start: (-delta_start).max(0) as usize,
            trim_end: delta_end.max(0) as usize,
            add_end: (-delta_end).max(0) as usize,
        })
    }

    /// `true` when nothing needs to be added, so the result can borrow.
    pub(crate) fn is_shrink(&self) -> bool {
        self.add_start == 0 && self.add_end == 0
    }
}

impl<T: Clone + Zero> DateVector<'_, T> {
    /// Returns a copy of this vector re-aligned to `[first_day, last_day]`.
    ///
    /// Days outside the new window are dropped and days the source does not
    /// cover are filled with zero. Either bound may be `None` to keep the
    /// current one; bounds may be [`NaiveDate`]s or `YYYY-MM-DD` strings.
    ///
    /// If neither side grows, the result is a view sharing this vector's
    /// buffer (call [`into_owned`](DateVector::into_owned) for an
    /// independent copy). Otherwise it owns freshly allocated storage; its
    /// type still borrows `self`, but `into_owned` on it moves the buffer
    /// without copying, after which the source may be dropped.
    ///
    /// Returns `Ok(None)` if the new window does not overlap this vector's
    /// window at all, or if this vector is empty.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::FirstDayUnset`] if this vector has no first
    /// day, and [`VectorError::Calendar`] for malformed date strings.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let a = DateVector::from_vec("2013-06-02", vec![2, 3, 4, 5, 6])?;
    ///
    /// let b = a.resize("2013-06-03", None::<&str>)?.unwrap();
    /// assert_eq!(b.values().to_vec(), vec![3, 4, 5, 6]);
    /// assert!(b.shares_memory(&a));
    ///
    /// let c = a.resize("2013-06-01", "2013-06-07")?.unwrap();
    /// assert_eq!(c.values().to_vec(), vec![0, 2, 3, 4, 5, 6, 0]);
    /// assert!(!c.shares_memory(&a));
    /// ```
    #[tracing::instrument(level = "debug", skip_all, fields(len = self.len()))]
    pub fn resize(
        &self,
        first_day: impl IntoDay,
        last_day: impl IntoDay,
    ) -> Result<Option<DateVector<'_, T>>, VectorError> {
        let src_first = self.first_day().ok_or(VectorError::FirstDayUnset)?;
        let Some(src_last) = self.last_day() else {
            debug!("source is empty, no overlap possible");
            return Ok(None);
        };

        let fd_new = dateify(first_day)?.unwrap_or(src_first);
        let ld_new = dateify(last_day)?.unwrap_or(src_last);

        let Some(plan) = ResizePlan::new(src_first, src_last, fd_new, ld_new) else {
            debug!(%fd_new, %ld_new, %src_first, %src_last, "windows do not overlap");
            return Ok(None);
        };

        let n = self.len();
        let kept = self.data().slice(s![plan.trim_start..n - plan.trim_end]);

        if plan.is_shrink() {
            debug!(
                trim_start = plan.trim_start,
                trim_end = plan.trim_end,
                "shrinking as a view"
            );
            return Ok(Some(DateVector::from_parts(
                plan.first_day,
                CowArray::from(kept),
            )));
        }

        debug!(
            add_start = plan.add_start,
            add_end = plan.add_end,
            trim_start = plan.trim_start,
            trim_end = plan.trim_end,
            "growing into new storage"
        );
        let mut grown = Vec::with_capacity(plan.add_start + kept.len() + plan.add_end);
        grown.extend(std::iter::repeat_n(T::zero(), plan.add_start));
        grown.extend(kept.iter().cloned());
        grown.extend(std::iter::repeat_n(T::zero(), plan.add_end));

        Ok(Some(DateVector::from_parts(
            plan.first_day,
            CowArray::from(Array1::from_vec(grown)),
        )))
    }
}
