//! The date-aligned vector type.

use std::fmt;
use std::ops::Index;

use dayvec_calendar::{IntoDay, NaiveDate, add_days, dateify, day_sequence, days_diff};
use ndarray::{Array1, ArrayView1, Axis, CowArray, Ix1};

use crate::error::VectorError;

/// A one-dimensional array of daily values that knows its first day.
///
/// Element `i` holds the value for `first_day + i` days; the vector covers
/// `len()` consecutive days with no gaps. The buffer is either borrowed
/// (a view into another array, see [`is_view`](Self::is_view)) or owned.
///
/// `first_day` may be unset. Date-aware operations then fail with
/// [`VectorError::FirstDayUnset`].
#[derive(Debug, Clone)]
pub struct DateVector<'a, T> {
    first_day: Option<NaiveDate>,
    data: CowArray<'a, T, Ix1>,
}

impl<'a, T> DateVector<'a, T> {
    /// Wraps `data` as a vector starting at `first_day`.
    ///
    /// `data` may be an owned [`Array1`] or a borrowed [`ArrayView1`]; it is
    /// not copied. `first_day` may be a [`NaiveDate`], a `YYYY-MM-DD` string,
    /// or `None`.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Calendar`] if `first_day` is a malformed
    /// string, or if the last day of the vector would fall outside the
    /// representable date range.
    pub fn new(
        first_day: impl IntoDay,
        data: impl Into<CowArray<'a, T, Ix1>>,
    ) -> Result<Self, VectorError> {
        let data = data.into();
        let first_day = dateify(first_day)?;
        check_span(first_day, data.len())?;
        Ok(Self { first_day, data })
    }

    /// Wraps an owned `Vec` as a vector starting at `first_day`.
    ///
    /// # Errors
    ///
    /// See [`DateVector::new`].
    pub fn from_vec(first_day: impl IntoDay, values: Vec<T>) -> Result<Self, VectorError> {
        Self::new(first_day, Array1::from_vec(values))
    }

    /// Returns the first day, if set.
    pub fn first_day(&self) -> Option<NaiveDate> {
        self.first_day
    }

    /// Sets (or clears, with `None`) the first day.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Calendar`] on a malformed date string or if
    /// the resulting last day is out of range. The vector is left unchanged
    /// on error.
    pub fn set_first_day(&mut self, first_day: impl IntoDay) -> Result<(), VectorError> {
        let first_day = dateify(first_day)?;
        check_span(first_day, self.data.len())?;
        self.first_day = first_day;
        Ok(())
    }

    /// Returns the last day covered, `first_day + (len - 1)` days.
    ///
    /// `None` if the first day is unset or the vector is empty. Always
    /// derived from the current length, never stored.
    pub fn last_day(&self) -> Option<NaiveDate> {
        let first_day = self.first_day?;
        let n = self.data.len();
        if n == 0 {
            return None;
        }
        // check_span guarantees this offset is representable.
        add_days(first_day, (n - 1) as i64).ok()
    }

    /// Number of days (elements) in the vector.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the vector holds no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a read-only view of the values.
    pub fn values(&self) -> ArrayView1<'_, T> {
        self.data.view()
    }

    /// Returns the value recorded for `day`, or `None` if `day` is outside
    /// the vector or the first day is unset.
    pub fn get(&self, day: NaiveDate) -> Option<&T> {
        let offset = days_diff(day, self.first_day?);
        let idx = usize::try_from(offset).ok()?;
        self.data.get(idx)
    }

    /// Returns the date of every element, in order.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::FirstDayUnset`] if the first day is unset.
    pub fn days(&self) -> Result<Vec<NaiveDate>, VectorError> {
        let first_day = self.first_day.ok_or(VectorError::FirstDayUnset)?;
        Ok(day_sequence(first_day, self.data.len()))
    }

    /// Iterates over `(day, value)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::FirstDayUnset`] if the first day is unset.
    pub fn iter(&self) -> Result<impl Iterator<Item = (NaiveDate, &T)> + '_, VectorError> {
        Ok(self.days()?.into_iter().zip(self.data.iter()))
    }

    /// Returns `true` if the buffer is borrowed from another array.
    pub fn is_view(&self) -> bool {
        self.data.is_view()
    }

    /// Returns `true` if the two vectors' buffers overlap in memory.
    ///
    /// Empty vectors never share memory.
    pub fn shares_memory<U>(&self, other: &DateVector<'_, U>) -> bool {
        match (address_span(&self.data.view()), address_span(&other.data.view())) {
            (Some((a_lo, a_hi)), Some((b_lo, b_hi))) => a_lo < b_hi && b_lo < a_hi,
            _ => false,
        }
    }

    /// Detaches the vector from any borrowed buffer.
    ///
    /// Views are deep-copied; owned data is moved without copying.
    pub fn into_owned(self) -> DateVector<'static, T>
    where
        T: Clone,
    {
        DateVector {
            first_day: self.first_day,
            data: CowArray::from(self.data.into_owned()),
        }
    }

    /// Builds a vector from parts already known to be consistent.
    pub(crate) fn from_parts(first_day: NaiveDate, data: CowArray<'a, T, Ix1>) -> Self {
        Self {
            first_day: Some(first_day),
            data,
        }
    }

    pub(crate) fn data(&self) -> &CowArray<'a, T, Ix1> {
        &self.data
    }
}

/// Rejects a first day whose implied last day is not representable.
fn check_span(first_day: Option<NaiveDate>, len: usize) -> Result<(), VectorError> {
    if let Some(first_day) = first_day {
        if len > 0 {
            let offset = i64::try_from(len - 1).unwrap_or(i64::MAX);
            add_days(first_day, offset)?;
        }
    }
    Ok(())
}

/// Byte range `[lo, hi)` covered by a 1-D view, or `None` if it is empty.
fn address_span<T>(view: &ArrayView1<'_, T>) -> Option<(usize, usize)> {
    if view.is_empty() {
        return None;
    }
    let size = std::mem::size_of::<T>().max(1) as isize;
    let first = view.as_ptr() as isize;
    let last = first + (view.len() as isize - 1) * view.stride_of(Axis(0)) * size;
    Some((first.min(last) as usize, (first.max(last) + size) as usize))
}

impl<T> Index<usize> for DateVector<'_, T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<'b, T: PartialEq> PartialEq<DateVector<'b, T>> for DateVector<'_, T> {
    fn eq(&self, other: &DateVector<'b, T>) -> bool {
        self.first_day == other.first_day && self.data == other.data
    }
}

impl<T: fmt::Display> fmt::Display for DateVector<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.first_day, self.last_day()) {
            (Some(first), Some(last)) => write!(f, "DateVector[{first}..{last}](")?,
            (Some(first), None) => write!(f, "DateVector[{first}..](")?,
            (None, _) => write!(f, "DateVector[unset](")?,
        }
        write!(f, "[")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "])")
    }
}
