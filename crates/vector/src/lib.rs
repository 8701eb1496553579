//! Date-aligned daily vectors.
//!
//! A [`DateVector`] is an `ndarray` buffer of daily values plus the date of
//! its first element. Its one non-trivial operation, [`DateVector::resize`],
//! re-aligns the vector to a new date window: values outside the window are
//! trimmed and uncovered days are zero-filled.
//!
//! # Quick start
//!
//! ```
//! use dayvec_vector::DateVector;
//!
//! let a = DateVector::from_vec("2013-06-02", vec![2, 3, 4, 5, 6]).unwrap();
//! assert_eq!(a.last_day().unwrap().to_string(), "2013-06-06");
//!
//! // Shrinking borrows the source buffer.
//! let b = a.resize("2013-06-03", None::<&str>).unwrap().unwrap();
//! assert_eq!(b.values().to_vec(), vec![3, 4, 5, 6]);
//! assert!(b.is_view() && b.shares_memory(&a));
//!
//! // Growing allocates and pads with zeros.
//! let c = a.resize("2013-06-03", "2013-06-07").unwrap().unwrap();
//! assert_eq!(c.values().to_vec(), vec![3, 4, 5, 6, 0]);
//! assert!(!c.shares_memory(&a));
//!
//! // No overlap at all.
//! assert!(a.resize("2013-06-07", None::<&str>).unwrap().is_none());
//! ```
//!
//! # Storage
//!
//! ```text
//! resize()
//!   ├─ ResizePlan::new()   overlap test, trim/add counts per side
//!   ├─ shrink only  ──▶  CowArray::View   (borrows &self)
//!   └─ any growth   ──▶  CowArray::Owned  (zeros ++ kept ++ zeros)
//! ```

pub mod error;
pub mod vector;

pub(crate) mod resize;

pub use dayvec_calendar::{IntoDay, NaiveDate};
pub use error::VectorError;
pub use vector::DateVector;
