//! # dayvec-calendar
//!
//! Gregorian date helpers for daily series.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["&str (YYYY-MM-DD)"] -->|"dateify()"| B["Option of NaiveDate"]
//!     C["NaiveDate"] -->|"dateify()"| B
//!     B -->|"days_diff()"| D["signed day count"]
//!     B -->|"add_days()"| B
//!     B -->|"day_sequence()"| E["Vec of NaiveDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use dayvec_calendar::{dateify, days_diff, day_sequence};
//!
//! // Normalization accepts dates, ISO-8601 strings, or nothing at all
//! let a = dateify("2013-06-03").unwrap().unwrap();
//! let b = dateify(chrono::NaiveDate::from_ymd_opt(2013, 6, 2)).unwrap().unwrap();
//! assert_eq!(dateify(None::<&str>).unwrap(), None);
//!
//! // a is one day ahead of b
//! assert_eq!(days_diff(a, b), 1);
//!
//! let days = day_sequence(b, 5); // 06-02 ..= 06-06
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | ISO-8601 normalization and day arithmetic |
//! | `sequence` | Contiguous day sequence generation |
//! | `error` | Error types |

mod date;
mod error;
mod sequence;

pub use chrono::NaiveDate;
pub use date::{IntoDay, add_days, dateify, days_diff, parse_iso_date};
pub use error::CalendarError;
pub use sequence::day_sequence;
