//! Holiday/workday classification for the Chinese public-holiday calendar.
//!
//! The engine answers one question: for a given `YYYY-MM-DD` date, is it a
//! declared public holiday, a compensatory workday, a plain weekend, or an
//! ordinary weekday? A fixed exception table of declared holidays and
//! compensatory workdays takes precedence over weekday/weekend arithmetic.
//!
//! # Example
//!
//! ```
//! use utils_backend::holiday::{DayCategory, HolidayClassifier, HolidayTable};
//!
//! let classifier = HolidayClassifier::new(HolidayTable::load_or_empty());
//! let result = classifier.classify("2026-02-23");
//! assert_eq!(result.category, DayCategory::Holiday);
//! assert_eq!(result.name.as_deref(), Some("Spring Festival"));
//! ```

mod classify;
mod table;

pub use classify::{Classification, DayCategory, HolidayClassifier, WEEKEND_LABEL};
pub use table::{DayKind, HolidayEntry, HolidayTable};
