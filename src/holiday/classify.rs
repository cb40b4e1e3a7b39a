//! Date classification with exception-table precedence.
//!
//! Classification follows a strict precedence: an exact exception-table hit
//! wins over everything, then weekend arithmetic, then the ordinary-weekday
//! default. Malformed input degrades to the weekday default rather than
//! failing, so an unparseable date is never reported as a holiday.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::table::{DayKind, HolidayTable};

/// The display label used for plain weekend days.
pub const WEEKEND_LABEL: &str = "Weekend";

/// The date format accepted by the classifier.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// The four-way classification of a calendar date.
///
/// # Example
///
/// ```
/// use utils_backend::holiday::DayCategory;
///
/// let json = serde_json::to_string(&DayCategory::Workday).unwrap();
/// assert_eq!(json, "\"workday\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayCategory {
    /// A declared public holiday.
    Holiday,
    /// A compensatory workday: a weekend date redesignated as a workday.
    Workday,
    /// An ordinary Saturday or Sunday.
    Weekend,
    /// An ordinary Monday through Friday.
    Weekday,
}

impl std::fmt::Display for DayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayCategory::Holiday => write!(f, "holiday"),
            DayCategory::Workday => write!(f, "workday"),
            DayCategory::Weekend => write!(f, "weekend"),
            DayCategory::Weekday => write!(f, "weekday"),
        }
    }
}

/// The result of a classification query.
///
/// Invariant: `is_holiday` and `is_workday` are never both `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The queried date, echoed back verbatim.
    pub date: String,
    /// Whether the date is a declared public holiday.
    pub is_holiday: bool,
    /// Whether the date is a required workday (ordinary or compensatory).
    pub is_workday: bool,
    /// Display label, when one applies (holiday name, "Compensatory
    /// Workday", or "Weekend"). Absent for ordinary weekdays.
    pub name: Option<String>,
    /// The four-way category used to select display semantics.
    pub category: DayCategory,
}

impl Classification {
    fn weekday(date: &str) -> Self {
        Self {
            date: date.to_string(),
            is_holiday: false,
            is_workday: true,
            name: None,
            category: DayCategory::Weekday,
        }
    }

    fn weekend(date: &str) -> Self {
        Self {
            date: date.to_string(),
            is_holiday: false,
            is_workday: false,
            name: Some(WEEKEND_LABEL.to_string()),
            category: DayCategory::Weekend,
        }
    }
}

/// Classifies calendar dates against an immutable exception table.
///
/// The classifier owns its table; construct it once at startup and share it
/// behind an `Arc`. Classification is pure and synchronous, so concurrent
/// reads need no locking.
///
/// # Example
///
/// ```
/// use utils_backend::holiday::{DayCategory, HolidayClassifier, HolidayTable};
///
/// let classifier = HolidayClassifier::new(HolidayTable::load_or_empty());
///
/// // A Saturday with no exception entry.
/// assert_eq!(classifier.classify("2026-02-28").category, DayCategory::Weekend);
///
/// // A Sunday redesignated as a compensatory workday.
/// assert_eq!(classifier.classify("2025-01-26").category, DayCategory::Workday);
/// ```
#[derive(Debug, Clone)]
pub struct HolidayClassifier {
    table: HolidayTable,
}

impl HolidayClassifier {
    /// Creates a classifier over the given exception table.
    pub fn new(table: HolidayTable) -> Self {
        Self { table }
    }

    /// Returns the exception table backing this classifier.
    pub fn table(&self) -> &HolidayTable {
        &self.table
    }

    /// Classifies a date string.
    ///
    /// Precedence, first match wins:
    ///
    /// 1. An exact exception-table hit (keyed on the raw input string). A
    ///    compensatory workday on a calendar Saturday reports as a workday,
    ///    and a declared holiday on a Tuesday reports as a holiday.
    /// 2. Weekend arithmetic: Saturday or Sunday.
    /// 3. The ordinary-weekday default.
    ///
    /// Input that does not parse as `YYYY-MM-DD` takes branch 3: callers
    /// treat failure-to-classify as "assume ordinary business day", so an
    /// unparseable date is never reported as a holiday. The API layer
    /// rejects malformed dates before they reach this point; the fallback
    /// is a second line of defense, not a substitute for that validation.
    pub fn classify(&self, date: &str) -> Classification {
        if let Some(entry) = self.table.get(date) {
            return match entry.kind {
                DayKind::Holiday => Classification {
                    date: date.to_string(),
                    is_holiday: true,
                    is_workday: false,
                    name: Some(entry.name.clone()),
                    category: DayCategory::Holiday,
                },
                DayKind::CompensatoryWorkday => Classification {
                    date: date.to_string(),
                    is_holiday: false,
                    is_workday: true,
                    name: Some(entry.name.clone()),
                    category: DayCategory::Workday,
                },
            };
        }

        let Ok(parsed) = NaiveDate::parse_from_str(date, DATE_FORMAT) else {
            return Classification::weekday(date);
        };

        match parsed.weekday() {
            Weekday::Sat | Weekday::Sun => Classification::weekend(date),
            _ => Classification::weekday(date),
        }
    }
}
