//! The exception table of declared holidays and compensatory workdays.
//!
//! The table is a date-keyed map compiled for a known set of years. It is
//! built exactly once at startup, either from the embedded dataset or from
//! an external JSON file, and is never mutated afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::error::{ServiceError, ServiceResult};

/// The holiday dataset bundled into the binary at compile time.
const EMBEDDED_DATA: &str = include_str!("holidays.json");

/// How an exception entry overrides the default weekday/weekend arithmetic.
///
/// The classification is carried as a typed field rather than inferred from
/// the display label, so renaming a label can never change a date's meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// A declared public holiday. Overrides weekdays.
    Holiday,
    /// A weekend day redesignated as a required workday to offset an
    /// adjacent holiday block. Overrides weekends.
    CompensatoryWorkday,
}

/// A single exception entry: a display label plus its classification.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidayEntry {
    /// Display label for the entry (e.g., "Spring Festival").
    pub name: String,
    /// Whether the entry declares a holiday or a compensatory workday.
    pub kind: DayKind,
}

/// The immutable exception table, keyed by `YYYY-MM-DD` date strings.
///
/// # Sources
///
/// The table is constructed explicitly during service startup and handed to
/// [`HolidayClassifier::new`](crate::holiday::HolidayClassifier::new); there
/// is no lazily-initialized global. Two sources are supported:
///
/// - [`HolidayTable::embedded`]: the dataset compiled into the binary.
/// - [`HolidayTable::from_file`]: an external JSON file with the same shape.
///
/// A load failure is a degraded mode, not a fatal error: callers that want
/// the service to stay available use [`HolidayTable::load_or_empty`], which
/// logs a warning and falls back to an empty table so that every query is
/// answered by weekday/weekend arithmetic alone.
#[derive(Debug, Clone, Default)]
pub struct HolidayTable {
    entries: HashMap<String, HolidayEntry>,
}

impl HolidayTable {
    /// Builds the table from the embedded dataset.
    pub fn embedded() -> ServiceResult<Self> {
        Self::from_json("embedded", EMBEDDED_DATA)
    }

    /// Builds the table from an external JSON file.
    ///
    /// The file must contain a single JSON object mapping `YYYY-MM-DD` keys
    /// to `{ "name": ..., "kind": "holiday" | "compensatory_workday" }`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> ServiceResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ServiceError::HolidayDataNotFound {
            path: path_str.clone(),
        })?;

        Self::from_json(&path_str, &content)
    }

    /// Builds the table from the embedded dataset, degrading to an empty
    /// table (with a logged warning) if the dataset fails to parse.
    pub fn load_or_empty() -> Self {
        match Self::embedded() {
            Ok(table) => table,
            Err(err) => {
                warn!(error = %err, "failed to load holiday data, classifying by weekday only");
                Self::empty()
            }
        }
    }

    /// Returns a table with no exception entries.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a JSON map into a table.
    fn from_json(origin: &str, json: &str) -> ServiceResult<Self> {
        let entries: HashMap<String, HolidayEntry> =
            serde_json::from_str(json).map_err(|e| ServiceError::HolidayDataParse {
                origin: origin.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self { entries })
    }

    /// Looks up the exception entry for a date key, if one exists.
    ///
    /// The key is the raw request string; an exact table hit never requires
    /// the date to parse.
    pub fn get(&self, date: &str) -> Option<&HolidayEntry> {
        self.entries.get(date)
    }

    /// Returns the number of exception entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no exception entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
