//! Application state for the utility backend API.

use std::sync::Arc;

use crate::holiday::HolidayClassifier;

/// Shared application state.
///
/// Holds the holiday classifier built once at startup. The classifier and
/// its exception table are immutable, so handlers share them behind an
/// `Arc` with no locking.
#[derive(Clone)]
pub struct AppState {
    classifier: Arc<HolidayClassifier>,
}

impl AppState {
    /// Creates a new application state around a classifier.
    pub fn new(classifier: HolidayClassifier) -> Self {
        Self {
            classifier: Arc::new(classifier),
        }
    }

    /// Returns a reference to the holiday classifier.
    pub fn classifier(&self) -> &HolidayClassifier {
        &self.classifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::HolidayTable;

    #[test]
    fn test_app_state_is_clone() {
        // Required for axum state
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_one_classifier() {
        let state = AppState::new(HolidayClassifier::new(HolidayTable::empty()));
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.classifier, &clone.classifier));
    }
}
