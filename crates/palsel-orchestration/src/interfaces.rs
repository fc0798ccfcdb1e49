//! Orchestration interfaces.

use std::time::Duration;

use palsel_core::selector::SelectError;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present the output of one selector.
    fn present_result(&self, result: &SelectionResult, input_len: usize, details: bool);

    /// Present a comparison of several selectors.
    fn present_comparison(&self, results: &[SelectionResult]);

    /// Present an error.
    fn present_error(&self, error: &str);
}

/// Result of running a single selector.
#[derive(Debug, Clone)]
pub struct SelectionResult {
    /// Selector name.
    pub algorithm: String,
    /// The selected numbers or a structured error.
    pub outcome: Result<Vec<i32>, SelectError>,
    /// Selection duration.
    pub duration: Duration,
}

impl SelectionResult {
    /// Number of selected elements, or `None` on failure.
    #[must_use]
    pub fn selected_len(&self) -> Option<usize> {
        self.outcome.as_ref().ok().map(Vec::len)
    }
}
