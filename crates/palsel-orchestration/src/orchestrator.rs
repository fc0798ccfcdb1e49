//! Core orchestration: selector execution and result analysis.

use std::sync::Arc;
use std::time::Instant;

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use palsel_core::options::Options;
use palsel_core::selector::{SelectError, Selector};

use crate::interfaces::SelectionResult;

/// Run every selector over `numbers`, timing each one.
///
/// With more than one selector they run side by side on rayon.
pub fn execute_selections(
    selectors: &[Arc<dyn Selector>],
    numbers: &[i32],
    opts: &Options,
) -> Vec<SelectionResult> {
    if let [selector] = selectors {
        return vec![run_one(selector.as_ref(), numbers, opts)];
    }

    selectors
        .par_iter()
        .map(|selector| run_one(selector.as_ref(), numbers, opts))
        .collect()
}

fn run_one(selector: &dyn Selector, numbers: &[i32], opts: &Options) -> SelectionResult {
    let start = Instant::now();
    let mut outcome = selector.select(Some(numbers), opts);
    let duration = start.elapsed();

    if opts.sort_output && !selector.preserves_order() {
        if let Ok(selected) = outcome.as_mut() {
            selected.sort_unstable();
        }
    }

    debug!(
        selector = selector.name(),
        input = numbers.len(),
        ok = outcome.is_ok(),
        ?duration,
        "selection finished"
    );

    SelectionResult {
        algorithm: selector.name().to_string(),
        outcome,
        duration,
    }
}

/// Check that every successful selector produced the same multiset.
pub fn analyze_comparison_results(results: &[SelectionResult]) -> Result<(), SelectError> {
    let mut valid = results.iter().filter_map(|r| r.outcome.as_ref().ok()).map(|selected| {
        let mut sorted = selected.clone();
        sorted.sort_unstable();
        sorted
    });

    let Some(first) = valid.next() else {
        return Err(SelectError::Config("no valid results".into()));
    };

    if valid.any(|other| other != first) {
        return Err(SelectError::Mismatch);
    }

    Ok(())
}
