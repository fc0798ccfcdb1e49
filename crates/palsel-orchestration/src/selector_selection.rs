//! Selector selection logic.

use std::sync::Arc;

use palsel_core::registry::SelectorFactory;
use palsel_core::selector::{SelectError, Selector};

/// Get selectors to run based on the `--algo` value.
pub fn get_selectors_to_run(
    algo: &str,
    factory: &dyn SelectorFactory,
) -> Result<Vec<Arc<dyn Selector>>, SelectError> {
    match algo {
        "all" => factory
            .available()
            .into_iter()
            .map(|name| factory.get(name))
            .collect(),
        name => Ok(vec![factory.get(name)?]),
    }
}
