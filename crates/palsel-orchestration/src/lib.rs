//! # palsel-orchestration
//!
//! Selector dispatch, timing, and result analysis.

pub mod interfaces;
pub mod orchestrator;
pub mod selector_selection;

pub use interfaces::{ResultPresenter, SelectionResult};
pub use orchestrator::{analyze_comparison_results, execute_selections};
