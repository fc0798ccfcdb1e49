//! Selector trait and the two execution strategies.
//!
//! `Selector` is the public trait consumed by orchestration.
//! `SequentialSelector` preserves input order; `ConcurrentSelector` fans the
//! predicate out over rayon and makes no ordering promise.

use crate::filter::{filter_concurrent_with, filter_sequential};
use crate::options::Options;

/// Error type for palindrome selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// A required argument was absent.
    #[error("invalid argument: `{0}` must not be absent")]
    InvalidArgument(&'static str),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The worker pool could not be created.
    #[error("thread pool error: {0}")]
    Pool(String),

    /// Results from different selectors don't match.
    #[error("result mismatch between selectors")]
    Mismatch,
}

/// Public trait for palindrome selectors, consumed by orchestration.
pub trait Selector: Send + Sync {
    /// Return the palindromic subset of `numbers`.
    fn select(&self, numbers: Option<&[i32]>, opts: &Options) -> Result<Vec<i32>, SelectError>;

    /// Get the name of this selector.
    fn name(&self) -> &str;

    /// Whether the output keeps the relative order of the input.
    fn preserves_order(&self) -> bool;
}

/// Single-threaded selector; output follows input order.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialSelector;

impl SequentialSelector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Selector for SequentialSelector {
    fn select(&self, numbers: Option<&[i32]>, _opts: &Options) -> Result<Vec<i32>, SelectError> {
        filter_sequential(numbers)
    }

    fn name(&self) -> &str {
        "Sequential"
    }

    fn preserves_order(&self) -> bool {
        true
    }
}

/// Data-parallel selector backed by rayon.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConcurrentSelector;

impl ConcurrentSelector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Selector for ConcurrentSelector {
    fn select(&self, numbers: Option<&[i32]>, opts: &Options) -> Result<Vec<i32>, SelectError> {
        filter_concurrent_with(numbers, opts)
    }

    fn name(&self) -> &str {
        "Concurrent"
    }

    fn preserves_order(&self) -> bool {
        false
    }
}
