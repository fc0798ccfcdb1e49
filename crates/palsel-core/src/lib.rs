//! # palsel-core
//!
//! Core library for PalSel: selects the integers whose decimal digits form a
//! palindrome, either sequentially or concurrently on a rayon pool.

pub mod constants;
pub mod digits;
pub mod filter;
pub mod options;
pub mod palindrome;
pub mod registry;
pub mod selector;

// Re-exports
pub use constants::{exit_codes, DEFAULT_PARALLEL_THRESHOLD, MAX_DIGITS};
pub use digits::digit_count;
pub use filter::{filter_concurrent, filter_concurrent_with, filter_sequential};
pub use options::Options;
pub use palindrome::is_palindrome;
pub use registry::{DefaultFactory, SelectorFactory};
pub use selector::{ConcurrentSelector, SelectError, Selector, SequentialSelector};
