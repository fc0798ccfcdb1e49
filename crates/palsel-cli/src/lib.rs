//! # palsel-cli
//!
//! CLI input parsing and result output.

pub mod input;
pub mod output;
pub mod presenter;
pub mod ui;

pub use input::{parse_numbers, InputError};
pub use presenter::CLIResultPresenter;
