//! PalSel library: application logic for the palindrome selector.

pub mod app;
pub mod config;
pub mod errors;
pub mod version;
