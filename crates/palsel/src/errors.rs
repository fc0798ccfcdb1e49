//! Error handling and exit codes.

use palsel_cli::input::InputError;
use palsel_core::constants::exit_codes;
use palsel_core::selector::SelectError;

/// Map a selection error to its exit code.
#[must_use]
pub fn handle_error(err: &SelectError) -> i32 {
    match err {
        SelectError::InvalidArgument(_) | SelectError::Pool(_) => exit_codes::ERROR_GENERIC,
        SelectError::Config(_) => exit_codes::ERROR_CONFIG,
        SelectError::Mismatch => exit_codes::ERROR_MISMATCH,
    }
}

/// Exit code for an application error, based on its root cause.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<SelectError>() {
        handle_error(e)
    } else if err.downcast_ref::<InputError>().is_some() {
        exit_codes::ERROR_INPUT
    } else {
        exit_codes::ERROR_GENERIC
    }
}
