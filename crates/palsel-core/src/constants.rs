//! Constants for digit counting, selector thresholds and exit codes.

/// Default input length below which the concurrent selector stays on the
/// calling thread.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;

/// Maximum number of decimal digits of an `i32` magnitude.
pub const MAX_DIGITS: u32 = 10;

/// Powers of ten for every digit count of an `i32` magnitude.
///
/// `POW10[k]` is `10^k`. The last entry, `10^9`, is the divider used for a
/// 10-digit number and still fits in `u32`.
pub const POW10: [u32; MAX_DIGITS as usize] = {
    let mut table = [1u32; MAX_DIGITS as usize];
    let mut i = 1;
    while i < MAX_DIGITS as usize {
        table[i] = table[i - 1] * 10;
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Selector results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
    /// Input could not be parsed as a list of integers.
    pub const ERROR_INPUT: i32 = 5;
}
