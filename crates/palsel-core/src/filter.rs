//! Sequential and concurrent palindrome filters.
//!
//! The concurrent path fans the input out over rayon workers. Each worker
//! folds its share into a local `Vec` and the locals are concatenated at the
//! end, so no accumulator is shared between threads.

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

use crate::options::Options;
use crate::palindrome::is_palindrome;
use crate::selector::SelectError;

/// Keep the palindromic elements of `numbers`, in input order.
///
/// # Errors
///
/// Returns [`SelectError::InvalidArgument`] if `numbers` is `None`.
///
/// ```
/// let out = palsel_core::filter_sequential(Some(&[121, -121, 123, 0, 7][..])).unwrap();
/// assert_eq!(out, vec![121, 0, 7]);
/// ```
pub fn filter_sequential(numbers: Option<&[i32]>) -> Result<Vec<i32>, SelectError> {
    let numbers = numbers.ok_or(SelectError::InvalidArgument("numbers"))?;
    Ok(sequential(numbers))
}

/// Keep the palindromic elements of `numbers`, evaluating them on the global
/// rayon pool. The order of the result is unspecified.
///
/// # Errors
///
/// Returns [`SelectError::InvalidArgument`] if `numbers` is `None`.
pub fn filter_concurrent(numbers: Option<&[i32]>) -> Result<Vec<i32>, SelectError> {
    let numbers = numbers.ok_or(SelectError::InvalidArgument("numbers"))?;
    Ok(fan_out(numbers))
}

/// Concurrent filter honouring [`Options::threads`] and
/// [`Options::parallel_threshold`].
///
/// # Errors
///
/// Returns [`SelectError::InvalidArgument`] if `numbers` is `None`, or
/// [`SelectError::Pool`] if a dedicated thread pool cannot be built.
pub fn filter_concurrent_with(
    numbers: Option<&[i32]>,
    opts: &Options,
) -> Result<Vec<i32>, SelectError> {
    let numbers = numbers.ok_or(SelectError::InvalidArgument("numbers"))?;

    if numbers.len() < opts.parallel_threshold {
        debug!(
            len = numbers.len(),
            threshold = opts.parallel_threshold,
            "input below parallel threshold, filtering inline"
        );
        return Ok(sequential(numbers));
    }

    if opts.threads == 0 {
        return Ok(fan_out(numbers));
    }

    let pool = ThreadPoolBuilder::new()
        .num_threads(opts.threads)
        .build()
        .map_err(|e| SelectError::Pool(format!("failed to create thread pool: {e}")))?;
    info!(threads = opts.threads, "built dedicated selector pool");

    Ok(pool.install(|| fan_out(numbers)))
}

fn sequential(numbers: &[i32]) -> Vec<i32> {
    let kept: Vec<i32> = numbers.iter().copied().filter(|&n| is_palindrome(n)).collect();
    debug!(input = numbers.len(), kept = kept.len(), "sequential filter done");
    kept
}

fn fan_out(numbers: &[i32]) -> Vec<i32> {
    let kept = numbers
        .par_iter()
        .fold(Vec::new, |mut local, &n| {
            if is_palindrome(n) {
                local.push(n);
            }
            local
        })
        .reduce(Vec::new, |mut left, mut right| {
            left.append(&mut right);
            left
        });
    debug!(input = numbers.len(), kept = kept.len(), "concurrent filter done");
    kept
}
