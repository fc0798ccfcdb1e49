//! Digit-palindrome predicate.
//!
//! Digits are compared from both ends inward with integer arithmetic, without
//! formatting the number. Each step strips the leading and trailing digit and
//! shrinks the divider by a factor of 100, stopping at the first mismatch.

use crate::digits::{leading_divider, magnitude_digits};

/// Returns `true` if the decimal digits of `number` read the same in both
/// directions.
///
/// Negative numbers are never palindromes.
///
/// ```
/// use palsel_core::palindrome::is_palindrome;
///
/// assert!(is_palindrome(12_321));
/// assert!(is_palindrome(0));
/// assert!(!is_palindrome(-121));
/// assert!(!is_palindrome(1_000_021));
/// ```
#[must_use]
pub fn is_palindrome(number: i32) -> bool {
    let Ok(magnitude) = u32::try_from(number) else {
        return false;
    };
    strip_ends(magnitude, leading_divider(magnitude_digits(magnitude)))
}

/// `divider` is `10^(w-1)` for the remaining digit width `w` of `number`.
///
/// The width is carried by the divider rather than recomputed from `number`,
/// because stripping can expose leading zeros: `1_000_021` strips to `"00002"`,
/// which must still be compared as five digits.
fn strip_ends(number: u32, divider: u32) -> bool {
    if divider <= 1 {
        return true;
    }

    let left = number / divider;
    let right = number % 10;
    if left != right {
        return false;
    }

    strip_ends((number % divider) / 10, divider / 100)
}
