//! Decimal digit counting.

use crate::constants::POW10;

/// Number of decimal digits in the magnitude of `number`.
///
/// The sign is ignored, so `digit_count(-120) == 3`. Zero has one digit.
///
/// ```
/// assert_eq!(palsel_core::digits::digit_count(0), 1);
/// assert_eq!(palsel_core::digits::digit_count(-12_321), 5);
/// assert_eq!(palsel_core::digits::digit_count(i32::MAX), 10);
/// ```
#[must_use]
pub fn digit_count(number: i32) -> u32 {
    magnitude_digits(number.unsigned_abs())
}

/// Digit count of an unsigned magnitude, by threshold lookup.
#[must_use]
pub(crate) fn magnitude_digits(magnitude: u32) -> u32 {
    match magnitude {
        1_000_000_000.. => 10,
        100_000_000.. => 9,
        10_000_000.. => 8,
        1_000_000.. => 7,
        100_000.. => 6,
        10_000.. => 5,
        1_000.. => 4,
        100.. => 3,
        10.. => 2,
        _ => 1,
    }
}

/// Power of ten that isolates the leading digit of a `digits`-digit number.
///
/// `digits` must be in `1..=10`.
#[must_use]
pub(crate) fn leading_divider(digits: u32) -> u32 {
    POW10[(digits - 1) as usize]
}
