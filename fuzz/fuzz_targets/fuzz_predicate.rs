#![no_main]

use libfuzzer_sys::fuzz_target;

use palsel_core::digits::digit_count;
use palsel_core::palindrome::is_palindrome;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    let n = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);

    let s = n.to_string();
    let reversed: String = s.chars().rev().collect();
    assert_eq!(is_palindrome(n), s == reversed, "is_palindrome mismatch at n={n}");
    assert_eq!(
        digit_count(n) as usize,
        n.unsigned_abs().to_string().len(),
        "digit_count mismatch at n={n}"
    );
});
