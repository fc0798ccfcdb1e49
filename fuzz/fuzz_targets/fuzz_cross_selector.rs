#![no_main]

use libfuzzer_sys::fuzz_target;

use palsel_core::filter::{filter_concurrent, filter_sequential};

fuzz_target!(|data: &[u8]| {
    // Every 4 bytes become one input value
    let numbers: Vec<i32> = data
        .chunks_exact(4)
        .map(|c| i32::from_le_bytes([c[0], c[1], c[2], c[3]]))
        .collect();

    let mut seq = filter_sequential(Some(numbers.as_slice())).unwrap();
    let mut par = filter_concurrent(Some(numbers.as_slice())).unwrap();
    seq.sort_unstable();
    par.sort_unstable();
    assert_eq!(seq, par, "selectors disagree on {numbers:?}");
});
