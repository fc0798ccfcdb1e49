//! Golden file integration tests.
//!
//! Reads tests/testdata/palindrome_golden.json and verifies that every
//! selector route produces the recorded palindromic subsets.

use std::sync::Arc;

use serde::Deserialize;

use palsel_core::digits::digit_count;
use palsel_core::filter::{filter_concurrent, filter_concurrent_with, filter_sequential};
use palsel_core::options::Options;
use palsel_core::registry::{DefaultFactory, SelectorFactory};
use palsel_core::selector::Selector;
use palsel_orchestration::orchestrator::{analyze_comparison_results, execute_selections};

// ---------------------------------------------------------------------------
// Golden data structures
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct GoldenData {
    #[allow(dead_code)]
    description: String,
    cases: Vec<GoldenCase>,
    digit_counts: Vec<DigitCase>,
}

#[derive(Deserialize)]
struct GoldenCase {
    name: String,
    input: Vec<i32>,
    expected: Vec<i32>,
}

#[derive(Deserialize)]
struct DigitCase {
    n: i32,
    digits: u32,
}

fn load_golden_data() -> GoldenData {
    let path = concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/testdata/palindrome_golden.json"
    );
    let data = std::fs::read_to_string(path).expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden JSON")
}

fn sorted(mut v: Vec<i32>) -> Vec<i32> {
    v.sort_unstable();
    v
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[test]
fn golden_sequential() {
    for case in load_golden_data().cases {
        let out = filter_sequential(Some(case.input.as_slice())).unwrap();
        assert_eq!(out, case.expected, "case: {}", case.name);
    }
}

#[test]
fn golden_concurrent() {
    for case in load_golden_data().cases {
        let out = filter_concurrent(Some(case.input.as_slice())).unwrap();
        assert_eq!(sorted(out), sorted(case.expected), "case: {}", case.name);
    }
}

#[test]
fn golden_dedicated_pool() {
    let opts = Options {
        threads: 2,
        parallel_threshold: 1,
        ..Default::default()
    };
    for case in load_golden_data().cases {
        let out = filter_concurrent_with(Some(case.input.as_slice()), &opts).unwrap();
        assert_eq!(sorted(out), sorted(case.expected), "case: {}", case.name);
    }
}

#[test]
fn golden_through_registry() {
    let factory = DefaultFactory::new();
    let selectors: Vec<Arc<dyn Selector>> = factory
        .available()
        .into_iter()
        .map(|name| factory.get(name).unwrap())
        .collect();
    let opts = Options {
        parallel_threshold: 1,
        sort_output: true,
        ..Default::default()
    };

    for case in load_golden_data().cases {
        let results = execute_selections(&selectors, &case.input, &opts);
        assert!(
            analyze_comparison_results(&results).is_ok(),
            "case: {}",
            case.name
        );
        assert_eq!(
            results[0].outcome.as_ref().unwrap(),
            &case.expected,
            "case: {}",
            case.name
        );
    }
}

#[test]
fn golden_digit_counts() {
    for case in load_golden_data().digit_counts {
        assert_eq!(digit_count(case.n), case.digits, "n = {}", case.n);
    }
}
