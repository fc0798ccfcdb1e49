//! Property-based tests across the selector registry and orchestration.

use proptest::prelude::*;

use palsel_core::options::Options;
use palsel_core::registry::DefaultFactory;
use palsel_orchestration::orchestrator::{analyze_comparison_results, execute_selections};
use palsel_orchestration::selector_selection::get_selectors_to_run;

fn reference(numbers: &[i32]) -> Vec<i32> {
    numbers
        .iter()
        .copied()
        .filter(|n| {
            let s = n.to_string();
            s.chars().rev().collect::<String>() == s
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Every registered selector agrees with a string-reversal reference.
    #[test]
    fn all_selectors_match_reference(
        numbers in prop::collection::vec(any::<i32>(), 0..300),
        threshold in 1usize..64,
    ) {
        let factory = DefaultFactory::new();
        let selectors = get_selectors_to_run("all", &factory).unwrap();
        let opts = Options { parallel_threshold: threshold, sort_output: true, ..Default::default() };
        let results = execute_selections(&selectors, &numbers, &opts);

        prop_assert!(analyze_comparison_results(&results).is_ok());

        let mut expected = reference(&numbers);
        prop_assert_eq!(results[0].outcome.as_ref().unwrap(), &expected);
        expected.sort_unstable();
        prop_assert_eq!(results[1].outcome.as_ref().unwrap(), &expected);
    }

    /// Small-magnitude inputs are dense in palindromes; the sequential
    /// selector keeps exactly those, in order.
    #[test]
    fn dense_small_inputs(numbers in prop::collection::vec(-20i32..200, 0..100)) {
        let factory = DefaultFactory::new();
        let selectors = get_selectors_to_run("seq", &factory).unwrap();
        let results = execute_selections(&selectors, &numbers, &Options::default());
        prop_assert_eq!(results[0].outcome.as_ref().unwrap(), &reference(&numbers));
    }
}
