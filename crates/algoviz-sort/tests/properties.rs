//! Properties shared by every sort.

use algoviz_core::{Bars, Recorder, RunError, Step};
use algoviz_sort::{SortAlgorithm, sort};
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn values() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-50i32..50, 0..60)
}

fn algorithm() -> impl Strategy<Value = SortAlgorithm> {
    prop::sample::select(SortAlgorithm::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn output_is_sorted_permutation(input in values(), alg in algorithm()) {
        let mut bars = Bars::new(input.clone());
        let mut rec = Recorder::new();
        sort(alg, &mut bars, &mut rec).unwrap();

        let mut expected = input;
        expected.sort();
        prop_assert_eq!(bars.values(), expected.as_slice());
    }

    #[test]
    fn counters_match_steps(input in values(), alg in algorithm()) {
        let mut bars = Bars::new(input);
        let mut rec = Recorder::new();
        sort(alg, &mut bars, &mut rec).unwrap();

        let compares = rec.steps().iter().filter(|s| matches!(s, Step::Compare { .. })).count();
        let swaps = rec.steps().iter().filter(|s| matches!(s, Step::Swap { .. })).count();
        prop_assert_eq!(rec.comparisons() as usize, compares);
        prop_assert_eq!(rec.swaps() as usize, swaps);
    }

    #[test]
    fn replaying_steps_reproduces_result(input in values(), alg in algorithm()) {
        let mut bars = Bars::new(input.clone());
        let mut rec = Recorder::new();
        sort(alg, &mut bars, &mut rec).unwrap();

        // A renderer that mirrors only the step stream ends up with the
        // same array.
        let mut mirror = input;
        for step in rec.steps() {
            match *step {
                Step::Swap { a, b } => mirror.swap(a, b),
                Step::Write { index, value } => mirror[index] = value,
                _ => {}
            }
        }
        prop_assert_eq!(mirror.as_slice(), bars.values());
    }

    #[test]
    fn compare_indices_are_in_range(input in values(), alg in algorithm()) {
        let n = input.len();
        let mut bars = Bars::new(input);
        let mut rec = Recorder::new();
        sort(alg, &mut bars, &mut rec).unwrap();
        for step in rec.steps() {
            if let Step::Compare { a, b } | Step::Swap { a, b } = *step {
                prop_assert!(a < n && b < n);
            }
        }
    }
}

#[test]
fn sorted_input_needs_no_swaps_for_quadratic_sorts() {
    let input: Vec<i32> = (1..=40).collect();
    for alg in [
        SortAlgorithm::Bubble,
        SortAlgorithm::Selection,
        SortAlgorithm::Insertion,
    ] {
        let mut bars = Bars::new(input.clone());
        let mut rec = Recorder::new();
        sort(alg, &mut bars, &mut rec).unwrap();
        assert_eq!(rec.swaps(), 0, "{alg}");
    }
}

#[test]
fn random_arrays_sort_with_every_algorithm() {
    let mut rng = StdRng::seed_from_u64(0xA160);
    for alg in SortAlgorithm::ALL {
        let mut bars = Bars::random(100, &mut rng);
        let mut rec = Recorder::new();
        sort(alg, &mut bars, &mut rec).unwrap();
        assert!(bars.is_sorted(), "{alg}");
    }
}

#[test]
fn abandoned_sort_stops_mid_run() {
    let mut bars = Bars::new(vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
    let mut rec = Recorder::with_limit(10);
    let err = sort(SortAlgorithm::Bubble, &mut bars, &mut rec).unwrap_err();
    assert_eq!(err, RunError::Abandoned);
    assert!(!bars.is_sorted());
    assert_eq!(rec.count("all-sorted"), 0);
}
