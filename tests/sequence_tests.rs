//! Unit tests for sequence helpers.
//!
//! Tests for reduce, map, filter, reverse and their fallible forms.

#![cfg(feature = "sequence")]

use fnkit::sequence::{filter, map, reduce, reverse, try_filter, try_map, try_reduce};
use rstest::rstest;

// =============================================================================
// reduce tests
// =============================================================================

#[rstest]
#[case(vec![], 0)]
#[case(vec![7], 7)]
#[case(vec![1, 2, 3, 4, 5], 15)]
#[case(vec![-3, 3, 10], 10)]
fn test_reduce_sum(#[case] values: Vec<i32>, #[case] expected: i32) {
    let total = reduce(0, values, |accumulator, element| accumulator + element);
    assert_eq!(total, expected);
}

#[rstest]
fn test_reduce_string_concatenation() {
    let concatenated = reduce(String::new(), ["a", "b", "c"], |accumulator, element| {
        accumulator + element
    });
    assert_eq!(concatenated, "abc");
}

#[rstest]
fn test_reduce_empty_returns_initial_without_calling_reducer() {
    let mut calls = 0;
    let result = reduce("seed", Vec::<&str>::new(), |accumulator, _| {
        calls += 1;
        accumulator
    });
    assert_eq!(result, "seed");
    assert_eq!(calls, 0);
}

#[rstest]
fn test_reduce_builds_collection_like_map() {
    let twice = reduce(Vec::new(), [1, 2, 3], |mut accumulator, element| {
        accumulator.push(2 * element);
        accumulator
    });
    assert_eq!(twice, vec![2, 4, 6]);
}

#[rstest]
fn test_reduce_over_borrowed_slice() {
    let values = [2, 3, 4];
    let product = reduce(1, &values, |accumulator, element| accumulator * element);
    assert_eq!(product, 24);
    assert_eq!(values, [2, 3, 4]);
}

#[rstest]
#[should_panic(expected = "reducer failed")]
fn test_reduce_propagates_reducer_panic() {
    reduce(0, [1, 2, 3], |accumulator, element| {
        assert!(element < 2, "reducer failed");
        accumulator + element
    });
}

// =============================================================================
// map tests
// =============================================================================

#[rstest]
fn test_map_doubles() {
    assert_eq!(map([1, 2, 3], |element| element * 2), vec![2, 4, 6]);
}

#[rstest]
fn test_map_uppercase() {
    let upper = map(["a", "b", "c"], str::to_uppercase);
    assert_eq!(upper, vec!["A", "B", "C"]);
}

#[rstest]
fn test_map_empty_yields_empty() {
    let mapped: Vec<String> = map(Vec::<i32>::new(), |element| element.to_string());
    assert!(mapped.is_empty());
}

#[rstest]
fn test_map_calls_mapper_once_per_element_in_order() {
    let mut seen = Vec::new();
    let _ = map(["x", "y", "z"], |element| seen.push(element));
    assert_eq!(seen, vec!["x", "y", "z"]);
}

// =============================================================================
// filter tests
// =============================================================================

#[rstest]
fn test_filter_odd() {
    let odd = filter([1, 2, 3, 4, 5], |element| element % 2 == 1);
    assert_eq!(odd, vec![1, 3, 5]);
}

#[rstest]
#[case(vec![1, 2, 3])]
#[case(vec![])]
fn test_filter_always_true_and_always_false(#[case] values: Vec<i32>) {
    assert_eq!(filter(values.clone(), |_| true), values);
    assert_eq!(filter(values, |_| false), Vec::<i32>::new());
}

#[rstest]
fn test_filter_preserves_relative_order() {
    let words = ["pear", "fig", "plum", "kiwi", "date"];
    let four_letters = filter(words, |word| word.len() == 4);
    assert_eq!(four_letters, vec!["pear", "plum", "kiwi", "date"]);
}

// =============================================================================
// reverse tests
// =============================================================================

#[rstest]
#[case(vec![], vec![])]
#[case(vec![1], vec![1])]
#[case(vec![1, 2], vec![2, 1])]
#[case(vec![1, 2, 3, 4, 5], vec![5, 4, 3, 2, 1])]
fn test_reverse_cases(#[case] mut values: Vec<i32>, #[case] expected: Vec<i32>) {
    reverse(&mut values);
    assert_eq!(values, expected);
}

#[rstest]
fn test_reverse_returns_same_slice() {
    let mut values = [1, 2, 3];
    let address = values.as_ptr();
    let returned = reverse(&mut values);
    assert_eq!(returned.as_ptr(), address);
    assert_eq!(returned, &[3, 2, 1]);
}

#[rstest]
fn test_reverse_sub_slice_only() {
    let mut values = [1, 2, 3, 4, 5, 6];
    reverse(&mut values[1..5]);
    assert_eq!(values, [1, 5, 4, 3, 2, 6]);
}

// =============================================================================
// fallible variants
// =============================================================================

#[derive(Debug, PartialEq, Eq)]
struct Rejected(i32);

#[rstest]
fn test_try_reduce_ok() {
    let add = |accumulator: i32, element: i32| Ok(accumulator + element);
    let result: Result<i32, Rejected> = try_reduce(0, [1, 2, 3], add);
    assert_eq!(result, Ok(6));
}

#[rstest]
fn test_try_reduce_empty_is_ok_initial() {
    let result: Result<&str, Rejected> = try_reduce("seed", Vec::<i32>::new(), |_, element| {
        Err(Rejected(element))
    });
    assert_eq!(result, Ok("seed"));
}

#[rstest]
fn test_try_map_stops_at_first_error() {
    let mut calls = 0;
    let result = try_map([1, 2, -3, 4, -5], |element| {
        calls += 1;
        if element < 0 {
            Err(Rejected(element))
        } else {
            Ok(element * 10)
        }
    });
    assert_eq!(result, Err(Rejected(-3)));
    assert_eq!(calls, 3);
}

#[rstest]
fn test_try_filter_ok_matches_filter() {
    let values = [5, 10, 15, 20];
    let fallible: Result<Vec<i32>, Rejected> = try_filter(values, |element| Ok(*element > 8));
    assert_eq!(fallible, Ok(filter(values, |element| *element > 8)));
}
