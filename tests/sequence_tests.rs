//! Integration tests for sequence access, search, folds and traversals.

#![cfg(feature = "sequence")]

use std::collections::VecDeque;

use fpkit::sequence::{
    curried, each, filter, find_first, find_last, first, fold, last, map, max_by, min_by, reduce,
};
use rstest::rstest;

#[derive(Debug, Clone, PartialEq)]
struct Tagged {
    value: i32,
    id: char,
}

const fn tagged(value: i32, id: char) -> Tagged {
    Tagged { value, id }
}

// =============================================================================
// first / last
// =============================================================================

#[rstest]
#[case(&[], None, None)]
#[case(&['a'], Some(&'a'), Some(&'a'))]
#[case(&['a', 'b', 'c'], Some(&'a'), Some(&'c'))]
fn test_first_and_last(
    #[case] sequence: &[char],
    #[case] expected_first: Option<&char>,
    #[case] expected_last: Option<&char>,
) {
    assert_eq!(first(sequence), expected_first);
    assert_eq!(last(sequence), expected_last);
}

#[rstest]
fn test_first_and_last_on_deque_and_range() {
    let deque: VecDeque<i32> = (1..=3).collect();
    assert_eq!(first(&deque), Some(&1));
    assert_eq!(last(&deque), Some(&3));
    assert_eq!(last(10..20), Some(19));
}

// =============================================================================
// find_first / find_last
// =============================================================================

#[rstest]
#[case(2, Some(3), Some(4))]
#[case(3, Some(4), Some(4))]
#[case(0, Some(1), Some(4))]
#[case(4, None, None)]
fn test_find_first_and_last(
    #[case] threshold: i32,
    #[case] expected_first: Option<i32>,
    #[case] expected_last: Option<i32>,
) {
    let sequence = vec![1, 2, 3, 4];
    let above = |value: &i32| *value > threshold;

    assert_eq!(find_first(above, sequence.clone()), expected_first);
    assert_eq!(find_last(above, sequence), expected_last);
}

#[rstest]
fn test_find_returns_borrowed_element_from_slice() {
    let people = [tagged(30, 'a'), tagged(41, 'b'), tagged(52, 'c')];

    let older = |person: &&Tagged| person.value > 40;
    assert_eq!(find_first(older, &people).map(|person| person.id), Some('b'));
    assert_eq!(find_last(older, &people).map(|person| person.id), Some('c'));
}

#[rstest]
fn test_curried_find_awaits_sequence() {
    let find_large = curried::find_first::<Vec<i32>, _>(|value: &i32| *value > 2);
    let find_large_from_back = curried::find_last::<Vec<i32>, _>(|value: &i32| *value > 2);

    assert_eq!(find_large(vec![1, 2, 3, 4]), Some(3));
    assert_eq!(find_large_from_back(vec![1, 2, 3, 4]), Some(4));
    assert_eq!(find_large(vec![]), None);
}

// =============================================================================
// reduce / fold
// =============================================================================

fn add(element: i32, accumulator: i32) -> i32 {
    accumulator + element
}

#[rstest]
#[case::seeded(vec![1, 2, 3], Some(0), Some(6))]
#[case::unseeded(vec![1, 2, 3], None, Some(6))]
#[case::empty_seeded(vec![], Some(5), Some(5))]
#[case::empty_unseeded(vec![], None, None)]
#[case::single_unseeded(vec![9], None, Some(9))]
fn test_reduce(
    #[case] sequence: Vec<i32>,
    #[case] start: Option<i32>,
    #[case] expected: Option<i32>,
) {
    assert_eq!(reduce(add, sequence, start), expected);
}

#[rstest]
fn test_reduce_passes_element_then_accumulator() {
    let mut calls = Vec::new();
    let result = reduce(
        |element: i32, accumulator: i32| {
            calls.push((element, accumulator));
            element * 10 + accumulator
        },
        vec![1, 2, 3],
        None,
    );

    // Seeded by 1, then (2, 1) and (3, 21).
    assert_eq!(calls, vec![(2, 1), (3, 21)]);
    assert_eq!(result, Some(51));
}

#[rstest]
fn test_reduce_with_seed_visits_first_element() {
    let mut visited = Vec::new();
    reduce(
        |element: i32, accumulator: i32| {
            visited.push(element);
            accumulator
        },
        vec![7, 8],
        Some(0),
    );
    assert_eq!(visited, vec![7, 8]);
}

#[rstest]
fn test_fold_into_different_type() {
    let summary = fold(
        |word: &str, (count, letters): (usize, usize)| (count + 1, letters + word.len()),
        ["one", "three"],
        (0, 0),
    );
    assert_eq!(summary, (2, 8));
}

#[rstest]
fn test_curried_reduce_in_every_grouping() {
    let sum = curried::reduce::<Vec<i32>, _>(add);

    let over_numbers = sum(vec![1, 2, 3]);
    assert_eq!(over_numbers(Some(0)), Some(6));
    assert_eq!(over_numbers(None), Some(6));
    assert_eq!(sum(vec![])(Some(5)), Some(5));
    assert_eq!(sum(vec![])(None), None);
}

#[rstest]
fn test_curried_fold() {
    let total_length = curried::fold::<Vec<&str>, usize, _>(|word: &str, total: usize| total + word.len());
    assert_eq!(total_length(vec!["ab", "cde"])(0), 5);
}

// =============================================================================
// map / filter / each
// =============================================================================

#[rstest]
#[case(vec![1, 2, 3], vec![2, 4, 6])]
#[case(vec![], vec![])]
#[case(vec![-1], vec![-2])]
fn test_map_doubles(#[case] sequence: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(map(|value: i32| value * 2, sequence), expected);
}

#[rstest]
#[case(vec![1, 2, 3, 4], vec![2, 4])]
#[case(vec![1, 3], vec![])]
#[case(vec![], vec![])]
#[case(vec![4, 1, 2], vec![4, 2])]
fn test_filter_even(#[case] sequence: Vec<i32>, #[case] expected: Vec<i32>) {
    assert_eq!(filter(|value: &i32| value % 2 == 0, sequence), expected);
}

#[rstest]
fn test_each_runs_once_per_element_in_order() {
    let mut visited = Vec::new();
    each(|value: &char| visited.push(*value), &['x', 'y', 'z']);
    assert_eq!(visited, vec!['x', 'y', 'z']);
}

#[rstest]
fn test_curried_traversals() {
    let double = curried::map::<Vec<i32>, _, _>(|value: i32| value * 2);
    let evens = curried::filter::<Vec<i32>, _>(|value: &i32| value % 2 == 0);

    assert_eq!(double(vec![1, 2, 3]), vec![2, 4, 6]);
    assert_eq!(evens(vec![1, 2, 3, 4]), vec![2, 4]);
    assert_eq!(double(vec![]), Vec::<i32>::new());
}

// =============================================================================
// min_by / max_by
// =============================================================================

#[rstest]
#[case(vec![3, 1, 2], Some(1), Some(3))]
#[case(vec![5], Some(5), Some(5))]
#[case(vec![], None, None)]
#[case(vec![2, 2, 2], Some(2), Some(2))]
fn test_min_and_max(
    #[case] sequence: Vec<i32>,
    #[case] expected_min: Option<i32>,
    #[case] expected_max: Option<i32>,
) {
    assert_eq!(min_by(|value: &i32| *value, sequence.clone()), expected_min);
    assert_eq!(max_by(|value: &i32| *value, sequence), expected_max);
}

#[rstest]
fn test_min_by_keeps_earliest_on_tie() {
    let entries = vec![tagged(1, 'a'), tagged(1, 'b'), tagged(2, 'c')];
    let lowest = min_by(|entry: &Tagged| entry.value, entries);
    assert_eq!(lowest, Some(tagged(1, 'a')));
}

#[rstest]
fn test_max_by_keeps_earliest_on_tie() {
    let entries = [tagged(0, 'a'), tagged(4, 'b'), tagged(4, 'c')];
    let highest = max_by(|entry: &&Tagged| entry.value, &entries);
    assert_eq!(highest.map(|entry| entry.id), Some('b'));
}

#[rstest]
fn test_curried_selection() {
    let shortest = curried::min_by::<Vec<&str>, _, _>(|word: &&str| word.len());
    let longest = curried::max_by::<Vec<&str>, _, _>(|word: &&str| word.len());
    let words = vec!["pear", "fig", "banana", "kiwi"];

    assert_eq!(shortest(words.clone()), Some("fig"));
    assert_eq!(longest(words), Some("banana"));
}
