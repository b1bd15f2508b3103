#![cfg(feature = "fold")]
//! Property-based tests for fold laws.
//!
//! ## Fold Laws
//! - **Direction agreement**: for associative `combine` with identity `zero`,
//!   Left, Right, and Balanced folds agree
//! - **Sequential equivalence**: the Left fold equals the classic sequential
//!   left fold for any `combine`; the Right fold equals the sequential right fold
//!
//! ## Cumulative Fold Laws
//! - **Length preservation**: `len(cum_fold(l)) == len(l)`
//! - **Boundary**: the last (Left) / first (Right) element equals the fold
//! - **Prefixes**: element `i` of the Left cumulative fold equals the fold of `l[..=i]`

use combinars::fold::{Direction, ScanDirection, cum_fold, fold};
use combinars::functor::Value;
use proptest::prelude::*;

fn to_value(items: &[i64]) -> Value {
    items.to_vec().into()
}

fn bracket(x: String, y: String) -> String {
    format!("({x},{y})")
}

proptest! {
    /// Associative combine: all directions agree
    #[test]
    fn prop_directions_agree_for_associative_combine(
        items in proptest::collection::vec(any::<i64>(), 0..64)
    ) {
        let combine = |x: i64, y: i64| x.wrapping_add(y);
        let input = to_value(&items);

        let left = fold(combine, 0, Direction::Left).unwrap().apply(input.clone()).unwrap();
        let right = fold(combine, 0, Direction::Right).unwrap().apply(input.clone()).unwrap();
        let balanced = fold(combine, 0, Direction::Balanced).unwrap().apply(input).unwrap();

        prop_assert_eq!(&left, &right);
        prop_assert_eq!(&left, &balanced);
    }

    /// Associative string concatenation: all directions agree
    #[test]
    fn prop_directions_agree_for_concatenation(text in "[a-z]{0,40}") {
        let combine = |x: String, y: String| x + &y;

        let left = fold(combine, "", Direction::Left).unwrap().apply(text.as_str()).unwrap();
        let right = fold(combine, "", Direction::Right).unwrap().apply(text.as_str()).unwrap();
        let balanced = fold(combine, "", Direction::Balanced).unwrap().apply(text.as_str()).unwrap();

        prop_assert_eq!(&left, &Value::from(text.clone()));
        prop_assert_eq!(&right, &left);
        prop_assert_eq!(&balanced, &left);
    }

    /// Left fold equals the sequential left fold for a non-associative combine
    #[test]
    fn prop_left_fold_is_sequential(items in proptest::collection::vec(0_i64..100, 0..32)) {
        let strings: Vec<String> = items.iter().map(ToString::to_string).collect();
        let expected = strings.iter().cloned().fold(String::new(), bracket);

        let folded = fold(bracket, "", Direction::Left)
            .unwrap()
            .apply(strings)
            .unwrap();

        prop_assert_eq!(folded, Value::from(expected));
    }

    /// Right fold equals the sequential right fold for a non-associative combine
    #[test]
    fn prop_right_fold_is_sequential(items in proptest::collection::vec(0_i64..100, 0..32)) {
        let strings: Vec<String> = items.iter().map(ToString::to_string).collect();
        let expected = strings
            .iter()
            .rev()
            .cloned()
            .fold(String::new(), |accumulator, element| bracket(element, accumulator));

        let folded = fold(bracket, "", Direction::Right)
            .unwrap()
            .apply(strings)
            .unwrap();

        prop_assert_eq!(folded, Value::from(expected));
    }

    /// Cumulative fold preserves length and ends with the fold
    #[test]
    fn prop_cumulative_boundary(items in proptest::collection::vec(-1000_i64..1000, 1..48)) {
        let subtract = |x: i64, y: i64| x - y;
        let input = to_value(&items);

        let prefixes = cum_fold(subtract, 0, ScanDirection::Left)
            .unwrap()
            .apply(input.clone())
            .unwrap()
            .into_sequence()
            .unwrap();
        let suffixes = cum_fold(subtract, 0, ScanDirection::Right)
            .unwrap()
            .apply(input.clone())
            .unwrap()
            .into_sequence()
            .unwrap();
        let left = fold(subtract, 0, Direction::Left).unwrap().apply(input.clone()).unwrap();
        let right = fold(subtract, 0, Direction::Right).unwrap().apply(input).unwrap();

        prop_assert_eq!(prefixes.len(), items.len());
        prop_assert_eq!(suffixes.len(), items.len());
        prop_assert_eq!(prefixes.last(), Some(&left));
        prop_assert_eq!(suffixes.first(), Some(&right));
    }

    /// Element i of the Left cumulative fold is the fold of the first i + 1 elements
    #[test]
    fn prop_cumulative_prefixes(items in proptest::collection::vec(0_i64..10, 0..24)) {
        let strings: Vec<String> = items.iter().map(ToString::to_string).collect();
        let prefixes = cum_fold(bracket, "", ScanDirection::Left)
            .unwrap()
            .apply(strings.clone())
            .unwrap()
            .into_sequence()
            .unwrap();
        let folder = fold(bracket, "", Direction::Left).unwrap();

        for (index, prefix) in prefixes.iter().enumerate() {
            let expected = folder.apply(strings[..=index].to_vec()).unwrap();
            prop_assert_eq!(prefix, &expected);
        }
    }
}
