#![cfg(feature = "function")]
//! Unit tests for Predicate evaluation and short-circuiting composition.

use busters::function::{FunctionError, Predicate};
use rstest::rstest;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A predicate that counts its evaluations and returns `outcome`.
fn counted(outcome: Result<bool, FunctionError>) -> (Predicate<i32>, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let predicate = Predicate::new(move |_: &i32| {
        counter.fetch_add(1, Ordering::SeqCst);
        outcome.clone()
    });
    (predicate, calls)
}

fn failure() -> FunctionError {
    FunctionError::message("lookup failed")
}

// =============================================================================
// Evaluation
// =============================================================================

#[rstest]
#[case(5, true)]
#[case(0, false)]
#[case(-5, false)]
fn test_evaluates_wrapped_behavior(#[case] input: i32, #[case] expected: bool) {
    let is_positive = Predicate::<i32>::new(|value| Ok(*value > 0));
    assert_eq!(is_positive.test(&input), Ok(expected));
}

#[rstest]
fn empty_predicate_returns_empty_callable() {
    let predicate: Predicate<i32> = Predicate::empty();
    assert_eq!(predicate.test(&1), Err(FunctionError::EmptyCallable));
}

#[rstest]
fn predicate_borrows_input() {
    let has_prefix = Predicate::<String>::new(|text| Ok(text.starts_with("bus")));
    let input = String::from("busters");
    assert_eq!(has_prefix.test(&input), Ok(true));
    assert_eq!(input, "busters");
}

// =============================================================================
// And
// =============================================================================

#[rstest]
#[case(true, true, true)]
#[case(true, false, false)]
fn and_evaluates_next_when_first_true(
    #[case] first: bool,
    #[case] second: bool,
    #[case] expected: bool,
) {
    let (left, left_calls) = counted(Ok(first));
    let (right, right_calls) = counted(Ok(second));

    assert_eq!(left.and(right).test(&0), Ok(expected));
    assert_eq!(left_calls.load(Ordering::SeqCst), 1);
    assert_eq!(right_calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn and_short_circuits_on_false() {
    let (left, _) = counted(Ok(false));
    let (right, right_calls) = counted(Ok(true));

    assert_eq!(left.and(right).test(&0), Ok(false));
    assert_eq!(right_calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn and_short_circuits_on_error() {
    let error = failure();
    let (left, _) = counted(Err(error.clone()));
    let (right, right_calls) = counted(Ok(true));

    assert_eq!(left.and(right).test(&0), Err(error));
    assert_eq!(right_calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn and_propagates_error_of_next() {
    let error = failure();
    let (left, _) = counted(Ok(true));
    let (right, _) = counted(Err(error.clone()));

    assert_eq!(left.and(right).test(&0), Err(error));
}

#[rstest]
fn and_with_empty_first_reports_empty_callable() {
    let (right, right_calls) = counted(Ok(true));

    assert_eq!(
        Predicate::empty().and(right).test(&0),
        Err(FunctionError::EmptyCallable)
    );
    assert_eq!(right_calls.load(Ordering::SeqCst), 0);
}

// =============================================================================
// Or
// =============================================================================

#[rstest]
#[case(false, true, true)]
#[case(false, false, false)]
fn or_evaluates_next_when_first_false(
    #[case] first: bool,
    #[case] second: bool,
    #[case] expected: bool,
) {
    let (left, _) = counted(Ok(first));
    let (right, right_calls) = counted(Ok(second));

    assert_eq!(left.or(right).test(&0), Ok(expected));
    assert_eq!(right_calls.load(Ordering::SeqCst), 1);
}

#[rstest]
fn or_short_circuits_on_true() {
    let (left, _) = counted(Ok(true));
    let (right, right_calls) = counted(Ok(false));

    assert_eq!(left.or(right).test(&0), Ok(true));
    assert_eq!(right_calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn or_short_circuits_on_error() {
    let error = failure();
    let (left, _) = counted(Err(error.clone()));
    let (right, right_calls) = counted(Ok(true));

    assert_eq!(left.or(right).test(&0), Err(error));
    assert_eq!(right_calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn or_with_empty_next_reports_empty_callable() {
    let (left, _) = counted(Ok(false));
    assert_eq!(
        left.or(Predicate::empty()).test(&0),
        Err(FunctionError::EmptyCallable)
    );
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn composition_does_not_evaluate_operands() {
    let (left, left_calls) = counted(Ok(true));
    let (right, right_calls) = counted(Ok(true));

    let _composed = left.and(right.clone()).or(right);

    assert_eq!(left_calls.load(Ordering::SeqCst), 0);
    assert_eq!(right_calls.load(Ordering::SeqCst), 0);
}

#[rstest]
fn nested_composition_evaluates_left_to_right() {
    let is_positive = Predicate::<i32>::new(|value| Ok(*value > 0));
    let is_even = Predicate::<i32>::new(|value| Ok(value % 2 == 0));
    let is_seven = Predicate::<i32>::new(|value| Ok(*value == 7));

    let accepted = is_positive.and(is_even).or(is_seven);

    assert_eq!(accepted.test(&4), Ok(true));
    assert_eq!(accepted.test(&7), Ok(true));
    assert_eq!(accepted.test(&3), Ok(false));
    assert_eq!(accepted.test(&-2), Ok(false));
}
