//! Unit tests for the composition algebra.
//!
//! Tests for compose, pipe, fan-out, the helper wrappers, and the
//! diagnostic printers.

#![cfg(feature = "compose")]

use std::cell::RefCell;
use std::rc::Rc;

use combinars::compose::{
    compose, constant, constant_of, fan_out, flip, identity, pipe, printer_with,
};
use combinars::functor::{Functor, FunctorError, ShapeError, Value};
use combinars::apply;
use rstest::rstest;

fn double() -> Functor {
    Functor::wrap(|x: i64| x * 2)
}

fn add_seven() -> Functor {
    Functor::wrap(|x: i64| x + 7)
}

// =============================================================================
// compose / pipe tests
// =============================================================================

#[rstest]
fn test_compose_applies_second_after_first() {
    assert_eq!(add_seven().compose(double()).apply(0), Ok(Value::Int(14)));
    assert_eq!(double().compose(add_seven()).apply(0), Ok(Value::Int(7)));
}

#[rstest]
fn test_pipe_operator_matches_compose() {
    assert_eq!((add_seven() | double()).apply(0), Ok(Value::Int(14)));
    assert_eq!(
        pipe(add_seven(), double()).apply(5),
        compose(add_seven(), double()).apply(5)
    );
}

#[rstest]
fn test_compose_accepts_closures_and_wrappers() {
    let composite = compose(|x: i64| x.to_string(), |text: String| text.len() as i64);
    assert_eq!(composite.apply(12345), Ok(Value::Int(5)));
}

#[rstest]
fn test_compose_changes_types_through_the_chain() {
    let describe = pipe!(
        |x: i64, y: i64| x * y,
        |product: i64| format!("product={product}"),
        |text: String| text.to_uppercase(),
    );
    assert_eq!(apply!(describe, 6, 7), Ok(Value::from("PRODUCT=42")));
}

#[rstest]
fn test_compose_propagates_failure_from_either_stage() {
    let fail = Functor::wrap(|_: i64| -> Result<i64, FunctorError> {
        Err(FunctorError::failure("stage failed"))
    });
    assert_eq!(
        (fail.clone() | double()).apply(1),
        Err(FunctorError::failure("stage failed"))
    );
    assert_eq!(
        (double() | fail).apply(1),
        Err(FunctorError::failure("stage failed"))
    );
}

// =============================================================================
// fan-out tests
// =============================================================================

#[rstest]
fn test_fan_out_concatenates_outputs() {
    let add_five = Functor::wrap(|x: i64| x + 5);
    assert_eq!((add_seven() & add_five).apply(0), Ok(Value::from(vec![7, 5])));
}

#[rstest]
fn test_fan_out_chains_into_longer_lists() {
    let triple = Functor::wrap(|x: i64| x * 3);
    let all = add_seven() & double() & triple;
    assert_eq!(all.apply(1), Ok(Value::from(vec![8, 2, 3])));
}

#[rstest]
fn test_fan_out_function_form() {
    let both = fan_out(|x: i64| vec![x, x + 1], |x: i64| vec![x * 10]);
    assert_eq!(both.apply(2), Ok(Value::from(vec![2, 3, 20])));
}

// =============================================================================
// helper wrapper tests
// =============================================================================

#[rstest]
#[case(Value::Int(42))]
#[case(Value::from("hello"))]
#[case(Value::from(vec![1, 2, 3]))]
#[case(Value::Unit)]
fn test_identity_returns_argument(#[case] value: Value) {
    assert_eq!(identity().apply(value.clone()), Ok(value));
}

#[rstest]
fn test_identity_composition_agrees_pointwise_not_by_identity() {
    let function = double();
    let left = identity() | &function;
    let right = &function | identity();

    assert_ne!(left, function);
    assert_ne!(right, function);
    for x in [-3, 0, 21] {
        assert_eq!(left.apply(x), function.apply(x));
        assert_eq!(right.apply(x), function.apply(x));
    }
}

#[rstest]
fn test_constant_ignores_argument() {
    let always_one = constant().apply(1).unwrap().into_functor().unwrap();
    assert_eq!(always_one.apply("dog"), Ok(Value::Int(1)));
    assert_eq!(always_one.apply(vec![1, 2]), Ok(Value::Int(1)));
}

#[rstest]
fn test_constant_over_application() {
    assert_eq!(apply!(constant(), 1, "dog"), Ok(Value::Int(1)));
}

#[rstest]
fn test_constant_of_can_be_called_multiple_times() {
    let always_ten = constant_of(10);
    for index in 0..100 {
        assert_eq!(always_ten.apply(index), Ok(Value::Int(10)));
    }
}

#[rstest]
fn test_flip_swaps_arguments() {
    let subtract = |minuend: i64, subtrahend: i64| minuend - subtrahend;
    let flipped = flip(subtract).unwrap();
    assert_eq!(apply!(flipped, 10, 3), Ok(Value::Int(-7)));

    let flipped_twice = flip(&flipped).unwrap();
    assert_eq!(apply!(flipped_twice, 10, 3), Ok(Value::Int(7)));
}

#[rstest]
fn test_flip_rejects_non_binary() {
    assert_eq!(
        flip(|x: i64, y: i64, z: i64| x + y + z),
        Err(FunctorError::Shape(ShapeError::ArityMismatch {
            operation: "flip",
            expected: 2,
            actual: 3
        }))
    );
}

// =============================================================================
// diagnostic tests
// =============================================================================

#[rstest]
fn test_printer_reports_formatted_value_and_passes_argument_through() {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let recorder = Rc::clone(&seen);
    let printer = printer_with(move |value: &Value| recorder.borrow_mut().push(value.to_string()));
    assert_eq!(printer.arity(), 1);

    let describe = Functor::wrap(|x: i64| format!("value is {x}"));
    let inspect = printer.apply(describe).unwrap().into_functor().unwrap();
    let pipeline = add_seven() | inspect | double();

    assert_eq!(pipeline.apply(1), Ok(Value::Int(16)));
    assert_eq!(pipeline.apply(3), Ok(Value::Int(20)));
    assert_eq!(*seen.borrow(), vec!["value is 8", "value is 10"]);
}

#[rstest]
fn test_printer_effect_precedes_later_stages() {
    let events = Rc::new(RefCell::new(Vec::new()));
    let printed = Rc::clone(&events);
    let inspect = printer_with(move |_: &Value| printed.borrow_mut().push("printed"))
        .apply(identity())
        .unwrap()
        .into_functor()
        .unwrap();
    let later = Rc::clone(&events);
    let record = Functor::wrap(move |x: i64| {
        later.borrow_mut().push("later");
        x
    });

    assert_eq!((inspect | record).apply(1), Ok(Value::Int(1)));
    assert_eq!(*events.borrow(), vec!["printed", "later"]);
}
