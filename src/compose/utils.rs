//! Helper wrappers (combinators) for composition.
//!
//! This module provides fundamental combinators as ready-made wrappers:
//!
//! - [`identity`]: The identity wrapper (I combinator)
//! - [`constant`]: Builds wrappers that always return the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary wrapper (C combinator)
//! - [`printer`], [`printer_with`], [`tap`]: Identities that report the value
//!   passing through them, for inspecting pipelines
//!
//! These serve as building blocks for more complex compositions.

use std::rc::Rc;

use crate::functor::{Functor, FunctorError, IntoFunctor, Value};

/// Returns the arity-1 wrapper that yields its argument unchanged.
///
/// The identity wrapper is the unit element of composition:
/// - `identity() | f` is equivalent to `f`
/// - `f | identity()` is equivalent to `f`
///
/// # Examples
///
/// ```
/// use combinars::compose::identity;
/// use combinars::functor::Value;
///
/// assert_eq!(identity().apply(vec![1, 2, 3]), Ok(Value::from(vec![1, 2, 3])));
/// ```
pub fn identity() -> Functor {
    Functor::wrap(|value: Value| value)
}

/// Returns the arity-1 builder of constant wrappers.
///
/// `constant()(value)` is an arity-1 wrapper that ignores its argument and
/// always yields `value`. Because of over-application,
/// `constant().invoke([value, ignored])` yields `value` directly.
///
/// # Examples
///
/// ```
/// use combinars::apply;
/// use combinars::compose::constant;
/// use combinars::functor::Value;
///
/// assert_eq!(apply!(constant(), 1, "dog"), Ok(Value::Int(1)));
///
/// let always_one = constant().apply(1).unwrap().into_functor().unwrap();
/// assert_eq!(always_one.apply("cat"), Ok(Value::Int(1)));
/// ```
pub fn constant() -> Functor {
    Functor::wrap(|value: Value| constant_of(value))
}

/// Builds an arity-1 wrapper that ignores its argument and yields `value`.
///
/// # Examples
///
/// ```
/// use combinars::compose::constant_of;
/// use combinars::functor::Value;
///
/// let always_zero = constant_of(0);
/// assert_eq!(always_zero.apply("ignored"), Ok(Value::Int(0)));
/// assert_eq!(always_zero.apply(vec![1, 2]), Ok(Value::Int(0)));
/// ```
pub fn constant_of(value: impl Into<Value>) -> Functor {
    let value = value.into();
    Functor::wrap(move |_: Value| value.clone())
}

/// Swaps the arguments of a binary wrapper.
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f))(a, b) == f(a, b)`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Errors
///
/// Returns [`ShapeError::ArityMismatch`] if `function` is not binary.
///
/// # Examples
///
/// ```
/// use combinars::apply;
/// use combinars::compose::flip;
/// use combinars::functor::Value;
///
/// let subtract = |minuend: i64, subtrahend: i64| minuend - subtrahend;
/// let flipped = flip(subtract).unwrap();
///
/// assert_eq!(apply!(flipped, 10, 3), Ok(Value::Int(-7)));
/// ```
pub fn flip<Marker>(function: impl IntoFunctor<Marker>) -> Result<Functor, FunctorError> {
    let function = function.into_functor();
    function.require_arity("flip", 2)?;
    Ok(Functor::wrap(move |first: Value, second: Value| {
        function.invoke([second, first])
    }))
}

/// Returns the arity-1 diagnostic builder that prints to standard output.
///
/// `printer()(format)` is an arity-1 wrapper that prints `format(x)` and
/// returns `x` unchanged. The print happens exactly once per invocation,
/// before the value is returned.
///
/// # Examples
///
/// ```
/// use combinars::compose::printer;
/// use combinars::functor::{Functor, Value};
///
/// let describe = Functor::wrap(|x: i64| format!("x = {x}"));
/// let inspect = printer().apply(describe).unwrap().into_functor().unwrap();
/// let pipeline = Functor::wrap(|x: i64| x + 1) | inspect | Functor::wrap(|x: i64| x * 2);
///
/// // prints "x = 4"
/// assert_eq!(pipeline.apply(3), Ok(Value::Int(8)));
/// ```
pub fn printer() -> Functor {
    printer_with(|rendered: &Value| println!("{rendered}"))
}

/// Returns the arity-1 diagnostic builder that reports to `sink`.
///
/// Identical to [`printer`] except that the rendered value is handed to
/// `sink` instead of being printed.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use combinars::compose::{identity, printer_with};
/// use combinars::functor::Value;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let recorder = Rc::clone(&seen);
/// let inspect = printer_with(move |value: &Value| recorder.borrow_mut().push(value.clone()))
///     .apply(identity())
///     .unwrap()
///     .into_functor()
///     .unwrap();
///
/// assert_eq!(inspect.apply(5), Ok(Value::Int(5)));
/// assert_eq!(*seen.borrow(), vec![Value::Int(5)]);
/// ```
pub fn printer_with<S>(sink: S) -> Functor
where
    S: Fn(&Value) + 'static,
{
    let sink: Rc<dyn Fn(&Value)> = Rc::new(sink);
    Functor::wrap(move |format: Functor| inspector(format, Rc::clone(&sink)))
}

/// Returns an arity-1 wrapper that prints its argument and returns it.
///
/// Equivalent to `printer()` applied to [`identity`].
pub fn tap() -> Functor {
    inspector(identity(), Rc::new(|value: &Value| println!("{value}")))
}

fn inspector(format: Functor, sink: Rc<dyn Fn(&Value)>) -> Functor {
    Functor::wrap(move |value: Value| -> Result<Value, FunctorError> {
        let rendered = format.apply(value.clone())?;
        sink(&rendered);
        Ok(value)
    })
}
