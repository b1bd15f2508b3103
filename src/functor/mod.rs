//! The auto-currying function wrapper.
//!
//! A [`Functor`] pairs a callable with its declared arity and implements the
//! call contract every combinator in this crate is built on:
//!
//! - supplying exactly `arity` arguments applies the callable;
//! - supplying fewer returns a new wrapper awaiting the remainder;
//! - supplying more applies the callable to the first `arity` arguments and
//!   feeds the rest to the wrapper it returned.
//!
//! # Examples
//!
//! ```rust
//! use combinars::apply;
//! use combinars::functor::{Functor, Value};
//!
//! let function = Functor::wrap(|x: i64, y: i64, z: i64| (x - y) * z);
//!
//! assert_eq!(apply!(function, 5, 3, 2), Ok(Value::Int(4)));
//!
//! let partially = apply!(function, 5, 3).unwrap().into_functor().unwrap();
//! assert_eq!(partially.arity(), 1);
//! assert_eq!(apply!(partially, 2), Ok(Value::Int(4)));
//! ```
//!
//! Functions returning functions can be called as if flattened:
//!
//! ```rust
//! use combinars::apply;
//! use combinars::functor::{Functor, Value};
//!
//! let nested = Functor::wrap(|x: i64| move |y: i64| move |z: i64| (x - y) * z);
//!
//! assert_eq!(apply!(nested, 5, 3, 2), Ok(Value::Int(4)));
//! ```

mod apply_macro;
mod callable;
mod error;
mod value;

pub use callable::{Callable, IntoFunctor};
pub use error::{ArityError, FunctorError, ShapeError};
pub use value::{Fallible, FromValue, IntoOutcome, IntoValue, Plain, Returned, Value, Wrapped};

use std::cmp::Ordering;
use std::rc::Rc;

use smallvec::SmallVec;

use crate::logging::trace;

/// The positional argument buffer handed to an underlying callable.
pub type Arguments = SmallVec<[Value; 4]>;

type Body = dyn Fn(Arguments) -> Result<Value, FunctorError>;

/// A callable value with a fixed arity and auto-currying application.
///
/// Cloning a `Functor` shares the underlying callable; the arity is copied.
/// Wrappers are immutable: every combinator returns a fresh wrapper.
///
/// # Laws
///
/// For a wrapper `f` of arity `k` and any split of `k` arguments into
/// `xs ++ ys`:
///
/// ```text
/// f.invoke(xs).invoke(ys) == f.invoke(xs ++ ys)
/// ```
#[derive(Clone)]
pub struct Functor {
    body: Rc<Body>,
    arity: usize,
}

static_assertions::assert_impl_all!(Functor: Clone, std::fmt::Debug, PartialEq);
static_assertions::assert_not_impl_any!(Functor: Send, Sync);

impl Functor {
    /// Wraps a statically typed callable, taking its arity from its parameter list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::functor::Functor;
    ///
    /// assert_eq!(Functor::wrap(|x: i64| x * 2).arity(), 1);
    /// assert_eq!(Functor::wrap(|x: String, y: String| x + &y).arity(), 2);
    /// ```
    pub fn wrap<C, Marker>(callable: C) -> Self
    where
        C: Callable<Marker>,
    {
        Self::from_raw(C::ARITY, move |arguments| callable.call(arguments))
    }

    /// Wraps an argument-buffer callable with an explicitly declared arity.
    ///
    /// The callable always receives exactly `arity` arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::functor::{Functor, Value};
    ///
    /// let count = Functor::from_raw(3, |arguments| Ok(Value::from(arguments.len() as i64)));
    /// assert_eq!(count.invoke([1, 2, 3].map(Value::from)), Ok(Value::Int(3)));
    /// ```
    pub fn from_raw<F>(arity: usize, body: F) -> Self
    where
        F: Fn(Arguments) -> Result<Value, FunctorError> + 'static,
    {
        Self {
            body: Rc::new(body),
            arity,
        }
    }

    /// Returns the number of arguments this wrapper expects before it applies.
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Normalizes a result that may or may not already be a wrapper.
    ///
    /// A wrapper stays as it is, any other callable accepted by
    /// [`Functor::wrap`] is wrapped, and plain values pass through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::functor::{Functor, Value};
    ///
    /// assert_eq!(Functor::ensure(3_i64), Value::Int(3));
    ///
    /// let wrapped = Functor::ensure(|x: i64| x + 1).into_functor().unwrap();
    /// assert_eq!(wrapped.apply(1), Ok(Value::Int(2)));
    /// ```
    pub fn ensure<Marker>(value: impl IntoValue<Marker>) -> Value {
        value.into_value()
    }

    /// Applies this wrapper to a list of arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::NotCallable`] when surplus arguments remain but
    /// the first application produced a plain value, and propagates every
    /// error raised by the underlying callable unchanged.
    pub fn invoke<I>(&self, arguments: I) -> Result<Value, FunctorError>
    where
        I: IntoIterator<Item = Value>,
    {
        self.dispatch(arguments.into_iter().collect())
    }

    /// Applies this wrapper to a single argument.
    ///
    /// # Errors
    ///
    /// See [`Functor::invoke`].
    pub fn apply(&self, argument: impl Into<Value>) -> Result<Value, FunctorError> {
        let mut arguments = Arguments::new();
        arguments.push(argument.into());
        self.dispatch(arguments)
    }

    /// Fails unless this wrapper has exactly `expected` arity.
    pub(crate) fn require_arity(
        &self,
        operation: &'static str,
        expected: usize,
    ) -> Result<(), FunctorError> {
        if self.arity == expected {
            Ok(())
        } else {
            Err(ShapeError::ArityMismatch {
                operation,
                expected,
                actual: self.arity,
            }
            .into())
        }
    }

    pub(crate) fn dispatch(&self, mut arguments: Arguments) -> Result<Value, FunctorError> {
        let supplied = arguments.len();
        match supplied.cmp(&self.arity) {
            Ordering::Equal => (self.body)(arguments),
            Ordering::Less => {
                trace!(supplied, arity = self.arity, "partial application");
                let original = self.clone();
                let partial = Self::from_raw(self.arity - supplied, move |remainder| {
                    let mut combined = arguments.clone();
                    combined.extend(remainder);
                    original.dispatch(combined)
                });
                Ok(Value::Function(partial))
            }
            Ordering::Greater => {
                trace!(supplied, arity = self.arity, "over-application");
                let surplus: Arguments = arguments.drain(self.arity..).collect();
                match (self.body)(arguments)? {
                    Value::Function(next) => next.dispatch(surplus),
                    plain => Err(ShapeError::NotCallable {
                        remaining: surplus.len(),
                        kind: plain.kind(),
                    }
                    .into()),
                }
            }
        }
    }
}

impl std::fmt::Debug for Functor {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Functor")
            .field("arity", &self.arity)
            .finish_non_exhaustive()
    }
}

/// Two wrappers are equal when they share the same underlying callable and arity.
impl PartialEq for Functor {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.body, &other.body) && self.arity == other.arity
    }
}
