//! Composition algebra over [`Functor`] wrappers.
//!
//! This module builds new wrappers out of existing ones using nothing but
//! the wrapper's call contract.
//!
//! # Overview
//!
//! - [`compose`] / [`pipe`] / `a | b`: sequential composition, left to right
//! - [`fan_out`] / `a & b`: apply two wrappers to the same arguments and
//!   concatenate their outputs
//! - [`pipe!`]: chain any number of wrappers left to right
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity wrapper
//! - [`constant`] / [`constant_of`]: Wrappers that ignore their argument
//! - [`flip`]: Swaps the arguments of a binary wrapper
//! - [`printer`] / [`printer_with`] / [`tap`]: Diagnostic identities with a
//!   visible side effect
//!
//! # Examples
//!
//! ```
//! use combinars::compose::identity;
//! use combinars::functor::{Functor, Value};
//!
//! let double = Functor::wrap(|x: i64| x * 2);
//! let add_seven = Functor::wrap(|x: i64| x + 7);
//!
//! // The right operand is applied after the left one.
//! assert_eq!((&add_seven | &double).apply(0), Ok(Value::Int(14)));
//! assert_eq!((&double | &add_seven).apply(0), Ok(Value::Int(7)));
//!
//! let add_five = Functor::wrap(|x: i64| x + 5);
//! assert_eq!(
//!     (&add_seven & &add_five).apply(0),
//!     Ok(Value::from(vec![7, 5]))
//! );
//!
//! assert_eq!((identity() | double).apply(4), Ok(Value::Int(8)));
//! ```
//!
//! # Laws
//!
//! Equality here is equality of results for every argument `x`; wrappers
//! themselves compare by identity.
//!
//! - **Associativity**: `((f | g) | h)(x) == (f | (g | h))(x)`
//! - **Left Identity**: `(identity() | f)(x) == f(x)`
//! - **Right Identity**: `(f | identity())(x) == f(x)`
//! - **Fan-out**: `(f & g)(x) == to_list(f(x)) ++ to_list(g(x))`

mod pipe_macro;
mod utils;

use std::ops::{BitAnd, BitOr};

use crate::functor::{Functor, IntoFunctor, Value};

pub use utils::{constant, constant_of, flip, identity, printer, printer_with, tap};

pub use crate::pipe;

/// Composes two wrappers so that `second` runs on the result of `first`.
///
/// The composite takes `first`'s arity: `compose(f, g)(args) == g(f(args))`.
///
/// # Examples
///
/// ```
/// use combinars::compose::compose;
/// use combinars::functor::Value;
///
/// let composite = compose(|x: i64| x * 2, |x: i64| x + 7);
/// assert_eq!(composite.apply(1), Ok(Value::Int(9)));
/// ```
pub fn compose<FirstMarker, SecondMarker>(
    first: impl IntoFunctor<FirstMarker>,
    second: impl IntoFunctor<SecondMarker>,
) -> Functor {
    let first = first.into_functor();
    let second = second.into_functor();
    Functor::from_raw(first.arity(), move |arguments| {
        second.apply(first.dispatch(arguments)?)
    })
}

/// Sequential left-to-right composition; identical to [`compose`].
pub fn pipe<FirstMarker, SecondMarker>(
    first: impl IntoFunctor<FirstMarker>,
    second: impl IntoFunctor<SecondMarker>,
) -> Functor {
    compose(first, second)
}

/// Applies both wrappers to the same arguments and concatenates their outputs.
///
/// The result takes `left`'s arity. A result that is not a list counts as a
/// one-element list, so outputs of `left` always come first.
///
/// # Examples
///
/// ```
/// use combinars::compose::fan_out;
/// use combinars::functor::Value;
///
/// let both = fan_out(|x: i64| vec![x, x], |x: i64| x + 1);
/// assert_eq!(both.apply(3), Ok(Value::from(vec![3, 3, 4])));
/// ```
pub fn fan_out<LeftMarker, RightMarker>(
    left: impl IntoFunctor<LeftMarker>,
    right: impl IntoFunctor<RightMarker>,
) -> Functor {
    let left = left.into_functor();
    let right = right.into_functor();
    Functor::from_raw(left.arity(), move |arguments| {
        let mut outputs = left.dispatch(arguments.clone())?.into_list();
        outputs.extend(right.dispatch(arguments)?.into_list());
        Ok(Value::List(outputs))
    })
}

impl Functor {
    /// Composes `self` with `next`, running `next` afterwards. See [`compose`].
    #[must_use]
    pub fn compose<Marker>(&self, next: impl IntoFunctor<Marker>) -> Self {
        compose(self, next)
    }

    /// Pipes the output of `self` into `next`. See [`pipe`].
    #[must_use]
    pub fn pipe<Marker>(&self, next: impl IntoFunctor<Marker>) -> Self {
        pipe(self, next)
    }

    /// Fans the arguments out to `self` and `other`. See [`fan_out`].
    #[must_use]
    pub fn fan_out<Marker>(&self, other: impl IntoFunctor<Marker>) -> Self {
        fan_out(self, other)
    }
}

macro_rules! impl_operator {
    ($trait:ident, $method:ident, $combinator:ident; $($left:ty, $right:ty);+ $(;)?) => {
        $(
            impl $trait<$right> for $left {
                type Output = Functor;

                fn $method(self, rhs: $right) -> Functor {
                    $combinator(self, rhs)
                }
            }
        )+
    };
}

impl_operator!(BitOr, bitor, pipe;
    Functor, Functor;
    Functor, &Functor;
    &Functor, Functor;
    &Functor, &Functor;
);

impl_operator!(BitAnd, bitand, fan_out;
    Functor, Functor;
    Functor, &Functor;
    &Functor, Functor;
    &Functor, &Functor;
);
