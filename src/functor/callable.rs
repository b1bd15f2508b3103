//! Statically typed callables and their declared arity.
//!
//! [`Callable`] is implemented for every `Fn` closure or function item of
//! zero to six parameters whose parameter types implement [`FromValue`]
//! and whose return type implements [`IntoOutcome`]. The parameter count
//! becomes [`Callable::ARITY`] at compile time, so no signature inspection
//! happens at runtime.
//!
//! A callable may return another bare closure; it is wrapped on the way out
//! and arrives as [`Value::Function`], so nested callables apply as if
//! flattened.
//!
//! The `Marker` type parameter pairs the tuple of parameter types with the
//! marker of the return type's [`IntoOutcome`] conversion; it only exists to
//! keep the implementations apart and is inferred.

use super::error::{ArityError, FunctorError};
use super::value::{FromValue, IntoOutcome, IntoValue, Value, Wrapped};
use super::{Arguments, Functor};

/// A function with a fixed, statically known number of positional parameters.
///
/// # Examples
///
/// ```rust
/// use combinars::functor::Callable;
///
/// fn arity_of<C: Callable<Marker>, Marker>(_: &C) -> usize {
///     C::ARITY
/// }
///
/// assert_eq!(arity_of(&|| 1_i64), 0);
/// assert_eq!(arity_of(&|x: i64, y: i64| x + y), 2);
/// ```
pub trait Callable<Marker>: 'static {
    /// The number of positional parameters.
    const ARITY: usize;

    /// Applies the callable to exactly [`Self::ARITY`] arguments.
    ///
    /// # Errors
    ///
    /// Returns [`FunctorError::TypeMismatch`] if an argument does not convert
    /// to its parameter type, or whatever error the callable itself returns.
    fn call(&self, arguments: Arguments) -> Result<Value, FunctorError>;
}

macro_rules! impl_callable {
    ($arity:expr; $($parameter:ident),*) => {
        paste::paste! {
            impl<Function, Output, OutputMarker, $($parameter),*>
                Callable<(($($parameter,)*), OutputMarker)> for Function
            where
                Function: Fn($($parameter),*) -> Output + 'static,
                Output: IntoOutcome<OutputMarker>,
                $($parameter: FromValue,)*
            {
                const ARITY: usize = $arity;

                #[allow(unused_mut, unused_variables)]
                fn call(&self, arguments: Arguments) -> Result<Value, FunctorError> {
                    let received = arguments.len();
                    let mut arguments = arguments.into_iter();
                    $(
                        let [<$parameter:snake>] = <$parameter as FromValue>::from_value(
                            arguments.next().ok_or(ArityError::MissingArgument {
                                expected: $arity,
                                actual: received,
                            })?,
                        )?;
                    )*
                    (self)($([<$parameter:snake>]),*).into_outcome()
                }
            }
        }
    };
}

impl_callable!(0;);
impl_callable!(1; First);
impl_callable!(2; First, Second);
impl_callable!(3; First, Second, Third);
impl_callable!(4; First, Second, Third, Fourth);
impl_callable!(5; First, Second, Third, Fourth, Fifth);
impl_callable!(6; First, Second, Third, Fourth, Fifth, Sixth);

/// Normalizes an operand into a [`Functor`].
///
/// A [`Functor`] is used as-is; any [`Callable`] is wrapped. Every
/// combinator accepts its operands through this trait, so closures and
/// wrappers mix freely.
///
/// # Examples
///
/// ```rust
/// use combinars::functor::{Functor, IntoFunctor};
///
/// let wrapped = Functor::wrap(|x: i64| x * 2);
/// assert_eq!(wrapped.clone().into_functor().arity(), 1);
/// assert_eq!((|x: i64, y: i64| x + y).into_functor().arity(), 2);
/// ```
pub trait IntoFunctor<Marker> {
    /// Converts the operand.
    fn into_functor(self) -> Functor;
}

impl IntoFunctor<Functor> for Functor {
    fn into_functor(self) -> Functor {
        self
    }
}

impl IntoFunctor<Functor> for &Functor {
    fn into_functor(self) -> Functor {
        self.clone()
    }
}

impl<C, Marker> IntoFunctor<(Marker,)> for C
where
    C: Callable<Marker>,
{
    fn into_functor(self) -> Functor {
        Functor::wrap(self)
    }
}

impl<C, Marker> IntoValue<(Wrapped, Marker)> for C
where
    C: Callable<Marker>,
{
    fn into_value(self) -> Value {
        Value::Function(Functor::wrap(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn arity_of<C: Callable<Marker>, Marker>(_: &C) -> usize {
        C::ARITY
    }

    #[test]
    fn test_arity_counts_parameters() {
        assert_eq!(arity_of(&|| 0_i64), 0);
        assert_eq!(arity_of(&|a: Value| a), 1);
        assert_eq!(arity_of(&|a: i64, b: i64, c: i64| a + b + c), 3);
        assert_eq!(
            arity_of(&|a: i64, b: i64, c: i64, d: i64, e: i64, f: i64| a + b + c + d + e + f),
            6
        );
    }

    #[test]
    fn test_call_converts_arguments() {
        let subtract = |x: i64, y: i64| x - y;
        let result = Callable::call(&subtract, smallvec![Value::Int(5), Value::Int(3)]);
        assert_eq!(result, Ok(Value::Int(2)));
    }

    #[test]
    fn test_call_rejects_wrong_kind() {
        let negate = |x: i64| -x;
        let result = Callable::call(&negate, smallvec![Value::from("five")]);
        assert_eq!(result, Err(FunctorError::type_mismatch("int", "string")));
    }

    #[test]
    fn test_returned_closure_is_wrapped() {
        let adder = |x: i64| move |y: i64| x + y;
        assert_eq!(arity_of(&adder), 1);
        let inner = Callable::call(&adder, smallvec![Value::Int(2)]).unwrap();
        let inner = inner.into_functor().unwrap();
        assert_eq!(inner.arity(), 1);
        assert_eq!(inner.apply(40), Ok(Value::Int(42)));
    }

    #[test]
    fn test_call_reports_missing_argument() {
        let add = |x: i64, y: i64| x + y;
        let result = Callable::call(&add, smallvec![Value::Int(1)]);
        assert_eq!(
            result,
            Err(FunctorError::Arity(ArityError::MissingArgument {
                expected: 2,
                actual: 1
            }))
        );
    }
}
