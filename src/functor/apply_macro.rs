//! The `apply!` macro for calling a wrapper with heterogeneous arguments.

/// Applies a [`Functor`](crate::functor::Functor) to a list of arguments.
///
/// `apply!(f, a, b, c)` is equivalent to
/// `f.invoke([Value::from(a), Value::from(b), Value::from(c)])`.
///
/// Each argument only needs to implement `Into<Value>`, so integers,
/// floats, strings, vectors, and wrappers can be mixed in one call.
///
/// # Syntax
///
/// - `apply!(f)` - Invokes `f` with no arguments
/// - `apply!(f, a, b, ...)` - Invokes `f` with the listed arguments
///
/// # Examples
///
/// ```
/// use combinars::apply;
/// use combinars::functor::{Functor, Value};
///
/// let describe = Functor::wrap(|name: String, count: i64| format!("{name}={count}"));
///
/// assert_eq!(apply!(describe, "apples", 3), Ok(Value::from("apples=3")));
/// ```
///
/// ## Currying one argument at a time
///
/// ```
/// use combinars::apply;
/// use combinars::functor::{Functor, Value};
///
/// let function = Functor::wrap(|x: i64, y: i64, z: i64| (x - y) * z);
/// let step = apply!(function, 5).unwrap().into_functor().unwrap();
/// let step = apply!(step, 3).unwrap().into_functor().unwrap();
///
/// assert_eq!(apply!(step, 2), Ok(Value::Int(4)));
/// ```
#[macro_export]
macro_rules! apply {
    ($functor:expr $(,)?) => {
        $functor.invoke(::std::iter::empty::<$crate::functor::Value>())
    };

    ($functor:expr, $($argument:expr),+ $(,)?) => {
        $functor.invoke([$($crate::functor::Value::from($argument)),+])
    };
}
