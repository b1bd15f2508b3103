//! The `pipe!` macro for left-to-right composition chains.
//!
//! This module provides the [`pipe!`] macro which composes wrappers from
//! left to right, following the data flow style of programming.

/// Composes wrappers from left to right.
///
/// `pipe!(f, g, h)` is equivalent to `f | g | h`: the composite takes the
/// arity of `f`, and each later stage receives the output of the one
/// before it.
///
/// Every stage may be a [`Functor`](crate::functor::Functor) or any closure
/// accepted by [`Functor::wrap`](crate::functor::Functor::wrap).
///
/// # Syntax
///
/// - `pipe!(f)` - Returns `f` as a wrapper
/// - `pipe!(f, g)` - Returns `compose(f, g)`
/// - `pipe!(f, g, h, ...)` - Returns `compose(compose(f, g), h)...`
///
/// # Examples
///
/// ```
/// use combinars::pipe;
/// use combinars::functor::Value;
///
/// // 3 -> square = 9 -> double = 18 -> add_one = 19
/// let pipeline = pipe!(|x: i64| x * x, |x: i64| x * 2, |x: i64| x + 1);
/// assert_eq!(pipeline.apply(3), Ok(Value::Int(19)));
/// ```
///
/// ## Multi-argument first stage
///
/// ```
/// use combinars::{apply, pipe};
/// use combinars::functor::Value;
///
/// let pipeline = pipe!(|x: i64, y: i64| x + y, |sum: i64| sum.to_string());
/// assert_eq!(pipeline.arity(), 2);
/// assert_eq!(apply!(pipeline, 4, 5), Ok(Value::from("9")));
/// ```
#[macro_export]
macro_rules! pipe {
    // Single stage: normalize it
    ($stage:expr $(,)?) => {
        $crate::functor::IntoFunctor::into_functor($stage)
    };

    // Two or more stages: compose left to right recursively
    ($first:expr, $second:expr $(, $remaining:expr)* $(,)?) => {
        $crate::pipe!($crate::compose::compose($first, $second) $(, $remaining)*)
    };
}

#[cfg(test)]
mod tests {
    use crate::functor::{Functor, Value};

    #[test]
    fn test_pipe_single() {
        let double = pipe!(|x: i64| x * 2);
        assert_eq!(double.apply(5), Ok(Value::Int(10)));
    }

    #[test]
    fn test_pipe_two() {
        let add_one = Functor::wrap(|x: i64| x + 1);
        let double = Functor::wrap(|x: i64| x * 2);
        // double(5) = 10, add_one(10) = 11
        let pipeline = pipe!(&double, &add_one);
        assert_eq!(pipeline.apply(5), Ok(Value::Int(11)));
    }

    #[test]
    fn test_pipe_three() {
        let square = |x: i64| x * x;
        let double = |x: i64| x * 2;
        let add_one = |x: i64| x + 1;
        // square(3) = 9, double(9) = 18, add_one(18) = 19
        let pipeline = pipe!(square, double, add_one);
        assert_eq!(pipeline.apply(3), Ok(Value::Int(19)));
    }
}
