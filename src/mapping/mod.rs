//! Pointwise application of a wrapper across parallel sequences.
//!
//! - [`Functor::map`]: `map(f)(s1, s2, ...) == [f(s1[i], s2[i], ...) for i]`
//! - [`Functor::mapi`]: the same, with the position `i` supplied as the
//!   first argument of `f`
//!
//! Both accept any number of parallel sequences; they must all have the same
//! length. A string counts as the sequence of its characters.
//!
//! # Examples
//!
//! ```rust
//! use combinars::apply;
//! use combinars::functor::{Functor, Value};
//!
//! let fused = Functor::wrap(|x: i64, y: i64, z: i64| x * y + z);
//! let mapped = fused.map();
//! assert_eq!(
//!     apply!(mapped, vec![1, 2, 3, 4, 5], vec![5, 4, 3, 2, 1], vec![1, 2, 3, 4, 5]),
//!     Ok(Value::from(vec![6, 10, 12, 12, 10]))
//! );
//!
//! let label = Functor::wrap(|index: i64, character: String| format!("{index}.{character}"));
//! assert_eq!(
//!     label.mapi().unwrap().apply("hello"),
//!     Ok(Value::from(vec!["0.h", "1.e", "2.l", "3.l", "4.o"]))
//! );
//! ```

use crate::functor::{Arguments, ArityError, Functor, FunctorError, ShapeError, Value};
use crate::logging::debug;

impl Functor {
    /// Builds a wrapper applying `self` pointwise across parallel sequences.
    ///
    /// The result has the same arity as `self`. Supplying no sequences yields
    /// an empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use combinars::apply;
    /// use combinars::functor::{Functor, Value};
    ///
    /// let multiply = Functor::wrap(|x: i64, y: i64| x * y);
    /// assert_eq!(
    ///     apply!(multiply.map(), vec![3, 4], vec![3, 4]),
    ///     Ok(Value::from(vec![9, 16]))
    /// );
    /// ```
    #[must_use]
    pub fn map(&self) -> Self {
        let function = self.clone();
        Self::from_raw(self.arity(), move |sequences| {
            pointwise(sequences, |_, row| function.dispatch(row))
        })
    }

    /// Builds a wrapper applying `self` pointwise with the position prepended.
    ///
    /// The result's arity is one less than `self`'s: callers supply only the
    /// parallel sequences.
    ///
    /// # Errors
    ///
    /// Returns [`ArityError::Nullary`] if `self` has arity 0.
    pub fn mapi(&self) -> Result<Self, FunctorError> {
        let arity = self
            .arity()
            .checked_sub(1)
            .ok_or(ArityError::Nullary { operation: "mapi" })?;
        let function = self.clone();
        Ok(Self::from_raw(arity, move |sequences| {
            pointwise(sequences, |index, row| {
                let mut arguments = Arguments::with_capacity(row.len() + 1);
                arguments.push(Value::Int(i64::try_from(index).unwrap_or(i64::MAX)));
                arguments.extend(row);
                function.dispatch(arguments)
            })
        }))
    }
}

fn pointwise<F>(sequences: Arguments, mut apply: F) -> Result<Value, FunctorError>
where
    F: FnMut(usize, Arguments) -> Result<Value, FunctorError>,
{
    let columns = sequences
        .into_iter()
        .map(Value::into_sequence)
        .collect::<Result<Vec<_>, _>>()?;
    let Some(expected) = columns.first().map(Vec::len) else {
        return Ok(Value::List(Vec::new()));
    };
    if let Some((position, column)) = columns
        .iter()
        .enumerate()
        .find(|(_, column)| column.len() != expected)
    {
        return Err(ShapeError::LengthMismatch {
            expected,
            actual: column.len(),
            position,
        }
        .into());
    }
    debug!(length = expected, sequences = columns.len(), "map");

    let mut iterators: Vec<_> = columns.into_iter().map(Vec::into_iter).collect();
    (0..expected)
        .map(|index| {
            let row = iterators.iter_mut().filter_map(Iterator::next).collect();
            apply(index, row)
        })
        .collect::<Result<Vec<_>, _>>()
        .map(Value::List)
}
