//! Binary divide-and-conquer folds.
//!
//! A fold built here reduces an ordered sequence by splitting it in half,
//! reducing each half, and joining the two results. The recursion depth is
//! therefore `O(log n)` rather than the `O(n)` of a naive linear fold, while
//! the [`Direction::Left`] and [`Direction::Right`] policies still produce
//! exactly the result of the classic sequential folds.
//!
//! # Directions
//!
//! - [`Direction::Left`]: threads the accumulator left to right;
//!   equal to `combine(...combine(combine(zero, l[0]), l[1])..., l[n-1])`
//! - [`Direction::Right`]: threads the accumulator right to left;
//!   equal to `combine(l[0], combine(l[1], ...combine(l[n-1], zero)))`
//! - [`Direction::Balanced`]: builds a balanced reduction tree; `zero` is only
//!   returned for the empty sequence
//!
//! # Laws
//!
//! For an associative `combine` with identity `zero`, all three directions
//! agree:
//!
//! ```text
//! fold(f, z, Left)(l) == fold(f, z, Right)(l) == fold(f, z, Balanced)(l)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use combinars::fold::Direction;
//! use combinars::functor::{Functor, Value};
//!
//! let bracket = Functor::wrap(|x: String, y: String| format!("({x},{y})"));
//! let digits = Value::from(vec!["0", "1", "2", "3"]);
//!
//! let left = bracket.fold("", Direction::Left).unwrap();
//! assert_eq!(left.apply(digits.clone()), Ok(Value::from("((((,0),1),2),3)")));
//!
//! let right = bracket.fold("", Direction::Right).unwrap();
//! assert_eq!(right.apply(digits.clone()), Ok(Value::from("(0,(1,(2,(3,))))")));
//!
//! let balanced = bracket.fold("", Direction::Balanced).unwrap();
//! assert_eq!(balanced.apply(digits), Ok(Value::from("((0,1),(2,3))")));
//! ```

mod cumulative;

pub use cumulative::{ScanDirection, cum_fold};

use crate::functor::{Functor, FunctorError, IntoFunctor, Value};
use crate::logging::debug;

/// The order in which a fold combines elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Accumulate from the first element to the last.
    #[default]
    Left,
    /// Accumulate from the last element to the first.
    Right,
    /// Combine the reductions of the two halves.
    Balanced,
}

/// Builds an arity-1 wrapper that folds a sequence with `combine`.
///
/// # Errors
///
/// Returns [`ShapeError::ArityMismatch`](crate::functor::ShapeError::ArityMismatch)
/// if `combine` is not binary.
///
/// # Examples
///
/// ```rust
/// use combinars::fold::{Direction, fold};
/// use combinars::functor::Value;
///
/// let sum = fold(|x: i64, y: i64| x + y, 0, Direction::Balanced).unwrap();
/// assert_eq!(sum.apply((0..11).map(Value::from).collect::<Value>()), Ok(Value::Int(55)));
/// ```
pub fn fold<Marker>(
    combine: impl IntoFunctor<Marker>,
    zero: impl Into<Value>,
    direction: Direction,
) -> Result<Functor, FunctorError> {
    let combine = combine.into_functor();
    combine.require_arity("fold", 2)?;
    let zero = zero.into();
    Ok(Functor::wrap(move |sequence: Vec<Value>| {
        debug!(length = sequence.len(), ?direction, "fold");
        reduce(&combine, zero.clone(), &sequence, direction)
    }))
}

impl Functor {
    /// Builds a fold that uses `self` as the binary combining wrapper.
    ///
    /// See [`fold`].
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::ArityMismatch`](crate::functor::ShapeError::ArityMismatch)
    /// if `self` is not binary.
    pub fn fold(&self, zero: impl Into<Value>, direction: Direction) -> Result<Self, FunctorError> {
        fold(self, zero, direction)
    }
}

fn reduce(
    combine: &Functor,
    zero: Value,
    items: &[Value],
    direction: Direction,
) -> Result<Value, FunctorError> {
    let (head, tail) = items.split_at(items.len() / 2);
    match (items, direction) {
        ([], _) => Ok(zero),
        ([item], Direction::Left) => combine.invoke([zero, item.clone()]),
        ([item], Direction::Right) => combine.invoke([item.clone(), zero]),
        ([item], Direction::Balanced) => Ok(item.clone()),
        (_, Direction::Left) => {
            let accumulated = reduce(combine, zero, head, direction)?;
            reduce(combine, accumulated, tail, direction)
        }
        (_, Direction::Right) => {
            let accumulated = reduce(combine, zero, tail, direction)?;
            reduce(combine, accumulated, head, direction)
        }
        (_, Direction::Balanced) => {
            let left = reduce(combine, zero.clone(), head, direction)?;
            let right = reduce(combine, zero, tail, direction)?;
            combine.invoke([left, right])
        }
    }
}
