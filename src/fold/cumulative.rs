//! Cumulative divide-and-conquer folds.
//!
//! A cumulative fold returns every intermediate reduction instead of only
//! the last one: the prefix reductions for [`ScanDirection::Left`], the
//! suffix reductions for [`ScanDirection::Right`]. It uses the same halving
//! recursion as [`fold`](super::fold), carrying the boundary reduction of one
//! half into the other.
//!
//! There is no balanced variant: prefix reductions are not meaningful over an
//! unordered reduction tree.
//!
//! # Examples
//!
//! ```rust
//! use combinars::fold::ScanDirection;
//! use combinars::functor::{Functor, Value};
//!
//! let add = Functor::wrap(|x: i64, y: i64| x + y);
//!
//! let prefixes = add.cum_fold(0, ScanDirection::Left).unwrap();
//! assert_eq!(prefixes.apply(vec![1, 2, 3, 4]), Ok(Value::from(vec![1, 3, 6, 10])));
//!
//! let suffixes = add.cum_fold(0, ScanDirection::Right).unwrap();
//! assert_eq!(suffixes.apply(vec![1, 2, 3, 4]), Ok(Value::from(vec![10, 9, 7, 4])));
//! ```

use super::Direction;
use crate::functor::{Functor, FunctorError, IntoFunctor, Value};
use crate::logging::debug;

/// The order in which a cumulative fold accumulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ScanDirection {
    /// Prefix reductions, first to last.
    #[default]
    Left,
    /// Suffix reductions, last to first.
    Right,
}

impl From<ScanDirection> for Direction {
    fn from(direction: ScanDirection) -> Self {
        match direction {
            ScanDirection::Left => Self::Left,
            ScanDirection::Right => Self::Right,
        }
    }
}

/// Builds an arity-1 wrapper returning every intermediate reduction.
///
/// For an input of length `n` the result has length `n`. Its last element
/// (for `Left`) or first element (for `Right`) equals the corresponding
/// [`fold`](super::fold).
///
/// # Errors
///
/// Returns [`ShapeError::ArityMismatch`](crate::functor::ShapeError::ArityMismatch)
/// if `combine` is not binary.
pub fn cum_fold<Marker>(
    combine: impl IntoFunctor<Marker>,
    zero: impl Into<Value>,
    direction: ScanDirection,
) -> Result<Functor, FunctorError> {
    let combine = combine.into_functor();
    combine.require_arity("cum_fold", 2)?;
    let zero = zero.into();
    Ok(Functor::wrap(move |sequence: Vec<Value>| {
        debug!(length = sequence.len(), ?direction, "cumulative fold");
        scan(&combine, zero.clone(), &sequence, direction)
    }))
}

impl Functor {
    /// Builds a cumulative fold that uses `self` as the combining wrapper.
    ///
    /// See [`cum_fold`].
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::ArityMismatch`](crate::functor::ShapeError::ArityMismatch)
    /// if `self` is not binary.
    pub fn cum_fold(
        &self,
        zero: impl Into<Value>,
        direction: ScanDirection,
    ) -> Result<Self, FunctorError> {
        cum_fold(self, zero, direction)
    }
}

fn scan(
    combine: &Functor,
    zero: Value,
    items: &[Value],
    direction: ScanDirection,
) -> Result<Vec<Value>, FunctorError> {
    let (head, tail) = items.split_at(items.len() / 2);
    match (items, direction) {
        ([], _) => Ok(Vec::new()),
        ([item], ScanDirection::Left) => Ok(vec![combine.invoke([zero, item.clone()])?]),
        ([item], ScanDirection::Right) => Ok(vec![combine.invoke([item.clone(), zero])?]),
        (_, ScanDirection::Left) => {
            let mut prefixes = scan(combine, zero, head, direction)?;
            let Some(carry) = prefixes.last().cloned() else {
                return Ok(prefixes);
            };
            prefixes.extend(scan(combine, carry, tail, direction)?);
            Ok(prefixes)
        }
        (_, ScanDirection::Right) => {
            let suffixes = scan(combine, zero, tail, direction)?;
            let Some(carry) = suffixes.first().cloned() else {
                return Ok(suffixes);
            };
            let mut combined = scan(combine, carry, head, direction)?;
            combined.extend(suffixes);
            Ok(combined)
        }
    }
}
