//! # combinars
//!
//! Auto-currying function wrappers with composition, divide-and-conquer
//! folds, and list mapping.
//!
//! ## Overview
//!
//! The library turns ordinary Rust closures into [`Functor`](functor::Functor)
//! values that share one call contract and a family of combinators built on
//! it:
//!
//! - **Functor**: arity-aware wrapper with partial application and
//!   over-application (`apply!`, `Functor::invoke`)
//! - **Composition**: `compose`, `pipe` (`|`), `fan_out` (`&`), `pipe!`,
//!   and the `identity`, `constant`, `flip`, `printer` helpers
//! - **Folds**: binary divide-and-conquer reduction in three directions, and
//!   cumulative (prefix/suffix) folds
//! - **Mapping**: pointwise application across parallel sequences, with or
//!   without the position
//!
//! ## Feature Flags
//!
//! - `compose`: Composition algebra and helper wrappers
//! - `fold`: Divide-and-conquer folds and cumulative folds
//! - `mapping`: `map` and `mapi`
//! - `serde`: Serialize and deserialize plain [`Value`](functor::Value)s
//! - `logging`: Library-level tracing (consumers provide their own subscriber)
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use combinars::prelude::*;
//!
//! let dot_product = Functor::wrap(|a: i64, b: i64| a * b).map()
//!     | Functor::wrap(|a: i64, b: i64| a + b).fold(0, Direction::Left).unwrap();
//!
//! assert_eq!(apply!(dot_product, vec![3, 4], vec![3, 4]), Ok(Value::Int(25)));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

mod logging;

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types, traits, and macros.
///
/// # Usage
///
/// ```rust
/// use combinars::prelude::*;
/// ```
pub mod prelude {
    pub use crate::apply;
    pub use crate::functor::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;

    #[cfg(feature = "fold")]
    pub use crate::fold::*;
}

pub mod functor;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "fold")]
pub mod fold;

#[cfg(feature = "mapping")]
mod mapping;
