//! Conditional logging macros for library-level tracing.
//!
//! When the `logging` feature is enabled, these macros forward to `tracing`.
//! When disabled, they compile to no-ops with zero runtime cost.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::logging::{debug, trace};
//!
//! trace!(supplied = 1, arity = 3, "partial application");
//! debug!(length = 8, "fold");
//! ```

/// Emit a trace-level log (call dispatch details).
#[cfg(feature = "logging")]
macro_rules! log_trace {
    ($($arg:tt)*) => { tracing::trace!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_trace {
    ($($arg:tt)*) => {};
}

/// Emit a debug-level log (combinator entry points).
#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) }
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[allow(unused_imports)]
pub(crate) use log_debug as debug;
pub(crate) use log_trace as trace;
