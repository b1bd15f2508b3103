//! Error types for functor application and the combinators built on it.
//!
//! Every failure surfaces to the caller through [`FunctorError`]; no
//! component recovers locally. Failures raised by a wrapped callable itself
//! travel through [`FunctorError::Failed`] unchanged.

/// Represents an error in the declared arity of a wrapper.
///
/// # Examples
///
/// ```rust
/// use combinars::functor::ArityError;
///
/// let error = ArityError::Nullary { operation: "mapi" };
/// assert_eq!(
///     format!("{error}"),
///     "mapi: requires a wrapper of arity at least 1, found arity 0"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArityError {
    /// An operation that consumes one argument itself was given an arity-0 wrapper.
    Nullary {
        /// The operation that rejected the wrapper.
        operation: &'static str,
    },
    /// A callable received fewer arguments than its declared parameter list.
    MissingArgument {
        /// The declared parameter count.
        expected: usize,
        /// The number of arguments actually received.
        actual: usize,
    },
}

impl std::fmt::Display for ArityError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Nullary { operation } => write!(
                formatter,
                "{operation}: requires a wrapper of arity at least 1, found arity 0"
            ),
            Self::MissingArgument { expected, actual } => write!(
                formatter,
                "callable declares {expected} parameters but received {actual} arguments"
            ),
        }
    }
}

impl std::error::Error for ArityError {}

/// Represents a structural mismatch between a combinator and its inputs.
///
/// # Examples
///
/// ```rust
/// use combinars::functor::ShapeError;
///
/// let error = ShapeError::LengthMismatch { expected: 3, actual: 2, position: 1 };
/// assert_eq!(
///     format!("{error}"),
///     "map: sequence 1 has length 2, expected 3"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeError {
    /// A combinator that needs a wrapper of a specific arity received another.
    ArityMismatch {
        /// The combinator that rejected the wrapper.
        operation: &'static str,
        /// The required arity.
        expected: usize,
        /// The arity of the wrapper that was supplied.
        actual: usize,
    },
    /// Parallel sequences passed to `map` or `mapi` differ in length.
    LengthMismatch {
        /// Length of the first sequence.
        expected: usize,
        /// Length of the offending sequence.
        actual: usize,
        /// Zero-based position of the offending sequence in the argument list.
        position: usize,
    },
    /// Surplus arguments were supplied but the first application returned a
    /// plain value.
    NotCallable {
        /// Number of arguments that could not be applied.
        remaining: usize,
        /// Kind of the plain value that was returned.
        kind: &'static str,
    },
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ArityMismatch {
                operation,
                expected,
                actual,
            } => write!(
                formatter,
                "{operation}: requires a wrapper of arity {expected}, found arity {actual}"
            ),
            Self::LengthMismatch {
                expected,
                actual,
                position,
            } => write!(
                formatter,
                "map: sequence {position} has length {actual}, expected {expected}"
            ),
            Self::NotCallable { remaining, kind } => write!(
                formatter,
                "cannot apply {remaining} remaining arguments to plain {kind} value"
            ),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Represents errors that can occur while invoking a [`Functor`](crate::functor::Functor).
///
/// # Examples
///
/// ```rust
/// use combinars::functor::{FunctorError, ShapeError};
///
/// let error = FunctorError::from(ShapeError::NotCallable { remaining: 1, kind: "int" });
/// assert_eq!(format!("{error}"), "cannot apply 1 remaining arguments to plain int value");
///
/// let failure = FunctorError::failure("division by zero");
/// assert_eq!(format!("{failure}"), "division by zero");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FunctorError {
    /// The wrapper's arity does not suit the requested operation.
    Arity(ArityError),
    /// The inputs do not have the shape the combinator needs.
    Shape(ShapeError),
    /// An argument could not be converted to the parameter type of a callable.
    TypeMismatch {
        /// The kind of value the callable expected.
        expected: &'static str,
        /// The kind of value that was supplied.
        actual: &'static str,
    },
    /// The wrapped callable reported its own failure.
    Failed(String),
}

impl FunctorError {
    /// Creates the error a wrapped callable returns to signal its own failure.
    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    pub(crate) const fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        Self::TypeMismatch { expected, actual }
    }
}

impl std::fmt::Display for FunctorError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Arity(error) => write!(formatter, "{error}"),
            Self::Shape(error) => write!(formatter, "{error}"),
            Self::TypeMismatch { expected, actual } => {
                write!(formatter, "expected {expected} value, found {actual}")
            }
            Self::Failed(message) => formatter.write_str(message),
        }
    }
}

impl std::error::Error for FunctorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Arity(error) => Some(error),
            Self::Shape(error) => Some(error),
            Self::TypeMismatch { .. } | Self::Failed(_) => None,
        }
    }
}

impl From<ArityError> for FunctorError {
    fn from(error: ArityError) -> Self {
        Self::Arity(error)
    }
}

impl From<ShapeError> for FunctorError {
    fn from(error: ShapeError) -> Self {
        Self::Shape(error)
    }
}
