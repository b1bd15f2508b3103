//! The dynamically typed datum that flows through wrappers.
//!
//! A [`Value`] is either a plain value or a further-applicable
//! [`Functor`]. The distinction is a tag check
//! ([`Value::is_function`]), never a structural coercion: any result a
//! callable produces that is itself a wrapper arrives as
//! [`Value::Function`].
//!
//! # Examples
//!
//! ```rust
//! use combinars::functor::Value;
//!
//! let list = Value::from(vec![1, 2, 3]);
//! assert_eq!(list.as_list().map(Vec::len), Some(3));
//! assert_eq!(format!("{list}"), "[1, 2, 3]");
//!
//! let text = Value::from("hi");
//! assert!(text.is_string());
//! assert_eq!(format!("{}", Value::from(vec!["a", "b"])), "['a', 'b']");
//! ```

use super::Functor;
use super::error::FunctorError;

/// A value passed to or returned from a [`Functor`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// The empty value.
    #[default]
    Unit,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Int(i64),
    /// A floating point number.
    Float(f64),
    /// A string. Also usable as the sequence of its characters.
    Str(String),
    /// An ordered sequence.
    List(Vec<Self>),
    /// A further-applicable wrapper.
    #[cfg_attr(feature = "serde", serde(skip))]
    Function(Functor),
}

macro_rules! value_accessors {
    ($($variant:ident => $name:ident: $inner:ty),* $(,)?) => {
        paste::paste! {
            impl Value {
                $(
                    #[doc = concat!("Returns `true` if this is a `Value::", stringify!($variant), "`.")]
                    pub const fn [<is_ $name>](&self) -> bool {
                        matches!(self, Self::$variant(_))
                    }

                    #[doc = concat!("Borrows the payload of a `Value::", stringify!($variant), "`.")]
                    pub const fn [<as_ $name>](&self) -> Option<&$inner> {
                        match self {
                            Self::$variant(inner) => Some(inner),
                            _ => None,
                        }
                    }
                )*
            }
        }
    };
}

value_accessors! {
    Bool => bool: bool,
    Int => int: i64,
    Float => float: f64,
    Str => string: String,
    List => list: Vec<Value>,
    Function => function: Functor,
}

impl Value {
    /// Returns a short name for the kind of this value, used in error messages.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::List(_) => "list",
            Self::Function(_) => "function",
        }
    }

    /// Returns `true` if this is `Value::Unit`.
    pub const fn is_unit(&self) -> bool {
        matches!(self, Self::Unit)
    }

    /// Converts this value into the wrapper it carries.
    ///
    /// # Errors
    ///
    /// Returns [`FunctorError::TypeMismatch`] if the value is plain.
    pub fn into_functor(self) -> Result<Functor, FunctorError> {
        match self {
            Self::Function(functor) => Ok(functor),
            other => Err(FunctorError::type_mismatch("function", other.kind())),
        }
    }

    /// Converts this value into an owned sequence.
    ///
    /// A `List` yields its elements; a `Str` yields one single-character
    /// string per character.
    ///
    /// # Errors
    ///
    /// Returns [`FunctorError::TypeMismatch`] for every other kind.
    pub fn into_sequence(self) -> Result<Vec<Self>, FunctorError> {
        match self {
            Self::List(items) => Ok(items),
            Self::Str(text) => Ok(text.chars().map(|c| Self::Str(c.to_string())).collect()),
            other => Err(FunctorError::type_mismatch("sequence", other.kind())),
        }
    }

    /// Wraps a non-`List` value in a single-element list.
    pub fn into_list(self) -> Vec<Self> {
        match self {
            Self::List(items) => items,
            other => vec![other],
        }
    }

    fn fmt_nested(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(text) => write!(formatter, "'{text}'"),
            other => write!(formatter, "{other}"),
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unit => formatter.write_str("()"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Int(number) => write!(formatter, "{number}"),
            Self::Float(number) => write!(formatter, "{number:?}"),
            Self::Str(text) => formatter.write_str(text),
            Self::List(items) => {
                formatter.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    item.fmt_nested(formatter)?;
                }
                formatter.write_str("]")
            }
            Self::Function(functor) => write!(formatter, "<functor/{}>", functor.arity()),
        }
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Unit
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Int(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Int(number)
    }
}

impl From<f64> for Value {
    fn from(number: f64) -> Self {
        Self::Float(number)
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Str(text)
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Str(text.to_owned())
    }
}

impl From<Functor> for Value {
    fn from(functor: Functor) -> Self {
        Self::Function(functor)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> FromIterator<T> for Value {
    fn from_iter<I: IntoIterator<Item = T>>(iterator: I) -> Self {
        Self::List(iterator.into_iter().map(Into::into).collect())
    }
}

/// Conversion from a [`Value`] into a callable's parameter type.
///
/// Implemented for [`Value`] itself (no conversion), the scalar payload
/// types, [`Functor`], and `Vec<T>` of any convertible `T`.
///
/// # Examples
///
/// ```rust
/// use combinars::functor::{FromValue, Value};
///
/// assert_eq!(i64::from_value(Value::Int(4)), Ok(4));
/// assert_eq!(f64::from_value(Value::Int(4)), Ok(4.0));
/// assert_eq!(Vec::<i64>::from_value(Value::from(vec![1, 2])), Ok(vec![1, 2]));
/// assert!(bool::from_value(Value::Int(1)).is_err());
/// ```
pub trait FromValue: Sized {
    /// Converts the value.
    ///
    /// # Errors
    ///
    /// Returns [`FunctorError::TypeMismatch`] when the value has the wrong kind.
    fn from_value(value: Value) -> Result<Self, FunctorError>;
}

impl FromValue for Value {
    fn from_value(value: Value) -> Result<Self, FunctorError> {
        Ok(value)
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, FunctorError> {
        match value {
            Value::Bool(flag) => Ok(flag),
            other => Err(FunctorError::type_mismatch("bool", other.kind())),
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self, FunctorError> {
        match value {
            Value::Int(number) => Ok(number),
            other => Err(FunctorError::type_mismatch("int", other.kind())),
        }
    }
}

impl FromValue for f64 {
    #[allow(clippy::cast_precision_loss)]
    fn from_value(value: Value) -> Result<Self, FunctorError> {
        match value {
            Value::Float(number) => Ok(number),
            Value::Int(number) => Ok(number as Self),
            other => Err(FunctorError::type_mismatch("float", other.kind())),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, FunctorError> {
        match value {
            Value::Str(text) => Ok(text),
            other => Err(FunctorError::type_mismatch("string", other.kind())),
        }
    }
}

impl FromValue for Functor {
    fn from_value(value: Value) -> Result<Self, FunctorError> {
        value.into_functor()
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, FunctorError> {
        value.into_sequence()?.into_iter().map(T::from_value).collect()
    }
}

/// Marks values that convert through [`Into<Value>`].
#[derive(Debug)]
pub enum Plain {}

/// Marks callables that become a [`Value::Function`] when converted.
#[derive(Debug)]
pub enum Wrapped {}

/// Marks callable outputs that are returned directly.
#[derive(Debug)]
pub enum Returned {}

/// Marks callable outputs of type `Result<_, FunctorError>`.
#[derive(Debug)]
pub enum Fallible {}

/// Conversion of plain data or a bare callable into a [`Value`].
///
/// Anything that implements `Into<Value>` converts as usual; a closure or
/// function item accepted by [`Functor::wrap`] is wrapped and arrives as
/// [`Value::Function`]. The `Marker` parameter keeps the two apart and is
/// always inferred.
///
/// # Examples
///
/// ```rust
/// use combinars::functor::{IntoValue, Value};
///
/// assert_eq!(7_i64.into_value(), Value::Int(7));
///
/// let wrapped = (|x: i64, y: i64| x + y).into_value();
/// assert_eq!(wrapped.as_function().map(|functor| functor.arity()), Some(2));
/// ```
pub trait IntoValue<Marker> {
    /// Converts the operand.
    fn into_value(self) -> Value;
}

impl<T: Into<Value>> IntoValue<Plain> for T {
    fn into_value(self) -> Value {
        self.into()
    }
}

/// Conversion from a callable's return type into the outcome of an application.
///
/// Plain returns become `Ok(value)`, returned closures become
/// `Ok(Value::Function(..))`, and `Result<_, FunctorError>` returns
/// propagate their error unchanged.
pub trait IntoOutcome<Marker> {
    /// Converts the return value.
    ///
    /// # Errors
    ///
    /// Returns the error carried by a failed `Result`.
    fn into_outcome(self) -> Result<Value, FunctorError>;
}

impl<T, Marker> IntoOutcome<(Returned, Marker)> for T
where
    T: IntoValue<Marker>,
{
    fn into_outcome(self) -> Result<Value, FunctorError> {
        Ok(self.into_value())
    }
}

impl<T, Marker> IntoOutcome<(Fallible, Marker)> for Result<T, FunctorError>
where
    T: IntoValue<Marker>,
{
    fn into_outcome(self) -> Result<Value, FunctorError> {
        self.map(IntoValue::into_value)
    }
}
