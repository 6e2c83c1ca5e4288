//! core::value
//!
//! Typed values and coercion of raw tokens.
//!
//! # Types
//!
//! - [`ValueType`] - The type a positional argument or flag value is coerced to
//! - [`FlagKind`] - Whether a flag is a bare presence marker or carries a value
//! - [`Value`] - A coerced value
//!
//! # Example
//!
//! ```
//! use commandant::core::value::{coerce, Value, ValueType};
//!
//! assert_eq!(coerce(ValueType::Int, "42").unwrap(), Value::Int(42));
//! assert_eq!(coerce(ValueType::Bool, "true").unwrap(), Value::Bool(true));
//! assert!(coerce(ValueType::Bool, "yes").is_err());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from value coercion.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoerceError {
    /// The token is not a valid literal for the requested type.
    #[error("invalid syntax")]
    InvalidSyntax,

    /// A value was requested for a presence-only flag.
    #[error("unsupported type")]
    UnsupportedType,

    /// A textual value was required but the value is not text.
    #[error("cannot cast to string")]
    NotText,
}

/// Value types supported for arguments and flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    /// Signed 64-bit integer
    Int,
    /// 64-bit float
    Float,
    /// Exactly `true` or `false`
    Bool,
    /// Any token, unchanged
    String,
}

impl ValueType {
    /// Placeholder shown in usage text.
    pub fn placeholder(&self) -> &'static str {
        match self {
            ValueType::Int => "<int>",
            ValueType::Float => "<float>",
            ValueType::Bool => "<bool>",
            ValueType::String => "<string>",
        }
    }
}

/// Shape of a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlagKind {
    /// The flag takes no value; its presence records `true`.
    Presence,
    /// The flag consumes the next token, coerced to the given type.
    Valued(ValueType),
}

impl FlagKind {
    /// Coerce a raw token for this flag.
    ///
    /// # Errors
    ///
    /// Returns [`CoerceError::UnsupportedType`] for presence-only flags.
    pub fn coerce(&self, raw: &str) -> Result<Value, CoerceError> {
        match self {
            FlagKind::Presence => Err(CoerceError::UnsupportedType),
            FlagKind::Valued(ty) => coerce(*ty, raw),
        }
    }

    /// Check if the flag takes a value.
    pub fn takes_value(&self) -> bool {
        matches!(self, FlagKind::Valued(_))
    }
}

/// A coerced value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
}

impl Value {
    /// The type this value was coerced to.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Bool(_) => ValueType::Bool,
            Value::Str(_) => ValueType::String,
        }
    }

    /// Borrow the text of a string value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Bool(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{}", v),
        }
    }
}

/// Coerce a raw token to a typed value.
///
/// Booleans accept only the exact literals `true` and `false`.
///
/// # Errors
///
/// Returns [`CoerceError::InvalidSyntax`] if the token cannot be converted.
pub fn coerce(ty: ValueType, raw: &str) -> Result<Value, CoerceError> {
    match ty {
        ValueType::Int => raw
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| CoerceError::InvalidSyntax),
        ValueType::Float => raw
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| CoerceError::InvalidSyntax),
        ValueType::Bool => match raw {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            _ => Err(CoerceError::InvalidSyntax),
        },
        ValueType::String => Ok(Value::Str(raw.to_string())),
    }
}

/// Extraction of a Rust type from a [`Value`].
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Result<Self, CoerceError>;
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Int(v) => Ok(*v),
            _ => Err(CoerceError::InvalidSyntax),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Float(v) => Ok(*v),
            Value::Int(v) => Ok(*v as f64),
            _ => Err(CoerceError::InvalidSyntax),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        match value {
            Value::Bool(v) => Ok(*v),
            _ => Err(CoerceError::InvalidSyntax),
        }
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Result<Self, CoerceError> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or(CoerceError::NotText)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_int() {
        assert_eq!(coerce(ValueType::Int, "-17"), Ok(Value::Int(-17)));
        assert_eq!(coerce(ValueType::Int, "1.5"), Err(CoerceError::InvalidSyntax));
        assert_eq!(coerce(ValueType::Int, ""), Err(CoerceError::InvalidSyntax));
    }

    #[test]
    fn coerce_float() {
        assert_eq!(coerce(ValueType::Float, "2.5"), Ok(Value::Float(2.5)));
        assert_eq!(coerce(ValueType::Float, "3"), Ok(Value::Float(3.0)));
        assert_eq!(
            coerce(ValueType::Float, "two"),
            Err(CoerceError::InvalidSyntax)
        );
    }

    #[test]
    fn coerce_bool_is_exact() {
        assert_eq!(coerce(ValueType::Bool, "false"), Ok(Value::Bool(false)));
        assert_eq!(coerce(ValueType::Bool, "TRUE"), Err(CoerceError::InvalidSyntax));
        assert_eq!(coerce(ValueType::Bool, "1"), Err(CoerceError::InvalidSyntax));
    }

    #[test]
    fn coerce_string_is_identity() {
        assert_eq!(
            coerce(ValueType::String, "hello world"),
            Ok(Value::Str("hello world".into()))
        );
    }

    #[test]
    fn presence_flags_have_no_value() {
        assert_eq!(
            FlagKind::Presence.coerce("x"),
            Err(CoerceError::UnsupportedType)
        );
        assert_eq!(
            FlagKind::Valued(ValueType::Int).coerce("7"),
            Ok(Value::Int(7))
        );
    }

    #[test]
    fn string_extraction_requires_text() {
        assert_eq!(String::from_value(&Value::Int(3)), Err(CoerceError::NotText));
        assert_eq!(
            String::from_value(&Value::Str("ok".into())),
            Ok("ok".to_string())
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(CoerceError::InvalidSyntax.to_string(), "invalid syntax");
        assert_eq!(CoerceError::UnsupportedType.to_string(), "unsupported type");
        assert_eq!(CoerceError::NotText.to_string(), "cannot cast to string");
    }
}
