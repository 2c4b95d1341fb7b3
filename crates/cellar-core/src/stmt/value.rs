use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{Error, Result};

/// A primitive value bound to a statement placeholder.
///
/// This is the closed set of types a backend driver accepts. Values are
/// always transported out-of-band from the SQL text, never interpolated
/// into it.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Double-precision floating point
    F64(f64),

    /// String value
    String(String),

    /// Binary value
    Bytes(Vec<u8>),

    /// UTC timestamp
    Timestamp(DateTime<Utc>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    /// Returns a value representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Name of the variant, used in conversion error messages.
    pub const fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::F64(_) => "F64",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Timestamp(_) => "Timestamp",
            Self::Null => "Null",
        }
    }
}

// Values are used as cache-map keys; F64 participates via its bit
// pattern, so NaN never equals itself and such keys simply never hit.
impl Eq for Value {}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Self::Bool(value) => value.hash(state),
            Self::I32(value) => value.hash(state),
            Self::I64(value) => value.hash(state),
            Self::F64(value) => value.to_bits().hash(state),
            Self::String(value) => value.hash(state),
            Self::Bytes(value) => value.hash(state),
            Self::Timestamp(value) => value.hash(state),
            Self::Null => {}
        }
    }
}

macro_rules! impl_value_conversions {
    ($rust:ty, $name:ident, $lit:literal) => {
        impl From<$rust> for Value {
            fn from(value: $rust) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $rust {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self> {
                match value {
                    Value::$name(value) => Ok(value),
                    _ => Err(Error::type_conversion(&value, $lit)),
                }
            }
        }
    };
}

impl_value_conversions!(bool, Bool, "bool");
impl_value_conversions!(i32, I32, "i32");
impl_value_conversions!(i64, I64, "i64");
impl_value_conversions!(f64, F64, "f64");
impl_value_conversions!(String, String, "String");
impl_value_conversions!(Vec<u8>, Bytes, "Vec<u8>");
impl_value_conversions!(DateTime<Utc>, Timestamp, "DateTime<Utc>");

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}
