//! Value representation moved between records and the row codec.
//!
//! `FieldValue` carries a field's native value in the widest representation
//! of its kind. Record implementations convert their fields into it when
//! encoding and back out of it (with a range check) when decoding.

use crate::error::ValueError;

/// Kind-tagged value of a single field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Any signed integer, widened
    Int(i128),

    /// Any unsigned integer, widened
    Uint(u128),

    /// Any floating point value, widened
    Float(f64),

    /// Boolean value
    Bool(bool),

    /// Text value
    Text(String),

    /// Placeholder for fields whose kind has no text coercion
    Unsupported,
}

impl FieldValue {
    /// Create a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Text(_) => "string",
            Self::Unsupported => "unsupported",
        }
    }

    /// Try to get this value as a signed integer.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an unsigned integer.
    pub fn as_u128(&self) -> Option<u128> {
        match self {
            Self::Uint(u) => Some(*u),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Try to get this value as a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Conversion out of a [`FieldValue`] into a field's native type.
///
/// Implemented for every primitive that has a [`FieldKind`](crate::FieldKind)
/// other than `Unsupported`. Integer conversions fail when the widened value
/// does not fit the target width.
pub trait FromFieldValue: Sized {
    /// Convert `value` into `Self`.
    fn from_field_value(value: FieldValue) -> Result<Self, ValueError>;
}

macro_rules! int_conversions {
    ($variant:ident, $wide:ty, $expected:literal: $($ty:ty),*) => {$(
        impl From<$ty> for FieldValue {
            fn from(value: $ty) -> Self {
                FieldValue::$variant(value as $wide)
            }
        }

        impl FromFieldValue for $ty {
            fn from_field_value(value: FieldValue) -> Result<Self, ValueError> {
                match value {
                    FieldValue::$variant(v) => {
                        <$ty>::try_from(v).map_err(|_| ValueError::OutOfRange {
                            value: v.to_string(),
                            target: stringify!($ty),
                        })
                    }
                    other => Err(ValueError::KindMismatch {
                        expected: $expected,
                        found: other.kind_name(),
                    }),
                }
            }
        }
    )*};
}

int_conversions!(Int, i128, "int": i8, i16, i32, i64, i128, isize);
int_conversions!(Uint, u128, "uint": u8, u16, u32, u64, u128, usize);

impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        FieldValue::Float(f64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl FromFieldValue for f32 {
    fn from_field_value(value: FieldValue) -> Result<Self, ValueError> {
        match value {
            FieldValue::Float(f) => Ok(f as f32),
            other => Err(ValueError::KindMismatch {
                expected: "float",
                found: other.kind_name(),
            }),
        }
    }
}

impl FromFieldValue for f64 {
    fn from_field_value(value: FieldValue) -> Result<Self, ValueError> {
        match value {
            FieldValue::Float(f) => Ok(f),
            other => Err(ValueError::KindMismatch {
                expected: "float",
                found: other.kind_name(),
            }),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl FromFieldValue for bool {
    fn from_field_value(value: FieldValue) -> Result<Self, ValueError> {
        match value {
            FieldValue::Bool(b) => Ok(b),
            other => Err(ValueError::KindMismatch {
                expected: "bool",
                found: other.kind_name(),
            }),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl FromFieldValue for String {
    fn from_field_value(value: FieldValue) -> Result<Self, ValueError> {
        match value {
            FieldValue::Text(s) => Ok(s),
            other => Err(ValueError::KindMismatch {
                expected: "string",
                found: other.kind_name(),
            }),
        }
    }
}
