//! Field kinds for the records tabular mapper.
//!
//! `FieldKind` is the closed set of value classifications the codec knows how
//! to coerce to and from text. Every field of an entry type is classified into
//! exactly one kind; anything the codec cannot coerce is `Unsupported`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::value::FieldValue;

/// Bit width of an integer field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntWidth {
    /// 8-bit
    W8,
    /// 16-bit
    W16,
    /// 32-bit
    W32,
    /// 64-bit
    W64,
    /// 128-bit
    W128,
    /// Pointer-sized (`isize` / `usize`)
    Size,
}

impl IntWidth {
    /// Number of bits on the current target.
    pub fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
            Self::W128 => 128,
            Self::Size => usize::BITS,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Self::W8 => "8",
            Self::W16 => "16",
            Self::W32 => "32",
            Self::W64 => "64",
            Self::W128 => "128",
            Self::Size => "size",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "8" => Some(Self::W8),
            "16" => Some(Self::W16),
            "32" => Some(Self::W32),
            "64" => Some(Self::W64),
            "128" => Some(Self::W128),
            "size" => Some(Self::Size),
            _ => None,
        }
    }
}

/// Precision of a floating point field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatWidth {
    /// IEEE 754 single precision
    W32,
    /// IEEE 754 double precision
    W64,
}

/// Coercion-relevant classification of a field's type.
///
/// # Textual form
///
/// Kinds are spelled the way Rust spells the primitive they stand for, which
/// is also the form used in YAML schemas:
///
/// ```yaml
/// kind: i32
/// kind: u64
/// kind: f32
/// kind: bool
/// kind: string
/// kind: unsupported
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Signed integer of the given width
    Int(IntWidth),
    /// Unsigned integer of the given width
    Uint(IntWidth),
    /// Floating point of the given precision
    Float(FloatWidth),
    /// Boolean
    Bool,
    /// UTF-8 text
    Text,
    /// Anything without a text coercion (nested records, collections, options, ...)
    Unsupported,
}

impl FieldKind {
    /// Whether the codec has a text coercion for this kind.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported)
    }

    /// The value a freshly constructed entry holds for a field of this kind.
    pub fn zero_value(&self) -> FieldValue {
        match self {
            Self::Int(_) => FieldValue::Int(0),
            Self::Uint(_) => FieldValue::Uint(0),
            Self::Float(_) => FieldValue::Float(0.0),
            Self::Bool => FieldValue::Bool(false),
            Self::Text => FieldValue::Text(String::new()),
            Self::Unsupported => FieldValue::Unsupported,
        }
    }

    /// Classify a Rust type by its (unqualified) name.
    ///
    /// Only the primitive numeric types, `bool` and `String` have a kind;
    /// every other name classifies as `Unsupported`.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            "bool" => Self::Bool,
            "String" => Self::Text,
            "f32" => Self::Float(FloatWidth::W32),
            "f64" => Self::Float(FloatWidth::W64),
            _ => {
                let parsed = if let Some(suffix) = name.strip_prefix('i') {
                    IntWidth::from_suffix(suffix).map(Self::Int)
                } else if let Some(suffix) = name.strip_prefix('u') {
                    IntWidth::from_suffix(suffix).map(Self::Uint)
                } else {
                    None
                };
                parsed.unwrap_or(Self::Unsupported)
            }
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(width) => write!(f, "i{}", width.suffix()),
            Self::Uint(width) => write!(f, "u{}", width.suffix()),
            Self::Float(FloatWidth::W32) => f.write_str("f32"),
            Self::Float(FloatWidth::W64) => f.write_str("f64"),
            Self::Bool => f.write_str("bool"),
            Self::Text => f.write_str("string"),
            Self::Unsupported => f.write_str("unsupported"),
        }
    }
}

/// A kind name that is not part of the textual form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field kind '{0}'")]
pub struct UnknownKind(pub String);

impl FromStr for FieldKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" | "text" => Ok(Self::Text),
            "unsupported" => Ok(Self::Unsupported),
            _ => match Self::from_type_name(s) {
                Self::Unsupported | Self::Text => Err(UnknownKind(s.to_string())),
                kind => Ok(kind),
            },
        }
    }
}

impl Serialize for FieldKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FieldKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
