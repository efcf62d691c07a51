//! Error types for the records tabular mapper.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::kind::FieldKind;

/// Classification of a [`RecordError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The top-level argument is not a usable record collection or table
    InvalidInputShape,
    /// A field's kind has no text coercion
    UnsupportedKind,
    /// Text could not be parsed into the field's native kind
    ParseFailure,
    /// A row is shorter than the column position the header maps a field to
    IndexOutOfRange,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InvalidInputShape => "invalid input shape",
            Self::UnsupportedKind => "unsupported kind",
            Self::ParseFailure => "parse failure",
            Self::IndexOutOfRange => "index out of range",
        })
    }
}

/// Error reported by marshal and unmarshal.
///
/// `InvalidInputShape` is fatal for a call. The other variants are recorded
/// per field and the call keeps going.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    /// The input (or output) collection cannot be converted at all
    #[error("invalid input shape: {reason}")]
    InvalidInputShape { reason: String },

    /// The field has a column annotation but no text coercion
    #[error("field '{field}' has kind '{kind}', which has no text coercion")]
    UnsupportedKind { field: String, kind: FieldKind },

    /// The field's column text is not a valid value of its kind
    #[error("field '{field}': could not parse {value:?} as {kind}: {source}")]
    ParseFailure {
        field: String,
        kind: FieldKind,
        value: String,
        #[source]
        source: ParseError,
    },

    /// The row does not reach the field's column position
    #[error(
        "field '{field}': column '{column}' is at position {position} but the row has only {row_len} fields"
    )]
    IndexOutOfRange {
        field: String,
        column: String,
        position: usize,
        row_len: usize,
    },
}

impl RecordError {
    /// Create an `InvalidInputShape` error.
    pub fn invalid_shape(reason: impl Into<String>) -> Self {
        Self::InvalidInputShape {
            reason: reason.into(),
        }
    }

    /// The classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInputShape { .. } => ErrorKind::InvalidInputShape,
            Self::UnsupportedKind { .. } => ErrorKind::UnsupportedKind,
            Self::ParseFailure { .. } => ErrorKind::ParseFailure,
            Self::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }

    /// Declared name of the offending field, if the error concerns one.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInputShape { .. } => None,
            Self::UnsupportedKind { field, .. }
            | Self::ParseFailure { field, .. }
            | Self::IndexOutOfRange { field, .. } => Some(field),
        }
    }
}

/// Why a piece of text is not a value of a kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Malformed or out-of-range integer
    #[error(transparent)]
    Int(#[from] ParseIntError),

    /// Malformed floating point number
    #[error(transparent)]
    Float(#[from] ParseFloatError),

    /// Not one of the accepted boolean literals
    #[error("invalid boolean literal")]
    Bool,

    /// The kind has no text coercion
    #[error("kind has no text coercion")]
    Unsupported,

    /// The text parsed but the record refused the value
    #[error(transparent)]
    Rejected(#[from] ValueError),
}

/// A record refused a value handed to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// The value's variant does not match the field's kind
    #[error("expected a {expected} value, found {found}")]
    KindMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// The widened value does not fit the field's native width
    #[error("value {value} does not fit in {target}")]
    OutOfRange { value: String, target: &'static str },

    /// There is no assignable field at this position
    #[error("no assignable field at position {0}")]
    NoSuchField(usize),
}

/// Error type for schema operations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// Error reading schema file
    #[error("Failed to read schema file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Two fields share a declared name
    #[error("Duplicate field name in schema: {0}")]
    DuplicateField(String),
}
