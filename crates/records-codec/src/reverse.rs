//! Reverse conversion: text → field value.

use records_types::{FieldKind, FieldValue, FloatWidth, IntWidth, ParseError};

/// Parse text into a value of the given kind.
///
/// Integers are parsed in base 10 at the field's own width, so overflow is a
/// failure rather than a silent wrap. Text is accepted verbatim. Unsupported
/// kinds fail whatever the input.
pub fn decode_value(kind: FieldKind, text: &str) -> Result<FieldValue, ParseError> {
    match kind {
        FieldKind::Int(width) => parse_int(text, width).map(FieldValue::Int),
        FieldKind::Uint(width) => parse_uint(text, width).map(FieldValue::Uint),
        FieldKind::Float(FloatWidth::W32) => Ok(FieldValue::Float(f64::from(text.parse::<f32>()?))),
        FieldKind::Float(FloatWidth::W64) => Ok(FieldValue::Float(text.parse::<f64>()?)),
        FieldKind::Bool => parse_bool(text).map(FieldValue::Bool),
        FieldKind::Text => Ok(FieldValue::Text(text.to_string())),
        FieldKind::Unsupported => Err(ParseError::Unsupported),
    }
}

/// Parse a boolean literal.
///
/// Accepts `1`, `t`, `T`, `TRUE`, `true`, `True` and `0`, `f`, `F`, `FALSE`,
/// `false`, `False`. Mixed case beyond those spellings is rejected.
pub fn parse_bool(text: &str) -> Result<bool, ParseError> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
        _ => Err(ParseError::Bool),
    }
}

fn parse_int(text: &str, width: IntWidth) -> Result<i128, ParseError> {
    Ok(match width {
        IntWidth::W8 => text.parse::<i8>()?.into(),
        IntWidth::W16 => text.parse::<i16>()?.into(),
        IntWidth::W32 => text.parse::<i32>()?.into(),
        IntWidth::W64 => text.parse::<i64>()?.into(),
        IntWidth::W128 => text.parse::<i128>()?,
        IntWidth::Size => text.parse::<isize>()? as i128,
    })
}

fn parse_uint(text: &str, width: IntWidth) -> Result<u128, ParseError> {
    Ok(match width {
        IntWidth::W8 => text.parse::<u8>()?.into(),
        IntWidth::W16 => text.parse::<u16>()?.into(),
        IntWidth::W32 => text.parse::<u32>()?.into(),
        IntWidth::W64 => text.parse::<u64>()?.into(),
        IntWidth::W128 => text.parse::<u128>()?,
        IntWidth::Size => text.parse::<usize>()? as u128,
    })
}
