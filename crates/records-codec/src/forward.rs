//! Forward conversion: field value → text.

use records_types::{FieldKind, FieldValue, FloatWidth};
use std::fmt::{Display, LowerExp};

/// Smallest magnitude printed without an exponent.
const PLAIN_MIN: f64 = 1e-7;

/// Smallest magnitude printed with an exponent.
const PLAIN_MAX: f64 = 1e21;

/// Convert a field value to its textual form, dispatching on the field's kind.
///
/// Returns `None` when the kind has no text coercion, or when the value does
/// not carry the variant the kind calls for.
pub fn encode_value(kind: FieldKind, value: &FieldValue) -> Option<String> {
    match kind {
        FieldKind::Int(_) => value.as_i128().map(|i| i.to_string()),
        FieldKind::Uint(_) => value.as_u128().map(|u| u.to_string()),
        FieldKind::Float(width) => value.as_f64().map(|f| format_float(f, width)),
        FieldKind::Bool => value.as_bool().map(|b| {
            if b {
                "true".to_string()
            } else {
                "false".to_string()
            }
        }),
        FieldKind::Text => value.as_str().map(str::to_string),
        FieldKind::Unsupported => None,
    }
}

/// Shortest text that parses back to the same value at the given precision.
///
/// Magnitudes in `[1e-7, 1e21)` (and zero) print as plain decimals; anything
/// outside that range uses exponent notation (`1e21`, `2.5e-8`).
pub fn format_float(value: f64, width: FloatWidth) -> String {
    match width {
        FloatWidth::W32 => shortest(value as f32, value),
        FloatWidth::W64 => shortest(value, value),
    }
}

fn shortest<F: Display + LowerExp>(native: F, wide: f64) -> String {
    let magnitude = wide.abs();
    if magnitude.is_finite() && magnitude != 0.0 && !(PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        format!("{native:e}")
    } else {
        native.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use records_types::IntWidth;

    #[test]
    fn test_int_conversion() {
        let kind = FieldKind::Int(IntWidth::W64);
        assert_eq!(encode_value(kind, &FieldValue::Int(120)).unwrap(), "120");
        assert_eq!(encode_value(kind, &FieldValue::Int(-42)).unwrap(), "-42");
        assert_eq!(encode_value(kind, &FieldValue::Int(0)).unwrap(), "0");
    }

    #[test]
    fn test_uint_conversion() {
        let kind = FieldKind::Uint(IntWidth::W128);
        assert_eq!(
            encode_value(kind, &FieldValue::Uint(u128::MAX)).unwrap(),
            "340282366920938463463374607431768211455"
        );
    }

    #[test]
    fn test_bool_conversion() {
        assert_eq!(
            encode_value(FieldKind::Bool, &FieldValue::Bool(true)).unwrap(),
            "true"
        );
        assert_eq!(
            encode_value(FieldKind::Bool, &FieldValue::Bool(false)).unwrap(),
            "false"
        );
    }

    #[test]
    fn test_text_conversion_verbatim() {
        let value = FieldValue::text("hello, \"world\"\n");
        assert_eq!(
            encode_value(FieldKind::Text, &value).unwrap(),
            "hello, \"world\"\n"
        );
    }

    #[test]
    fn test_unsupported_kind() {
        assert_eq!(encode_value(FieldKind::Unsupported, &FieldValue::Unsupported), None);
        assert_eq!(encode_value(FieldKind::Unsupported, &FieldValue::Int(1)), None);
    }

    #[test]
    fn test_variant_mismatch() {
        assert_eq!(encode_value(FieldKind::Bool, &FieldValue::Int(1)), None);
    }

    #[test]
    fn test_float_plain() {
        assert_eq!(format_float(1.5, FloatWidth::W64), "1.5");
        assert_eq!(format_float(0.1, FloatWidth::W64), "0.1");
        assert_eq!(format_float(-2.0, FloatWidth::W64), "-2");
        assert_eq!(format_float(0.0, FloatWidth::W64), "0");
        assert_eq!(format_float(123456789.0, FloatWidth::W64), "123456789");
    }

    #[test]
    fn test_float_single_precision_is_shortest() {
        let widened = f64::from(0.1f32);
        assert_eq!(format_float(widened, FloatWidth::W32), "0.1");
        assert_eq!(format_float(f64::from(3.14f32), FloatWidth::W32), "3.14");
    }

    #[test]
    fn test_float_exponent_outside_plain_range() {
        assert_eq!(format_float(1e21, FloatWidth::W64), "1e21");
        assert_eq!(format_float(2.5e-8, FloatWidth::W64), "2.5e-8");
        assert_eq!(format_float(-1e300, FloatWidth::W64), "-1e300");
    }

    #[test]
    fn test_float_non_finite() {
        assert_eq!(format_float(f64::NAN, FloatWidth::W64), "NaN");
        assert_eq!(format_float(f64::INFINITY, FloatWidth::W64), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY, FloatWidth::W32), "-inf");
    }

    #[test]
    fn test_float_round_trips() {
        for value in [0.1, 1.0 / 3.0, 6.02214076e23, 1e-10, f64::MAX, f64::MIN_POSITIVE] {
            let text = format_float(value, FloatWidth::W64);
            assert_eq!(text.parse::<f64>().unwrap(), value, "Failed for: {text}");
        }
    }
}
