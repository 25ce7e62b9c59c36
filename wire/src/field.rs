//! Numeric, color and scale sub-fields.

use layer::Color;

use crate::error::{DecodeError, WireResult};

fn malformed(field: &'static str, raw: &str) -> DecodeError {
    DecodeError::MalformedNumber {
        field,
        raw: raw.to_string(),
    }
}

/// Parses a signed decimal integer sub-field.
pub fn parse_int(field: &'static str, raw: &str) -> WireResult<i32> {
    raw.parse().map_err(|_| malformed(field, raw))
}

/// Parses a hexadecimal `RRGGBB` color.
pub fn parse_hex_color(field: &'static str, raw: &str) -> WireResult<Color> {
    u32::from_str_radix(raw, 16)
        .map(Color::from_rgb)
        .map_err(|_| malformed(field, raw))
}

/// Parses a decimal packed-RGB color.
///
/// Any signed 64-bit value is accepted and reduced to its low 24 bits, so
/// `-1` is white.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn parse_decimal_color(field: &'static str, raw: &str) -> WireResult<Color> {
    raw.parse::<i64>()
        .map(|value| Color::from_rgb((value & 0xFF_FFFF) as u32))
        .map_err(|_| malformed(field, raw))
}

/// Formats a color as lowercase hex without padding.
#[must_use]
pub fn format_hex_color(color: Color) -> String {
    format!("{:x}", color.rgb())
}

/// Parses an integer percentage into a scale factor.
pub fn parse_scale(field: &'static str, raw: &str) -> WireResult<f64> {
    parse_int(field, raw).map(|percent| f64::from(percent) / 100.0)
}

/// Formats a scale factor as the nearest integer percentage.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn format_scale(scale: f64) -> i32 {
    (scale * 100.0).round() as i32
}
