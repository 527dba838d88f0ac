//! Number formatting and parsing for the display.

/// Shown on the result line after a non-finite computation.
pub const ERROR_MARKER: &str = "Error";

/// Scale used to round away binary floating-point noise (12 decimal places).
const ROUNDING_SCALE: f64 = 1e12;

/// Format a number for the result line.
///
/// Non-finite values become [`ERROR_MARKER`]. Finite values are rounded to
/// 12 decimal places so `0.1 + 0.2` reads `0.3`, then rendered as the
/// shortest decimal string without an exponent.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return ERROR_MARKER.to_string();
    }

    let scaled = (value + f64::EPSILON) * ROUNDING_SCALE;
    let rounded = if scaled.is_finite() {
        // Round half up
        (scaled + 0.5).floor() / ROUNDING_SCALE
    } else {
        value
    };

    // Never show "-0"
    if rounded == 0.0 {
        return "0".to_string();
    }

    format!("{}", rounded)
}

/// Parse the input buffer as a number.
///
/// Partially typed numerals such as `"."`, `"-."` or `"12."` are accepted.
/// Digit strings too long for an `f64` parse to infinity.
pub fn parse_input(input: &str) -> f64 {
    match input {
        "" | "-" | "." | "-." => 0.0,
        _ => input.parse().unwrap_or(0.0),
    }
}
