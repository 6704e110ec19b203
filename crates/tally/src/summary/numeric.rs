//! Best-effort coercion of text cells into numbers.

use once_cell::sync::Lazy;
use regex::Regex;

// Plain decimal literal: optional sign, digits with an optional fraction, and
// an optional exponent. Keeps out `inf`, `nan` and hex forms that
// `f64::from_str` would otherwise accept.
static DECIMAL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").unwrap());

/// Parse a cell as a finite decimal number.
///
/// A comma is read as the decimal separator, so `"3,5"` is `3.5`.
/// Surrounding whitespace is ignored.
pub fn parse_number(value: &str) -> Option<f64> {
    let normalized = value.trim().replace(',', ".");
    if !DECIMAL_PATTERN.is_match(&normalized) {
        return None;
    }

    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Check whether a cell coerces to a number.
pub fn is_numeric(value: &str) -> bool {
    parse_number(value).is_some()
}
