// toolbelt-core/src/convert.rs
//! Lenient conversions that fall back to zero (or `false`) instead of failing.
//!
//! License: MIT OR APACHE 2.0

use crate::filters::truncate;

/// Longest input, in runes, that [`string_as_float`] looks at.
const MAX_FLOAT_INPUT: usize = 20;

/// Parses a decimal number written with arbitrary separators.
///
/// Only the first 20 runes are considered. Every `thousands_sep` is dropped
/// and every `decimal_sep` becomes `.` before parsing. Unparseable input
/// yields `0.0`.
///
/// ```
/// use toolbelt_core::convert::string_as_float;
///
/// assert_eq!(string_as_float("1.234,56", ',', '.'), 1234.56);
/// assert_eq!(string_as_float("not a number", '.', ','), 0.0);
/// ```
pub fn string_as_float(s: &str, decimal_sep: char, thousands_sep: char) -> f64 {
    if s.is_empty() {
        return 0.0;
    }

    let normalized: String = truncate(s, MAX_FLOAT_INPUT)
        .chars()
        .filter(|&c| c != thousands_sep)
        .map(|c| if c == decimal_sep { '.' } else { c })
        .collect();

    normalized.parse().unwrap_or(0.0)
}

/// Parses a base-10 32-bit integer, yielding 0 when `s` is not one.
pub fn string_as_integer(s: &str) -> i32 {
    s.parse().unwrap_or(0)
}

/// `true` for `"1"`, `"t"` and `"true"`, ignoring case and surrounding spaces.
pub fn boolean(s: &str) -> bool {
    matches!(s.trim().to_lowercase().as_str(), "1" | "t" | "true")
}

/// Whether `low <= n <= high`.
pub fn between<T: PartialOrd>(n: T, low: T, high: T) -> bool {
    n >= low && n <= high
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_as_float() {
        assert_eq!(string_as_float("", '.', ','), 0.0);
        assert_eq!(string_as_float("3.14", '.', ','), 3.14);
        assert_eq!(string_as_float("1,000,000.5", '.', ','), 1_000_000.5);
        assert_eq!(string_as_float("1.234,56", ',', '.'), 1234.56);
        assert_eq!(string_as_float("-0,5", ',', '.'), -0.5);
        assert_eq!(string_as_float("12a", '.', ','), 0.0);
    }

    #[test]
    fn test_string_as_float_considers_twenty_runes() {
        assert_eq!(string_as_float("12345678901234567890999", '.', ','), 12345678901234567890.0);
        assert_eq!(string_as_float("1234567890123456789x", '.', ','), 0.0);
    }

    #[test]
    fn test_string_as_integer() {
        assert_eq!(string_as_integer("42"), 42);
        assert_eq!(string_as_integer("-7"), -7);
        assert_eq!(string_as_integer(""), 0);
        assert_eq!(string_as_integer(" 42"), 0);
        assert_eq!(string_as_integer("4.2"), 0);
        assert_eq!(string_as_integer("3000000000"), 0);
    }

    #[test]
    fn test_boolean() {
        for truthy in ["1", "t", "T", "true", " TRUE ", "True"] {
            assert!(boolean(truthy), "{:?}", truthy);
        }
        for falsy in ["", "0", "f", "false", "yes", "truthy"] {
            assert!(!boolean(falsy), "{:?}", falsy);
        }
    }

    #[test]
    fn test_between() {
        assert!(between(5, 1, 10));
        assert!(between(1, 1, 10));
        assert!(between(10, 1, 10));
        assert!(!between(11, 1, 10));
        assert!(!between(5, 10, 1));
        assert!(between(0.5, 0.0, 1.0));
    }
}
