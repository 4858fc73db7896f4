//! # Numeric Input Normalization
//!
//! Converts locale-formatted numeric text into a canonical ASCII decimal
//! string before it is stored in a [`DimensionSet`](crate::dimensions::DimensionSet).
//!
//! ## Rules (applied in order)
//!
//! 1. Arabic-Indic (`٠`–`٩`) and Eastern Arabic-Indic (`۰`–`۹`) digits map to `0`–`9`
//! 2. All whitespace is removed
//! 3. The Arabic decimal separator `٫` maps to `.`
//! 4. If the text contains a comma and no dot, every comma is a decimal point;
//!    otherwise commas are thousands separators and are dropped
//!
//! ## Example
//!
//! ```rust
//! use weight_core::normalize::{normalize, to_number};
//!
//! assert_eq!(normalize("١٢٫٥"), "12.5");
//! assert_eq!(normalize("1 234,5"), "1234.5");
//! assert_eq!(normalize("1,234.5"), "1234.5");
//! assert_eq!(to_number("-"), 0.0);
//! ```

/// Arabic-Indic digits, indexed by their numeric value
const ARABIC_INDIC_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];

/// Eastern Arabic-Indic (Persian) digits, indexed by their numeric value
const EASTERN_ARABIC_INDIC_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Arabic decimal separator (U+066B)
const ARABIC_DECIMAL_SEPARATOR: char = '٫';

/// Map a single character to its ASCII digit if it is one of the localized digits.
fn ascii_digit(c: char) -> Option<char> {
    ARABIC_INDIC_DIGITS
        .iter()
        .position(|&d| d == c)
        .or_else(|| EASTERN_ARABIC_INDIC_DIGITS.iter().position(|&d| d == c))
        .and_then(|idx| char::from_digit(idx as u32, 10))
}

/// Normalize locale-formatted numeric text to a canonical ASCII decimal string.
///
/// The output is not validated: `"abc"` stays `"abc"`, and [`to_number`]
/// turns it into `0`. Normalization is idempotent.
pub fn normalize(text: &str) -> String {
    let mapped: String = text
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match ascii_digit(c) {
            Some(d) => d,
            None if c == ARABIC_DECIMAL_SEPARATOR => '.',
            None => c,
        })
        .collect();

    if mapped.contains(',') && !mapped.contains('.') {
        mapped.replace(',', ".")
    } else {
        mapped.replace(',', "")
    }
}

/// Parse locale-formatted numeric text into a float.
///
/// Returns `0.0` for empty, partial (`"-"`, `"."`), garbage or non-finite
/// input. Never panics.
pub fn to_number(text: &str) -> f64 {
    parse_normalized(&normalize(text))
}

/// Parse an already-normalized string, coercing failures to `0.0`.
pub(crate) fn parse_normalized(normalized: &str) -> f64 {
    match normalized.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Whether the text normalizes to something non-empty.
///
/// A value of `"0"` counts as present; only empty text blocks a calculation.
pub fn is_present(text: &str) -> bool {
    !normalize(text).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arabic_indic_digits() {
        for (value, digit) in ARABIC_INDIC_DIGITS.iter().enumerate() {
            assert_eq!(normalize(&digit.to_string()), value.to_string());
        }
    }

    #[test]
    fn test_eastern_arabic_indic_digits() {
        for (value, digit) in EASTERN_ARABIC_INDIC_DIGITS.iter().enumerate() {
            assert_eq!(normalize(&digit.to_string()), value.to_string());
        }
    }

    #[test]
    fn test_whitespace_stripped() {
        assert_eq!(normalize("  12 5\t0\n"), "1250");
        assert_eq!(normalize("1\u{00A0}000"), "1000");
    }

    #[test]
    fn test_arabic_decimal_separator() {
        assert_eq!(normalize("٧٫٨٥"), "7.85");
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(normalize("7,85"), "7.85");
        assert_eq!(normalize("۱۲,۵"), "12.5");
    }

    #[test]
    fn test_thousands_comma() {
        assert_eq!(normalize("1,250.75"), "1250.75");
        assert_eq!(normalize("1,000,000.5"), "1000000.5");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "", "-", ".", "abc", "1,2,3", "1,234.5", "٣٫١٤", "۱,۵", " 42 ", "1٬000", "1e3", ",", "..",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", s);
        }
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number("12.5"), 12.5);
        assert_eq!(to_number("١٢٫٥"), 12.5);
        assert_eq!(to_number("1,5"), 1.5);
        assert_eq!(to_number("-3"), -3.0);
    }

    #[test]
    fn test_to_number_failures_are_zero() {
        assert_eq!(to_number(""), 0.0);
        assert_eq!(to_number("-"), 0.0);
        assert_eq!(to_number("."), 0.0);
        assert_eq!(to_number("abc"), 0.0);
        assert_eq!(to_number("12abc"), 0.0);
        assert_eq!(to_number("inf"), 0.0);
        assert_eq!(to_number("NaN"), 0.0);
        assert_eq!(to_number("1e999"), 0.0);
    }

    #[test]
    fn test_is_present() {
        assert!(is_present("0"));
        assert!(is_present("abc"));
        assert!(!is_present(""));
        assert!(!is_present("   "));
    }
}
