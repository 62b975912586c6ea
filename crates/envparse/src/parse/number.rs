//! Number parsing.
//!
//! Responsibilities:
//! - Recognize numeric text and apply the three fallback variants.
//!
//! Does NOT handle:
//! - Integer range checks. Callers that need integers use `EnvReader::parse`.
//!
//! Invariants:
//! - Unparsable errors carry the original, untrimmed text.
//! - `NaN` is never produced.

use super::trim_value;
use crate::error::ParseError;

/// Parse a required number.
///
/// Accepts integers, decimals, a leading `+`/`-`, scientific notation,
/// `Infinity`, and unsigned `0x`/`0o`/`0b` integer literals, all with
/// surrounding whitespace. Empty or whitespace-only text is not a number.
pub fn parse_number(input: Option<&str>) -> Result<f64, ParseError> {
    let raw = input.ok_or(ParseError::MissingWithoutFallback)?;
    to_number(raw).ok_or_else(|| ParseError::UnparsableNumber {
        value: raw.to_string(),
    })
}

/// Parse a number, substituting `fallback` when the input is absent or unparsable.
pub fn parse_number_or(input: Option<&str>, fallback: f64) -> f64 {
    parse_number(input).unwrap_or(fallback)
}

/// Parse a number, yielding `None` when the input is absent or unparsable.
pub fn parse_number_or_null(input: Option<&str>) -> Option<f64> {
    parse_number(input).ok()
}

fn to_number(raw: &str) -> Option<f64> {
    let text = trim_value(raw);
    if text.is_empty() {
        return None;
    }

    if let Some((radix, digits)) = split_radix_prefix(text) {
        return radix_digits(digits, radix);
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    // `f64::from_str` also takes "inf" and "NaN" spellings; only the exponent marker may be a letter.
    if text
        .bytes()
        .any(|b| b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
    {
        return None;
    }

    text.parse::<f64>().ok()
}

fn split_radix_prefix(text: &str) -> Option<(u32, &str)> {
    let radix = match text.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

fn radix_digits(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0f64, |acc, c| {
        c.to_digit(radix)
            .map(|digit| acc * f64::from(radix) + f64::from(digit))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unparsable(value: &str) -> ParseError {
        ParseError::UnparsableNumber {
            value: value.to_string(),
        }
    }

    #[test]
    fn test_integers_and_decimals() {
        assert_eq!(parse_number(Some("42")).unwrap(), 42.0);
        assert_eq!(parse_number(Some("  3.14 ")).unwrap(), 3.14);
        assert_eq!(parse_number(Some("-7")).unwrap(), -7.0);
        assert_eq!(parse_number(Some("+7")).unwrap(), 7.0);
        assert_eq!(parse_number(Some(".5")).unwrap(), 0.5);
        assert_eq!(parse_number(Some("5.")).unwrap(), 5.0);
        assert_eq!(parse_number(Some("007")).unwrap(), 7.0);
    }

    #[test]
    fn test_scientific_notation() {
        assert_eq!(parse_number(Some("1e3")).unwrap(), 1000.0);
        assert_eq!(parse_number(Some("2.5E-2")).unwrap(), 0.025);
        assert_eq!(parse_number(Some("-1e+2")).unwrap(), -100.0);
    }

    #[test]
    fn test_infinity() {
        assert_eq!(parse_number(Some("Infinity")).unwrap(), f64::INFINITY);
        assert_eq!(parse_number(Some(" -Infinity ")).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_radix_literals() {
        assert_eq!(parse_number(Some("0x1F")).unwrap(), 31.0);
        assert_eq!(parse_number(Some("0o17")).unwrap(), 15.0);
        assert_eq!(parse_number(Some("0b101")).unwrap(), 5.0);
        assert_eq!(parse_number(Some("0x")), Err(unparsable("0x")));
        assert_eq!(parse_number(Some("0b102")), Err(unparsable("0b102")));
        assert_eq!(parse_number(Some("-0x10")), Err(unparsable("-0x10")));
        assert_eq!(parse_number(Some("0x+1")), Err(unparsable("0x+1")));
    }

    #[test]
    fn test_non_numeric_text_is_unparsable() {
        for input in [
            "abc", "12abc", "1,000", "1_000", "NaN", "nan", "inf", "infinity", "e5", "1e", ".",
            "--1",
        ] {
            assert_eq!(parse_number(Some(input)), Err(unparsable(input)), "{input:?}");
        }
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(parse_number(Some("\u{feff}5")).unwrap(), 5.0);
        assert_eq!(parse_number(Some("\u{feff} 0x10 \u{a0}")).unwrap(), 16.0);
        assert_eq!(parse_number(Some("\u{feff}")), Err(unparsable("\u{feff}")));
    }

    #[test]
    fn test_empty_text_is_not_zero() {
        assert_eq!(parse_number(Some("")), Err(unparsable("")));
        assert_eq!(parse_number(Some("   ")), Err(unparsable("   ")));
        assert_eq!(parse_number_or(Some(""), 9.0), 9.0);
    }

    #[test]
    fn test_absent_without_fallback_fails() {
        assert_eq!(parse_number(None), Err(ParseError::MissingWithoutFallback));
    }

    #[test]
    fn test_fallbacks() {
        assert_eq!(parse_number_or(Some("abc"), 7.0), 7.0);
        assert_eq!(parse_number_or(None, 7.0), 7.0);
        assert_eq!(parse_number_or_null(Some("abc")), None);
        assert_eq!(parse_number_or_null(None), None);
    }

    #[test]
    fn test_parsed_value_ignores_fallback() {
        assert_eq!(parse_number_or(Some("0"), 7.0), 0.0);
        assert_eq!(parse_number_or_null(Some("12.5")), Some(12.5));
    }

    #[test]
    fn test_display_round_trip() {
        for value in [0.0, 1.5, -273.15, 6.02e23, 1e-9, f64::MAX] {
            assert_eq!(parse_number(Some(&value.to_string())).unwrap(), value);
        }
    }
}
