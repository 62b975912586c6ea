//! String parsing.
//!
//! Responsibilities:
//! - Trim present text and apply the three fallback variants.
//!
//! Invariants:
//! - Present text, including empty text, never falls back.
//! - Fallbacks are returned exactly as given.

use super::trim_value;
use crate::error::ParseError;

/// Parse a required string value.
///
/// Present input is returned trimmed. Absent input fails with
/// [`ParseError::MissingWithoutFallback`].
pub fn parse_string(input: Option<&str>) -> Result<String, ParseError> {
    input
        .map(|raw| trim_value(raw).to_string())
        .ok_or(ParseError::MissingWithoutFallback)
}

/// Parse a string value, substituting `fallback` when the input is absent.
///
/// The fallback is returned untrimmed.
pub fn parse_string_or(input: Option<&str>, fallback: &str) -> String {
    parse_string(input).unwrap_or_else(|_| fallback.to_string())
}

/// Parse a string value, yielding `None` when the input is absent.
pub fn parse_string_or_null(input: Option<&str>) -> Option<String> {
    parse_string(input).ok()
}
