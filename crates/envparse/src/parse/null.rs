//! Explicit null marker parsing.
//!
//! Responsibilities:
//! - Accept the null token, and absent input when `allow_undefined` is set.
//!
//! Invariants:
//! - Present text other than the null token is always an error, including empty text.

use super::trim_value;
use crate::constants::NULL_TOKEN;
use crate::error::ParseError;
use crate::options::NullOptions;

/// Parse an explicit null marker.
///
/// Present input must be `"null"` (any case, surrounding whitespace ignored).
/// Absent input is accepted only when `options.allow_undefined` is set.
pub fn parse_null(input: Option<&str>, options: &NullOptions) -> Result<(), ParseError> {
    match input {
        Some(raw) if trim_value(raw).eq_ignore_ascii_case(NULL_TOKEN) => Ok(()),
        Some(raw) => Err(ParseError::UnparsableNull {
            value: raw.to_string(),
        }),
        None if options.allow_undefined => Ok(()),
        None => Err(ParseError::AbsentNullDisallowed),
    }
}
