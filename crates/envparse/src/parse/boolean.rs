//! Flag parsing.
//!
//! Responsibilities:
//! - Map optional text to `bool` using the truthy token list.
//!
//! Does NOT handle:
//! - Errors. Every input, including absent input, has an answer.
//!
//! Invariants:
//! - Only `TRUTHY_TOKENS` (case-insensitive, after trimming) are `true`.

use super::trim_value;
use crate::constants::TRUTHY_TOKENS;

/// Parse a flag value.
///
/// Returns `true` only for `"true"` or `"1"` (any case, surrounding whitespace
/// ignored). Everything else, including absent input, is `false`.
pub fn parse_boolean(input: Option<&str>) -> bool {
    input.is_some_and(|raw| {
        let value = trim_value(raw);
        TRUTHY_TOKENS
            .iter()
            .any(|token| value.eq_ignore_ascii_case(token))
    })
}
