//! Pure parsers from raw environment text to typed values.
//!
//! Responsibilities:
//! - Convert an optional input string into a boolean, string, number, array or null marker.
//! - Express fallback nullability through the operation variant
//!   (`parse_x`, `parse_x_or`, `parse_x_or_null`).
//!
//! Does NOT handle:
//! - Reading variables from any source (see `source` and `reader`).
//! - Logging. Parsers have no side effects.
//!
//! Invariants:
//! - `None` input means "absent"; `Some("")` is present, empty text.
//! - Present text is trimmed before interpretation; fallbacks are returned as-is.
//! - Trimming strips Unicode whitespace and the byte order mark (U+FEFF).

mod array;
mod boolean;
mod null;
mod number;
mod string;

pub use array::{ArrayValues, parse_array, parse_number_array, parse_string_array};
pub use boolean::parse_boolean;
pub use null::parse_null;
pub use number::{parse_number, parse_number_or, parse_number_or_null};
pub use string::{parse_string, parse_string_or, parse_string_or_null};

/// Strip surrounding whitespace and byte order marks from present text.
pub(crate) fn trim_value(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_value_strips_whitespace_and_bom() {
        assert_eq!(trim_value("  value\t\n"), "value");
        assert_eq!(trim_value("\u{feff}value"), "value");
        assert_eq!(trim_value("\u{feff} \u{a0}value\u{2003}\u{feff}"), "value");
        assert_eq!(trim_value("in\u{feff}side"), "in\u{feff}side");
        assert_eq!(trim_value("\u{feff}"), "");
    }
}
