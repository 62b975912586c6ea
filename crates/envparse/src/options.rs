//! Option records for the array and null parsers.
//!
//! Responsibilities:
//! - Define `ArrayOptions` and `NullOptions` with documented defaults.
//! - Provide `with_*` setters that override one field and leave the rest alone.
//!
//! Does NOT handle:
//! - Parsing itself (see the `parse` module).
//!
//! Invariants:
//! - Defaults come from `constants`, never from literals at call sites.
//! - Deserializing a partial record keeps defaults for every omitted field.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ARRAY_DELIMITER, DEFAULT_ARRAY_PARSE_NUMBER, DEFAULT_NULL_ALLOW_UNDEFINED,
};

/// Options for `parse_array`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArrayOptions {
    /// Literal separator between elements. Default: `","`.
    pub delimiter: String,
    /// Parse each element as a number instead of a trimmed string. Default: `false`.
    pub parse_number: bool,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        Self {
            delimiter: DEFAULT_ARRAY_DELIMITER.to_string(),
            parse_number: DEFAULT_ARRAY_PARSE_NUMBER,
        }
    }
}

impl ArrayOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_parse_number(mut self, parse_number: bool) -> Self {
        self.parse_number = parse_number;
        self
    }
}

/// Options for `parse_null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NullOptions {
    /// Treat absent input as null instead of failing. Default: `false`.
    pub allow_undefined: bool,
}

impl Default for NullOptions {
    fn default() -> Self {
        Self {
            allow_undefined: DEFAULT_NULL_ALLOW_UNDEFINED,
        }
    }
}

impl NullOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_allow_undefined(mut self, allow_undefined: bool) -> Self {
        self.allow_undefined = allow_undefined;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_array_options_defaults() {
        let options = ArrayOptions::default();
        assert_eq!(options.delimiter, ",");
        assert!(!options.parse_number);
    }

    #[test]
    fn test_setting_delimiter_keeps_parse_number() {
        let options = ArrayOptions::new()
            .with_parse_number(true)
            .with_delimiter(";");

        assert_eq!(options.delimiter, ";");
        assert!(options.parse_number, "parse_number must survive delimiter override");
    }

    #[test]
    fn test_partial_array_options_merge_over_defaults() {
        let options: ArrayOptions = serde_json::from_str(r#"{"parseNumber": true}"#).unwrap();
        assert_eq!(options.delimiter, ",");
        assert!(options.parse_number);

        let options: ArrayOptions = serde_json::from_str(r#"{"delimiter": "|"}"#).unwrap();
        assert_eq!(options.delimiter, "|");
        assert!(!options.parse_number);
    }

    #[test]
    fn test_empty_record_is_default() {
        let array: ArrayOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(array, ArrayOptions::default());

        let null: NullOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(null, NullOptions::default());
    }

    #[test]
    fn test_null_options() {
        assert!(!NullOptions::default().allow_undefined);
        assert!(NullOptions::new().with_allow_undefined(true).allow_undefined);

        let options: NullOptions = serde_json::from_str(r#"{"allowUndefined": true}"#).unwrap();
        assert!(options.allow_undefined);
    }

    #[test]
    fn test_options_serialize_with_documented_field_names() {
        let json = serde_json::to_value(ArrayOptions::default()).unwrap();
        assert_eq!(json, serde_json::json!({"delimiter": ",", "parseNumber": false}));
    }
}
