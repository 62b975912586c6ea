//! Tokens and defaults shared by the parsers.
//!
//! Kept in one place so option defaults and parser behavior cannot drift apart.

// =============================================================================
// Recognized Tokens
// =============================================================================

/// Values accepted as `true` by the boolean parser.
///
/// Matched case-insensitively after trimming surrounding whitespace.
pub const TRUTHY_TOKENS: &[&str] = &["true", "1"];

/// The only text accepted by the null parser (case-insensitive, trimmed).
pub const NULL_TOKEN: &str = "null";

// =============================================================================
// Option Defaults
// =============================================================================

/// Default separator for array values.
pub const DEFAULT_ARRAY_DELIMITER: &str = ",";

/// Array elements are returned as strings unless numeric parsing is requested.
pub const DEFAULT_ARRAY_PARSE_NUMBER: bool = false;

/// Absent input is rejected by the null parser unless explicitly allowed.
pub const DEFAULT_NULL_ALLOW_UNDEFINED: bool = false;
