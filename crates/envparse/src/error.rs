//! Error types for value parsing and named-variable access.
//!
//! Responsibilities:
//! - Define `ParseError`, the validation taxonomy returned by the pure parsers.
//! - Define `EnvError`, which attaches the variable name for `EnvReader` callers.
//!
//! Does NOT handle:
//! - Recovery. Every error is returned to the direct caller, which decides
//!   whether to substitute a default or propagate.
//!
//! Invariants:
//! - `EnvError` messages always name the variable.
//! - Values read through `EnvReader::secret` never appear in any error.

use thiserror::Error;

/// Validation failures produced by the parsers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input was absent and the caller supplied no fallback.
    #[error("Value is missing and no fallback was provided")]
    MissingWithoutFallback,

    /// Input text is not a number and the caller supplied no fallback.
    #[error("Cannot parse {value:?} as a number")]
    UnparsableNumber { value: String },

    /// Input text is present but is not the null token.
    #[error("Expected \"null\", got {value:?}")]
    UnparsableNull { value: String },

    /// Input was absent and `allow_undefined` was not set.
    #[error("Value is absent and undefined values are not allowed")]
    AbsentNullDisallowed,

    /// One or more required variables are not present in the source.
    #[error("Missing required environment variables: {}", .missing.join(", "))]
    MissingRequiredVariables { missing: Vec<String> },
}

impl ParseError {
    /// Names reported by a failed mandatory-variable check, in the order they were required.
    pub fn missing_variables(&self) -> Option<&[String]> {
        match self {
            ParseError::MissingRequiredVariables { missing } => Some(missing.as_slice()),
            _ => None,
        }
    }
}

/// Errors from reading a named variable through `EnvReader`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnvError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingEnvVars(Vec<String>),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },
}

impl EnvError {
    /// Attach the variable name `var` to a parser failure.
    pub fn for_var(var: impl Into<String>, error: ParseError) -> Self {
        match error {
            ParseError::MissingWithoutFallback | ParseError::AbsentNullDisallowed => {
                EnvError::MissingEnvVar(var.into())
            }
            ParseError::MissingRequiredVariables { missing } => EnvError::MissingEnvVars(missing),
            other => EnvError::InvalidValue {
                var: var.into(),
                message: other.to_string(),
            },
        }
    }

    /// A variable that is set, but whose value is not valid UTF-8.
    pub fn not_unicode(var: impl Into<String>) -> Self {
        EnvError::InvalidValue {
            var: var.into(),
            message: "Value is not valid UTF-8".to_string(),
        }
    }

    /// The variable names this error refers to.
    pub fn vars(&self) -> Vec<&str> {
        match self {
            EnvError::MissingEnvVar(var) | EnvError::InvalidValue { var, .. } => {
                vec![var.as_str()]
            }
            EnvError::MissingEnvVars(vars) => vars.iter().map(String::as_str).collect(),
        }
    }
}
