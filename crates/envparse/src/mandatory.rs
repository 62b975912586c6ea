//! Mandatory-variable presence check.
//!
//! Responsibilities:
//! - Report which required names are absent from an `EnvSource`.
//!
//! Does NOT handle:
//! - Value validation. Empty and non-UTF-8 values count as present.
//! - Logging (see `EnvReader::require`).
//!
//! Invariants:
//! - Missing names are reported once per occurrence, in the order given.

use crate::error::ParseError;
use crate::source::EnvSource;

/// Check that every name in `required` is present in `source`.
///
/// Only presence is checked; values are never read or parsed. On failure the
/// error lists the absent names in the order they were required.
pub fn mandatory_variables<I, S>(required: I, source: &S) -> Result<(), ParseError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    S: EnvSource + ?Sized,
{
    let missing: Vec<String> = required
        .into_iter()
        .filter(|name| !source.contains(name.as_ref()))
        .map(|name| name.as_ref().to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ParseError::MissingRequiredVariables { missing })
    }
}
