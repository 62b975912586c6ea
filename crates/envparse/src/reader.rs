//! Named-variable access on top of the pure parsers.
//!
//! Responsibilities:
//! - Look up variables by name (with an optional prefix) in any `EnvSource`.
//! - Run the matching parser and attach the variable name to failures.
//! - Log fallback substitution and failed required-variable checks.
//!
//! Does NOT handle:
//! - Value interpretation. All parsing is delegated to the `parse` module.
//! - Populating the source (see `source.rs`).
//!
//! Invariants:
//! - Logs and errors carry variable names only, never values.
//! - A set variable whose value is not valid UTF-8 is an invalid value, not a missing one.
//! - The prefix is applied to every lookup, including `require`.

use secrecy::SecretString;
use std::fmt::Display;
use std::str::FromStr;

use crate::error::EnvError;
use crate::mandatory::mandatory_variables;
use crate::options::{ArrayOptions, NullOptions};
use crate::parse::{
    ArrayValues, parse_array, parse_boolean, parse_null, parse_number, parse_string,
};
use crate::source::{EnvSource, ProcessEnv};

/// Reads typed values for named variables from an `EnvSource`.
#[derive(Debug, Clone)]
pub struct EnvReader<S = ProcessEnv> {
    source: S,
    prefix: String,
}

impl EnvReader<ProcessEnv> {
    /// Reader over the current process environment.
    pub fn from_process() -> Self {
        Self::new(ProcessEnv)
    }
}

impl Default for EnvReader<ProcessEnv> {
    fn default() -> Self {
        Self::from_process()
    }
}

impl<S: EnvSource> EnvReader<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            prefix: String::new(),
        }
    }

    /// Prepend `prefix` to every variable name, e.g. `"APP_"` reads `APP_PORT` for `"PORT"`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Full key looked up for `name`.
    pub fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    fn lookup(&self, name: &str) -> Result<(String, Option<String>), EnvError> {
        let key = self.key(name);
        match self.source.var_checked(&key) {
            Ok(raw) => Ok((key, raw)),
            Err(_) => Err(EnvError::not_unicode(key)),
        }
    }

    /// Unset variables and values that are not valid UTF-8 read as `false`.
    pub fn boolean(&self, name: &str) -> bool {
        match self.lookup(name) {
            Ok((_, raw)) => parse_boolean(raw.as_deref()),
            Err(_) => false,
        }
    }

    pub fn string(&self, name: &str) -> Result<String, EnvError> {
        let (key, raw) = self.lookup(name)?;
        parse_string(raw.as_deref()).map_err(|e| EnvError::for_var(key, e))
    }

    pub fn string_or(&self, name: &str, fallback: &str) -> String {
        self.optional_string(name)
            .unwrap_or_else(|| fallback.to_string())
    }

    pub fn optional_string(&self, name: &str) -> Option<String> {
        self.string(name)
            .inspect_err(|e| log_fallback(e))
            .ok()
    }

    pub fn number(&self, name: &str) -> Result<f64, EnvError> {
        let (key, raw) = self.lookup(name)?;
        parse_number(raw.as_deref()).map_err(|e| EnvError::for_var(key, e))
    }

    pub fn number_or(&self, name: &str, fallback: f64) -> f64 {
        self.optional_number(name).unwrap_or(fallback)
    }

    pub fn optional_number(&self, name: &str) -> Option<f64> {
        self.number(name)
            .inspect_err(|e| log_fallback(e))
            .ok()
    }

    /// Absent variables yield an empty array.
    pub fn array(&self, name: &str, options: &ArrayOptions) -> Result<ArrayValues, EnvError> {
        let (key, raw) = self.lookup(name)?;
        parse_array(raw.as_deref(), options).map_err(|e| EnvError::for_var(key, e))
    }

    pub fn null(&self, name: &str, options: &NullOptions) -> Result<(), EnvError> {
        let (key, raw) = self.lookup(name)?;
        parse_null(raw.as_deref(), options).map_err(|e| EnvError::for_var(key, e))
    }

    /// Read a required value that must not leak through `Debug` or logs.
    pub fn secret(&self, name: &str) -> Result<SecretString, EnvError> {
        self.string(name).map(SecretString::from)
    }

    /// Read a required value and convert it with `FromStr` after trimming.
    ///
    /// The conversion error message is reported, the value is not.
    pub fn parse<T>(&self, name: &str) -> Result<T, EnvError>
    where
        T: FromStr,
        T::Err: Display,
    {
        let value = self.string(name)?;
        value.parse::<T>().map_err(|e| EnvError::InvalidValue {
            var: self.key(name),
            message: e.to_string(),
        })
    }

    /// Check that every name (with the prefix applied) is present.
    pub fn require<I>(&self, names: I) -> Result<(), EnvError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let keys: Vec<String> = names
            .into_iter()
            .map(|name| self.key(name.as_ref()))
            .collect();

        mandatory_variables(&keys, &self.source).map_err(|err| {
            tracing::warn!(error = %err, "Required environment variables are not set");
            let missing = err
                .missing_variables()
                .map(<[String]>::to_vec)
                .unwrap_or_default();
            EnvError::MissingEnvVars(missing)
        })
    }
}

fn log_fallback(error: &EnvError) {
    match error {
        EnvError::MissingEnvVar(var) => {
            tracing::debug!(var = %var, "Environment variable not set; using fallback");
        }
        EnvError::InvalidValue { var, .. } => {
            tracing::debug!(var = %var, "Environment variable could not be parsed; using fallback");
        }
        EnvError::MissingEnvVars(_) => {}
    }
}
