//! Sources of environment variable values.
//!
//! Responsibilities:
//! - Define the `EnvSource` lookup trait used by `EnvReader` and `mandatory_variables`.
//! - Provide `ProcessEnv` for the hosting process environment and impls for maps.
//!
//! Does NOT handle:
//! - Loading variables from `.env` or other files. Callers populate a map or
//!   the process environment themselves.
//!
//! Invariants:
//! - Lookups never mutate the source.
//! - `contains` reports presence, including present-but-empty values.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::env::VarError;
use std::hash::{BuildHasher, Hash};

/// Read-only lookup of environment variables by name.
pub trait EnvSource {
    /// The value of `key`, or `None` if it has no usable value.
    fn var(&self, key: &str) -> Option<String>;

    /// Like `var`, but a present value that is not valid UTF-8 is an error
    /// instead of `None`. Only `VarError::NotUnicode` is ever returned.
    fn var_checked(&self, key: &str) -> Result<Option<String>, VarError> {
        Ok(self.var(key))
    }

    /// Whether `key` currently has an associated value.
    fn contains(&self, key: &str) -> bool {
        self.var(key).is_some()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn var_checked(&self, key: &str) -> Result<Option<String>, VarError> {
        (**self).var_checked(key)
    }

    fn contains(&self, key: &str) -> bool {
        (**self).contains(key)
    }
}

impl<K, V, S> EnvSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: AsRef<str>,
    S: BuildHasher,
{
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| value.as_ref().to_string())
    }

    fn contains(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

impl<K, V> EnvSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<str>,
{
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).map(|value| value.as_ref().to_string())
    }

    fn contains(&self, key: &str) -> bool {
        self.contains_key(key)
    }
}

/// The environment of the current process.
///
/// Values that are not valid UTF-8 read as `None` through `var` and as
/// `VarError::NotUnicode` through `var_checked`, and still count as present.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn var_checked(&self, key: &str) -> Result<Option<String>, VarError> {
        match std::env::var(key) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn contains(&self, key: &str) -> bool {
        std::env::var_os(key).is_some()
    }
}
