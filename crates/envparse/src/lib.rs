//! Typed parsing of environment variable values.
//!
//! This crate turns raw environment strings into booleans, strings, numbers,
//! arrays and null markers, and checks that required variables are present.
//! The parsers are pure functions over `Option<&str>`; `EnvReader` layers
//! named-variable access and logging on top of any `EnvSource`.

pub mod constants;
mod error;
mod mandatory;
mod options;
mod parse;
mod reader;
mod source;

pub use error::{EnvError, ParseError};
pub use mandatory::mandatory_variables;
pub use options::{ArrayOptions, NullOptions};
pub use parse::{
    ArrayValues, parse_array, parse_boolean, parse_null, parse_number, parse_number_array,
    parse_number_or, parse_number_or_null, parse_string, parse_string_array, parse_string_or,
    parse_string_or_null,
};
pub use reader::EnvReader;
pub use source::{EnvSource, ProcessEnv};
