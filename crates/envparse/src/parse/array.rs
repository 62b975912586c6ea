//! Delimited list parsing.
//!
//! Elements are parsed with the strict string or number parser, so one bad
//! element fails the whole value. A trailing delimiter produces a trailing
//! empty element; it is not dropped.

use serde::Serialize;

use super::number::parse_number;
use super::string::parse_string;
use crate::error::ParseError;
use crate::options::ArrayOptions;

/// Elements of a parsed array, all strings or all numbers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ArrayValues {
    Strings(Vec<String>),
    Numbers(Vec<f64>),
}

impl ArrayValues {
    pub fn len(&self) -> usize {
        match self {
            ArrayValues::Strings(values) => values.len(),
            ArrayValues::Numbers(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            ArrayValues::Strings(values) => Some(values.as_slice()),
            ArrayValues::Numbers(_) => None,
        }
    }

    pub fn as_numbers(&self) -> Option<&[f64]> {
        match self {
            ArrayValues::Numbers(values) => Some(values.as_slice()),
            ArrayValues::Strings(_) => None,
        }
    }

    pub fn into_strings(self) -> Option<Vec<String>> {
        match self {
            ArrayValues::Strings(values) => Some(values),
            ArrayValues::Numbers(_) => None,
        }
    }

    pub fn into_numbers(self) -> Option<Vec<f64>> {
        match self {
            ArrayValues::Numbers(values) => Some(values),
            ArrayValues::Strings(_) => None,
        }
    }
}

/// Parse a delimited list according to `options`.
///
/// Absent input yields an empty list of the requested element kind and never
/// fails. Present input is split on every literal occurrence of
/// `options.delimiter`; each element is trimmed and, with `parse_number`,
/// converted to a number. The first element that fails aborts the call.
pub fn parse_array(
    input: Option<&str>,
    options: &ArrayOptions,
) -> Result<ArrayValues, ParseError> {
    if options.parse_number {
        parse_number_array(input, &options.delimiter).map(ArrayValues::Numbers)
    } else {
        parse_string_array(input, &options.delimiter).map(ArrayValues::Strings)
    }
}

/// Parse a delimited list of trimmed strings.
pub fn parse_string_array(
    input: Option<&str>,
    delimiter: &str,
) -> Result<Vec<String>, ParseError> {
    split_elements(input, delimiter)
        .map(|element| parse_string(Some(element)))
        .collect()
}

/// Parse a delimited list of numbers.
pub fn parse_number_array(input: Option<&str>, delimiter: &str) -> Result<Vec<f64>, ParseError> {
    split_elements(input, delimiter)
        .map(|element| parse_number(Some(element)))
        .collect()
}

/// Split raw input into element slices.
///
/// An empty delimiter splits between every character, so empty input yields no elements.
fn split_elements<'a>(
    input: Option<&'a str>,
    delimiter: &'a str,
) -> Box<dyn Iterator<Item = &'a str> + 'a> {
    match input {
        None => Box::new(std::iter::empty()),
        Some(raw) if delimiter.is_empty() => {
            Box::new(
                raw.char_indices()
                    .map(move |(i, c)| &raw[i..i + c.len_utf8()]),
            )
        }
        Some(raw) => Box::new(raw.split(delimiter)),
    }
}
