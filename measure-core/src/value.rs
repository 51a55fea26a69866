//! Raw input values
//!
//! The presentation layer hands values over either as the text the user
//! typed or as a number it already holds. Both are parsed into a finite
//! `f64` before any unit lookup happens.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for value parsing
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValueError {
    #[error("no value entered")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("'{0}' is not a finite number")]
    NotFinite(String),
}

/// Value as supplied by a caller, before parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Parse into a finite real number
    pub fn parse(&self) -> Result<f64, ValueError> {
        match self {
            RawValue::Number(n) => finite(*n, || n.to_string()),
            RawValue::Text(s) => parse_value(s),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Parse user-entered text into a finite real number
///
/// Surrounding whitespace is ignored. Empty input, non-numeric text and
/// the textual spellings of NaN or infinity are all rejected.
pub fn parse_value(s: &str) -> Result<f64, ValueError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ValueError::Empty);
    }
    let n: f64 = s.parse()
        .map_err(|_| ValueError::NotANumber(s.to_string()))?;
    finite(n, || s.to_string())
}

fn finite(n: f64, describe: impl FnOnce() -> String) -> Result<f64, ValueError> {
    if n.is_finite() {
        Ok(n)
    } else {
        Err(ValueError::NotFinite(describe()))
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        RawValue::Number(n)
    }
}

impl From<i64> for RawValue {
    fn from(n: i64) -> Self {
        RawValue::Number(n as f64)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        RawValue::Text(s)
    }
}
