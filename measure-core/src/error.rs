//! Structured errors for conversion callers
//!
//! Every failure the engine can report is a value carrying a
//! machine-readable code, a human-readable message and an optional
//! suggestion. The presentation layer decides how to surface it.

use crate::ValueError;
use serde::{Deserialize, Serialize};

/// Standard error codes (machine-readable)
pub mod codes {
    pub const INVALID_VALUE: &str = "INVALID_VALUE";
    pub const MISSING_SELECTION: &str = "MISSING_SELECTION";
    pub const INCOMPATIBLE_UNITS: &str = "INCOMPATIBLE_UNITS";
    pub const UNKNOWN_UNIT: &str = "UNKNOWN_UNIT";
    pub const UNKNOWN_CATEGORY: &str = "UNKNOWN_CATEGORY";
}

/// Failure taxonomy of a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    /// The supplied value is not a finite real number
    InvalidValue,
    /// One or both unit selections are absent
    MissingSelection,
    /// The selected units do not share a category
    IncompatibleUnits,
    /// Registry lookup of a unit failed
    UnknownUnit,
    /// Registry lookup of a category failed
    UnknownCategory,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidValue => codes::INVALID_VALUE,
            ErrorKind::MissingSelection => codes::MISSING_SELECTION,
            ErrorKind::IncompatibleUnits => codes::INCOMPATIBLE_UNITS,
            ErrorKind::UnknownUnit => codes::UNKNOWN_UNIT,
            ErrorKind::UnknownCategory => codes::UNKNOWN_CATEGORY,
        }
    }
}

/// Structured conversion error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureError {
    /// Machine-readable error code
    #[serde(rename = "code")]
    pub kind: ErrorKind,

    /// Human-readable error message
    pub message: String,

    /// Suggestion for fixing the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl MeasureError {
    /// Create a new error
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            suggestion: None,
        }
    }

    /// Builder: add suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    // ========== Common Error Constructors ==========

    pub fn invalid_value(details: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidValue, format!("Invalid value: {}", details.into()))
            .with_suggestion("Enter a finite number such as 12 or 3.5")
    }

    pub fn missing_selection(which: &str) -> Self {
        Self::new(ErrorKind::MissingSelection, format!("No {} unit selected", which))
            .with_suggestion("Select both a source and a target unit")
    }

    pub fn incompatible_units(from: &str, to: &str) -> Self {
        Self::new(
            ErrorKind::IncompatibleUnits,
            format!("Cannot convert {} to {}: incompatible unit types", from, to),
        )
        .with_suggestion("Pick two units from the same category")
    }

    pub fn unknown_unit(category: &str, unit: &str) -> Self {
        Self::new(
            ErrorKind::UnknownUnit,
            format!("Unknown unit '{}' in category '{}'", unit, category),
        )
    }

    pub fn unknown_category(category: &str) -> Self {
        Self::new(ErrorKind::UnknownCategory, format!("Unknown category: {}", category))
            .with_suggestion("Use one of: length, weight, volume")
    }
}

impl std::fmt::Display for MeasureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code(), self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " (suggestion: {})", suggestion)?;
        }
        Ok(())
    }
}

impl std::error::Error for MeasureError {}

impl From<ValueError> for MeasureError {
    fn from(err: ValueError) -> Self {
        Self::invalid_value(err.to_string())
    }
}
