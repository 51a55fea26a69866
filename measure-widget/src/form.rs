//! Converter form state
//!
//! Holds what the user has typed and selected plus the last result.
//! Conversion itself is delegated to the stateless engine.

use serde::{Serialize, Deserialize};
use measure_units::convert;
use crate::display::{format_result, unit_caption, Notice};

/// Input value, unit selections and the last converted value
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConverterForm {
    input: String,
    from_unit: Option<String>,
    to_unit: Option<String>,
    converted: Option<f64>,
}

impl ConverterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn select_from(&mut self, unit: impl Into<String>) {
        self.from_unit = Some(unit.into());
    }

    pub fn select_to(&mut self, unit: impl Into<String>) {
        self.to_unit = Some(unit.into());
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn from_unit(&self) -> Option<&str> {
        self.from_unit.as_deref()
    }

    pub fn to_unit(&self) -> Option<&str> {
        self.to_unit.as_deref()
    }

    pub fn converted(&self) -> Option<f64> {
        self.converted
    }

    /// Run the conversion for the current state
    ///
    /// On success the result is stored. On failure the previous result is
    /// cleared and the notice to show the user is returned.
    ///
    /// The typed value is checked before the selections, so a blank value
    /// with no units selected reports "Please enter a valid number."
    pub fn convert(&mut self) -> Result<f64, Notice> {
        match convert(self.input.as_str(), self.from_unit(), self.to_unit()) {
            Ok(value) => {
                self.converted = Some(value);
                Ok(value)
            }
            Err(err) => {
                self.converted = None;
                Err(Notice::from(&err))
            }
        }
    }

    /// Result text, "0" until a conversion has succeeded
    pub fn result_text(&self) -> String {
        format_result(self.converted)
    }

    /// Caption under the result
    pub fn unit_text(&self) -> &str {
        unit_caption(self.to_unit())
    }
}
