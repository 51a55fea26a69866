//! Display helpers: result text, unit caption, notices and select menus

use serde::{Serialize, Deserialize};
use measure_core::{ErrorKind, MeasureError};
use measure_units::{Category, UNITS};

/// Shown in place of a result before any successful conversion
pub const EMPTY_RESULT: &str = "0";

/// Shown under the result when no target unit is selected
pub const UNIT_PLACEHOLDER: &str = "Unit";

/// Decimal places of the displayed result
pub const DISPLAY_DECIMALS: usize = 2;

/// Format a converted value for display with two decimals
pub fn format_result(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.*}", DISPLAY_DECIMALS, v),
        None => EMPTY_RESULT.to_string(),
    }
}

/// Caption under the result: the target unit, or a placeholder
pub fn unit_caption(unit: Option<&str>) -> &str {
    unit.unwrap_or(UNIT_PLACEHOLDER)
}

/// User-facing message for a failed conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&MeasureError> for Notice {
    fn from(err: &MeasureError) -> Self {
        let message = match err.kind {
            ErrorKind::MissingSelection => "Please fill all fields.".to_string(),
            ErrorKind::IncompatibleUnits => "Incompatible unit types selected.".to_string(),
            ErrorKind::InvalidValue => "Please enter a valid number.".to_string(),
            ErrorKind::UnknownUnit | ErrorKind::UnknownCategory => err.message.clone(),
        };
        Notice { kind: err.kind, message }
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// One labelled group of a unit select menu
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitGroup {
    pub category: Category,
    pub label: &'static str,
    pub units: Vec<&'static str>,
}

/// Menu groups shared by the "From" and "To" selects
pub fn unit_groups() -> Vec<UnitGroup> {
    UNITS.categories()
        .into_iter()
        .map(|category| UnitGroup {
            category,
            label: category.label(),
            units: UNITS.units_in(category).iter().map(|u| u.name.as_str()).collect(),
        })
        .collect()
}
