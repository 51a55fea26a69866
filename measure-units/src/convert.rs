//! Conversion engine
//!
//! Stateless: every call parses the value, resolves both units' categories
//! by scanning the registry and scales through the category's base unit.

use serde::{Serialize, Deserialize};
use measure_core::{MeasureError, RawValue};
use crate::Category;
use crate::units::{UnitRegistry, UNITS};

/// Record of a successful conversion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversion {
    pub value: f64,
    pub from: String,
    pub to: String,
    pub category: Category,
    pub result: f64,
}

/// Convert `value` from one unit to another using the standard registry
///
/// ```text
/// convert(1000.0, Some("Millimeters (mm)"), Some("Meters (m)")) → 1.0
/// convert(1.0, Some("Kilograms (kg)"), Some("Grams (g)"))       → 1000.0
/// convert(10.0, Some("Meters (m)"), Some("Grams (g)"))          → INCOMPATIBLE_UNITS
/// ```
pub fn convert(
    value: impl Into<RawValue>,
    from_unit: Option<&str>,
    to_unit: Option<&str>,
) -> Result<f64, MeasureError> {
    convert_with(&UNITS, value, from_unit, to_unit)
}

/// Convert against an explicit registry
pub fn convert_with(
    registry: &UnitRegistry,
    value: impl Into<RawValue>,
    from_unit: Option<&str>,
    to_unit: Option<&str>,
) -> Result<f64, MeasureError> {
    convert_detailed_with(registry, value, from_unit, to_unit).map(|c| c.result)
}

/// Convert using the standard registry, returning the full record
pub fn convert_detailed(
    value: impl Into<RawValue>,
    from_unit: Option<&str>,
    to_unit: Option<&str>,
) -> Result<Conversion, MeasureError> {
    convert_detailed_with(&UNITS, value, from_unit, to_unit)
}

pub fn convert_detailed_with(
    registry: &UnitRegistry,
    value: impl Into<RawValue>,
    from_unit: Option<&str>,
    to_unit: Option<&str>,
) -> Result<Conversion, MeasureError> {
    // The value is validated before any registry lookup.
    let raw: RawValue = value.into();
    let value = raw.parse()?;

    let from = selected(from_unit).ok_or_else(|| MeasureError::missing_selection("source"))?;
    let to = selected(to_unit).ok_or_else(|| MeasureError::missing_selection("target"))?;

    let (source, target) = match (registry.get(from), registry.get(to)) {
        (Some(a), Some(b)) if a.is_compatible(b) => (a, b),
        _ => return Err(MeasureError::incompatible_units(from, to)),
    };
    let category = source.category;

    let result = if from == to {
        value
    } else {
        target.from_base(source.to_base(value))
    };

    Ok(Conversion {
        value,
        from: from.to_string(),
        to: to.to_string(),
        category,
        result,
    })
}

/// Whether two units can be converted into each other
pub fn compatible(a: &str, b: &str) -> bool {
    match (UNITS.category_of(a), UNITS.category_of(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

// Blank selections count as unset; anything else is looked up verbatim.
fn selected(unit: Option<&str>) -> Option<&str> {
    unit.filter(|u| !u.trim().is_empty())
}
