//! Measure Units - Unit registry and conversion engine
//!
//! Converts a value between two units of the same category through the
//! category's base unit. The registry is a process-wide immutable table.
//!
//! Categories:
//! - Length (mm, cm, m, km, in, ft, yd, mi), base: millimeters
//! - Weight (g, kg, oz, lb), base: grams
//! - Volume (ml, l, fl oz, cup, pt, qt, gal), base: milliliters

mod category;
mod unit;
mod convert;
mod units;

pub use category::Category;
pub use unit::Unit;
pub use units::{UNITS, UnitRegistry, RegistryBuilder, RegistryError};
pub use convert::{
    Conversion, convert, convert_with, convert_detailed, convert_detailed_with, compatible,
};

/// All categories in display order
pub fn list_categories() -> Vec<Category> {
    UNITS.categories()
}

/// Units of a category, in display order
pub fn list_units(category: &str) -> Result<&'static [Unit], measure_core::MeasureError> {
    UNITS.units(category)
}

/// Conversion factor of a unit relative to its category's base unit
pub fn factor_of(category: &str, unit: &str) -> Result<f64, measure_core::MeasureError> {
    UNITS.factor_of(category, unit)
}
