//! Unit definitions - the length, weight and volume tables

use std::sync::LazyLock;
use thiserror::Error;
use measure_core::MeasureError;
use crate::{Unit, Category};

/// Global unit registry
pub static UNITS: LazyLock<UnitRegistry> = LazyLock::new(UnitRegistry::standard);

/// Violations of the registry construction invariants
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    #[error("unit '{unit}' has factor {factor}; factors must be positive and finite")]
    InvalidFactor { unit: String, factor: f64 },

    #[error("unit '{0}' is registered more than once")]
    DuplicateUnit(String),

    #[error("category '{0}' is registered more than once")]
    DuplicateCategory(Category),
}

/// Immutable registry of categories and their units, in display order
#[derive(Debug, Clone)]
pub struct UnitRegistry {
    groups: Vec<(Category, Vec<Unit>)>,
}

impl UnitRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The standard length, weight and volume table
    pub fn standard() -> Self {
        Self::builder()
            .category(Category::Length, &[
                ("Millimeters (mm)", 1.0),
                ("Centimeters (cm)", 10.0),
                ("Meters (m)", 1000.0),
                ("Kilometers (km)", 1_000_000.0),
                ("Inches (in)", 25.4),
                ("Feet (ft)", 304.8),
                ("Yards (yd)", 914.4),
                ("Miles (mi)", 1_609_344.0),
            ])
            .category(Category::Weight, &[
                ("Grams (g)", 1.0),
                ("Kilograms (kg)", 1000.0),
                ("Ounces (oz)", 28.3495),
                ("Pounds (lb)", 453.592),
            ])
            .category(Category::Volume, &[
                ("Milliliters (ml)", 1.0),
                ("Liters (l)", 1000.0),
                ("Fluid Ounces (fl oz)", 29.5735),
                ("Cups (cup)", 240.0),
                ("Pints (pt)", 473.176),
                ("Quarts (qt)", 946.353),
                ("Gallons (gal)", 3785.41),
            ])
            .build()
            .expect("standard unit table violates registry invariants")
    }

    /// All categories in registration order
    pub fn categories(&self) -> Vec<Category> {
        self.groups.iter().map(|(c, _)| *c).collect()
    }

    /// Units of a category by identifier, in display order
    pub fn units(&self, category: &str) -> Result<&[Unit], MeasureError> {
        Category::from_id(category)
            .and_then(|c| self.group(c))
            .ok_or_else(|| MeasureError::unknown_category(category))
    }

    /// Units of a category, empty if the registry does not hold it
    pub fn units_in(&self, category: Category) -> &[Unit] {
        self.group(category).unwrap_or(&[])
    }

    /// Conversion factor of a unit registered under a category
    pub fn factor_of(&self, category: &str, unit: &str) -> Result<f64, MeasureError> {
        self.units(category)?
            .iter()
            .find(|u| u.name == unit)
            .map(|u| u.factor)
            .ok_or_else(|| MeasureError::unknown_unit(category, unit))
    }

    /// Category containing a unit, found by scanning every category
    pub fn category_of(&self, unit: &str) -> Option<Category> {
        self.groups.iter()
            .find(|(_, units)| units.iter().any(|u| u.name == unit))
            .map(|(c, _)| *c)
    }

    /// Get a unit by name
    pub fn get(&self, unit: &str) -> Option<&Unit> {
        self.groups.iter()
            .flat_map(|(_, units)| units.iter())
            .find(|u| u.name == unit)
    }

    /// All unit names, grouped by category in display order
    pub fn names(&self) -> Vec<&str> {
        self.groups.iter()
            .flat_map(|(_, units)| units.iter().map(|u| u.name.as_str()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.groups.iter().map(|(_, units)| units.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn group(&self, category: Category) -> Option<&[Unit]> {
        self.groups.iter()
            .find(|(c, _)| *c == category)
            .map(|(_, units)| units.as_slice())
    }
}

impl Default for UnitRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Collects category tables and checks the invariants on `build`
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    groups: Vec<(Category, Vec<Unit>)>,
}

impl RegistryBuilder {
    pub fn category(mut self, category: Category, units: &[(&str, f64)]) -> Self {
        let units = units.iter()
            .map(|(name, factor)| Unit::new(name, category, *factor))
            .collect();
        self.groups.push((category, units));
        self
    }

    pub fn build(self) -> Result<UnitRegistry, RegistryError> {
        let mut seen_categories = Vec::new();
        let mut seen_units: Vec<&str> = Vec::new();

        for (category, units) in &self.groups {
            if seen_categories.contains(category) {
                return Err(RegistryError::DuplicateCategory(*category));
            }
            seen_categories.push(*category);

            for unit in units {
                if !(unit.factor.is_finite() && unit.factor > 0.0) {
                    return Err(RegistryError::InvalidFactor {
                        unit: unit.name.clone(),
                        factor: unit.factor,
                    });
                }
                // Names must be unique across categories too, since conversion
                // resolves a unit's category from its name alone.
                if seen_units.contains(&unit.name.as_str()) {
                    return Err(RegistryError::DuplicateUnit(unit.name.clone()));
                }
                seen_units.push(&unit.name);
            }
        }

        Ok(UnitRegistry { groups: self.groups })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use measure_core::ErrorKind;

    #[test]
    fn test_category_order() {
        assert_eq!(UNITS.categories(), vec![Category::Length, Category::Weight, Category::Volume]);
    }

    #[test]
    fn test_unit_order() {
        let names: Vec<&str> = UNITS.units("weight").unwrap()
            .iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Grams (g)", "Kilograms (kg)", "Ounces (oz)", "Pounds (lb)"]);
        assert_eq!(UNITS.units("length").unwrap().len(), 8);
        assert_eq!(UNITS.units("volume").unwrap().len(), 7);
        assert_eq!(UNITS.len(), 19);
    }

    #[test]
    fn test_every_category_has_one_base_unit() {
        for category in UNITS.categories() {
            let bases = UNITS.units_in(category).iter().filter(|u| u.is_base()).count();
            assert_eq!(bases, 1, "{} should have exactly one base unit", category);
        }
    }

    #[test]
    fn test_unknown_category() {
        let err = UNITS.units("time").unwrap_err();
        assert!(err.is(ErrorKind::UnknownCategory));
        let err = UNITS.factor_of("time", "Seconds (s)").unwrap_err();
        assert!(err.is(ErrorKind::UnknownCategory));
    }

    #[test]
    fn test_factor_of() {
        assert_eq!(UNITS.factor_of("length", "Feet (ft)"), Ok(304.8));
        assert_eq!(UNITS.factor_of("volume", "Gallons (gal)"), Ok(3785.41));
    }

    #[test]
    fn test_factor_of_wrong_category() {
        let err = UNITS.factor_of("weight", "Meters (m)").unwrap_err();
        assert!(err.is(ErrorKind::UnknownUnit));
    }

    #[test]
    fn test_category_of() {
        assert_eq!(UNITS.category_of("Cups (cup)"), Some(Category::Volume));
        assert_eq!(UNITS.category_of("Pounds (lb)"), Some(Category::Weight));
        assert_eq!(UNITS.category_of("Stones (st)"), None);
        assert_eq!(UNITS.category_of("meters"), None);
    }

    #[test]
    fn test_get_and_names() {
        let unit = UNITS.get("Miles (mi)").unwrap();
        assert_eq!(unit.category, Category::Length);
        assert_eq!(unit.factor, 1_609_344.0);

        let names = UNITS.names();
        assert_eq!(names.first(), Some(&"Millimeters (mm)"));
        assert_eq!(names.last(), Some(&"Gallons (gal)"));
    }

    #[test]
    fn test_builder_rejects_non_positive_factor() {
        let result = UnitRegistry::builder()
            .category(Category::Length, &[("Nothing", 0.0)])
            .build();
        assert!(matches!(result, Err(RegistryError::InvalidFactor { .. })));

        let result = UnitRegistry::builder()
            .category(Category::Weight, &[("Negative", -1.0)])
            .build();
        assert!(matches!(result, Err(RegistryError::InvalidFactor { .. })));
    }

    #[test]
    fn test_builder_rejects_non_finite_factor() {
        let result = UnitRegistry::builder()
            .category(Category::Volume, &[("Forever", f64::INFINITY)])
            .build();
        assert!(matches!(result, Err(RegistryError::InvalidFactor { .. })));

        let result = UnitRegistry::builder()
            .category(Category::Volume, &[("Unknown", f64::NAN)])
            .build();
        assert!(matches!(result, Err(RegistryError::InvalidFactor { .. })));
    }

    #[test]
    fn test_builder_rejects_duplicates() {
        let result = UnitRegistry::builder()
            .category(Category::Length, &[("Meters (m)", 1000.0), ("Meters (m)", 1.0)])
            .build();
        assert_eq!(result.unwrap_err(), RegistryError::DuplicateUnit("Meters (m)".to_string()));

        let result = UnitRegistry::builder()
            .category(Category::Length, &[("Meters (m)", 1.0)])
            .category(Category::Weight, &[("Meters (m)", 1.0)])
            .build();
        assert!(matches!(result, Err(RegistryError::DuplicateUnit(_))));

        let result = UnitRegistry::builder()
            .category(Category::Length, &[("A", 1.0)])
            .category(Category::Length, &[("B", 2.0)])
            .build();
        assert_eq!(result.unwrap_err(), RegistryError::DuplicateCategory(Category::Length));
    }

    #[test]
    fn test_partial_registry() {
        let registry = UnitRegistry::builder()
            .category(Category::Weight, &[("Grams (g)", 1.0)])
            .build()
            .unwrap();
        assert!(registry.units_in(Category::Length).is_empty());
        assert!(registry.units("length").is_err());
        assert!(!registry.is_empty());
    }
}
