//! Unit representation with conversion factors

use std::fmt;
use serde::{Serialize, Deserialize};
use crate::Category;

/// A named unit and its factor relative to its category's base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    /// Display name, also the unit identifier (e.g., "Meters (m)")
    pub name: String,
    /// Category the unit belongs to
    pub category: Category,
    /// How many base units one of this unit equals (value_base = value * factor)
    pub factor: f64,
}

impl Unit {
    pub fn new(name: &str, category: Category, factor: f64) -> Self {
        Unit {
            name: name.to_string(),
            category,
            factor,
        }
    }

    /// Check if this is the base unit of its category
    pub fn is_base(&self) -> bool {
        self.factor == 1.0
    }

    /// Check if two units share a category (can be converted)
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.category == other.category
    }

    /// Convert a value from this unit to the category's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }

    /// Convert a value from the category's base unit to this unit
    pub fn from_base(&self, value_base: f64) -> f64 {
        value_base / self.factor
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
