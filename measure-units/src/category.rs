//! Measurement categories
//!
//! Units are only convertible within their own category. Each category
//! has an implicit base unit whose factor is 1.

use std::fmt;
use serde::{Serialize, Deserialize};

/// A disjoint group of mutually convertible units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Base unit: millimeters
    Length,
    /// Base unit: grams
    Weight,
    /// Base unit: milliliters
    Volume,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Category; 3] = [Category::Length, Category::Weight, Category::Volume];

    /// Stable identifier ("length", "weight", "volume")
    pub fn id(&self) -> &'static str {
        match self {
            Category::Length => "length",
            Category::Weight => "weight",
            Category::Volume => "volume",
        }
    }

    /// Identifier with the first letter capitalized, used for menu group labels
    pub fn label(&self) -> &'static str {
        match self {
            Category::Length => "Length",
            Category::Weight => "Weight",
            Category::Volume => "Volume",
        }
    }

    /// Look up a category by identifier
    pub fn from_id(id: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.id() == id)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
