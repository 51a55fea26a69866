//! Measure Widget - Headless converter form
//!
//! The presentation side of the converter without any rendering:
//! - `ConverterForm`: typed value, "From"/"To" selections, last result
//! - `Notice`: message to show when a conversion fails
//! - `unit_groups`: select menu contents, grouped by category
//! - `format_result`: two-decimal result text

mod display;
mod form;

pub use display::{
    Notice, UnitGroup, unit_groups, format_result, unit_caption,
    EMPTY_RESULT, UNIT_PLACEHOLDER, DISPLAY_DECIMALS,
};
pub use form::ConverterForm;
