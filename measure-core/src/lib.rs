//! Measure Core - Fundamental types
//!
//! This crate provides the core types used throughout Measure:
//! - `RawValue`: a value as supplied by the caller (text or number)
//! - `MeasureError`: structured conversion errors with codes and suggestions

mod value;
mod error;

pub use value::{RawValue, ValueError, parse_value};
pub use error::{MeasureError, ErrorKind, codes};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{RawValue, MeasureError, ErrorKind};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    mod value_tests {
        use super::*;

        #[test]
        fn test_parse_integer() {
            assert_eq!(parse_value("1000"), Ok(1000.0));
        }

        #[test]
        fn test_parse_decimal_with_whitespace() {
            assert_eq!(parse_value("  3.5 "), Ok(3.5));
        }

        #[test]
        fn test_parse_negative_and_scientific() {
            assert_eq!(parse_value("-2"), Ok(-2.0));
            assert_eq!(parse_value("1.5e2"), Ok(150.0));
        }

        #[test]
        fn test_parse_empty() {
            assert_eq!(parse_value(""), Err(ValueError::Empty));
            assert_eq!(parse_value("   "), Err(ValueError::Empty));
        }

        #[test]
        fn test_parse_non_numeric() {
            assert!(matches!(parse_value("abc"), Err(ValueError::NotANumber(_))));
            assert!(matches!(parse_value("12abc"), Err(ValueError::NotANumber(_))));
        }

        #[test]
        fn test_parse_rejects_nan_and_infinity() {
            assert!(matches!(parse_value("NaN"), Err(ValueError::NotFinite(_))));
            assert!(matches!(parse_value("inf"), Err(ValueError::NotFinite(_))));
            assert!(matches!(parse_value("-infinity"), Err(ValueError::NotFinite(_))));
        }

        #[test]
        fn test_raw_number() {
            assert_eq!(RawValue::from(2.5).parse(), Ok(2.5));
            assert!(RawValue::from(f64::NAN).parse().is_err());
            assert!(RawValue::from(f64::INFINITY).parse().is_err());
        }

        #[test]
        fn test_raw_text() {
            let v: RawValue = "42".into();
            assert_eq!(v.as_text(), Some("42"));
            assert_eq!(v.parse(), Ok(42.0));
        }

        #[test]
        fn test_raw_value_from_json() {
            let n: RawValue = serde_json::from_str("12.5").unwrap();
            assert_eq!(n, RawValue::Number(12.5));
            let t: RawValue = serde_json::from_str("\"7\"").unwrap();
            assert_eq!(t, RawValue::Text("7".to_string()));
        }
    }

    mod error_tests {
        use super::*;

        #[test]
        fn test_error_codes() {
            assert_eq!(MeasureError::invalid_value("x").code(), codes::INVALID_VALUE);
            assert_eq!(MeasureError::missing_selection("source").code(), codes::MISSING_SELECTION);
            assert_eq!(MeasureError::incompatible_units("a", "b").code(), codes::INCOMPATIBLE_UNITS);
            assert_eq!(MeasureError::unknown_unit("length", "x").code(), codes::UNKNOWN_UNIT);
            assert_eq!(MeasureError::unknown_category("time").code(), codes::UNKNOWN_CATEGORY);
        }

        #[test]
        fn test_from_value_error() {
            let err: MeasureError = ValueError::Empty.into();
            assert!(err.is(ErrorKind::InvalidValue));
            assert!(err.message.contains("no value entered"));
        }

        #[test]
        fn test_error_display() {
            let err = MeasureError::incompatible_units("Meters (m)", "Grams (g)");
            let display = format!("{}", err);
            assert!(display.contains("INCOMPATIBLE_UNITS"));
            assert!(display.contains("suggestion"));
        }

        #[test]
        fn test_error_serializes_code() {
            let err = MeasureError::unknown_unit("weight", "Stones (st)");
            let json = serde_json::to_value(&err).unwrap();
            assert_eq!(json["code"], "UNKNOWN_UNIT");
            assert!(json.get("suggestion").is_none());
        }
    }
}
