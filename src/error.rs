//! Error types for item generation and locale table construction.
//!
//! Only configuration-level mistakes surface as errors. Problems met while
//! matching a single answer (parse failures, unit edge cases, unknown
//! locales) are recovered inside the validator and never reach the caller.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrillError {
    /// A numeric range whose lower bound is not strictly below its upper bound.
    #[error("invalid range: min ({min}) must be less than max ({max})")]
    InvalidRange { min: i64, max: i64 },

    /// A category that needs at least one subtype was given none.
    #[error("no subtypes requested for {category} items")]
    EmptySubtypes { category: &'static str },

    /// Static locale data failed its consistency check.
    #[error("locale table for '{locale}' is inconsistent: {detail}")]
    InconsistentLocaleTable { locale: &'static str, detail: String },
}

pub type Result<T> = std::result::Result<T, DrillError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message() {
        let err = DrillError::InvalidRange { min: 10, max: 3 };
        assert_eq!(
            err.to_string(),
            "invalid range: min (10) must be less than max (3)"
        );
    }

    #[test]
    fn test_empty_subtypes_message() {
        let err = DrillError::EmptySubtypes {
            category: "direction",
        };
        assert!(err.to_string().contains("direction"));
    }

    #[test]
    fn test_inconsistent_table_message() {
        let err = DrillError::InconsistentLocaleTable {
            locale: "fr-FR",
            detail: "cardinal list has 7 words, expected 8".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("fr-FR"));
        assert!(msg.contains("expected 8"));
    }
}
