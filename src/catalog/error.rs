//! Catalog error types

use thiserror::Error;

/// Errors raised while validating or interpreting catalog records
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Two records in the same collection share an id
    #[error("Duplicate id '{id}' in {collection}")]
    DuplicateId {
        collection: &'static str,
        id: String,
    },

    /// A label did not match any variant of the named enum
    #[error("Unknown {kind}: {value}")]
    UnknownVariant { kind: &'static str, value: String },

    /// A record carries a date that does not parse
    #[error("Invalid date '{value}' on record {id}")]
    InvalidDate { id: String, value: String },
}

/// Result type alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::DuplicateId {
            collection: "events",
            id: "1".to_string(),
        };
        assert_eq!(err.to_string(), "Duplicate id '1' in events");

        let err = CatalogError::UnknownVariant {
            kind: "event status",
            value: "POSTPONED".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown event status: POSTPONED");
    }
}
