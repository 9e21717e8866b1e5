//! Error types for rdfmap-attribute

use crate::field::FieldError;
use rdfmap_vocab::errors;
use thiserror::Error;

/// Result type alias using our error
pub type Result<T> = std::result::Result<T, AttributeError>;

/// Attribute error type
///
/// `FieldNotPresent` is the only failure the codec itself defines. The other
/// variants come from collaborators (statement stores, configuration).
#[derive(Error, Debug)]
pub enum AttributeError {
    /// No field descriptor is declared under the given name
    #[error("Field not present: {0}")]
    FieldNotPresent(String),

    /// Invalid field declaration
    #[error("Invalid field: {0}")]
    Field(#[from] FieldError),

    /// Statement store failure
    #[error("Storage error: {0}")]
    Storage(String),

    /// Invalid configuration
    #[error("Config error: {0}")]
    Config(String),

    /// JSON parsing error (serde_json)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AttributeError {
    /// Create a field-not-present error
    pub fn field_not_present(name: impl Into<String>) -> Self {
        AttributeError::FieldNotPresent(name.into())
    }

    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        AttributeError::Storage(msg.into())
    }

    /// Create a config error
    pub fn config(msg: impl Into<String>) -> Self {
        AttributeError::Config(msg.into())
    }

    /// Compact error type IRI for API responses
    pub fn error_type(&self) -> &'static str {
        match self {
            AttributeError::FieldNotPresent(_) => errors::FIELD_NOT_PRESENT,
            AttributeError::Field(_) => errors::INVALID_FIELD,
            AttributeError::Storage(_) => errors::STORAGE,
            AttributeError::Config(_) | AttributeError::Json(_) => errors::INVALID_CONFIG,
        }
    }

    /// Check whether this is a field-not-present error
    pub fn is_field_not_present(&self) -> bool {
        matches!(self, AttributeError::FieldNotPresent(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_type_mapping() {
        let err = AttributeError::field_not_present("title");
        assert_eq!(err.to_string(), "Field not present: title");
        assert_eq!(err.error_type(), "err:attr/FieldNotPresent");
        assert!(err.is_field_not_present());

        let err = AttributeError::storage("disk full");
        assert_eq!(err.error_type(), errors::STORAGE);
        assert!(!err.is_field_not_present());
    }
}
