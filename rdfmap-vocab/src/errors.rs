//! Error type compact IRIs
//!
//! These compact IRI strings identify error types when attribute errors are
//! surfaced to API callers. They follow the pattern `err:category/ErrorName`.

// =============================================================================
// Attribute Errors (attr)
// =============================================================================

/// A field name could not be resolved to a field descriptor
pub const FIELD_NOT_PRESENT: &str = "err:attr/FieldNotPresent";

/// A field descriptor declaration is invalid
pub const INVALID_FIELD: &str = "err:attr/InvalidField";

// =============================================================================
// Collaborator Errors
// =============================================================================

/// The statement store rejected a read or write
pub const STORAGE: &str = "err:store/Storage";

/// Configuration could not be parsed
pub const INVALID_CONFIG: &str = "err:config/InvalidConfig";
