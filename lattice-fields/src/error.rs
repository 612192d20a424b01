//! Error types for the field framework.

use thiserror::Error;

/// Result type for field-framework operations.
pub type FieldResult<T> = Result<T, FieldError>;

/// Errors that can occur in the field framework.
#[derive(Debug, Error)]
pub enum FieldError {
    /// No field type with this name is registered.
    #[error("unknown field type: {0}")]
    UnknownType(String),

    /// A field type was registered twice under the same name.
    #[error("field type already registered: {0}")]
    AlreadyRegistered(String),

    /// A field type declared no compatible host modules.
    #[error("field type '{0}' declares no compatible host modules")]
    EmptyCompatibility(String),

    /// A submitted value failed type-specific validation.
    #[error("validation failed for field '{field}': {message}")]
    Validation { field: String, message: String },
}
