//! Error types for manifests and the field codec.

use sealfield_types::FieldType;
use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by manifest registration/lookup and strict field coding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// No manifest is registered for this entity kind.
    #[error("unknown entity kind: {0}")]
    UnknownEntityKind(String),

    /// A manifest for this entity kind is already registered.
    #[error("entity kind already registered: {0}")]
    DuplicateEntityKind(String),

    /// The field specs for an entity kind are inconsistent.
    #[error("invalid manifest for {entity_kind}: {reason}")]
    InvalidManifest { entity_kind: String, reason: String },

    /// A field value does not match its declared type.
    #[error("malformed value for field {field} (expected {expected}): {reason}")]
    MalformedFieldValue {
        field: String,
        expected: FieldType,
        reason: String,
    },
}
