//! Error types for the storage layer.
//!
//! Every variant is a hard failure. Soft failures (a single field that does
//! not match its declared type on a tolerant read) are never errors; they
//! come back as data in [`crate::Restored::coerced_fields`].

use sealfield_crypto::CryptoError;
use sealfield_model::{FieldType, ModelError};
use thiserror::Error;

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Errors that can occur while converting records to and from storage documents.
#[derive(Debug, Error)]
pub enum StorageError {
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

    /// The record carries a field its entity kind does not declare.
    #[error("field {field} is not declared for entity kind {entity_kind}")]
    UndeclaredField { entity_kind: String, field: String },

    /// The encrypted payload failed authentication (wrong key or tampering).
    #[error("authentication failed: wrong key or tampered envelope")]
    AuthenticationFailure,

    /// The envelope or its decrypted payload is not structurally valid.
    #[error("decode failed: {0}")]
    DecodeFailure(String),

    /// Encryption itself failed.
    #[error("encryption error: {0}")]
    Encryption(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StorageError {
    /// True for every returned error.
    ///
    /// A soft failure (one unreadable field on a tolerant read) is reported
    /// through [`crate::Restored::coerced_fields`] and never reaches this type,
    /// so anything a caller holds as a `StorageError` fails the whole call.
    pub fn is_hard_failure(&self) -> bool {
        true
    }

    /// True if the stored record cannot be trusted (authentication or decode failure).
    pub fn is_integrity_failure(&self) -> bool {
        matches!(
            self,
            StorageError::AuthenticationFailure | StorageError::DecodeFailure(_)
        )
    }

    /// True if the error points at configuration rather than data.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            StorageError::UnknownEntityKind(_)
                | StorageError::DuplicateEntityKind(_)
                | StorageError::InvalidManifest { .. }
        )
    }
}

impl From<ModelError> for StorageError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::UnknownEntityKind(kind) => StorageError::UnknownEntityKind(kind),
            ModelError::DuplicateEntityKind(kind) => StorageError::DuplicateEntityKind(kind),
            ModelError::InvalidManifest {
                entity_kind,
                reason,
            } => StorageError::InvalidManifest {
                entity_kind,
                reason,
            },
            ModelError::MalformedFieldValue {
                field,
                expected,
                reason,
            } => StorageError::MalformedFieldValue {
                field,
                expected,
                reason,
            },
        }
    }
}

impl From<CryptoError> for StorageError {
    fn from(err: CryptoError) -> Self {
        match err {
            CryptoError::AuthenticationFailure => StorageError::AuthenticationFailure,
            CryptoError::DecodeFailure(reason) => StorageError::DecodeFailure(reason),
            other => StorageError::Encryption(other.to_string()),
        }
    }
}
