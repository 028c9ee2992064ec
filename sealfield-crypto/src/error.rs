//! Error types for the encryption layer.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur in cryptographic operations.
#[derive(Debug, Error)]
pub enum CryptoError {
    /// Key derivation failed.
    #[error("key derivation failed: {0}")]
    KeyDerivation(String),

    /// Encryption failed.
    #[error("encryption failed: {0}")]
    Encryption(String),

    /// The envelope's integrity tag did not verify (wrong key or tampered data).
    #[error("authentication failed: wrong key or tampered envelope")]
    AuthenticationFailure,

    /// The envelope is not in the expected format at all.
    #[error("envelope decode failed: {0}")]
    DecodeFailure(String),

    /// Invalid key length.
    #[error("invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// The key could not be loaded from configuration.
    #[error("key configuration error: {0}")]
    KeyConfig(String),
}

impl CryptoError {
    /// True for failures that mean a stored envelope cannot be trusted.
    pub fn is_integrity_failure(&self) -> bool {
        matches!(
            self,
            CryptoError::AuthenticationFailure | CryptoError::DecodeFailure(_)
        )
    }
}
