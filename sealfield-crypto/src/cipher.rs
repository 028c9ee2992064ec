//! Envelope encryption using ChaCha20-Poly1305.
//!
//! Wire format (version 1), base64 encoded for storage:
//!
//! ```text
//! version (1) || nonce (12) || ciphertext || tag (16)
//! ```
//!
//! The version byte is bound as associated data, so it cannot be swapped
//! without failing authentication. Only a structurally broken envelope
//! (bad base64, too short) is a decode failure; any altered byte of a
//! well-formed envelope, version included, is an authentication failure.

use crate::error::{CryptoError, CryptoResult};
use crate::key::EncryptionKey;
use base64::{Engine, engine::general_purpose::STANDARD};
use chacha20poly1305::{
    ChaCha20Poly1305, Nonce,
    aead::{Aead, KeyInit, Payload},
};
use rand::RngCore;

/// Current (and only) envelope format version.
pub const ENVELOPE_VERSION: u8 = 1;

/// Size of nonce in bytes (96 bits for ChaCha20-Poly1305).
pub const NONCE_SIZE: usize = 12;

/// Size of authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

const HEADER_SIZE: usize = 1 + NONCE_SIZE;

/// A sealed payload with the metadata needed to open it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SealedData {
    /// Envelope format version.
    pub version: u8,
    /// The nonce used for encryption (fresh per call).
    pub nonce: [u8; NONCE_SIZE],
    /// The encrypted payload (includes auth tag).
    pub ciphertext: Vec<u8>,
}

impl SealedData {
    /// Returns the total encoded size in bytes.
    pub fn len(&self) -> usize {
        HEADER_SIZE + self.ciphertext.len()
    }

    /// Returns true if the ciphertext is empty.
    pub fn is_empty(&self) -> bool {
        self.ciphertext.is_empty()
    }

    /// Serializes to the raw envelope bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.len());
        bytes.push(self.version);
        bytes.extend_from_slice(&self.nonce);
        bytes.extend_from_slice(&self.ciphertext);
        bytes
    }

    /// Parses raw envelope bytes.
    ///
    /// The version byte is not checked here; [`decrypt`] authenticates it.
    pub fn from_bytes(bytes: &[u8]) -> CryptoResult<Self> {
        let Some((&version, rest)) = bytes.split_first() else {
            return Err(CryptoError::DecodeFailure("empty envelope".to_string()));
        };

        if rest.len() < NONCE_SIZE + TAG_SIZE {
            return Err(CryptoError::DecodeFailure(format!(
                "envelope truncated: {} bytes",
                bytes.len()
            )));
        }

        let mut nonce = [0u8; NONCE_SIZE];
        nonce.copy_from_slice(&rest[..NONCE_SIZE]);

        Ok(Self {
            version,
            nonce,
            ciphertext: rest[NONCE_SIZE..].to_vec(),
        })
    }

    /// Encodes to base64 for storage.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.to_bytes())
    }

    /// Decodes from base64.
    pub fn from_base64(encoded: &str) -> CryptoResult<Self> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| CryptoError::DecodeFailure(format!("invalid base64: {e}")))?;
        Self::from_bytes(&bytes)
    }
}

/// Seals plaintext under `key` with a fresh random nonce.
pub fn encrypt(key: &EncryptionKey, plaintext: &[u8]) -> CryptoResult<SealedData> {
    let cipher = ChaCha20Poly1305::new(key.as_bytes().into());

    let mut nonce_bytes = [0u8; NONCE_SIZE];
    rand::rngs::OsRng.fill_bytes(&mut nonce_bytes);
    let nonce = Nonce::from_slice(&nonce_bytes);

    let aad = [ENVELOPE_VERSION];
    let ciphertext = cipher
        .encrypt(nonce, Payload { msg: plaintext, aad: &aad })
        .map_err(|e| CryptoError::Encryption(e.to_string()))?;

    Ok(SealedData {
        version: ENVELOPE_VERSION,
        nonce: nonce_bytes,
        ciphertext,
    })
}

/// Opens a sealed payload. Fails with [`CryptoError::AuthenticationFailure`]
/// if the tag does not verify under the stored version byte. Every envelope
/// this crate writes is version 1, so an envelope carrying any other version
/// was altered and fails the same way.
pub fn decrypt(key: &EncryptionKey, sealed: &SealedData) -> CryptoResult<Vec<u8>> {
    let cipher = ChaCha20Poly1305::new(key.as_bytes().into());
    let nonce = Nonce::from_slice(&sealed.nonce);
    let aad = [sealed.version];

    cipher
        .decrypt(
            nonce,
            Payload {
                msg: &sealed.ciphertext,
                aad: &aad,
            },
        )
        .map_err(|_| CryptoError::AuthenticationFailure)
}

/// Seals plaintext and returns the base64 envelope.
pub fn encrypt_to_base64(key: &EncryptionKey, plaintext: &[u8]) -> CryptoResult<String> {
    Ok(encrypt(key, plaintext)?.to_base64())
}

/// Opens a base64 envelope.
pub fn decrypt_from_base64(key: &EncryptionKey, encoded: &str) -> CryptoResult<Vec<u8>> {
    let sealed = SealedData::from_base64(encoded)?;
    decrypt(key, &sealed)
}
