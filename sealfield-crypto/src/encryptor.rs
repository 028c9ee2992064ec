//! The encryption seam used by the record serializer.
//!
//! The serializer depends on `Arc<dyn DataEncryptor>` and never sees raw
//! keys. [`Envelope`] is the implementation backed by a single
//! [`EncryptionKey`] that is fixed for the envelope's lifetime.

use crate::cipher;
use crate::config::KeyConfig;
use crate::error::CryptoResult;
use crate::key::EncryptionKey;

/// Trait for sealing/opening opaque byte payloads as text envelopes.
///
/// Implementations own the key material. Callers never see raw keys.
pub trait DataEncryptor: Send + Sync {
    /// Encrypt `data`, returning a self-describing text envelope.
    /// Each call uses a fresh nonce, so equal inputs give different envelopes.
    fn encrypt_bytes(&self, data: &[u8]) -> CryptoResult<String>;

    /// Decrypt an envelope previously produced by `encrypt_bytes`.
    fn decrypt_bytes(&self, envelope: &str) -> CryptoResult<Vec<u8>>;
}

/// ChaCha20-Poly1305 envelope holding one immutable key.
#[derive(Debug)]
pub struct Envelope {
    key: EncryptionKey,
}

impl Envelope {
    /// Creates an envelope that owns `key` for its whole lifetime.
    pub fn new(key: EncryptionKey) -> Self {
        Self { key }
    }

    /// Loads the key described by `config` from the process environment.
    pub fn from_config(config: &KeyConfig) -> CryptoResult<Self> {
        Ok(Self::new(config.load()?))
    }

    pub fn encrypt(&self, plaintext: &[u8]) -> CryptoResult<String> {
        cipher::encrypt_to_base64(&self.key, plaintext)
    }

    pub fn decrypt(&self, envelope: &str) -> CryptoResult<Vec<u8>> {
        cipher::decrypt_from_base64(&self.key, envelope)
    }
}

impl DataEncryptor for Envelope {
    fn encrypt_bytes(&self, data: &[u8]) -> CryptoResult<String> {
        self.encrypt(data)
    }

    fn decrypt_bytes(&self, envelope: &str) -> CryptoResult<Vec<u8>> {
        self.decrypt(envelope)
    }
}
