//! Authenticated encryption for the encrypted half of a stored record.
//!
//! - [`key`]: the single long-lived [`EncryptionKey`] and Argon2id derivation
//! - [`cipher`]: the versioned ChaCha20-Poly1305 envelope format
//! - [`encryptor`]: the [`DataEncryptor`] seam and its [`Envelope`] implementation
//! - [`config`]: where the key comes from at process start
//!
//! There is no key rotation. A key is loaded once, injected into an
//! [`Envelope`], and never changes for that envelope's lifetime.

pub mod cipher;
pub mod config;
pub mod encryptor;
pub mod error;
pub mod key;

pub use cipher::{
    ENVELOPE_VERSION, NONCE_SIZE, SealedData, TAG_SIZE, decrypt, decrypt_from_base64, encrypt,
    encrypt_to_base64,
};
pub use config::KeyConfig;
pub use encryptor::{DataEncryptor, Envelope};
pub use error::{CryptoError, CryptoResult};
pub use key::{EncryptionKey, KEY_SIZE, KdfParams, SALT_SIZE, Salt, derive_key, generate_random_key};
