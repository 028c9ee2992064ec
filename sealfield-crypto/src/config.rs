//! Key provider configuration.
//!
//! The key is read once at process start. A raw key in `ENCRYPTION_KEY`
//! wins; otherwise a passphrase and salt are run through Argon2id.

use crate::error::{CryptoError, CryptoResult};
use crate::key::{EncryptionKey, KdfParams, Salt, derive_key};
use serde::{Deserialize, Serialize};

/// Names the environment variables the envelope key is loaded from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    /// Variable holding base64 of the 32 raw key bytes.
    pub key_var: String,

    /// Variable holding a passphrase to derive the key from.
    pub passphrase_var: String,

    /// Variable holding base64 of the 16-byte derivation salt.
    pub salt_var: String,

    /// Argon2id cost parameters for passphrase derivation.
    pub kdf: KdfParams,
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            key_var: "ENCRYPTION_KEY".to_string(),
            passphrase_var: "ENCRYPTION_PASSPHRASE".to_string(),
            salt_var: "ENCRYPTION_SALT".to_string(),
            kdf: KdfParams::default(),
        }
    }
}

impl KeyConfig {
    /// Loads the key from the process environment.
    pub fn load(&self) -> CryptoResult<EncryptionKey> {
        self.load_from(|name| std::env::var(name).ok())
    }

    /// Loads the key using `lookup` to resolve variable names.
    pub fn load_from<F>(&self, lookup: F) -> CryptoResult<EncryptionKey>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(raw) = present(&self.key_var) {
            return EncryptionKey::from_base64(&raw).map_err(|e| match e {
                CryptoError::InvalidKeyLength { actual, .. } => CryptoError::KeyConfig(format!(
                    "{} must decode to {} bytes, got {actual}",
                    self.key_var,
                    crate::key::KEY_SIZE
                )),
                other => other,
            });
        }

        match (present(&self.passphrase_var), present(&self.salt_var)) {
            (Some(passphrase), Some(salt)) => {
                let salt = Salt::from_base64(&salt)?;
                derive_key(&passphrase, &salt, &self.kdf)
            }
            (Some(_), None) => Err(CryptoError::KeyConfig(format!(
                "{} is set but {} is missing",
                self.passphrase_var, self.salt_var
            ))),
            _ => Err(CryptoError::KeyConfig(format!(
                "{} is not set",
                self.key_var
            ))),
        }
    }
}
