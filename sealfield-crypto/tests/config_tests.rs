use base64::{Engine, engine::general_purpose::{STANDARD, URL_SAFE}};
use sealfield_crypto::{CryptoError, Envelope, KdfParams, KeyConfig};
use std::collections::HashMap;

fn fast_config() -> KeyConfig {
    KeyConfig {
        kdf: KdfParams {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
        },
        ..KeyConfig::default()
    }
}

fn env(pairs: &[(&str, String)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[test]
fn default_variable_names() {
    let config = KeyConfig::default();
    assert_eq!(config.key_var, "ENCRYPTION_KEY");
    assert_eq!(config.passphrase_var, "ENCRYPTION_PASSPHRASE");
    assert_eq!(config.salt_var, "ENCRYPTION_SALT");
}

#[test]
fn loads_raw_key() {
    let vars = env(&[("ENCRYPTION_KEY", URL_SAFE.encode([9u8; 32]))]);
    let key = fast_config().load_from(|name| vars.get(name).cloned()).unwrap();
    assert_eq!(*key.as_bytes(), [9u8; 32]);
}

#[test]
fn raw_key_wins_over_passphrase() {
    let vars = env(&[
        ("ENCRYPTION_KEY", STANDARD.encode([1u8; 32])),
        ("ENCRYPTION_PASSPHRASE", "ignored".to_string()),
        ("ENCRYPTION_SALT", STANDARD.encode([2u8; 16])),
    ]);
    let key = fast_config().load_from(|name| vars.get(name).cloned()).unwrap();
    assert_eq!(*key.as_bytes(), [1u8; 32]);
}

#[test]
fn derives_key_from_passphrase_deterministically() {
    let vars = env(&[
        ("ENCRYPTION_PASSPHRASE", "correct horse battery staple".to_string()),
        ("ENCRYPTION_SALT", STANDARD.encode([2u8; 16])),
    ]);
    let config = fast_config();
    let a = config.load_from(|name| vars.get(name).cloned()).unwrap();
    let b = config.load_from(|name| vars.get(name).cloned()).unwrap();
    assert_eq!(a.as_bytes(), b.as_bytes());
}

#[test]
fn passphrase_without_salt_fails() {
    let vars = env(&[("ENCRYPTION_PASSPHRASE", "pw".to_string())]);
    let err = fast_config()
        .load_from(|name| vars.get(name).cloned())
        .unwrap_err();
    assert!(format!("{err}").contains("ENCRYPTION_SALT"));
}

#[test]
fn missing_key_fails() {
    let err = fast_config().load_from(|_| None).unwrap_err();
    assert!(matches!(err, CryptoError::KeyConfig(_)));
    assert!(format!("{err}").contains("ENCRYPTION_KEY is not set"));
}

#[test]
fn blank_key_is_treated_as_missing() {
    let vars = env(&[("ENCRYPTION_KEY", "   ".to_string())]);
    let err = fast_config()
        .load_from(|name| vars.get(name).cloned())
        .unwrap_err();
    assert!(format!("{err}").contains("not set"));
}

#[test]
fn wrong_length_key_names_the_variable() {
    let vars = env(&[("ENCRYPTION_KEY", STANDARD.encode([1u8; 16]))]);
    let err = fast_config()
        .load_from(|name| vars.get(name).cloned())
        .unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("ENCRYPTION_KEY"));
    assert!(msg.contains("32"));
}

#[test]
fn custom_variable_names() {
    let config = KeyConfig {
        key_var: "APP_RECORD_KEY".to_string(),
        ..fast_config()
    };
    let vars = env(&[("APP_RECORD_KEY", STANDARD.encode([4u8; 32]))]);
    assert!(config.load_from(|name| vars.get(name).cloned()).is_ok());
}

#[test]
fn config_deserializes_with_defaults() {
    let config: KeyConfig = serde_json::from_str(r#"{"key_var":"K"}"#).unwrap();
    assert_eq!(config.key_var, "K");
    assert_eq!(config.salt_var, "ENCRYPTION_SALT");
    assert_eq!(config.kdf, KdfParams::default());
}

#[test]
fn envelope_from_config_fails_without_key() {
    let config = KeyConfig {
        key_var: "SEALFIELD_TEST_UNSET_KEY_VAR".to_string(),
        passphrase_var: "SEALFIELD_TEST_UNSET_PASSPHRASE_VAR".to_string(),
        ..fast_config()
    };
    assert!(Envelope::from_config(&config).is_err());
}
