use base64::{Engine, engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD}};
use sealfield_crypto::{
    CryptoError, EncryptionKey, KdfParams, Salt, derive_key, generate_random_key,
};

fn test_params() -> KdfParams {
    KdfParams {
        memory_cost: 1024,
        time_cost: 1,
        parallelism: 1,
    }
}

// ── derive_key ───────────────────────────────────────────────────

#[test]
fn derive_key_produces_consistent_results() {
    let salt = Salt::from_bytes([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16]);
    let params = test_params();
    let key1 = derive_key("correct horse", &salt, &params).unwrap();
    let key2 = derive_key("correct horse", &salt, &params).unwrap();
    assert_eq!(key1.as_bytes(), key2.as_bytes());
}

#[test]
fn different_salts_produce_different_keys() {
    let params = test_params();
    let salt1 = Salt::from_bytes([1; 16]);
    let salt2 = Salt::from_bytes([2; 16]);
    let key1 = derive_key("same", &salt1, &params).unwrap();
    let key2 = derive_key("same", &salt2, &params).unwrap();
    assert_ne!(key1.as_bytes(), key2.as_bytes());
}

#[test]
fn derive_key_invalid_params_zero_time_cost() {
    let salt = Salt::from_bytes([1; 16]);
    let bad_params = KdfParams {
        memory_cost: 1024,
        time_cost: 0,
        parallelism: 1,
    };
    let err = derive_key("pw", &salt, &bad_params).unwrap_err();
    assert!(matches!(err, CryptoError::KeyDerivation(_)));
}

#[test]
fn kdf_params_default() {
    let params = KdfParams::default();
    assert_eq!(params.memory_cost, 19 * 1024);
    assert_eq!(params.time_cost, 2);
    assert_eq!(params.parallelism, 1);
}

// ── EncryptionKey ────────────────────────────────────────────────

#[test]
fn generate_random_key_produces_unique_keys() {
    let key1 = generate_random_key();
    let key2 = generate_random_key();
    assert_ne!(key1.as_bytes(), key2.as_bytes());
}

#[test]
fn key_from_bytes_roundtrip() {
    let bytes = [42u8; 32];
    let key = EncryptionKey::from_bytes(bytes);
    assert_eq!(*key.as_bytes(), bytes);
}

#[test]
fn key_from_slice_rejects_wrong_length() {
    let err = EncryptionKey::from_slice(&[0u8; 16]).unwrap_err();
    assert!(matches!(
        err,
        CryptoError::InvalidKeyLength {
            expected: 32,
            actual: 16
        }
    ));
}

#[test]
fn key_base64_roundtrip() {
    let key = generate_random_key();
    let restored = EncryptionKey::from_base64(&key.to_base64()).unwrap();
    assert_eq!(key.as_bytes(), restored.as_bytes());
}

#[test]
fn key_from_url_safe_unpadded_base64() {
    let bytes = [0xfbu8; 32];
    let encoded = URL_SAFE_NO_PAD.encode(bytes);
    let key = EncryptionKey::from_base64(&encoded).unwrap();
    assert_eq!(*key.as_bytes(), bytes);
}

#[test]
fn key_from_base64_ignores_surrounding_whitespace() {
    let encoded = format!("  {}\n", STANDARD.encode([3u8; 32]));
    assert!(EncryptionKey::from_base64(&encoded).is_ok());
}

#[test]
fn key_from_invalid_base64_fails() {
    let err = EncryptionKey::from_base64("!!!not base64!!!").unwrap_err();
    assert!(matches!(err, CryptoError::KeyConfig(_)));
}

#[test]
fn key_from_short_base64_fails() {
    let encoded = STANDARD.encode([1u8; 31]);
    assert!(matches!(
        EncryptionKey::from_base64(&encoded),
        Err(CryptoError::InvalidKeyLength { actual: 31, .. })
    ));
}

#[test]
fn key_debug_does_not_leak_bytes() {
    let key = EncryptionKey::from_bytes([0xab; 32]);
    let debug = format!("{:?}", key);
    assert!(debug.contains("REDACTED"));
    assert!(!debug.contains("171"));
}

// ── Salt ─────────────────────────────────────────────────────────

#[test]
fn salt_random_produces_unique() {
    let s1 = Salt::random();
    let s2 = Salt::random();
    assert_ne!(s1.as_bytes(), s2.as_bytes());
}

#[test]
fn salt_from_base64() {
    let salt = Salt::from_base64(&STANDARD.encode([7u8; 16])).unwrap();
    assert_eq!(*salt.as_bytes(), [7u8; 16]);
}

#[test]
fn salt_from_base64_wrong_length_fails() {
    let err = Salt::from_base64(&STANDARD.encode([7u8; 8])).unwrap_err();
    assert!(format!("{err}").contains("16 bytes"));
}
