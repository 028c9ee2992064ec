//! Record <-> storage document conversion.
//!
//! Writing splits a record along its manifest: cleartext fields are encoded
//! into the document directly, every other field is encoded into a JSON map
//! that is sealed as one envelope under [`CIPHERTEXT_FIELD`].
//!
//! Reading reverses this under the repairing policy:
//! - an envelope that fails authentication or does not decode, or a payload
//!   that is not a JSON object, fails the whole record
//! - a single field whose stored value does not match its declared type is
//!   coerced to null on a tolerant read and reported in
//!   [`Restored::coerced_fields`]
//! - a declared field missing from the document is filled with null and
//!   reported in [`Restored::filled_fields`]

use crate::document::StorageDocument;
use crate::error::{StorageError, StorageResult};
use sealfield_crypto::DataEncryptor;
use sealfield_model::{
    CIPHERTEXT_FIELD, DecodeMode, DecodeOutcome, EntityManifest, FieldSpec, FieldValue,
    ManifestRegistry, Record, codec,
};
use serde_json::{Map, Value};
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// A record read back from storage, with what had to be repaired.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Restored {
    /// Every declared field of the entity kind, null where unreadable or absent.
    pub record: Record,
    /// Fields whose stored value did not match the declared type and were
    /// replaced with null (or, for identifier lists, had elements nulled).
    pub coerced_fields: BTreeSet<String>,
    /// Declared fields absent from the stored document, filled with null.
    pub filled_fields: BTreeSet<String>,
}

impl Restored {
    /// True if nothing had to be coerced or filled.
    pub fn is_pristine(&self) -> bool {
        self.coerced_fields.is_empty() && self.filled_fields.is_empty()
    }
}

/// Converts records to storage documents and back.
///
/// Holds no mutable state: the registry is frozen behind an `Arc` and the
/// encryptor owns an immutable key, so one serializer can be shared by any
/// number of threads.
#[derive(Clone)]
pub struct RecordSerializer {
    registry: Arc<ManifestRegistry>,
    encryptor: Arc<dyn DataEncryptor>,
}

impl std::fmt::Debug for RecordSerializer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordSerializer")
            .field("entity_kinds", &self.registry.kinds())
            .finish_non_exhaustive()
    }
}

impl RecordSerializer {
    pub fn new(registry: Arc<ManifestRegistry>, encryptor: Arc<dyn DataEncryptor>) -> Self {
        Self {
            registry,
            encryptor,
        }
    }

    pub fn registry(&self) -> &ManifestRegistry {
        &self.registry
    }

    /// Splits `record` into a storage document for `entity_kind`.
    ///
    /// Values are encoded strictly: a value that does not fit its declared
    /// type is [`StorageError::MalformedFieldValue`], and a field the
    /// manifest does not declare is [`StorageError::UndeclaredField`].
    /// Declared fields absent from the record are omitted.
    pub fn to_storage(&self, record: &Record, entity_kind: &str) -> StorageResult<StorageDocument> {
        let manifest = self.registry.manifest(entity_kind)?;

        if let Some(field) = record.field_names().find(|name| manifest.field(name).is_none()) {
            return Err(StorageError::UndeclaredField {
                entity_kind: entity_kind.to_string(),
                field: field.to_string(),
            });
        }

        let mut document = StorageDocument::new();
        let mut payload = Map::new();

        for spec in manifest.fields() {
            let Some(value) = record.get(&spec.name) else {
                continue;
            };
            let encoded = codec::encode(&spec.name, value, spec.field_type)?;
            if spec.cleartext {
                document.insert(&spec.name, encoded);
            } else {
                payload.insert(spec.name.clone(), encoded);
            }
        }

        let plaintext = serde_json::to_vec(&payload)?;
        let envelope = self.encryptor.encrypt_bytes(&plaintext)?;
        document.insert(CIPHERTEXT_FIELD, Value::String(envelope));

        Ok(document)
    }

    /// Rebuilds a record of `entity_kind` from a storage document using a
    /// tolerant decode.
    pub fn restore(&self, document: &StorageDocument, entity_kind: &str) -> StorageResult<Restored> {
        self.from_storage(document, entity_kind, DecodeMode::Tolerant)
    }

    /// Rebuilds a record of `entity_kind` from a storage document.
    ///
    /// Envelope and payload failures are fatal in every mode. Field-level
    /// mismatches are fatal only in [`DecodeMode::Strict`].
    pub fn from_storage(
        &self,
        document: &StorageDocument,
        entity_kind: &str,
        mode: DecodeMode,
    ) -> StorageResult<Restored> {
        let manifest = self.registry.manifest(entity_kind)?;
        let payload = self.open_payload(document, entity_kind)?;

        let mut restored = Restored::default();
        let (cleartext, encrypted) = manifest.partition();

        for spec in encrypted {
            let stored = payload
                .get(&spec.name)
                .or_else(|| document.get(&spec.name));
            self.restore_field(&mut restored, entity_kind, spec, stored, mode)?;
        }

        for spec in cleartext {
            let stored = document
                .get(&spec.name)
                .or_else(|| payload.get(&spec.name));
            self.restore_field(&mut restored, entity_kind, spec, stored, mode)?;
        }

        log_undeclared(manifest, &payload, entity_kind);

        Ok(restored)
    }

    /// Decrypts and parses the encrypted payload of `document`.
    fn open_payload(
        &self,
        document: &StorageDocument,
        entity_kind: &str,
    ) -> StorageResult<Map<String, Value>> {
        let envelope = match document.get(CIPHERTEXT_FIELD) {
            Some(Value::String(envelope)) => envelope,
            Some(_) => {
                return Err(StorageError::DecodeFailure(format!(
                    "{CIPHERTEXT_FIELD} is not a string"
                )));
            }
            None => {
                return Err(StorageError::DecodeFailure(format!(
                    "document has no {CIPHERTEXT_FIELD} field"
                )));
            }
        };

        let plaintext = self.encryptor.decrypt_bytes(envelope).map_err(|e| {
            warn!(entity_kind = %entity_kind, error = %e, "Encrypted payload rejected");
            StorageError::from(e)
        })?;

        match serde_json::from_slice::<Value>(&plaintext) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(StorageError::DecodeFailure(
                "decrypted payload is not a JSON object".to_string(),
            )),
            Err(e) => Err(StorageError::DecodeFailure(format!(
                "decrypted payload is not valid JSON: {e}"
            ))),
        }
    }

    fn restore_field(
        &self,
        restored: &mut Restored,
        entity_kind: &str,
        spec: &FieldSpec,
        stored: Option<&Value>,
        mode: DecodeMode,
    ) -> StorageResult<()> {
        let Some(stored) = stored else {
            info!(entity_kind = %entity_kind, field = %spec.name, "Declared field missing from document, filling with null");
            restored.filled_fields.insert(spec.name.clone());
            restored.record.insert(&spec.name, FieldValue::Null);
            return Ok(());
        };

        let (value, outcome) = codec::decode(&spec.name, stored, spec.field_type, mode)?;
        if let DecodeOutcome::Coerced { reason, .. } = outcome {
            debug!(entity_kind = %entity_kind, field = %spec.name, reason = %reason, "Coerced unreadable field");
            restored.coerced_fields.insert(spec.name.clone());
        }
        restored.record.insert(&spec.name, value);
        Ok(())
    }
}

fn log_undeclared(manifest: &EntityManifest, payload: &Map<String, Value>, entity_kind: &str) {
    for key in payload.keys().filter(|k| manifest.field(k).is_none()) {
        debug!(entity_kind = %entity_kind, field = %key, "Ignoring undeclared payload field");
    }
}
