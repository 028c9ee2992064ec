use crate::error::{ModelError, ModelResult};
use crate::schema::{EntityManifest, FieldSpec};
use std::collections::{BTreeSet, HashMap};

/// Registered entity manifests, keyed by entity kind.
///
/// Populated once at startup, then shared read-only (typically behind an
/// `Arc`) by every serializer call.
#[derive(Debug, Clone, Default)]
pub struct ManifestRegistry {
    manifests: HashMap<String, EntityManifest>,
}

impl ManifestRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the ordered field specs of an entity kind.
    ///
    /// Fails with [`ModelError::DuplicateEntityKind`] if the kind is already
    /// registered, or [`ModelError::InvalidManifest`] if the specs repeat a
    /// field name, leave a name empty, or use the reserved ciphertext field.
    pub fn register(&mut self, entity_kind: &str, fields: Vec<FieldSpec>) -> ModelResult<()> {
        if self.manifests.contains_key(entity_kind) {
            return Err(ModelError::DuplicateEntityKind(entity_kind.to_string()));
        }
        let manifest = EntityManifest::new(entity_kind, fields)?;
        self.manifests.insert(entity_kind.to_string(), manifest);
        Ok(())
    }

    /// Returns the full manifest of an entity kind.
    pub fn manifest(&self, entity_kind: &str) -> ModelResult<&EntityManifest> {
        self.manifests
            .get(entity_kind)
            .ok_or_else(|| ModelError::UnknownEntityKind(entity_kind.to_string()))
    }

    /// Returns `(cleartext_fields, encrypted_fields)` of an entity kind.
    pub fn lookup(&self, entity_kind: &str) -> ModelResult<(Vec<&FieldSpec>, Vec<&FieldSpec>)> {
        Ok(self.manifest(entity_kind)?.partition())
    }

    /// Every field name declared for an entity kind.
    pub fn required_fields(&self, entity_kind: &str) -> ModelResult<BTreeSet<String>> {
        Ok(self
            .manifest(entity_kind)?
            .required_fields()
            .into_iter()
            .map(str::to_string)
            .collect())
    }

    pub fn contains(&self, entity_kind: &str) -> bool {
        self.manifests.contains_key(entity_kind)
    }

    /// Registered entity kinds, sorted.
    pub fn kinds(&self) -> Vec<&str> {
        let mut kinds: Vec<&str> = self.manifests.keys().map(String::as_str).collect();
        kinds.sort_unstable();
        kinds
    }

    pub fn len(&self) -> usize {
        self.manifests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.manifests.is_empty()
    }
}
