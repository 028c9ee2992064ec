use crate::error::{ModelError, ModelResult};
use sealfield_types::FieldType;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

/// Name of the storage-document field holding the encrypted payload.
/// No manifest may declare a field with this name.
pub const CIPHERTEXT_FIELD: &str = "data_enc";

/// One declared field of an entity kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub field_type: FieldType,
    /// Stored unencrypted and queryable by the document store.
    pub cleartext: bool,
}

impl FieldSpec {
    pub fn new(name: &str, field_type: FieldType, cleartext: bool) -> Self {
        Self {
            name: name.into(),
            field_type,
            cleartext,
        }
    }

    /// Shorthand for a cleartext field.
    pub fn cleartext(name: &str, field_type: FieldType) -> Self {
        Self::new(name, field_type, true)
    }

    /// Shorthand for a field folded into the encrypted payload.
    pub fn encrypted(name: &str, field_type: FieldType) -> Self {
        Self::new(name, field_type, false)
    }

    pub fn scalar(name: &str, cleartext: bool) -> Self {
        Self::new(name, FieldType::Scalar, cleartext)
    }

    pub fn unique_id(name: &str, cleartext: bool) -> Self {
        Self::new(name, FieldType::UniqueId, cleartext)
    }

    pub fn timestamp(name: &str, cleartext: bool) -> Self {
        Self::new(name, FieldType::Timestamp, cleartext)
    }

    pub fn calendar_date(name: &str, cleartext: bool) -> Self {
        Self::new(name, FieldType::CalendarDate, cleartext)
    }

    pub fn unique_id_list(name: &str, cleartext: bool) -> Self {
        Self::new(name, FieldType::ListOfUniqueId, cleartext)
    }
}

/// The validated schema partition of one entity kind.
///
/// Every declared field is classified exactly once, either cleartext or
/// encrypted. Declaration order is preserved within each side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityManifest {
    entity_kind: String,
    fields: Vec<FieldSpec>,
}

impl EntityManifest {
    /// Validates `fields` and builds the manifest.
    pub fn new(entity_kind: &str, fields: Vec<FieldSpec>) -> ModelResult<Self> {
        let invalid = |reason: String| ModelError::InvalidManifest {
            entity_kind: entity_kind.to_string(),
            reason,
        };

        if entity_kind.trim().is_empty() {
            return Err(invalid("entity kind name is empty".to_string()));
        }

        let mut seen = HashSet::with_capacity(fields.len());
        for spec in &fields {
            if spec.name.trim().is_empty() {
                return Err(invalid("field name is empty".to_string()));
            }
            if spec.name == CIPHERTEXT_FIELD {
                return Err(invalid(format!(
                    "field name {CIPHERTEXT_FIELD} is reserved for the encrypted payload"
                )));
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(invalid(format!("duplicate field {}", spec.name)));
            }
        }

        Ok(Self {
            entity_kind: entity_kind.to_string(),
            fields,
        })
    }

    pub fn entity_kind(&self) -> &str {
        &self.entity_kind
    }

    /// All declared fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn cleartext_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.cleartext)
    }

    pub fn encrypted_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| !f.cleartext)
    }

    /// Splits the declared fields into `(cleartext, encrypted)`.
    pub fn partition(&self) -> (Vec<&FieldSpec>, Vec<&FieldSpec>) {
        self.fields.iter().partition(|f| f.cleartext)
    }

    /// Every declared field name; a reconstructed record always carries all of them.
    pub fn required_fields(&self) -> BTreeSet<&str> {
        self.fields.iter().map(|f| f.name.as_str()).collect()
    }
}
