use crate::error::{StorageError, StorageResult};
use sealfield_model::CIPHERTEXT_FIELD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The flat object persisted in the document store.
///
/// Holds one JSON field per cleartext field of the entity kind plus a single
/// [`CIPHERTEXT_FIELD`] holding the envelope of everything else. Any extra
/// keys the store adds (such as its own primary key) are carried along and
/// ignored on read.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageDocument(Map<String, Value>);

impl StorageDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: &str, value: Value) -> Option<Value> {
        self.0.insert(name.to_string(), value)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The encrypted payload envelope, if present and a string.
    pub fn ciphertext(&self) -> Option<&str> {
        self.0.get(CIPHERTEXT_FIELD).and_then(Value::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for StorageDocument {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for StorageDocument {
    type Error = StorageError;

    fn try_from(value: Value) -> StorageResult<Self> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(StorageError::DecodeFailure(format!(
                "storage document must be a JSON object, got {other}"
            ))),
        }
    }
}
