use chrono::{DateTime, NaiveDate, Utc};
use sealfield_types::FieldValue;
use serde_json::Value;
use std::collections::BTreeMap;
use uuid::Uuid;

fn normalize(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Scalar(Value::Null) => FieldValue::Null,
        other => other,
    }
}

/// A domain record: field name to typed value.
///
/// Built by the service layer, consumed on write and produced on read by the
/// record serializer. A field that is missing from the map is "absent"; a
/// field mapped to [`FieldValue::Null`] is present and null. A JSON null
/// scalar is stored as [`FieldValue::Null`], the form reads produce.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: BTreeMap<String, FieldValue>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.to_string(), normalize(value.into()));
        self
    }

    /// Sets a field, returning the previous value if there was one.
    pub fn insert(&mut self, name: &str, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.fields.insert(name.to_string(), normalize(value.into()))
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<FieldValue> {
        self.fields.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Fields in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// True if the field is absent or null.
    pub fn is_null(&self, name: &str) -> bool {
        self.fields.get(name).is_none_or(FieldValue::is_null)
    }

    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(FieldValue::as_str)
    }

    pub fn get_uuid(&self, name: &str) -> Option<Uuid> {
        self.fields.get(name).and_then(FieldValue::as_uuid)
    }

    pub fn get_timestamp(&self, name: &str) -> Option<DateTime<Utc>> {
        self.fields.get(name).and_then(FieldValue::as_timestamp)
    }

    pub fn get_date(&self, name: &str) -> Option<NaiveDate> {
        self.fields.get(name).and_then(FieldValue::as_date)
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(name, value)| (name, normalize(value)))
                .collect(),
        }
    }
}

impl IntoIterator for Record {
    type Item = (String, FieldValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
