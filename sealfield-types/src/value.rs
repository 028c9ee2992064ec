use crate::FieldType;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A typed field value held by a record.
///
/// `Scalar` carries any JSON value the service layer hands over. A string
/// scalar given for a typed field is validated and canonicalised by the
/// codec on write, so records built straight from request JSON are accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Scalar(serde_json::Value),
    UniqueId(Uuid),
    Timestamp(DateTime<Utc>),
    CalendarDate(NaiveDate),
    /// Ordered identifiers; `None` marks an element that could not be read.
    UniqueIdList(Vec<Option<Uuid>>),
}

impl FieldValue {
    /// Returns true if this is [`FieldValue::Null`] or a JSON null scalar.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null | FieldValue::Scalar(serde_json::Value::Null))
    }

    /// The field type this value natively belongs to, if it is not a scalar.
    #[must_use]
    pub fn native_type(&self) -> Option<FieldType> {
        match self {
            FieldValue::Null | FieldValue::Scalar(_) => None,
            FieldValue::UniqueId(_) => Some(FieldType::UniqueId),
            FieldValue::Timestamp(_) => Some(FieldType::Timestamp),
            FieldValue::CalendarDate(_) => Some(FieldType::CalendarDate),
            FieldValue::UniqueIdList(_) => Some(FieldType::ListOfUniqueId),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Scalar(v) => v.as_str(),
            _ => None,
        }
    }

    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            FieldValue::UniqueId(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            FieldValue::CalendarDate(d) => Some(*d),
            _ => None,
        }
    }

    pub fn as_uuid_list(&self) -> Option<&[Option<Uuid>]> {
        match self {
            FieldValue::UniqueIdList(ids) => Some(ids),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            other => FieldValue::Scalar(other),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Scalar(serde_json::Value::String(value.to_string()))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Scalar(serde_json::Value::String(value))
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Scalar(value.into())
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        FieldValue::UniqueId(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::CalendarDate(value)
    }
}

impl From<Vec<Uuid>> for FieldValue {
    fn from(value: Vec<Uuid>) -> Self {
        FieldValue::UniqueIdList(value.into_iter().map(Some).collect())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
