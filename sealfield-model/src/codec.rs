//! Type-tagged conversion between [`FieldValue`] and JSON-safe primitives.
//!
//! Encoding is always strict: a value that does not fit its declared type is
//! a caller bug. Decoding runs in one of two modes:
//!
//! - [`DecodeMode::Strict`]: a stored value that does not parse against its
//!   declared type is [`ModelError::MalformedFieldValue`].
//! - [`DecodeMode::Tolerant`]: the same value decodes to [`FieldValue::Null`]
//!   and the returned [`DecodeOutcome`] tags the field as coerced.
//!
//! JSON `null` is null in both modes and is never a coercion. A blank string
//! for a single-valued typed field is the legacy "absent" marker: it is
//! written through unchanged and on read is coerced (tolerant) or rejected
//! (strict). `ListOfUniqueId` applies the identifier rule per element, so
//! one bad element becomes `None` without losing the rest of the list.

use crate::error::{ModelError, ModelResult};
use sealfield_types::{
    FieldType, FieldValue, format_calendar_date, format_timestamp, format_unique_id,
    parse_calendar_date, parse_timestamp, parse_unique_id,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// How malformed stored values are handled on decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeMode {
    Strict,
    #[default]
    Tolerant,
}

/// Result of decoding one field, reported alongside the value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Clean,
    /// The stored value (or part of it, for lists) was unreadable and was
    /// replaced with null.
    Coerced { field: String, reason: String },
}

impl DecodeOutcome {
    pub fn is_coerced(&self) -> bool {
        matches!(self, DecodeOutcome::Coerced { .. })
    }
}

fn malformed(field: &str, expected: FieldType, reason: impl Into<String>) -> ModelError {
    ModelError::MalformedFieldValue {
        field: field.to_string(),
        expected,
        reason: reason.into(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn value_kind(value: &FieldValue) -> &'static str {
    match (value.native_type(), value) {
        (Some(native), _) => native.as_str(),
        (None, FieldValue::Scalar(v)) => json_kind(v),
        (None, _) => "null",
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Parses non-blank text against a single-valued type and returns its canonical form.
fn canonicalize(text: &str, field_type: FieldType) -> Result<FieldValue, String> {
    match field_type {
        FieldType::UniqueId => parse_unique_id(text)
            .map(FieldValue::UniqueId)
            .map_err(|e| e.to_string()),
        FieldType::Timestamp => parse_timestamp(text)
            .map(FieldValue::Timestamp)
            .map_err(|e| e.to_string()),
        FieldType::CalendarDate => parse_calendar_date(text)
            .map(FieldValue::CalendarDate)
            .map_err(|e| e.to_string()),
        FieldType::Scalar | FieldType::ListOfUniqueId => {
            Ok(FieldValue::Scalar(Value::String(text.to_string())))
        }
    }
}

fn encode_id_list(ids: &[Option<Uuid>]) -> Value {
    Value::Array(
        ids.iter()
            .map(|id| id.as_ref().map_or(Value::Null, |id| Value::String(format_unique_id(id))))
            .collect(),
    )
}

/// Encodes `value` for storage under its declared `field_type`.
///
/// String scalars given for typed fields are validated and canonicalised.
/// Any other mismatch between value and type is
/// [`ModelError::MalformedFieldValue`].
pub fn encode(field: &str, value: &FieldValue, field_type: FieldType) -> ModelResult<Value> {
    if value.is_null() {
        return Ok(Value::Null);
    }

    match (field_type, value) {
        (FieldType::Scalar, FieldValue::Scalar(v)) => Ok(v.clone()),

        (FieldType::UniqueId, FieldValue::UniqueId(id)) => Ok(Value::String(format_unique_id(id))),
        (FieldType::Timestamp, FieldValue::Timestamp(ts)) => Ok(Value::String(format_timestamp(ts))),
        (FieldType::CalendarDate, FieldValue::CalendarDate(d)) => {
            Ok(Value::String(format_calendar_date(d)))
        }
        (FieldType::ListOfUniqueId, FieldValue::UniqueIdList(ids)) => Ok(encode_id_list(ids)),

        (
            FieldType::UniqueId | FieldType::Timestamp | FieldType::CalendarDate,
            FieldValue::Scalar(Value::String(text)),
        ) => encode_text(field, text, field_type),

        (FieldType::ListOfUniqueId, FieldValue::Scalar(Value::Array(items))) => items
            .iter()
            .enumerate()
            .map(|(i, item)| match item {
                Value::Null => Ok(Value::Null),
                Value::String(text) if is_blank(text) => Ok(item.clone()),
                Value::String(text) => parse_unique_id(text)
                    .map(|id| Value::String(format_unique_id(&id)))
                    .map_err(|e| malformed(field, field_type, format!("element {i}: {e}"))),
                other => Err(malformed(
                    field,
                    field_type,
                    format!("element {i}: expected string, got {}", json_kind(other)),
                )),
            })
            .collect::<ModelResult<Vec<_>>>()
            .map(Value::Array),

        (expected, other) => Err(malformed(
            field,
            expected,
            format!("cannot store a {} value", value_kind(other)),
        )),
    }
}

fn encode_text(field: &str, text: &str, field_type: FieldType) -> ModelResult<Value> {
    if field_type.treats_empty_as_absent() && is_blank(text) {
        return Ok(Value::String(text.to_string()));
    }
    let typed = canonicalize(text, field_type).map_err(|e| malformed(field, field_type, e))?;
    encode(field, &typed, field_type)
}

/// Decodes a stored JSON value under its declared `field_type`.
pub fn decode(
    field: &str,
    json: &Value,
    field_type: FieldType,
    mode: DecodeMode,
) -> ModelResult<(FieldValue, DecodeOutcome)> {
    if json.is_null() {
        return Ok((FieldValue::Null, DecodeOutcome::Clean));
    }

    let soft = |reason: String| -> ModelResult<(FieldValue, DecodeOutcome)> {
        match mode {
            DecodeMode::Strict => Err(malformed(field, field_type, reason)),
            DecodeMode::Tolerant => Ok((
                FieldValue::Null,
                DecodeOutcome::Coerced {
                    field: field.to_string(),
                    reason,
                },
            )),
        }
    };

    match field_type {
        FieldType::Scalar => Ok((FieldValue::Scalar(json.clone()), DecodeOutcome::Clean)),

        FieldType::UniqueId | FieldType::Timestamp | FieldType::CalendarDate => match json {
            Value::String(text) if field_type.treats_empty_as_absent() && is_blank(text) => {
                soft("empty string".to_string())
            }
            Value::String(text) => match canonicalize(text, field_type) {
                Ok(value) => Ok((value, DecodeOutcome::Clean)),
                Err(reason) => soft(reason),
            },
            other => soft(format!("expected string, got {}", json_kind(other))),
        },

        FieldType::ListOfUniqueId => {
            let Value::Array(items) = json else {
                return soft(format!("expected array, got {}", json_kind(json)));
            };

            let mut ids = Vec::with_capacity(items.len());
            let mut bad = Vec::new();
            for (i, item) in items.iter().enumerate() {
                let parsed = match item {
                    Value::Null => Ok(None),
                    Value::String(text) if is_blank(text) => Err("empty string".to_string()),
                    Value::String(text) => parse_unique_id(text).map(Some).map_err(|e| e.to_string()),
                    other => Err(format!("expected string, got {}", json_kind(other))),
                };
                match parsed {
                    Ok(id) => ids.push(id),
                    Err(reason) if mode == DecodeMode::Strict => {
                        return Err(malformed(field, field_type, format!("element {i}: {reason}")));
                    }
                    Err(reason) => {
                        bad.push(format!("element {i}: {reason}"));
                        ids.push(None);
                    }
                }
            }

            let outcome = if bad.is_empty() {
                DecodeOutcome::Clean
            } else {
                DecodeOutcome::Coerced {
                    field: field.to_string(),
                    reason: bad.join("; "),
                }
            };
            Ok((FieldValue::UniqueIdList(ids), outcome))
        }
    }
}
