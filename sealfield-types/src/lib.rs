//! Core type definitions for sealfield.
//!
//! This crate defines the closed vocabulary that every other layer speaks:
//! - [`FieldType`], the semantic type a record field is declared with
//! - [`FieldValue`], a typed value (or null) held by a record
//! - the text grammars for identifiers, timestamps and calendar dates
//!
//! Entity schemas, encryption and document layout live in the crates above.

mod field_type;
mod ids;
mod timestamp;
mod value;

pub use field_type::FieldType;
pub use ids::{format_unique_id, new_unique_id, parse_unique_id};
pub use timestamp::{format_calendar_date, format_timestamp, parse_calendar_date, parse_timestamp};
pub use value::FieldValue;

/// Result type alias using the crate's error type.
pub type TypesResult<T> = std::result::Result<T, TypesError>;

/// Errors that can occur when parsing typed values from text.
#[derive(Debug, thiserror::Error)]
pub enum TypesError {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("invalid calendar date: {0}")]
    InvalidDate(String),
}
