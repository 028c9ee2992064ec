//! Identifier grammar.
//!
//! Identifiers are UUIDs. Any form `uuid` accepts is parsed (hyphenated,
//! simple, braced, URN); the canonical stored form is lowercase hyphenated.

use crate::TypesResult;
use uuid::Uuid;

/// Creates a fresh random identifier for a new record.
#[must_use]
pub fn new_unique_id() -> Uuid {
    Uuid::new_v4()
}

/// Parses an identifier from its text form.
///
/// Surrounding whitespace is ignored; an empty string is not an identifier.
pub fn parse_unique_id(s: &str) -> TypesResult<Uuid> {
    Ok(Uuid::parse_str(s.trim())?)
}

/// Returns the canonical lowercase hyphenated form.
#[must_use]
pub fn format_unique_id(id: &Uuid) -> String {
    id.hyphenated().to_string()
}
