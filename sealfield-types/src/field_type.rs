use serde::{Deserialize, Serialize};
use std::fmt;

/// The semantic type of a record field.
///
/// Every variant has exactly one canonical JSON-safe encoding:
/// `Scalar` passes through, `UniqueId` is a lowercase hyphenated string,
/// `Timestamp` and `CalendarDate` are ISO-8601 strings and `ListOfUniqueId`
/// is an ordered array of identifier strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Scalar,
    UniqueId,
    Timestamp,
    CalendarDate,
    ListOfUniqueId,
}

impl FieldType {
    /// Returns the snake_case name used in manifests and error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            FieldType::Scalar => "scalar",
            FieldType::UniqueId => "unique_id",
            FieldType::Timestamp => "timestamp",
            FieldType::CalendarDate => "calendar_date",
            FieldType::ListOfUniqueId => "list_of_unique_id",
        }
    }

    /// True for types whose empty-string encoding is the legacy "absent" marker.
    #[must_use]
    pub const fn treats_empty_as_absent(&self) -> bool {
        matches!(
            self,
            FieldType::UniqueId | FieldType::Timestamp | FieldType::CalendarDate
        )
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
