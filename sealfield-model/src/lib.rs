//! Entity model for sealfield.
//!
//! Defines what a record looks like before it is split for storage:
//! - [`Record`], a mapping from field name to [`FieldValue`]
//! - [`FieldSpec`] / [`EntityManifest`], which fields of an entity kind stay
//!   in cleartext and which are folded into the encrypted payload
//! - [`ManifestRegistry`], the set of registered entity kinds, validated at
//!   startup and read-only afterwards
//! - [`codec`], the type-tagged conversion between [`FieldValue`] and JSON,
//!   in strict or tolerant [`DecodeMode`]
//! - [`catalog`], the built-in business entity kinds

pub mod catalog;
pub mod codec;
mod error;
mod record;
mod registry;
mod schema;

pub use codec::{DecodeMode, DecodeOutcome, decode, encode};
pub use error::{ModelError, ModelResult};
pub use record::Record;
pub use registry::ManifestRegistry;
pub use schema::{CIPHERTEXT_FIELD, EntityManifest, FieldSpec};
pub use sealfield_types::{FieldType, FieldValue};
