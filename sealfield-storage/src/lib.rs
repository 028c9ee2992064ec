//! Selective field encryption for stored records.
//!
//! Converts a [`Record`](sealfield_model::Record) into a flat
//! [`StorageDocument`] that keeps query-relevant fields in cleartext and
//! seals everything else into one authenticated envelope, and back again.
//!
//! # Architecture
//!
//! - Which fields stay in cleartext is declared per entity kind in a
//!   [`ManifestRegistry`](sealfield_model::ManifestRegistry)
//! - Encryption goes through the [`DataEncryptor`](sealfield_crypto::DataEncryptor)
//!   seam; the serializer never handles key material
//! - Reads apply the repairing policy: integrity failures are fatal, a
//!   single unreadable field is nulled and reported, missing declared
//!   fields are filled with null and reported
//!
//! ```ignore
//! let mut registry = ManifestRegistry::new();
//! catalog::register_business_entities(&mut registry)?;
//! let envelope = Envelope::from_config(&KeyConfig::default())?;
//! let serializer = RecordSerializer::new(Arc::new(registry), Arc::new(envelope));
//!
//! let doc = serializer.to_storage(&record, "rock")?;
//! let restored = serializer.restore(&doc, "rock")?;
//! ```

mod document;
mod error;
mod serializer;

pub use document::StorageDocument;
pub use error::{StorageError, StorageResult};
pub use serializer::{RecordSerializer, Restored};

pub use sealfield_model::{CIPHERTEXT_FIELD, DecodeMode};
