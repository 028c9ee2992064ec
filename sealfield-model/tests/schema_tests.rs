use sealfield_model::{CIPHERTEXT_FIELD, EntityManifest, FieldSpec, FieldType, ModelError};
use serde_json::json;

// ── FieldSpec constructors ───────────────────────────────────────

#[test]
fn cleartext_and_encrypted_shorthands() {
    let c = FieldSpec::cleartext("id", FieldType::UniqueId);
    assert_eq!(c.name, "id");
    assert_eq!(c.field_type, FieldType::UniqueId);
    assert!(c.cleartext);

    let e = FieldSpec::encrypted("notes", FieldType::Scalar);
    assert!(!e.cleartext);
}

#[test]
fn typed_shorthands() {
    assert_eq!(FieldSpec::scalar("a", true).field_type, FieldType::Scalar);
    assert_eq!(FieldSpec::unique_id("a", true).field_type, FieldType::UniqueId);
    assert_eq!(FieldSpec::timestamp("a", true).field_type, FieldType::Timestamp);
    assert_eq!(FieldSpec::calendar_date("a", false).field_type, FieldType::CalendarDate);
    assert_eq!(FieldSpec::unique_id_list("a", false).field_type, FieldType::ListOfUniqueId);
}

#[test]
fn field_spec_serde_shape() {
    let spec = FieldSpec::unique_id_list("participants", true);
    let value = serde_json::to_value(&spec).unwrap();
    assert_eq!(
        value,
        json!({"name": "participants", "field_type": "list_of_unique_id", "cleartext": true})
    );
    let parsed: FieldSpec = serde_json::from_value(value).unwrap();
    assert_eq!(parsed, spec);
}

// ── EntityManifest ───────────────────────────────────────────────

fn rock_manifest() -> EntityManifest {
    EntityManifest::new(
        "rock",
        vec![
            FieldSpec::unique_id("id", true),
            FieldSpec::scalar("rock_name", true),
            FieldSpec::unique_id("assigned_to_id", false),
            FieldSpec::calendar_date("due", false),
        ],
    )
    .unwrap()
}

#[test]
fn partition_preserves_declaration_order() {
    let manifest = rock_manifest();
    let (clear, enc) = manifest.partition();
    let clear: Vec<&str> = clear.iter().map(|f| f.name.as_str()).collect();
    let enc: Vec<&str> = enc.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(clear, ["id", "rock_name"]);
    assert_eq!(enc, ["assigned_to_id", "due"]);
}

#[test]
fn every_field_is_classified_exactly_once() {
    let manifest = rock_manifest();
    let clear = manifest.cleartext_fields().count();
    let enc = manifest.encrypted_fields().count();
    assert_eq!(clear + enc, manifest.fields().len());
    assert_eq!(manifest.required_fields().len(), manifest.fields().len());
}

#[test]
fn field_lookup_by_name() {
    let manifest = rock_manifest();
    assert_eq!(manifest.entity_kind(), "rock");
    assert_eq!(manifest.field("due").unwrap().field_type, FieldType::CalendarDate);
    assert!(manifest.field("missing").is_none());
}

#[test]
fn duplicate_field_rejected() {
    let err = EntityManifest::new(
        "rock",
        vec![FieldSpec::scalar("name", true), FieldSpec::scalar("name", false)],
    )
    .unwrap_err();
    assert!(matches!(err, ModelError::InvalidManifest { .. }));
    assert!(format!("{err}").contains("duplicate field"));
}

#[test]
fn reserved_ciphertext_field_rejected() {
    let err = EntityManifest::new("rock", vec![FieldSpec::scalar(CIPHERTEXT_FIELD, true)]).unwrap_err();
    assert!(format!("{err}").contains("reserved"));
}

#[test]
fn empty_names_rejected() {
    assert!(EntityManifest::new("", vec![]).is_err());
    assert!(EntityManifest::new("rock", vec![FieldSpec::scalar(" ", true)]).is_err());
}

#[test]
fn manifest_without_fields_is_allowed() {
    let manifest = EntityManifest::new("marker", vec![]).unwrap();
    assert!(manifest.fields().is_empty());
}
