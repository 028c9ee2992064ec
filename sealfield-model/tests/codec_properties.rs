//! Property tests for the field codec: typed values survive an encode/decode
//! cycle, and tolerant decoding never fails.

use chrono::{DateTime, NaiveDate, Utc};
use proptest::prelude::*;
use sealfield_model::{DecodeMode, DecodeOutcome, FieldType, FieldValue, decode, encode};
use serde_json::Value;
use uuid::Uuid;

fn uuid_strategy() -> impl Strategy<Value = Uuid> {
    any::<u128>().prop_map(Uuid::from_u128)
}

fn timestamp_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    // 1970..2100 with microsecond precision
    (0i64..4_102_444_800, 0u32..1_000_000).prop_map(|(secs, micros)| {
        DateTime::from_timestamp(secs, micros * 1_000).unwrap_or_default()
    })
}

fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default())
}

fn typed_value_strategy() -> impl Strategy<Value = (FieldValue, FieldType)> {
    prop_oneof![
        uuid_strategy().prop_map(|id| (FieldValue::UniqueId(id), FieldType::UniqueId)),
        timestamp_strategy().prop_map(|ts| (FieldValue::Timestamp(ts), FieldType::Timestamp)),
        date_strategy().prop_map(|d| (FieldValue::CalendarDate(d), FieldType::CalendarDate)),
        prop::collection::vec(prop::option::of(uuid_strategy()), 0..8)
            .prop_map(|ids| (FieldValue::UniqueIdList(ids), FieldType::ListOfUniqueId)),
        "[a-zA-Z0-9 ]{0,40}".prop_map(|s| (FieldValue::from(s), FieldType::Scalar)),
    ]
}

fn field_type_strategy() -> impl Strategy<Value = FieldType> {
    prop_oneof![
        Just(FieldType::Scalar),
        Just(FieldType::UniqueId),
        Just(FieldType::Timestamp),
        Just(FieldType::CalendarDate),
        Just(FieldType::ListOfUniqueId),
    ]
}

fn json_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        ".{0,20}".prop_map(Value::from),
    ];
    leaf.prop_recursive(2, 16, 4, |inner| {
        prop::collection::vec(inner, 0..4).prop_map(Value::Array)
    })
}

proptest! {
    #[test]
    fn typed_values_roundtrip((value, ty) in typed_value_strategy()) {
        let encoded = encode("f", &value, ty).unwrap();
        let (decoded, outcome) = decode("f", &encoded, ty, DecodeMode::Strict).unwrap();
        prop_assert_eq!(decoded, value);
        prop_assert_eq!(outcome, DecodeOutcome::Clean);
    }

    #[test]
    fn tolerant_decode_never_fails(json in json_strategy(), ty in field_type_strategy()) {
        prop_assert!(decode("f", &json, ty, DecodeMode::Tolerant).is_ok());
    }

    #[test]
    fn strict_and_tolerant_agree_on_clean_values(json in json_strategy(), ty in field_type_strategy()) {
        let (tolerant, outcome) = decode("f", &json, ty, DecodeMode::Tolerant).unwrap();
        let strict = decode("f", &json, ty, DecodeMode::Strict);
        if outcome.is_coerced() {
            prop_assert!(strict.is_err());
        } else {
            prop_assert_eq!(strict.unwrap().0, tolerant);
        }
    }
}
