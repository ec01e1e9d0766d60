use proptest::prelude::*;
use serde_json::{json, Map, Value};

use crate::cache::account::AccountEntity;
use crate::cache::app_metadata::AppMetadataEntity;
use crate::cache::credential::{AccessTokenEntity, IdTokenEntity, RefreshTokenEntity};
use crate::cache::entity::CacheEntity;
use crate::cache::in_memory::InMemoryCache;
use crate::serializer::codec::CacheCodec;
use crate::serializer::deserializer::deserialize_entity;
use crate::serializer::json_keys::ACCESS_TOKEN_CACHE_MAPS;
use crate::serializer::serializer::{serialize_all_cache, serialize_entity, serialize_json_blob};
use crate::tests::common;

fn parse(text: &str) -> Value {
    serde_json::from_str(text).unwrap()
}

fn assert_record_survives<E: CacheEntity>(record: Value) {
    let entity = deserialize_entity::<E>("k", &record.to_string()).unwrap();
    let written = serialize_entity(&entity).unwrap();
    assert_eq!(parse(&written), record, "{} record changed", E::KIND);
}

#[test]
fn wire_record_survives_hydrate_and_serialize() {
    assert_record_survives::<AccountEntity>(common::account_record());
    assert_record_survives::<IdTokenEntity>(common::id_token_record());
    assert_record_survives::<AccessTokenEntity>(common::access_token_record());
    assert_record_survives::<RefreshTokenEntity>(common::refresh_token_record());
    assert_record_survives::<AppMetadataEntity>(common::app_metadata_record());
}

#[test]
fn non_string_values_are_written_back_as_text() {
    let record = json!({"cached_at": 1700000000, "key_id": false, "target": ["a"]});

    let token = deserialize_entity::<AccessTokenEntity>("k", &record.to_string()).unwrap();
    let written = parse(&serialize_entity(&token).unwrap());

    assert_eq!(written, json!({"cached_at": "1700000000", "key_id": "false"}));
}

#[test]
fn round_trip_keeps_only_recognized_fields() {
    let mut record = common::account_record();
    record["x_future_field"] = json!("dropped on write");

    let account = deserialize_entity::<AccountEntity>("k", &record.to_string()).unwrap();
    let written = parse(&serialize_entity(&account).unwrap());

    record.as_object_mut().unwrap().remove("x_future_field");
    assert_eq!(written, record);
}

#[test]
fn codec_round_trip_is_stable() {
    let codec = CacheCodec::new();
    let first = codec.from_json(Some(common::cache_document().as_str())).unwrap();

    let text = codec.to_json(&first).unwrap();
    let second = codec.from_json(Some(text.as_str())).unwrap();

    assert_eq!(first, second);
    assert_eq!(second.len(), 5);
}

#[test]
fn empty_cache_writes_every_section() {
    let json_cache = serialize_all_cache(&InMemoryCache::new()).unwrap();
    let written = parse(&serialize_json_blob(&json_cache, false).unwrap());

    assert_eq!(
        written,
        json!({
            "Account": {},
            "IdToken": {},
            "AccessToken": {},
            "RefreshToken": {},
            "AppMetadata": {}
        })
    );
}

#[test]
fn pretty_output_is_indented() {
    let json_cache = serialize_all_cache(&InMemoryCache::new()).unwrap();
    let written = serialize_json_blob(&json_cache, true).unwrap();
    assert!(written.contains("\n  \"Account\""));
}

#[test]
fn unknown_sections_survive_when_carried_over() {
    let text = r#"{"Account": {}, "Telemetry": {"enabled": true}}"#;

    let (cache, extra) = CacheCodec::new().read(Some(text)).unwrap();
    let written = CacheCodec::new().with_extra_sections(extra).to_json(&cache).unwrap();

    assert_eq!(parse(&written)["Telemetry"], json!({"enabled": true}));
}

#[test]
fn unknown_sections_are_dropped_by_default() {
    let text = r#"{"Telemetry": {"enabled": true}}"#;

    let cache = CacheCodec::new().from_json(Some(text)).unwrap();
    let written = CacheCodec::new().to_json(&cache).unwrap();

    assert!(parse(&written).get("Telemetry").is_none());
}

fn access_token_record_strategy() -> impl Strategy<Value = Map<String, Value>> {
    let wire_names: Vec<&'static str> = ACCESS_TOKEN_CACHE_MAPS.from_cache_map().keys().copied().collect();
    proptest::collection::btree_map(proptest::sample::select(wire_names), ".*", 0..13).prop_map(|fields| {
        fields
            .into_iter()
            .map(|(name, value)| (name.to_owned(), Value::String(value)))
            .collect()
    })
}

proptest! {
    #[test]
    fn access_token_round_trip_law(record in access_token_record_strategy()) {
        let text = Value::Object(record.clone()).to_string();

        let token = deserialize_entity::<AccessTokenEntity>("k", &text).unwrap();
        let written = parse(&serialize_entity(&token).unwrap());

        prop_assert_eq!(written, Value::Object(record));
    }
}
