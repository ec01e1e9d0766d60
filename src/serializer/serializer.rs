use std::collections::HashMap;

use serde_json::Value;

use crate::cache::entity::{CacheEntity, EntityKind};
use crate::cache::in_memory::{
    AccessTokenCache, AccountCache, AppMetadataCache, IdTokenCache, InMemoryCache, RefreshTokenCache,
};
use crate::error::{CacheError, CacheResult};
use crate::serializer::hydrator::dehydrate;
use crate::serializer::rename::rename_keys;
use crate::serializer::types::{JsonCache, StringDict};

/// Encode one entity as a JSON record using wire field names.
pub fn serialize_entity<E: CacheEntity>(entity: &E) -> CacheResult<String> {
    let record = rename_keys(dehydrate(entity), E::rename_table().to_cache_map());
    serde_json::to_string(&Value::Object(record)).map_err(CacheError::Serialize)
}

pub fn serialize_section<E: CacheEntity>(entities: &HashMap<String, E>) -> CacheResult<StringDict> {
    entities
        .iter()
        .map(|(key, entity)| serialize_entity(entity).map(|record| (key.to_owned(), record)))
        .collect()
}

pub fn serialize_accounts(accounts: &AccountCache) -> CacheResult<StringDict> {
    serialize_section(accounts)
}

pub fn serialize_id_tokens(id_tokens: &IdTokenCache) -> CacheResult<StringDict> {
    serialize_section(id_tokens)
}

pub fn serialize_access_tokens(access_tokens: &AccessTokenCache) -> CacheResult<StringDict> {
    serialize_section(access_tokens)
}

pub fn serialize_refresh_tokens(refresh_tokens: &RefreshTokenCache) -> CacheResult<StringDict> {
    serialize_section(refresh_tokens)
}

pub fn serialize_app_metadata(app_metadata: &AppMetadataCache) -> CacheResult<StringDict> {
    serialize_section(app_metadata)
}

/// Flatten every section of `in_memory_cache`. Empty sections are still written.
pub fn serialize_all_cache(in_memory_cache: &InMemoryCache) -> CacheResult<JsonCache> {
    let mut json_cache = JsonCache::default();
    json_cache.set_section(EntityKind::Account, serialize_accounts(&in_memory_cache.accounts)?);
    json_cache.set_section(EntityKind::IdToken, serialize_id_tokens(&in_memory_cache.id_tokens)?);
    json_cache.set_section(EntityKind::AccessToken, serialize_access_tokens(&in_memory_cache.access_tokens)?);
    json_cache.set_section(EntityKind::RefreshToken, serialize_refresh_tokens(&in_memory_cache.refresh_tokens)?);
    json_cache.set_section(EntityKind::AppMetadata, serialize_app_metadata(&in_memory_cache.app_metadata)?);
    Ok(json_cache)
}

/// Render the document as JSON text.
pub fn serialize_json_blob(json_cache: &JsonCache, pretty: bool) -> CacheResult<String> {
    let encoded = if pretty {
        serde_json::to_string_pretty(json_cache)
    } else {
        serde_json::to_string(json_cache)
    };
    encoded.map_err(CacheError::Serialize)
}
