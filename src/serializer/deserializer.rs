use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::debug;

use crate::cache::account::AccountEntity;
use crate::cache::app_metadata::AppMetadataEntity;
use crate::cache::credential::{AccessTokenEntity, IdTokenEntity, RefreshTokenEntity};
use crate::cache::entity::{CacheEntity, EntityKind};
use crate::cache::in_memory::{
    AccessTokenCache, AccountCache, AppMetadataCache, IdTokenCache, InMemoryCache, RefreshTokenCache,
};
use crate::error::{CacheError, CacheResult};
use crate::serializer::hydrator::hydrate;
use crate::serializer::rename::rename_keys;
use crate::serializer::types::{JsonCache, StringDict};

/// Parse the raw cache text into a [`JsonCache`].
///
/// Empty or absent text is an empty cache, anything else must be valid JSON.
pub fn deserialize_json_blob(json_file: Option<&str>) -> CacheResult<JsonCache> {
    match json_file {
        None => Ok(JsonCache::default()),
        Some(text) if text.is_empty() => Ok(JsonCache::default()),
        Some(text) => {
            let document: Map<String, Value> = serde_json::from_str(text).map_err(CacheError::Parse)?;
            JsonCache::from_document(document).map_err(CacheError::Parse)
        }
    }
}

/// Deserialize one record text of section `E` into an entity.
pub fn deserialize_entity<E: CacheEntity>(key: &str, record: &str) -> CacheResult<E> {
    let value: Value = serde_json::from_str(record).map_err(|source| CacheError::Record {
        section: E::KIND,
        key: key.to_owned(),
        source,
    })?;
    let Value::Object(fields) = value else {
        return Err(CacheError::RecordNotObject {
            section: E::KIND,
            key: key.to_owned(),
        });
    };
    let renamed = rename_keys(fields, E::rename_table().from_cache_map());
    Ok(hydrate::<E>(&renamed))
}

/// Deserialize every record of one section, keyed by its cache key.
///
/// The first malformed record fails the whole section.
pub fn deserialize_section<E: CacheEntity>(records: Option<&StringDict>) -> CacheResult<HashMap<String, E>> {
    let Some(records) = records else {
        return Ok(HashMap::new());
    };

    let mut entities = HashMap::with_capacity(records.len());
    for (key, record) in records {
        let entity = deserialize_entity::<E>(key, record)?;
        entities.insert(key.to_owned(), entity);
    }
    debug!(section = %E::KIND, count = entities.len(), "section deserialized");
    Ok(entities)
}

pub fn deserialize_accounts(accounts: Option<&StringDict>) -> CacheResult<AccountCache> {
    deserialize_section::<AccountEntity>(accounts)
}

pub fn deserialize_id_tokens(id_tokens: Option<&StringDict>) -> CacheResult<IdTokenCache> {
    deserialize_section::<IdTokenEntity>(id_tokens)
}

pub fn deserialize_access_tokens(access_tokens: Option<&StringDict>) -> CacheResult<AccessTokenCache> {
    deserialize_section::<AccessTokenEntity>(access_tokens)
}

pub fn deserialize_refresh_tokens(refresh_tokens: Option<&StringDict>) -> CacheResult<RefreshTokenCache> {
    deserialize_section::<RefreshTokenEntity>(refresh_tokens)
}

pub fn deserialize_app_metadata(app_metadata: Option<&StringDict>) -> CacheResult<AppMetadataCache> {
    deserialize_section::<AppMetadataEntity>(app_metadata)
}

/// Hydrate all five sections of `json_cache`. Missing sections come back empty.
pub fn deserialize_all_cache(json_cache: &JsonCache) -> CacheResult<InMemoryCache> {
    Ok(InMemoryCache {
        accounts: deserialize_accounts(json_cache.section(EntityKind::Account))?,
        id_tokens: deserialize_id_tokens(json_cache.section(EntityKind::IdToken))?,
        access_tokens: deserialize_access_tokens(json_cache.section(EntityKind::AccessToken))?,
        refresh_tokens: deserialize_refresh_tokens(json_cache.section(EntityKind::RefreshToken))?,
        app_metadata: deserialize_app_metadata(json_cache.section(EntityKind::AppMetadata))?,
    })
}
