use serde_json::{Map, Value};

use crate::cache::in_memory::InMemoryCache;
use crate::error::CacheResult;
use crate::serializer::deserializer::{deserialize_all_cache, deserialize_json_blob};
use crate::serializer::serializer::{serialize_all_cache, serialize_json_blob};

/// Text <-> [`InMemoryCache`] in one call each way.
///
/// Top-level keys the schema does not know are not part of the in-memory
/// cache; pass them back through `with_extra_sections` to keep them on write.
#[derive(Debug, Clone, Default)]
pub struct CacheCodec {
    pretty: bool,
    extra_sections: Map<String, Value>,
}

impl CacheCodec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_extra_sections(mut self, extra_sections: Map<String, Value>) -> Self {
        self.extra_sections = extra_sections;
        self
    }

    pub fn from_json(&self, json_file: Option<&str>) -> CacheResult<InMemoryCache> {
        self.read(json_file).map(|(cache, _)| cache)
    }

    /// Like [`CacheCodec::from_json`], also returning the unknown top-level keys.
    pub fn read(&self, json_file: Option<&str>) -> CacheResult<(InMemoryCache, Map<String, Value>)> {
        let json_cache = deserialize_json_blob(json_file)?;
        let cache = deserialize_all_cache(&json_cache)?;
        Ok((cache, json_cache.extra))
    }

    pub fn to_json(&self, in_memory_cache: &InMemoryCache) -> CacheResult<String> {
        let mut json_cache = serialize_all_cache(in_memory_cache)?;
        json_cache.extra = self.extra_sections.clone();
        serialize_json_blob(&json_cache, self.pretty)
    }
}
