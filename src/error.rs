//! Error types for cache (de)serialization

use thiserror::Error;

use crate::cache::entity::EntityKind;

pub type CacheResult<T> = Result<T, CacheError>;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache document is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("{section} record '{key}' is not valid JSON: {source}")]
    Record {
        section: EntityKind,
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("{section} record '{key}' is not a JSON object")]
    RecordNotObject { section: EntityKind, key: String },

    #[error("failed to encode cache: {0}")]
    Serialize(#[source] serde_json::Error),
}
