//! # Token Cache Schema Library
//!
//! Maps the JSON token cache document shared between SDKs to typed
//! in-memory cache entities, and back.
//!
//! Modules:
//! - `cache` — account, credential and app metadata entities, in-memory cache
//! - `serializer` — rename tables, hydration, deserializer and serializer
//! - `config` — YAML configuration of the `token-cache` tool
//! - `utils` — logging setup

pub mod cache;
pub mod config;
pub mod error;
pub mod serializer;
pub mod utils;

#[cfg(test)]
mod tests;

pub use crate::cache::account::AccountEntity;
pub use crate::cache::app_metadata::AppMetadataEntity;
pub use crate::cache::credential::{AccessTokenEntity, IdTokenEntity, RefreshTokenEntity};
pub use crate::cache::entity::{CacheEntity, EntityKind};
pub use crate::cache::in_memory::InMemoryCache;
pub use crate::error::{CacheError, CacheResult};
pub use crate::serializer::codec::CacheCodec;
pub use crate::serializer::deserializer::{deserialize_all_cache, deserialize_json_blob, deserialize_section};
pub use crate::serializer::serializer::{serialize_all_cache, serialize_json_blob, serialize_section};
pub use crate::serializer::types::{JsonCache, StringDict};
