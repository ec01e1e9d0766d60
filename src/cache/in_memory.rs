use std::collections::HashMap;

use crate::cache::account::AccountEntity;
use crate::cache::app_metadata::AppMetadataEntity;
use crate::cache::credential::{AccessTokenEntity, IdTokenEntity, RefreshTokenEntity};
use crate::cache::entity::EntityKind;

/// cache key -> entity, one map per section
pub type AccountCache = HashMap<String, AccountEntity>;
pub type IdTokenCache = HashMap<String, IdTokenEntity>;
pub type AccessTokenCache = HashMap<String, AccessTokenEntity>;
pub type RefreshTokenCache = HashMap<String, RefreshTokenEntity>;
pub type AppMetadataCache = HashMap<String, AppMetadataEntity>;

/// Fully hydrated token cache. Owned entirely by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryCache {
    pub accounts: AccountCache,
    pub id_tokens: IdTokenCache,
    pub access_tokens: AccessTokenCache,
    pub refresh_tokens: RefreshTokenCache,
    pub app_metadata: AppMetadataCache,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entities held in one section.
    pub fn section_len(&self, kind: EntityKind) -> usize {
        match kind {
            EntityKind::Account => self.accounts.len(),
            EntityKind::IdToken => self.id_tokens.len(),
            EntityKind::AccessToken => self.access_tokens.len(),
            EntityKind::RefreshToken => self.refresh_tokens.len(),
            EntityKind::AppMetadata => self.app_metadata.len(),
        }
    }

    /// Total number of entities across all sections.
    pub fn len(&self) -> usize {
        EntityKind::ALL.iter().map(|k| self.section_len(*k)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
