//! Wire field dictionaries for every cache section.
//!
//! Each table pairs the snake_case name written to disk (shared with the
//! other SDKs reading the same file) with the internal field name of the
//! entity. Tables are built once and only read afterwards.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Wire name -> internal name, plus the inverse used when writing.
#[derive(Debug)]
pub struct RenameTable {
    from_cache: HashMap<&'static str, &'static str>,
    to_cache: HashMap<&'static str, &'static str>,
    pairs: usize,
}

impl RenameTable {
    pub fn new(pairs: &[(&'static str, &'static str)]) -> Self {
        let from_cache: HashMap<_, _> = pairs.iter().copied().collect();
        let to_cache: HashMap<_, _> = pairs.iter().map(|(wire, internal)| (*internal, *wire)).collect();
        Self { from_cache, to_cache, pairs: pairs.len() }
    }

    /// Mapping used when reading: wire name -> internal name.
    pub fn from_cache_map(&self) -> &HashMap<&'static str, &'static str> {
        &self.from_cache
    }

    /// Mapping used when writing: internal name -> wire name.
    pub fn to_cache_map(&self) -> &HashMap<&'static str, &'static str> {
        &self.to_cache
    }

    /// True when no wire name or internal name was declared twice.
    pub fn is_bijection(&self) -> bool {
        self.from_cache.len() == self.pairs && self.to_cache.len() == self.pairs
    }

    pub fn len(&self) -> usize {
        self.from_cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.from_cache.is_empty()
    }
}

pub static ACCOUNT_CACHE_MAPS: Lazy<RenameTable> = Lazy::new(|| {
    RenameTable::new(&[
        ("home_account_id", "homeAccountId"),
        ("environment", "environment"),
        ("realm", "realm"),
        ("local_account_id", "localAccountId"),
        ("username", "username"),
        ("authority_type", "authorityType"),
        ("name", "name"),
        ("client_info", "clientInfo"),
        ("last_modification_time", "lastModificationTime"),
        ("last_modification_app", "lastModificationApp"),
    ])
});

pub static ID_TOKEN_CACHE_MAPS: Lazy<RenameTable> = Lazy::new(|| {
    RenameTable::new(&[
        ("home_account_id", "homeAccountId"),
        ("environment", "environment"),
        ("credential_type", "credentialType"),
        ("client_id", "clientId"),
        ("secret", "secret"),
        ("realm", "realm"),
    ])
});

pub static ACCESS_TOKEN_CACHE_MAPS: Lazy<RenameTable> = Lazy::new(|| {
    RenameTable::new(&[
        ("home_account_id", "homeAccountId"),
        ("environment", "environment"),
        ("credential_type", "credentialType"),
        ("client_id", "clientId"),
        ("secret", "secret"),
        ("realm", "realm"),
        ("target", "target"),
        ("cached_at", "cachedAt"),
        ("expires_on", "expiresOn"),
        ("extended_expires_on", "extendedExpiresOn"),
        ("refresh_on", "refreshOn"),
        ("key_id", "keyId"),
        ("token_type", "tokenType"),
    ])
});

pub static REFRESH_TOKEN_CACHE_MAPS: Lazy<RenameTable> = Lazy::new(|| {
    RenameTable::new(&[
        ("home_account_id", "homeAccountId"),
        ("environment", "environment"),
        ("credential_type", "credentialType"),
        ("client_id", "clientId"),
        ("secret", "secret"),
        ("family_id", "familyId"),
        ("target", "target"),
        ("realm", "realm"),
    ])
});

pub static APP_METADATA_CACHE_MAPS: Lazy<RenameTable> = Lazy::new(|| {
    RenameTable::new(&[
        ("client_id", "clientId"),
        ("environment", "environment"),
        ("family_id", "familyId"),
    ])
});
