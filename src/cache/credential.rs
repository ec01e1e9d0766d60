//! Credential records: id tokens, access tokens and refresh tokens.
//!
//! All three share the credential key layout
//! `homeAccountId-environment-credentialType-clientId-realm-target`.

use crate::cache::entity::{field, join_key, CacheEntity, EntityKind, FieldBinding};
use crate::serializer::json_keys::{
    RenameTable, ACCESS_TOKEN_CACHE_MAPS, ID_TOKEN_CACHE_MAPS, REFRESH_TOKEN_CACHE_MAPS,
};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdTokenEntity {
    pub home_account_id: Option<String>,
    pub environment: Option<String>,
    pub credential_type: Option<String>,
    pub client_id: Option<String>,
    pub secret: Option<String>,
    pub realm: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessTokenEntity {
    pub home_account_id: Option<String>,
    pub environment: Option<String>,
    pub credential_type: Option<String>,
    pub client_id: Option<String>,
    pub secret: Option<String>,
    pub realm: Option<String>,
    /// space separated scopes
    pub target: Option<String>,
    pub cached_at: Option<String>,
    pub expires_on: Option<String>,
    pub extended_expires_on: Option<String>,
    pub refresh_on: Option<String>,
    pub key_id: Option<String>,
    pub token_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RefreshTokenEntity {
    pub home_account_id: Option<String>,
    pub environment: Option<String>,
    pub credential_type: Option<String>,
    pub client_id: Option<String>,
    pub secret: Option<String>,
    /// set when the token is shared by a family of first party clients
    pub family_id: Option<String>,
    pub target: Option<String>,
    pub realm: Option<String>,
}

static ID_TOKEN_FIELDS: [FieldBinding<IdTokenEntity>; 6] = [
    field!(IdTokenEntity, "homeAccountId", home_account_id),
    field!(IdTokenEntity, "environment", environment),
    field!(IdTokenEntity, "credentialType", credential_type),
    field!(IdTokenEntity, "clientId", client_id),
    field!(IdTokenEntity, "secret", secret),
    field!(IdTokenEntity, "realm", realm),
];

static ACCESS_TOKEN_FIELDS: [FieldBinding<AccessTokenEntity>; 13] = [
    field!(AccessTokenEntity, "homeAccountId", home_account_id),
    field!(AccessTokenEntity, "environment", environment),
    field!(AccessTokenEntity, "credentialType", credential_type),
    field!(AccessTokenEntity, "clientId", client_id),
    field!(AccessTokenEntity, "secret", secret),
    field!(AccessTokenEntity, "realm", realm),
    field!(AccessTokenEntity, "target", target),
    field!(AccessTokenEntity, "cachedAt", cached_at),
    field!(AccessTokenEntity, "expiresOn", expires_on),
    field!(AccessTokenEntity, "extendedExpiresOn", extended_expires_on),
    field!(AccessTokenEntity, "refreshOn", refresh_on),
    field!(AccessTokenEntity, "keyId", key_id),
    field!(AccessTokenEntity, "tokenType", token_type),
];

static REFRESH_TOKEN_FIELDS: [FieldBinding<RefreshTokenEntity>; 8] = [
    field!(RefreshTokenEntity, "homeAccountId", home_account_id),
    field!(RefreshTokenEntity, "environment", environment),
    field!(RefreshTokenEntity, "credentialType", credential_type),
    field!(RefreshTokenEntity, "clientId", client_id),
    field!(RefreshTokenEntity, "secret", secret),
    field!(RefreshTokenEntity, "familyId", family_id),
    field!(RefreshTokenEntity, "target", target),
    field!(RefreshTokenEntity, "realm", realm),
];

impl CacheEntity for IdTokenEntity {
    const KIND: EntityKind = EntityKind::IdToken;

    fn rename_table() -> &'static RenameTable {
        &ID_TOKEN_CACHE_MAPS
    }

    fn fields() -> &'static [FieldBinding<Self>] {
        &ID_TOKEN_FIELDS
    }

    fn cache_key(&self) -> String {
        join_key(&[
            self.home_account_id.as_ref(),
            self.environment.as_ref(),
            self.credential_type.as_ref(),
            self.client_id.as_ref(),
            self.realm.as_ref(),
            None,
        ])
    }
}

impl CacheEntity for AccessTokenEntity {
    const KIND: EntityKind = EntityKind::AccessToken;

    fn rename_table() -> &'static RenameTable {
        &ACCESS_TOKEN_CACHE_MAPS
    }

    fn fields() -> &'static [FieldBinding<Self>] {
        &ACCESS_TOKEN_FIELDS
    }

    fn cache_key(&self) -> String {
        join_key(&[
            self.home_account_id.as_ref(),
            self.environment.as_ref(),
            self.credential_type.as_ref(),
            self.client_id.as_ref(),
            self.realm.as_ref(),
            self.target.as_ref(),
        ])
    }
}

impl CacheEntity for RefreshTokenEntity {
    const KIND: EntityKind = EntityKind::RefreshToken;

    fn rename_table() -> &'static RenameTable {
        &REFRESH_TOKEN_CACHE_MAPS
    }

    fn fields() -> &'static [FieldBinding<Self>] {
        &REFRESH_TOKEN_FIELDS
    }

    /// family tokens are keyed by family id instead of client id
    fn cache_key(&self) -> String {
        join_key(&[
            self.home_account_id.as_ref(),
            self.environment.as_ref(),
            self.credential_type.as_ref(),
            self.family_id.as_ref().or(self.client_id.as_ref()),
            self.realm.as_ref(),
            self.target.as_ref(),
        ])
    }
}
