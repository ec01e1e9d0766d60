use crate::cache::entity::{field, join_key, CacheEntity, EntityKind, FieldBinding};
use crate::serializer::json_keys::{RenameTable, ACCOUNT_CACHE_MAPS};

/// Signed-in account as stored in the `Account` section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountEntity {
    pub home_account_id: Option<String>,
    pub environment: Option<String>,
    pub realm: Option<String>,
    pub local_account_id: Option<String>,
    pub username: Option<String>,
    pub authority_type: Option<String>,
    pub name: Option<String>,
    pub client_info: Option<String>,
    pub last_modification_time: Option<String>,
    pub last_modification_app: Option<String>,
}

static ACCOUNT_FIELDS: [FieldBinding<AccountEntity>; 10] = [
    field!(AccountEntity, "homeAccountId", home_account_id),
    field!(AccountEntity, "environment", environment),
    field!(AccountEntity, "realm", realm),
    field!(AccountEntity, "localAccountId", local_account_id),
    field!(AccountEntity, "username", username),
    field!(AccountEntity, "authorityType", authority_type),
    field!(AccountEntity, "name", name),
    field!(AccountEntity, "clientInfo", client_info),
    field!(AccountEntity, "lastModificationTime", last_modification_time),
    field!(AccountEntity, "lastModificationApp", last_modification_app),
];

impl CacheEntity for AccountEntity {
    const KIND: EntityKind = EntityKind::Account;

    fn rename_table() -> &'static RenameTable {
        &ACCOUNT_CACHE_MAPS
    }

    fn fields() -> &'static [FieldBinding<Self>] {
        &ACCOUNT_FIELDS
    }

    /// `homeAccountId-environment-realm`, lower-cased
    fn cache_key(&self) -> String {
        join_key(&[
            self.home_account_id.as_ref(),
            self.environment.as_ref(),
            self.realm.as_ref(),
        ])
    }
}
