use crate::cache::entity::{field, join_key, CacheEntity, EntityKind, FieldBinding};
use crate::serializer::json_keys::{RenameTable, APP_METADATA_CACHE_MAPS};

const APP_METADATA_KEY_PREFIX: &str = "appmetadata";

/// Per-client metadata, currently only the family membership.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppMetadataEntity {
    pub client_id: Option<String>,
    pub environment: Option<String>,
    pub family_id: Option<String>,
}

static APP_METADATA_FIELDS: [FieldBinding<AppMetadataEntity>; 3] = [
    field!(AppMetadataEntity, "clientId", client_id),
    field!(AppMetadataEntity, "environment", environment),
    field!(AppMetadataEntity, "familyId", family_id),
];

impl CacheEntity for AppMetadataEntity {
    const KIND: EntityKind = EntityKind::AppMetadata;

    fn rename_table() -> &'static RenameTable {
        &APP_METADATA_CACHE_MAPS
    }

    fn fields() -> &'static [FieldBinding<Self>] {
        &APP_METADATA_FIELDS
    }

    fn cache_key(&self) -> String {
        let prefix = APP_METADATA_KEY_PREFIX.to_owned();
        join_key(&[Some(&prefix), self.environment.as_ref(), self.client_id.as_ref()])
    }
}
