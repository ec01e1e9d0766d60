use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::cache::entity::EntityKind;

/// cache key -> JSON encoded record
pub type StringDict = BTreeMap<String, String>;

/// The cache document as it is written to disk.
///
/// Sections that are absent (or `null`) read as `None`. Top-level keys that
/// are not one of the five sections are kept in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JsonCache {
    #[serde(rename = "Account", skip_serializing_if = "Option::is_none")]
    pub account: Option<StringDict>,
    #[serde(rename = "IdToken", skip_serializing_if = "Option::is_none")]
    pub id_token: Option<StringDict>,
    #[serde(rename = "AccessToken", skip_serializing_if = "Option::is_none")]
    pub access_token: Option<StringDict>,
    #[serde(rename = "RefreshToken", skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<StringDict>,
    #[serde(rename = "AppMetadata", skip_serializing_if = "Option::is_none")]
    pub app_metadata: Option<StringDict>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl JsonCache {
    /// Splits a parsed top-level object into the five sections and `extra`.
    ///
    /// A repeated key has already been collapsed by the parser (last one wins).
    pub fn from_document(mut document: Map<String, Value>) -> Result<Self, serde_json::Error> {
        let mut json_cache = JsonCache::default();
        for kind in EntityKind::ALL {
            let Some(section) = document.remove(kind.section_name()) else {
                continue;
            };
            if let Some(records) = serde_json::from_value::<Option<StringDict>>(section)? {
                json_cache.set_section(kind, records);
            }
        }
        json_cache.extra = document;
        Ok(json_cache)
    }

    pub fn section(&self, kind: EntityKind) -> Option<&StringDict> {
        match kind {
            EntityKind::Account => self.account.as_ref(),
            EntityKind::IdToken => self.id_token.as_ref(),
            EntityKind::AccessToken => self.access_token.as_ref(),
            EntityKind::RefreshToken => self.refresh_token.as_ref(),
            EntityKind::AppMetadata => self.app_metadata.as_ref(),
        }
    }

    pub fn set_section(&mut self, kind: EntityKind, records: StringDict) {
        let slot = match kind {
            EntityKind::Account => &mut self.account,
            EntityKind::IdToken => &mut self.id_token,
            EntityKind::AccessToken => &mut self.access_token,
            EntityKind::RefreshToken => &mut self.refresh_token,
            EntityKind::AppMetadata => &mut self.app_metadata,
        };
        *slot = Some(records);
    }

    /// True when no section and no unknown key is present.
    pub fn is_empty(&self) -> bool {
        EntityKind::ALL.iter().all(|k| self.section(*k).is_none()) && self.extra.is_empty()
    }
}
