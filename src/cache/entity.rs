use std::fmt;

use serde_json::Value;

use crate::serializer::json_keys::RenameTable;

/// The five record kinds stored in a token cache document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Account,
    IdToken,
    AccessToken,
    RefreshToken,
    AppMetadata,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Account,
        EntityKind::IdToken,
        EntityKind::AccessToken,
        EntityKind::RefreshToken,
        EntityKind::AppMetadata,
    ];

    /// Top-level key of the section holding this kind in the JSON document.
    pub fn section_name(&self) -> &'static str {
        match *self {
            EntityKind::Account => "Account",
            EntityKind::IdToken => "IdToken",
            EntityKind::AccessToken => "AccessToken",
            EntityKind::RefreshToken => "RefreshToken",
            EntityKind::AppMetadata => "AppMetadata",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.section_name())
    }
}

/// Typed accessor pair for one internal field of an entity.
pub struct FieldBinding<E> {
    pub name: &'static str,
    pub get: fn(&E) -> Option<&String>,
    pub set: fn(&mut E, String),
}

/// Builds a `FieldBinding` for an `Option<String>` field.
///
/// `field!(AccountEntity, "homeAccountId", home_account_id)`
macro_rules! field {
    ($entity:ty, $name:literal, $field:ident) => {
        $crate::cache::entity::FieldBinding::<$entity> {
            name: $name,
            get: |e: &$entity| e.$field.as_ref(),
            set: |e: &mut $entity, v: String| e.$field = Some(v),
        }
    };
}
pub(crate) use field;

/// A record kind that can be hydrated from and flattened to the wire format.
///
/// Every field holds the wire value as text. Numbers and booleans are kept in
/// their JSON text form and written back as strings; arrays and objects are
/// not stored, so they do not survive a read/write cycle.
pub trait CacheEntity: Default + Clone + fmt::Debug + 'static {
    const KIND: EntityKind;

    /// Wire name <-> internal name table for this kind.
    fn rename_table() -> &'static RenameTable;

    /// Internal fields with their typed accessors.
    fn fields() -> &'static [FieldBinding<Self>];

    /// Key derived from the entity's identifying attributes.
    fn cache_key(&self) -> String;

    /// Assigns `value` to the internal field `name`.
    ///
    /// Returns `false` when the field is unknown or the value has a shape
    /// that cannot be stored on a string field.
    fn set_field(&mut self, name: &str, value: &Value) -> bool {
        let Some(binding) = Self::fields().iter().find(|b| b.name == name) else {
            return false;
        };
        match value {
            Value::String(s) => (binding.set)(self, s.to_owned()),
            Value::Number(n) => (binding.set)(self, n.to_string()),
            Value::Bool(b) => (binding.set)(self, b.to_string()),
            Value::Null => {}
            Value::Array(_) | Value::Object(_) => return false,
        }
        true
    }

    /// Internal name -> value for every field that is set.
    fn to_record(&self) -> serde_json::Map<String, Value> {
        Self::fields()
            .iter()
            .filter_map(|b| (b.get)(self).map(|v| (b.name.to_owned(), Value::String(v.to_owned()))))
            .collect()
    }
}

/// Joins key parts with `-` and lower-cases the result.
pub(crate) fn join_key(parts: &[Option<&String>]) -> String {
    parts
        .iter()
        .map(|p| p.map(|s| s.as_str()).unwrap_or(""))
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
