use serde_json::{Map, Value};
use tracing::trace;

use crate::cache::entity::CacheEntity;

/// Builds a fresh entity from a record that already uses internal field names.
///
/// Unknown fields and values that do not fit a string field are skipped;
/// fields missing from `renamed` keep their default.
pub fn hydrate<E: CacheEntity>(renamed: &Map<String, Value>) -> E {
    let mut entity = E::default();
    for (name, value) in renamed {
        if !entity.set_field(name, value) {
            trace!(kind = %E::KIND, field = %name, "field not assigned");
        }
    }
    entity
}

/// Inverse of [`hydrate`]: internal name -> value for every set field.
pub fn dehydrate<E: CacheEntity>(entity: &E) -> Map<String, Value> {
    entity.to_record()
}
