use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::trace;

/// Renames the keys of `record` through `key_map`.
///
/// Keys missing from `key_map` are dropped; values are moved over unchanged.
pub fn rename_keys(record: Map<String, Value>, key_map: &HashMap<&'static str, &'static str>) -> Map<String, Value> {
    record
        .into_iter()
        .filter_map(|(key, value)| match key_map.get(key.as_str()) {
            Some(mapped) => Some(((*mapped).to_owned(), value)),
            None => {
                trace!(field = %key, "dropping field without mapping");
                None
            }
        })
        .collect()
}
