//! Helpers for the PHP-flavoured corners of the result document.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Removes `null` object members recursively so they decode like absent ones.
pub(crate) fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, member| !member.is_null());
            map.values_mut().for_each(strip_nulls);
        }
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {}
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum MapOrSeq<V> {
    Map(BTreeMap<String, V>),
    Seq(Vec<V>),
}

/// Accepts a JSON object or an array for a map-typed member.
///
/// PHP serializes an empty associative array as `[]`, and a list-shaped one as an array,
/// so array elements are keyed by their position.
pub(crate) fn map_or_seq<'de, D, V>(deserializer: D) -> Result<BTreeMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    Ok(match MapOrSeq::deserialize(deserializer)? {
        MapOrSeq::Map(map) => map,
        MapOrSeq::Seq(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index.to_string(), item))
            .collect(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Bool(bool),
    Int(i64),
}

/// Accepts `true`/`false` as well as the `0`/`1` integers older servers send.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match FlagRepr::deserialize(deserializer)? {
        FlagRepr::Bool(value) => value,
        FlagRepr::Int(value) => value != 0,
    })
}
