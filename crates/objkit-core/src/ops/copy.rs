//! Copy operations.
//!
//! How deep each operation copies:
//!
//! | Operation | Fresh storage | Still shared |
//! |---|---|---|
//! | `copy_value` on a sequence | the sequence | its elements |
//! | `copy_value` on a mapping | every nested mapping | elements of nested sequences |
//! | `copy_object` without names | the top-level map | every attribute value |
//! | `copy_object` with names | the top-level map | per `copy_value` of each listed value |
//!
//! Sharing is never a correctness hazard: writes go through copy-on-write.

use crate::model::{Map, Value};
use std::sync::Arc;

/// Copy a value without sharing container storage with the input
///
/// Scalars and callables are returned as-is. Dates are copied by instant.
/// Sequences get new storage holding the same elements (one level only).
/// Mappings are rebuilt recursively through this same function.
pub fn copy_value(value: &Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(Arc::new(items.as_ref().clone())),
        Value::Object(map) => Value::object(copy_map(map)),
        Value::Date(date) => Value::Date(*date),
        Value::Null
        | Value::Bool(_)
        | Value::Number(_)
        | Value::String(_)
        | Value::Function(_) => value.clone(),
    }
}

fn copy_map(map: &Map) -> Map {
    map.iter()
        .map(|(name, value)| (name.clone(), copy_value(value)))
        .collect()
}

/// Copy a mapping, optionally keeping only the listed attributes
///
/// With no names this is a shallow copy: a fresh map whose values are shared
/// with the input. With names the result holds exactly those attributes, in
/// list order, each passed through [`copy_value`]; a name missing from the
/// input maps to `Null`. An absent object is treated as empty.
pub fn copy_object(object: Option<&Map>, attr_names: &[&str]) -> Map {
    let empty = Map::new();
    let object = object.unwrap_or(&empty);

    if attr_names.is_empty() {
        return object.clone();
    }

    attr_names
        .iter()
        .map(|&name| {
            let value = object.get(name).map(copy_value).unwrap_or(Value::Null);
            (name.to_string(), value)
        })
        .collect()
}

/// Apply [`copy_object`] to every mapping in a sequence
///
/// Absent input yields an empty vector.
pub fn copy_objects(objects: Option<&[Map]>, attr_names: &[&str]) -> Vec<Map> {
    objects
        .unwrap_or_default()
        .iter()
        .map(|object| copy_object(Some(object), attr_names))
        .collect()
}
