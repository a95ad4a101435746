//! Flattening nested attributes into a single-level mapping.

use super::copy::copy_value;
use crate::model::{Map, Value};

/// Collect attributes from every depth into one flat mapping
///
/// The walk is pre-order over nested mappings. An attribute is taken whole
/// (through [`copy_value`], without descending into it) when it is selected:
/// with no `attr_names` every non-mapping attribute is selected, otherwise
/// only attributes whose name is listed. Unselected mapping-valued attributes
/// are descended into, as are mappings held in unselected sequences; other
/// unselected attributes are dropped.
///
/// The first attribute with a given name keeps it. Later ones get the next
/// free numeric suffix: `id`, `id_1`, `id_2`, ...
pub fn flat_object(object: Option<&Map>, attr_names: &[&str]) -> Map {
    let mut flat = Map::new();
    if let Some(map) = object {
        collect(map, attr_names, &mut flat);
    }
    flat
}

fn collect(map: &Map, attr_names: &[&str], flat: &mut Map) {
    for (name, value) in map {
        let selected = if attr_names.is_empty() {
            !value.is_object()
        } else {
            attr_names.contains(&name.as_str())
        };

        if selected {
            insert_unique(flat, name, copy_value(value));
        } else {
            collect_nested(value, attr_names, flat);
        }
    }
}

fn collect_nested(value: &Value, attr_names: &[&str], flat: &mut Map) {
    match value {
        Value::Object(nested) => collect(nested, attr_names, flat),
        Value::Array(items) => items
            .iter()
            .for_each(|item| collect_nested(item, attr_names, flat)),
        _ => {}
    }
}

fn insert_unique(flat: &mut Map, name: &str, value: Value) {
    if !flat.contains_key(name) {
        flat.insert(name.to_string(), value);
        return;
    }

    let mut suffix = 1usize;
    loop {
        let candidate = format!("{}_{}", name, suffix);
        if !flat.contains_key(&candidate) {
            tracing::debug!(attr_name = %name, renamed = %candidate, "flattened attribute renamed");
            flat.insert(candidate, value);
            return;
        }
        suffix += 1;
    }
}
