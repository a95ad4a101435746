//! Attribute-level helpers.
//!
//! Every helper here walks the structured value directly. Attribute
//! discovery and extraction follow serialized order: a mapping's attributes in
//! insertion order, each one visited before the contents of its value.
//! Callable-valued attributes have no serialized form and are invisible to
//! discovery and extraction.

use crate::errors::{ObjKitError, Result};
use crate::model::{Map, PrivateAttrsOptions, Value};
use crate::{log_op_end, log_op_error, log_op_start};
use objkit_core_types::ValueKind;

/// Prefix every attribute name with `_`
///
/// Callable-valued attributes keep their name unless
/// `options.include_function` is set. Values are shared, not copied.
pub fn create_private_attributes(object: &Map, options: &PrivateAttrsOptions) -> Map {
    object
        .iter()
        .map(|(name, value)| {
            let name = if value.is_function() && !options.include_function {
                name.clone()
            } else {
                format!("_{}", name)
            };
            (name, value.clone())
        })
        .collect()
}

/// Drop every attribute whose value is of `kind`
///
/// Unless `only_shallow_attrs` is set, mapping-valued attributes that survive
/// are filtered the same way. Sequences are kept as they are. An absent object
/// yields an empty map.
///
/// # Errors
///
/// * `MissingTargetKind` - If `kind` is `None`
pub fn remove_attrs_by_type(
    object: Option<&Map>,
    kind: Option<ValueKind>,
    only_shallow_attrs: bool,
) -> Result<Map> {
    log_op_start!(
        "remove_attrs_by_type",
        target_kind = kind.map(|k| k.as_str()).unwrap_or("none"),
        only_shallow_attrs = only_shallow_attrs
    );
    let start = std::time::Instant::now();

    let Some(kind) = kind else {
        let err = ObjKitError::MissingTargetKind;
        log_op_error!(
            "remove_attrs_by_type",
            err.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        return Err(err);
    };

    let result = object
        .map(|map| retain_other_kinds(map, kind, only_shallow_attrs))
        .unwrap_or_default();

    log_op_end!(
        "remove_attrs_by_type",
        duration_ms = start.elapsed().as_millis() as u64,
        attr_count = result.len() as u64
    );

    Ok(result)
}

fn retain_other_kinds(map: &Map, kind: ValueKind, only_shallow_attrs: bool) -> Map {
    map.iter()
        .filter(|(_, value)| value.kind() != kind)
        .map(|(name, value)| {
            let value = match value {
                Value::Object(nested) if !only_shallow_attrs => {
                    Value::object(retain_other_kinds(nested, kind, false))
                }
                _ => value.clone(),
            };
            (name.clone(), value)
        })
        .collect()
}

/// Every attribute name in `value`, at any depth, in serialized order
///
/// Includes attributes of mappings held inside sequences. Returns `None` when
/// `value` is not a mapping.
pub fn attr_names(value: &Value) -> Option<Vec<String>> {
    let map = value.as_object()?;
    let mut names = Vec::new();
    collect_names(map, &mut names);
    Some(names)
}

fn collect_names(map: &Map, names: &mut Vec<String>) {
    for (name, value) in map.iter().filter(|(_, v)| !v.is_function()) {
        names.push(name.clone());
        collect_nested_names(value, names);
    }
}

fn collect_nested_names(value: &Value, names: &mut Vec<String>) {
    match value {
        Value::Object(map) => collect_names(map, names),
        Value::Array(items) => items
            .iter()
            .for_each(|item| collect_nested_names(item, names)),
        _ => {}
    }
}

/// Value of the attribute at ordinal position `index`
pub fn value_by_index(object: &Map, index: usize) -> Option<&Value> {
    object.get_index(index).map(|(_, value)| value)
}

/// First attribute called `name`, searching in serialized order
pub fn find_attr<'a>(object: &'a Map, name: &str) -> Option<&'a Value> {
    for (attr_name, value) in object.iter().filter(|(_, v)| !v.is_function()) {
        if attr_name == name {
            return Some(value);
        }
        if let Some(found) = find_in_value(value, name) {
            return Some(found);
        }
    }
    None
}

fn find_in_value<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    match value {
        Value::Object(map) => find_attr(map, name),
        Value::Array(items) => items.iter().find_map(|item| find_in_value(item, name)),
        _ => None,
    }
}

/// Serialized `"name":<json>` fragment of the first attribute called `name`
pub fn attr_string(object: &Map, name: &str) -> Option<String> {
    find_attr(object, name).map(|value| {
        format!(
            "{}:{}",
            serde_json::Value::String(name.to_string()),
            value.to_json()
        )
    })
}

/// True when every attribute name in `object`, at any depth, is in `allowed`
pub fn has_attrs_only(object: &Map, allowed: &[&str]) -> bool {
    let mut names = Vec::new();
    collect_names(object, &mut names);
    names.iter().all(|name| allowed.contains(&name.as_str()))
}

/// Copy of `object` without any attribute named in `attr_names`, at any depth
///
/// Mappings inside sequences are stripped too. An absent object yields an
/// empty map.
pub fn remove_deep_attrs(object: Option<&Map>, attr_names: &[&str]) -> Map {
    object
        .map(|map| strip_map(map, attr_names))
        .unwrap_or_default()
}

fn strip_map(map: &Map, attr_names: &[&str]) -> Map {
    map.iter()
        .filter(|(name, _)| !attr_names.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), strip_value(value, attr_names)))
        .collect()
}

fn strip_value(value: &Value, attr_names: &[&str]) -> Value {
    match value {
        Value::Object(map) => Value::object(strip_map(map, attr_names)),
        Value::Array(items) => Value::array(
            items
                .iter()
                .map(|item| strip_value(item, attr_names))
                .collect(),
        ),
        _ => value.clone(),
    }
}
