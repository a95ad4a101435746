//! Diff computation.
//!
//! The core entry point is [`get_object_diff`], which scopes two mappings
//! according to [`CompareOptions`] and reports their differences.

use crate::diff::model::{DiffEntry, DiffKind, ObjectDiff, PathSegment};
use crate::model::{CompareOptions, Map, Value};
use crate::ops::compare::deep_equal;
use crate::{log_op_end, log_op_start};
use std::sync::Arc;

/// Compute the differences between two mappings
///
/// With `attr_names` set, both sides are reduced to exactly those attributes
/// first; an attribute missing on one side is reported as `New` or `Deleted`.
/// Without it the full mappings are compared. Absent inputs count as empty.
///
/// Returns `None` when the scoped mappings are structurally identical.
pub fn get_object_diff(
    lhs: Option<&Map>,
    rhs: Option<&Map>,
    options: &CompareOptions,
) -> ObjectDiff {
    log_op_start!(
        "get_object_diff",
        attr_count = options.attr_names.len() as u64,
        strict = options.strict
    );
    let start = std::time::Instant::now();

    let empty = Map::new();
    let lhs = lhs.unwrap_or(&empty);
    let rhs = rhs.unwrap_or(&empty);

    let mut entries = Vec::new();
    if options.is_restricted() {
        let lhs_scoped = scope(lhs, &options.attr_names);
        let rhs_scoped = scope(rhs, &options.attr_names);
        diff_maps(&lhs_scoped, &rhs_scoped, &mut Vec::new(), options.strict, &mut entries);
    } else {
        diff_maps(lhs, rhs, &mut Vec::new(), options.strict, &mut entries);
    }

    log_op_end!(
        "get_object_diff",
        duration_ms = start.elapsed().as_millis() as u64,
        diff_len = entries.len() as u64
    );

    if entries.is_empty() {
        None
    } else {
        Some(entries)
    }
}

/// Compute the differences between two arbitrary values
///
/// Two unequal scalars (or values of different shapes) produce a single
/// `Edit` with an empty path. Returns an empty vector when equal.
pub fn diff_values(lhs: &Value, rhs: &Value, strict: bool) -> Vec<DiffEntry> {
    let mut entries = Vec::new();
    walk(lhs, rhs, &mut Vec::new(), strict, &mut entries);
    entries
}

fn scope(map: &Map, attr_names: &[String]) -> Map {
    attr_names
        .iter()
        .filter_map(|name| map.get(name).map(|v| (name.clone(), v.clone())))
        .collect()
}

fn walk(
    lhs: &Value,
    rhs: &Value,
    path: &mut Vec<PathSegment>,
    strict: bool,
    out: &mut Vec<DiffEntry>,
) {
    match (lhs, rhs) {
        (Value::Object(a), Value::Object(b)) => {
            if !Arc::ptr_eq(a, b) {
                diff_maps(a, b, path, strict, out);
            }
        }
        (Value::Array(a), Value::Array(b)) => {
            if !Arc::ptr_eq(a, b) {
                diff_sequences(a, b, path, strict, out);
            }
        }
        _ => {
            if !deep_equal(lhs, rhs, strict) {
                out.push(DiffEntry::new(
                    path.clone(),
                    DiffKind::Edit {
                        lhs: lhs.clone(),
                        rhs: rhs.clone(),
                    },
                ));
            }
        }
    }
}

fn diff_maps(
    lhs: &Map,
    rhs: &Map,
    path: &mut Vec<PathSegment>,
    strict: bool,
    out: &mut Vec<DiffEntry>,
) {
    for (name, left) in lhs {
        path.push(PathSegment::Key(name.clone()));
        match rhs.get(name) {
            Some(right) => walk(left, right, path, strict, out),
            None => out.push(DiffEntry::new(
                path.clone(),
                DiffKind::Deleted { lhs: left.clone() },
            )),
        }
        path.pop();
    }

    for (name, right) in rhs.iter().filter(|(name, _)| !lhs.contains_key(*name)) {
        path.push(PathSegment::Key(name.clone()));
        out.push(DiffEntry::new(
            path.clone(),
            DiffKind::New { rhs: right.clone() },
        ));
        path.pop();
    }
}

fn diff_sequences(
    lhs: &[Value],
    rhs: &[Value],
    path: &mut Vec<PathSegment>,
    strict: bool,
    out: &mut Vec<DiffEntry>,
) {
    for (index, left) in lhs.iter().enumerate() {
        match rhs.get(index) {
            Some(right) => {
                path.push(PathSegment::Index(index));
                walk(left, right, path, strict, out);
                path.pop();
            }
            None => out.push(DiffEntry::new(
                path.clone(),
                DiffKind::Array {
                    index,
                    item: Box::new(DiffKind::Deleted { lhs: left.clone() }),
                },
            )),
        }
    }

    for (index, right) in rhs.iter().enumerate().skip(lhs.len()) {
        out.push(DiffEntry::new(
            path.clone(),
            DiffKind::Array {
                index,
                item: Box::new(DiffKind::New { rhs: right.clone() }),
            },
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: serde_json::Value) -> Value {
        Value::from(value)
    }

    #[test]
    fn test_scalar_edit_has_empty_path() {
        let entries = diff_values(&Value::from(1), &Value::from(2), true);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].path.is_empty());
        assert_eq!(entries[0].kind.code(), 'E');
    }

    #[test]
    fn test_loose_mode_ignores_coercible_scalars() {
        assert!(diff_values(&Value::from(1), &Value::from("1"), false).is_empty());
        assert_eq!(diff_values(&Value::from(1), &Value::from("1"), true).len(), 1);
    }

    #[test]
    fn test_nested_paths() {
        let lhs = obj(json!({"a": {"b": [1, {"c": 1}]}}));
        let rhs = obj(json!({"a": {"b": [1, {"c": 2}]}}));

        let entries = diff_values(&lhs, &rhs, false);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path_string(), "a.b.1.c");
    }

    #[test]
    fn test_sequence_length_changes() {
        let lhs = obj(json!({"c": [1, "2", 3]}));
        let rhs = obj(json!({"c": [1]}));

        let entries = diff_values(&lhs, &rhs, false);

        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.path_string() == "c"));
        assert_eq!(
            entries[0].kind,
            DiffKind::Array {
                index: 1,
                item: Box::new(DiffKind::Deleted {
                    lhs: Value::from("2")
                })
            }
        );
    }

    #[test]
    fn test_added_and_removed_attributes() {
        let lhs = obj(json!({"a": 1, "gone": true}));
        let rhs = obj(json!({"a": 1, "fresh": null}));

        let entries = diff_values(&lhs, &rhs, false);

        let codes: Vec<_> = entries
            .iter()
            .map(|e| (e.path_string(), e.kind.code()))
            .collect();
        assert_eq!(
            codes,
            vec![("gone".to_string(), 'D'), ("fresh".to_string(), 'N')]
        );
    }

    #[test]
    fn test_shape_change_is_an_edit() {
        let entries = diff_values(&obj(json!({"a": [1]})), &obj(json!({"a": {"0": 1}})), false);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind.code(), 'E');
    }

    #[test]
    fn test_restricted_diff_reports_missing_attribute() {
        let lhs = obj(json!({"a": 1, "b": "B", "c": 3}));
        let rhs = obj(json!({"a": 2, "c": 4}));
        let options = CompareOptions::default().with_attr_names(["a", "b"]);

        let entries = get_object_diff(lhs.as_object(), rhs.as_object(), &options).unwrap();

        let codes: Vec<_> = entries
            .iter()
            .map(|e| (e.path_string(), e.kind.code()))
            .collect();
        assert_eq!(codes, vec![("a".to_string(), 'E'), ("b".to_string(), 'D')]);
    }

    #[test]
    fn test_absent_inputs_are_empty() {
        assert_eq!(get_object_diff(None, None, &CompareOptions::default()), None);
        let rhs = obj(json!({"a": 1}));
        let entries = get_object_diff(None, rhs.as_object(), &CompareOptions::default()).unwrap();
        assert_eq!(entries[0].kind.code(), 'N');
    }
}
