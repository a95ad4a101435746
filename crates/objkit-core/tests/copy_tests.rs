mod common;

use chrono::{Duration, Utc};
use common::{map, ATTR_NAMES};
use objkit_core::{copy_object, copy_objects, copy_value, Map, Value};
use serde_json::json;

#[test]
fn test_copy_value_array_is_independent() {
    let original = Value::from(json!(["arpel", 1, 3]));
    let mut copy = copy_value(&original);

    assert_eq!(copy, original);

    copy.as_array_mut().unwrap().push(Value::from(5));

    assert_ne!(copy, original);
    assert_eq!(original.as_array().unwrap().len(), 3);
}

#[test]
fn test_copy_value_date_is_independent() {
    let now = Utc::now();
    let original = Value::from(now);
    let mut copy = copy_value(&original);

    assert_eq!(copy, original);

    if let Value::Date(date) = &mut copy {
        *date -= Duration::days(365 * 100);
    }

    assert_ne!(copy, original);
    assert_eq!(original.as_date(), Some(now));
}

#[test]
fn test_copy_value_object_detaches_nested_sequences() {
    let mut original = Value::from(json!({"a": 1, "b": "2", "c": [3, "4"], "e": {"a": 1}}));
    original
        .as_object_mut()
        .unwrap()
        .insert("d".to_string(), Value::from(Utc::now()));

    let mut source = original.clone();
    let copy = copy_value(&source);
    assert_eq!(copy, original);

    source
        .as_object_mut()
        .unwrap()
        .get_mut("c")
        .and_then(Value::as_array_mut)
        .unwrap()
        .push(Value::from(5));

    assert_ne!(copy.get("c"), source.get("c"));
    assert_eq!(copy.get("c"), original.get("c"));
}

#[test]
fn test_copy_value_sequence_elements_stay_shared() {
    let element = Value::from(json!({"k": 1}));
    let original = Value::array(vec![element.clone()]);

    let copy = copy_value(&original);

    assert!(!copy.shares_storage(&original));
    assert!(copy.as_array().unwrap()[0].shares_storage(&element));
}

#[test]
fn test_copy_object_with_present_attrs() {
    let object = map(json!({"a": "0-a", "b": "1-b", "c": "2-c", "d": "3-d"}));
    let attrs = &ATTR_NAMES[..2];

    let copy = copy_object(Some(&object), attrs);

    assert_eq!(copy.keys().map(String::as_str).collect::<Vec<_>>(), attrs);
}

#[test]
fn test_copy_object_with_missing_attrs() {
    let object = map(json!({"a": "0-a"}));

    let copy = copy_object(Some(&object), &["zaza", "epral"]);

    assert_eq!(copy.len(), 2);
    assert_eq!(copy["zaza"], Value::Null);
    assert_eq!(copy["epral"], Value::Null);
}

#[test]
fn test_copy_object_without_attrs_equals_source() {
    let object = map(json!({"a": "0-a", "b": "1-b"}));
    assert_eq!(copy_object(Some(&object), &[]), object);
}

#[test]
fn test_copy_object_without_attrs_shares_nested_values() {
    let object = map(json!({"list": [1], "obj": {"x": 1}}));

    let mut copy = copy_object(Some(&object), &[]);

    assert!(copy["list"].shares_storage(&object["list"]));
    assert!(copy["obj"].shares_storage(&object["obj"]));

    // shared storage still never leaks writes
    copy.get_mut("list")
        .and_then(Value::as_array_mut)
        .unwrap()
        .push(Value::from(2));
    assert_eq!(object["list"].as_array().unwrap().len(), 1);
}

#[test]
fn test_copy_object_with_attrs_detaches_listed_values() {
    let object = map(json!({"list": [1], "obj": {"x": [1]}}));

    let copy = copy_object(Some(&object), &["list", "obj"]);

    assert!(!copy["list"].shares_storage(&object["list"]));
    assert!(!copy["obj"].shares_storage(&object["obj"]));
    assert!(!copy["obj"]
        .get("x")
        .unwrap()
        .shares_storage(object["obj"].get("x").unwrap()));
}

#[test]
fn test_copy_object_deeply_nested() {
    let mut object = map(json!({"a": "0-a"}));
    for _ in 0..3 {
        let mut outer = object.clone();
        outer.insert("object".to_string(), Value::object(object));
        object = outer;
    }

    assert_eq!(copy_object(Some(&object), &[]), object);
}

#[test]
fn test_copy_object_of_absent_object() {
    assert_eq!(copy_object(None, &[]), Map::new());
    let copy = copy_object(None, &ATTR_NAMES[..2]);
    assert_eq!(copy.keys().map(String::as_str).collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn test_copy_objects_restricts_every_element() {
    let objects: Vec<Map> = ATTR_NAMES
        .iter()
        .enumerate()
        .map(|(index, attr)| {
            let mut object = Map::new();
            object.insert(attr.to_string(), Value::from(format!("{index}-{attr}")));
            object
        })
        .collect();

    let copies = copy_objects(Some(&objects), &["zaza", "epral"]);

    assert_eq!(copies.len(), objects.len());
    assert!(copies
        .iter()
        .all(|c| c.keys().map(String::as_str).collect::<Vec<_>>() == ["zaza", "epral"]));
}

#[test]
fn test_copy_objects_without_attrs_equals_source() {
    let objects = vec![map(json!({"a": 1})), map(json!({"b": 2}))];
    assert_eq!(copy_objects(Some(&objects), &[]), objects);
}

#[test]
fn test_copy_objects_of_absent_sequence() {
    assert!(copy_objects(None, &[]).is_empty());
    assert!(copy_objects(None, &["a", "b"]).is_empty());
}
