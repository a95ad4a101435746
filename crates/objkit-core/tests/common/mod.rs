use objkit_core::{Map, Value};

/// Attribute names used by the record fixtures
#[allow(dead_code)]
pub const ATTR_NAMES: [&str; 4] = ["a", "b", "c", "d"];

/// Build a flat record over `ATTR_NAMES` on top of `extra`
///
/// Even positions hold numbers, odd positions hold one-letter strings, so
/// every record mixes both scalar kinds.
#[allow(dead_code)]
pub fn default_record(extra: Map) -> Map {
    let mut record = extra;
    for (index, name) in ATTR_NAMES.iter().enumerate() {
        let code = 65 + index as u32;
        let value = if index % 2 == 0 {
            Value::from(code)
        } else {
            Value::from(char::from_u32(code).unwrap_or('?').to_string())
        };
        record.insert((*name).to_string(), value);
    }
    record
}

/// Copy of `record` whose first attribute is doubled (`n + n` or `s + s`)
#[allow(dead_code)]
pub fn changed_record(record: &Map) -> Map {
    let mut changed = record.clone();
    if let Some((_, value)) = changed.get_index_mut(0) {
        *value = match value {
            Value::Number(n) => Value::from(*n + *n),
            Value::String(s) => Value::from(format!("{s}{s}")),
            ref other => (*other).clone(),
        };
    }
    changed
}

/// Record with `depth` levels of `nested` attributes, each level a default record
#[allow(dead_code)]
pub fn nested_record(depth: usize) -> Map {
    let mut record = default_record(Map::new());
    for _ in 0..depth {
        let mut outer = default_record(Map::new());
        outer.insert("nested".to_string(), Value::object(record));
        record = outer;
    }
    record
}

/// Map from a JSON literal
#[allow(dead_code)]
pub fn map(value: serde_json::Value) -> Map {
    Value::from(value).as_object().cloned().unwrap_or_default()
}
