//! Field-level helpers shared by every record codec.
//!
//! Readers report a missing key as an error scoped to that key and fall back
//! to the type's default, so one bad field never hides the rest of a record.

use serde_json::{Map, Value};

use crate::diagnostics::Diagnostics;
use crate::scalar::{decode_blob, encode_blob, is_null_token, null_token, JsonValue};

/// Type-specific fields of a record, without `sType` / `pNext`.
pub trait Fields: Sized + Default {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics);
    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self;
}

pub fn encode_object<T: Fields>(value: &T, diag: &mut Diagnostics) -> Value {
    let mut out = Map::new();
    value.encode_fields(&mut out, diag);
    Value::Object(out)
}

pub fn decode_object<T: Fields>(value: &Value, diag: &mut Diagnostics) -> T {
    match value.as_object() {
        Some(obj) => T::decode_fields(obj, diag),
        None => {
            diag.error(format!("Not a JSON object: {value}"));
            T::default()
        }
    }
}

pub fn write_field<T: JsonValue>(
    out: &mut Map<String, Value>,
    key: &'static str,
    value: &T,
    diag: &mut Diagnostics,
) {
    let json = value.to_json(&mut diag.scope(key));
    out.insert(key.to_string(), json);
}

pub fn read_field<T: JsonValue + Default>(
    obj: &Map<String, Value>,
    key: &'static str,
    diag: &mut Diagnostics,
) -> T {
    let mut scope = diag.scope(key);
    match obj.get(key) {
        Some(value) => T::from_json(value, &mut scope),
        None => {
            scope.error("Missing required field");
            T::default()
        }
    }
}

fn encode_items<T: JsonValue>(items: &[T], key: &'static str, diag: &mut Diagnostics) -> Value {
    Value::Array(
        items
            .iter()
            .enumerate()
            .map(|(i, item)| item.to_json(&mut diag.element(key, i)))
            .collect(),
    )
}

fn decode_items<T: JsonValue>(items: &[Value], key: &'static str, diag: &mut Diagnostics) -> Vec<T> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| T::from_json(item, &mut diag.element(key, i)))
        .collect()
}

/// Writes `count_key` and `key`; an empty array is spelled `"NULL"`.
pub fn write_array<T: JsonValue>(
    out: &mut Map<String, Value>,
    count_key: &'static str,
    key: &'static str,
    items: &[T],
    diag: &mut Diagnostics,
) {
    out.insert(count_key.to_string(), Value::from(items.len() as u64));
    write_optional_array(out, key, (!items.is_empty()).then_some(items), diag);
}

pub fn read_array<T: JsonValue>(
    obj: &Map<String, Value>,
    count_key: &'static str,
    key: &'static str,
    diag: &mut Diagnostics,
) -> Vec<T> {
    let count: u32 = read_field(obj, count_key, diag);
    let items = read_optional_array(obj, key, diag).unwrap_or_default();
    if items.len() != count as usize {
        diag.scope(key).error(format!(
            "{count_key} is {count} but the array has {} elements",
            items.len()
        ));
    }
    items
}

/// Array whose length is governed by a count stored elsewhere; `None` is `"NULL"`.
pub fn write_optional_array<T: JsonValue>(
    out: &mut Map<String, Value>,
    key: &'static str,
    items: Option<&[T]>,
    diag: &mut Diagnostics,
) {
    let json = match items {
        Some(items) => encode_items(items, key, diag),
        None => null_token(),
    };
    out.insert(key.to_string(), json);
}

pub fn read_optional_array<T: JsonValue>(
    obj: &Map<String, Value>,
    key: &'static str,
    diag: &mut Diagnostics,
) -> Option<Vec<T>> {
    match obj.get(key) {
        None => {
            diag.scope(key).error("Missing required field");
            None
        }
        Some(value) if is_null_token(value) => None,
        Some(Value::Array(items)) => Some(decode_items(items, key, diag)),
        Some(other) => {
            diag.scope(key).error(format!("Not an array or \"NULL\": {other}"));
            None
        }
    }
}

/// Checks an optional array against the count that governs it.
pub fn check_governed_len<T>(
    items: Option<&[T]>,
    key: &'static str,
    count_key: &'static str,
    count: u32,
    diag: &mut Diagnostics,
) {
    if let Some(items) = items {
        if items.len() != count as usize {
            diag.scope(key).error(format!(
                "{count_key} is {count} but the array has {} elements",
                items.len()
            ));
        }
    }
}

/// Writes a byte blob as base64 next to its byte size; empty is `"NULL"`.
pub fn write_blob(out: &mut Map<String, Value>, size_key: &'static str, key: &'static str, bytes: &[u8]) {
    out.insert(size_key.to_string(), Value::from(bytes.len() as u64));
    let json = if bytes.is_empty() {
        null_token()
    } else {
        encode_blob(bytes)
    };
    out.insert(key.to_string(), json);
}

pub fn read_blob(
    obj: &Map<String, Value>,
    size_key: &'static str,
    key: &'static str,
    diag: &mut Diagnostics,
) -> Vec<u8> {
    let size: u64 = read_field(obj, size_key, diag);
    let mut scope = diag.scope(key);
    let bytes = match obj.get(key) {
        None => {
            scope.error("Missing required field");
            return Vec::new();
        }
        Some(value) if is_null_token(value) => Vec::new(),
        Some(value) => decode_blob(value, &mut scope),
    };
    if bytes.len() as u64 != size {
        scope.error(format!(
            "{size_key} is {size} but the data has {} bytes",
            bytes.len()
        ));
    }
    bytes
}
