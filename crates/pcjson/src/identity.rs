//! Content-derived pipeline identity.
//!
//! The digest covers the structure of a document, not its text: object keys
//! (and with them the chosen record names) are never fed. Every value is
//! prefixed with a tag byte for its kind and framed by its length, so
//! adjacent fields cannot run together.

use md5::{Digest, Md5};
use pcjson_contracts::PIPELINE_UUID_SIZE;
use serde_json::Value;

/// MD5 of `document` in the framed layout described in the module docs.
pub fn content_hash(document: &Value) -> [u8; PIPELINE_UUID_SIZE] {
    let mut hasher = Md5::new();
    feed(&mut hasher, document);
    let mut uuid = [0; PIPELINE_UUID_SIZE];
    uuid.copy_from_slice(&hasher.finalize());
    uuid
}

fn feed(hasher: &mut Md5, value: &Value) {
    match value {
        Value::Null => hasher.update([0x00]),
        Value::Bool(b) => hasher.update([0x01, u8::from(*b)]),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                hasher.update([0x02]);
                hasher.update(u.to_le_bytes());
            } else if let Some(i) = n.as_i64() {
                hasher.update([0x03]);
                hasher.update(i.to_le_bytes());
            } else if let Some(f) = n.as_f64() {
                hasher.update([0x04]);
                hasher.update(f.to_le_bytes());
            }
        }
        Value::String(s) => {
            hasher.update([0x05]);
            hasher.update((s.len() as u64).to_le_bytes());
            hasher.update(s.as_bytes());
        }
        Value::Array(items) => {
            hasher.update([0x06]);
            hasher.update((items.len() as u32).to_le_bytes());
            for item in items {
                feed(hasher, item);
            }
        }
        Value::Object(obj) => {
            hasher.update([0x07]);
            hasher.update((obj.len() as u32).to_le_bytes());
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            for key in keys {
                if let Some(member) = obj.get(key) {
                    feed(hasher, member);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keys_do_not_contribute() {
        let a = json!({ "Samplers": [{ "first": { "minLod": 1 } }] });
        let b = json!({ "Samplers": [{ "renamed": { "minLod": 1 } }] });
        assert_eq!(content_hash(&a), content_hash(&b));
    }

    #[test]
    fn values_are_framed() {
        let a = json!(["ab", "c"]);
        let b = json!(["a", "bc"]);
        assert_ne!(content_hash(&a), content_hash(&b));
        assert_ne!(content_hash(&json!([1])), content_hash(&json!([[1]])));
    }

    #[test]
    fn value_kinds_are_tagged() {
        assert_ne!(content_hash(&json!([""])), content_hash(&json!([0])));
        assert_ne!(content_hash(&json!([false])), content_hash(&json!([0])));
        assert_ne!(content_hash(&json!([null])), content_hash(&json!([])));
        assert_ne!(content_hash(&json!([1])), content_hash(&json!([1.0])));
    }

    #[test]
    fn member_order_is_canonical() {
        let a: Value = serde_json::from_str(r#"{"x": 1, "y": 2}"#).expect("json");
        let b: Value = serde_json::from_str(r#"{"y": 2, "x": 1}"#).expect("json");
        assert_eq!(content_hash(&a), content_hash(&b));
        assert_ne!(content_hash(&json!({ "x": 1, "y": 3 })), content_hash(&a));
    }
}
