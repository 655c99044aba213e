//! Leaf value codecs.

use base64::Engine;
use pcjson_contracts::{TOKEN_FALSE, TOKEN_NAN, TOKEN_NULL, TOKEN_TRUE};
use serde_json::{Number, Value};

use crate::diagnostics::Diagnostics;

/// A value with a fixed JSON spelling.
///
/// Decoding never fails outright: on malformed input an error is recorded and
/// a zero/empty value is returned so the enclosing record can keep going.
pub trait JsonValue: Sized {
    fn to_json(&self, diag: &mut Diagnostics) -> Value;
    fn from_json(value: &Value, diag: &mut Diagnostics) -> Self;
}

pub fn null_token() -> Value {
    Value::String(TOKEN_NULL.to_string())
}

pub fn is_null_token(value: &Value) -> bool {
    value.as_str() == Some(TOKEN_NULL)
}

macro_rules! unsigned_json_value {
    ($($ty:ty => $what:literal),* $(,)?) => {$(
        impl JsonValue for $ty {
            fn to_json(&self, _diag: &mut Diagnostics) -> Value {
                Value::from(*self)
            }

            fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
                match value.as_u64().and_then(|v| <$ty>::try_from(v).ok()) {
                    Some(v) => v,
                    None => {
                        diag.error(format!("Not {}: {value}", $what));
                        0
                    }
                }
            }
        }
    )*};
}

macro_rules! signed_json_value {
    ($($ty:ty => $what:literal),* $(,)?) => {$(
        impl JsonValue for $ty {
            fn to_json(&self, _diag: &mut Diagnostics) -> Value {
                Value::from(*self)
            }

            fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
                match value.as_i64().and_then(|v| <$ty>::try_from(v).ok()) {
                    Some(v) => v,
                    None => {
                        diag.error(format!("Not {}: {value}", $what));
                        0
                    }
                }
            }
        }
    )*};
}

unsigned_json_value! {
    u8 => "an 8-bit unsigned integer",
    u16 => "a 16-bit unsigned integer",
    u32 => "a 32-bit unsigned integer",
    u64 => "a 64-bit unsigned integer",
}

signed_json_value! {
    i8 => "an 8-bit signed integer",
    i16 => "a 16-bit signed integer",
    i32 => "a 32-bit signed integer",
    i64 => "a 64-bit signed integer",
}

pub fn encode_f64(v: f64, diag: &mut Diagnostics) -> Value {
    if v.is_nan() {
        return Value::String(TOKEN_NAN.to_string());
    }
    match Number::from_f64(v) {
        Some(n) => Value::Number(n),
        None => {
            diag.error(format!("Floating point value {v} has no JSON representation"));
            Value::from(0)
        }
    }
}

pub fn decode_f64(value: &Value, diag: &mut Diagnostics) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or_default(),
        Value::String(s) if s == TOKEN_NAN => f64::NAN,
        other => {
            diag.error(format!("Not a floating point value: {other}"));
            0.0
        }
    }
}

impl JsonValue for f64 {
    fn to_json(&self, diag: &mut Diagnostics) -> Value {
        encode_f64(*self, diag)
    }

    fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
        decode_f64(value, diag)
    }
}

impl JsonValue for f32 {
    fn to_json(&self, diag: &mut Diagnostics) -> Value {
        encode_f64(f64::from(*self), diag)
    }

    fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
        let wide = decode_f64(value, diag);
        if wide.is_finite() && wide.abs() > f64::from(f32::MAX) {
            diag.error(format!("Not a 32-bit floating point value: {value}"));
            return 0.0;
        }
        wide as f32
    }
}

impl JsonValue for bool {
    fn to_json(&self, _diag: &mut Diagnostics) -> Value {
        let token = if *self { TOKEN_TRUE } else { TOKEN_FALSE };
        Value::String(token.to_string())
    }

    fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
        match value.as_str() {
            Some(TOKEN_TRUE) => true,
            Some(TOKEN_FALSE) => false,
            _ => {
                diag.error(format!(
                    "Not a boolean token ({TOKEN_TRUE} or {TOKEN_FALSE}): {value}"
                ));
                false
            }
        }
    }
}

impl JsonValue for String {
    fn to_json(&self, _diag: &mut Diagnostics) -> Value {
        Value::String(self.clone())
    }

    fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
        match value.as_str() {
            Some(s) => s.to_string(),
            None => {
                diag.error(format!("Not a string: {value}"));
                String::new()
            }
        }
    }
}

/// `None` is spelled `"NULL"`.
impl<T: JsonValue> JsonValue for Option<T> {
    fn to_json(&self, diag: &mut Diagnostics) -> Value {
        match self {
            Some(v) => v.to_json(diag),
            None => null_token(),
        }
    }

    fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
        if is_null_token(value) {
            None
        } else {
            Some(T::from_json(value, diag))
        }
    }
}

macro_rules! fixed_array_json_value {
    ($($n:literal),*) => {$(
        impl<T: JsonValue + Default + Copy> JsonValue for [T; $n] {
            fn to_json(&self, diag: &mut Diagnostics) -> Value {
                Value::Array(
                    self.iter()
                        .enumerate()
                        .map(|(i, v)| v.to_json(&mut diag.element("", i)))
                        .collect(),
                )
            }

            fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
                let mut out = [T::default(); $n];
                match value.as_array() {
                    Some(items) if items.len() == $n => {
                        for (i, (slot, item)) in out.iter_mut().zip(items).enumerate() {
                            *slot = T::from_json(item, &mut diag.element("", i));
                        }
                    }
                    _ => diag.error(format!("Not an array of {} elements: {value}", $n)),
                }
                out
            }
        }
    )*};
}

fixed_array_json_value!(2, 3, 4, 16);

pub fn encode_blob(bytes: &[u8]) -> Value {
    Value::String(base64::engine::general_purpose::STANDARD.encode(bytes))
}

/// Accepts a base64 string or an array of byte values.
pub fn decode_blob(value: &Value, diag: &mut Diagnostics) -> Vec<u8> {
    match value {
        Value::String(s) => match base64::engine::general_purpose::STANDARD.decode(s) {
            Ok(bytes) => bytes,
            Err(err) => {
                diag.error(format!("Not a base64 encoded binary: {err}"));
                Vec::new()
            }
        },
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| u8::from_json(item, &mut diag.element("", i)))
            .collect(),
        other => {
            diag.error(format!("Not a base64 encoded binary: {other}"));
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integers_are_range_checked() {
        let mut diag = Diagnostics::new();
        assert_eq!(u32::from_json(&json!(4294967295u64), &mut diag), u32::MAX);
        assert!(diag.is_ok());
        assert_eq!(u32::from_json(&json!(4294967296u64), &mut diag), 0);
        assert_eq!(i32::from_json(&json!(-1), &mut diag), -1);
        assert_eq!(u8::from_json(&json!(-1), &mut diag), 0);
        assert_eq!(u16::from_json(&json!(1.5), &mut diag), 0);
        assert_eq!(diag.error_count(), 3);
        assert!(diag.messages()[0].text.contains("32-bit unsigned"));
    }

    #[test]
    fn nan_uses_token() {
        let mut diag = Diagnostics::new();
        assert_eq!(f32::NAN.to_json(&mut diag), json!("NaN"));
        assert!(f32::from_json(&json!("NaN"), &mut diag).is_nan());
        assert_eq!(f32::from_json(&json!(0.25), &mut diag), 0.25);
        assert!(diag.is_ok());
        f32::INFINITY.to_json(&mut diag);
        assert!(!diag.is_ok());
    }

    #[test]
    fn bool_tokens_are_strict() {
        let mut diag = Diagnostics::new();
        assert_eq!(true.to_json(&mut diag), json!("VK_TRUE"));
        assert!(bool::from_json(&json!("VK_TRUE"), &mut diag));
        assert!(!bool::from_json(&json!("VK_FALSE"), &mut diag));
        assert!(diag.is_ok());
        assert!(!bool::from_json(&json!(true), &mut diag));
        assert!(!diag.is_ok());
    }

    #[test]
    fn null_token_marks_absent_optionals() {
        let mut diag = Diagnostics::new();
        assert_eq!(None::<String>.to_json(&mut diag), json!("NULL"));
        assert_eq!(Option::<String>::from_json(&json!("NULL"), &mut diag), None);
        assert_eq!(
            Option::<String>::from_json(&json!(""), &mut diag),
            Some(String::new())
        );
    }

    #[test]
    fn blob_is_padded_base64() {
        let mut diag = Diagnostics::new();
        assert_eq!(encode_blob(&[25, 123, 42, 8]), json!("GXsqCA=="));
        assert_eq!(decode_blob(&json!("GXsqCA=="), &mut diag), vec![25, 123, 42, 8]);
        assert_eq!(decode_blob(&json!([25, 123, 42, 8]), &mut diag), vec![25, 123, 42, 8]);
        assert!(diag.is_ok());
        decode_blob(&json!("G*sq"), &mut diag);
        assert!(diag.messages()[0].text.contains("Not a base64 encoded binary"));
    }

    #[test]
    fn fixed_arrays_check_length() {
        let mut diag = Diagnostics::new();
        let v = [1.0f32, 0.5, 0.0, 1.0];
        let json = v.to_json(&mut diag);
        assert_eq!(json, json!([1.0, 0.5, 0.0, 1.0]));
        assert_eq!(<[f32; 4]>::from_json(&json, &mut diag), v);
        assert!(diag.is_ok());
        <[u8; 16]>::from_json(&json!([1, 2]), &mut diag);
        assert!(!diag.is_ok());
    }
}
