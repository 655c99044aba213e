//! Symbol tables for enumerations and bitmasks, and their JSON codecs.

use pcjson_contracts::FLAG_SEPARATOR;
use serde_json::Value;

use crate::diagnostics::Diagnostics;

#[derive(Debug)]
pub struct EnumTable {
    pub type_name: &'static str,
    pub values: &'static [(i64, &'static str)],
}

impl EnumTable {
    pub fn symbol(&self, value: i64) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(v, _)| *v == value)
            .map(|(_, name)| *name)
    }

    pub fn value(&self, symbol: &str) -> Option<i64> {
        self.values
            .iter()
            .find(|(_, name)| *name == symbol)
            .map(|(v, _)| *v)
    }
}

/// Enumerators are spelled by symbol. A value without a symbol is kept as a
/// plain integer so it survives the round trip.
pub fn encode_enum(value: i64, table: &EnumTable, diag: &mut Diagnostics) -> Value {
    match table.symbol(value) {
        Some(name) => Value::String(name.to_string()),
        None => {
            diag.warn(format!("Unknown {} value {value}", table.type_name));
            Value::from(value)
        }
    }
}

pub fn decode_enum(value: &Value, table: &EnumTable, diag: &mut Diagnostics) -> i64 {
    match value {
        Value::String(s) => match table.value(s) {
            Some(v) => v,
            None => {
                diag.error(format!("Invalid {} enum value: {s}", table.type_name));
                0
            }
        },
        Value::Number(_) => match value.as_i64() {
            Some(v) => v,
            None => {
                diag.error(format!("Invalid {} enum value: {value}", table.type_name));
                0
            }
        },
        other => {
            diag.error(format!("Invalid {} enum value: {other}", table.type_name));
            0
        }
    }
}

/// Bit symbols of one flags type.
///
/// `aliases` are named constants covering more than one bit. A type with no
/// `bits` is open: it has no symbols and only the value zero is encodable.
#[derive(Debug)]
pub struct FlagTable {
    pub type_name: &'static str,
    pub width: u32,
    pub bits: &'static [(u64, &'static str)],
    pub aliases: &'static [(u64, &'static str)],
}

impl FlagTable {
    pub fn is_open(&self) -> bool {
        self.bits.is_empty()
    }

    fn width_mask(&self) -> u64 {
        if self.width >= 64 {
            u64::MAX
        } else {
            (1u64 << self.width) - 1
        }
    }

    pub fn bit_symbol(&self, bit: u64) -> Option<&'static str> {
        self.bits
            .iter()
            .find(|(v, _)| *v == bit)
            .map(|(_, name)| *name)
    }

    pub fn lookup(&self, symbol: &str) -> Option<u64> {
        self.bits
            .iter()
            .chain(self.aliases)
            .find(|(_, name)| *name == symbol)
            .map(|(v, _)| *v)
    }
}

/// Encodes a bitmask as `0` or as `" | "`-joined symbols in ascending bit order.
///
/// A multi-bit alias is emitted only when the value equals it exactly;
/// otherwise every set bit is spelled on its own.
pub fn encode_flags(value: u64, table: &FlagTable, diag: &mut Diagnostics) -> Value {
    if value == 0 {
        return Value::from(0);
    }
    if table.is_open() {
        diag.error(format!(
            "{} defines no flag bits; cannot encode value {value:#x}",
            table.type_name
        ));
        return Value::from(value);
    }
    if value & !table.width_mask() != 0 {
        diag.error(format!(
            "{} value {value:#x} exceeds {} bits",
            table.type_name, table.width
        ));
    }
    if let Some((_, name)) = table.aliases.iter().find(|(v, _)| *v == value) {
        return Value::String(name.to_string());
    }

    let remaining = value & table.width_mask();
    let mut parts: Vec<&str> = Vec::new();
    for pos in 0..table.width.min(64) {
        let bit = 1u64 << pos;
        if remaining & bit == 0 {
            continue;
        }
        match table.bit_symbol(bit) {
            Some(name) => parts.push(name),
            None => diag.error(format!("Unknown {} bit {bit:#x}", table.type_name)),
        }
    }
    Value::String(parts.join(FLAG_SEPARATOR))
}

pub fn decode_flags(value: &Value, table: &FlagTable, diag: &mut Diagnostics) -> u64 {
    match value {
        // Only zero is spelled as a number; set bits are always symbols.
        Value::Number(_) => {
            if value.as_u64() != Some(0) {
                diag.error(format!("Invalid {} value: {value}", table.type_name));
            }
            0
        }
        Value::String(s) => {
            let mut out = 0u64;
            for token in s.split('|').map(str::trim) {
                match table.lookup(token) {
                    Some(v) => out |= v,
                    None => diag.error(format!("Invalid {} flag: {token:?}", table.type_name)),
                }
            }
            out
        }
        other => {
            diag.error(format!("Invalid {} value: {other}", table.type_name));
            0
        }
    }
}
