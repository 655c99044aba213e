//! Extension-chain engine.
//!
//! A record is a JSON object holding its type-specific fields plus `sType` and
//! `pNext`. `pNext` is either the next extension object or `"NULL"`. Each root
//! type declares which extension discriminators it accepts; the per-type field
//! codecs are supplied through [`Fields`] and [`ChainRecord`].

use std::fmt;

use pcjson_contracts::{KEY_PNEXT, KEY_STYPE, TOKEN_NULL};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::bitmask::{decode_enum, EnumTable};
use crate::diagnostics::Diagnostics;
use crate::fields::Fields;
use crate::scalar::{is_null_token, JsonValue};

/// Tag identifying the concrete type of a chain node or root record.
pub trait Discriminant: Copy + Eq + fmt::Debug + 'static {
    const TABLE: &'static EnumTable;

    fn raw(self) -> i64;
    fn from_raw(raw: i64) -> Self;

    fn symbol(self) -> Option<&'static str> {
        Self::TABLE.symbol(self.raw())
    }

    fn describe(self) -> String {
        match self.symbol() {
            Some(name) => name.to_string(),
            None => self.raw().to_string(),
        }
    }
}

fn encode_tag<D: Discriminant>(tag: D) -> Value {
    match tag.symbol() {
        Some(name) => Value::String(name.to_string()),
        None => Value::from(tag.raw()),
    }
}

/// A record with a discriminator of its own.
pub trait Structure: Fields {
    type Tag: Discriminant;
    const TYPE_NAME: &'static str;
    const TAG: Self::Tag;
}

/// A record that heads an extension chain.
pub trait Extensible: Structure {
    type Link: ChainRecord<Tag = Self::Tag>;

    /// Extension discriminators accepted after this record.
    fn allowed() -> &'static [Self::Tag];
}

/// Closed sum type of every extension kind, dispatched by discriminator.
pub trait ChainRecord: Sized {
    type Tag: Discriminant;

    fn tag(&self) -> Self::Tag;

    /// Name of the record type for `tag`, if the tag has a decoder.
    fn type_name(tag: Self::Tag) -> Option<&'static str>;

    /// Writes the link's fields. Returns `false` when the link has no encoder.
    fn encode_payload(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) -> bool;

    fn decode_payload(
        tag: Self::Tag,
        obj: &Map<String, Value>,
        diag: &mut Diagnostics,
    ) -> Option<Self>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnUnknownLink {
    /// Record a warning and skip the link.
    Warn,
    /// Record an error and skip the link.
    Error,
    /// Record an error and end the walk.
    Stop,
}

/// What a chain walk does when it meets a link it cannot handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainPolicy {
    pub encode: OnUnknownLink,
    pub decode: OnUnknownLink,
}

impl Default for ChainPolicy {
    fn default() -> Self {
        Self {
            encode: OnUnknownLink::Warn,
            decode: OnUnknownLink::Stop,
        }
    }
}

/// Reports an unusable link. Returns `true` if the walk must stop.
fn interrupt(on_unknown: OnUnknownLink, diag: &mut Diagnostics, text: String) -> bool {
    match on_unknown {
        OnUnknownLink::Warn => {
            diag.warn(text);
            false
        }
        OnUnknownLink::Error => {
            diag.error(text);
            false
        }
        OnUnknownLink::Stop => {
            diag.error(text);
            true
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChainNode<L> {
    pub record: L,
    pub next: Option<Box<ChainNode<L>>>,
}

/// Singly-linked list of owned extension records.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain<L> {
    head: Option<Box<ChainNode<L>>>,
}

impl<L> Default for Chain<L> {
    fn default() -> Self {
        Self { head: None }
    }
}

fn append<L>(slot: &mut Option<Box<ChainNode<L>>>, record: L) {
    match slot {
        Some(node) => append(&mut node.next, record),
        None => *slot = Some(Box::new(ChainNode { record, next: None })),
    }
}

impl<L> Chain<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Appends `record` at the tail.
    pub fn push(&mut self, record: L) {
        append(&mut self.head, record);
    }

    pub fn iter(&self) -> ChainIter<'_, L> {
        ChainIter {
            cursor: self.head.as_deref(),
        }
    }
}

impl<L> FromIterator<L> for Chain<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        let records: Vec<L> = iter.into_iter().collect();
        let head = records
            .into_iter()
            .rev()
            .fold(None, |next, record| Some(Box::new(ChainNode { record, next })));
        Self { head }
    }
}

pub struct ChainIter<'a, L> {
    cursor: Option<&'a ChainNode<L>>,
}

impl<'a, L> Iterator for ChainIter<'a, L> {
    type Item = &'a L;

    fn next(&mut self) -> Option<&'a L> {
        let node = self.cursor?;
        self.cursor = node.next.as_deref();
        Some(&node.record)
    }
}

impl<'a, L> IntoIterator for &'a Chain<L> {
    type Item = &'a L;
    type IntoIter = ChainIter<'a, L>;

    fn into_iter(self) -> ChainIter<'a, L> {
        self.iter()
    }
}

fn link_scope<L: ChainRecord>(tag: L::Tag) -> String {
    match L::type_name(tag) {
        Some(name) => format!("{KEY_PNEXT}<{name}>"),
        None => format!("{KEY_PNEXT}<{}>", tag.describe()),
    }
}

/// Encodes the links of `chain` that `root` accepts as nested `pNext` objects.
pub fn encode_chain<L: ChainRecord>(
    chain: &Chain<L>,
    root: &'static str,
    allowed: &[L::Tag],
    diag: &mut Diagnostics,
) -> Value {
    let on_unknown = diag.chain_policy().encode;
    let mut objects = Vec::new();
    for (position, link) in chain.iter().enumerate() {
        let tag = link.tag();
        let mut scope = diag.pointer(link_scope::<L>(tag));
        if !allowed.contains(&tag) {
            tracing::warn!(root, s_type = %tag.describe(), position, "skipping extension link");
            let text = format!("Invalid structure type {} extending {root}", tag.describe());
            if interrupt(on_unknown, &mut scope, text) {
                break;
            }
            continue;
        }
        let mut out = Map::new();
        out.insert(KEY_STYPE.to_string(), encode_tag(tag));
        if !link.encode_payload(&mut out, &mut scope) {
            tracing::warn!(root, s_type = %tag.describe(), position, "extension link has no encoder");
            let text = format!("Unsupported structure type {} extending {root}", tag.describe());
            if interrupt(on_unknown, &mut scope, text) {
                break;
            }
            continue;
        }
        tracing::trace!(root, s_type = %tag.describe(), position, "encoded extension link");
        objects.push(out);
    }
    objects
        .into_iter()
        .rev()
        .fold(Value::String(TOKEN_NULL.to_string()), |next, mut out| {
            out.insert(KEY_PNEXT.to_string(), next);
            Value::Object(out)
        })
}

fn decode_tag<D: Discriminant>(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Option<D> {
    let mut scope = diag.scope(KEY_STYPE);
    let Some(value) = obj.get(KEY_STYPE) else {
        scope.error("Missing required field");
        return None;
    };
    let errors = scope.error_count();
    let raw = decode_enum(value, D::TABLE, &mut scope);
    (scope.error_count() == errors).then(|| D::from_raw(raw))
}

/// Decodes a `pNext` value into a chain of links accepted by `root`.
///
/// Walking ends at `"NULL"`, at a malformed link, or at an unusable link when
/// the decode policy says to stop; links decoded so far are kept.
pub fn decode_chain<L: ChainRecord>(
    value: Option<&Value>,
    root: &'static str,
    allowed: &[L::Tag],
    diag: &mut Diagnostics,
) -> Chain<L> {
    let on_unknown = diag.chain_policy().decode;
    let mut records = Vec::new();
    let mut cursor = value;
    loop {
        let Some(current) = cursor else {
            diag.scope(KEY_PNEXT).error("Missing required field");
            break;
        };
        if is_null_token(current) {
            break;
        }
        let Some(obj) = current.as_object() else {
            diag.scope(KEY_PNEXT)
                .error(format!("Invalid pNext format: {current}"));
            break;
        };
        let Some(tag) = decode_tag::<L::Tag>(obj, diag) else {
            if on_unknown == OnUnknownLink::Stop {
                break;
            }
            cursor = obj.get(KEY_PNEXT);
            continue;
        };
        let position = records.len();
        let mut scope = diag.pointer(link_scope::<L>(tag));
        let decoded = if allowed.contains(&tag) {
            L::decode_payload(tag, obj, &mut scope)
        } else {
            None
        };
        match decoded {
            Some(record) => {
                tracing::trace!(root, s_type = %tag.describe(), position, "decoded extension link");
                records.push(record);
            }
            None => {
                let text = format!("Invalid structure type {} extending {root}", tag.describe());
                if interrupt(on_unknown, &mut scope, text) {
                    break;
                }
            }
        }
        cursor = obj.get(KEY_PNEXT);
    }
    records.into_iter().collect()
}

/// An extensible record together with its extension chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Chained<T, L> {
    pub value: T,
    pub next: Chain<L>,
}

impl<T: Default, L> Default for Chained<T, L> {
    fn default() -> Self {
        Self {
            value: T::default(),
            next: Chain::default(),
        }
    }
}

impl<T: Extensible> Chained<T, T::Link> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            next: Chain::new(),
        }
    }

    /// Appends an extension link.
    pub fn with(mut self, link: T::Link) -> Self {
        self.next.push(link);
        self
    }
}

pub fn encode_structure<T: Extensible>(
    value: &T,
    next: &Chain<T::Link>,
    diag: &mut Diagnostics,
) -> Value {
    let mut out = Map::new();
    out.insert(KEY_STYPE.to_string(), encode_tag(T::TAG));
    value.encode_fields(&mut out, diag);
    let chain = encode_chain(next, T::TYPE_NAME, T::allowed(), diag);
    out.insert(KEY_PNEXT.to_string(), chain);
    Value::Object(out)
}

/// Decodes a record and its chain. The declared `sType` must be `T::TAG`.
pub fn decode_structure<T: Extensible>(json: &Value, diag: &mut Diagnostics) -> Chained<T, T::Link> {
    let Some(obj) = json.as_object() else {
        diag.error(format!("{} is not a JSON object: {json}", T::TYPE_NAME));
        return Chained::default();
    };
    if let Some(tag) = decode_tag::<T::Tag>(obj, diag) {
        if tag != T::TAG {
            diag.scope(KEY_STYPE).error(format!(
                "Invalid sType value for {}: expected {}, found {}",
                T::TYPE_NAME,
                T::TAG.describe(),
                tag.describe()
            ));
        }
    }
    let value = T::decode_fields(obj, diag);
    let next = decode_chain(obj.get(KEY_PNEXT), T::TYPE_NAME, T::allowed(), diag);
    Chained { value, next }
}

impl<T: Extensible> JsonValue for Chained<T, T::Link> {
    fn to_json(&self, diag: &mut Diagnostics) -> Value {
        encode_structure(&self.value, &self.next, diag)
    }

    fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
        decode_structure(value, diag)
    }
}
