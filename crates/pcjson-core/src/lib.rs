//! Generic engine of the pipeline JSON codec.
//!
//! This crate knows nothing about concrete record types. It provides the
//! location-tracked [`Diagnostics`] sink, the output [`Arena`], leaf value
//! codecs, symbol tables for enums and bitmasks, handle indirection and the
//! extension-chain walker that the record layer plugs its tables into.

pub mod arena;
pub mod bitmask;
pub mod chain;
pub mod diagnostics;
pub mod fields;
pub mod handles;
pub mod scalar;

pub use arena::{Arena, ArenaConfig, ArenaSlice, ArenaStr};
pub use bitmask::{decode_enum, decode_flags, encode_enum, encode_flags, EnumTable, FlagTable};
pub use chain::{
    decode_chain, decode_structure, encode_chain, encode_structure, Chain, ChainNode,
    ChainPolicy, ChainRecord, Chained, Discriminant, Extensible, OnUnknownLink, Structure,
};
pub use diagnostics::{Diagnostics, Message, Scope, Severity};
pub use fields::{
    check_governed_len, decode_object, encode_object, read_array, read_blob, read_field,
    read_optional_array, write_array, write_blob, write_field, write_optional_array, Fields,
};
pub use handles::{HandleCategory, HandleNameTable, HandleTables};
pub use scalar::{is_null_token, null_token, JsonValue};
