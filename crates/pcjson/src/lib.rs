//! Vulkan SC pipeline JSON codec.
//!
//! Converts pipeline descriptions built from C-ABI-shaped records and their
//! extension chains to and from the pipeline JSON document format. The
//! generic machinery lives in `pcjson-core`; this crate supplies the concrete
//! records, the document layout and the [`Generator`] / [`Parser`] entry
//! points.

#[macro_use]
mod macros;

pub mod vk;

mod api;
mod codec;
mod document;
mod identity;
mod names;
mod roots;

pub use api::{
    read_document, write_document, CodecError, Generator, GeneratorOptions, Outcome, Parser,
    ParserOptions,
};
pub use document::{
    ComputePipelineState, GraphicsPipelineState, NamedRecords, PipelineDocument, PipelineResources,
    PipelineState, RenderPass, ShaderFileName,
};
pub use identity::content_hash;
pub use roots::AnyRecord;

pub use pcjson_core::{ArenaConfig, ChainPolicy, Diagnostics, Message, OnUnknownLink, Severity};
