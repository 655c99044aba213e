//! Generator and parser instances.
//!
//! Each instance owns an [`Arena`] holding the text it hands out: generated
//! JSON and rendered messages stay valid, and retrievable through
//! [`Generator::outputs`], until [`Generator::free_outputs`] resets it. An
//! instance serves one call at a time; use one per thread.

use anyhow::Context;
use pcjson_contracts::PIPELINE_UUID_SIZE;
use pcjson_core::{Arena, ArenaConfig, ArenaStr, ChainPolicy, Diagnostics, JsonValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{generate_document, parse_document};
use crate::document::PipelineDocument;
use crate::roots::AnyRecord;
use crate::vk::{filter_device_features, Chain};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Derive the pipeline UUID from the document content instead of using
    /// the caller's.
    pub md5_pipeline_uuid: bool,
    pub chain_policy: ChainPolicy,
    pub arena: ArenaConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserOptions {
    pub chain_policy: ChainPolicy,
    pub arena: ArenaConfig,
}

#[derive(Debug, Clone)]
pub struct CodecError {
    pub message: String,
}

impl std::fmt::Display for CodecError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CodecError {}

/// Result of one call: success flag, output (absent on failure) and the
/// rendered messages, which may be present on success too.
#[derive(Debug)]
pub struct Outcome<'a, T> {
    pub ok: bool,
    pub value: Option<T>,
    pub messages: Option<&'a str>,
}

impl<'a, T> Outcome<'a, T> {
    pub fn into_result(self) -> Result<T, CodecError> {
        match (self.ok, self.value) {
            (true, Some(value)) => Ok(value),
            _ => Err(CodecError {
                message: self.messages.unwrap_or("conversion failed").to_string(),
            }),
        }
    }
}

#[derive(Debug, Default)]
pub struct Generator {
    options: GeneratorOptions,
    arena: Arena,
    outputs: Vec<ArenaStr>,
    messages: Option<ArenaStr>,
    pipeline_uuid: Option<[u8; PIPELINE_UUID_SIZE]>,
}

impl Generator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GeneratorOptions) -> Self {
        let arena = Arena::with_config(options.arena);
        Self {
            options,
            arena,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Serializes a whole pipeline document.
    pub fn generate(&mut self, doc: &PipelineDocument) -> Outcome<'_, &str> {
        let mut diag = Diagnostics::with_chain_policy(self.options.chain_policy);
        let generated = generate_document(doc, self.options.md5_pipeline_uuid, &mut diag);
        self.pipeline_uuid = (diag.is_ok() && self.options.md5_pipeline_uuid)
            .then_some(generated.pipeline_uuid);
        self.finish(generated.json, diag)
    }

    /// Serializes one root record and its chain.
    pub fn generate_single_record(&mut self, record: &AnyRecord) -> Outcome<'_, &str> {
        let mut diag = Diagnostics::with_chain_policy(self.options.chain_policy);
        tracing::debug!(record = record.type_name(), "generating single record");
        let json = record.encode(&mut diag);
        self.finish(json, diag)
    }

    /// Serializes the feature records found in a device creation chain as
    /// one `VkPhysicalDeviceFeatures2` record.
    pub fn generate_device_features(&mut self, chain: &Chain) -> Outcome<'_, &str> {
        let mut diag = Diagnostics::with_chain_policy(self.options.chain_policy);
        let json = filter_device_features(chain).to_json(&mut diag);
        self.finish(json, diag)
    }

    /// Content-derived UUID of the last successful [`Generator::generate`]
    /// call. `None` unless MD5 UUID generation is enabled.
    pub fn generated_pipeline_uuid(&self) -> Option<[u8; PIPELINE_UUID_SIZE]> {
        self.pipeline_uuid
    }

    /// Every JSON text produced since the last [`Generator::free_outputs`].
    pub fn outputs(&self) -> impl Iterator<Item = &str> + '_ {
        self.outputs.iter().filter_map(|text| self.arena.str(*text))
    }

    /// Messages of the last call.
    pub fn messages(&self) -> Option<&str> {
        self.messages.and_then(|text| self.arena.str(text))
    }

    pub fn free_outputs(&mut self) {
        self.outputs.clear();
        self.messages = None;
        self.pipeline_uuid = None;
        self.arena.reset();
    }

    fn finish(&mut self, json: Value, mut diag: Diagnostics) -> Outcome<'_, &str> {
        let text = if diag.is_ok() {
            match serde_json::to_string_pretty(&json) {
                Ok(text) => Some(self.arena.alloc_str(&text)),
                Err(err) => {
                    diag.error(format!("Failed to serialize JSON: {err}"));
                    None
                }
            }
        } else {
            None
        };
        if let Some(text) = text {
            self.outputs.push(text);
        }
        self.messages = diag.take_messages().map(|m| self.arena.alloc_str(&m));
        Outcome {
            ok: diag.is_ok(),
            value: text.and_then(|t| self.arena.str(t)),
            messages: self.messages.and_then(|m| self.arena.str(m)),
        }
    }
}

#[derive(Debug, Default)]
pub struct Parser {
    options: ParserOptions,
    arena: Arena,
    messages: Option<ArenaStr>,
}

impl Parser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        let arena = Arena::with_config(options.arena);
        Self {
            options,
            arena,
            messages: None,
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.options
    }

    /// Reads a whole pipeline document.
    pub fn parse(&mut self, text: &str) -> Outcome<'_, PipelineDocument> {
        let mut diag = Diagnostics::with_chain_policy(self.options.chain_policy);
        let document = read_json(text, &mut diag).and_then(|json| parse_document(&json, &mut diag));
        self.finish(document, diag)
    }

    /// Reads one root record, dispatching on its `sType`.
    pub fn parse_single_record(&mut self, text: &str) -> Outcome<'_, AnyRecord> {
        let mut diag = Diagnostics::with_chain_policy(self.options.chain_policy);
        let record = read_json(text, &mut diag).and_then(|json| AnyRecord::decode(&json, &mut diag));
        if let Some(record) = &record {
            tracing::debug!(record = record.type_name(), ok = diag.is_ok(), "parsed single record");
        }
        self.finish(record, diag)
    }

    /// Messages of the last call.
    pub fn messages(&self) -> Option<&str> {
        self.messages.and_then(|text| self.arena.str(text))
    }

    pub fn free_outputs(&mut self) {
        self.messages = None;
        self.arena.reset();
    }

    fn finish<T>(&mut self, value: Option<T>, mut diag: Diagnostics) -> Outcome<'_, T> {
        let ok = diag.is_ok();
        self.messages = diag.take_messages().map(|m| self.arena.alloc_str(&m));
        Outcome {
            ok,
            value: value.filter(|_| ok),
            messages: self.messages.and_then(|m| self.arena.str(m)),
        }
    }
}

fn read_json(text: &str, diag: &mut Diagnostics) -> Option<Value> {
    match serde_json::from_str(text) {
        Ok(json) => Some(json),
        Err(err) => {
            diag.error(format!("Failed to parse JSON: {err}"));
            None
        }
    }
}

/// Generates a document with default options.
pub fn write_document(doc: &PipelineDocument) -> anyhow::Result<String> {
    let mut generator = Generator::new();
    let text = generator
        .generate(doc)
        .into_result()
        .context("generate pipeline JSON")?;
    Ok(text.to_string())
}

/// Parses a document with default options.
pub fn read_document(text: &str) -> anyhow::Result<PipelineDocument> {
    let mut parser = Parser::new();
    parser
        .parse(text)
        .into_result()
        .context("parse pipeline JSON")
}
