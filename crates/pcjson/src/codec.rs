//! Pipeline document orchestration.
//!
//! Generation encodes every record with handles as indices, blanks the
//! run-local pipeline handles, optionally derives the UUID from the result,
//! and only then swaps references for names. Parsing builds the name tables
//! from the category arrays, swaps names back to indices and decodes.

use pcjson_contracts::{
    DOC_COMPUTE_STATE, DOC_ENABLED_EXTENSIONS, DOC_GRAPHICS_STATE, DOC_PIPELINE_UUID,
    PIPELINE_UUID_SIZE, STATE_COMPUTE_PIPELINE, STATE_GRAPHICS_PIPELINE,
    STATE_PHYSICAL_DEVICE_FEATURES, STATE_PIPELINE_LAYOUT, STATE_RENDER_PASS, STATE_RENDER_PASS2,
    STATE_SHADER_FILE_NAMES,
};
use pcjson_core::{
    decode_structure, read_field, Diagnostics, Extensible, HandleCategory, HandleNameTable,
    HandleTables, JsonValue,
};
use serde_json::{Map, Value};

use crate::document::{
    ComputePipelineState, GraphicsPipelineState, NamedRecords, PipelineDocument, PipelineResources,
    PipelineState, RenderPass, ShaderFileName,
};
use crate::identity::content_hash;
use crate::names::{blank_pipeline_handles, name_references, resolve_references};
use crate::vk::Chained;

pub(crate) struct Generated {
    pub json: Value,
    pub pipeline_uuid: [u8; PIPELINE_UUID_SIZE],
}

pub(crate) fn generate_document(
    doc: &PipelineDocument,
    md5_pipeline_uuid: bool,
    diag: &mut Diagnostics,
) -> Generated {
    let state_key = if doc.state.is_graphics() {
        DOC_GRAPHICS_STATE
    } else {
        DOC_COMPUTE_STATE
    };
    let resources = doc.state.resources();
    tracing::debug!(
        state = state_key,
        ycbcr_samplers = resources.ycbcr_samplers.len(),
        immutable_samplers = resources.immutable_samplers.len(),
        descriptor_set_layouts = resources.descriptor_set_layouts.len(),
        "generating pipeline document"
    );

    let mut state = Map::new();
    let tables = {
        let mut scope = diag.scope(state_key);
        let tables = HandleTables {
            ycbcr_conversions: generation_table(
                HandleCategory::YcbcrConversion,
                &resources.ycbcr_samplers,
                &mut scope,
            ),
            samplers: generation_table(HandleCategory::Sampler, &resources.immutable_samplers, &mut scope),
            descriptor_set_layouts: generation_table(
                HandleCategory::DescriptorSetLayout,
                &resources.descriptor_set_layouts,
                &mut scope,
            ),
        };
        encode_resources(resources, &tables, &mut state, &mut scope);
        match &doc.state {
            PipelineState::Graphics(graphics) => {
                match &graphics.render_pass {
                    Some(RenderPass::V1(render_pass)) => {
                        let json = render_pass.to_json(&mut scope.scope(STATE_RENDER_PASS));
                        state.insert(STATE_RENDER_PASS.to_string(), json);
                    }
                    Some(RenderPass::V2(render_pass)) => {
                        let json = render_pass.to_json(&mut scope.scope(STATE_RENDER_PASS2));
                        state.insert(STATE_RENDER_PASS2.to_string(), json);
                    }
                    None => scope.error("Missing both Renderpass and Renderpass2"),
                }
                let mut pipeline = graphics.pipeline.to_json(&mut scope.scope(STATE_GRAPHICS_PIPELINE));
                blank_pipeline_handles(&mut pipeline);
                state.insert(STATE_GRAPHICS_PIPELINE.to_string(), pipeline);
            }
            PipelineState::Compute(compute) => {
                let mut pipeline = compute.pipeline.to_json(&mut scope.scope(STATE_COMPUTE_PIPELINE));
                blank_pipeline_handles(&mut pipeline);
                state.insert(STATE_COMPUTE_PIPELINE.to_string(), pipeline);
            }
        }
        tables
    };

    let mut root = Map::new();
    root.insert(state_key.to_string(), Value::Object(state));
    root.insert(
        DOC_ENABLED_EXTENSIONS.to_string(),
        Value::Array(doc.enabled_extensions.iter().cloned().map(Value::String).collect()),
    );

    let pipeline_uuid = if md5_pipeline_uuid {
        content_hash(&Value::Object(root.clone()))
    } else {
        doc.pipeline_uuid
    };

    if let Some(Value::Object(state)) = root.get_mut(state_key) {
        name_references(state, &tables, &mut diag.scope(state_key));
    }
    root.insert(DOC_PIPELINE_UUID.to_string(), pipeline_uuid.to_json(diag));

    tracing::debug!(state = state_key, ok = diag.is_ok(), "generated pipeline document");
    Generated {
        json: Value::Object(root),
        pipeline_uuid,
    }
}

/// Name table for one category; records without names are keyed by index.
fn generation_table<T>(
    category: HandleCategory,
    records: &NamedRecords<T>,
    diag: &mut Diagnostics,
) -> HandleNameTable {
    let key = category.document_key();
    let names = match &records.names {
        Some(names) if names.len() == records.len() => names.clone(),
        Some(names) => {
            diag.scope(key).error(format!(
                "{key} has {} names for {} records",
                names.len(),
                records.len()
            ));
            index_names(records.len())
        }
        None => index_names(records.len()),
    };
    let mut table = HandleNameTable::with_capacity(category, names.len());
    for (i, name) in names.iter().enumerate() {
        table.define(name, &mut diag.element(key, i));
    }
    table
}

fn index_names(count: usize) -> Vec<String> {
    (0..count).map(|i| i.to_string()).collect()
}

fn encode_resources(
    resources: &PipelineResources,
    tables: &HandleTables,
    state: &mut Map<String, Value>,
    diag: &mut Diagnostics,
) {
    encode_category(&resources.ycbcr_samplers, tables.get(HandleCategory::YcbcrConversion), state, diag);
    encode_category(&resources.immutable_samplers, tables.get(HandleCategory::Sampler), state, diag);
    encode_category(
        &resources.descriptor_set_layouts,
        tables.get(HandleCategory::DescriptorSetLayout),
        state,
        diag,
    );

    let layout = resources
        .pipeline_layout
        .to_json(&mut diag.scope(STATE_PIPELINE_LAYOUT));
    state.insert(STATE_PIPELINE_LAYOUT.to_string(), layout);

    let shader_files = resources
        .shader_file_names
        .iter()
        .enumerate()
        .map(|(i, file)| file.to_json(&mut diag.element(STATE_SHADER_FILE_NAMES, i)))
        .collect();
    state.insert(STATE_SHADER_FILE_NAMES.to_string(), Value::Array(shader_files));

    if let Some(features) = &resources.physical_device_features {
        let json = features.to_json(&mut diag.scope(STATE_PHYSICAL_DEVICE_FEATURES));
        state.insert(STATE_PHYSICAL_DEVICE_FEATURES.to_string(), json);
    }
}

fn encode_category<T: Extensible<Link = crate::vk::Extension>>(
    records: &NamedRecords<T>,
    table: &HandleNameTable,
    state: &mut Map<String, Value>,
    diag: &mut Diagnostics,
) {
    let key = table.category().document_key();
    let entries = records
        .records
        .iter()
        .zip(table.names())
        .enumerate()
        .map(|(i, (record, name))| {
            let mut entry = Map::new();
            entry.insert(name.clone(), record.to_json(&mut diag.element(key, i)));
            Value::Object(entry)
        })
        .collect();
    state.insert(key.to_string(), Value::Array(entries));
}

pub(crate) fn parse_document(json: &Value, diag: &mut Diagnostics) -> Option<PipelineDocument> {
    let Some(root) = json.as_object() else {
        diag.error(format!("Pipeline document is not a JSON object: {json}"));
        return None;
    };
    let (state_key, graphics) = if root.contains_key(DOC_GRAPHICS_STATE) {
        (DOC_GRAPHICS_STATE, true)
    } else if root.contains_key(DOC_COMPUTE_STATE) {
        (DOC_COMPUTE_STATE, false)
    } else {
        diag.error(format!("Missing both {DOC_GRAPHICS_STATE} and {DOC_COMPUTE_STATE}"));
        return None;
    };
    let Some(state) = root.get(state_key).and_then(Value::as_object) else {
        diag.scope(state_key).error("Not a JSON object");
        return None;
    };
    tracing::debug!(state = state_key, "parsing pipeline document");

    let state = {
        let mut scope = diag.scope(state_key);
        if graphics {
            let render_pass = parse_render_pass(state, &mut scope);
            let (resources, pipeline) = parse_state(state, STATE_GRAPHICS_PIPELINE, &mut scope);
            PipelineState::Graphics(GraphicsPipelineState {
                resources,
                render_pass,
                pipeline,
            })
        } else {
            let (resources, pipeline) = parse_state(state, STATE_COMPUTE_PIPELINE, &mut scope);
            PipelineState::Compute(ComputePipelineState { resources, pipeline })
        }
    };

    let enabled_extensions = parse_enabled_extensions(root.get(DOC_ENABLED_EXTENSIONS), diag);
    let pipeline_uuid = match root.get(DOC_PIPELINE_UUID) {
        Some(value) => <[u8; PIPELINE_UUID_SIZE]>::from_json(value, &mut diag.scope(DOC_PIPELINE_UUID)),
        None => {
            tracing::warn!("pipeline document has no {DOC_PIPELINE_UUID}");
            diag.warn(format!("No {DOC_PIPELINE_UUID} in pipeline JSON"));
            [0; PIPELINE_UUID_SIZE]
        }
    };

    tracing::debug!(state = state_key, ok = diag.is_ok(), "parsed pipeline document");
    Some(PipelineDocument {
        state,
        enabled_extensions,
        pipeline_uuid,
    })
}

fn parse_render_pass(state: &Map<String, Value>, diag: &mut Diagnostics) -> Option<RenderPass> {
    if let Some(json) = state.get(STATE_RENDER_PASS) {
        let render_pass = decode_structure(json, &mut diag.scope(STATE_RENDER_PASS));
        return Some(RenderPass::V1(render_pass));
    }
    if let Some(json) = state.get(STATE_RENDER_PASS2) {
        let render_pass = decode_structure(json, &mut diag.scope(STATE_RENDER_PASS2));
        return Some(RenderPass::V2(render_pass));
    }
    diag.error("Missing both Renderpass and Renderpass2");
    None
}

/// Decodes the shared resources and the pipeline record stored under `pipeline_key`.
fn parse_state<P>(
    state: &Map<String, Value>,
    pipeline_key: &'static str,
    diag: &mut Diagnostics,
) -> (PipelineResources, Chained<P>)
where
    P: Extensible<Link = crate::vk::Extension>,
{
    let ycbcr = category_entries(state, HandleCategory::YcbcrConversion, diag);
    let samplers = category_entries(state, HandleCategory::Sampler, diag);
    let layouts = category_entries(state, HandleCategory::DescriptorSetLayout, diag);

    let mut tables = HandleTables {
        ycbcr_conversions: parse_table(HandleCategory::YcbcrConversion, &ycbcr, diag),
        samplers: parse_table(HandleCategory::Sampler, &samplers, diag),
        descriptor_set_layouts: parse_table(HandleCategory::DescriptorSetLayout, &layouts, diag),
    };

    let mut resolved = state.clone();
    resolve_references(&mut resolved, &mut tables, diag);
    let resolved_records = |category: HandleCategory| -> Vec<Value> {
        match resolved.get(category.document_key()) {
            // Malformed entries were reported while collecting names.
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(Value::as_object)
                .filter(|obj| obj.len() == 1)
                .filter_map(|obj| obj.values().next().cloned())
                .collect(),
            _ => Vec::new(),
        }
    };

    let resources = PipelineResources {
        ycbcr_samplers: decode_category(
            &ycbcr,
            &resolved_records(HandleCategory::YcbcrConversion),
            HandleCategory::YcbcrConversion,
            diag,
        ),
        immutable_samplers: decode_category(
            &samplers,
            &resolved_records(HandleCategory::Sampler),
            HandleCategory::Sampler,
            diag,
        ),
        descriptor_set_layouts: decode_category(
            &layouts,
            &resolved_records(HandleCategory::DescriptorSetLayout),
            HandleCategory::DescriptorSetLayout,
            diag,
        ),
        pipeline_layout: read_field(&resolved, STATE_PIPELINE_LAYOUT, diag),
        shader_file_names: parse_shader_file_names(resolved.get(STATE_SHADER_FILE_NAMES), diag),
        physical_device_features: resolved
            .get(STATE_PHYSICAL_DEVICE_FEATURES)
            .map(|json| decode_structure(json, &mut diag.scope(STATE_PHYSICAL_DEVICE_FEATURES))),
    };
    let pipeline = read_field(&resolved, pipeline_key, diag);
    (resources, pipeline)
}

/// `(name, record)` pairs of a category array; an absent array is empty.
fn category_entries(
    state: &Map<String, Value>,
    category: HandleCategory,
    diag: &mut Diagnostics,
) -> Vec<(String, Value)> {
    let key = category.document_key();
    let entries = match state.get(key) {
        None => return Vec::new(),
        Some(Value::Array(entries)) => entries,
        Some(other) => {
            diag.scope(key).error(format!("Expected an array, found {other}"));
            return Vec::new();
        }
    };
    let mut pairs = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        match entry.as_object() {
            Some(obj) if obj.len() == 1 => {
                if let Some((name, record)) = obj.iter().next() {
                    pairs.push((name.clone(), record.clone()));
                }
            }
            _ => diag
                .element(key, i)
                .error("Expected an object holding exactly one named record"),
        }
    }
    pairs
}

fn parse_table(category: HandleCategory, entries: &[(String, Value)], diag: &mut Diagnostics) -> HandleNameTable {
    let key = category.document_key();
    let mut table = HandleNameTable::with_capacity(category, entries.len());
    for (i, (name, _)) in entries.iter().enumerate() {
        table.define(name, &mut diag.element(key, i));
    }
    table
}

fn decode_category<T>(
    entries: &[(String, Value)],
    resolved: &[Value],
    category: HandleCategory,
    diag: &mut Diagnostics,
) -> NamedRecords<T>
where
    T: Extensible<Link = crate::vk::Extension>,
{
    let key = category.document_key();
    let records = resolved
        .iter()
        .enumerate()
        .map(|(i, json)| decode_structure::<T>(json, &mut diag.element(key, i)))
        .collect();
    NamedRecords {
        records,
        names: Some(entries.iter().map(|(name, _)| name.clone()).collect()),
    }
}

fn parse_shader_file_names(value: Option<&Value>, diag: &mut Diagnostics) -> Vec<ShaderFileName> {
    match value {
        None => {
            diag.error(format!("Missing {STATE_SHADER_FILE_NAMES}"));
            Vec::new()
        }
        Some(Value::Array(files)) => files
            .iter()
            .enumerate()
            .map(|(i, file)| ShaderFileName::from_json(file, &mut diag.element(STATE_SHADER_FILE_NAMES, i)))
            .collect(),
        Some(other) => {
            diag.scope(STATE_SHADER_FILE_NAMES)
                .error(format!("Expected an array, found {other}"));
            Vec::new()
        }
    }
}

fn parse_enabled_extensions(value: Option<&Value>, diag: &mut Diagnostics) -> Vec<String> {
    match value {
        None => Vec::new(),
        Some(Value::Array(names)) => names
            .iter()
            .enumerate()
            .map(|(i, name)| String::from_json(name, &mut diag.element(DOC_ENABLED_EXTENSIONS, i)))
            .collect(),
        Some(other) => {
            diag.scope(DOC_ENABLED_EXTENSIONS)
                .error(format!("Expected an array, found {other}"));
            Vec::new()
        }
    }
}
