//! Handle references inside a document's JSON state.
//!
//! Records are encoded with handles as table indices. Before text is
//! produced, references are rewritten to names; on parse the names are
//! rewritten back to indices before any record is decoded.

use pcjson_contracts::{
    KEY_PNEXT, KEY_STYPE, STATE_DESCRIPTOR_SET_LAYOUTS, STATE_IMMUTABLE_SAMPLERS,
    STATE_PIPELINE_LAYOUT,
};
use pcjson_core::{Diagnostics, Discriminant, HandleCategory, HandleTables};
use serde_json::{Map, Value};

use crate::vk::StructureType;

/// Pipeline fields whose handles mean nothing outside the creating process.
const BLANKED_PIPELINE_FIELDS: [&str; 3] = ["layout", "renderPass", "basePipelineHandle"];

/// Replaces run-local handles in an encoded pipeline with `""`.
pub(crate) fn blank_pipeline_handles(pipeline: &mut Value) {
    let Some(obj) = pipeline.as_object_mut() else {
        return;
    };
    for key in BLANKED_PIPELINE_FIELDS {
        if let Some(value) = obj.get_mut(key) {
            *value = Value::String(String::new());
        }
    }
    if let Some(Value::Array(stages)) = obj.get_mut("pStages") {
        stages.iter_mut().for_each(blank_module);
    }
    if let Some(stage) = obj.get_mut("stage") {
        blank_module(stage);
    }
}

fn blank_module(stage: &mut Value) {
    if let Some(module) = stage.get_mut("module") {
        *module = Value::String(String::new());
    }
}

/// Rewrites every index reference in `state` to the referenced record's name.
pub(crate) fn name_references(state: &mut Map<String, Value>, tables: &HandleTables, diag: &mut Diagnostics) {
    visit_references(state, diag, &mut |category, value, diag| {
        let Some(index) = value.as_u64() else {
            diag.error(format!("Expected a {category} handle index, found {value}"));
            return;
        };
        if let Some(name) = tables.get(category).name_for(index, diag) {
            *value = Value::String(name.to_string());
        }
    });
}

/// Rewrites every name reference in `state` to the referenced record's index.
pub(crate) fn resolve_references(
    state: &mut Map<String, Value>,
    tables: &mut HandleTables,
    diag: &mut Diagnostics,
) {
    visit_references(state, diag, &mut |category, value, diag| {
        let index = tables.get_mut(category).resolve_reference(value, diag);
        // The failure is already reported; keep the record decodable.
        *value = Value::from(index.unwrap_or(0));
    });
}

type Visit<'a> = dyn FnMut(HandleCategory, &mut Value, &mut Diagnostics) + 'a;

fn visit_references(state: &mut Map<String, Value>, diag: &mut Diagnostics, visit: &mut Visit<'_>) {
    if let Some(Value::Object(layout)) = state.get_mut(STATE_PIPELINE_LAYOUT) {
        let mut scope = diag.scope(STATE_PIPELINE_LAYOUT);
        if let Some(Value::Array(set_layouts)) = layout.get_mut("pSetLayouts") {
            for (i, set_layout) in set_layouts.iter_mut().enumerate() {
                visit(
                    HandleCategory::DescriptorSetLayout,
                    set_layout,
                    &mut scope.element("pSetLayouts", i),
                );
            }
        }
    }

    if let Some(Value::Array(layouts)) = state.get_mut(STATE_DESCRIPTOR_SET_LAYOUTS) {
        for (i, entry) in layouts.iter_mut().enumerate() {
            let mut scope = diag.element(STATE_DESCRIPTOR_SET_LAYOUTS, i);
            let Some(Value::Array(bindings)) = named_record(entry).and_then(|r| r.get_mut("pBindings")) else {
                continue;
            };
            for (j, binding) in bindings.iter_mut().enumerate() {
                let Some(Value::Array(samplers)) = binding.get_mut("pImmutableSamplers") else {
                    continue;
                };
                let mut binding_scope = scope.element("pBindings", j);
                for (k, sampler) in samplers.iter_mut().enumerate() {
                    visit(
                        HandleCategory::Sampler,
                        sampler,
                        &mut binding_scope.element("pImmutableSamplers", k),
                    );
                }
            }
        }
    }

    if let Some(Value::Array(samplers)) = state.get_mut(STATE_IMMUTABLE_SAMPLERS) {
        let conversion_info = StructureType::SAMPLER_YCBCR_CONVERSION_INFO;
        for (i, entry) in samplers.iter_mut().enumerate() {
            let mut scope = diag.element(STATE_IMMUTABLE_SAMPLERS, i);
            let Some(sampler) = named_record(entry) else {
                continue;
            };
            let mut cursor = sampler.get_mut(KEY_PNEXT);
            while let Some(Value::Object(link)) = cursor {
                if is_tag(link.get(KEY_STYPE), conversion_info) {
                    if let Some(conversion) = link.get_mut("conversion") {
                        let mut link_scope = scope.pointer(format!("{KEY_PNEXT}<VkSamplerYcbcrConversionInfo>"));
                        visit(
                            HandleCategory::YcbcrConversion,
                            conversion,
                            &mut link_scope.scope("conversion"),
                        );
                    }
                }
                cursor = link.get_mut(KEY_PNEXT);
            }
        }
    }
}

/// The record inside a `{ "<name>": record }` category entry.
fn named_record(entry: &mut Value) -> Option<&mut Value> {
    let obj = entry.as_object_mut()?;
    if obj.len() != 1 {
        return None;
    }
    obj.values_mut().next()
}

fn is_tag(value: Option<&Value>, tag: StructureType) -> bool {
    match value {
        Some(Value::String(s)) => tag.symbol() == Some(s.as_str()),
        Some(other) => other.as_i64() == Some(tag.raw()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcjson_core::HandleNameTable;
    use serde_json::json;

    fn tables(ycbcr: &[&str], samplers: &[&str], layouts: &[&str]) -> HandleTables {
        let names = |list: &[&str]| list.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        HandleTables {
            ycbcr_conversions: HandleNameTable::with_names(HandleCategory::YcbcrConversion, names(ycbcr)),
            samplers: HandleNameTable::with_names(HandleCategory::Sampler, names(samplers)),
            descriptor_set_layouts: HandleNameTable::with_names(
                HandleCategory::DescriptorSetLayout,
                names(layouts),
            ),
        }
    }

    #[test]
    fn blanking_covers_stage_modules() {
        let mut pipeline = json!({
            "layout": 3,
            "renderPass": 1,
            "basePipelineHandle": 0,
            "subpass": 2,
            "pStages": [{ "module": 5 }, { "module": 6 }]
        });
        blank_pipeline_handles(&mut pipeline);
        assert_eq!(pipeline["layout"], json!(""));
        assert_eq!(pipeline["renderPass"], json!(""));
        assert_eq!(pipeline["pStages"][1]["module"], json!(""));
        assert_eq!(pipeline["subpass"], json!(2));
    }

    #[test]
    fn references_become_names() {
        let mut state = json!({
            "PipelineLayout": { "pSetLayouts": [1, 0] },
            "DescriptorSetLayouts": [
                { "a": { "pBindings": [{ "pImmutableSamplers": [0] }] } },
                { "b": { "pBindings": "NULL" } }
            ],
            "ImmutableSamplers": [
                { "s": { "pNext": {
                    "sType": "VK_STRUCTURE_TYPE_SAMPLER_YCBCR_CONVERSION_INFO",
                    "conversion": 0,
                    "pNext": "NULL"
                } } }
            ]
        });
        let tables = tables(&["yuv"], &["s"], &["a", "b"]);
        let mut diag = Diagnostics::new();
        let obj = state.as_object_mut().expect("object");
        name_references(obj, &tables, &mut diag);
        assert!(diag.is_ok(), "{}", diag.render());
        assert_eq!(state["PipelineLayout"]["pSetLayouts"], json!(["b", "a"]));
        assert_eq!(
            state["DescriptorSetLayouts"][0]["a"]["pBindings"][0]["pImmutableSamplers"],
            json!(["s"])
        );
        assert_eq!(state["ImmutableSamplers"][0]["s"]["pNext"]["conversion"], json!("yuv"));
    }

    #[test]
    fn out_of_range_reference_is_located() {
        let mut state = json!({ "PipelineLayout": { "pSetLayouts": [7] } });
        let tables = tables(&[], &[], &["a", "b", "c"]);
        let mut diag = Diagnostics::new();
        name_references(state.as_object_mut().expect("object"), &tables, &mut diag);
        assert!(!diag.is_ok());
        let rendered = diag.render();
        assert!(rendered.contains("PipelineLayout.pSetLayouts[0]"), "unexpected: {rendered}");
        assert!(rendered.contains("out of range"), "unexpected: {rendered}");
    }

    #[test]
    fn unknown_name_does_not_resolve() {
        let mut state = json!({ "PipelineLayout": { "pSetLayouts": ["missing"] } });
        let mut tables = tables(&[], &[], &["a"]);
        let mut diag = Diagnostics::new();
        resolve_references(state.as_object_mut().expect("object"), &mut tables, &mut diag);
        assert!(!diag.is_ok());
        assert_eq!(state["PipelineLayout"]["pSetLayouts"], json!([0]));
    }
}
