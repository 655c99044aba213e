//! Samplers, descriptor-set layouts, pipeline layouts and shader modules.

use pcjson_core::{
    check_governed_len, read_array, read_blob, read_field, read_optional_array, write_array,
    write_blob, write_field, write_optional_array, Diagnostics, Fields,
};
use serde_json::{Map, Value};

use super::types::*;

record! {
    pub struct ComponentMapping {
        r: ComponentSwizzle => "r",
        g: ComponentSwizzle => "g",
        b: ComponentSwizzle => "b",
        a: ComponentSwizzle => "a",
    }
}

record! {
    pub struct SamplerYcbcrConversionCreateInfo {
        format: Format => "format",
        ycbcr_model: SamplerYcbcrModelConversion => "ycbcrModel",
        ycbcr_range: SamplerYcbcrRange => "ycbcrRange",
        components: ComponentMapping => "components",
        x_chroma_offset: ChromaLocation => "xChromaOffset",
        y_chroma_offset: ChromaLocation => "yChromaOffset",
        chroma_filter: Filter => "chromaFilter",
        force_explicit_reconstruction: bool => "forceExplicitReconstruction",
    }
}
extensible!(
    SamplerYcbcrConversionCreateInfo,
    SAMPLER_YCBCR_CONVERSION_CREATE_INFO,
    "VkSamplerYcbcrConversionCreateInfo",
    []
);

record! {
    pub struct SamplerCreateInfo {
        flags: SamplerCreateFlags => "flags",
        mag_filter: Filter => "magFilter",
        min_filter: Filter => "minFilter",
        mipmap_mode: SamplerMipmapMode => "mipmapMode",
        address_mode_u: SamplerAddressMode => "addressModeU",
        address_mode_v: SamplerAddressMode => "addressModeV",
        address_mode_w: SamplerAddressMode => "addressModeW",
        mip_lod_bias: f32 => "mipLodBias",
        anisotropy_enable: bool => "anisotropyEnable",
        max_anisotropy: f32 => "maxAnisotropy",
        compare_enable: bool => "compareEnable",
        compare_op: CompareOp => "compareOp",
        min_lod: f32 => "minLod",
        max_lod: f32 => "maxLod",
        border_color: BorderColor => "borderColor",
        unnormalized_coordinates: bool => "unnormalizedCoordinates",
    }
}
extensible!(
    SamplerCreateInfo,
    SAMPLER_CREATE_INFO,
    "VkSamplerCreateInfo",
    [SAMPLER_YCBCR_CONVERSION_INFO, SAMPLER_REDUCTION_MODE_CREATE_INFO]
);

record! {
    /// `conversion` is an index into the document's Ycbcr conversions.
    pub struct SamplerYcbcrConversionInfo {
        conversion: Handle => "conversion",
    }
}
structure!(
    SamplerYcbcrConversionInfo,
    SAMPLER_YCBCR_CONVERSION_INFO,
    "VkSamplerYcbcrConversionInfo"
);

record! {
    pub struct SamplerReductionModeCreateInfo {
        reduction_mode: SamplerReductionMode => "reductionMode",
    }
}
structure!(
    SamplerReductionModeCreateInfo,
    SAMPLER_REDUCTION_MODE_CREATE_INFO,
    "VkSamplerReductionModeCreateInfo"
);

/// `immutable_samplers` entries index the document's immutable samplers.
/// When present the array holds exactly `descriptor_count` entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescriptorSetLayoutBinding {
    pub binding: u32,
    pub descriptor_type: DescriptorType,
    pub descriptor_count: u32,
    pub stage_flags: ShaderStageFlags,
    pub immutable_samplers: Option<Vec<Handle>>,
}

impl Fields for DescriptorSetLayoutBinding {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "binding", &self.binding, diag);
        write_field(out, "descriptorType", &self.descriptor_type, diag);
        write_field(out, "descriptorCount", &self.descriptor_count, diag);
        write_field(out, "stageFlags", &self.stage_flags, diag);
        // A zero count has no samplers to point at, whatever the array holds.
        let samplers = self
            .immutable_samplers
            .as_deref()
            .filter(|_| self.descriptor_count > 0);
        check_governed_len(samplers, "pImmutableSamplers", "descriptorCount", self.descriptor_count, diag);
        write_optional_array(out, "pImmutableSamplers", samplers, diag);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        let descriptor_count = read_field(obj, "descriptorCount", diag);
        let immutable_samplers: Option<Vec<Handle>> = read_optional_array(obj, "pImmutableSamplers", diag);
        check_governed_len(
            immutable_samplers.as_deref(),
            "pImmutableSamplers",
            "descriptorCount",
            descriptor_count,
            diag,
        );
        Self {
            binding: read_field(obj, "binding", diag),
            descriptor_type: read_field(obj, "descriptorType", diag),
            descriptor_count,
            stage_flags: read_field(obj, "stageFlags", diag),
            immutable_samplers,
        }
    }
}

impl pcjson_core::JsonValue for DescriptorSetLayoutBinding {
    fn to_json(&self, diag: &mut Diagnostics) -> Value {
        pcjson_core::encode_object(self, diag)
    }

    fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
        pcjson_core::decode_object(value, diag)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescriptorSetLayoutCreateInfo {
    pub flags: DescriptorSetLayoutCreateFlags,
    pub bindings: Vec<DescriptorSetLayoutBinding>,
}

impl Fields for DescriptorSetLayoutCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_array(out, "bindingCount", "pBindings", &self.bindings, diag);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            flags: read_field(obj, "flags", diag),
            bindings: read_array(obj, "bindingCount", "pBindings", diag),
        }
    }
}
extensible!(
    DescriptorSetLayoutCreateInfo,
    DESCRIPTOR_SET_LAYOUT_CREATE_INFO,
    "VkDescriptorSetLayoutCreateInfo",
    [DESCRIPTOR_SET_LAYOUT_BINDING_FLAGS_CREATE_INFO]
);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DescriptorSetLayoutBindingFlagsCreateInfo {
    pub binding_flags: Vec<DescriptorBindingFlags>,
}

impl Fields for DescriptorSetLayoutBindingFlagsCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_array(out, "bindingCount", "pBindingFlags", &self.binding_flags, diag);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            binding_flags: read_array(obj, "bindingCount", "pBindingFlags", diag),
        }
    }
}
structure!(
    DescriptorSetLayoutBindingFlagsCreateInfo,
    DESCRIPTOR_SET_LAYOUT_BINDING_FLAGS_CREATE_INFO,
    "VkDescriptorSetLayoutBindingFlagsCreateInfo"
);

record! {
    pub struct PushConstantRange {
        stage_flags: ShaderStageFlags => "stageFlags",
        offset: u32 => "offset",
        size: u32 => "size",
    }
}

/// `set_layouts` entries index the document's descriptor-set layouts.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineLayoutCreateInfo {
    pub flags: PipelineLayoutCreateFlags,
    pub set_layouts: Vec<Handle>,
    pub push_constant_ranges: Vec<PushConstantRange>,
}

impl Fields for PipelineLayoutCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_array(out, "setLayoutCount", "pSetLayouts", &self.set_layouts, diag);
        write_array(
            out,
            "pushConstantRangeCount",
            "pPushConstantRanges",
            &self.push_constant_ranges,
            diag,
        );
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            flags: read_field(obj, "flags", diag),
            set_layouts: read_array(obj, "setLayoutCount", "pSetLayouts", diag),
            push_constant_ranges: read_array(obj, "pushConstantRangeCount", "pPushConstantRanges", diag),
        }
    }
}
extensible!(
    PipelineLayoutCreateInfo,
    PIPELINE_LAYOUT_CREATE_INFO,
    "VkPipelineLayoutCreateInfo",
    []
);

/// SPIR-V words as raw bytes; `codeSize` is the byte length.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShaderModuleCreateInfo {
    pub flags: ShaderModuleCreateFlags,
    pub code: Vec<u8>,
}

impl Fields for ShaderModuleCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_blob(out, "codeSize", "pCode", &self.code);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            flags: read_field(obj, "flags", diag),
            code: read_blob(obj, "codeSize", "pCode", diag),
        }
    }
}
extensible!(
    ShaderModuleCreateInfo,
    SHADER_MODULE_CREATE_INFO,
    "VkShaderModuleCreateInfo",
    []
);
