//! Pipeline create records and their fixed-function state.

use pcjson_core::{
    check_governed_len, read_array, read_blob, read_field, read_optional_array, write_array,
    write_blob, write_field, write_optional_array, Diagnostics, Fields,
};
use serde_json::{Map, Value};

use super::types::*;
use super::Chained;

record! {
    pub struct SpecializationMapEntry {
        constant_id: u32 => "constantID",
        offset: u32 => "offset",
        size: u64 => "size",
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SpecializationInfo {
    pub map_entries: Vec<SpecializationMapEntry>,
    pub data: Vec<u8>,
}

impl Fields for SpecializationInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_array(out, "mapEntryCount", "pMapEntries", &self.map_entries, diag);
        write_blob(out, "dataSize", "pData", &self.data);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            map_entries: read_array(obj, "mapEntryCount", "pMapEntries", diag),
            data: read_blob(obj, "dataSize", "pData", diag),
        }
    }
}

impl pcjson_core::JsonValue for SpecializationInfo {
    fn to_json(&self, diag: &mut Diagnostics) -> Value {
        pcjson_core::encode_object(self, diag)
    }

    fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
        pcjson_core::decode_object(value, diag)
    }
}

record! {
    pub struct PipelineShaderStageCreateInfo {
        flags: PipelineShaderStageCreateFlags => "flags",
        stage: ShaderStageFlags => "stage",
        module: Handle => "module",
        name: String => "pName",
        specialization_info: Option<SpecializationInfo> => "pSpecializationInfo",
    }
}
extensible!(
    PipelineShaderStageCreateInfo,
    PIPELINE_SHADER_STAGE_CREATE_INFO,
    "VkPipelineShaderStageCreateInfo",
    [PIPELINE_SHADER_STAGE_REQUIRED_SUBGROUP_SIZE_CREATE_INFO]
);

record! {
    pub struct VertexInputBindingDescription {
        binding: u32 => "binding",
        stride: u32 => "stride",
        input_rate: VertexInputRate => "inputRate",
    }
}

record! {
    pub struct VertexInputAttributeDescription {
        location: u32 => "location",
        binding: u32 => "binding",
        format: Format => "format",
        offset: u32 => "offset",
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineVertexInputStateCreateInfo {
    pub flags: PipelineVertexInputStateCreateFlags,
    pub vertex_binding_descriptions: Vec<VertexInputBindingDescription>,
    pub vertex_attribute_descriptions: Vec<VertexInputAttributeDescription>,
}

impl Fields for PipelineVertexInputStateCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_array(
            out,
            "vertexBindingDescriptionCount",
            "pVertexBindingDescriptions",
            &self.vertex_binding_descriptions,
            diag,
        );
        write_array(
            out,
            "vertexAttributeDescriptionCount",
            "pVertexAttributeDescriptions",
            &self.vertex_attribute_descriptions,
            diag,
        );
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            flags: read_field(obj, "flags", diag),
            vertex_binding_descriptions: read_array(
                obj,
                "vertexBindingDescriptionCount",
                "pVertexBindingDescriptions",
                diag,
            ),
            vertex_attribute_descriptions: read_array(
                obj,
                "vertexAttributeDescriptionCount",
                "pVertexAttributeDescriptions",
                diag,
            ),
        }
    }
}
extensible!(
    PipelineVertexInputStateCreateInfo,
    PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO,
    "VkPipelineVertexInputStateCreateInfo",
    []
);

record! {
    pub struct PipelineInputAssemblyStateCreateInfo {
        flags: PipelineInputAssemblyStateCreateFlags => "flags",
        topology: PrimitiveTopology => "topology",
        primitive_restart_enable: bool => "primitiveRestartEnable",
    }
}
extensible!(
    PipelineInputAssemblyStateCreateInfo,
    PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO,
    "VkPipelineInputAssemblyStateCreateInfo",
    []
);

record! {
    pub struct PipelineTessellationStateCreateInfo {
        flags: PipelineTessellationStateCreateFlags => "flags",
        patch_control_points: u32 => "patchControlPoints",
    }
}
extensible!(
    PipelineTessellationStateCreateInfo,
    PIPELINE_TESSELLATION_STATE_CREATE_INFO,
    "VkPipelineTessellationStateCreateInfo",
    [PIPELINE_TESSELLATION_DOMAIN_ORIGIN_STATE_CREATE_INFO]
);

record! {
    pub struct Viewport {
        x: f32 => "x",
        y: f32 => "y",
        width: f32 => "width",
        height: f32 => "height",
        min_depth: f32 => "minDepth",
        max_depth: f32 => "maxDepth",
    }
}

record! {
    pub struct Offset2D {
        x: i32 => "x",
        y: i32 => "y",
    }
}

record! {
    pub struct Extent2D {
        width: u32 => "width",
        height: u32 => "height",
    }
}

record! {
    pub struct Rect2D {
        offset: Offset2D => "offset",
        extent: Extent2D => "extent",
    }
}

/// Viewports and scissors may be dynamic, in which case only the counts are
/// given and the arrays are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineViewportStateCreateInfo {
    pub flags: PipelineViewportStateCreateFlags,
    pub viewport_count: u32,
    pub viewports: Option<Vec<Viewport>>,
    pub scissor_count: u32,
    pub scissors: Option<Vec<Rect2D>>,
}

impl Fields for PipelineViewportStateCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_field(out, "viewportCount", &self.viewport_count, diag);
        check_governed_len(self.viewports.as_deref(), "pViewports", "viewportCount", self.viewport_count, diag);
        write_optional_array(out, "pViewports", self.viewports.as_deref(), diag);
        write_field(out, "scissorCount", &self.scissor_count, diag);
        check_governed_len(self.scissors.as_deref(), "pScissors", "scissorCount", self.scissor_count, diag);
        write_optional_array(out, "pScissors", self.scissors.as_deref(), diag);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        let viewport_count = read_field(obj, "viewportCount", diag);
        let viewports: Option<Vec<Viewport>> = read_optional_array(obj, "pViewports", diag);
        check_governed_len(viewports.as_deref(), "pViewports", "viewportCount", viewport_count, diag);
        let scissor_count = read_field(obj, "scissorCount", diag);
        let scissors: Option<Vec<Rect2D>> = read_optional_array(obj, "pScissors", diag);
        check_governed_len(scissors.as_deref(), "pScissors", "scissorCount", scissor_count, diag);
        Self {
            flags: read_field(obj, "flags", diag),
            viewport_count,
            viewports,
            scissor_count,
            scissors,
        }
    }
}
extensible!(
    PipelineViewportStateCreateInfo,
    PIPELINE_VIEWPORT_STATE_CREATE_INFO,
    "VkPipelineViewportStateCreateInfo",
    []
);

record! {
    pub struct PipelineRasterizationStateCreateInfo {
        flags: PipelineRasterizationStateCreateFlags => "flags",
        depth_clamp_enable: bool => "depthClampEnable",
        rasterizer_discard_enable: bool => "rasterizerDiscardEnable",
        polygon_mode: PolygonMode => "polygonMode",
        cull_mode: CullModeFlags => "cullMode",
        front_face: FrontFace => "frontFace",
        depth_bias_enable: bool => "depthBiasEnable",
        depth_bias_constant_factor: f32 => "depthBiasConstantFactor",
        depth_bias_clamp: f32 => "depthBiasClamp",
        depth_bias_slope_factor: f32 => "depthBiasSlopeFactor",
        line_width: f32 => "lineWidth",
    }
}
extensible!(
    PipelineRasterizationStateCreateInfo,
    PIPELINE_RASTERIZATION_STATE_CREATE_INFO,
    "VkPipelineRasterizationStateCreateInfo",
    []
);

/// `sample_mask`, when present, holds `ceil(samples / 32)` words.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineMultisampleStateCreateInfo {
    pub flags: PipelineMultisampleStateCreateFlags,
    pub rasterization_samples: SampleCountFlags,
    pub sample_shading_enable: bool,
    pub min_sample_shading: f32,
    pub sample_mask: Option<Vec<u32>>,
    pub alpha_to_coverage_enable: bool,
    pub alpha_to_one_enable: bool,
}

fn sample_mask_words(samples: SampleCountFlags) -> u32 {
    samples.0.max(1).div_ceil(32)
}

impl Fields for PipelineMultisampleStateCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_field(out, "rasterizationSamples", &self.rasterization_samples, diag);
        write_field(out, "sampleShadingEnable", &self.sample_shading_enable, diag);
        write_field(out, "minSampleShading", &self.min_sample_shading, diag);
        let words = sample_mask_words(self.rasterization_samples);
        check_governed_len(self.sample_mask.as_deref(), "pSampleMask", "rasterizationSamples", words, diag);
        write_optional_array(out, "pSampleMask", self.sample_mask.as_deref(), diag);
        write_field(out, "alphaToCoverageEnable", &self.alpha_to_coverage_enable, diag);
        write_field(out, "alphaToOneEnable", &self.alpha_to_one_enable, diag);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        let rasterization_samples: SampleCountFlags = read_field(obj, "rasterizationSamples", diag);
        let sample_mask: Option<Vec<u32>> = read_optional_array(obj, "pSampleMask", diag);
        let words = sample_mask_words(rasterization_samples);
        check_governed_len(sample_mask.as_deref(), "pSampleMask", "rasterizationSamples", words, diag);
        Self {
            flags: read_field(obj, "flags", diag),
            rasterization_samples,
            sample_shading_enable: read_field(obj, "sampleShadingEnable", diag),
            min_sample_shading: read_field(obj, "minSampleShading", diag),
            sample_mask,
            alpha_to_coverage_enable: read_field(obj, "alphaToCoverageEnable", diag),
            alpha_to_one_enable: read_field(obj, "alphaToOneEnable", diag),
        }
    }
}
extensible!(
    PipelineMultisampleStateCreateInfo,
    PIPELINE_MULTISAMPLE_STATE_CREATE_INFO,
    "VkPipelineMultisampleStateCreateInfo",
    []
);

record! {
    pub struct StencilOpState {
        fail_op: StencilOp => "failOp",
        pass_op: StencilOp => "passOp",
        depth_fail_op: StencilOp => "depthFailOp",
        compare_op: CompareOp => "compareOp",
        compare_mask: u32 => "compareMask",
        write_mask: u32 => "writeMask",
        reference: u32 => "reference",
    }
}

record! {
    pub struct PipelineDepthStencilStateCreateInfo {
        flags: PipelineDepthStencilStateCreateFlags => "flags",
        depth_test_enable: bool => "depthTestEnable",
        depth_write_enable: bool => "depthWriteEnable",
        depth_compare_op: CompareOp => "depthCompareOp",
        depth_bounds_test_enable: bool => "depthBoundsTestEnable",
        stencil_test_enable: bool => "stencilTestEnable",
        front: StencilOpState => "front",
        back: StencilOpState => "back",
        min_depth_bounds: f32 => "minDepthBounds",
        max_depth_bounds: f32 => "maxDepthBounds",
    }
}
extensible!(
    PipelineDepthStencilStateCreateInfo,
    PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO,
    "VkPipelineDepthStencilStateCreateInfo",
    []
);

record! {
    pub struct PipelineColorBlendAttachmentState {
        blend_enable: bool => "blendEnable",
        src_color_blend_factor: BlendFactor => "srcColorBlendFactor",
        dst_color_blend_factor: BlendFactor => "dstColorBlendFactor",
        color_blend_op: BlendOp => "colorBlendOp",
        src_alpha_blend_factor: BlendFactor => "srcAlphaBlendFactor",
        dst_alpha_blend_factor: BlendFactor => "dstAlphaBlendFactor",
        alpha_blend_op: BlendOp => "alphaBlendOp",
        color_write_mask: ColorComponentFlags => "colorWriteMask",
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineColorBlendStateCreateInfo {
    pub flags: PipelineColorBlendStateCreateFlags,
    pub logic_op_enable: bool,
    pub logic_op: LogicOp,
    pub attachments: Vec<PipelineColorBlendAttachmentState>,
    pub blend_constants: [f32; 4],
}

impl Fields for PipelineColorBlendStateCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_field(out, "logicOpEnable", &self.logic_op_enable, diag);
        write_field(out, "logicOp", &self.logic_op, diag);
        write_array(out, "attachmentCount", "pAttachments", &self.attachments, diag);
        write_field(out, "blendConstants", &self.blend_constants, diag);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            flags: read_field(obj, "flags", diag),
            logic_op_enable: read_field(obj, "logicOpEnable", diag),
            logic_op: read_field(obj, "logicOp", diag),
            attachments: read_array(obj, "attachmentCount", "pAttachments", diag),
            blend_constants: read_field(obj, "blendConstants", diag),
        }
    }
}
extensible!(
    PipelineColorBlendStateCreateInfo,
    PIPELINE_COLOR_BLEND_STATE_CREATE_INFO,
    "VkPipelineColorBlendStateCreateInfo",
    []
);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineDynamicStateCreateInfo {
    pub flags: PipelineDynamicStateCreateFlags,
    pub dynamic_states: Vec<DynamicState>,
}

impl Fields for PipelineDynamicStateCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_array(out, "dynamicStateCount", "pDynamicStates", &self.dynamic_states, diag);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            flags: read_field(obj, "flags", diag),
            dynamic_states: read_array(obj, "dynamicStateCount", "pDynamicStates", diag),
        }
    }
}
extensible!(
    PipelineDynamicStateCreateInfo,
    PIPELINE_DYNAMIC_STATE_CREATE_INFO,
    "VkPipelineDynamicStateCreateInfo",
    []
);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphicsPipelineCreateInfo {
    pub flags: PipelineCreateFlags,
    pub stages: Vec<Chained<PipelineShaderStageCreateInfo>>,
    pub vertex_input_state: Option<Chained<PipelineVertexInputStateCreateInfo>>,
    pub input_assembly_state: Option<Chained<PipelineInputAssemblyStateCreateInfo>>,
    pub tessellation_state: Option<Chained<PipelineTessellationStateCreateInfo>>,
    pub viewport_state: Option<Chained<PipelineViewportStateCreateInfo>>,
    pub rasterization_state: Option<Chained<PipelineRasterizationStateCreateInfo>>,
    pub multisample_state: Option<Chained<PipelineMultisampleStateCreateInfo>>,
    pub depth_stencil_state: Option<Chained<PipelineDepthStencilStateCreateInfo>>,
    pub color_blend_state: Option<Chained<PipelineColorBlendStateCreateInfo>>,
    pub dynamic_state: Option<Chained<PipelineDynamicStateCreateInfo>>,
    pub layout: Handle,
    pub render_pass: Handle,
    pub subpass: u32,
    pub base_pipeline_handle: Handle,
    pub base_pipeline_index: i32,
}

impl Fields for GraphicsPipelineCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_array(out, "stageCount", "pStages", &self.stages, diag);
        write_field(out, "pVertexInputState", &self.vertex_input_state, diag);
        write_field(out, "pInputAssemblyState", &self.input_assembly_state, diag);
        write_field(out, "pTessellationState", &self.tessellation_state, diag);
        write_field(out, "pViewportState", &self.viewport_state, diag);
        write_field(out, "pRasterizationState", &self.rasterization_state, diag);
        write_field(out, "pMultisampleState", &self.multisample_state, diag);
        write_field(out, "pDepthStencilState", &self.depth_stencil_state, diag);
        write_field(out, "pColorBlendState", &self.color_blend_state, diag);
        write_field(out, "pDynamicState", &self.dynamic_state, diag);
        write_field(out, "layout", &self.layout, diag);
        write_field(out, "renderPass", &self.render_pass, diag);
        write_field(out, "subpass", &self.subpass, diag);
        write_field(out, "basePipelineHandle", &self.base_pipeline_handle, diag);
        write_field(out, "basePipelineIndex", &self.base_pipeline_index, diag);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            flags: read_field(obj, "flags", diag),
            stages: read_array(obj, "stageCount", "pStages", diag),
            vertex_input_state: read_field(obj, "pVertexInputState", diag),
            input_assembly_state: read_field(obj, "pInputAssemblyState", diag),
            tessellation_state: read_field(obj, "pTessellationState", diag),
            viewport_state: read_field(obj, "pViewportState", diag),
            rasterization_state: read_field(obj, "pRasterizationState", diag),
            multisample_state: read_field(obj, "pMultisampleState", diag),
            depth_stencil_state: read_field(obj, "pDepthStencilState", diag),
            color_blend_state: read_field(obj, "pColorBlendState", diag),
            dynamic_state: read_field(obj, "pDynamicState", diag),
            layout: read_field(obj, "layout", diag),
            render_pass: read_field(obj, "renderPass", diag),
            subpass: read_field(obj, "subpass", diag),
            base_pipeline_handle: read_field(obj, "basePipelineHandle", diag),
            base_pipeline_index: read_field(obj, "basePipelineIndex", diag),
        }
    }
}
extensible!(
    GraphicsPipelineCreateInfo,
    GRAPHICS_PIPELINE_CREATE_INFO,
    "VkGraphicsPipelineCreateInfo",
    [PIPELINE_OFFLINE_CREATE_INFO, PIPELINE_DISCARD_RECTANGLE_STATE_CREATE_INFO_EXT]
);

record! {
    pub struct ComputePipelineCreateInfo {
        flags: PipelineCreateFlags => "flags",
        stage: Chained<PipelineShaderStageCreateInfo> => "stage",
        layout: Handle => "layout",
        base_pipeline_handle: Handle => "basePipelineHandle",
        base_pipeline_index: i32 => "basePipelineIndex",
    }
}
extensible!(
    ComputePipelineCreateInfo,
    COMPUTE_PIPELINE_CREATE_INFO,
    "VkComputePipelineCreateInfo",
    [PIPELINE_OFFLINE_CREATE_INFO]
);

record! {
    pub struct PipelineShaderStageRequiredSubgroupSizeCreateInfo {
        required_subgroup_size: u32 => "requiredSubgroupSize",
    }
}
structure!(
    PipelineShaderStageRequiredSubgroupSizeCreateInfo,
    PIPELINE_SHADER_STAGE_REQUIRED_SUBGROUP_SIZE_CREATE_INFO,
    "VkPipelineShaderStageRequiredSubgroupSizeCreateInfo"
);

record! {
    pub struct PipelineTessellationDomainOriginStateCreateInfo {
        domain_origin: TessellationDomainOrigin => "domainOrigin",
    }
}
structure!(
    PipelineTessellationDomainOriginStateCreateInfo,
    PIPELINE_TESSELLATION_DOMAIN_ORIGIN_STATE_CREATE_INFO,
    "VkPipelineTessellationDomainOriginStateCreateInfo"
);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineDiscardRectangleStateCreateInfoEXT {
    pub flags: PipelineDiscardRectangleStateCreateFlagsEXT,
    pub discard_rectangle_mode: DiscardRectangleModeEXT,
    pub discard_rectangles: Vec<Rect2D>,
}

impl Fields for PipelineDiscardRectangleStateCreateInfoEXT {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_field(out, "discardRectangleMode", &self.discard_rectangle_mode, diag);
        write_array(
            out,
            "discardRectangleCount",
            "pDiscardRectangles",
            &self.discard_rectangles,
            diag,
        );
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            flags: read_field(obj, "flags", diag),
            discard_rectangle_mode: read_field(obj, "discardRectangleMode", diag),
            discard_rectangles: read_array(obj, "discardRectangleCount", "pDiscardRectangles", diag),
        }
    }
}
structure!(
    PipelineDiscardRectangleStateCreateInfoEXT,
    PIPELINE_DISCARD_RECTANGLE_STATE_CREATE_INFO_EXT,
    "VkPipelineDiscardRectangleStateCreateInfoEXT"
);
