//! Enumerations, bitmasks and handles used by the pipeline records.

use pcjson_core::{Diagnostics, Discriminant, EnumTable, JsonValue};
use serde_json::Value;

vk_enum! {
    /// Discriminator of every record that carries `sType`.
    StructureType, "VkStructureType" {
        SHADER_MODULE_CREATE_INFO = 16 => "VK_STRUCTURE_TYPE_SHADER_MODULE_CREATE_INFO",
        PIPELINE_CACHE_CREATE_INFO = 17 => "VK_STRUCTURE_TYPE_PIPELINE_CACHE_CREATE_INFO",
        PIPELINE_SHADER_STAGE_CREATE_INFO = 18 => "VK_STRUCTURE_TYPE_PIPELINE_SHADER_STAGE_CREATE_INFO",
        PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO = 19 => "VK_STRUCTURE_TYPE_PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO",
        PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO = 20 => "VK_STRUCTURE_TYPE_PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO",
        PIPELINE_TESSELLATION_STATE_CREATE_INFO = 21 => "VK_STRUCTURE_TYPE_PIPELINE_TESSELLATION_STATE_CREATE_INFO",
        PIPELINE_VIEWPORT_STATE_CREATE_INFO = 22 => "VK_STRUCTURE_TYPE_PIPELINE_VIEWPORT_STATE_CREATE_INFO",
        PIPELINE_RASTERIZATION_STATE_CREATE_INFO = 23 => "VK_STRUCTURE_TYPE_PIPELINE_RASTERIZATION_STATE_CREATE_INFO",
        PIPELINE_MULTISAMPLE_STATE_CREATE_INFO = 24 => "VK_STRUCTURE_TYPE_PIPELINE_MULTISAMPLE_STATE_CREATE_INFO",
        PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO = 25 => "VK_STRUCTURE_TYPE_PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO",
        PIPELINE_COLOR_BLEND_STATE_CREATE_INFO = 26 => "VK_STRUCTURE_TYPE_PIPELINE_COLOR_BLEND_STATE_CREATE_INFO",
        PIPELINE_DYNAMIC_STATE_CREATE_INFO = 27 => "VK_STRUCTURE_TYPE_PIPELINE_DYNAMIC_STATE_CREATE_INFO",
        GRAPHICS_PIPELINE_CREATE_INFO = 28 => "VK_STRUCTURE_TYPE_GRAPHICS_PIPELINE_CREATE_INFO",
        COMPUTE_PIPELINE_CREATE_INFO = 29 => "VK_STRUCTURE_TYPE_COMPUTE_PIPELINE_CREATE_INFO",
        PIPELINE_LAYOUT_CREATE_INFO = 30 => "VK_STRUCTURE_TYPE_PIPELINE_LAYOUT_CREATE_INFO",
        SAMPLER_CREATE_INFO = 31 => "VK_STRUCTURE_TYPE_SAMPLER_CREATE_INFO",
        DESCRIPTOR_SET_LAYOUT_CREATE_INFO = 32 => "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_LAYOUT_CREATE_INFO",
        RENDER_PASS_CREATE_INFO = 38 => "VK_STRUCTURE_TYPE_RENDER_PASS_CREATE_INFO",
        PHYSICAL_DEVICE_VULKAN_1_1_FEATURES = 49 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_1_FEATURES",
        PHYSICAL_DEVICE_VULKAN_1_2_FEATURES = 51 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_2_FEATURES",
        RENDER_PASS_MULTIVIEW_CREATE_INFO = 1000053000 => "VK_STRUCTURE_TYPE_RENDER_PASS_MULTIVIEW_CREATE_INFO",
        PHYSICAL_DEVICE_FEATURES_2 = 1000059000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2",
        PIPELINE_DISCARD_RECTANGLE_STATE_CREATE_INFO_EXT = 1000099001 => "VK_STRUCTURE_TYPE_PIPELINE_DISCARD_RECTANGLE_STATE_CREATE_INFO_EXT",
        ATTACHMENT_DESCRIPTION_2 = 1000109000 => "VK_STRUCTURE_TYPE_ATTACHMENT_DESCRIPTION_2",
        ATTACHMENT_REFERENCE_2 = 1000109001 => "VK_STRUCTURE_TYPE_ATTACHMENT_REFERENCE_2",
        SUBPASS_DESCRIPTION_2 = 1000109002 => "VK_STRUCTURE_TYPE_SUBPASS_DESCRIPTION_2",
        SUBPASS_DEPENDENCY_2 = 1000109003 => "VK_STRUCTURE_TYPE_SUBPASS_DEPENDENCY_2",
        RENDER_PASS_CREATE_INFO_2 = 1000109004 => "VK_STRUCTURE_TYPE_RENDER_PASS_CREATE_INFO_2",
        PIPELINE_TESSELLATION_DOMAIN_ORIGIN_STATE_CREATE_INFO = 1000117003 => "VK_STRUCTURE_TYPE_PIPELINE_TESSELLATION_DOMAIN_ORIGIN_STATE_CREATE_INFO",
        SAMPLER_REDUCTION_MODE_CREATE_INFO = 1000130001 => "VK_STRUCTURE_TYPE_SAMPLER_REDUCTION_MODE_CREATE_INFO",
        SAMPLER_YCBCR_CONVERSION_CREATE_INFO = 1000156000 => "VK_STRUCTURE_TYPE_SAMPLER_YCBCR_CONVERSION_CREATE_INFO",
        SAMPLER_YCBCR_CONVERSION_INFO = 1000156001 => "VK_STRUCTURE_TYPE_SAMPLER_YCBCR_CONVERSION_INFO",
        DESCRIPTOR_SET_LAYOUT_BINDING_FLAGS_CREATE_INFO = 1000161000 => "VK_STRUCTURE_TYPE_DESCRIPTOR_SET_LAYOUT_BINDING_FLAGS_CREATE_INFO",
        PHYSICAL_DEVICE_SCALAR_BLOCK_LAYOUT_FEATURES = 1000221000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_SCALAR_BLOCK_LAYOUT_FEATURES",
        PIPELINE_SHADER_STAGE_REQUIRED_SUBGROUP_SIZE_CREATE_INFO = 1000225001 => "VK_STRUCTURE_TYPE_PIPELINE_SHADER_STAGE_REQUIRED_SUBGROUP_SIZE_CREATE_INFO",
        PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES = 1000298000 => "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES",
        DEVICE_OBJECT_RESERVATION_CREATE_INFO = 1000298002 => "VK_STRUCTURE_TYPE_DEVICE_OBJECT_RESERVATION_CREATE_INFO",
        PIPELINE_POOL_SIZE = 1000298005 => "VK_STRUCTURE_TYPE_PIPELINE_POOL_SIZE",
        PIPELINE_OFFLINE_CREATE_INFO = 1000298010 => "VK_STRUCTURE_TYPE_PIPELINE_OFFLINE_CREATE_INFO",
    }
}

impl Discriminant for StructureType {
    const TABLE: &'static EnumTable = &StructureType::SYMBOLS;

    fn raw(self) -> i64 {
        i64::from(self.0)
    }

    fn from_raw(raw: i64) -> Self {
        StructureType(i32::try_from(raw).unwrap_or(i32::MAX))
    }
}

vk_enum! {
    Format, "VkFormat" {
        UNDEFINED = 0 => "VK_FORMAT_UNDEFINED",
        R8_UNORM = 9 => "VK_FORMAT_R8_UNORM",
        R8G8_UNORM = 16 => "VK_FORMAT_R8G8_UNORM",
        R8G8B8A8_UNORM = 37 => "VK_FORMAT_R8G8B8A8_UNORM",
        R8G8B8A8_SRGB = 43 => "VK_FORMAT_R8G8B8A8_SRGB",
        B8G8R8A8_UNORM = 44 => "VK_FORMAT_B8G8R8A8_UNORM",
        B8G8R8A8_SRGB = 50 => "VK_FORMAT_B8G8R8A8_SRGB",
        R16G16B16A16_SFLOAT = 97 => "VK_FORMAT_R16G16B16A16_SFLOAT",
        R32_UINT = 98 => "VK_FORMAT_R32_UINT",
        R32_SFLOAT = 100 => "VK_FORMAT_R32_SFLOAT",
        R32G32_SFLOAT = 103 => "VK_FORMAT_R32G32_SFLOAT",
        R32G32B32_SFLOAT = 106 => "VK_FORMAT_R32G32B32_SFLOAT",
        R32G32B32A32_SFLOAT = 109 => "VK_FORMAT_R32G32B32A32_SFLOAT",
        D16_UNORM = 124 => "VK_FORMAT_D16_UNORM",
        D32_SFLOAT = 126 => "VK_FORMAT_D32_SFLOAT",
        D24_UNORM_S8_UINT = 129 => "VK_FORMAT_D24_UNORM_S8_UINT",
        D32_SFLOAT_S8_UINT = 130 => "VK_FORMAT_D32_SFLOAT_S8_UINT",
        G8_B8_R8_3PLANE_420_UNORM = 1000156002 => "VK_FORMAT_G8_B8_R8_3PLANE_420_UNORM",
        G8_B8R8_2PLANE_420_UNORM = 1000156003 => "VK_FORMAT_G8_B8R8_2PLANE_420_UNORM",
    }
}

vk_enum! {
    VertexInputRate, "VkVertexInputRate" {
        VERTEX = 0 => "VK_VERTEX_INPUT_RATE_VERTEX",
        INSTANCE = 1 => "VK_VERTEX_INPUT_RATE_INSTANCE",
    }
}

vk_enum! {
    PrimitiveTopology, "VkPrimitiveTopology" {
        POINT_LIST = 0 => "VK_PRIMITIVE_TOPOLOGY_POINT_LIST",
        LINE_LIST = 1 => "VK_PRIMITIVE_TOPOLOGY_LINE_LIST",
        LINE_STRIP = 2 => "VK_PRIMITIVE_TOPOLOGY_LINE_STRIP",
        TRIANGLE_LIST = 3 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST",
        TRIANGLE_STRIP = 4 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_STRIP",
        TRIANGLE_FAN = 5 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_FAN",
        LINE_LIST_WITH_ADJACENCY = 6 => "VK_PRIMITIVE_TOPOLOGY_LINE_LIST_WITH_ADJACENCY",
        LINE_STRIP_WITH_ADJACENCY = 7 => "VK_PRIMITIVE_TOPOLOGY_LINE_STRIP_WITH_ADJACENCY",
        TRIANGLE_LIST_WITH_ADJACENCY = 8 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_LIST_WITH_ADJACENCY",
        TRIANGLE_STRIP_WITH_ADJACENCY = 9 => "VK_PRIMITIVE_TOPOLOGY_TRIANGLE_STRIP_WITH_ADJACENCY",
        PATCH_LIST = 10 => "VK_PRIMITIVE_TOPOLOGY_PATCH_LIST",
    }
}

vk_enum! {
    PolygonMode, "VkPolygonMode" {
        FILL = 0 => "VK_POLYGON_MODE_FILL",
        LINE = 1 => "VK_POLYGON_MODE_LINE",
        POINT = 2 => "VK_POLYGON_MODE_POINT",
    }
}

vk_enum! {
    FrontFace, "VkFrontFace" {
        COUNTER_CLOCKWISE = 0 => "VK_FRONT_FACE_COUNTER_CLOCKWISE",
        CLOCKWISE = 1 => "VK_FRONT_FACE_CLOCKWISE",
    }
}

vk_enum! {
    CompareOp, "VkCompareOp" {
        NEVER = 0 => "VK_COMPARE_OP_NEVER",
        LESS = 1 => "VK_COMPARE_OP_LESS",
        EQUAL = 2 => "VK_COMPARE_OP_EQUAL",
        LESS_OR_EQUAL = 3 => "VK_COMPARE_OP_LESS_OR_EQUAL",
        GREATER = 4 => "VK_COMPARE_OP_GREATER",
        NOT_EQUAL = 5 => "VK_COMPARE_OP_NOT_EQUAL",
        GREATER_OR_EQUAL = 6 => "VK_COMPARE_OP_GREATER_OR_EQUAL",
        ALWAYS = 7 => "VK_COMPARE_OP_ALWAYS",
    }
}

vk_enum! {
    StencilOp, "VkStencilOp" {
        KEEP = 0 => "VK_STENCIL_OP_KEEP",
        ZERO = 1 => "VK_STENCIL_OP_ZERO",
        REPLACE = 2 => "VK_STENCIL_OP_REPLACE",
        INCREMENT_AND_CLAMP = 3 => "VK_STENCIL_OP_INCREMENT_AND_CLAMP",
        DECREMENT_AND_CLAMP = 4 => "VK_STENCIL_OP_DECREMENT_AND_CLAMP",
        INVERT = 5 => "VK_STENCIL_OP_INVERT",
        INCREMENT_AND_WRAP = 6 => "VK_STENCIL_OP_INCREMENT_AND_WRAP",
        DECREMENT_AND_WRAP = 7 => "VK_STENCIL_OP_DECREMENT_AND_WRAP",
    }
}

vk_enum! {
    LogicOp, "VkLogicOp" {
        CLEAR = 0 => "VK_LOGIC_OP_CLEAR",
        AND = 1 => "VK_LOGIC_OP_AND",
        AND_REVERSE = 2 => "VK_LOGIC_OP_AND_REVERSE",
        COPY = 3 => "VK_LOGIC_OP_COPY",
        AND_INVERTED = 4 => "VK_LOGIC_OP_AND_INVERTED",
        NO_OP = 5 => "VK_LOGIC_OP_NO_OP",
        XOR = 6 => "VK_LOGIC_OP_XOR",
        OR = 7 => "VK_LOGIC_OP_OR",
        NOR = 8 => "VK_LOGIC_OP_NOR",
        EQUIVALENT = 9 => "VK_LOGIC_OP_EQUIVALENT",
        INVERT = 10 => "VK_LOGIC_OP_INVERT",
        OR_REVERSE = 11 => "VK_LOGIC_OP_OR_REVERSE",
        COPY_INVERTED = 12 => "VK_LOGIC_OP_COPY_INVERTED",
        OR_INVERTED = 13 => "VK_LOGIC_OP_OR_INVERTED",
        NAND = 14 => "VK_LOGIC_OP_NAND",
        SET = 15 => "VK_LOGIC_OP_SET",
    }
}

vk_enum! {
    BlendFactor, "VkBlendFactor" {
        ZERO = 0 => "VK_BLEND_FACTOR_ZERO",
        ONE = 1 => "VK_BLEND_FACTOR_ONE",
        SRC_COLOR = 2 => "VK_BLEND_FACTOR_SRC_COLOR",
        ONE_MINUS_SRC_COLOR = 3 => "VK_BLEND_FACTOR_ONE_MINUS_SRC_COLOR",
        DST_COLOR = 4 => "VK_BLEND_FACTOR_DST_COLOR",
        ONE_MINUS_DST_COLOR = 5 => "VK_BLEND_FACTOR_ONE_MINUS_DST_COLOR",
        SRC_ALPHA = 6 => "VK_BLEND_FACTOR_SRC_ALPHA",
        ONE_MINUS_SRC_ALPHA = 7 => "VK_BLEND_FACTOR_ONE_MINUS_SRC_ALPHA",
        DST_ALPHA = 8 => "VK_BLEND_FACTOR_DST_ALPHA",
        ONE_MINUS_DST_ALPHA = 9 => "VK_BLEND_FACTOR_ONE_MINUS_DST_ALPHA",
        CONSTANT_COLOR = 10 => "VK_BLEND_FACTOR_CONSTANT_COLOR",
        ONE_MINUS_CONSTANT_COLOR = 11 => "VK_BLEND_FACTOR_ONE_MINUS_CONSTANT_COLOR",
        CONSTANT_ALPHA = 12 => "VK_BLEND_FACTOR_CONSTANT_ALPHA",
        ONE_MINUS_CONSTANT_ALPHA = 13 => "VK_BLEND_FACTOR_ONE_MINUS_CONSTANT_ALPHA",
        SRC_ALPHA_SATURATE = 14 => "VK_BLEND_FACTOR_SRC_ALPHA_SATURATE",
        SRC1_COLOR = 15 => "VK_BLEND_FACTOR_SRC1_COLOR",
        ONE_MINUS_SRC1_COLOR = 16 => "VK_BLEND_FACTOR_ONE_MINUS_SRC1_COLOR",
        SRC1_ALPHA = 17 => "VK_BLEND_FACTOR_SRC1_ALPHA",
        ONE_MINUS_SRC1_ALPHA = 18 => "VK_BLEND_FACTOR_ONE_MINUS_SRC1_ALPHA",
    }
}

vk_enum! {
    BlendOp, "VkBlendOp" {
        ADD = 0 => "VK_BLEND_OP_ADD",
        SUBTRACT = 1 => "VK_BLEND_OP_SUBTRACT",
        REVERSE_SUBTRACT = 2 => "VK_BLEND_OP_REVERSE_SUBTRACT",
        MIN = 3 => "VK_BLEND_OP_MIN",
        MAX = 4 => "VK_BLEND_OP_MAX",
    }
}

vk_enum! {
    DynamicState, "VkDynamicState" {
        VIEWPORT = 0 => "VK_DYNAMIC_STATE_VIEWPORT",
        SCISSOR = 1 => "VK_DYNAMIC_STATE_SCISSOR",
        LINE_WIDTH = 2 => "VK_DYNAMIC_STATE_LINE_WIDTH",
        DEPTH_BIAS = 3 => "VK_DYNAMIC_STATE_DEPTH_BIAS",
        BLEND_CONSTANTS = 4 => "VK_DYNAMIC_STATE_BLEND_CONSTANTS",
        DEPTH_BOUNDS = 5 => "VK_DYNAMIC_STATE_DEPTH_BOUNDS",
        STENCIL_COMPARE_MASK = 6 => "VK_DYNAMIC_STATE_STENCIL_COMPARE_MASK",
        STENCIL_WRITE_MASK = 7 => "VK_DYNAMIC_STATE_STENCIL_WRITE_MASK",
        STENCIL_REFERENCE = 8 => "VK_DYNAMIC_STATE_STENCIL_REFERENCE",
        DISCARD_RECTANGLE_EXT = 1000099000 => "VK_DYNAMIC_STATE_DISCARD_RECTANGLE_EXT",
    }
}

vk_enum! {
    Filter, "VkFilter" {
        NEAREST = 0 => "VK_FILTER_NEAREST",
        LINEAR = 1 => "VK_FILTER_LINEAR",
    }
}

vk_enum! {
    SamplerMipmapMode, "VkSamplerMipmapMode" {
        NEAREST = 0 => "VK_SAMPLER_MIPMAP_MODE_NEAREST",
        LINEAR = 1 => "VK_SAMPLER_MIPMAP_MODE_LINEAR",
    }
}

vk_enum! {
    SamplerAddressMode, "VkSamplerAddressMode" {
        REPEAT = 0 => "VK_SAMPLER_ADDRESS_MODE_REPEAT",
        MIRRORED_REPEAT = 1 => "VK_SAMPLER_ADDRESS_MODE_MIRRORED_REPEAT",
        CLAMP_TO_EDGE = 2 => "VK_SAMPLER_ADDRESS_MODE_CLAMP_TO_EDGE",
        CLAMP_TO_BORDER = 3 => "VK_SAMPLER_ADDRESS_MODE_CLAMP_TO_BORDER",
        MIRROR_CLAMP_TO_EDGE = 4 => "VK_SAMPLER_ADDRESS_MODE_MIRROR_CLAMP_TO_EDGE",
    }
}

vk_enum! {
    BorderColor, "VkBorderColor" {
        FLOAT_TRANSPARENT_BLACK = 0 => "VK_BORDER_COLOR_FLOAT_TRANSPARENT_BLACK",
        INT_TRANSPARENT_BLACK = 1 => "VK_BORDER_COLOR_INT_TRANSPARENT_BLACK",
        FLOAT_OPAQUE_BLACK = 2 => "VK_BORDER_COLOR_FLOAT_OPAQUE_BLACK",
        INT_OPAQUE_BLACK = 3 => "VK_BORDER_COLOR_INT_OPAQUE_BLACK",
        FLOAT_OPAQUE_WHITE = 4 => "VK_BORDER_COLOR_FLOAT_OPAQUE_WHITE",
        INT_OPAQUE_WHITE = 5 => "VK_BORDER_COLOR_INT_OPAQUE_WHITE",
    }
}

vk_enum! {
    SamplerReductionMode, "VkSamplerReductionMode" {
        WEIGHTED_AVERAGE = 0 => "VK_SAMPLER_REDUCTION_MODE_WEIGHTED_AVERAGE",
        MIN = 1 => "VK_SAMPLER_REDUCTION_MODE_MIN",
        MAX = 2 => "VK_SAMPLER_REDUCTION_MODE_MAX",
    }
}

vk_enum! {
    SamplerYcbcrModelConversion, "VkSamplerYcbcrModelConversion" {
        RGB_IDENTITY = 0 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_RGB_IDENTITY",
        YCBCR_IDENTITY = 1 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_YCBCR_IDENTITY",
        YCBCR_709 = 2 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_YCBCR_709",
        YCBCR_601 = 3 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_YCBCR_601",
        YCBCR_2020 = 4 => "VK_SAMPLER_YCBCR_MODEL_CONVERSION_YCBCR_2020",
    }
}

vk_enum! {
    SamplerYcbcrRange, "VkSamplerYcbcrRange" {
        ITU_FULL = 0 => "VK_SAMPLER_YCBCR_RANGE_ITU_FULL",
        ITU_NARROW = 1 => "VK_SAMPLER_YCBCR_RANGE_ITU_NARROW",
    }
}

vk_enum! {
    ComponentSwizzle, "VkComponentSwizzle" {
        IDENTITY = 0 => "VK_COMPONENT_SWIZZLE_IDENTITY",
        ZERO = 1 => "VK_COMPONENT_SWIZZLE_ZERO",
        ONE = 2 => "VK_COMPONENT_SWIZZLE_ONE",
        R = 3 => "VK_COMPONENT_SWIZZLE_R",
        G = 4 => "VK_COMPONENT_SWIZZLE_G",
        B = 5 => "VK_COMPONENT_SWIZZLE_B",
        A = 6 => "VK_COMPONENT_SWIZZLE_A",
    }
}

vk_enum! {
    ChromaLocation, "VkChromaLocation" {
        COSITED_EVEN = 0 => "VK_CHROMA_LOCATION_COSITED_EVEN",
        MIDPOINT = 1 => "VK_CHROMA_LOCATION_MIDPOINT",
    }
}

vk_enum! {
    DescriptorType, "VkDescriptorType" {
        SAMPLER = 0 => "VK_DESCRIPTOR_TYPE_SAMPLER",
        COMBINED_IMAGE_SAMPLER = 1 => "VK_DESCRIPTOR_TYPE_COMBINED_IMAGE_SAMPLER",
        SAMPLED_IMAGE = 2 => "VK_DESCRIPTOR_TYPE_SAMPLED_IMAGE",
        STORAGE_IMAGE = 3 => "VK_DESCRIPTOR_TYPE_STORAGE_IMAGE",
        UNIFORM_TEXEL_BUFFER = 4 => "VK_DESCRIPTOR_TYPE_UNIFORM_TEXEL_BUFFER",
        STORAGE_TEXEL_BUFFER = 5 => "VK_DESCRIPTOR_TYPE_STORAGE_TEXEL_BUFFER",
        UNIFORM_BUFFER = 6 => "VK_DESCRIPTOR_TYPE_UNIFORM_BUFFER",
        STORAGE_BUFFER = 7 => "VK_DESCRIPTOR_TYPE_STORAGE_BUFFER",
        UNIFORM_BUFFER_DYNAMIC = 8 => "VK_DESCRIPTOR_TYPE_UNIFORM_BUFFER_DYNAMIC",
        STORAGE_BUFFER_DYNAMIC = 9 => "VK_DESCRIPTOR_TYPE_STORAGE_BUFFER_DYNAMIC",
        INPUT_ATTACHMENT = 10 => "VK_DESCRIPTOR_TYPE_INPUT_ATTACHMENT",
    }
}

vk_enum! {
    AttachmentLoadOp, "VkAttachmentLoadOp" {
        LOAD = 0 => "VK_ATTACHMENT_LOAD_OP_LOAD",
        CLEAR = 1 => "VK_ATTACHMENT_LOAD_OP_CLEAR",
        DONT_CARE = 2 => "VK_ATTACHMENT_LOAD_OP_DONT_CARE",
    }
}

vk_enum! {
    AttachmentStoreOp, "VkAttachmentStoreOp" {
        STORE = 0 => "VK_ATTACHMENT_STORE_OP_STORE",
        DONT_CARE = 1 => "VK_ATTACHMENT_STORE_OP_DONT_CARE",
    }
}

vk_enum! {
    ImageLayout, "VkImageLayout" {
        UNDEFINED = 0 => "VK_IMAGE_LAYOUT_UNDEFINED",
        GENERAL = 1 => "VK_IMAGE_LAYOUT_GENERAL",
        COLOR_ATTACHMENT_OPTIMAL = 2 => "VK_IMAGE_LAYOUT_COLOR_ATTACHMENT_OPTIMAL",
        DEPTH_STENCIL_ATTACHMENT_OPTIMAL = 3 => "VK_IMAGE_LAYOUT_DEPTH_STENCIL_ATTACHMENT_OPTIMAL",
        DEPTH_STENCIL_READ_ONLY_OPTIMAL = 4 => "VK_IMAGE_LAYOUT_DEPTH_STENCIL_READ_ONLY_OPTIMAL",
        SHADER_READ_ONLY_OPTIMAL = 5 => "VK_IMAGE_LAYOUT_SHADER_READ_ONLY_OPTIMAL",
        TRANSFER_SRC_OPTIMAL = 6 => "VK_IMAGE_LAYOUT_TRANSFER_SRC_OPTIMAL",
        TRANSFER_DST_OPTIMAL = 7 => "VK_IMAGE_LAYOUT_TRANSFER_DST_OPTIMAL",
        PREINITIALIZED = 8 => "VK_IMAGE_LAYOUT_PREINITIALIZED",
        PRESENT_SRC_KHR = 1000001002 => "VK_IMAGE_LAYOUT_PRESENT_SRC_KHR",
    }
}

vk_enum! {
    PipelineBindPoint, "VkPipelineBindPoint" {
        GRAPHICS = 0 => "VK_PIPELINE_BIND_POINT_GRAPHICS",
        COMPUTE = 1 => "VK_PIPELINE_BIND_POINT_COMPUTE",
    }
}

vk_enum! {
    TessellationDomainOrigin, "VkTessellationDomainOrigin" {
        UPPER_LEFT = 0 => "VK_TESSELLATION_DOMAIN_ORIGIN_UPPER_LEFT",
        LOWER_LEFT = 1 => "VK_TESSELLATION_DOMAIN_ORIGIN_LOWER_LEFT",
    }
}

vk_enum! {
    DiscardRectangleModeEXT, "VkDiscardRectangleModeEXT" {
        INCLUSIVE = 0 => "VK_DISCARD_RECTANGLE_MODE_INCLUSIVE_EXT",
        EXCLUSIVE = 1 => "VK_DISCARD_RECTANGLE_MODE_EXCLUSIVE_EXT",
    }
}

vk_enum! {
    PipelineMatchControl, "VkPipelineMatchControl" {
        APPLICATION_UUID_EXACT_MATCH = 0 => "VK_PIPELINE_MATCH_CONTROL_APPLICATION_UUID_EXACT_MATCH",
    }
}

vk_flags! {
    PipelineCreateFlags(u32), "VkPipelineCreateFlags" {
        DISABLE_OPTIMIZATION = 0x1 => "VK_PIPELINE_CREATE_DISABLE_OPTIMIZATION_BIT",
        ALLOW_DERIVATIVES = 0x2 => "VK_PIPELINE_CREATE_ALLOW_DERIVATIVES_BIT",
        DERIVATIVE = 0x4 => "VK_PIPELINE_CREATE_DERIVATIVE_BIT",
        VIEW_INDEX_FROM_DEVICE_INDEX = 0x8 => "VK_PIPELINE_CREATE_VIEW_INDEX_FROM_DEVICE_INDEX_BIT",
        DISPATCH_BASE = 0x10 => "VK_PIPELINE_CREATE_DISPATCH_BASE_BIT",
    }
}

vk_flags! {
    /// Also used for single-stage fields, which hold exactly one bit.
    ShaderStageFlags(u32), "VkShaderStageFlags" {
        VERTEX = 0x1 => "VK_SHADER_STAGE_VERTEX_BIT",
        TESSELLATION_CONTROL = 0x2 => "VK_SHADER_STAGE_TESSELLATION_CONTROL_BIT",
        TESSELLATION_EVALUATION = 0x4 => "VK_SHADER_STAGE_TESSELLATION_EVALUATION_BIT",
        GEOMETRY = 0x8 => "VK_SHADER_STAGE_GEOMETRY_BIT",
        FRAGMENT = 0x10 => "VK_SHADER_STAGE_FRAGMENT_BIT",
        COMPUTE = 0x20 => "VK_SHADER_STAGE_COMPUTE_BIT",
    }
    aliases {
        ALL_GRAPHICS = 0x1f => "VK_SHADER_STAGE_ALL_GRAPHICS",
        ALL = 0x7fff_ffff => "VK_SHADER_STAGE_ALL",
    }
}

vk_flags! {
    SampleCountFlags(u32), "VkSampleCountFlags" {
        TYPE_1 = 0x1 => "VK_SAMPLE_COUNT_1_BIT",
        TYPE_2 = 0x2 => "VK_SAMPLE_COUNT_2_BIT",
        TYPE_4 = 0x4 => "VK_SAMPLE_COUNT_4_BIT",
        TYPE_8 = 0x8 => "VK_SAMPLE_COUNT_8_BIT",
        TYPE_16 = 0x10 => "VK_SAMPLE_COUNT_16_BIT",
        TYPE_32 = 0x20 => "VK_SAMPLE_COUNT_32_BIT",
        TYPE_64 = 0x40 => "VK_SAMPLE_COUNT_64_BIT",
    }
}

vk_flags! {
    CullModeFlags(u32), "VkCullModeFlags" {
        FRONT = 0x1 => "VK_CULL_MODE_FRONT_BIT",
        BACK = 0x2 => "VK_CULL_MODE_BACK_BIT",
    }
    aliases {
        FRONT_AND_BACK = 0x3 => "VK_CULL_MODE_FRONT_AND_BACK",
    }
}

vk_flags! {
    ColorComponentFlags(u32), "VkColorComponentFlags" {
        R = 0x1 => "VK_COLOR_COMPONENT_R_BIT",
        G = 0x2 => "VK_COLOR_COMPONENT_G_BIT",
        B = 0x4 => "VK_COLOR_COMPONENT_B_BIT",
        A = 0x8 => "VK_COLOR_COMPONENT_A_BIT",
    }
}

vk_flags! {
    DescriptorSetLayoutCreateFlags(u32), "VkDescriptorSetLayoutCreateFlags" {
        UPDATE_AFTER_BIND_POOL = 0x2 => "VK_DESCRIPTOR_SET_LAYOUT_CREATE_UPDATE_AFTER_BIND_POOL_BIT",
    }
}

vk_flags! {
    DescriptorBindingFlags(u32), "VkDescriptorBindingFlags" {
        UPDATE_AFTER_BIND = 0x1 => "VK_DESCRIPTOR_BINDING_UPDATE_AFTER_BIND_BIT",
        UPDATE_UNUSED_WHILE_PENDING = 0x2 => "VK_DESCRIPTOR_BINDING_UPDATE_UNUSED_WHILE_PENDING_BIT",
        PARTIALLY_BOUND = 0x4 => "VK_DESCRIPTOR_BINDING_PARTIALLY_BOUND_BIT",
        VARIABLE_DESCRIPTOR_COUNT = 0x8 => "VK_DESCRIPTOR_BINDING_VARIABLE_DESCRIPTOR_COUNT_BIT",
    }
}

vk_flags! {
    SamplerCreateFlags(u32), "VkSamplerCreateFlags" {
        SUBSAMPLED_EXT = 0x1 => "VK_SAMPLER_CREATE_SUBSAMPLED_BIT_EXT",
        SUBSAMPLED_COARSE_RECONSTRUCTION_EXT = 0x2 => "VK_SAMPLER_CREATE_SUBSAMPLED_COARSE_RECONSTRUCTION_BIT_EXT",
    }
}

vk_flags! {
    PipelineShaderStageCreateFlags(u32), "VkPipelineShaderStageCreateFlags" {
        ALLOW_VARYING_SUBGROUP_SIZE = 0x1 => "VK_PIPELINE_SHADER_STAGE_CREATE_ALLOW_VARYING_SUBGROUP_SIZE_BIT",
        REQUIRE_FULL_SUBGROUPS = 0x2 => "VK_PIPELINE_SHADER_STAGE_CREATE_REQUIRE_FULL_SUBGROUPS_BIT",
    }
}

vk_flags! {
    AttachmentDescriptionFlags(u32), "VkAttachmentDescriptionFlags" {
        MAY_ALIAS = 0x1 => "VK_ATTACHMENT_DESCRIPTION_MAY_ALIAS_BIT",
    }
}

vk_flags! {
    PipelineStageFlags(u32), "VkPipelineStageFlags" {
        TOP_OF_PIPE = 0x1 => "VK_PIPELINE_STAGE_TOP_OF_PIPE_BIT",
        DRAW_INDIRECT = 0x2 => "VK_PIPELINE_STAGE_DRAW_INDIRECT_BIT",
        VERTEX_INPUT = 0x4 => "VK_PIPELINE_STAGE_VERTEX_INPUT_BIT",
        VERTEX_SHADER = 0x8 => "VK_PIPELINE_STAGE_VERTEX_SHADER_BIT",
        TESSELLATION_CONTROL_SHADER = 0x10 => "VK_PIPELINE_STAGE_TESSELLATION_CONTROL_SHADER_BIT",
        TESSELLATION_EVALUATION_SHADER = 0x20 => "VK_PIPELINE_STAGE_TESSELLATION_EVALUATION_SHADER_BIT",
        GEOMETRY_SHADER = 0x40 => "VK_PIPELINE_STAGE_GEOMETRY_SHADER_BIT",
        FRAGMENT_SHADER = 0x80 => "VK_PIPELINE_STAGE_FRAGMENT_SHADER_BIT",
        EARLY_FRAGMENT_TESTS = 0x100 => "VK_PIPELINE_STAGE_EARLY_FRAGMENT_TESTS_BIT",
        LATE_FRAGMENT_TESTS = 0x200 => "VK_PIPELINE_STAGE_LATE_FRAGMENT_TESTS_BIT",
        COLOR_ATTACHMENT_OUTPUT = 0x400 => "VK_PIPELINE_STAGE_COLOR_ATTACHMENT_OUTPUT_BIT",
        COMPUTE_SHADER = 0x800 => "VK_PIPELINE_STAGE_COMPUTE_SHADER_BIT",
        TRANSFER = 0x1000 => "VK_PIPELINE_STAGE_TRANSFER_BIT",
        BOTTOM_OF_PIPE = 0x2000 => "VK_PIPELINE_STAGE_BOTTOM_OF_PIPE_BIT",
        HOST = 0x4000 => "VK_PIPELINE_STAGE_HOST_BIT",
        ALL_GRAPHICS = 0x8000 => "VK_PIPELINE_STAGE_ALL_GRAPHICS_BIT",
        ALL_COMMANDS = 0x10000 => "VK_PIPELINE_STAGE_ALL_COMMANDS_BIT",
    }
}

vk_flags! {
    AccessFlags(u32), "VkAccessFlags" {
        INDIRECT_COMMAND_READ = 0x1 => "VK_ACCESS_INDIRECT_COMMAND_READ_BIT",
        INDEX_READ = 0x2 => "VK_ACCESS_INDEX_READ_BIT",
        VERTEX_ATTRIBUTE_READ = 0x4 => "VK_ACCESS_VERTEX_ATTRIBUTE_READ_BIT",
        UNIFORM_READ = 0x8 => "VK_ACCESS_UNIFORM_READ_BIT",
        INPUT_ATTACHMENT_READ = 0x10 => "VK_ACCESS_INPUT_ATTACHMENT_READ_BIT",
        SHADER_READ = 0x20 => "VK_ACCESS_SHADER_READ_BIT",
        SHADER_WRITE = 0x40 => "VK_ACCESS_SHADER_WRITE_BIT",
        COLOR_ATTACHMENT_READ = 0x80 => "VK_ACCESS_COLOR_ATTACHMENT_READ_BIT",
        COLOR_ATTACHMENT_WRITE = 0x100 => "VK_ACCESS_COLOR_ATTACHMENT_WRITE_BIT",
        DEPTH_STENCIL_ATTACHMENT_READ = 0x200 => "VK_ACCESS_DEPTH_STENCIL_ATTACHMENT_READ_BIT",
        DEPTH_STENCIL_ATTACHMENT_WRITE = 0x400 => "VK_ACCESS_DEPTH_STENCIL_ATTACHMENT_WRITE_BIT",
        TRANSFER_READ = 0x800 => "VK_ACCESS_TRANSFER_READ_BIT",
        TRANSFER_WRITE = 0x1000 => "VK_ACCESS_TRANSFER_WRITE_BIT",
        HOST_READ = 0x2000 => "VK_ACCESS_HOST_READ_BIT",
        HOST_WRITE = 0x4000 => "VK_ACCESS_HOST_WRITE_BIT",
        MEMORY_READ = 0x8000 => "VK_ACCESS_MEMORY_READ_BIT",
        MEMORY_WRITE = 0x10000 => "VK_ACCESS_MEMORY_WRITE_BIT",
    }
}

vk_flags! {
    DependencyFlags(u32), "VkDependencyFlags" {
        BY_REGION = 0x1 => "VK_DEPENDENCY_BY_REGION_BIT",
        VIEW_LOCAL = 0x2 => "VK_DEPENDENCY_VIEW_LOCAL_BIT",
        DEVICE_GROUP = 0x4 => "VK_DEPENDENCY_DEVICE_GROUP_BIT",
    }
}

vk_flags! {
    ImageAspectFlags(u32), "VkImageAspectFlags" {
        COLOR = 0x1 => "VK_IMAGE_ASPECT_COLOR_BIT",
        DEPTH = 0x2 => "VK_IMAGE_ASPECT_DEPTH_BIT",
        STENCIL = 0x4 => "VK_IMAGE_ASPECT_STENCIL_BIT",
        METADATA = 0x8 => "VK_IMAGE_ASPECT_METADATA_BIT",
        PLANE_0 = 0x10 => "VK_IMAGE_ASPECT_PLANE_0_BIT",
        PLANE_1 = 0x20 => "VK_IMAGE_ASPECT_PLANE_1_BIT",
        PLANE_2 = 0x40 => "VK_IMAGE_ASPECT_PLANE_2_BIT",
    }
}

vk_flags! {
    PipelineCacheCreateFlags(u32), "VkPipelineCacheCreateFlags" {
        READ_ONLY = 0x2 => "VK_PIPELINE_CACHE_CREATE_READ_ONLY_BIT",
        USE_APPLICATION_STORAGE = 0x4 => "VK_PIPELINE_CACHE_CREATE_USE_APPLICATION_STORAGE_BIT",
    }
}

vk_flags! { PipelineVertexInputStateCreateFlags(u32), "VkPipelineVertexInputStateCreateFlags" {} }
vk_flags! { PipelineInputAssemblyStateCreateFlags(u32), "VkPipelineInputAssemblyStateCreateFlags" {} }
vk_flags! { PipelineTessellationStateCreateFlags(u32), "VkPipelineTessellationStateCreateFlags" {} }
vk_flags! { PipelineViewportStateCreateFlags(u32), "VkPipelineViewportStateCreateFlags" {} }
vk_flags! { PipelineRasterizationStateCreateFlags(u32), "VkPipelineRasterizationStateCreateFlags" {} }
vk_flags! { PipelineMultisampleStateCreateFlags(u32), "VkPipelineMultisampleStateCreateFlags" {} }
vk_flags! { PipelineDepthStencilStateCreateFlags(u32), "VkPipelineDepthStencilStateCreateFlags" {} }
vk_flags! { PipelineColorBlendStateCreateFlags(u32), "VkPipelineColorBlendStateCreateFlags" {} }
vk_flags! { PipelineDynamicStateCreateFlags(u32), "VkPipelineDynamicStateCreateFlags" {} }
vk_flags! { PipelineLayoutCreateFlags(u32), "VkPipelineLayoutCreateFlags" {} }
vk_flags! { RenderPassCreateFlags(u32), "VkRenderPassCreateFlags" {} }
vk_flags! { SubpassDescriptionFlags(u32), "VkSubpassDescriptionFlags" {} }
vk_flags! { ShaderModuleCreateFlags(u32), "VkShaderModuleCreateFlags" {} }
vk_flags! { PipelineDiscardRectangleStateCreateFlagsEXT(u32), "VkPipelineDiscardRectangleStateCreateFlagsEXT" {} }

/// Opaque object handle. Inside a pipeline document its value is the index
/// of the referenced record in the matching handle table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Handle(pub u64);

impl Handle {
    pub const NULL: Handle = Handle(0);

    pub fn from_index(index: u32) -> Self {
        Handle(u64::from(index))
    }
}

impl JsonValue for Handle {
    fn to_json(&self, _diag: &mut Diagnostics) -> Value {
        Value::from(self.0)
    }

    /// An empty string is a handle blanked out of a pipeline document.
    fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
        match value {
            Value::String(s) if s.is_empty() => Handle::NULL,
            Value::String(s) => {
                diag.error(format!("Unresolved handle name {s:?}"));
                Handle::NULL
            }
            other => Handle(u64::from_json(other, diag)),
        }
    }
}
