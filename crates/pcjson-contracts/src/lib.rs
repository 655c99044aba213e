//! Shared spellings of the pipeline JSON format.
//!
//! These constants are the single source of truth for key names and tokens
//! that appear in generated and parsed documents.

pub const KEY_STYPE: &str = "sType";
pub const KEY_PNEXT: &str = "pNext";

pub const TOKEN_NULL: &str = "NULL";
pub const TOKEN_TRUE: &str = "VK_TRUE";
pub const TOKEN_FALSE: &str = "VK_FALSE";
pub const TOKEN_NAN: &str = "NaN";

pub const FLAG_SEPARATOR: &str = " | ";

pub const DOC_GRAPHICS_STATE: &str = "GraphicsPipelineState";
pub const DOC_COMPUTE_STATE: &str = "ComputePipelineState";
pub const DOC_ENABLED_EXTENSIONS: &str = "EnabledExtensions";
pub const DOC_PIPELINE_UUID: &str = "PipelineUUID";

pub const STATE_YCBCR_SAMPLERS: &str = "YcbcrSamplers";
pub const STATE_IMMUTABLE_SAMPLERS: &str = "ImmutableSamplers";
pub const STATE_DESCRIPTOR_SET_LAYOUTS: &str = "DescriptorSetLayouts";
pub const STATE_PIPELINE_LAYOUT: &str = "PipelineLayout";
pub const STATE_SHADER_FILE_NAMES: &str = "ShaderFileNames";
pub const STATE_PHYSICAL_DEVICE_FEATURES: &str = "PhysicalDeviceFeatures";
pub const STATE_RENDER_PASS: &str = "Renderpass";
pub const STATE_RENDER_PASS2: &str = "Renderpass2";
pub const STATE_GRAPHICS_PIPELINE: &str = "GraphicsPipeline";
pub const STATE_COMPUTE_PIPELINE: &str = "ComputePipeline";

pub const PIPELINE_UUID_SIZE: usize = 16;

pub const ARENA_DEFAULT_BLOCK_SIZE: usize = 32 * 1024;
pub const ARENA_DEFAULT_ALIGNMENT: usize = 64;
