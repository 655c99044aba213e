//! In-memory shape of a pipeline document.

use pcjson_contracts::PIPELINE_UUID_SIZE;

use crate::vk::{
    Chained, ComputePipelineCreateInfo, DescriptorSetLayoutCreateInfo, GraphicsPipelineCreateInfo,
    PhysicalDeviceFeatures2, PipelineLayoutCreateInfo, RenderPassCreateInfo, RenderPassCreateInfo2,
    SamplerCreateInfo, SamplerYcbcrConversionCreateInfo, ShaderStageFlags,
};

/// Records of one handle category. A record's position is the handle value
/// other records use to refer to it.
///
/// Without `names`, generated documents key each record by its decimal
/// index. Parsed documents always carry the names found in the JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedRecords<T> {
    pub records: Vec<Chained<T>>,
    pub names: Option<Vec<String>>,
}

impl<T> Default for NamedRecords<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            names: None,
        }
    }
}

impl<T> NamedRecords<T> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

record! {
    pub struct ShaderFileName {
        stage: ShaderStageFlags => "stage",
        filename: String => "filename",
    }
}

/// State shared by graphics and compute documents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineResources {
    pub ycbcr_samplers: NamedRecords<SamplerYcbcrConversionCreateInfo>,
    pub immutable_samplers: NamedRecords<SamplerCreateInfo>,
    pub descriptor_set_layouts: NamedRecords<DescriptorSetLayoutCreateInfo>,
    pub pipeline_layout: Chained<PipelineLayoutCreateInfo>,
    pub shader_file_names: Vec<ShaderFileName>,
    pub physical_device_features: Option<Chained<PhysicalDeviceFeatures2>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderPass {
    V1(Chained<RenderPassCreateInfo>),
    V2(Chained<RenderPassCreateInfo2>),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphicsPipelineState {
    pub resources: PipelineResources,
    /// Required; `None` only exists so a caller's omission is reported.
    pub render_pass: Option<RenderPass>,
    pub pipeline: Chained<GraphicsPipelineCreateInfo>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComputePipelineState {
    pub resources: PipelineResources,
    pub pipeline: Chained<ComputePipelineCreateInfo>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PipelineState {
    Graphics(GraphicsPipelineState),
    Compute(ComputePipelineState),
}

impl PipelineState {
    pub fn resources(&self) -> &PipelineResources {
        match self {
            PipelineState::Graphics(state) => &state.resources,
            PipelineState::Compute(state) => &state.resources,
        }
    }

    pub fn is_graphics(&self) -> bool {
        matches!(self, PipelineState::Graphics(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineDocument {
    pub state: PipelineState,
    pub enabled_extensions: Vec<String>,
    pub pipeline_uuid: [u8; PIPELINE_UUID_SIZE],
}

impl PipelineDocument {
    pub fn graphics(state: GraphicsPipelineState) -> Self {
        Self {
            state: PipelineState::Graphics(state),
            enabled_extensions: Vec::new(),
            pipeline_uuid: [0; PIPELINE_UUID_SIZE],
        }
    }

    pub fn compute(state: ComputePipelineState) -> Self {
        Self {
            state: PipelineState::Compute(state),
            enabled_extensions: Vec::new(),
            pipeline_uuid: [0; PIPELINE_UUID_SIZE],
        }
    }
}
