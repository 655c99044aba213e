//! Vulkan SC object reservation and offline pipeline identity.

use pcjson_core::{read_array, read_blob, read_field, write_array, write_blob, write_field, Diagnostics, Fields};
use serde_json::{Map, Value};

use super::types::*;
use super::Chained;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineCacheCreateInfo {
    pub flags: PipelineCacheCreateFlags,
    pub initial_data: Vec<u8>,
}

impl Fields for PipelineCacheCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_blob(out, "initialDataSize", "pInitialData", &self.initial_data);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            flags: read_field(obj, "flags", diag),
            initial_data: read_blob(obj, "initialDataSize", "pInitialData", diag),
        }
    }
}
extensible!(
    PipelineCacheCreateInfo,
    PIPELINE_CACHE_CREATE_INFO,
    "VkPipelineCacheCreateInfo",
    []
);

record! {
    pub struct PipelinePoolSize {
        pool_entry_size: u64 => "poolEntrySize",
        pool_entry_count: u32 => "poolEntryCount",
    }
}
extensible!(PipelinePoolSize, PIPELINE_POOL_SIZE, "VkPipelinePoolSize", []);

macro_rules! object_reservation {
    ($($field:ident => $key:literal,)*) => {
        /// Upper bounds on every object kind a Vulkan SC device will create.
        #[derive(Debug, Clone, PartialEq, Default)]
        pub struct DeviceObjectReservationCreateInfo {
            pub pipeline_cache_create_infos: Vec<Chained<PipelineCacheCreateInfo>>,
            pub pipeline_pool_sizes: Vec<Chained<PipelinePoolSize>>,
            $(pub $field: u32,)*
        }

        impl Fields for DeviceObjectReservationCreateInfo {
            fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
                write_array(
                    out,
                    "pipelineCacheCreateInfoCount",
                    "pPipelineCacheCreateInfos",
                    &self.pipeline_cache_create_infos,
                    diag,
                );
                write_array(
                    out,
                    "pipelinePoolSizeCount",
                    "pPipelinePoolSizes",
                    &self.pipeline_pool_sizes,
                    diag,
                );
                $(write_field(out, $key, &self.$field, diag);)*
            }

            fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
                Self {
                    pipeline_cache_create_infos: read_array(
                        obj,
                        "pipelineCacheCreateInfoCount",
                        "pPipelineCacheCreateInfos",
                        diag,
                    ),
                    pipeline_pool_sizes: read_array(
                        obj,
                        "pipelinePoolSizeCount",
                        "pPipelinePoolSizes",
                        diag,
                    ),
                    $($field: read_field(obj, $key, diag),)*
                }
            }
        }
    };
}

object_reservation! {
    semaphore_request_count => "semaphoreRequestCount",
    command_buffer_request_count => "commandBufferRequestCount",
    fence_request_count => "fenceRequestCount",
    device_memory_request_count => "deviceMemoryRequestCount",
    buffer_request_count => "bufferRequestCount",
    image_request_count => "imageRequestCount",
    event_request_count => "eventRequestCount",
    query_pool_request_count => "queryPoolRequestCount",
    buffer_view_request_count => "bufferViewRequestCount",
    image_view_request_count => "imageViewRequestCount",
    layered_image_view_request_count => "layeredImageViewRequestCount",
    pipeline_cache_request_count => "pipelineCacheRequestCount",
    pipeline_layout_request_count => "pipelineLayoutRequestCount",
    render_pass_request_count => "renderPassRequestCount",
    graphics_pipeline_request_count => "graphicsPipelineRequestCount",
    compute_pipeline_request_count => "computePipelineRequestCount",
    descriptor_set_layout_request_count => "descriptorSetLayoutRequestCount",
    sampler_request_count => "samplerRequestCount",
    descriptor_pool_request_count => "descriptorPoolRequestCount",
    descriptor_set_request_count => "descriptorSetRequestCount",
    framebuffer_request_count => "framebufferRequestCount",
    command_pool_request_count => "commandPoolRequestCount",
    sampler_ycbcr_conversion_request_count => "samplerYcbcrConversionRequestCount",
    surface_request_count => "surfaceRequestCount",
    swapchain_request_count => "swapchainRequestCount",
    display_mode_request_count => "displayModeRequestCount",
    subpass_description_request_count => "subpassDescriptionRequestCount",
    attachment_description_request_count => "attachmentDescriptionRequestCount",
    descriptor_set_layout_binding_request_count => "descriptorSetLayoutBindingRequestCount",
    descriptor_set_layout_binding_limit => "descriptorSetLayoutBindingLimit",
    max_image_view_mip_levels => "maxImageViewMipLevels",
    max_image_view_array_layers => "maxImageViewArrayLayers",
    max_layered_image_view_mip_levels => "maxLayeredImageViewMipLevels",
    max_occlusion_queries_per_pool => "maxOcclusionQueriesPerPool",
    max_pipeline_statistics_queries_per_pool => "maxPipelineStatisticsQueriesPerPool",
    max_timestamp_queries_per_pool => "maxTimestampQueriesPerPool",
    max_immutable_samplers_per_descriptor_set_layout => "maxImmutableSamplersPerDescriptorSetLayout",
}
extensible!(
    DeviceObjectReservationCreateInfo,
    DEVICE_OBJECT_RESERVATION_CREATE_INFO,
    "VkDeviceObjectReservationCreateInfo",
    []
);

record! {
    /// Identifies a pipeline compiled ahead of time.
    pub struct PipelineOfflineCreateInfo {
        pipeline_identifier: [u8; 16] => "pipelineIdentifier",
        match_control: PipelineMatchControl => "matchControl",
        pool_entry_size: u64 => "poolEntrySize",
    }
}
extensible!(
    PipelineOfflineCreateInfo,
    PIPELINE_OFFLINE_CREATE_INFO,
    "VkPipelineOfflineCreateInfo",
    []
);
