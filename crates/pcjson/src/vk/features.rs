//! Physical-device feature records and the filter that gathers them from a
//! device creation chain.

use super::{Chain, Chained, Extension};

record! {
    /// Core 1.0 features, embedded in [`PhysicalDeviceFeatures2`].
    pub struct PhysicalDeviceFeatures {
        robust_buffer_access: bool => "robustBufferAccess",
        full_draw_index_uint32: bool => "fullDrawIndexUint32",
        image_cube_array: bool => "imageCubeArray",
        independent_blend: bool => "independentBlend",
        geometry_shader: bool => "geometryShader",
        tessellation_shader: bool => "tessellationShader",
        sample_rate_shading: bool => "sampleRateShading",
        dual_src_blend: bool => "dualSrcBlend",
        logic_op: bool => "logicOp",
        multi_draw_indirect: bool => "multiDrawIndirect",
        draw_indirect_first_instance: bool => "drawIndirectFirstInstance",
        depth_clamp: bool => "depthClamp",
        depth_bias_clamp: bool => "depthBiasClamp",
        fill_mode_non_solid: bool => "fillModeNonSolid",
        depth_bounds: bool => "depthBounds",
        wide_lines: bool => "wideLines",
        large_points: bool => "largePoints",
        alpha_to_one: bool => "alphaToOne",
        multi_viewport: bool => "multiViewport",
        sampler_anisotropy: bool => "samplerAnisotropy",
        texture_compression_etc2: bool => "textureCompressionETC2",
        texture_compression_astc_ldr: bool => "textureCompressionASTC_LDR",
        texture_compression_bc: bool => "textureCompressionBC",
        occlusion_query_precise: bool => "occlusionQueryPrecise",
        pipeline_statistics_query: bool => "pipelineStatisticsQuery",
        vertex_pipeline_stores_and_atomics: bool => "vertexPipelineStoresAndAtomics",
        fragment_stores_and_atomics: bool => "fragmentStoresAndAtomics",
        shader_tessellation_and_geometry_point_size: bool => "shaderTessellationAndGeometryPointSize",
        shader_image_gather_extended: bool => "shaderImageGatherExtended",
        shader_storage_image_extended_formats: bool => "shaderStorageImageExtendedFormats",
        shader_storage_image_multisample: bool => "shaderStorageImageMultisample",
        shader_storage_image_read_without_format: bool => "shaderStorageImageReadWithoutFormat",
        shader_storage_image_write_without_format: bool => "shaderStorageImageWriteWithoutFormat",
        shader_uniform_buffer_array_dynamic_indexing: bool => "shaderUniformBufferArrayDynamicIndexing",
        shader_sampled_image_array_dynamic_indexing: bool => "shaderSampledImageArrayDynamicIndexing",
        shader_storage_buffer_array_dynamic_indexing: bool => "shaderStorageBufferArrayDynamicIndexing",
        shader_storage_image_array_dynamic_indexing: bool => "shaderStorageImageArrayDynamicIndexing",
        shader_clip_distance: bool => "shaderClipDistance",
        shader_cull_distance: bool => "shaderCullDistance",
        shader_float64: bool => "shaderFloat64",
        shader_int64: bool => "shaderInt64",
        shader_int16: bool => "shaderInt16",
        shader_resource_residency: bool => "shaderResourceResidency",
        shader_resource_min_lod: bool => "shaderResourceMinLod",
        sparse_binding: bool => "sparseBinding",
        sparse_residency_buffer: bool => "sparseResidencyBuffer",
        sparse_residency_image_2d: bool => "sparseResidencyImage2D",
        sparse_residency_image_3d: bool => "sparseResidencyImage3D",
        sparse_residency_2_samples: bool => "sparseResidency2Samples",
        sparse_residency_4_samples: bool => "sparseResidency4Samples",
        sparse_residency_8_samples: bool => "sparseResidency8Samples",
        sparse_residency_16_samples: bool => "sparseResidency16Samples",
        sparse_residency_aliased: bool => "sparseResidencyAliased",
        variable_multisample_rate: bool => "variableMultisampleRate",
        inherited_queries: bool => "inheritedQueries",
    }
}

record! {
    pub struct PhysicalDeviceFeatures2 {
        features: PhysicalDeviceFeatures => "features",
    }
}
extensible!(
    PhysicalDeviceFeatures2,
    PHYSICAL_DEVICE_FEATURES_2,
    "VkPhysicalDeviceFeatures2",
    [
        PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
        PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
        PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES,
        PHYSICAL_DEVICE_SCALAR_BLOCK_LAYOUT_FEATURES,
    ]
);

record! {
    pub struct PhysicalDeviceVulkan11Features {
        storage_buffer_16bit_access: bool => "storageBuffer16BitAccess",
        uniform_and_storage_buffer_16bit_access: bool => "uniformAndStorageBuffer16BitAccess",
        storage_push_constant_16: bool => "storagePushConstant16",
        storage_input_output_16: bool => "storageInputOutput16",
        multiview: bool => "multiview",
        multiview_geometry_shader: bool => "multiviewGeometryShader",
        multiview_tessellation_shader: bool => "multiviewTessellationShader",
        variable_pointers_storage_buffer: bool => "variablePointersStorageBuffer",
        variable_pointers: bool => "variablePointers",
        protected_memory: bool => "protectedMemory",
        sampler_ycbcr_conversion: bool => "samplerYcbcrConversion",
        shader_draw_parameters: bool => "shaderDrawParameters",
    }
}
structure!(
    PhysicalDeviceVulkan11Features,
    PHYSICAL_DEVICE_VULKAN_1_1_FEATURES,
    "VkPhysicalDeviceVulkan11Features"
);

record! {
    pub struct PhysicalDeviceVulkan12Features {
        sampler_mirror_clamp_to_edge: bool => "samplerMirrorClampToEdge",
        draw_indirect_count: bool => "drawIndirectCount",
        storage_buffer_8bit_access: bool => "storageBuffer8BitAccess",
        uniform_and_storage_buffer_8bit_access: bool => "uniformAndStorageBuffer8BitAccess",
        storage_push_constant_8: bool => "storagePushConstant8",
        shader_buffer_int64_atomics: bool => "shaderBufferInt64Atomics",
        shader_shared_int64_atomics: bool => "shaderSharedInt64Atomics",
        shader_float16: bool => "shaderFloat16",
        shader_int8: bool => "shaderInt8",
        descriptor_indexing: bool => "descriptorIndexing",
        shader_input_attachment_array_dynamic_indexing: bool => "shaderInputAttachmentArrayDynamicIndexing",
        shader_uniform_texel_buffer_array_dynamic_indexing: bool => "shaderUniformTexelBufferArrayDynamicIndexing",
        shader_storage_texel_buffer_array_dynamic_indexing: bool => "shaderStorageTexelBufferArrayDynamicIndexing",
        shader_uniform_buffer_array_non_uniform_indexing: bool => "shaderUniformBufferArrayNonUniformIndexing",
        shader_sampled_image_array_non_uniform_indexing: bool => "shaderSampledImageArrayNonUniformIndexing",
        shader_storage_buffer_array_non_uniform_indexing: bool => "shaderStorageBufferArrayNonUniformIndexing",
        shader_storage_image_array_non_uniform_indexing: bool => "shaderStorageImageArrayNonUniformIndexing",
        shader_input_attachment_array_non_uniform_indexing: bool => "shaderInputAttachmentArrayNonUniformIndexing",
        shader_uniform_texel_buffer_array_non_uniform_indexing: bool => "shaderUniformTexelBufferArrayNonUniformIndexing",
        shader_storage_texel_buffer_array_non_uniform_indexing: bool => "shaderStorageTexelBufferArrayNonUniformIndexing",
        descriptor_binding_uniform_buffer_update_after_bind: bool => "descriptorBindingUniformBufferUpdateAfterBind",
        descriptor_binding_sampled_image_update_after_bind: bool => "descriptorBindingSampledImageUpdateAfterBind",
        descriptor_binding_storage_image_update_after_bind: bool => "descriptorBindingStorageImageUpdateAfterBind",
        descriptor_binding_storage_buffer_update_after_bind: bool => "descriptorBindingStorageBufferUpdateAfterBind",
        descriptor_binding_uniform_texel_buffer_update_after_bind: bool => "descriptorBindingUniformTexelBufferUpdateAfterBind",
        descriptor_binding_storage_texel_buffer_update_after_bind: bool => "descriptorBindingStorageTexelBufferUpdateAfterBind",
        descriptor_binding_update_unused_while_pending: bool => "descriptorBindingUpdateUnusedWhilePending",
        descriptor_binding_partially_bound: bool => "descriptorBindingPartiallyBound",
        descriptor_binding_variable_descriptor_count: bool => "descriptorBindingVariableDescriptorCount",
        runtime_descriptor_array: bool => "runtimeDescriptorArray",
        sampler_filter_minmax: bool => "samplerFilterMinmax",
        scalar_block_layout: bool => "scalarBlockLayout",
        imageless_framebuffer: bool => "imagelessFramebuffer",
        uniform_buffer_standard_layout: bool => "uniformBufferStandardLayout",
        shader_subgroup_extended_types: bool => "shaderSubgroupExtendedTypes",
        separate_depth_stencil_layouts: bool => "separateDepthStencilLayouts",
        host_query_reset: bool => "hostQueryReset",
        timeline_semaphore: bool => "timelineSemaphore",
        buffer_device_address: bool => "bufferDeviceAddress",
        buffer_device_address_capture_replay: bool => "bufferDeviceAddressCaptureReplay",
        buffer_device_address_multi_device: bool => "bufferDeviceAddressMultiDevice",
        vulkan_memory_model: bool => "vulkanMemoryModel",
        vulkan_memory_model_device_scope: bool => "vulkanMemoryModelDeviceScope",
        vulkan_memory_model_availability_visibility_chains: bool => "vulkanMemoryModelAvailabilityVisibilityChains",
        shader_output_viewport_index: bool => "shaderOutputViewportIndex",
        shader_output_layer: bool => "shaderOutputLayer",
        subgroup_broadcast_dynamic_id: bool => "subgroupBroadcastDynamicId",
    }
}
structure!(
    PhysicalDeviceVulkan12Features,
    PHYSICAL_DEVICE_VULKAN_1_2_FEATURES,
    "VkPhysicalDeviceVulkan12Features"
);

record! {
    pub struct PhysicalDeviceVulkanSC10Features {
        shader_atomic_instructions: bool => "shaderAtomicInstructions",
    }
}
structure!(
    PhysicalDeviceVulkanSC10Features,
    PHYSICAL_DEVICE_VULKAN_SC_1_0_FEATURES,
    "VkPhysicalDeviceVulkanSC10Features"
);

record! {
    pub struct PhysicalDeviceScalarBlockLayoutFeatures {
        scalar_block_layout: bool => "scalarBlockLayout",
    }
}
structure!(
    PhysicalDeviceScalarBlockLayoutFeatures,
    PHYSICAL_DEVICE_SCALAR_BLOCK_LAYOUT_FEATURES,
    "VkPhysicalDeviceScalarBlockLayoutFeatures"
);

/// Collects the feature records of a device creation chain.
///
/// Core features come from the chain's `PhysicalDeviceFeatures2` link, if
/// any; every other feature link is copied in chain order. Links that do not
/// describe features are dropped.
pub fn filter_device_features(chain: &Chain) -> Chained<PhysicalDeviceFeatures2> {
    let mut filtered = Chained::<PhysicalDeviceFeatures2>::default();
    for link in chain {
        match link {
            Extension::PhysicalDeviceFeatures2(features) => filtered.value = features.clone(),
            Extension::PhysicalDeviceVulkan11Features(_)
            | Extension::PhysicalDeviceVulkan12Features(_)
            | Extension::PhysicalDeviceVulkanSC10Features(_)
            | Extension::PhysicalDeviceScalarBlockLayoutFeatures(_) => filtered.next.push(link.clone()),
            _ => {}
        }
    }
    tracing::debug!(links = filtered.next.len(), "filtered device features");
    filtered
}

