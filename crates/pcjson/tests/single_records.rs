use pcjson::vk::*;
use pcjson::{AnyRecord, ChainPolicy, Generator, GeneratorOptions, OnUnknownLink, Parser};
use serde_json::{json, Value};

fn generate(record: AnyRecord) -> Value {
    let mut generator = Generator::new();
    let text = generator
        .generate_single_record(&record)
        .into_result()
        .expect("generate record");
    serde_json::from_str(text).expect("generated text is JSON")
}

fn round_trip(record: AnyRecord) -> AnyRecord {
    let mut generator = Generator::new();
    let text = generator
        .generate_single_record(&record)
        .into_result()
        .expect("generate record")
        .to_string();
    let mut parser = Parser::new();
    parser
        .parse_single_record(&text)
        .into_result()
        .expect("parse record")
}

#[test]
fn default_features_are_all_false_with_null_chain() {
    let json = generate(Chained::new(PhysicalDeviceFeatures2::default()).into());
    assert_eq!(json["sType"], json!("VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_FEATURES_2"));
    assert_eq!(json["pNext"], json!("NULL"));
    let features = json["features"].as_object().expect("features object");
    assert_eq!(features.len(), 55);
    for (key, value) in features {
        assert_eq!(value, &json!("VK_FALSE"), "feature {key}");
    }
    assert_eq!(features["textureCompressionASTC_LDR"], json!("VK_FALSE"));
}

#[test]
fn empty_immutable_samplers_are_null() {
    let layout = DescriptorSetLayoutCreateInfo {
        bindings: vec![DescriptorSetLayoutBinding {
            binding: 0,
            descriptor_type: DescriptorType::SAMPLER,
            descriptor_count: 0,
            stage_flags: ShaderStageFlags::FRAGMENT,
            immutable_samplers: Some(Vec::new()),
        }],
        ..Default::default()
    };
    let json = generate(Chained::new(layout).into());
    let binding = &json["pBindings"][0];
    assert_eq!(binding["descriptorCount"], json!(0));
    assert_eq!(binding["pImmutableSamplers"], json!("NULL"));

    let mut parser = Parser::new();
    let parsed = parser
        .parse_single_record(&json.to_string())
        .into_result()
        .expect("parse layout");
    let AnyRecord::DescriptorSetLayout(parsed) = parsed else {
        panic!("unexpected record: {parsed:?}");
    };
    assert_eq!(parsed.value.bindings[0].descriptor_count, 0);
    assert_eq!(parsed.value.bindings[0].immutable_samplers, None);
}

#[test]
fn immutable_samplers_must_match_descriptor_count() {
    let layout = DescriptorSetLayoutCreateInfo {
        bindings: vec![DescriptorSetLayoutBinding {
            descriptor_type: DescriptorType::COMBINED_IMAGE_SAMPLER,
            descriptor_count: 2,
            stage_flags: ShaderStageFlags::FRAGMENT,
            immutable_samplers: Some(vec![Handle::from_index(0)]),
            ..Default::default()
        }],
        ..Default::default()
    };
    let mut generator = Generator::new();
    let err = generator
        .generate_single_record(&Chained::new(layout).into())
        .into_result()
        .expect_err("count mismatch must fail");
    assert!(err.message.contains("pBindings[0]"), "unexpected error: {err}");
    assert!(err.message.contains("descriptorCount"), "unexpected error: {err}");
}

#[test]
fn shader_code_is_base64() {
    let module = ShaderModuleCreateInfo {
        code: vec![0x19, 0x7b, 0x2a, 0x08],
        ..Default::default()
    };
    let json = generate(Chained::new(module.clone()).into());
    assert_eq!(json["codeSize"], json!(4));
    assert_eq!(json["pCode"], json!("GXsqCA=="));
    assert_eq!(round_trip(Chained::new(module.clone()).into()), Chained::new(module).into());
}

#[test]
fn malformed_base64_is_reported() {
    let text = json!({
        "sType": "VK_STRUCTURE_TYPE_SHADER_MODULE_CREATE_INFO",
        "pNext": "NULL",
        "flags": 0,
        "codeSize": 4,
        "pCode": "not base64!"
    })
    .to_string();
    let mut parser = Parser::new();
    let err = parser
        .parse_single_record(&text)
        .into_result()
        .expect_err("bad base64 must fail");
    assert!(err.message.contains("Not a base64 encoded binary"), "unexpected error: {err}");
    assert!(err.message.starts_with("[ERROR] pCode"), "unexpected error: {err}");
}

#[test]
fn sampler_round_trip_keeps_chain_and_nan() {
    let sampler = SamplerCreateInfo {
        mag_filter: Filter::LINEAR,
        min_filter: Filter::NEAREST,
        mipmap_mode: SamplerMipmapMode::LINEAR,
        address_mode_u: SamplerAddressMode::CLAMP_TO_EDGE,
        mip_lod_bias: f32::NAN,
        anisotropy_enable: true,
        max_anisotropy: 16.0,
        compare_op: CompareOp::LESS_OR_EQUAL,
        max_lod: 8.5,
        border_color: BorderColor::INT_OPAQUE_WHITE,
        ..Default::default()
    };
    let record = Chained::new(sampler)
        .with(SamplerReductionModeCreateInfo { reduction_mode: SamplerReductionMode::MAX }.into())
        .with(SamplerYcbcrConversionInfo { conversion: Handle::from_index(2) }.into());

    let json = generate(record.clone().into());
    assert_eq!(json["mipLodBias"], json!("NaN"));
    assert_eq!(json["anisotropyEnable"], json!("VK_TRUE"));
    assert_eq!(
        json["pNext"]["sType"],
        json!("VK_STRUCTURE_TYPE_SAMPLER_REDUCTION_MODE_CREATE_INFO")
    );
    assert_eq!(json["pNext"]["pNext"]["conversion"], json!(2));
    assert_eq!(json["pNext"]["pNext"]["pNext"], json!("NULL"));

    let AnyRecord::Sampler(parsed) = round_trip(record.clone().into()) else {
        panic!("expected a sampler");
    };
    assert!(parsed.value.mip_lod_bias.is_nan());
    assert_eq!(parsed.value.max_lod, 8.5);
    assert_eq!(parsed.value.border_color, BorderColor::INT_OPAQUE_WHITE);
    assert_eq!(parsed.next, record.next);
}

#[test]
fn graphics_pipeline_round_trip() {
    let pipeline = GraphicsPipelineCreateInfo {
        flags: PipelineCreateFlags::ALLOW_DERIVATIVES,
        stages: vec![
            Chained::new(PipelineShaderStageCreateInfo {
                stage: ShaderStageFlags::VERTEX,
                name: "main".to_string(),
                specialization_info: Some(SpecializationInfo {
                    map_entries: vec![SpecializationMapEntry {
                        constant_id: 3,
                        offset: 0,
                        size: 4,
                    }],
                    data: vec![1, 0, 0, 0],
                }),
                ..Default::default()
            }),
            Chained::new(PipelineShaderStageCreateInfo {
                stage: ShaderStageFlags::FRAGMENT,
                name: "main".to_string(),
                ..Default::default()
            })
            .with(PipelineShaderStageRequiredSubgroupSizeCreateInfo { required_subgroup_size: 32 }.into()),
        ],
        input_assembly_state: Some(Chained::new(PipelineInputAssemblyStateCreateInfo {
            topology: PrimitiveTopology::TRIANGLE_STRIP,
            ..Default::default()
        })),
        rasterization_state: Some(Chained::new(PipelineRasterizationStateCreateInfo {
            cull_mode: CullModeFlags::FRONT_AND_BACK,
            front_face: FrontFace::CLOCKWISE,
            line_width: 1.0,
            ..Default::default()
        })),
        multisample_state: Some(Chained::new(PipelineMultisampleStateCreateInfo {
            rasterization_samples: SampleCountFlags::TYPE_4,
            sample_mask: Some(vec![0xf]),
            ..Default::default()
        })),
        color_blend_state: Some(Chained::new(PipelineColorBlendStateCreateInfo {
            attachments: vec![PipelineColorBlendAttachmentState {
                color_write_mask: ColorComponentFlags::R
                    | ColorComponentFlags::G
                    | ColorComponentFlags::B
                    | ColorComponentFlags::A,
                ..Default::default()
            }],
            blend_constants: [0.0, 0.25, 0.5, 1.0],
            ..Default::default()
        })),
        dynamic_state: Some(Chained::new(PipelineDynamicStateCreateInfo {
            dynamic_states: vec![DynamicState::VIEWPORT, DynamicState::SCISSOR],
            ..Default::default()
        })),
        subpass: 1,
        base_pipeline_index: -1,
        ..Default::default()
    };
    let record = Chained::new(pipeline).with(
        PipelineOfflineCreateInfo {
            pipeline_identifier: [7; 16],
            match_control: PipelineMatchControl::APPLICATION_UUID_EXACT_MATCH,
            pool_entry_size: 1 << 20,
        }
        .into(),
    );

    let json = generate(record.clone().into());
    assert_eq!(json["pRasterizationState"]["cullMode"], json!("VK_CULL_MODE_FRONT_AND_BACK"));
    assert_eq!(json["pVertexInputState"], json!("NULL"));
    assert_eq!(json["stageCount"], json!(2));
    assert_eq!(json["pStages"][0]["pSpecializationInfo"]["pData"], json!("AQAAAA=="));

    assert_eq!(round_trip(record.clone().into()), record.into());
}

#[test]
fn render_pass2_round_trip() {
    let color = Chained::new(AttachmentReference2 {
        attachment: 0,
        layout: ImageLayout::COLOR_ATTACHMENT_OPTIMAL,
        aspect_mask: ImageAspectFlags::COLOR,
    });
    let render_pass = RenderPassCreateInfo2 {
        attachments: vec![Chained::new(AttachmentDescription2 {
            format: Format::B8G8R8A8_SRGB,
            samples: SampleCountFlags::TYPE_1,
            load_op: AttachmentLoadOp::CLEAR,
            store_op: AttachmentStoreOp::STORE,
            final_layout: ImageLayout::PRESENT_SRC_KHR,
            ..Default::default()
        })],
        subpasses: vec![Chained::new(SubpassDescription2 {
            pipeline_bind_point: PipelineBindPoint::GRAPHICS,
            view_mask: 0b11,
            color_attachments: vec![color],
            ..Default::default()
        })],
        dependencies: vec![Chained::new(SubpassDependency2 {
            src_subpass: u32::MAX,
            src_stage_mask: PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT,
            dst_stage_mask: PipelineStageFlags::COLOR_ATTACHMENT_OUTPUT,
            dst_access_mask: AccessFlags::COLOR_ATTACHMENT_WRITE,
            view_offset: -1,
            ..Default::default()
        })],
        correlated_view_masks: vec![0b11],
        ..Default::default()
    };
    let record: AnyRecord = Chained::new(render_pass).into();
    let json = generate(record.clone());
    assert_eq!(json["pSubpasses"][0]["pResolveAttachments"], json!("NULL"));
    assert_eq!(json["pSubpasses"][0]["pDepthStencilAttachment"], json!("NULL"));
    assert_eq!(round_trip(record.clone()), record);
}

#[test]
fn object_reservation_round_trip() {
    let reservation = DeviceObjectReservationCreateInfo {
        pipeline_cache_create_infos: vec![Chained::new(PipelineCacheCreateInfo {
            flags: PipelineCacheCreateFlags::READ_ONLY | PipelineCacheCreateFlags::USE_APPLICATION_STORAGE,
            initial_data: vec![0xde, 0xad, 0xbe, 0xef],
        })],
        pipeline_pool_sizes: vec![Chained::new(PipelinePoolSize {
            pool_entry_size: 4096,
            pool_entry_count: 8,
        })],
        graphics_pipeline_request_count: 8,
        descriptor_set_layout_binding_limit: 16,
        ..Default::default()
    };
    let record: AnyRecord = Chained::new(reservation).into();
    let json = generate(record.clone());
    assert_eq!(
        json["pPipelineCacheCreateInfos"][0]["flags"],
        json!("VK_PIPELINE_CACHE_CREATE_READ_ONLY_BIT | VK_PIPELINE_CACHE_CREATE_USE_APPLICATION_STORAGE_BIT")
    );
    assert_eq!(round_trip(record.clone()), record);
}

#[test]
fn unsupported_root_type_is_rejected() {
    let text = json!({
        "sType": "VK_STRUCTURE_TYPE_PIPELINE_POOL_SIZE",
        "pNext": "NULL",
        "poolEntrySize": 1,
        "poolEntryCount": 1
    })
    .to_string();
    let mut parser = Parser::new();
    let outcome = parser.parse_single_record(&text);
    assert!(!outcome.ok);
    assert!(outcome.value.is_none());
    let messages = outcome.messages.expect("messages");
    assert!(
        messages.contains("Unsupported structure type: VK_STRUCTURE_TYPE_PIPELINE_POOL_SIZE"),
        "unexpected messages: {messages}"
    );
}

#[test]
fn missing_stype_is_rejected() {
    let mut parser = Parser::new();
    let err = parser
        .parse_single_record(r#"{"pNext": "NULL"}"#)
        .into_result()
        .expect_err("no sType");
    assert!(err.message.contains("Missing sType from JSON"), "unexpected error: {err}");

    let err = parser
        .parse_single_record("{ not json")
        .into_result()
        .expect_err("not JSON");
    assert!(err.message.contains("Failed to parse JSON"), "unexpected error: {err}");
}

#[test]
fn disallowed_link_is_skipped_on_encode() {
    let record = Chained::new(SamplerCreateInfo::default())
        .with(PipelineTessellationDomainOriginStateCreateInfo::default().into())
        .with(SamplerReductionModeCreateInfo { reduction_mode: SamplerReductionMode::MIN }.into());
    let mut generator = Generator::new();
    let outcome = generator.generate_single_record(&record.into());
    assert!(outcome.ok);
    let messages = outcome.messages.expect("warning");
    assert!(messages.starts_with("[WARNING] "), "unexpected messages: {messages}");
    assert!(
        messages.contains(
            "Invalid structure type VK_STRUCTURE_TYPE_PIPELINE_TESSELLATION_DOMAIN_ORIGIN_STATE_CREATE_INFO extending VkSamplerCreateInfo"
        ),
        "unexpected messages: {messages}"
    );
    let json: Value = serde_json::from_str(outcome.value.expect("json")).expect("json");
    assert_eq!(
        json["pNext"]["sType"],
        json!("VK_STRUCTURE_TYPE_SAMPLER_REDUCTION_MODE_CREATE_INFO")
    );
    assert_eq!(json["pNext"]["pNext"], json!("NULL"));
}

#[test]
fn strict_encode_policy_fails_on_unrecognized_link() {
    let record = Chained::new(SamplerCreateInfo::default())
        .with(Extension::Unrecognized(StructureType(1_000_999_000)));
    let mut generator = Generator::with_options(GeneratorOptions {
        chain_policy: ChainPolicy {
            encode: OnUnknownLink::Error,
            ..ChainPolicy::default()
        },
        ..GeneratorOptions::default()
    });
    let err = generator
        .generate_single_record(&record.into())
        .into_result()
        .expect_err("strict policy");
    assert!(err.message.contains("1000999000"), "unexpected error: {err}");
}

#[test]
fn decode_stops_at_unknown_link() {
    let text = json!({
        "sType": "VK_STRUCTURE_TYPE_SAMPLER_CREATE_INFO",
        "flags": 0,
        "magFilter": "VK_FILTER_NEAREST",
        "minFilter": "VK_FILTER_NEAREST",
        "mipmapMode": "VK_SAMPLER_MIPMAP_MODE_NEAREST",
        "addressModeU": "VK_SAMPLER_ADDRESS_MODE_REPEAT",
        "addressModeV": "VK_SAMPLER_ADDRESS_MODE_REPEAT",
        "addressModeW": "VK_SAMPLER_ADDRESS_MODE_REPEAT",
        "mipLodBias": 0.0,
        "anisotropyEnable": "VK_FALSE",
        "maxAnisotropy": 1.0,
        "compareEnable": "VK_FALSE",
        "compareOp": "VK_COMPARE_OP_NEVER",
        "minLod": 0.0,
        "maxLod": 0.0,
        "borderColor": "VK_BORDER_COLOR_FLOAT_TRANSPARENT_BLACK",
        "unnormalizedCoordinates": "VK_FALSE",
        "pNext": {
            "sType": "VK_STRUCTURE_TYPE_SAMPLER_REDUCTION_MODE_CREATE_INFO",
            "reductionMode": "VK_SAMPLER_REDUCTION_MODE_MIN",
            "pNext": {
                "sType": "VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_1_FEATURES",
                "pNext": {
                    "sType": "VK_STRUCTURE_TYPE_SAMPLER_YCBCR_CONVERSION_INFO",
                    "conversion": 0,
                    "pNext": "NULL"
                }
            }
        }
    })
    .to_string();

    let mut parser = Parser::new();
    let outcome = parser.parse_single_record(&text);
    assert!(!outcome.ok);
    let messages = outcome.messages.expect("messages").to_string();
    assert!(
        messages.contains(
            "Invalid structure type VK_STRUCTURE_TYPE_PHYSICAL_DEVICE_VULKAN_1_1_FEATURES extending VkSamplerCreateInfo"
        ),
        "unexpected messages: {messages}"
    );
    assert!(
        messages.starts_with("[ERROR] pNext<VkPhysicalDeviceVulkan11Features>: "),
        "unexpected messages: {messages}"
    );
    assert!(!messages.contains("VkSamplerYcbcrConversionInfo"), "walk must stop: {messages}");
}
