//! Render pass descriptions, in both the core 1.0 and the `2` shape.

use pcjson_core::{
    check_governed_len, read_array, read_field, read_optional_array, write_array, write_field,
    write_optional_array, Diagnostics, Fields,
};
use serde_json::{Map, Value};

use super::types::*;
use super::Chained;

record! {
    pub struct AttachmentDescription {
        flags: AttachmentDescriptionFlags => "flags",
        format: Format => "format",
        samples: SampleCountFlags => "samples",
        load_op: AttachmentLoadOp => "loadOp",
        store_op: AttachmentStoreOp => "storeOp",
        stencil_load_op: AttachmentLoadOp => "stencilLoadOp",
        stencil_store_op: AttachmentStoreOp => "stencilStoreOp",
        initial_layout: ImageLayout => "initialLayout",
        final_layout: ImageLayout => "finalLayout",
    }
}

record! {
    pub struct AttachmentReference {
        attachment: u32 => "attachment",
        layout: ImageLayout => "layout",
    }
}

/// Subpass attachments. `resolve_attachments`, when present, parallels
/// `color_attachments`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubpassDescription {
    pub flags: SubpassDescriptionFlags,
    pub pipeline_bind_point: PipelineBindPoint,
    pub input_attachments: Vec<AttachmentReference>,
    pub color_attachments: Vec<AttachmentReference>,
    pub resolve_attachments: Option<Vec<AttachmentReference>>,
    pub depth_stencil_attachment: Option<AttachmentReference>,
    pub preserve_attachments: Vec<u32>,
}

impl Fields for SubpassDescription {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_field(out, "pipelineBindPoint", &self.pipeline_bind_point, diag);
        write_array(out, "inputAttachmentCount", "pInputAttachments", &self.input_attachments, diag);
        write_array(out, "colorAttachmentCount", "pColorAttachments", &self.color_attachments, diag);
        check_governed_len(
            self.resolve_attachments.as_deref(),
            "pResolveAttachments",
            "colorAttachmentCount",
            self.color_attachments.len() as u32,
            diag,
        );
        write_optional_array(out, "pResolveAttachments", self.resolve_attachments.as_deref(), diag);
        write_field(out, "pDepthStencilAttachment", &self.depth_stencil_attachment, diag);
        write_array(
            out,
            "preserveAttachmentCount",
            "pPreserveAttachments",
            &self.preserve_attachments,
            diag,
        );
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        let color_attachments: Vec<AttachmentReference> =
            read_array(obj, "colorAttachmentCount", "pColorAttachments", diag);
        let resolve_attachments: Option<Vec<AttachmentReference>> =
            read_optional_array(obj, "pResolveAttachments", diag);
        check_governed_len(
            resolve_attachments.as_deref(),
            "pResolveAttachments",
            "colorAttachmentCount",
            color_attachments.len() as u32,
            diag,
        );
        Self {
            flags: read_field(obj, "flags", diag),
            pipeline_bind_point: read_field(obj, "pipelineBindPoint", diag),
            input_attachments: read_array(obj, "inputAttachmentCount", "pInputAttachments", diag),
            color_attachments,
            resolve_attachments,
            depth_stencil_attachment: read_field(obj, "pDepthStencilAttachment", diag),
            preserve_attachments: read_array(
                obj,
                "preserveAttachmentCount",
                "pPreserveAttachments",
                diag,
            ),
        }
    }
}

impl pcjson_core::JsonValue for SubpassDescription {
    fn to_json(&self, diag: &mut Diagnostics) -> Value {
        pcjson_core::encode_object(self, diag)
    }

    fn from_json(value: &Value, diag: &mut Diagnostics) -> Self {
        pcjson_core::decode_object(value, diag)
    }
}

record! {
    pub struct SubpassDependency {
        src_subpass: u32 => "srcSubpass",
        dst_subpass: u32 => "dstSubpass",
        src_stage_mask: PipelineStageFlags => "srcStageMask",
        dst_stage_mask: PipelineStageFlags => "dstStageMask",
        src_access_mask: AccessFlags => "srcAccessMask",
        dst_access_mask: AccessFlags => "dstAccessMask",
        dependency_flags: DependencyFlags => "dependencyFlags",
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderPassCreateInfo {
    pub flags: RenderPassCreateFlags,
    pub attachments: Vec<AttachmentDescription>,
    pub subpasses: Vec<SubpassDescription>,
    pub dependencies: Vec<SubpassDependency>,
}

impl Fields for RenderPassCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_array(out, "attachmentCount", "pAttachments", &self.attachments, diag);
        write_array(out, "subpassCount", "pSubpasses", &self.subpasses, diag);
        write_array(out, "dependencyCount", "pDependencies", &self.dependencies, diag);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            flags: read_field(obj, "flags", diag),
            attachments: read_array(obj, "attachmentCount", "pAttachments", diag),
            subpasses: read_array(obj, "subpassCount", "pSubpasses", diag),
            dependencies: read_array(obj, "dependencyCount", "pDependencies", diag),
        }
    }
}
extensible!(
    RenderPassCreateInfo,
    RENDER_PASS_CREATE_INFO,
    "VkRenderPassCreateInfo",
    [RENDER_PASS_MULTIVIEW_CREATE_INFO]
);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderPassMultiviewCreateInfo {
    pub view_masks: Vec<u32>,
    pub view_offsets: Vec<i32>,
    pub correlation_masks: Vec<u32>,
}

impl Fields for RenderPassMultiviewCreateInfo {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_array(out, "subpassCount", "pViewMasks", &self.view_masks, diag);
        write_array(out, "dependencyCount", "pViewOffsets", &self.view_offsets, diag);
        write_array(out, "correlationMaskCount", "pCorrelationMasks", &self.correlation_masks, diag);
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            view_masks: read_array(obj, "subpassCount", "pViewMasks", diag),
            view_offsets: read_array(obj, "dependencyCount", "pViewOffsets", diag),
            correlation_masks: read_array(obj, "correlationMaskCount", "pCorrelationMasks", diag),
        }
    }
}
structure!(
    RenderPassMultiviewCreateInfo,
    RENDER_PASS_MULTIVIEW_CREATE_INFO,
    "VkRenderPassMultiviewCreateInfo"
);

record! {
    pub struct AttachmentDescription2 {
        flags: AttachmentDescriptionFlags => "flags",
        format: Format => "format",
        samples: SampleCountFlags => "samples",
        load_op: AttachmentLoadOp => "loadOp",
        store_op: AttachmentStoreOp => "storeOp",
        stencil_load_op: AttachmentLoadOp => "stencilLoadOp",
        stencil_store_op: AttachmentStoreOp => "stencilStoreOp",
        initial_layout: ImageLayout => "initialLayout",
        final_layout: ImageLayout => "finalLayout",
    }
}
extensible!(AttachmentDescription2, ATTACHMENT_DESCRIPTION_2, "VkAttachmentDescription2", []);

record! {
    pub struct AttachmentReference2 {
        attachment: u32 => "attachment",
        layout: ImageLayout => "layout",
        aspect_mask: ImageAspectFlags => "aspectMask",
    }
}
extensible!(AttachmentReference2, ATTACHMENT_REFERENCE_2, "VkAttachmentReference2", []);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubpassDescription2 {
    pub flags: SubpassDescriptionFlags,
    pub pipeline_bind_point: PipelineBindPoint,
    pub view_mask: u32,
    pub input_attachments: Vec<Chained<AttachmentReference2>>,
    pub color_attachments: Vec<Chained<AttachmentReference2>>,
    pub resolve_attachments: Option<Vec<Chained<AttachmentReference2>>>,
    pub depth_stencil_attachment: Option<Chained<AttachmentReference2>>,
    pub preserve_attachments: Vec<u32>,
}

impl Fields for SubpassDescription2 {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_field(out, "pipelineBindPoint", &self.pipeline_bind_point, diag);
        write_field(out, "viewMask", &self.view_mask, diag);
        write_array(out, "inputAttachmentCount", "pInputAttachments", &self.input_attachments, diag);
        write_array(out, "colorAttachmentCount", "pColorAttachments", &self.color_attachments, diag);
        check_governed_len(
            self.resolve_attachments.as_deref(),
            "pResolveAttachments",
            "colorAttachmentCount",
            self.color_attachments.len() as u32,
            diag,
        );
        write_optional_array(out, "pResolveAttachments", self.resolve_attachments.as_deref(), diag);
        write_field(out, "pDepthStencilAttachment", &self.depth_stencil_attachment, diag);
        write_array(
            out,
            "preserveAttachmentCount",
            "pPreserveAttachments",
            &self.preserve_attachments,
            diag,
        );
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        let color_attachments: Vec<Chained<AttachmentReference2>> =
            read_array(obj, "colorAttachmentCount", "pColorAttachments", diag);
        let resolve_attachments: Option<Vec<Chained<AttachmentReference2>>> =
            read_optional_array(obj, "pResolveAttachments", diag);
        check_governed_len(
            resolve_attachments.as_deref(),
            "pResolveAttachments",
            "colorAttachmentCount",
            color_attachments.len() as u32,
            diag,
        );
        Self {
            flags: read_field(obj, "flags", diag),
            pipeline_bind_point: read_field(obj, "pipelineBindPoint", diag),
            view_mask: read_field(obj, "viewMask", diag),
            input_attachments: read_array(obj, "inputAttachmentCount", "pInputAttachments", diag),
            color_attachments,
            resolve_attachments,
            depth_stencil_attachment: read_field(obj, "pDepthStencilAttachment", diag),
            preserve_attachments: read_array(
                obj,
                "preserveAttachmentCount",
                "pPreserveAttachments",
                diag,
            ),
        }
    }
}
extensible!(SubpassDescription2, SUBPASS_DESCRIPTION_2, "VkSubpassDescription2", []);

record! {
    pub struct SubpassDependency2 {
        src_subpass: u32 => "srcSubpass",
        dst_subpass: u32 => "dstSubpass",
        src_stage_mask: PipelineStageFlags => "srcStageMask",
        dst_stage_mask: PipelineStageFlags => "dstStageMask",
        src_access_mask: AccessFlags => "srcAccessMask",
        dst_access_mask: AccessFlags => "dstAccessMask",
        dependency_flags: DependencyFlags => "dependencyFlags",
        view_offset: i32 => "viewOffset",
    }
}
extensible!(SubpassDependency2, SUBPASS_DEPENDENCY_2, "VkSubpassDependency2", []);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderPassCreateInfo2 {
    pub flags: RenderPassCreateFlags,
    pub attachments: Vec<Chained<AttachmentDescription2>>,
    pub subpasses: Vec<Chained<SubpassDescription2>>,
    pub dependencies: Vec<Chained<SubpassDependency2>>,
    pub correlated_view_masks: Vec<u32>,
}

impl Fields for RenderPassCreateInfo2 {
    fn encode_fields(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) {
        write_field(out, "flags", &self.flags, diag);
        write_array(out, "attachmentCount", "pAttachments", &self.attachments, diag);
        write_array(out, "subpassCount", "pSubpasses", &self.subpasses, diag);
        write_array(out, "dependencyCount", "pDependencies", &self.dependencies, diag);
        write_array(
            out,
            "correlatedViewMaskCount",
            "pCorrelatedViewMasks",
            &self.correlated_view_masks,
            diag,
        );
    }

    fn decode_fields(obj: &Map<String, Value>, diag: &mut Diagnostics) -> Self {
        Self {
            flags: read_field(obj, "flags", diag),
            attachments: read_array(obj, "attachmentCount", "pAttachments", diag),
            subpasses: read_array(obj, "subpassCount", "pSubpasses", diag),
            dependencies: read_array(obj, "dependencyCount", "pDependencies", diag),
            correlated_view_masks: read_array(
                obj,
                "correlatedViewMaskCount",
                "pCorrelatedViewMasks",
                diag,
            ),
        }
    }
}
extensible!(
    RenderPassCreateInfo2,
    RENDER_PASS_CREATE_INFO_2,
    "VkRenderPassCreateInfo2",
    []
);
