//! The closed set of extension records a chain may carry.

use pcjson_core::{ChainRecord, Diagnostics, Fields, Structure};
use serde_json::{Map, Value};

use super::features::*;
use super::pipeline::*;
use super::render_pass::*;
use super::reservation::*;
use super::resources::*;
use super::types::StructureType;

macro_rules! extensions {
    ($($variant:ident,)*) => {
        /// One link of an extension chain.
        ///
        /// `Unrecognized` stands for a link whose payload this crate cannot
        /// describe; it never encodes and is reported by the chain walk.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Extension {
            $($variant($variant),)*
            Unrecognized(StructureType),
        }

        impl ChainRecord for Extension {
            type Tag = StructureType;

            fn tag(&self) -> StructureType {
                match self {
                    $(Extension::$variant(_) => <$variant as Structure>::TAG,)*
                    Extension::Unrecognized(tag) => *tag,
                }
            }

            fn type_name(tag: StructureType) -> Option<&'static str> {
                $(
                    if tag == <$variant as Structure>::TAG {
                        return Some(<$variant as Structure>::TYPE_NAME);
                    }
                )*
                None
            }

            fn encode_payload(&self, out: &mut Map<String, Value>, diag: &mut Diagnostics) -> bool {
                match self {
                    $(
                        Extension::$variant(record) => {
                            record.encode_fields(out, diag);
                            true
                        }
                    )*
                    Extension::Unrecognized(_) => false,
                }
            }

            fn decode_payload(
                tag: StructureType,
                obj: &Map<String, Value>,
                diag: &mut Diagnostics,
            ) -> Option<Self> {
                $(
                    if tag == <$variant as Structure>::TAG {
                        return Some(Extension::$variant(<$variant as Fields>::decode_fields(obj, diag)));
                    }
                )*
                None
            }
        }

        $(
            impl From<$variant> for Extension {
                fn from(record: $variant) -> Self {
                    Extension::$variant(record)
                }
            }
        )*
    };
}

extensions! {
    PipelineOfflineCreateInfo,
    PipelineDiscardRectangleStateCreateInfoEXT,
    PipelineShaderStageRequiredSubgroupSizeCreateInfo,
    PipelineTessellationDomainOriginStateCreateInfo,
    SamplerYcbcrConversionInfo,
    SamplerReductionModeCreateInfo,
    DescriptorSetLayoutBindingFlagsCreateInfo,
    PhysicalDeviceFeatures2,
    PhysicalDeviceVulkan11Features,
    PhysicalDeviceVulkan12Features,
    PhysicalDeviceVulkanSC10Features,
    PhysicalDeviceScalarBlockLayoutFeatures,
    RenderPassMultiviewCreateInfo,
    DeviceObjectReservationCreateInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_reports_its_own_tag() {
        let link = Extension::from(SamplerReductionModeCreateInfo::default());
        assert_eq!(link.tag(), StructureType::SAMPLER_REDUCTION_MODE_CREATE_INFO);
        assert_eq!(
            Extension::type_name(StructureType::RENDER_PASS_MULTIVIEW_CREATE_INFO),
            Some("VkRenderPassMultiviewCreateInfo")
        );
        assert_eq!(Extension::type_name(StructureType::SAMPLER_CREATE_INFO), None);
    }

    #[test]
    fn unrecognized_links_have_no_encoder() {
        let mut diag = Diagnostics::new();
        let mut out = Map::new();
        let link = Extension::Unrecognized(StructureType(42));
        assert!(!link.encode_payload(&mut out, &mut diag));
        assert!(out.is_empty());
    }
}
