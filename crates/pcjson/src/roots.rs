//! Root records that can be converted on their own.

use pcjson_contracts::KEY_STYPE;
use pcjson_core::{decode_structure, Diagnostics, Discriminant, JsonValue, Structure};
use serde_json::Value;

use crate::vk::*;

macro_rules! any_record {
    ($($variant:ident($ty:ty),)*) => {
        /// A root record with its extension chain.
        #[derive(Debug, Clone, PartialEq)]
        pub enum AnyRecord {
            $($variant(Chained<$ty>),)*
        }

        impl AnyRecord {
            pub fn s_type(&self) -> StructureType {
                match self {
                    $(AnyRecord::$variant(_) => <$ty as Structure>::TAG,)*
                }
            }

            pub fn type_name(&self) -> &'static str {
                match self {
                    $(AnyRecord::$variant(_) => <$ty as Structure>::TYPE_NAME,)*
                }
            }

            pub(crate) fn encode(&self, diag: &mut Diagnostics) -> Value {
                match self {
                    $(AnyRecord::$variant(record) => record.to_json(diag),)*
                }
            }

            fn decode_as(tag: StructureType, json: &Value, diag: &mut Diagnostics) -> Option<Self> {
                $(
                    if tag == <$ty as Structure>::TAG {
                        return Some(AnyRecord::$variant(decode_structure::<$ty>(json, diag)));
                    }
                )*
                None
            }
        }

        $(
            impl From<Chained<$ty>> for AnyRecord {
                fn from(record: Chained<$ty>) -> Self {
                    AnyRecord::$variant(record)
                }
            }
        )*
    };
}

any_record! {
    GraphicsPipeline(GraphicsPipelineCreateInfo),
    ComputePipeline(ComputePipelineCreateInfo),
    SamplerYcbcrConversion(SamplerYcbcrConversionCreateInfo),
    Sampler(SamplerCreateInfo),
    DescriptorSetLayout(DescriptorSetLayoutCreateInfo),
    PipelineLayout(PipelineLayoutCreateInfo),
    PhysicalDeviceFeatures(PhysicalDeviceFeatures2),
    RenderPass(RenderPassCreateInfo),
    RenderPass2(RenderPassCreateInfo2),
    ShaderModule(ShaderModuleCreateInfo),
    DeviceObjectReservation(DeviceObjectReservationCreateInfo),
    PipelineOffline(PipelineOfflineCreateInfo),
}

impl AnyRecord {
    /// Decodes a root record, dispatching on its declared `sType`.
    pub(crate) fn decode(json: &Value, diag: &mut Diagnostics) -> Option<Self> {
        let Some(declared) = json.get(KEY_STYPE) else {
            diag.error("Missing sType from JSON");
            return None;
        };
        let errors = diag.error_count();
        let tag = StructureType::from_json(declared, &mut diag.scope(KEY_STYPE));
        if diag.error_count() != errors {
            return None;
        }
        let decoded = Self::decode_as(tag, json, diag);
        if decoded.is_none() {
            diag.error(format!("Unsupported structure type: {}", tag.describe()));
        }
        decoded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dispatches_on_declared_type() {
        let json = json!({
            "sType": "VK_STRUCTURE_TYPE_SAMPLER_REDUCTION_MODE_CREATE_INFO",
            "reductionMode": "VK_SAMPLER_REDUCTION_MODE_MIN",
            "pNext": "NULL"
        });
        let mut diag = Diagnostics::new();
        assert!(AnyRecord::decode(&json, &mut diag).is_none());
        assert!(diag
            .render()
            .contains("Unsupported structure type: VK_STRUCTURE_TYPE_SAMPLER_REDUCTION_MODE_CREATE_INFO"));
    }

    #[test]
    fn reports_the_record_type() {
        let record = AnyRecord::from(Chained::new(ShaderModuleCreateInfo::default()));
        assert_eq!(record.s_type(), StructureType::SHADER_MODULE_CREATE_INFO);
        assert_eq!(record.type_name(), "VkShaderModuleCreateInfo");
    }
}
