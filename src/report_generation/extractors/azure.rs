use super::AttributeExtractor;
use crate::report_generation::domain::{AssetField, AssetFields, InstanceRecord};

/// Extractor for `azurerm_*` resources. No per-class specialization.
pub struct AzureExtractor;

impl AttributeExtractor for AzureExtractor {
    fn extract(&self, resource_type: &str, instance: &InstanceRecord) -> AssetFields {
        let mut fields = AssetFields::new();
        fields.insert("cloud_provider".into(), AssetField::text("Azure"));
        fields.insert("asset_type".into(), AssetField::text(resource_type));
        fields.insert("id".into(), AssetField::Text(instance.text_or_na(&["id"])));
        fields.insert(
            "location".into(),
            AssetField::Text(instance.text_or_na(&["location"])),
        );
        fields.insert(
            "resource_group".into(),
            AssetField::Text(instance.text_or_na(&["resource_group_name"])),
        );
        fields.insert(
            "tags".into(),
            AssetField::Structured(instance.mapping("tags")),
        );
        fields
    }
}
