use super::AttributeExtractor;
use crate::report_generation::domain::{AssetField, AssetFields, InstanceRecord};

/// Extractor for `google_*` resources. GCP uses `labels` where other
/// providers use `tags`.
pub struct GcpExtractor;

impl AttributeExtractor for GcpExtractor {
    fn extract(&self, resource_type: &str, instance: &InstanceRecord) -> AssetFields {
        let mut fields = AssetFields::new();
        fields.insert("cloud_provider".into(), AssetField::text("GCP"));
        fields.insert("asset_type".into(), AssetField::text(resource_type));
        fields.insert("id".into(), AssetField::Text(instance.text_or_na(&["id"])));
        fields.insert("zone".into(), AssetField::Text(instance.text_or_na(&["zone"])));
        fields.insert(
            "project".into(),
            AssetField::Text(instance.text_or_na(&["project"])),
        );
        fields.insert(
            "labels".into(),
            AssetField::Structured(instance.mapping("labels")),
        );
        fields
    }
}
