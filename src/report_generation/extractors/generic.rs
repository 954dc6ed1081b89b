use super::AttributeExtractor;
use crate::report_generation::domain::{AssetField, AssetFields, InstanceRecord};

/// Fallback for resource types no provider extractor claims
/// (`random_*`, `null_resource`, `tls_*`, ...). Only sets `asset_type`.
pub struct GenericExtractor;

impl AttributeExtractor for GenericExtractor {
    fn extract(&self, resource_type: &str, _instance: &InstanceRecord) -> AssetFields {
        let mut fields = AssetFields::new();
        fields.insert("asset_type".into(), AssetField::text(resource_type));
        fields
    }
}
