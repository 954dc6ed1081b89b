//! Provider-specific attribute extraction
//!
//! Each cloud provider contributes its own set of asset fields. Extractors are
//! selected by resource type prefix through [`ExtractorRegistry`], with
//! [`GenericExtractor`] covering every type no provider claims.

mod aws;
mod azure;
mod gcp;
mod generic;

pub use aws::AwsExtractor;
pub use azure::AzureExtractor;
pub use gcp::GcpExtractor;
pub use generic::GenericExtractor;

use crate::report_generation::domain::{AssetFields, InstanceRecord};

/// Derives provider-specific asset fields from an instance's attributes.
///
/// Implementations are pure and infallible: every missing or mistyped
/// attribute falls back to a default value.
pub trait AttributeExtractor {
    fn extract(&self, resource_type: &str, instance: &InstanceRecord) -> AssetFields;
}

/// Prefix-keyed lookup table of extractors
pub struct ExtractorRegistry {
    entries: Vec<(&'static str, Box<dyn AttributeExtractor>)>,
    fallback: Box<dyn AttributeExtractor>,
}

impl ExtractorRegistry {
    /// Registry with no provider entries; everything goes to `fallback`
    pub fn empty(fallback: Box<dyn AttributeExtractor>) -> Self {
        Self {
            entries: Vec::new(),
            fallback,
        }
    }

    /// Adds an extractor for resource types starting with `prefix`.
    /// Earlier registrations win when prefixes overlap.
    pub fn register(mut self, prefix: &'static str, extractor: Box<dyn AttributeExtractor>) -> Self {
        self.entries.push((prefix, extractor));
        self
    }

    /// Extractor responsible for `resource_type`
    pub fn lookup(&self, resource_type: &str) -> &dyn AttributeExtractor {
        self.entries
            .iter()
            .find(|(prefix, _)| resource_type.starts_with(prefix))
            .map(|(_, extractor)| extractor.as_ref())
            .unwrap_or(self.fallback.as_ref())
    }
}

impl Default for ExtractorRegistry {
    /// AWS (`aws_`), Azure (`azurerm_`) and GCP (`google_`) extractors
    fn default() -> Self {
        Self::empty(Box::new(GenericExtractor))
            .register("aws_", Box::new(AwsExtractor))
            .register("azurerm_", Box::new(AzureExtractor))
            .register("google_", Box::new(GcpExtractor))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report_generation::domain::AssetField;

    fn cloud_provider(registry: &ExtractorRegistry, resource_type: &str) -> Option<AssetField> {
        registry
            .lookup(resource_type)
            .extract(resource_type, &InstanceRecord::default())
            .get("cloud_provider")
            .cloned()
    }

    #[test]
    fn test_default_registry_dispatch() {
        let registry = ExtractorRegistry::default();
        assert_eq!(
            cloud_provider(&registry, "aws_vpc"),
            Some(AssetField::text("AWS"))
        );
        assert_eq!(
            cloud_provider(&registry, "azurerm_storage_account"),
            Some(AssetField::text("Azure"))
        );
        assert_eq!(
            cloud_provider(&registry, "google_sql_database_instance"),
            Some(AssetField::text("GCP"))
        );
        assert_eq!(cloud_provider(&registry, "random_password"), None);
    }

    #[test]
    fn test_prefix_must_match_at_start() {
        let registry = ExtractorRegistry::default();
        assert_eq!(cloud_provider(&registry, "xaws_thing"), None);
    }

    #[test]
    fn test_custom_registration() {
        struct Constant;
        impl AttributeExtractor for Constant {
            fn extract(&self, _: &str, _: &InstanceRecord) -> AssetFields {
                let mut fields = AssetFields::new();
                fields.insert("cloud_provider".to_string(), AssetField::text("OCI"));
                fields
            }
        }

        let registry = ExtractorRegistry::default().register("oci_", Box::new(Constant));
        assert_eq!(
            cloud_provider(&registry, "oci_core_instance"),
            Some(AssetField::text("OCI"))
        );
    }
}
