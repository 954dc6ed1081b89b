use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Value of one provider-derived asset field.
///
/// The variants keep enough structure for both report families: tabular
/// output flattens them to strings, document output keeps them nested.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetField {
    Text(String),
    Flag(bool),
    /// Raw mapping passed through from the state (tags, labels)
    Structured(Value),
    /// Server-side encryption configuration, unwrapped from a possible
    /// single-element list. `None` when the bucket has no configuration.
    Encryption(Option<Map<String, Value>>),
}

impl AssetField {
    pub fn text(value: impl Into<String>) -> Self {
        AssetField::Text(value.into())
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AssetField::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Extra fields contributed by a provider extractor, keyed by column name
pub type AssetFields = BTreeMap<String, AssetField>;

/// Uniform, provider-agnostic record for one resource instance
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedAsset {
    asset_id: String,
    resource_type: String,
    resource_name: String,
    provider: String,
    fields: AssetFields,
}

impl NormalizedAsset {
    /// Builds an asset; `asset_id` is always `{type}.{name}.{index}`
    pub fn new(
        resource_type: &str,
        resource_name: &str,
        provider: &str,
        instance_index: usize,
        fields: AssetFields,
    ) -> Self {
        Self {
            asset_id: format!("{}.{}.{}", resource_type, resource_name, instance_index),
            resource_type: resource_type.to_string(),
            resource_name: resource_name.to_string(),
            provider: provider.to_string(),
            fields,
        }
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    pub fn resource_name(&self) -> &str {
        &self.resource_name
    }

    pub fn provider(&self) -> &str {
        &self.provider
    }

    pub fn fields(&self) -> &AssetFields {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&AssetField> {
        self.fields.get(name)
    }

    /// Text value of a field used for grouping (`cloud_provider`, `asset_type`)
    pub fn text_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(AssetField::as_text)
    }
}
