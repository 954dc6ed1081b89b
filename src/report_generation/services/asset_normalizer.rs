use crate::report_generation::domain::{NormalizedAsset, RawResourceRecord};
use crate::report_generation::extractors::ExtractorRegistry;

/// AssetNormalizer service producing one uniform asset per resource instance
///
/// Instances are indexed from 0 in declaration order, so the same state always
/// yields the same `asset_id`s in the same order.
pub struct AssetNormalizer {
    registry: ExtractorRegistry,
}

impl AssetNormalizer {
    pub fn new(registry: ExtractorRegistry) -> Self {
        Self { registry }
    }

    pub fn normalize(&self, resources: &[RawResourceRecord]) -> Vec<NormalizedAsset> {
        resources
            .iter()
            .flat_map(|resource| {
                let extractor = self.registry.lookup(&resource.resource_type);
                resource
                    .instances
                    .iter()
                    .enumerate()
                    .map(move |(index, instance)| {
                        NormalizedAsset::new(
                            &resource.resource_type,
                            &resource.name,
                            &resource.provider,
                            index,
                            extractor.extract(&resource.resource_type, instance),
                        )
                    })
            })
            .collect()
    }
}

impl Default for AssetNormalizer {
    fn default() -> Self {
        Self::new(ExtractorRegistry::default())
    }
}
