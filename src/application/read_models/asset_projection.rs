//! The two renderings of a normalized asset.
//!
//! Tabular output needs flat strings; the nested documents keep the original
//! structure. The two differ on purpose for tags and encryption, so they are
//! kept as separate functions rather than one function with a mode flag.

use crate::report_generation::domain::{AssetField, NormalizedAsset};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Marker written to the assets table when a bucket has encryption configured
pub const ENCRYPTION_ENABLED: &str = "Enabled";
const NOT_AVAILABLE: &str = "N/A";

/// Flat string cells keyed by column name, for the assets CSV.
///
/// Tags and labels become a JSON string, encryption collapses to
/// `"Enabled"`/`"N/A"`, booleans become `true`/`false`.
pub fn tabular_projection(asset: &NormalizedAsset) -> BTreeMap<String, String> {
    let mut cells = common_fields(asset)
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect::<BTreeMap<_, _>>();

    for (name, field) in asset.fields() {
        let cell = match field {
            AssetField::Text(s) => s.clone(),
            AssetField::Flag(b) => b.to_string(),
            AssetField::Structured(v) => v.to_string(),
            AssetField::Encryption(Some(_)) => ENCRYPTION_ENABLED.to_string(),
            AssetField::Encryption(None) => NOT_AVAILABLE.to_string(),
        };
        cells.insert(name.clone(), cell);
    }
    cells
}

/// Nested JSON object for the SSP and inventory documents.
///
/// Tags and labels stay objects, encryption is the unwrapped configuration
/// (or `"N/A"`), booleans stay booleans.
pub fn document_projection(asset: &NormalizedAsset) -> Map<String, Value> {
    let mut object = common_fields(asset)
        .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
        .collect::<Map<_, _>>();

    for (name, field) in asset.fields() {
        let value = match field {
            AssetField::Text(s) => Value::String(s.clone()),
            AssetField::Flag(b) => Value::Bool(*b),
            AssetField::Structured(v) => v.clone(),
            AssetField::Encryption(Some(config)) => Value::Object(config.clone()),
            AssetField::Encryption(None) => Value::String(NOT_AVAILABLE.to_string()),
        };
        object.insert(name.clone(), value);
    }
    object
}

fn common_fields(asset: &NormalizedAsset) -> impl Iterator<Item = (&'static str, &str)> {
    [
        ("asset_id", asset.asset_id()),
        ("resource_type", asset.resource_type()),
        ("resource_name", asset.resource_name()),
        ("provider", asset.provider()),
    ]
    .into_iter()
}
