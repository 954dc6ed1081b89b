use crate::report_generation::domain::RawResourceRecord;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde_json::Value;

/// Top-level key holding the resource list in a Terraform state document
const RESOURCES_KEY: &str = "resources";

/// Result of decoding a state blob.
///
/// Decoding never fails outright: the asset inventory is supplementary, so
/// problems are reported as warnings next to whatever could be recovered.
#[derive(Debug, Clone, Default)]
pub struct DecodedState {
    pub resources: Vec<RawResourceRecord>,
    pub warnings: Vec<String>,
}

impl DecodedState {
    fn failed(warning: String) -> Self {
        Self {
            resources: Vec::new(),
            warnings: vec![warning],
        }
    }
}

/// StateDecoder service turning a base64 Terraform state blob into resources
pub struct StateDecoder;

impl StateDecoder {
    /// Decodes a base64-encoded Terraform state.
    ///
    /// Whitespace around the blob (including trailing newlines) is ignored.
    /// Malformed base64, non-UTF-8 content or invalid JSON yield an empty
    /// resource list plus a warning. A missing `resources` key yields an
    /// empty list without a warning.
    pub fn decode(encoded: &str) -> DecodedState {
        let bytes = match BASE64.decode(encoded.trim()) {
            Ok(bytes) => bytes,
            Err(e) => {
                return DecodedState::failed(format!(
                    "Could not parse Terraform state for inventory: invalid base64 ({})",
                    e
                ))
            }
        };

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                return DecodedState::failed(format!(
                    "Could not parse Terraform state for inventory: not UTF-8 ({})",
                    e
                ))
            }
        };

        match serde_json::from_str::<Value>(&text) {
            Ok(document) => Self::extract_resources(&document),
            Err(e) => DecodedState::failed(format!(
                "Could not parse Terraform state for inventory: {}",
                e
            )),
        }
    }

    /// Pulls the resource collection out of an already-parsed state document
    pub fn extract_resources(document: &Value) -> DecodedState {
        let entries = match document.get(RESOURCES_KEY) {
            None | Some(Value::Null) => return DecodedState::default(),
            Some(Value::Array(entries)) => entries,
            Some(_) => {
                return DecodedState::failed(format!(
                    "Could not parse Terraform state for inventory: '{}' is not a list",
                    RESOURCES_KEY
                ))
            }
        };

        let mut state = DecodedState::default();
        for (index, entry) in entries.iter().enumerate() {
            match serde_json::from_value::<RawResourceRecord>(entry.clone()) {
                Ok(record) => state.resources.push(record),
                Err(e) => state.warnings.push(format!(
                    "Skipping malformed resource #{} in Terraform state: {}",
                    index, e
                )),
            }
        }
        state
    }
}
