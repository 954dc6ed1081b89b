use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::path::Path;
use tfstate_ssp::prelude::*;

/// Mock StateReader returning a fixed state blob
pub struct MockStateReader {
    pub content: String,
}

impl MockStateReader {
    pub fn new(content: String) -> Self {
        Self { content }
    }

    /// Encodes a plain Terraform state document the way `base64 -i` would
    pub fn from_state_json(state: &serde_json::Value) -> Self {
        Self::new(format!("{}\n", BASE64.encode(state.to_string())))
    }
}

impl StateReader for MockStateReader {
    fn read_state(&self, _state_path: &Path) -> Result<String> {
        Ok(self.content.clone())
    }
}
