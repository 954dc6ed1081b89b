use crate::ports::outbound::StateReader;
use crate::shared::error::ReportError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading the encoded state from disk
///
/// This adapter implements the StateReader port.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileSystemReader {
    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        validate_regular_file(path, file_type)?;

        let metadata = fs::metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;
        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl StateReader for FileSystemReader {
    fn read_state(&self, state_path: &Path) -> Result<String> {
        if !state_path.exists() {
            return Err(ReportError::StateFileNotFound {
                path: state_path.to_path_buf(),
                suggestion: "Check the --state path. The file must contain the base64-encoded Terraform state, \
                             e.g. `base64 -w0 terraform.tfstate > terraform.tfstate.b64`."
                    .to_string(),
            }
            .into());
        }

        self.safe_read_file(state_path, "Terraform state").map_err(|e| {
            ReportError::StateFileReadError {
                path: state_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
