use crate::shared::Result;
use std::path::Path;

/// StateReader port for reading the encoded Terraform state
///
/// This port abstracts the file system operations needed to load the
/// base64 state blob that is both sent to the assessment service and
/// decoded locally for the asset inventory.
pub trait StateReader {
    /// Reads the state blob as text, unmodified
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_state(&self, state_path: &Path) -> Result<String>;
}
