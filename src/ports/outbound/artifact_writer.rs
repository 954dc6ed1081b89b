use crate::shared::Result;
use std::path::PathBuf;

/// ArtifactWriter port for persisting report files
///
/// Implementations own the destination (an output directory) and only
/// accept bare filenames, never paths.
pub trait ArtifactWriter {
    /// Writes `contents` under `filename`, replacing any previous file
    ///
    /// # Returns
    /// The path the file was written to
    ///
    /// # Errors
    /// Returns an error if:
    /// - The filename is not a plain file name
    /// - The destination cannot be created or is a symbolic link
    /// - Writing fails
    fn write_file(&self, filename: &str, contents: &[u8]) -> Result<PathBuf>;
}
