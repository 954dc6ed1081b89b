use crate::ports::outbound::ArtifactWriter;
use crate::shared::error::ReportError;
use crate::shared::security::{validate_artifact_filename, validate_not_symlink};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// OutputDirectoryWriter adapter for writing report files into one directory
///
/// This adapter implements the ArtifactWriter port. The directory is
/// created on first write.
pub struct OutputDirectoryWriter {
    output_dir: PathBuf,
}

impl OutputDirectoryWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    /// Creates the output directory if needed and rejects symlinked directories
    fn ensure_output_dir(&self) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(&self.output_dir) {
            if metadata.is_symlink() {
                return Err(ReportError::InvalidOutputDirectory {
                    path: self.output_dir.clone(),
                    reason: "Security: Output directory is a symbolic link. For security reasons, writing through symbolic links is not allowed.".to_string(),
                }
                .into());
            }
            if !metadata.is_dir() {
                return Err(ReportError::InvalidOutputDirectory {
                    path: self.output_dir.clone(),
                    reason: "Path exists and is not a directory".to_string(),
                }
                .into());
            }
            return Ok(());
        }

        fs::create_dir_all(&self.output_dir).map_err(|e| {
            ReportError::InvalidOutputDirectory {
                path: self.output_dir.clone(),
                reason: format!("Failed to create directory: {}", e),
            }
            .into()
        })
    }

    /// Security validation before writing:
    /// - Reject if output path exists and is a symlink
    fn validate_output_security(&self, output_path: &Path) -> Result<()> {
        if fs::symlink_metadata(output_path).is_ok() {
            validate_not_symlink(output_path, "write").map_err(|e| ReportError::FileWriteError {
                path: output_path.to_path_buf(),
                details: e.to_string(),
            })?;
        }
        Ok(())
    }
}

impl ArtifactWriter for OutputDirectoryWriter {
    fn write_file(&self, filename: &str, contents: &[u8]) -> Result<PathBuf> {
        validate_artifact_filename(filename)?;
        self.ensure_output_dir()?;

        let output_path = self.output_dir.join(filename);
        self.validate_output_security(&output_path)?;

        fs::write(&output_path, contents).map_err(|e| ReportError::FileWriteError {
            path: output_path.clone(),
            details: e.to_string(),
        })?;

        Ok(output_path)
    }
}
