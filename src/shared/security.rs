use crate::shared::error::ReportError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum state file size (100 MB).
/// Large Terraform states are a few MB even after base64 expansion.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
            path.display(),
            operation
        );
    }

    Ok(())
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Validates a filename handed to us by the assessment service.
///
/// Artifact names are joined onto the output directory, so anything that could
/// leave that directory is refused.
///
/// # Errors
/// Returns `ReportError::SecurityError` if the name is empty, absolute,
/// contains a path separator, or is a `.`/`..` directory reference
pub fn validate_artifact_filename(filename: &str) -> Result<()> {
    let reason = if filename.trim().is_empty() {
        Some("Artifact filename is empty")
    } else if filename.contains('/') || filename.contains('\\') {
        Some("Artifact filename contains path separators")
    } else if filename == "." || filename == ".." {
        Some("Artifact filename refers to a directory")
    } else if Path::new(filename).is_absolute() {
        Some("Artifact filename is an absolute path")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ReportError::SecurityError {
            path: filename.into(),
            reason: reason.to_string(),
            hint: "The assessment service returned an unsafe artifact filename; it was not written"
                .to_string(),
        }
        .into()),
        None => Ok(()),
    }
}
