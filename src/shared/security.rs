use crate::shared::error::SubmissionError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size accepted for a dependency tree input file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Rejects paths that are symbolic links.
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
/// A path that does not exist yet is accepted; callers creating files rely on this.
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(SubmissionError::SecurityError {
                path: path.to_path_buf(),
                reason: format!("Failed to read metadata before {}: {}", operation, e),
                hint: "Check the permissions of the path".to_string(),
            }
            .into())
        }
    };

    if metadata.is_symlink() {
        return Err(SubmissionError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("Refusing to {} through a symbolic link", operation),
            hint: "Pass the real file path instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that an input path is an existing regular file within [`MAX_FILE_SIZE`].
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata cannot be read
/// - The path is a symbolic link
/// - The path is not a regular file
/// - The file exceeds the size limit
pub fn validate_input_file(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| SubmissionError::FileReadError {
        path: path.to_path_buf(),
        details: e.to_string(),
    })?;

    if metadata.is_symlink() {
        return Err(SubmissionError::SecurityError {
            path: path.to_path_buf(),
            reason: "Input is a symbolic link".to_string(),
            hint: "Pass the real file path instead of a link".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        return Err(SubmissionError::FileReadError {
            path: path.to_path_buf(),
            details: "not a regular file".to_string(),
        }
        .into());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)
}

/// Validates file size is within `max_size`
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(SubmissionError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "A resolved dependency tree should be far smaller; check the input".to_string(),
        }
        .into());
    }
    Ok(())
}
