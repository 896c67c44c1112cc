use crate::dependency_submission::domain::DependencyNode;
use crate::ports::outbound::{DependencyTreeReader, InputSource};
use crate::shared::error::SubmissionError;
use crate::shared::security::{validate_file_size, validate_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// FileSystemReader adapter for reading the dependency tree from a file or stdin
///
/// This adapter implements the DependencyTreeReader port. Files are checked
/// before reading (no symlinks, regular file, size limit); stdin is read up
/// to the same size limit.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn read_file(&self, path: &Path) -> Result<Vec<u8>> {
        validate_input_file(path)?;

        fs::read(path).map_err(|e| {
            SubmissionError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Reads raw bytes; text encoding is checked while decoding.
    fn read_stream<R: Read>(&self, stream: R) -> Result<Vec<u8>> {
        let mut content = Vec::new();
        stream
            .take(MAX_FILE_SIZE + 1)
            .read_to_end(&mut content)
            .map_err(|e| anyhow::anyhow!("Failed to read from stdin: {}", e))?;

        validate_file_size(content.len() as u64, Path::new("<stdin>"), MAX_FILE_SIZE)?;
        Ok(content)
    }

    fn decode(&self, content: &[u8], source: &InputSource) -> Result<DependencyNode> {
        DependencyNode::from_slice(content).map_err(|e| {
            SubmissionError::InputDecodeFailure {
                source_name: source.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl DependencyTreeReader for FileSystemReader {
    fn read_dependency_tree(&self, source: &InputSource) -> Result<DependencyNode> {
        let content = match source {
            InputSource::Stdin => self.read_stream(io::stdin().lock())?,
            InputSource::File(path) => self.read_file(path)?,
        };

        self.decode(&content, source)
    }
}
