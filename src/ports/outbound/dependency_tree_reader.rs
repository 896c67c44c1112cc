use crate::dependency_submission::domain::DependencyNode;
use crate::shared::Result;
use std::fmt;
use std::path::PathBuf;

/// Where the dependency tree JSON is read from
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    Stdin,
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// DependencyTreeReader port for loading the resolved dependency tree
///
/// The whole input is read and decoded before any processing starts.
pub trait DependencyTreeReader {
    /// Reads and decodes the root node
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source cannot be read
    /// - The content is not a dependency tree
    ///   ([`InputDecodeFailure`](crate::shared::error::SubmissionError::InputDecodeFailure))
    fn read_dependency_tree(&self, source: &InputSource) -> Result<DependencyNode>;
}
