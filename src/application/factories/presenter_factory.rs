use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Where the rendered snapshot goes
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputTarget {
    #[default]
    Stdout,
    File(PathBuf),
}

impl From<Option<PathBuf>> for OutputTarget {
    fn from(path: Option<PathBuf>) -> Self {
        path.map_or(OutputTarget::Stdout, OutputTarget::File)
    }
}

/// Factory for creating output presenters
///
/// Picks the presenter adapter for an [`OutputTarget`].
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates the presenter writing to `target`
    ///
    /// # Examples
    /// ```
    /// use swift_dependency_submission::application::factories::{OutputTarget, PresenterFactory};
    ///
    /// let presenter = PresenterFactory::create(OutputTarget::Stdout);
    /// ```
    pub fn create(target: OutputTarget) -> Box<dyn OutputPresenter> {
        match target {
            OutputTarget::Stdout => Box::new(StdoutPresenter::new()),
            OutputTarget::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
