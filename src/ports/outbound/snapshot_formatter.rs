use crate::dependency_submission::domain::DependencySnapshot;
use crate::shared::Result;

/// SnapshotFormatter port for rendering the snapshot document
pub trait SnapshotFormatter {
    /// Renders the snapshot as text
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, snapshot: &DependencySnapshot) -> Result<String>;
}
