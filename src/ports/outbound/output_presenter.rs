use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// the rendered snapshot is written to.
pub trait OutputPresenter {
    /// Presents the rendered snapshot
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - The destination is refused for security reasons
    fn present(&self, content: &str) -> Result<()>;
}
