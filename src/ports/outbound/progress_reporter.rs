/// ProgressReporter port for reporting progress during a run
///
/// Reports go to a side channel (stderr) so they never mix with the snapshot.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through the top-level dependencies
    ///
    /// # Arguments
    /// * `current` - Number of items processed so far
    /// * `total` - Total expected items
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
