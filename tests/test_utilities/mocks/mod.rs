/// Mock implementations for testing
mod mock_dependency_tree_reader;
mod mock_progress_reporter;

pub use mock_dependency_tree_reader::MockDependencyTreeReader;
pub use mock_progress_reporter::MockProgressReporter;
