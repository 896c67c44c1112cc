/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces the application core uses
/// to reach the outside world (stdin, file system, console).
pub mod dependency_tree_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod snapshot_formatter;

pub use dependency_tree_reader::{DependencyTreeReader, InputSource};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use snapshot_formatter::SnapshotFormatter;
