/// Formatters rendering the snapshot document
mod github_snapshot_formatter;

pub use github_snapshot_formatter::GithubSnapshotFormatter;
