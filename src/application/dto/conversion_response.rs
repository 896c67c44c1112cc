use crate::dependency_submission::domain::DependencySnapshot;

/// ConversionResponse - response DTO from the conversion use case
///
/// Holds the finished document; formatting is left to the caller.
#[derive(Debug, Clone)]
pub struct ConversionResponse {
    pub snapshot: DependencySnapshot,
    /// Dependency references with no matching package record
    pub dangling_references: Vec<String>,
}

impl ConversionResponse {
    pub fn new(snapshot: DependencySnapshot, dangling_references: Vec<String>) -> Self {
        Self {
            snapshot,
            dangling_references,
        }
    }

    pub fn package_count(&self) -> usize {
        self.snapshot.manifest().resolved().len()
    }
}
