use super::{ResolvedGraph, SnapshotMetadata};

/// Name and source location of the single manifest in every snapshot
pub const PACKAGE_RESOLVED_MANIFEST: &str = "Package.resolved";

/// A named container holding the flattened graph of one lockfile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    name: String,
    source_location: String,
    resolved: ResolvedGraph,
}

impl Manifest {
    pub fn new(name: String, source_location: String, resolved: ResolvedGraph) -> Self {
        Self {
            name,
            source_location,
            resolved,
        }
    }

    /// The `Package.resolved` manifest holding `resolved`
    pub fn package_resolved(resolved: ResolvedGraph) -> Self {
        Self::new(
            PACKAGE_RESOLVED_MANIFEST.to_string(),
            PACKAGE_RESOLVED_MANIFEST.to_string(),
            resolved,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn source_location(&self) -> &str {
        &self.source_location
    }

    pub fn resolved(&self) -> &ResolvedGraph {
        &self.resolved
    }
}

/// The dependency graph document for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencySnapshot {
    metadata: SnapshotMetadata,
    manifest: Manifest,
}

impl DependencySnapshot {
    /// Snapshot format version understood by the submission API
    pub const VERSION: u32 = 0;

    pub fn new(metadata: SnapshotMetadata, manifest: Manifest) -> Self {
        Self { metadata, manifest }
    }

    pub fn metadata(&self) -> &SnapshotMetadata {
        &self.metadata
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
