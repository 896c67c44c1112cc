pub mod dependency_node;
pub mod dependency_snapshot;
pub mod package_url;
pub mod resolved_graph;
pub mod resolved_package;
pub mod snapshot_metadata;

pub use dependency_node::DependencyNode;
pub use dependency_snapshot::{DependencySnapshot, Manifest, PACKAGE_RESOLVED_MANIFEST};
pub use package_url::PackageUrl;
pub use resolved_graph::ResolvedGraph;
pub use resolved_package::{Relationship, ResolvedPackage, RUNTIME_SCOPE};
pub use snapshot_metadata::{Detector, SnapshotMetadata};
