/// Domain services: pure logic over the domain model
pub mod graph_flattener;
pub mod snapshot_metadata_generator;

pub use graph_flattener::GraphFlattener;
pub use snapshot_metadata_generator::SnapshotMetadataGenerator;
