use crate::application::dto::{ConversionRequest, ConversionResponse};
use crate::dependency_submission::domain::{
    DependencyNode, DependencySnapshot, Manifest, ResolvedGraph,
};
use crate::dependency_submission::services::{GraphFlattener, SnapshotMetadataGenerator};
use crate::ports::outbound::{DependencyTreeReader, ProgressReporter};
use crate::shared::Result;

/// ConvertDependencyGraphUseCase - Core use case of the tool
///
/// Reads the resolved dependency tree, flattens it into a deduplicated
/// graph and assembles the snapshot document. Any failure aborts the run;
/// no partial snapshot is ever returned.
///
/// # Type Parameters
/// * `R` - DependencyTreeReader implementation
/// * `PR` - ProgressReporter implementation
pub struct ConvertDependencyGraphUseCase<R, PR> {
    tree_reader: R,
    progress_reporter: PR,
}

impl<R, PR> ConvertDependencyGraphUseCase<R, PR>
where
    R: DependencyTreeReader,
    PR: ProgressReporter,
{
    /// Creates a new ConvertDependencyGraphUseCase with injected dependencies
    pub fn new(tree_reader: R, progress_reporter: PR) -> Self {
        Self {
            tree_reader,
            progress_reporter,
        }
    }

    /// Executes the conversion
    ///
    /// # Errors
    /// Returns the first error from reading, decoding or canonicalizing
    pub fn execute(&self, request: ConversionRequest) -> Result<ConversionResponse> {
        // Step 1: Read and decode the dependency tree
        self.progress_reporter.report(&format!(
            "📖 Loading dependency tree from: {}",
            request.input
        ));
        let root = self.tree_reader.read_dependency_tree(&request.input)?;
        self.progress_reporter.report(&format!(
            "✅ Loaded {} node(s) under {} top-level dependencies",
            root.subtree_size() - 1,
            root.dependencies.len()
        ));

        // Step 2: Flatten
        let graph = self.flatten(&root)?;

        // Step 3: Check references
        let dangling_references = graph.dangling_references();
        for reference in &dangling_references {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} is referenced but has no package record",
                reference
            ));
        }

        // Step 4: Assemble the document
        let metadata = match request.scanned_at {
            Some(scanned_at) => SnapshotMetadataGenerator::generate_at(&request.config, scanned_at),
            None => SnapshotMetadataGenerator::generate(&request.config),
        };
        let snapshot = DependencySnapshot::new(metadata, Manifest::package_resolved(graph));

        Ok(ConversionResponse::new(snapshot, dangling_references))
    }

    /// Flattens the root's dependencies, reporting progress per top-level entry
    fn flatten(&self, root: &DependencyNode) -> Result<ResolvedGraph> {
        self.progress_reporter
            .report("📊 Flattening dependency graph...");

        let top_level = &root.dependencies;
        let total = top_level.len();
        let mut flattener = GraphFlattener::new(top_level);

        for (idx, dependency) in top_level.iter().enumerate() {
            if let Err(e) = flattener.visit(dependency) {
                self.progress_reporter
                    .report_error("❌ Flattening aborted");
                return Err(e);
            }
            self.progress_reporter
                .report_progress(idx + 1, total, Some(&dependency.name));
        }

        let graph = flattener.finish();
        self.progress_reporter.report_completion(&format!(
            "✅ Resolved {} package(s): {} direct, {} indirect",
            graph.len(),
            graph.direct_count(),
            graph.indirect_count()
        ));
        Ok(graph)
    }
}
