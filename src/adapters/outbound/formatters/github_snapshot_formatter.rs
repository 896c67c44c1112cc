use crate::dependency_submission::domain::{
    DependencySnapshot, Manifest, ResolvedGraph, SnapshotMetadata,
};
use crate::ports::outbound::SnapshotFormatter;
use crate::shared::Result;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize)]
struct Snapshot<'a> {
    version: u32,
    sha: &'a str,
    #[serde(rename = "ref")]
    git_ref: &'a str,
    job: Job<'a>,
    detector: Detector<'a>,
    scanned: &'a str,
    manifests: BTreeMap<&'a str, SnapshotManifest<'a>>,
}

#[derive(Debug, Serialize)]
struct Job<'a> {
    correlator: &'a str,
    id: &'a str,
}

#[derive(Debug, Serialize)]
struct Detector<'a> {
    name: &'a str,
    version: &'a str,
    url: &'a str,
}

#[derive(Debug, Serialize)]
struct SnapshotManifest<'a> {
    name: &'a str,
    file: ManifestFile<'a>,
    resolved: BTreeMap<&'a str, ResolvedDependency<'a>>,
}

#[derive(Debug, Serialize)]
struct ManifestFile<'a> {
    source_location: &'a str,
}

#[derive(Debug, Serialize)]
struct ResolvedDependency<'a> {
    package_url: String,
    relationship: &'static str,
    scope: &'static str,
    dependencies: Vec<&'a str>,
}

/// GithubSnapshotFormatter adapter for the GitHub dependency submission format
///
/// Object keys are emitted in sorted order at every level so identical input
/// yields byte-identical output. Forward slashes are never escaped.
pub struct GithubSnapshotFormatter {
    pretty: bool,
}

impl GithubSnapshotFormatter {
    /// Compact, single-line output
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    fn build_snapshot<'a>(&self, snapshot: &'a DependencySnapshot) -> Snapshot<'a> {
        let metadata: &SnapshotMetadata = snapshot.metadata();
        let detector = metadata.detector();
        let manifest = snapshot.manifest();

        Snapshot {
            version: DependencySnapshot::VERSION,
            sha: metadata.sha(),
            git_ref: metadata.git_ref(),
            job: Job {
                correlator: metadata.job_correlator(),
                id: metadata.job_id(),
            },
            detector: Detector {
                name: &detector.name,
                version: &detector.version,
                url: &detector.url,
            },
            scanned: metadata.scanned(),
            manifests: BTreeMap::from([(manifest.name(), self.build_manifest(manifest))]),
        }
    }

    fn build_manifest<'a>(&self, manifest: &'a Manifest) -> SnapshotManifest<'a> {
        SnapshotManifest {
            name: manifest.name(),
            file: ManifestFile {
                source_location: manifest.source_location(),
            },
            resolved: self.build_resolved(manifest.resolved()),
        }
    }

    fn build_resolved<'a>(&self, graph: &'a ResolvedGraph) -> BTreeMap<&'a str, ResolvedDependency<'a>> {
        graph
            .iter()
            .map(|(key, package)| {
                (
                    key,
                    ResolvedDependency {
                        package_url: package.package_url().to_string(),
                        relationship: package.relationship().as_str(),
                        scope: package.scope(),
                        dependencies: package.dependencies().collect(),
                    },
                )
            })
            .collect()
    }
}

impl Default for GithubSnapshotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotFormatter for GithubSnapshotFormatter {
    fn format(&self, snapshot: &DependencySnapshot) -> Result<String> {
        // Going through Value sorts struct fields too: its map is a BTreeMap.
        let value = serde_json::to_value(self.build_snapshot(snapshot))?;

        let output = if self.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(output)
    }
}
