/// The tool reported as having produced the snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detector {
    pub name: String,
    pub version: String,
    pub url: String,
}

/// SnapshotMetadata value object: everything in the document besides the manifests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotMetadata {
    sha: String,
    git_ref: String,
    job_correlator: String,
    job_id: String,
    detector: Detector,
    scanned: String,
}

impl SnapshotMetadata {
    pub fn new(
        sha: String,
        git_ref: String,
        job_correlator: String,
        job_id: String,
        detector: Detector,
        scanned: String,
    ) -> Self {
        Self {
            sha,
            git_ref,
            job_correlator,
            job_id,
            detector,
            scanned,
        }
    }

    pub fn sha(&self) -> &str {
        &self.sha
    }

    pub fn git_ref(&self) -> &str {
        &self.git_ref
    }

    pub fn job_correlator(&self) -> &str {
        &self.job_correlator
    }

    pub fn job_id(&self) -> &str {
        &self.job_id
    }

    pub fn detector(&self) -> &Detector {
        &self.detector
    }

    /// Scan time, RFC 3339 in UTC
    pub fn scanned(&self) -> &str {
        &self.scanned
    }
}
