use crate::config::SubmissionConfig;
use crate::dependency_submission::domain::{Detector, SnapshotMetadata};
use chrono::{DateTime, SecondsFormat, Utc};

/// Detector version reported when the action ref is empty
const DEFAULT_DETECTOR_VERSION: &str = "v0";

/// Detector repository used when the action repository is empty
const DEFAULT_DETECTOR_REPOSITORY: &str = "vapor/ci";

/// SnapshotMetadataGenerator derives the document metadata from the run configuration
pub struct SnapshotMetadataGenerator;

impl SnapshotMetadataGenerator {
    /// Generates metadata stamped with the current time
    pub fn generate(config: &SubmissionConfig) -> SnapshotMetadata {
        Self::generate_at(config, Utc::now())
    }

    /// Generates metadata stamped with `scanned_at`, for reproducible output
    pub fn generate_at(config: &SubmissionConfig, scanned_at: DateTime<Utc>) -> SnapshotMetadata {
        SnapshotMetadata::new(
            config.commit.clone(),
            config.branch.clone(),
            config.correlator.clone(),
            config.run_id.clone(),
            Self::detector(config),
            scanned_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        )
    }

    /// The detector block.
    ///
    /// `GITHUB_ACTION` looks like `__owner_action`; the name is the first
    /// segment after the leading underscores.
    pub fn detector(config: &SubmissionConfig) -> Detector {
        let name = config
            .action
            .trim_start_matches('_')
            .split('_')
            .next()
            .unwrap_or_default()
            .to_string();

        let version = if config.action_ref.is_empty() {
            DEFAULT_DETECTOR_VERSION.to_string()
        } else {
            config.action_ref.clone()
        };

        let repository = if config.action_repository.is_empty() {
            DEFAULT_DETECTOR_REPOSITORY
        } else {
            config.action_repository.as_str()
        };

        Detector {
            name,
            version,
            url: format!("{}/{}", config.server_url, repository),
        }
    }
}
