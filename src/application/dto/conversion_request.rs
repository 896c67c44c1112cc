use crate::config::SubmissionConfig;
use crate::ports::outbound::InputSource;
use chrono::{DateTime, Utc};

/// ConversionRequest - request DTO for the dependency graph conversion use case
///
/// Carries everything the run needs; the use case never reads the
/// environment or the clock on its own when `scanned_at` is set.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    /// Where the dependency tree JSON comes from
    pub input: InputSource,
    /// Resolved run configuration
    pub config: SubmissionConfig,
    /// Fixed scan time; the current time is used when absent
    pub scanned_at: Option<DateTime<Utc>>,
}

impl ConversionRequest {
    pub fn new(input: InputSource, config: SubmissionConfig) -> Self {
        Self {
            input,
            config,
            scanned_at: None,
        }
    }

    /// Pins the scan timestamp, for reproducible output
    pub fn with_scanned_at(mut self, scanned_at: DateTime<Utc>) -> Self {
        self.scanned_at = Some(scanned_at);
        self
    }
}
