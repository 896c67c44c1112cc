use chrono::{DateTime, Utc};
use clap::Parser;

/// Convert `swift package show-dependencies --format json` output into a
/// GitHub dependency submission snapshot.
///
/// Snapshot metadata is read from the environment: BRANCH, COMMIT, CORRELATOR,
/// RUN_ID, GITHUB_ACTION, GITHUB_ACTION_REF, GITHUB_ACTION_REPOSITORY and
/// GITHUB_SERVER_URL.
#[derive(Parser, Debug)]
#[command(name = "swift-dependency-submission")]
#[command(version)]
#[command(about = "Convert a resolved SwiftPM dependency tree into a GitHub dependency snapshot")]
pub struct Args {
    /// Dependency tree JSON file (defaults to stdin)
    #[arg(short, long)]
    pub input: Option<String>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output: Option<String>,

    /// YAML file supplying settings missing from the environment
    #[arg(short, long)]
    pub config: Option<String>,

    /// Fixed scan timestamp (RFC 3339), for reproducible output
    #[arg(long, value_name = "TIMESTAMP", value_parser = parse_timestamp)]
    pub scanned_at: Option<DateTime<Utc>>,

    /// Pretty-print the snapshot
    #[arg(long)]
    pub pretty: bool,

    /// Suppress progress output on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|e| format!("Invalid timestamp '{}': {}. Expected RFC 3339, e.g. 2024-01-01T00:00:00Z", value, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["swift-dependency-submission"]).unwrap();
        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert!(args.config.is_none());
        assert!(args.scanned_at.is_none());
        assert!(!args.pretty);
        assert!(!args.quiet);
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "swift-dependency-submission",
            "-i",
            "deps.json",
            "-o",
            "snapshot.json",
            "-c",
            "submission.yml",
            "--scanned-at",
            "2024-01-01T09:00:00+09:00",
            "--pretty",
            "-q",
        ])
        .unwrap();

        assert_eq!(args.input.as_deref(), Some("deps.json"));
        assert_eq!(args.output.as_deref(), Some("snapshot.json"));
        assert_eq!(args.config.as_deref(), Some("submission.yml"));
        assert_eq!(
            args.scanned_at,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
        );
        assert!(args.pretty);
        assert!(args.quiet);
    }

    #[test]
    fn test_invalid_timestamp() {
        let result = Args::try_parse_from([
            "swift-dependency-submission",
            "--scanned-at",
            "yesterday",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_timestamp_error_message() {
        let error = parse_timestamp("yesterday").unwrap_err();
        assert!(error.contains("Invalid timestamp 'yesterday'"));
        assert!(error.contains("RFC 3339"));
    }
}
