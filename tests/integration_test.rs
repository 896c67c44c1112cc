/// Integration tests for the application layer
mod test_utilities;

use chrono::{TimeZone, Utc};
use swift_dependency_submission::config::SubmissionConfig;
use swift_dependency_submission::prelude::*;
use test_utilities::mocks::*;

fn config() -> SubmissionConfig {
    SubmissionConfig {
        branch: "refs/heads/main".to_string(),
        commit: "0123abcd".to_string(),
        correlator: "ci-dependencies".to_string(),
        run_id: "1001".to_string(),
        action: "__vapor_swift-dependency-submission".to_string(),
        action_ref: "v1".to_string(),
        action_repository: "vapor/swift-dependency-submission".to_string(),
        server_url: "https://github.com".to_string(),
    }
}

fn request() -> ConversionRequest {
    ConversionRequest::new(InputSource::Stdin, config())
        .with_scanned_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

fn convert(content: String) -> Result<ConversionResponse> {
    let use_case = ConvertDependencyGraphUseCase::new(
        MockDependencyTreeReader::new(content),
        MockProgressReporter::new(),
    );
    use_case.execute(request())
}

#[test]
fn test_convert_single_dependency() {
    let response = convert(fixture("single.json")).unwrap();

    let resolved = response.snapshot.manifest().resolved();
    assert_eq!(resolved.len(), 1);

    let package = resolved.get("pkg:swift/example.com/org/repo-a@1.0.0").unwrap();
    assert_eq!(package.relationship(), Relationship::Direct);
    assert_eq!(package.scope(), "runtime");
    assert_eq!(package.dependency_count(), 0);
    assert!(response.dangling_references.is_empty());
}

#[test]
fn test_convert_diamond_records_shared_dependency_once() {
    let response = convert(fixture("diamond.json")).unwrap();
    let resolved = response.snapshot.manifest().resolved();

    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved.direct_count(), 2);
    assert_eq!(resolved.indirect_count(), 1);

    let shared = "pkg:swift/example.com/org/d@3.1.4";
    let d = resolved.get(shared).unwrap();
    assert_eq!(d.relationship(), Relationship::Indirect);

    for parent in [
        "pkg:swift/example.com/org/b@1.0.0",
        "pkg:swift/example.com/org/c@2.0.0",
    ] {
        let deps: Vec<&str> = resolved.get(parent).unwrap().dependencies().collect();
        assert_eq!(deps, vec![shared]);
    }
}

#[test]
fn test_convert_classifies_by_top_level_identity() {
    let response = convert(fixture("vapor.json")).unwrap();
    let resolved = response.snapshot.manifest().resolved();

    // swift-log appears both directly and under vapor; it stays direct
    let log = resolved
        .get("pkg:swift/github.com/apple/swift-log@1.5.3")
        .unwrap();
    assert_eq!(log.relationship(), Relationship::Direct);

    let nio = resolved
        .get("pkg:swift/github.com/apple/swift-nio@2.62.0")
        .unwrap();
    assert_eq!(nio.relationship(), Relationship::Indirect);

    let local = resolved
        .get("pkg:swift/localhost/Users/dev/LocalKit@unspecified")
        .unwrap();
    assert_eq!(local.relationship(), Relationship::Direct);

    assert_eq!(resolved.len(), 7);
    assert_eq!(resolved.direct_count(), 3);
    assert!(response.dangling_references.is_empty());
}

#[test]
fn test_convert_dependency_lists_are_sorted() {
    let response = convert(fixture("vapor.json")).unwrap();
    let vapor = response
        .snapshot
        .manifest()
        .resolved()
        .get("pkg:swift/github.com/vapor/vapor@4.89.3")
        .unwrap();

    let deps: Vec<&str> = vapor.dependencies().collect();
    assert_eq!(
        deps,
        vec![
            "pkg:swift/github.com/apple/swift-log@1.5.3",
            "pkg:swift/github.com/apple/swift-nio@2.62.0",
            "pkg:swift/github.com/swift-server/async-http-client@1.19.0",
        ]
    );
}

#[test]
fn test_convert_metadata_from_config() {
    let response = convert(fixture("single.json")).unwrap();
    let metadata = response.snapshot.metadata();

    assert_eq!(metadata.sha(), "0123abcd");
    assert_eq!(metadata.git_ref(), "refs/heads/main");
    assert_eq!(metadata.job_correlator(), "ci-dependencies");
    assert_eq!(metadata.job_id(), "1001");
    assert_eq!(metadata.scanned(), "2024-01-01T00:00:00Z");
    assert_eq!(metadata.detector().name, "vapor");
    assert_eq!(metadata.detector().version, "v1");
    assert_eq!(
        metadata.detector().url,
        "https://github.com/vapor/swift-dependency-submission"
    );
}

#[test]
fn test_convert_root_without_dependencies() {
    let response = convert(
        r#"{"identity":"app","name":"App","url":"/work/app","version":"unspecified","path":"/work/app","dependencies":[]}"#
            .to_string(),
    )
    .unwrap();

    assert!(response.snapshot.manifest().resolved().is_empty());
    assert_eq!(response.package_count(), 0);
}

#[test]
fn test_convert_invalid_url_fails() {
    let result = convert(fixture("invalid_url.json"));

    assert!(result.is_err());
    let err = result.unwrap_err();
    let invalid = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<SubmissionError>());
    assert!(matches!(
        invalid,
        Some(SubmissionError::InvalidSourceLocation { location, .. }) if location == "not a url"
    ));
}

#[test]
fn test_convert_malformed_input_fails() {
    let result = convert(fixture("malformed.json"));

    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SubmissionError>(),
        Some(SubmissionError::InputDecodeFailure { .. })
    ));
}

#[test]
fn test_convert_reader_failure_propagates() {
    let use_case = ConvertDependencyGraphUseCase::new(
        MockDependencyTreeReader::with_failure(),
        MockProgressReporter::new(),
    );

    let result = use_case.execute(request());

    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("Mock read failure for <stdin>"));
}

#[test]
fn test_convert_reports_progress() {
    let reporter = MockProgressReporter::new();
    let use_case = ConvertDependencyGraphUseCase::new(
        MockDependencyTreeReader::new(fixture("diamond.json")),
        reporter.clone(),
    );

    use_case.execute(request()).unwrap();

    let messages = reporter.get_messages();
    assert!(messages.iter().any(|m| m.contains("Loading dependency tree")));
    assert!(messages.iter().any(|m| m.starts_with("Progress: 2/2")));
    assert!(messages
        .iter()
        .any(|m| m.starts_with("Completed:") && m.contains("3 package(s)")));
}

#[test]
fn test_formatted_output_is_deterministic() {
    let formatter = GithubSnapshotFormatter::new();

    let first = formatter
        .format(&convert(fixture("vapor.json")).unwrap().snapshot)
        .unwrap();
    let second = formatter
        .format(&convert(fixture("vapor.json")).unwrap().snapshot)
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_formatted_output_shape() {
    let snapshot = convert(fixture("single.json")).unwrap().snapshot;
    let output = GithubSnapshotFormatter::new().format(&snapshot).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["version"], 0);
    assert_eq!(value["sha"], "0123abcd");
    assert_eq!(value["ref"], "refs/heads/main");
    assert_eq!(value["scanned"], "2024-01-01T00:00:00Z");
    assert_eq!(value["job"]["correlator"], "ci-dependencies");
    assert_eq!(value["job"]["id"], "1001");
    assert_eq!(value["detector"]["name"], "vapor");

    let manifest = &value["manifests"]["Package.resolved"];
    assert_eq!(manifest["name"], "Package.resolved");
    assert_eq!(manifest["file"]["source_location"], "Package.resolved");

    let entry = &manifest["resolved"]["pkg:swift/example.com/org/repo-a@1.0.0"];
    assert_eq!(
        entry["package_url"],
        "pkg:swift/example.com/org/repo-a@1.0.0"
    );
    assert_eq!(entry["relationship"], "direct");
    assert_eq!(entry["scope"], "runtime");
    assert_eq!(entry["dependencies"], serde_json::json!([]));
}
