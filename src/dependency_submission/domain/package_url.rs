use crate::shared::error::SubmissionError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use url::Url;

/// Scheme component of every package URL
pub const SCHEME: &str = "pkg";

/// Ecosystem component of every package URL
pub const PACKAGE_TYPE: &str = "swift";

/// Host used when the source location has none (file URLs, absolute paths)
const FALLBACK_HOST: &str = "localhost";

const GIT_EXTENSION: &str = ".git";

/// Canonical identifier of a Swift package: `pkg:swift/<source>/<name>@<version>`.
///
/// Two nodes with the same source, name and version map to the same value
/// regardless of their identity or position in the tree. This is the
/// deduplication key of the flattened graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageUrl {
    source: String,
    name: String,
    version: String,
}

impl PackageUrl {
    pub fn new(
        source: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            name: name.into(),
            version: version.into(),
        }
    }

    /// Derives the package URL of a dependency from where it was fetched and its version.
    ///
    /// * `source` is the host followed by the parent path of the last segment
    /// * `name` is the last path segment without a trailing `.git`
    /// * `version` is passed through verbatim
    ///
    /// Besides absolute URLs, scp-style git remotes (`git@host:org/repo.git`)
    /// and absolute filesystem paths are accepted.
    ///
    /// # Errors
    /// Returns [`SubmissionError::InvalidSourceLocation`] if the location does not
    /// parse as a URL or has no path segment to name the package after.
    pub fn canonicalize(source_location: &str, version: &str) -> Result<Self, SubmissionError> {
        let invalid = |details: String| SubmissionError::InvalidSourceLocation {
            location: source_location.to_string(),
            details,
        };

        let url = Url::parse(&normalize_location(source_location))
            .map_err(|e| invalid(e.to_string()))?;

        let host = url
            .host_str()
            .filter(|host| !host.is_empty())
            .unwrap_or(FALLBACK_HOST);

        let path = urlencoding::decode(url.path())
            .map_err(|e| invalid(format!("path is not valid UTF-8: {}", e)))?;
        let path = path.trim_end_matches('/');

        let (parent, last_segment) = path.rsplit_once('/').unwrap_or(("", path));
        if last_segment.is_empty() {
            return Err(invalid(
                "URL has no path segment to use as the package name".to_string(),
            ));
        }

        let name = last_segment
            .strip_suffix(GIT_EXTENSION)
            .filter(|stem| !stem.is_empty())
            .unwrap_or(last_segment);

        Ok(Self::new(
            escape_version_separator(&format!("{}{}", host, parent.trim_end_matches('/'))),
            escape_version_separator(name),
            version,
        ))
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }
}

/// Percent-encodes `@` so the first `@` of the string form always starts the version.
fn escape_version_separator(component: &str) -> String {
    component.replace('@', "%40")
}

/// Rewrites the location forms SwiftPM accepts but `Url` does not.
fn normalize_location(location: &str) -> String {
    if location.starts_with('/') {
        return format!("file://{}", location);
    }

    // scp-like syntax: user@host:path
    if !location.contains("://") {
        if let Some((authority, path)) = location.split_once(':') {
            if authority.contains('@') && !authority.contains('/') && !path.is_empty() {
                return format!("ssh://{}/{}", authority, path.trim_start_matches('/'));
            }
        }
    }

    location.to_string()
}

impl fmt::Display for PackageUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}/{}/{}@{}",
            SCHEME, PACKAGE_TYPE, self.source, self.name, self.version
        )
    }
}

impl FromStr for PackageUrl {
    type Err = SubmissionError;

    /// Parses the exact form `pkg:swift/<source>/<name>@<version>`.
    ///
    /// The version starts after the first `@`; the name is the last
    /// `/`-separated segment before it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SubmissionError::MalformedCanonicalId {
            value: s.to_string(),
        };

        let rest = s
            .strip_prefix(SCHEME)
            .and_then(|rest| rest.strip_prefix(':'))
            .and_then(|rest| rest.strip_prefix(PACKAGE_TYPE))
            .and_then(|rest| rest.strip_prefix('/'))
            .ok_or_else(malformed)?;

        let (path, version) = rest.split_once('@').ok_or_else(malformed)?;
        let (source, name) = path.rsplit_once('/').ok_or_else(malformed)?;

        if source.is_empty() || name.is_empty() || version.is_empty() {
            return Err(malformed());
        }

        Ok(Self::new(source, name, version))
    }
}

impl Serialize for PackageUrl {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PackageUrl {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
