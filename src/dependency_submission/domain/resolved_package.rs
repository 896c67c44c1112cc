use super::PackageUrl;
use std::collections::BTreeSet;
use std::fmt;

/// Scope reported for every package; SwiftPM does not distinguish dev-only dependencies
pub const RUNTIME_SCOPE: &str = "runtime";

/// Whether a package is listed directly by the root package or only reachable transitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relationship {
    Direct,
    Indirect,
}

impl Relationship {
    pub fn as_str(&self) -> &'static str {
        match self {
            Relationship::Direct => "direct",
            Relationship::Indirect => "indirect",
        }
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of the flattened graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPackage {
    package_url: PackageUrl,
    relationship: Relationship,
    dependencies: BTreeSet<String>,
}

impl ResolvedPackage {
    pub fn new(
        package_url: PackageUrl,
        relationship: Relationship,
        dependencies: BTreeSet<String>,
    ) -> Self {
        Self {
            package_url,
            relationship,
            dependencies,
        }
    }

    pub fn package_url(&self) -> &PackageUrl {
        &self.package_url
    }

    pub fn relationship(&self) -> Relationship {
        self.relationship
    }

    pub fn scope(&self) -> &'static str {
        RUNTIME_SCOPE
    }

    /// Dependency references in lexicographic order
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.dependencies.iter().map(String::as_str)
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}
