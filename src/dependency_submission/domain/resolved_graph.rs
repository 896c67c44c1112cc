use super::{PackageUrl, Relationship, ResolvedPackage};
use std::collections::{BTreeMap, HashSet};

/// Flattened dependency graph keyed by the string form of each package URL.
///
/// Built only by [`GraphFlattener`](crate::dependency_submission::services::GraphFlattener);
/// keys are unique by construction and iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedGraph {
    packages: BTreeMap<String, ResolvedPackage>,
}

impl ResolvedGraph {
    pub(crate) fn from_packages(packages: BTreeMap<String, ResolvedPackage>) -> Self {
        Self { packages }
    }

    pub fn get(&self, package_url: &str) -> Option<&ResolvedPackage> {
        self.packages.get(package_url)
    }

    pub fn contains(&self, package_url: &str) -> bool {
        self.packages.contains_key(package_url)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ResolvedPackage)> {
        self.packages.iter().map(|(key, package)| (key.as_str(), package))
    }

    pub fn len(&self) -> usize {
        self.packages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn direct_count(&self) -> usize {
        self.count_with(Relationship::Direct)
    }

    pub fn indirect_count(&self) -> usize {
        self.count_with(Relationship::Indirect)
    }

    fn count_with(&self, relationship: Relationship) -> usize {
        self.packages
            .values()
            .filter(|package| package.relationship() == relationship)
            .count()
    }

    /// Dependency references that do not name a recorded package.
    ///
    /// References are compared as parsed [`PackageUrl`] values. A reference
    /// that fails to parse is reported as dangling too.
    pub fn dangling_references(&self) -> Vec<String> {
        let recorded: HashSet<&PackageUrl> = self
            .packages
            .values()
            .map(ResolvedPackage::package_url)
            .collect();

        let mut dangling: Vec<String> = self
            .packages
            .values()
            .flat_map(ResolvedPackage::dependencies)
            .filter(|reference| {
                reference
                    .parse::<PackageUrl>()
                    .map_or(true, |purl| !recorded.contains(&purl))
            })
            .map(String::from)
            .collect();

        dangling.sort();
        dangling.dedup();
        dangling
    }
}
