use crate::dependency_submission::domain::{
    DependencyNode, PackageUrl, Relationship, ResolvedGraph, ResolvedPackage,
};
use crate::shared::Result;
use anyhow::Context;
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// GraphFlattener turns a resolved dependency tree into a deduplicated graph.
///
/// Packages are keyed by their [`PackageUrl`] string, so a package that shows up
/// under several parents (a diamond) is recorded once, by whichever branch the
/// depth-first walk reaches first. Each record lists its direct children as
/// package URL strings.
///
/// A package is `direct` when its identity is one of the top-level identities
/// given to [`GraphFlattener::new`]; the check is by identity, not by package URL.
///
/// The input must be a finite tree. Repeated subtrees are fine; a package being
/// its own descendant by reference cannot be expressed by [`DependencyNode`].
pub struct GraphFlattener<'a> {
    direct_identities: HashSet<&'a str>,
    resolved: BTreeMap<String, ResolvedPackage>,
}

impl<'a> GraphFlattener<'a> {
    /// Creates a flattener classifying `top_level` as the direct dependencies
    pub fn new(top_level: &'a [DependencyNode]) -> Self {
        Self {
            direct_identities: top_level.iter().map(|node| node.identity.as_str()).collect(),
            resolved: BTreeMap::new(),
        }
    }

    /// Flattens the root's dependency list in one go
    ///
    /// # Errors
    /// Fails with [`InvalidSourceLocation`](crate::shared::error::SubmissionError::InvalidSourceLocation)
    /// on the first node whose URL cannot be canonicalized. No partial graph is returned.
    pub fn flatten(top_level: &'a [DependencyNode]) -> Result<ResolvedGraph> {
        let mut flattener = Self::new(top_level);
        flattener.visit_all(top_level)?;
        Ok(flattener.finish())
    }

    /// Records `node` and everything below it that is not recorded yet
    pub fn visit(&mut self, node: &DependencyNode) -> Result<()> {
        // Computed before descending so an equivalent node reached through
        // another branch is skipped without walking its subtree again.
        let package_url = canonical_url(node)?;
        let key = package_url.to_string();
        if self.resolved.contains_key(&key) {
            return Ok(());
        }

        self.visit_all(&node.dependencies)?;

        // A child subtree may contain an equivalent node; the first record wins.
        if self.resolved.contains_key(&key) {
            return Ok(());
        }

        let dependencies = node
            .dependencies
            .iter()
            .map(|child| canonical_url(child).map(|purl| purl.to_string()))
            .collect::<Result<BTreeSet<_>>>()?;

        let relationship = if self.direct_identities.contains(node.identity.as_str()) {
            Relationship::Direct
        } else {
            Relationship::Indirect
        };

        self.resolved.insert(
            key,
            ResolvedPackage::new(package_url, relationship, dependencies),
        );
        Ok(())
    }

    fn visit_all(&mut self, nodes: &[DependencyNode]) -> Result<()> {
        for node in nodes {
            self.visit(node)?;
        }
        Ok(())
    }

    /// Number of packages recorded so far
    pub fn recorded(&self) -> usize {
        self.resolved.len()
    }

    pub fn finish(self) -> ResolvedGraph {
        ResolvedGraph::from_packages(self.resolved)
    }
}

fn canonical_url(node: &DependencyNode) -> Result<PackageUrl> {
    PackageUrl::canonicalize(&node.url, &node.version)
        .with_context(|| format!("Cannot resolve package '{}'", node.identity))
}
