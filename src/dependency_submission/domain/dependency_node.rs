use serde::Deserialize;

/// One node of the tree printed by `swift package show-dependencies --format json`.
///
/// The same logical package can appear under several parents; each occurrence
/// is a separate, fully expanded subtree. The decoder only ever produces a
/// finite tree, so a package is never its own descendant by reference.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencyNode {
    /// Stable per logical package. Used for membership checks only.
    pub identity: String,
    pub name: String,
    /// Where the package was fetched from
    pub url: String,
    pub version: String,
    /// Local checkout path
    pub path: String,
    pub dependencies: Vec<DependencyNode>,
}

impl DependencyNode {
    /// Decodes a root node from its JSON text.
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    /// Decodes a root node from raw bytes. Text that is not UTF-8 is a decode error.
    pub fn from_slice(content: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(content)
    }

    /// Creates a node with the given children; `path` is left empty.
    pub fn new(
        identity: impl Into<String>,
        url: impl Into<String>,
        version: impl Into<String>,
        dependencies: Vec<DependencyNode>,
    ) -> Self {
        let identity = identity.into();
        Self {
            name: identity.clone(),
            identity,
            url: url.into(),
            version: version.into(),
            path: String::new(),
            dependencies,
        }
    }

    /// Number of nodes in this subtree, counting repeated expansions.
    pub fn subtree_size(&self) -> usize {
        1 + self
            .dependencies
            .iter()
            .map(DependencyNode::subtree_size)
            .sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_json_nested() {
        let json = r#"{
            "identity": "app",
            "name": "App",
            "url": "/work/app",
            "version": "unspecified",
            "path": "/work/app",
            "dependencies": [
                {
                    "identity": "swift-nio",
                    "name": "swift-nio",
                    "url": "https://github.com/apple/swift-nio.git",
                    "version": "2.62.0",
                    "path": "/work/app/.build/checkouts/swift-nio",
                    "dependencies": []
                }
            ]
        }"#;

        let root = DependencyNode::from_json(json).unwrap();
        assert_eq!(root.identity, "app");
        assert_eq!(root.dependencies.len(), 1);
        assert_eq!(root.dependencies[0].version, "2.62.0");
        assert_eq!(root.subtree_size(), 2);
    }

    #[test]
    fn test_from_json_missing_field() {
        let json = r#"{"identity": "app", "name": "App", "url": "/work/app", "version": "1", "dependencies": []}"#;
        let err = DependencyNode::from_json(json).unwrap_err();
        assert!(err.to_string().contains("missing field `path`"));
    }

    #[test]
    fn test_from_json_not_an_object() {
        assert!(DependencyNode::from_json("[]").is_err());
        assert!(DependencyNode::from_json("").is_err());
    }

    #[test]
    fn test_new_uses_identity_as_name() {
        let node = DependencyNode::new("a", "https://example.com/org/a.git", "1.0.0", vec![]);
        assert_eq!(node.name, "a");
        assert!(node.path.is_empty());
        assert_eq!(node.subtree_size(), 1);
    }
}
