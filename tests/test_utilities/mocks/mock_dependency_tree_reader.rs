use swift_dependency_submission::prelude::*;

/// Mock DependencyTreeReader decoding an in-memory JSON document
pub struct MockDependencyTreeReader {
    content: String,
    should_fail: bool,
}

impl MockDependencyTreeReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl DependencyTreeReader for MockDependencyTreeReader {
    fn read_dependency_tree(&self, source: &InputSource) -> Result<DependencyNode> {
        if self.should_fail {
            anyhow::bail!("Mock read failure for {}", source);
        }

        DependencyNode::from_json(&self.content).map_err(|e| {
            SubmissionError::InputDecodeFailure {
                source_name: source.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
