use dep_impact::prelude::*;
use std::path::Path;

/// Mock GraphReader for testing
pub struct MockGraphReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockGraphReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    /// A reader for runs that never pass a graph path
    pub fn empty() -> Self {
        Self::new("")
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl GraphReader for MockGraphReader {
    fn read_graph(&self, _graph_path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock dependency tree failure");
        }
        Ok(self.content.clone())
    }
}
