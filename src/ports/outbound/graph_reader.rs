use crate::shared::Result;
use std::path::Path;

/// GraphReader port for loading the build tool's dependency tree text
pub trait GraphReader {
    /// Reads the raw dependency tree output
    ///
    /// # Errors
    /// Returns an error if the graph file is missing or unreadable
    fn read_graph(&self, graph_path: &Path) -> Result<String>;
}
