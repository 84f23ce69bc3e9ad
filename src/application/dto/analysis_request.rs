use std::path::PathBuf;

/// AnalysisRequest - request DTO for the analysis use case
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    /// Path to the scanner's JSON report
    pub report_path: PathBuf,
    /// Path to the build tool's dependency tree text; no edges when absent
    pub graph_path: Option<PathBuf>,
}

impl AnalysisRequest {
    pub fn new(report_path: PathBuf, graph_path: Option<PathBuf>) -> Self {
        Self {
            report_path,
            graph_path,
        }
    }
}
