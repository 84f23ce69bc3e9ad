use std::path::PathBuf;

/// ConnectivityRequest - request DTO for the transitive connectivity trace
#[derive(Debug, Clone)]
pub struct ConnectivityRequest {
    pub report_path: PathBuf,
    pub graph_path: PathBuf,
}

impl ConnectivityRequest {
    pub fn new(report_path: PathBuf, graph_path: PathBuf) -> Self {
        Self {
            report_path,
            graph_path,
        }
    }
}
