use std::path::PathBuf;

/// ImpactRequest - request DTO for the impact simulation use case
#[derive(Debug, Clone)]
pub struct ImpactRequest {
    /// Path to a previously produced scan report
    pub report_path: PathBuf,
    /// `fileName` of the vulnerable dependency to simulate
    pub vulnerable_dependency: String,
}

impl ImpactRequest {
    pub fn new(report_path: PathBuf, vulnerable_dependency: String) -> Self {
        Self {
            report_path,
            vulnerable_dependency,
        }
    }
}
