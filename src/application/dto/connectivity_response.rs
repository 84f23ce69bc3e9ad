use crate::impact_analysis::domain::ConnectivityReport;
use serde::Serialize;

/// ConnectivityResponse - vulnerable and transitively impacted components
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityResponse {
    #[serde(flatten)]
    pub report: ConnectivityReport,
    /// Graph edges whose endpoints are absent from the report
    pub unresolved_edges: usize,
}
