use crate::impact_analysis::domain::{
    AnalysisMetadata, AnalysisSummary, DependencyEdge, DependencyRecord, ProjectInfo,
};
use serde::Serialize;

/// AnalysisResponse - output of the analysis use case
///
/// `dependencies` is the ingested record list, not impact-enriched.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub metadata: AnalysisMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_info: Option<ProjectInfo>,
    pub summary: AnalysisSummary,
    pub dependencies: Vec<DependencyRecord>,
    pub graph: Vec<DependencyEdge>,
}
