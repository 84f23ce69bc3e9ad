use super::DependencyEdge;
use serde::Serialize;

/// A hypothetical upgrade scenario, for exploration only
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Simulation {
    pub id: String,
    pub description: String,
    /// Raw count of the source record's vulnerabilities
    pub severity_score: usize,
    pub recommended_version: String,
    pub graph: Vec<DependencyEdge>,
}
