use super::DependencyEdge;
use serde::Serialize;

/// Position of an edge relative to the vulnerable set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStatus {
    /// The edge starts at a vulnerable component
    Vulnerable,
    /// The edge ends at a component reachable from a vulnerable one
    Impacted,
    Safe,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedEdge {
    #[serde(flatten)]
    pub edge: DependencyEdge,
    pub status: EdgeStatus,
}

/// Result of the transitive reverse walk over the build graph
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectivityReport {
    /// Vulnerable components in report order
    pub vulnerable: Vec<String>,
    /// Non-vulnerable components reachable via reverse edges, in discovery order
    pub impacted: Vec<String>,
    pub edges: Vec<ClassifiedEdge>,
}
