use super::DependencyType;
use serde::Serialize;

/// Severity of the impact on a dependent. Only `High` is ever assigned.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum ImpactLevel {
    #[default]
    High,
}

/// A clean component flagged because it directly depends on a vulnerable one
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactEntry {
    pub source: String,
    pub target: String,
    pub impact_level: ImpactLevel,
    pub transitive_depth: u32,
    pub dependency_type: DependencyType,
    pub used_in: Vec<String>,
    pub recommendation: String,
}
