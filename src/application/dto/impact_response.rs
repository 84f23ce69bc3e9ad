use crate::impact_analysis::domain::{ImpactEntry, Simulation};
use serde::Serialize;

/// ImpactResponse - upgrade simulations plus the one-hop impact list
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactResponse {
    pub vulnerable_dependency: String,
    pub simulations: Vec<Simulation>,
    pub impact: Vec<ImpactEntry>,
}
