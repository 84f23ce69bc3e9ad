use crate::application::dto::{AnalysisResponse, ConnectivityResponse, ImpactResponse};
use crate::ports::outbound::AnalysisFormatter;
use crate::shared::Result;
use serde::Serialize;

/// JsonFormatter adapter rendering responses as pretty-printed camelCase JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn to_pretty_json<T: Serialize>(value: &T, what: &str) -> Result<String> {
        serde_json::to_string_pretty(value)
            .map_err(|e| anyhow::anyhow!("Failed to serialize {} to JSON: {}", what, e))
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisFormatter for JsonFormatter {
    fn format_analysis(&self, response: &AnalysisResponse) -> Result<String> {
        Self::to_pretty_json(response, "analysis")
    }

    fn format_impact(&self, response: &ImpactResponse) -> Result<String> {
        Self::to_pretty_json(response, "impact simulation")
    }

    fn format_connectivity(&self, response: &ConnectivityResponse) -> Result<String> {
        Self::to_pretty_json(response, "connectivity trace")
    }
}
