use crate::application::dto::{AnalysisResponse, ConnectivityResponse, ImpactResponse};
use crate::shared::Result;

/// AnalysisFormatter port for rendering use case responses
///
/// This port abstracts the output format (JSON, Markdown, etc.).
pub trait AnalysisFormatter {
    /// Renders the severity summary, ingested dependencies and edge list
    fn format_analysis(&self, response: &AnalysisResponse) -> Result<String>;

    /// Renders upgrade simulations and the one-hop impact list
    fn format_impact(&self, response: &ImpactResponse) -> Result<String>;

    /// Renders the transitive connectivity trace
    fn format_connectivity(&self, response: &ConnectivityResponse) -> Result<String>;
}
