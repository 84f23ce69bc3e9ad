use crate::impact_analysis::domain::AnalysisMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator service stamping an analysis run
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with current timestamp and a unique analysis id
    ///
    /// # Arguments
    /// * `report_date` - The scanner's `projectInfo.reportDate`, echoed verbatim
    /// * `tool_name` - Name of the tool producing the analysis
    /// * `tool_version` - Version of the tool
    pub fn generate_metadata(
        report_date: Option<&str>,
        tool_name: &str,
        tool_version: &str,
    ) -> AnalysisMetadata {
        AnalysisMetadata::new(
            format!("urn:uuid:{}", Uuid::new_v4()),
            Utc::now().to_rfc3339(),
            report_date.map(str::to_string),
            tool_name.to_string(),
            tool_version.to_string(),
        )
    }

    /// Same as [`generate_metadata`](Self::generate_metadata) with this crate's name and version
    pub fn generate_default_metadata(report_date: Option<&str>) -> AnalysisMetadata {
        Self::generate_metadata(report_date, "dep-impact", env!("CARGO_PKG_VERSION"))
    }
}
