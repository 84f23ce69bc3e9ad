use serde::Serialize;

/// AnalysisMetadata value object describing one analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisMetadata {
    analysis_id: String,
    generated_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    report_date: Option<String>,
    tool_name: String,
    tool_version: String,
}

impl AnalysisMetadata {
    pub fn new(
        analysis_id: String,
        generated_at: String,
        report_date: Option<String>,
        tool_name: String,
        tool_version: String,
    ) -> Self {
        Self {
            analysis_id,
            generated_at,
            report_date,
            tool_name,
            tool_version,
        }
    }

    pub fn analysis_id(&self) -> &str {
        &self.analysis_id
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn report_date(&self) -> Option<&str> {
        self.report_date.as_deref()
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_metadata_new() {
        let metadata = AnalysisMetadata::new(
            "urn:uuid:12345".to_string(),
            "2024-01-01T00:00:00Z".to_string(),
            Some("2023-12-31T23:00:00Z".to_string()),
            "dep-impact".to_string(),
            "0.1.0".to_string(),
        );

        assert_eq!(metadata.analysis_id(), "urn:uuid:12345");
        assert_eq!(metadata.generated_at(), "2024-01-01T00:00:00Z");
        assert_eq!(metadata.report_date(), Some("2023-12-31T23:00:00Z"));
        assert_eq!(metadata.tool_name(), "dep-impact");
        assert_eq!(metadata.tool_version(), "0.1.0");
    }

    #[test]
    fn test_missing_report_date_is_not_serialized() {
        let metadata = AnalysisMetadata::new(
            "urn:uuid:1".to_string(),
            "2024-01-01T00:00:00Z".to_string(),
            None,
            "dep-impact".to_string(),
            "0.1.0".to_string(),
        );
        let json = serde_json::to_value(&metadata).unwrap();
        assert!(json.get("reportDate").is_none());
        assert_eq!(json["analysisId"], "urn:uuid:1");
    }
}
