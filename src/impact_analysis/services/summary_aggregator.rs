use crate::impact_analysis::domain::{AnalysisSummary, DependencyIndex};

/// SummaryAggregator service producing severity counts for one report
pub struct SummaryAggregator;

impl SummaryAggregator {
    pub fn summarize(index: &DependencyIndex) -> AnalysisSummary {
        let mut summary = AnalysisSummary {
            total_dependencies: index.len(),
            vulnerable_count: index.vulnerable_records().count(),
            ..AnalysisSummary::default()
        };

        for vuln in index.records().flat_map(|record| &record.vulnerabilities) {
            // Exact match only: "CRITICAL", "high" and absent severities are not bucketed
            match vuln.severity.as_deref() {
                Some("HIGH") => summary.high_severity += 1,
                Some("MEDIUM") => summary.medium_severity += 1,
                Some("LOW") => summary.low_severity += 1,
                _ => {}
            }
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact_analysis::domain::{ReportDependency, Vulnerability};
    use crate::impact_analysis::services::ReportIngestor;

    fn raw(file_name: &str, severities: &[Option<&str>]) -> ReportDependency {
        ReportDependency {
            file_name: file_name.to_string(),
            dependencies: vec![],
            vulnerabilities: severities
                .iter()
                .map(|s| Vulnerability::new("CVE-2024-0001", *s, None))
                .collect(),
        }
    }

    #[test]
    fn test_critical_counts_in_no_bucket() {
        let index = ReportIngestor::ingest(&[
            raw("a.jar", &[Some("HIGH"), Some("LOW")]),
            raw("b.jar", &[Some("CRITICAL")]),
        ]);
        let summary = SummaryAggregator::summarize(&index);

        assert_eq!(summary.total_dependencies, 2);
        assert_eq!(summary.vulnerable_count, 2);
        assert_eq!(summary.high_severity, 1);
        assert_eq!(summary.medium_severity, 0);
        assert_eq!(summary.low_severity, 1);
    }

    #[test]
    fn test_severity_match_is_case_sensitive() {
        let index = ReportIngestor::ingest(&[raw("a.jar", &[Some("high"), Some("Medium"), None])]);
        let summary = SummaryAggregator::summarize(&index);

        assert_eq!(summary.vulnerable_count, 1);
        assert_eq!(summary.high_severity, 0);
        assert_eq!(summary.medium_severity, 0);
        assert_eq!(summary.low_severity, 0);
    }

    #[test]
    fn test_clean_records_count_toward_total_only() {
        let index = ReportIngestor::ingest(&[
            raw("a.jar", &[]),
            raw("b.jar", &[Some("MEDIUM"), Some("MEDIUM")]),
            raw("c.jar", &[]),
        ]);
        let summary = SummaryAggregator::summarize(&index);

        assert_eq!(summary.total_dependencies, 3);
        assert_eq!(summary.vulnerable_count, 1);
        assert_eq!(summary.medium_severity, 2);
    }

    #[test]
    fn test_empty_index() {
        let summary = SummaryAggregator::summarize(&DependencyIndex::default());
        assert_eq!(summary, AnalysisSummary::default());
        assert!(!summary.has_vulnerabilities());
    }
}
