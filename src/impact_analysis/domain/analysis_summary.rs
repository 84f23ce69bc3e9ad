use serde::Serialize;

/// Aggregate severity counts for one report
///
/// Only exact `HIGH`, `MEDIUM` and `LOW` severities land in a bucket;
/// `CRITICAL` and unknown values are counted in none of them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSummary {
    pub total_dependencies: usize,
    pub vulnerable_count: usize,
    pub high_severity: usize,
    pub medium_severity: usize,
    pub low_severity: usize,
}

impl AnalysisSummary {
    pub fn has_vulnerabilities(&self) -> bool {
        self.vulnerable_count > 0
    }
}
