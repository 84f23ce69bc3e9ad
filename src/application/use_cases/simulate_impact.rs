use crate::application::dto::{ImpactRequest, ImpactResponse};
use crate::impact_analysis::services::{
    ImpactPropagator, ReportIngestor, SimulationSynthesizer, VersionRecommender,
};
use crate::ports::outbound::{ProgressReporter, ReportReader};
use crate::shared::error::ImpactError;
use crate::shared::Result;

/// SimulateImpactUseCase - upgrade simulations and one-hop impact for a vulnerable dependency
///
/// The report is re-ingested on every call; nothing from a previous
/// analysis is kept in memory.
pub struct SimulateImpactUseCase<RR, PR> {
    report_reader: RR,
    progress_reporter: PR,
    recommender: VersionRecommender,
}

impl<RR, PR> SimulateImpactUseCase<RR, PR>
where
    RR: ReportReader,
    PR: ProgressReporter,
{
    pub fn new(report_reader: RR, progress_reporter: PR) -> Self {
        Self::with_recommender(report_reader, progress_reporter, VersionRecommender::default())
    }

    pub fn with_recommender(
        report_reader: RR,
        progress_reporter: PR,
        recommender: VersionRecommender,
    ) -> Self {
        Self {
            report_reader,
            progress_reporter,
            recommender,
        }
    }

    /// Executes the impact simulation
    ///
    /// # Errors
    /// Returns `ImpactError::DependencyNotFound` when the requested
    /// dependency is not in the report, or a read/parse error for the report
    pub fn execute(&self, request: ImpactRequest) -> Result<ImpactResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading scan report from: {}",
            request.report_path.display()
        ));
        let report = self
            .report_reader
            .read_and_parse_report(&request.report_path)?;
        let index = ReportIngestor::ingest(&report.dependencies);

        let vulnerable_id = request.vulnerable_dependency.as_str();
        let source = index
            .get(vulnerable_id)
            .ok_or_else(|| ImpactError::DependencyNotFound {
                identifier: vulnerable_id.to_string(),
            })?;

        if source.is_clean() {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} has no recorded vulnerabilities; simulations will target 'latest'.",
                vulnerable_id
            ));
        }

        let impact = ImpactPropagator::propagate(&index, vulnerable_id)?;
        let simulations = SimulationSynthesizer::synthesize(&self.recommender, source, vulnerable_id);

        self.progress_reporter.report_completion(&format!(
            "✅ {} simulation(s), {} directly impacted dependenc{}",
            simulations.len(),
            impact.len(),
            if impact.len() == 1 { "y" } else { "ies" }
        ));

        Ok(ImpactResponse {
            vulnerable_dependency: request.vulnerable_dependency,
            simulations,
            impact,
        })
    }
}
