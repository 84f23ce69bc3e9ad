use crate::application::dto::{AnalysisRequest, AnalysisResponse};
use crate::impact_analysis::domain::DependencyEdge;
use crate::impact_analysis::services::{
    DependencyEdgeParser, MetadataGenerator, ReportIngestor, SummaryAggregator,
};
use crate::ports::outbound::{GraphReader, ProgressReporter, ReportReader};
use crate::shared::Result;

const TOTAL_STEPS: usize = 4;

/// AnalyzeReportUseCase - summary, ingested records and build graph for one report
///
/// # Type Parameters
/// * `RR` - ReportReader implementation
/// * `GR` - GraphReader implementation
/// * `PR` - ProgressReporter implementation
pub struct AnalyzeReportUseCase<RR, GR, PR> {
    report_reader: RR,
    graph_reader: GR,
    progress_reporter: PR,
}

impl<RR, GR, PR> AnalyzeReportUseCase<RR, GR, PR>
where
    RR: ReportReader,
    GR: GraphReader,
    PR: ProgressReporter,
{
    /// Creates a new AnalyzeReportUseCase with injected dependencies
    pub fn new(report_reader: RR, graph_reader: GR, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            graph_reader,
            progress_reporter,
        }
    }

    /// Executes the analysis use case
    ///
    /// # Errors
    /// Fails only when the report or graph cannot be read or the report is
    /// not valid scanner output. Malformed entries inside valid input degrade
    /// to empty lists or skipped edges.
    pub fn execute(&self, request: AnalysisRequest) -> Result<AnalysisResponse> {
        // Step 1: Load the scan report
        self.progress_reporter.report(&format!(
            "📖 Loading scan report from: {}",
            request.report_path.display()
        ));
        let report = self
            .report_reader
            .read_and_parse_report(&request.report_path)?;
        self.progress_reporter
            .report_progress(1, TOTAL_STEPS, Some("Scan report loaded"));

        // Step 2: Ingest and summarize
        let index = ReportIngestor::ingest(&report.dependencies);
        let summary = SummaryAggregator::summarize(&index);
        self.progress_reporter
            .report_progress(2, TOTAL_STEPS, Some("Dependencies ingested"));

        // Step 3: Parse the build graph (independent of ingestion)
        let graph = self.read_graph_if_requested(&request)?;
        self.progress_reporter
            .report_progress(3, TOTAL_STEPS, Some("Dependency graph parsed"));

        let unresolved = index.unresolved_edge_count(&graph);
        if unresolved > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} graph edge(s) reference dependencies absent from the scan report.",
                unresolved
            ));
        }

        // Step 4: Stamp the run
        let metadata = MetadataGenerator::generate_default_metadata(report.report_date());
        self.progress_reporter
            .report_progress(4, TOTAL_STEPS, Some("Analysis assembled"));

        self.progress_reporter.report_completion(&format!(
            "✅ Analyzed {} dependencies: {} vulnerable, {} graph edge(s)",
            summary.total_dependencies,
            summary.vulnerable_count,
            graph.len()
        ));

        Ok(AnalysisResponse {
            metadata,
            project_info: report.project_info,
            summary,
            dependencies: index.into_records(),
            graph,
        })
    }

    fn read_graph_if_requested(&self, request: &AnalysisRequest) -> Result<Vec<DependencyEdge>> {
        let Some(graph_path) = request.graph_path.as_deref() else {
            return Ok(Vec::new());
        };

        self.progress_reporter.report(&format!(
            "🔗 Loading dependency graph from: {}",
            graph_path.display()
        ));
        let graph_text = self.graph_reader.read_graph(graph_path)?;
        Ok(DependencyEdgeParser::parse(&graph_text))
    }
}
