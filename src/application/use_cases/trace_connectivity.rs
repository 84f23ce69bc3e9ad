use crate::application::dto::{ConnectivityRequest, ConnectivityResponse};
use crate::impact_analysis::services::{ConnectivityAnalyzer, DependencyEdgeParser, ReportIngestor};
use crate::ports::outbound::{GraphReader, ProgressReporter, ReportReader};
use crate::shared::Result;

/// TraceConnectivityUseCase - transitive reverse reachability from vulnerable components
pub struct TraceConnectivityUseCase<RR, GR, PR> {
    report_reader: RR,
    graph_reader: GR,
    progress_reporter: PR,
}

impl<RR, GR, PR> TraceConnectivityUseCase<RR, GR, PR>
where
    RR: ReportReader,
    GR: GraphReader,
    PR: ProgressReporter,
{
    pub fn new(report_reader: RR, graph_reader: GR, progress_reporter: PR) -> Self {
        Self {
            report_reader,
            graph_reader,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: ConnectivityRequest) -> Result<ConnectivityResponse> {
        self.progress_reporter.report(&format!(
            "📖 Loading scan report from: {}",
            request.report_path.display()
        ));
        let report = self
            .report_reader
            .read_and_parse_report(&request.report_path)?;
        let index = ReportIngestor::ingest(&report.dependencies);

        self.progress_reporter.report(&format!(
            "🔗 Loading dependency graph from: {}",
            request.graph_path.display()
        ));
        let edges = DependencyEdgeParser::parse(&self.graph_reader.read_graph(&request.graph_path)?);

        let unresolved_edges = index.unresolved_edge_count(&edges);
        if unresolved_edges > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: {} graph edge(s) reference dependencies absent from the scan report.",
                unresolved_edges
            ));
        }

        let report = ConnectivityAnalyzer::trace(&index, &edges);
        self.progress_reporter.report_completion(&format!(
            "✅ {} vulnerable, {} transitively impacted",
            report.vulnerable.len(),
            report.impacted.len()
        ));

        Ok(ConnectivityResponse {
            report,
            unresolved_edges,
        })
    }
}
