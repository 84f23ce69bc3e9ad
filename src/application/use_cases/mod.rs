/// Use cases module containing application business logic orchestration
mod analyze_report;
mod simulate_impact;
mod trace_connectivity;

pub use analyze_report::AnalyzeReportUseCase;
pub use simulate_impact::SimulateImpactUseCase;
pub use trace_connectivity::TraceConnectivityUseCase;
