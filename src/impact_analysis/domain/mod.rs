pub mod analysis_metadata;
pub mod analysis_summary;
pub mod connectivity;
pub mod dependency_edge;
pub mod dependency_index;
pub mod dependency_record;
pub mod impact_entry;
pub mod scan_report;
pub mod simulation;

pub use analysis_metadata::AnalysisMetadata;
pub use analysis_summary::AnalysisSummary;
pub use connectivity::{ClassifiedEdge, ConnectivityReport, EdgeStatus};
pub use dependency_edge::DependencyEdge;
pub use dependency_index::DependencyIndex;
pub use dependency_record::{DependencyRecord, DependencyType, Vulnerability};
pub use impact_entry::{ImpactEntry, ImpactLevel};
pub use scan_report::{ProjectInfo, ReportDependency, ScanReport};
pub use simulation::Simulation;
