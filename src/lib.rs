//! dep-impact - vulnerability impact analysis for build dependency graphs
//!
//! This library turns two pieces of upstream tool output, a dependency
//! scanner's JSON report and a build tool's dependency tree, into an impact
//! analysis: which components are vulnerable, which components use them,
//! what upgrade to try and what else that upgrade touches.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`impact_analysis`): Pure analysis logic and domain models
//! - **Application Layer** (`application`): Use cases, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use dep_impact::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = AnalyzeReportUseCase::new(
//!     FileSystemReader::new(),
//!     FileSystemReader::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = AnalysisRequest::new(
//!     PathBuf::from("target/dependency-check-report.json"),
//!     Some(PathBuf::from("target/dependency-tree.dot")),
//! );
//! let response = use_case.execute(request)?;
//!
//! let output = JsonFormatter::new().format_analysis(&response)?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod impact_analysis;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        AnalysisRequest, AnalysisResponse, ConnectivityRequest, ConnectivityResponse,
        ImpactRequest, ImpactResponse, OutputFormat,
    };
    pub use crate::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
    pub use crate::application::use_cases::{
        AnalyzeReportUseCase, SimulateImpactUseCase, TraceConnectivityUseCase,
    };
    pub use crate::impact_analysis::domain::{
        AnalysisMetadata, AnalysisSummary, ClassifiedEdge, ConnectivityReport, DependencyEdge,
        DependencyIndex, DependencyRecord, DependencyType, EdgeStatus, ImpactEntry, ImpactLevel,
        ProjectInfo, ReportDependency, ScanReport, Simulation, Vulnerability,
    };
    pub use crate::impact_analysis::policies::{
        ExplicitUpgradeStrategy, PatchBumpStrategy, VersionExtractionStrategy, LATEST_VERSION,
    };
    pub use crate::impact_analysis::services::{
        ConnectivityAnalyzer, DependencyEdgeParser, ImpactPropagator, MetadataGenerator,
        ReportIngestor, SimulationSynthesizer, SummaryAggregator, VersionRecommender,
    };
    pub use crate::ports::outbound::{
        AnalysisFormatter, GraphReader, OutputPresenter, ProgressReporter, ReportReader,
    };
    pub use crate::shared::error::{ExitCode, ImpactError};
    pub use crate::shared::Result;
}
