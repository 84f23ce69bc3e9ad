pub mod connectivity_analyzer;
pub mod edge_parser;
pub mod impact_propagator;
pub mod metadata_generator;
pub mod report_ingestor;
pub mod simulation_synthesizer;
pub mod summary_aggregator;
pub mod version_recommender;

pub use connectivity_analyzer::ConnectivityAnalyzer;
pub use edge_parser::DependencyEdgeParser;
pub use impact_propagator::ImpactPropagator;
pub use metadata_generator::MetadataGenerator;
pub use report_ingestor::ReportIngestor;
pub use simulation_synthesizer::SimulationSynthesizer;
pub use summary_aggregator::SummaryAggregator;
pub use version_recommender::VersionRecommender;
