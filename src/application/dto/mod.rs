/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod analysis_request;
mod analysis_response;
mod connectivity_request;
mod connectivity_response;
mod impact_request;
mod impact_response;
mod output_format;

pub use analysis_request::AnalysisRequest;
pub use analysis_response::AnalysisResponse;
pub use connectivity_request::ConnectivityRequest;
pub use connectivity_response::ConnectivityResponse;
pub use impact_request::ImpactRequest;
pub use impact_response::ImpactResponse;
pub use output_format::OutputFormat;
