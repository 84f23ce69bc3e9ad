/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, console, etc.).
pub mod formatter;
pub mod graph_reader;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_reader;

pub use formatter::AnalysisFormatter;
pub use graph_reader::GraphReader;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_reader::ReportReader;
