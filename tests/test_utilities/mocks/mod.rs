/// Mock implementations for testing
mod mock_graph_reader;
mod mock_progress_reporter;
mod mock_report_reader;

pub use mock_graph_reader::MockGraphReader;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_reader::MockReportReader;
