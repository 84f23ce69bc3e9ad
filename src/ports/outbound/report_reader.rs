use crate::impact_analysis::domain::ScanReport;
use crate::shared::error::ImpactError;
use crate::shared::Result;
use std::path::Path;

/// ReportReader port for loading the dependency scanner's JSON report
///
/// The scan itself has already run; this port only hands over its output.
pub trait ReportReader {
    /// Reads the raw report content
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_report(&self, report_path: &Path) -> Result<String>;

    /// Reads and parses the report into its schema
    ///
    /// # Errors
    /// Returns `ImpactError::ReportParseError` carrying the parser message
    /// when the scanner produced something that is not a valid report
    fn read_and_parse_report(&self, report_path: &Path) -> Result<ScanReport> {
        let content = self.read_report(report_path)?;
        ScanReport::from_json(&content).map_err(|e| {
            ImpactError::ReportParseError {
                path: report_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
