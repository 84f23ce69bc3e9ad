use crate::ports::outbound::{GraphReader, ReportReader};
use crate::shared::error::ImpactError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// FileSystemReader adapter for reading upstream tool output from disk
///
/// Implements both ReportReader and GraphReader. Every read goes through
/// the same safety checks before any bytes are loaded.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file:
    /// - Reject symbolic links
    /// - Validate file is a regular file
    /// - Check file size limits
    fn safe_read_file(&self, path: &Path, file_type: &str) -> Result<String> {
        let file_size = validate_regular_file(path, file_type)?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportReader for FileSystemReader {
    fn read_report(&self, report_path: &Path) -> Result<String> {
        if !report_path.exists() {
            return Err(ImpactError::ReportNotFound {
                path: report_path.to_path_buf(),
                suggestion: "Run the dependency scan with JSON output first \
                     (e.g. `dependency-check --format JSON`) and pass the generated \
                     dependency-check-report.json with --report."
                    .to_string(),
            }
            .into());
        }

        self.safe_read_file(report_path, "scan report").map_err(|e| {
            // Security violations keep their own type
            if e.downcast_ref::<ImpactError>().is_some() {
                return e;
            }
            ImpactError::FileReadError {
                path: report_path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl GraphReader for FileSystemReader {
    fn read_graph(&self, graph_path: &Path) -> Result<String> {
        self.safe_read_file(graph_path, "dependency graph")
            .map_err(|e| {
                if e.downcast_ref::<ImpactError>().is_some() {
                    return e;
                }
                ImpactError::GraphReadError {
                    path: graph_path.to_path_buf(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}
