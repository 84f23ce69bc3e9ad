use dep_impact::prelude::*;
use std::path::Path;

/// Mock ReportReader for testing
pub struct MockReportReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockReportReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl ReportReader for MockReportReader {
    fn read_report(&self, _report_path: &Path) -> Result<String> {
        if self.should_fail {
            anyhow::bail!("Mock report read failure");
        }
        Ok(self.content.clone())
    }
}
