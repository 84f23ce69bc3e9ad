use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - analysis completed (and no vulnerable dependency when gating is enabled)
    Success = 0,
    /// `--fail-on-vulnerable` was set and the report lists vulnerable dependencies
    VulnerabilitiesDetected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing report, unreadable tool output, unknown dependency, I/O error)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::VulnerabilitiesDetected => write!(f, "Vulnerabilities Detected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Request-terminal failures of the impact analysis tool.
///
/// Degraded input (missing arrays, unparsable graph lines) never shows up here;
/// the domain layer absorbs it. What remains is either a lookup miss or a
/// failure of the upstream scan/build tooling, surfaced with its raw details.
#[derive(Debug, Error)]
pub enum ImpactError {
    #[error("Vulnerable dependency not found: {identifier}\n\n💡 Hint: Use the exact fileName listed in the scan report (e.g. \"lib-1.0.0.jar\")")]
    DependencyNotFound { identifier: String },

    #[error("Scan report not found: {path}\n\n💡 Hint: {suggestion}")]
    ReportNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to parse scan report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the dependency scan finished and produced a JSON report")]
    ReportParseError { path: PathBuf, details: String },

    #[error("Failed to read dependency graph: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the build tool produced its dependency tree output")]
    GraphReadError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for CLI and configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::VulnerabilitiesDetected.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::VulnerabilitiesDetected),
            "Vulnerabilities Detected (1)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_dependency_not_found_display() {
        let error = ImpactError::DependencyNotFound {
            identifier: "lib-1.0.0.jar".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Vulnerable dependency not found"));
        assert!(display.contains("lib-1.0.0.jar"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_report_parse_error_carries_details() {
        let error = ImpactError::ReportParseError {
            path: PathBuf::from("/tmp/dependency-check-report.json"),
            details: "expected value at line 1 column 1".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to parse scan report"));
        assert!(display.contains("/tmp/dependency-check-report.json"));
        assert!(display.contains("expected value at line 1 column 1"));
    }

    #[test]
    fn test_graph_read_error_display() {
        let error = ImpactError::GraphReadError {
            path: PathBuf::from("tree.dot"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to read dependency graph"));
        assert!(display.contains("Permission denied"));
    }

    #[test]
    fn test_security_error_display() {
        let error = ImpactError::SecurityError {
            path: PathBuf::from("/test/symlink"),
            reason: "Symbolic links are not allowed".to_string(),
            hint: "Use a regular file instead".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Security violation"));
        assert!(display.contains("/test/symlink"));
        assert!(display.contains("Use a regular file instead"));
    }

    #[test]
    fn test_not_found_downcasts_from_anyhow() {
        let err: anyhow::Error = ImpactError::DependencyNotFound {
            identifier: "x.jar".to_string(),
        }
        .into();
        assert!(matches!(
            err.downcast_ref::<ImpactError>(),
            Some(ImpactError::DependencyNotFound { .. })
        ));
    }
}
