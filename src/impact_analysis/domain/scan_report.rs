use super::Vulnerability;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Raw scan report as written by the dependency scanner.
///
/// This is the loosely-typed ingestion boundary: every optional collection
/// defaults to empty (also when the scanner writes an explicit `null`), so
/// the rest of the pipeline only ever sees fully populated values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Vec<ReportDependency>,
    #[serde(default)]
    pub project_info: Option<ProjectInfo>,
}

/// A single dependency entry of the raw report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportDependency {
    pub file_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub dependencies: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub vulnerabilities: Vec<Vulnerability>,
}

/// Project block of the raw report, echoed back in analysis output.
///
/// Keys beyond `name` and `reportDate` are carried verbatim in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_date: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl ScanReport {
    /// Parses the scanner's JSON output
    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }

    pub fn report_date(&self) -> Option<&str> {
        self.project_info
            .as_ref()
            .and_then(|info| info.report_date.as_deref())
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
