use serde::{Deserialize, Serialize};

/// A known vulnerability attached to a dependency
///
/// `severity` is kept as the scanner wrote it; canonical values are
/// `HIGH`, `MEDIUM`, `LOW` and `CRITICAL`, but anything may appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vulnerability {
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Vulnerability {
    pub fn new(
        name: impl Into<String>,
        severity: Option<&str>,
        description: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            severity: severity.map(str::to_string),
            description: description.map(str::to_string),
        }
    }

    /// Description text, empty when the scanner omitted it
    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }
}

/// Classification of how a dependency enters the build.
///
/// Only `Direct` exists today; no deeper classification is computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyType {
    #[default]
    Direct,
}

/// Depth reported for every record. No real depth computation is performed.
pub const DEFAULT_TRANSITIVE_DEPTH: u32 = 1;

/// DependencyRecord entity - one component of an ingested scan report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyRecord {
    pub file_name: String,
    pub dependencies: Vec<String>,
    pub vulnerabilities: Vec<Vulnerability>,
    /// Records that list this one as a direct dependency, in report order
    pub used_in: Vec<String>,
    pub dependency_type: DependencyType,
    pub transitive_depth: u32,
}

impl DependencyRecord {
    pub fn new(
        file_name: String,
        dependencies: Vec<String>,
        vulnerabilities: Vec<Vulnerability>,
    ) -> Self {
        Self {
            file_name,
            dependencies,
            vulnerabilities,
            used_in: Vec::new(),
            dependency_type: DependencyType::Direct,
            transitive_depth: DEFAULT_TRANSITIVE_DEPTH,
        }
    }

    /// A record with no vulnerabilities is clean
    pub fn is_clean(&self) -> bool {
        self.vulnerabilities.is_empty()
    }

    pub fn is_vulnerable(&self) -> bool {
        !self.is_clean()
    }

    pub fn depends_on(&self, identifier: &str) -> bool {
        self.dependencies.iter().any(|dep| dep == identifier)
    }

    pub fn first_vulnerability(&self) -> Option<&Vulnerability> {
        self.vulnerabilities.first()
    }
}
