use crate::impact_analysis::domain::DependencyEdge;
use regex::Regex;
use std::sync::LazyLock;

static QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""([^"]+)""#).expect("quoted token pattern is valid"));

/// DependencyEdgeParser service for build-tool dependency tree output
///
/// Understands the DOT-style output of `mvn dependency:tree -DoutputType=dot`:
///
/// ```text
/// digraph "com.example:app:jar:1.0.0" {
///     "com.example:app:jar:1.0.0" -> "org.slf4j:slf4j-api:jar:2.0.9:compile" ;
/// }
/// ```
///
/// Only lines with exactly two quoted coordinates produce an edge; anything
/// else is skipped silently.
pub struct DependencyEdgeParser;

impl DependencyEdgeParser {
    /// Parses the whole graph text into edges, in line order
    pub fn parse(graph_text: &str) -> Vec<DependencyEdge> {
        graph_text.lines().filter_map(Self::parse_line).collect()
    }

    /// Parses one line; `None` unless it holds exactly two usable coordinates
    pub fn parse_line(line: &str) -> Option<DependencyEdge> {
        let quoted: Vec<&str> = QUOTED
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str())
            .collect();

        match quoted.as_slice() {
            [from, to] => Some(DependencyEdge::new(
                Self::artifact_file_name(from)?,
                Self::artifact_file_name(to)?,
            )),
            _ => None,
        }
    }

    /// Synthesizes `{artifactId}-{version}.jar` from a colon-delimited coordinate
    ///
    /// The 2nd and 4th fields are taken (`group:artifact:type:version[:scope]`).
    /// This must line up with the scanner's `fileName` convention for the graph
    /// to correlate with the report; nothing here checks that it does.
    pub fn artifact_file_name(coordinate: &str) -> Option<String> {
        let mut fields = coordinate.split(':');
        let artifact_id = fields.nth(1)?;
        let version = fields.nth(1)?;
        Some(format!("{}-{}.jar", artifact_id, version))
    }
}
