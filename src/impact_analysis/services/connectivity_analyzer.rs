use crate::impact_analysis::domain::{
    ClassifiedEdge, ConnectivityReport, DependencyEdge, DependencyIndex, EdgeStatus,
};
use std::collections::{HashMap, HashSet, VecDeque};

/// ConnectivityAnalyzer service - transitive reverse reachability over the build graph
///
/// Walks `to → from` edges breadth-first starting from every vulnerable
/// record. This is a separate capability from the one-hop
/// [`ImpactPropagator`](super::ImpactPropagator); neither calls the other.
pub struct ConnectivityAnalyzer;

impl ConnectivityAnalyzer {
    pub fn trace(index: &DependencyIndex, edges: &[DependencyEdge]) -> ConnectivityReport {
        let reverse_adjacency = Self::reverse_adjacency(edges);

        let vulnerable: Vec<String> = index
            .vulnerable_records()
            .map(|record| record.file_name.clone())
            .collect();
        let vulnerable_set: HashSet<&str> = vulnerable.iter().map(String::as_str).collect();

        let mut visited: HashSet<&str> = vulnerable_set.clone();
        let mut queue: VecDeque<&str> = vulnerable.iter().map(String::as_str).collect();
        let mut impacted: Vec<String> = Vec::new();

        while let Some(current) = queue.pop_front() {
            let Some(dependents) = reverse_adjacency.get(current) else {
                continue;
            };
            for &dependent in dependents {
                if visited.insert(dependent) {
                    if !vulnerable_set.contains(dependent) {
                        impacted.push(dependent.to_string());
                    }
                    queue.push_back(dependent);
                }
            }
        }

        let impacted_set: HashSet<&str> = impacted.iter().map(String::as_str).collect();
        let edges = edges
            .iter()
            .map(|edge| ClassifiedEdge {
                status: if vulnerable_set.contains(edge.from.as_str()) {
                    EdgeStatus::Vulnerable
                } else if impacted_set.contains(edge.to.as_str()) {
                    EdgeStatus::Impacted
                } else {
                    EdgeStatus::Safe
                },
                edge: edge.clone(),
            })
            .collect();

        ConnectivityReport {
            vulnerable,
            impacted,
            edges,
        }
    }

    /// `to → [from, ...]` in edge order
    fn reverse_adjacency(edges: &[DependencyEdge]) -> HashMap<&str, Vec<&str>> {
        let mut reverse: HashMap<&str, Vec<&str>> = HashMap::new();
        for edge in edges {
            reverse
                .entry(edge.to.as_str())
                .or_default()
                .push(edge.from.as_str());
        }
        reverse
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact_analysis::domain::{ReportDependency, Vulnerability};
    use crate::impact_analysis::services::ReportIngestor;

    fn index_with_vulnerable(names: &[&str], vulnerable: &[&str]) -> DependencyIndex {
        let raw: Vec<ReportDependency> = names
            .iter()
            .map(|name| ReportDependency {
                file_name: name.to_string(),
                dependencies: vec![],
                vulnerabilities: if vulnerable.contains(name) {
                    vec![Vulnerability::new("CVE-2024-0001", Some("HIGH"), None)]
                } else {
                    vec![]
                },
            })
            .collect();
        ReportIngestor::ingest(&raw)
    }

    #[test]
    fn test_trace_reaches_transitive_dependents() {
        let index = index_with_vulnerable(&["app.jar", "mid.jar", "lib.jar"], &["lib.jar"]);
        let edges = vec![
            DependencyEdge::new("app.jar", "mid.jar"),
            DependencyEdge::new("mid.jar", "lib.jar"),
        ];

        let report = ConnectivityAnalyzer::trace(&index, &edges);

        assert_eq!(report.vulnerable, vec!["lib.jar"]);
        assert_eq!(report.impacted, vec!["mid.jar", "app.jar"]);
        assert_eq!(report.edges[0].status, EdgeStatus::Impacted);
        // Points into the vulnerable node, which is not itself impacted
        assert_eq!(report.edges[1].status, EdgeStatus::Safe);
    }

    #[test]
    fn test_vulnerable_dependents_are_not_impacted() {
        let index = index_with_vulnerable(&["app.jar", "lib.jar"], &["app.jar", "lib.jar"]);
        let edges = vec![DependencyEdge::new("app.jar", "lib.jar")];

        let report = ConnectivityAnalyzer::trace(&index, &edges);

        assert!(report.impacted.is_empty());
        assert_eq!(report.edges[0].status, EdgeStatus::Vulnerable);
    }

    #[test]
    fn test_cycles_terminate() {
        let index = index_with_vulnerable(&["a.jar", "b.jar", "c.jar"], &["a.jar"]);
        let edges = vec![
            DependencyEdge::new("b.jar", "a.jar"),
            DependencyEdge::new("c.jar", "b.jar"),
            DependencyEdge::new("b.jar", "c.jar"),
        ];

        let report = ConnectivityAnalyzer::trace(&index, &edges);
        assert_eq!(report.impacted, vec!["b.jar", "c.jar"]);
    }

    #[test]
    fn test_unrelated_edges_are_safe() {
        let index = index_with_vulnerable(&["x.jar", "y.jar", "lib.jar"], &["lib.jar"]);
        let edges = vec![DependencyEdge::new("x.jar", "y.jar")];

        let report = ConnectivityAnalyzer::trace(&index, &edges);
        assert!(report.impacted.is_empty());
        assert_eq!(report.edges[0].status, EdgeStatus::Safe);
    }

    #[test]
    fn test_no_vulnerabilities() {
        let index = index_with_vulnerable(&["a.jar"], &[]);
        let report = ConnectivityAnalyzer::trace(&index, &[DependencyEdge::new("a.jar", "b.jar")]);
        assert!(report.vulnerable.is_empty());
        assert!(report.impacted.is_empty());
    }
}
