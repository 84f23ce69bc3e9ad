use super::{DependencyEdge, DependencyRecord};
use indexmap::IndexMap;

/// DependencyIndex aggregate - `fileName → DependencyRecord` for one report
///
/// Iteration follows first-appearance order in the report, which keeps every
/// derived list (used-in, impact, summary) deterministic for identical input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyIndex {
    records: IndexMap<String, DependencyRecord>,
}

impl DependencyIndex {
    pub(crate) fn from_map(records: IndexMap<String, DependencyRecord>) -> Self {
        Self { records }
    }

    pub fn get(&self, file_name: &str) -> Option<&DependencyRecord> {
        self.records.get(file_name)
    }

    pub fn contains(&self, file_name: &str) -> bool {
        self.records.contains_key(file_name)
    }

    pub fn records(&self) -> impl Iterator<Item = &DependencyRecord> {
        self.records.values()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records with at least one vulnerability, in report order
    pub fn vulnerable_records(&self) -> impl Iterator<Item = &DependencyRecord> {
        self.records().filter(|record| record.is_vulnerable())
    }

    /// Number of edges with an endpoint that is not a record of this index
    pub fn unresolved_edge_count(&self, edges: &[DependencyEdge]) -> usize {
        edges
            .iter()
            .filter(|edge| !self.contains(&edge.from) || !self.contains(&edge.to))
            .count()
    }

    pub fn into_records(self) -> Vec<DependencyRecord> {
        self.records.into_values().collect()
    }
}
