use crate::impact_analysis::domain::{DependencyIndex, DependencyRecord, ReportDependency};
use indexmap::IndexMap;

/// ReportIngestor service normalizing a raw scan report into a DependencyIndex
///
/// This service contains pure business logic with no I/O dependencies.
/// It is total: any list of raw entries produces an index (possibly empty).
pub struct ReportIngestor;

impl ReportIngestor {
    /// Builds the `fileName → DependencyRecord` index and its used-in backlinks
    ///
    /// # Arguments
    /// * `dependencies` - Raw dependency entries in report order
    ///
    /// # Returns
    /// A DependencyIndex where `used_in(X)` lists every record that declares X
    /// as a direct dependency. Dependencies pointing at identifiers absent from
    /// the report are dropped from the reverse index.
    pub fn ingest(dependencies: &[ReportDependency]) -> DependencyIndex {
        let mut records: IndexMap<String, DependencyRecord> = IndexMap::new();

        // A repeated fileName replaces the earlier entry but keeps its position
        for raw in dependencies {
            records.insert(
                raw.file_name.clone(),
                DependencyRecord::new(
                    raw.file_name.clone(),
                    raw.dependencies.clone(),
                    raw.vulnerabilities.clone(),
                ),
            );
        }

        let backlinks: Vec<(usize, String)> = records
            .values()
            .flat_map(|record| {
                let dependent = record.file_name.clone();
                record
                    .dependencies
                    .iter()
                    .filter_map(|dep| records.get_index_of(dep))
                    .map(move |target| (target, dependent.clone()))
                    .collect::<Vec<_>>()
            })
            .collect();

        for (target, dependent) in backlinks {
            if let Some((_, record)) = records.get_index_mut(target) {
                // used-in is a set; a dependency listed twice links once
                if !record.used_in.contains(&dependent) {
                    record.used_in.push(dependent);
                }
            }
        }

        DependencyIndex::from_map(records)
    }
}
