use crate::impact_analysis::domain::{DependencyIndex, ImpactEntry, ImpactLevel};
use crate::shared::error::ImpactError;
use crate::shared::Result;

/// ImpactPropagator service - one-hop impact of a vulnerable dependency
///
/// Only direct dependents are inspected. Deeper reachability lives in
/// [`ConnectivityAnalyzer`](super::ConnectivityAnalyzer) and is never used here.
pub struct ImpactPropagator;

impl ImpactPropagator {
    /// Lists the clean records that directly depend on `vulnerable_id`
    ///
    /// # Errors
    /// Returns `ImpactError::DependencyNotFound` if `vulnerable_id` is not a
    /// record of the index
    pub fn propagate(index: &DependencyIndex, vulnerable_id: &str) -> Result<Vec<ImpactEntry>> {
        if !index.contains(vulnerable_id) {
            return Err(ImpactError::DependencyNotFound {
                identifier: vulnerable_id.to_string(),
            }
            .into());
        }

        Ok(index
            .records()
            .filter(|record| record.depends_on(vulnerable_id) && record.is_clean())
            .map(|record| ImpactEntry {
                source: vulnerable_id.to_string(),
                target: record.file_name.clone(),
                impact_level: ImpactLevel::High,
                transitive_depth: record.transitive_depth,
                dependency_type: record.dependency_type,
                used_in: record.used_in.clone(),
                recommendation: Self::recommendation(vulnerable_id, &record.file_name),
            })
            .collect())
    }

    fn recommendation(vulnerable_id: &str, target: &str) -> String {
        format!(
            "After upgrading {}, verify integration with {}",
            vulnerable_id, target
        )
    }
}
