use super::VersionRecommender;
use crate::impact_analysis::domain::{DependencyEdge, DependencyRecord, Simulation};

/// SimulationSynthesizer service building upgrade scenarios for a vulnerable record
pub struct SimulationSynthesizer;

impl SimulationSynthesizer {
    /// One Simulation per candidate version, in recommender order.
    ///
    /// Candidates are not de-duplicated, so repeated versions yield repeated ids.
    pub fn synthesize(
        recommender: &VersionRecommender,
        record: &DependencyRecord,
        vulnerable_id: &str,
    ) -> Vec<Simulation> {
        let severity_score = record.vulnerabilities.len();

        recommender
            .recommend_for(record)
            .into_iter()
            .map(|version| Simulation {
                id: Self::simulation_id(vulnerable_id, &version),
                description: format!("Simulate upgrading {} to {}", vulnerable_id, version),
                severity_score,
                graph: vec![DependencyEdge::new(vulnerable_id, version.as_str())],
                recommended_version: version,
            })
            .collect()
    }

    pub fn simulation_id(vulnerable_id: &str, version: &str) -> String {
        format!("{}-upgrade-to-{}", vulnerable_id, version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impact_analysis::domain::Vulnerability;

    fn vulnerable_record(descriptions: &[&str]) -> DependencyRecord {
        DependencyRecord::new(
            "lib-1.0.0.jar".to_string(),
            vec![],
            descriptions
                .iter()
                .map(|d| Vulnerability::new("CVE-2024-0001", Some("HIGH"), Some(*d)))
                .collect(),
        )
    }

    #[test]
    fn test_simulation_id_format() {
        assert_eq!(
            SimulationSynthesizer::simulation_id("lib-1.0.0.jar", "1.0.1"),
            "lib-1.0.0.jar-upgrade-to-1.0.1"
        );
    }

    #[test]
    fn test_one_simulation_per_candidate_in_order() {
        let record = vulnerable_record(&[
            "Users are recommended to upgrade to version 1.2.3 or 1.3.0.",
            "Second issue.",
        ]);
        let sims =
            SimulationSynthesizer::synthesize(&VersionRecommender::default(), &record, "lib-1.0.0.jar");

        assert_eq!(sims.len(), 2);
        assert_eq!(sims[0].id, "lib-1.0.0.jar-upgrade-to-1.2.3");
        assert_eq!(sims[1].id, "lib-1.0.0.jar-upgrade-to-1.3.0");
        assert_eq!(sims[0].description, "Simulate upgrading lib-1.0.0.jar to 1.2.3");
        assert_eq!(sims[0].recommended_version, "1.2.3");
        assert_eq!(sims[0].graph, vec![DependencyEdge::new("lib-1.0.0.jar", "1.2.3")]);
    }

    #[test]
    fn test_severity_score_is_vulnerability_count() {
        let record = vulnerable_record(&["a", "b", "c"]);
        let sims =
            SimulationSynthesizer::synthesize(&VersionRecommender::default(), &record, "lib-1.0.0.jar");

        assert_eq!(sims.len(), 1);
        assert_eq!(sims[0].severity_score, 3);
        assert_eq!(sims[0].recommended_version, "latest");
    }

    #[test]
    fn test_duplicate_candidates_are_preserved() {
        let record = vulnerable_record(&["recommended to upgrade to version 2.0.0 or 2.0.0."]);
        let sims =
            SimulationSynthesizer::synthesize(&VersionRecommender::default(), &record, "lib-1.0.0.jar");

        assert_eq!(sims.len(), 2);
        assert_eq!(sims[0].id, sims[1].id);
    }
}
