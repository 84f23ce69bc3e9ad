use crate::impact_analysis::domain::DependencyRecord;
use crate::impact_analysis::policies::{
    ExplicitUpgradeStrategy, PatchBumpStrategy, VersionExtractionStrategy, LATEST_VERSION,
};

/// VersionRecommender service composing extraction strategies first-match-wins
///
/// The default chain is explicit advisory text, then patch bump of the highest
/// mentioned version. The result is never empty.
pub struct VersionRecommender {
    strategies: Vec<Box<dyn VersionExtractionStrategy + Send + Sync>>,
}

impl VersionRecommender {
    pub fn new(strategies: Vec<Box<dyn VersionExtractionStrategy + Send + Sync>>) -> Self {
        Self { strategies }
    }

    /// Candidate upgrade versions for a description, in the order found
    pub fn recommend(&self, description: &str) -> Vec<String> {
        self.strategies
            .iter()
            .map(|strategy| strategy.extract(description))
            .find(|versions| !versions.is_empty())
            .unwrap_or_else(|| vec![LATEST_VERSION.to_string()])
    }

    /// Candidates mined from the record's first vulnerability only
    pub fn recommend_for(&self, record: &DependencyRecord) -> Vec<String> {
        let description = record
            .first_vulnerability()
            .map(|vuln| vuln.description_text())
            .unwrap_or("");
        self.recommend(description)
    }
}

impl Default for VersionRecommender {
    fn default() -> Self {
        Self::new(vec![
            Box::new(ExplicitUpgradeStrategy),
            Box::new(PatchBumpStrategy),
        ])
    }
}
