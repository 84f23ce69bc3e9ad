pub mod version_extraction;

pub use version_extraction::{
    ExplicitUpgradeStrategy, PatchBumpStrategy, VersionExtractionStrategy, LATEST_VERSION,
};
