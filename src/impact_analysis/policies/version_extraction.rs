//! Text patterns for mining upgrade targets out of vulnerability descriptions.
//!
//! Two strategies are provided and composed by
//! [`VersionRecommender`](crate::impact_analysis::services::VersionRecommender):
//!
//! 1. [`ExplicitUpgradeStrategy`] - the advisory states the target verbatim
//!    ("... recommended to upgrade to version 1.2.3 or 1.3.0.")
//! 2. [`PatchBumpStrategy`] - bump the patch level of the highest
//!    `major.minor.patch` mentioned anywhere in the text

use regex::Regex;
use std::sync::LazyLock;

/// Placeholder target when a description carries no version at all
pub const LATEST_VERSION: &str = "latest";

/// "recommend[ed] to upgrade to version <X>" up to a `, which`/`, that` clause,
/// a sentence-ending period, or the end of the line. Any other comma-clause is
/// cut off token by token in [`ExplicitUpgradeStrategy::extract`].
static EXPLICIT_UPGRADE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)recommend(?:ed)?\s+to\s+upgrade\s+to\s+version\s+(.+?)(?:,\s*(?:which|that)\b|\.(?:\s|$)|\s*$)",
    )
    .expect("explicit upgrade pattern is valid")
});

static OR_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\s+or\s+").expect("or separator pattern is valid"));

static SEMVER_TRIPLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[0-9]+\.[0-9]+\.[0-9]+").expect("version triple pattern is valid")
});

/// A candidate is a single word starting with a digit or a `v` prefix.
/// The first token failing this opens a prose clause and ends the list.
fn looks_like_version(token: &str) -> bool {
    !token.contains(char::is_whitespace)
        && token
            .chars()
            .next()
            .is_some_and(|c| c.is_ascii_digit() || c == 'v' || c == 'V')
}

/// A single way of deriving candidate versions from free text.
///
/// Strategies are total: an empty vector means "nothing found", never an error.
pub trait VersionExtractionStrategy {
    fn extract(&self, description: &str) -> Vec<String>;
}

/// Stage 1: versions the advisory names explicitly, in the order written
#[derive(Debug, Clone, Copy, Default)]
pub struct ExplicitUpgradeStrategy;

impl VersionExtractionStrategy for ExplicitUpgradeStrategy {
    fn extract(&self, description: &str) -> Vec<String> {
        let Some(captured) = EXPLICIT_UPGRADE
            .captures(description)
            .and_then(|caps| caps.get(1))
        else {
            return Vec::new();
        };

        OR_SEPARATOR
            .replace_all(captured.as_str(), ",")
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .take_while(|token| looks_like_version(token))
            .map(str::to_string)
            .collect()
    }
}

/// Stage 2: next patch release after the highest version mentioned.
///
/// Always yields exactly one element; [`LATEST_VERSION`] when the text has
/// no `digits.digits.digits` token.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatchBumpStrategy;

impl PatchBumpStrategy {
    /// All `major.minor.patch` tuples in match order. Tokens whose components
    /// overflow `u64` are skipped.
    fn version_triples(description: &str) -> Vec<(u64, u64, u64)> {
        SEMVER_TRIPLE
            .find_iter(description)
            .filter_map(|m| {
                let mut parts = m.as_str().split('.').map(|n| n.parse::<u64>().ok());
                Some((parts.next()??, parts.next()??, parts.next()??))
            })
            .collect()
    }
}

impl VersionExtractionStrategy for PatchBumpStrategy {
    fn extract(&self, description: &str) -> Vec<String> {
        let mut triples = Self::version_triples(description);
        // Stable: equal tuples keep their match order
        triples.sort();

        match triples.last() {
            Some(&(major, minor, patch)) => {
                vec![format!("{}.{}.{}", major, minor, patch.saturating_add(1))]
            }
            None => vec![LATEST_VERSION.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ========== ExplicitUpgradeStrategy ==========

    #[test]
    fn test_explicit_single_version_with_which_clause() {
        let desc = "A flaw was found. Users are recommended to upgrade to version 4.2.1, which fixes the issue.";
        assert_eq!(ExplicitUpgradeStrategy.extract(desc), vec!["4.2.1"]);
    }

    #[test]
    fn test_explicit_stops_at_participle_clause() {
        let desc = "Users are recommended to upgrade to version 4.2.1, fixing the issue.";
        assert_eq!(ExplicitUpgradeStrategy.extract(desc), vec!["4.2.1"]);
    }

    #[test]
    fn test_explicit_stops_at_conjunction_clause() {
        let desc = "It is recommended to upgrade to version 3.1.2, and users of 2.x should migrate.";
        assert_eq!(ExplicitUpgradeStrategy.extract(desc), vec!["3.1.2"]);
    }

    #[test]
    fn test_explicit_keeps_candidates_before_prose_clause() {
        let desc = "Recommended to upgrade to version 1.4.2, v1.5.0, or newer releases.";
        assert_eq!(ExplicitUpgradeStrategy.extract(desc), vec!["1.4.2", "v1.5.0"]);
    }

    #[test]
    fn test_explicit_prose_target_yields_nothing() {
        let desc = "Users are recommended to upgrade to version latest available.";
        assert!(ExplicitUpgradeStrategy.extract(desc).is_empty());
    }

    #[test]
    fn test_explicit_hyphenated_or_is_not_a_separator() {
        let desc = "Users are recommended to upgrade to version 1.0.0-or-later.";
        assert_eq!(ExplicitUpgradeStrategy.extract(desc), vec!["1.0.0-or-later"]);
    }

    #[test]
    fn test_explicit_or_separated_candidates() {
        let desc = "Users are recommended to upgrade to version 1.2.3 or 1.3.0.";
        assert_eq!(ExplicitUpgradeStrategy.extract(desc), vec!["1.2.3", "1.3.0"]);
    }

    #[test]
    fn test_explicit_comma_and_or_candidates() {
        let desc = "It is recommended to upgrade to version 2.4.1, 2.5.3 or 3.0.0, which fix this.";
        assert_eq!(
            ExplicitUpgradeStrategy.extract(desc),
            vec!["2.4.1", "2.5.3", "3.0.0"]
        );
    }

    #[test]
    fn test_explicit_is_case_insensitive() {
        let desc = "Recommend To Upgrade To Version 9.0.0";
        assert_eq!(ExplicitUpgradeStrategy.extract(desc), vec!["9.0.0"]);
    }

    #[test]
    fn test_explicit_terminated_by_end_of_string() {
        let desc = "Users are recommended to upgrade to version 5.1.0";
        assert_eq!(ExplicitUpgradeStrategy.extract(desc), vec!["5.1.0"]);
    }

    #[test]
    fn test_explicit_stops_at_sentence_period() {
        let desc = "Users are recommended to upgrade to version 3.3.3. Older lines 2.9.9 stay affected.";
        assert_eq!(ExplicitUpgradeStrategy.extract(desc), vec!["3.3.3"]);
    }

    #[test]
    fn test_explicit_uppercase_or() {
        let desc = "recommended to upgrade to version 1.0.1 OR 1.1.0.";
        assert_eq!(ExplicitUpgradeStrategy.extract(desc), vec!["1.0.1", "1.1.0"]);
    }

    #[test]
    fn test_explicit_without_phrase_is_empty() {
        let desc = "Versions 1.0.0 through 1.2.0 are affected.";
        assert!(ExplicitUpgradeStrategy.extract(desc).is_empty());
    }

    #[test]
    fn test_explicit_takes_first_phrase_only() {
        let desc = "recommended to upgrade to version 1.0.1. Alternatively recommended to upgrade to version 2.0.1.";
        assert_eq!(ExplicitUpgradeStrategy.extract(desc), vec!["1.0.1"]);
    }

    // ========== PatchBumpStrategy ==========

    #[test]
    fn test_bump_highest_mentioned_version() {
        let desc = "Affects versions 1.0.0 and 1.2.0 of the parser.";
        assert_eq!(PatchBumpStrategy.extract(desc), vec!["1.2.1"]);
    }

    #[test]
    fn test_bump_compares_numerically_not_lexically() {
        let desc = "Affects 1.10.0, 1.9.9 and 1.2.30.";
        assert_eq!(PatchBumpStrategy.extract(desc), vec!["1.10.1"]);
    }

    #[test]
    fn test_bump_max_need_not_be_last_mention() {
        let desc = "Fixed in 3.0.5; introduced in 2.1.0.";
        assert_eq!(PatchBumpStrategy.extract(desc), vec!["3.0.6"]);
    }

    #[test]
    fn test_bump_without_numeric_tokens_is_latest() {
        assert_eq!(PatchBumpStrategy.extract("No versions here."), vec!["latest"]);
        assert_eq!(PatchBumpStrategy.extract(""), vec!["latest"]);
    }

    #[test]
    fn test_bump_ignores_two_part_versions() {
        assert_eq!(PatchBumpStrategy.extract("Affects 1.2 and 3.4"), vec!["latest"]);
    }

    #[test]
    fn test_bump_leading_zeros_parse_numerically() {
        assert_eq!(PatchBumpStrategy.extract("Affects 01.02.003"), vec!["1.2.4"]);
    }

    #[test]
    fn test_bump_skips_overflowing_tokens() {
        let desc = "Build 99999999999999999999999.0.0 and 1.0.0";
        assert_eq!(PatchBumpStrategy.extract(desc), vec!["1.0.1"]);
    }
}
