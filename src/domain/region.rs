//! Maps free-text location input to a regional sales profile.

use serde::{Deserialize, Serialize};

use super::error::CatalogError;

pub const NATIONAL_REGION: &str = "National";

/// Named multiplier set scaling national sales to one market.
///
/// Multipliers are positional: index `i` applies to catalog record `i`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionProfile {
    pub name: String,
    pub multipliers: Vec<f64>,
}

impl RegionProfile {
    /// Identity profile: every multiplier is 1.0.
    pub fn national(len: usize) -> Self {
        Self {
            name: NATIONAL_REGION.to_string(),
            multipliers: vec![1.0; len],
        }
    }

    pub fn is_national(&self) -> bool {
        self.name == NATIONAL_REGION
    }

    /// Multiplier for the record at `position`; missing entries act as identity.
    pub fn multiplier(&self, position: usize) -> f64 {
        self.multipliers.get(position).copied().unwrap_or(1.0)
    }
}

/// One entry of the ordered resolver table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionRule {
    pub name: String,
    /// Lowercase substrings; any hit selects this rule.
    pub keywords: Vec<String>,
    pub multipliers: Vec<f64>,
}

impl RegionRule {
    fn matches(&self, normalized: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized.contains(keyword.as_str()))
    }
}

/// Ordered (predicate, profile) table, evaluated first-match-wins.
#[derive(Clone, Debug)]
pub struct RegionResolver {
    rules: Vec<(RegionRule, RegionProfile)>,
    national: RegionProfile,
}

impl RegionResolver {
    /// Builds the table for a catalog of `catalog_len` records.
    pub fn new(rules: Vec<RegionRule>, catalog_len: usize) -> Result<Self, CatalogError> {
        let mut table = Vec::with_capacity(rules.len());

        for mut rule in rules {
            if rule.keywords.iter().all(|keyword| keyword.trim().is_empty()) {
                return Err(CatalogError::NoKeywords(rule.name));
            }
            if rule.multipliers.len() != catalog_len {
                return Err(CatalogError::RegionLength {
                    region: rule.name,
                    expected: catalog_len,
                    found: rule.multipliers.len(),
                });
            }
            if let Some(index) = rule
                .multipliers
                .iter()
                .position(|value| !value.is_finite() || *value <= 0.0)
            {
                return Err(CatalogError::InvalidMultiplier {
                    region: rule.name,
                    index,
                });
            }

            rule.keywords = rule
                .keywords
                .iter()
                .map(|keyword| keyword.trim().to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect();

            let profile = RegionProfile {
                name: rule.name.clone(),
                multipliers: rule.multipliers.clone(),
            };
            table.push((rule, profile));
        }

        Ok(Self {
            rules: table,
            national: RegionProfile::national(catalog_len),
        })
    }

    /// Resolves location text. Unrecognised text falls back to National.
    pub fn resolve(&self, raw_location: &str) -> &RegionProfile {
        let normalized = raw_location.trim().to_lowercase();

        self.rules
            .iter()
            .find(|(rule, _)| rule.matches(&normalized))
            .map(|(_, profile)| profile)
            .unwrap_or(&self.national)
    }

    pub fn national(&self) -> &RegionProfile {
        &self.national
    }

    pub fn rules(&self) -> impl Iterator<Item = &RegionRule> {
        self.rules.iter().map(|(rule, _)| rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(name: &str, keywords: &[&str], multipliers: &[f64]) -> RegionRule {
        RegionRule {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            multipliers: multipliers.to_vec(),
        }
    }

    fn resolver() -> RegionResolver {
        RegionResolver::new(
            vec![
                rule("California/West Coast", &["ca", "california"], &[0.8, 1.3]),
                rule("Texas/South", &["tx", "texas"], &[1.3, 0.9]),
                rule("Florida", &["fl", "florida"], &[1.2, 1.1]),
            ],
            2,
        )
        .unwrap()
    }

    #[test]
    fn test_matches_keyword_case_insensitively() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("California rules").name, "California/West Coast");
        assert_eq!(resolver.resolve("  TX  ").name, "Texas/South");
        assert_eq!(resolver.resolve("Miami, FL").name, "Florida");
    }

    #[test]
    fn test_first_match_wins() {
        let resolver = resolver();
        assert_eq!(resolver.resolve("tx or ca").name, "California/West Coast");
        assert_eq!(resolver.resolve("florida via texas").name, "Texas/South");
    }

    #[test]
    fn test_unknown_text_is_national_identity() {
        let resolver = resolver();
        let profile = resolver.resolve("unknown place");
        assert!(profile.is_national());
        assert_eq!(profile.multipliers, vec![1.0, 1.0]);
        assert!(resolver.resolve("").is_national());
    }

    #[test]
    fn test_keyword_is_a_plain_substring() {
        // "chicago" contains "ca"
        assert_eq!(resolver().resolve("Chicago").name, "California/West Coast");
    }

    #[test]
    fn test_rejects_wrong_multiplier_count() {
        let err = RegionResolver::new(vec![rule("Short", &["s"], &[1.0])], 2).unwrap_err();
        assert_eq!(
            err,
            CatalogError::RegionLength {
                region: "Short".to_string(),
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn test_rejects_non_positive_multiplier() {
        let err = RegionResolver::new(vec![rule("Zero", &["z"], &[1.0, 0.0])], 2).unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidMultiplier {
                region: "Zero".to_string(),
                index: 1,
            }
        );
    }

    #[test]
    fn test_rejects_rule_without_keywords() {
        let err = RegionResolver::new(vec![rule("Blank", &["  "], &[1.0, 1.0])], 2).unwrap_err();
        assert_eq!(err, CatalogError::NoKeywords("Blank".to_string()));
    }
}
