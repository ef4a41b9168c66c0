//! Campaign audience estimate
//!
//! Presentation heuristic, not a real audience query. Starts from a fixed
//! population and scales it by fixed multipliers per active filter. Every
//! multiplier is at most 1.0, so no filter combination exceeds the baseline.

use serde::{Deserialize, Serialize};

use crate::models::{Dietary, Tier};

/// Reachable population with no filters
pub const BASE_AUDIENCE: u64 = 12_402;

const DIETARY_FACTOR: f64 = 0.6;
const PER_INTEREST_FACTOR: f64 = 0.15;
const PER_TIER_FACTOR: f64 = 0.3;

/// Interests selectable in the campaign composer and signup
pub const AVAILABLE_INTERESTS: &[(&str, &str)] = &[
    ("spa", "Spa & Wellness"),
    ("haircare", "Haircare"),
    ("seafood", "Seafood"),
    ("wine", "Wine & Spirits"),
    ("music", "Live Music"),
    ("gym", "Fitness/Gym"),
    ("poolside", "Poolside"),
    ("fine-dining", "Fine Dining"),
];

/// Campaign targeting filters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudienceFilter {
    /// `None` targets every diet
    pub dietary: Option<Dietary>,
    pub interests: Vec<String>,
    pub tiers: Vec<Tier>,
}

impl Default for AudienceFilter {
    fn default() -> Self {
        Self {
            dietary: None,
            interests: Vec::new(),
            tiers: Tier::ALL.to_vec(),
        }
    }
}

impl AudienceFilter {
    fn distinct_tiers(&self) -> usize {
        Tier::ALL.iter().filter(|t| self.tiers.contains(t)).count()
    }
}

/// Estimated number of recipients for a filter set
pub fn estimate_audience(filter: &AudienceFilter) -> u64 {
    let mut reach = BASE_AUDIENCE as f64;

    if filter.dietary.is_some() {
        reach *= DIETARY_FACTOR;
    }
    if !filter.interests.is_empty() {
        reach *= (filter.interests.len() as f64 * PER_INTEREST_FACTOR).min(1.0);
    }
    let tiers = filter.distinct_tiers();
    if tiers < Tier::ALL.len() {
        reach *= tiers as f64 * PER_TIER_FACTOR;
    }

    reach.floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn interests(n: usize) -> Vec<String> {
        AVAILABLE_INTERESTS
            .iter()
            .take(n)
            .map(|(id, _)| id.to_string())
            .collect()
    }

    #[test]
    fn test_baseline() {
        assert_eq!(estimate_audience(&AudienceFilter::default()), BASE_AUDIENCE);
    }

    #[test]
    fn test_dietary_filter() {
        let filter = AudienceFilter {
            dietary: Some(Dietary::Veg),
            ..Default::default()
        };
        // 12402 * 0.6 = 7441.2
        assert_eq!(estimate_audience(&filter), 7441);
    }

    #[test]
    fn test_interest_and_tier_filters() {
        let filter = AudienceFilter {
            dietary: None,
            interests: interests(2),
            tiers: vec![Tier::Gold, Tier::Platinum],
        };
        // 12402 * 0.3 * 0.6 = 2232.36
        assert_eq!(estimate_audience(&filter), 2232);
    }

    #[test]
    fn test_no_tiers_reaches_nobody() {
        let filter = AudienceFilter {
            tiers: Vec::new(),
            ..Default::default()
        };
        assert_eq!(estimate_audience(&filter), 0);
    }

    #[test]
    fn test_duplicate_tiers_not_double_counted() {
        let filter = AudienceFilter {
            tiers: vec![Tier::Gold, Tier::Gold, Tier::Gold],
            ..Default::default()
        };
        assert_eq!(estimate_audience(&filter), (12_402.0_f64 * 0.3).floor() as u64);
    }

    #[test]
    fn test_never_exceeds_baseline() {
        for diet in [None, Some(Dietary::Veg), Some(Dietary::NonVeg)] {
            for n in 0..=AVAILABLE_INTERESTS.len() {
                for tiers in 0..=3 {
                    let filter = AudienceFilter {
                        dietary: diet,
                        interests: interests(n),
                        tiers: Tier::ALL[..tiers].to_vec(),
                    };
                    assert!(estimate_audience(&filter) <= BASE_AUDIENCE);
                }
            }
        }
    }

    #[test]
    fn test_adding_dietary_filter_never_increases() {
        for n in 0..=AVAILABLE_INTERESTS.len() {
            let open = AudienceFilter {
                interests: interests(n),
                ..Default::default()
            };
            let narrowed = AudienceFilter {
                dietary: Some(Dietary::NonVeg),
                ..open.clone()
            };
            assert!(estimate_audience(&narrowed) <= estimate_audience(&open));
        }
    }
}
