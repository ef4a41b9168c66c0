//! Points and tier rules

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::money::{to_decimal, to_f64};
use crate::models::Tier;

/// Spend unit for earning: points accrue per ₹100
pub const SPEND_PER_POINT_UNIT: i64 = 100;
/// Redemption ratio: 100 points are worth ₹10 of wallet credit
pub const POINTS_PER_REDEMPTION_UNIT: i64 = 100;
pub const RUPEES_PER_REDEMPTION_UNIT: i64 = 10;
/// Upper bound for a brand's points earning rate
pub const MAX_POINTS_EARNING_RATE: f64 = 100.0;
/// Wallet bonus only applies to top-ups above this amount
pub const MIN_BONUS_TOPUP: f64 = 1000.0;

/// Benefits attached to a membership tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierBenefits {
    pub tier: Tier,
    /// Extra wallet bonus percentage
    pub bonus: f64,
    /// Points multiplier applied on top of the brand earning rate
    pub points_rate: f64,
    /// Lifetime spend needed to reach the tier (`None` = automatic)
    pub spend_threshold: Option<f64>,
}

impl Tier {
    pub fn benefits(&self) -> TierBenefits {
        match self {
            Tier::Silver => TierBenefits {
                tier: *self,
                bonus: 5.0,
                points_rate: 1.0,
                spend_threshold: None,
            },
            Tier::Gold => TierBenefits {
                tier: *self,
                bonus: 10.0,
                points_rate: 1.5,
                spend_threshold: Some(25_000.0),
            },
            Tier::Platinum => TierBenefits {
                tier: *self,
                bonus: 20.0,
                points_rate: 2.0,
                spend_threshold: Some(100_000.0),
            },
        }
    }

    /// Highest tier whose spend threshold is met
    pub fn for_lifetime_spend(spend: f64) -> Tier {
        Tier::ALL
            .iter()
            .rev()
            .copied()
            .find(|t| {
                t.benefits()
                    .spend_threshold
                    .is_none_or(|threshold| spend >= threshold)
            })
            .unwrap_or(Tier::Silver)
    }
}

/// Points earned for a purchase.
///
/// `floor(spend / 100 * brand_rate * tier_multiplier)`; zero for
/// non-positive spend or rate, and for results the decimal maths cannot
/// represent.
pub fn points_for_spend(spend: f64, brand_rate: f64, tier: Tier) -> i64 {
    earned_points(spend, brand_rate, tier).unwrap_or_else(|| {
        if spend > 0.0 && brand_rate > 0.0 {
            tracing::warn!(spend, brand_rate, "Points calculation out of range");
        }
        0
    })
}

fn earned_points(spend: f64, brand_rate: f64, tier: Tier) -> Option<i64> {
    let spend = to_decimal(spend)?;
    let rate = to_decimal(brand_rate)?;
    if spend <= Decimal::ZERO || rate <= Decimal::ZERO {
        return None;
    }
    let earned = spend
        .checked_div(Decimal::from(SPEND_PER_POINT_UNIT))?
        .checked_mul(rate)?
        .checked_mul(to_decimal(tier.benefits().points_rate)?)?;
    earned.floor().to_i64()
}

/// Wallet value of a points balance
pub fn points_value(points: i64) -> f64 {
    if points <= 0 {
        return 0.0;
    }
    let value = Decimal::from(points) / Decimal::from(POINTS_PER_REDEMPTION_UNIT)
        * Decimal::from(RUPEES_PER_REDEMPTION_UNIT);
    to_f64(value)
}

/// Loyalty rules shown on the settings screen
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyRules {
    pub spend_per_point: i64,
    pub points_per_redemption_unit: i64,
    pub rupees_per_redemption_unit: i64,
    pub min_bonus_topup: f64,
    pub default_points_expiry_months: u32,
    pub tiers: Vec<TierBenefits>,
}

impl Default for LoyaltyRules {
    fn default() -> Self {
        Self {
            spend_per_point: SPEND_PER_POINT_UNIT,
            points_per_redemption_unit: POINTS_PER_REDEMPTION_UNIT,
            rupees_per_redemption_unit: RUPEES_PER_REDEMPTION_UNIT,
            min_bonus_topup: MIN_BONUS_TOPUP,
            default_points_expiry_months: 12,
            tiers: Tier::ALL.iter().map(Tier::benefits).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_points_for_scan_and_pay() {
        // ₹1,240 at Nine Blue (rate 1) as Silver -> 12 points
        assert_eq!(points_for_spend(1240.0, 1.0, Tier::Silver), 12);
    }

    #[test]
    fn test_points_apply_tier_multiplier() {
        // 3500 / 100 * 1.5 * 2.0 = 105
        assert_eq!(points_for_spend(3500.0, 1.5, Tier::Platinum), 105);
        // 1000 / 100 * 0.5 * 1.5 = 7.5 -> 7
        assert_eq!(points_for_spend(1000.0, 0.5, Tier::Gold), 7);
    }

    #[test]
    fn test_points_for_invalid_spend() {
        assert_eq!(points_for_spend(0.0, 1.0, Tier::Silver), 0);
        assert_eq!(points_for_spend(-100.0, 1.0, Tier::Silver), 0);
        assert_eq!(points_for_spend(f64::NAN, 1.0, Tier::Silver), 0);
        assert_eq!(points_for_spend(1000.0, 0.0, Tier::Silver), 0);
    }

    #[test]
    fn test_points_out_of_range_is_zero() {
        assert_eq!(points_for_spend(1e30, 1.0, Tier::Silver), 0);
        assert_eq!(points_for_spend(5e28, 1e28, Tier::Platinum), 0);
        assert_eq!(points_for_spend(1e25, 1e10, Tier::Silver), 0);
    }

    #[test]
    fn test_points_value() {
        assert_eq!(points_value(100), 10.0);
        assert_eq!(points_value(1240), 124.0);
        assert_eq!(points_value(55), 5.5);
        assert_eq!(points_value(-5), 0.0);
    }

    #[test]
    fn test_tier_for_spend() {
        assert_eq!(Tier::for_lifetime_spend(0.0), Tier::Silver);
        assert_eq!(Tier::for_lifetime_spend(24_999.0), Tier::Silver);
        assert_eq!(Tier::for_lifetime_spend(25_000.0), Tier::Gold);
        assert_eq!(Tier::for_lifetime_spend(100_000.0), Tier::Platinum);
    }

    #[test]
    fn test_rules_list_all_tiers() {
        let rules = LoyaltyRules::default();
        assert_eq!(rules.tiers.len(), 3);
        assert_eq!(rules.tiers[1].bonus, 10.0);
    }
}
