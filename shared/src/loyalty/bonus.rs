//! Wallet top-up bonus calculations
//!
//! - Flat percentage: `bonus = principal * pct / 100`, `total = principal + bonus`
//! - Slab preview: `bonus = wallet_credit - amount_paid`,
//!   `percentage = bonus / amount_paid * 100`

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};

use super::money::{parse_amount, to_decimal, to_f64};

/// Result of a flat-percentage top-up
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUpPreview {
    pub amount: f64,
    pub bonus_percentage: f64,
    pub bonus: f64,
    pub total_credited: f64,
}

/// Top-up preview for a principal and a brand bonus percentage.
///
/// Returns `None` for non-positive principals and for amounts the decimal
/// maths cannot represent (nothing to preview). A zero, negative or
/// non-finite percentage yields zero bonus.
pub fn topup_preview(principal: f64, bonus_percentage: f64) -> Option<TopUpPreview> {
    let pct = if bonus_percentage.is_finite() {
        bonus_percentage.max(0.0)
    } else {
        0.0
    };

    let amount = to_decimal(principal)?;
    if amount <= Decimal::ZERO {
        return None;
    }
    let bonus = amount
        .checked_mul(to_decimal(pct)?)?
        .checked_div(Decimal::ONE_HUNDRED)?;
    let total = amount.checked_add(bonus)?;

    Some(TopUpPreview {
        amount: to_f64(amount),
        bonus_percentage: pct,
        bonus: to_f64(bonus),
        total_credited: to_f64(total),
    })
}

/// A wallet bonus slab: pay `amount_paid`, receive `wallet_value` credit.
///
/// Both fields are raw form text, matching what the wizard submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BonusSlab {
    #[serde(default)]
    pub id: String,
    pub amount_paid: String,
    pub wallet_value: String,
}

/// Preview of one bonus slab
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabPreview {
    pub bonus: f64,
    /// Unrounded percentage (2dp)
    pub percentage: f64,
    /// Whole-percent label, e.g. `20%`
    pub percentage_label: String,
}

/// Slab preview, absent when either field is non-numeric, out of decimal
/// range, or `amount_paid <= 0` once converted.
pub fn slab_preview(amount_paid: &str, wallet_value: &str) -> Option<SlabPreview> {
    let paid = to_decimal(parse_amount(amount_paid)?)?;
    let credit = to_decimal(parse_amount(wallet_value)?)?;
    if paid <= Decimal::ZERO {
        return None;
    }

    let bonus = credit.checked_sub(paid)?;
    let percentage = bonus
        .checked_div(paid)?
        .checked_mul(Decimal::ONE_HUNDRED)?;
    let whole = percentage.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    Some(SlabPreview {
        bonus: to_f64(bonus),
        percentage: to_f64(percentage),
        percentage_label: format!("{}%", whole.normalize()),
    })
}

impl BonusSlab {
    pub fn preview(&self) -> Option<SlabPreview> {
        slab_preview(&self.amount_paid, &self.wallet_value)
    }
}
