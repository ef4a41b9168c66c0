//! Loyalty calculations
//!
//! Pure functions used by admin previews and customer screens.

pub mod audience;
pub mod bonus;
pub mod money;
pub mod points;

pub use audience::{AVAILABLE_INTERESTS, AudienceFilter, BASE_AUDIENCE, estimate_audience};
pub use bonus::{BonusSlab, SlabPreview, TopUpPreview, slab_preview, topup_preview};
pub use money::{format_inr, parse_amount, to_decimal, to_f64};
pub use points::{
    LoyaltyRules, MAX_POINTS_EARNING_RATE, TierBenefits, points_for_spend, points_value,
};
