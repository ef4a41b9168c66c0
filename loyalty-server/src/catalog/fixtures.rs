//! Seed data
//!
//! The demo runs on a fixed catalog embedded at compile time. Parsing happens
//! once at startup; a malformed fixture aborts boot.

use serde::Deserialize;
use shared::models::{
    Brand, CustomerRecord, LedgerEntry, RedemptionLogEntry, RewardActivity, Settlement,
    Subscription, User, Voucher, WalletSummary,
};

use crate::core::Result;

const BRANDS_JSON: &str = include_str!("../../fixtures/brands.json");
const USERS_JSON: &str = include_str!("../../fixtures/users.json");
const RECORDS_JSON: &str = include_str!("../../fixtures/records.json");

/// Display-only rows shown by the leaf screens
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Records {
    pub ledger: Vec<LedgerEntry>,
    pub settlements: Vec<Settlement>,
    pub vouchers: Vec<Voucher>,
    pub subscriptions: Vec<Subscription>,
    pub customers: Vec<CustomerRecord>,
    pub redemption_log: Vec<RedemptionLogEntry>,
    pub rewards_history: Vec<RewardActivity>,
    pub wallet: WalletSummary,
}

/// Everything the server is seeded with
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub brands: Vec<Brand>,
    pub users: Vec<User>,
    pub records: Records,
}

impl Fixtures {
    /// Parse the embedded seed files
    pub fn load() -> Result<Self> {
        let brands: Vec<Brand> = serde_json::from_str(BRANDS_JSON)?;
        let users: Vec<User> = serde_json::from_str(USERS_JSON)?;
        let records: Records = serde_json::from_str(RECORDS_JSON)?;

        if brands.is_empty() {
            return Err(crate::core::ServerError::Config(
                "brand catalog must not be empty".into(),
            ));
        }
        if let Some(user) = users.iter().find(|u| !u.has_valid_scope()) {
            return Err(crate::core::ServerError::Config(format!(
                "brand admin {} has no brand",
                user.id
            )));
        }

        tracing::debug!(
            brands = brands.len(),
            users = users.len(),
            customers = records.customers.len(),
            "Fixtures loaded"
        );

        Ok(Self {
            brands,
            users,
            records,
        })
    }

    /// First seeded user holding `role`
    pub fn user_for_role(&self, role: shared::models::Role) -> Option<&User> {
        self.users.iter().find(|u| u.role == role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{BrandKind, Role, VoucherStatus};

    #[test]
    fn test_seed_catalog_order() {
        let fixtures = Fixtures::load().unwrap();
        let ids: Vec<_> = fixtures.brands.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b1", "b2", "b3"]);
        assert_eq!(fixtures.brands[0].kind, BrandKind::Restaurant);
        assert_eq!(fixtures.brands[1].topup_bonus_percentage, 15.0);
        assert_eq!(fixtures.brands[2].topup_bonus_percentage, 5.0);
    }

    #[test]
    fn test_every_brand_has_landing_page() {
        let fixtures = Fixtures::load().unwrap();
        for brand in &fixtures.brands {
            assert!(!brand.landing_page.hero_title.is_empty(), "{}", brand.id);
            assert_eq!(brand.landing_page.redemption_steps.len(), 3);
        }
    }

    #[test]
    fn test_user_per_role() {
        let fixtures = Fixtures::load().unwrap();
        let admin = fixtures.user_for_role(Role::BrandAdmin).unwrap();
        assert_eq!(admin.brand_id.as_deref(), Some("b1"));
        assert_eq!(fixtures.user_for_role(Role::Customer).unwrap().id, "u3");
    }

    #[test]
    fn test_records() {
        let records = Fixtures::load().unwrap().records;
        assert_eq!(records.ledger.len(), 4);
        assert_eq!(records.customers.len(), 5);
        assert_eq!(records.vouchers[2].status, VoucherStatus::Expired);
        assert_eq!(records.wallet.points, 1240);
    }
}
