//! Display-only records
//!
//! Fixed demo rows shown by wallet, voucher, rewards and customer screens.
//! They have no lifecycle beyond transient per-session flags.

use serde::{Deserialize, Serialize};

use super::user::Tier;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LedgerDirection {
    Credit,
    Debit,
}

/// Wallet ledger filter
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LedgerFilter {
    #[default]
    All,
    Credit,
    Debit,
}

impl LedgerFilter {
    pub fn matches(&self, direction: LedgerDirection) -> bool {
        match self {
            Self::All => true,
            Self::Credit => direction == LedgerDirection::Credit,
            Self::Debit => direction == LedgerDirection::Debit,
        }
    }
}

/// Wallet ledger row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub id: String,
    pub description: String,
    /// ISO date
    pub date: String,
    /// Signed amount (debits negative)
    pub amount: f64,
    pub bonus: f64,
    #[serde(rename = "type")]
    pub direction: LedgerDirection,
    pub brand: String,
    pub reference: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettlementStatus {
    Pending,
    Paid,
}

/// Brand settlement row (super admin wallet screen)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settlement {
    pub id: String,
    pub brand: String,
    pub processed: f64,
    pub fee: f64,
    pub payable: f64,
    pub status: SettlementStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoucherStatus {
    Active,
    Redeemed,
    Expired,
}

/// Customer voucher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voucher {
    pub id: String,
    pub name: String,
    pub code: String,
    pub expiry: String,
    pub brand: String,
    pub status: VoucherStatus,
}

/// Prepaid service pack
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    pub name: String,
    pub used: u32,
    pub total: u32,
    pub brand: String,
    pub expiry: String,
}

impl Subscription {
    pub fn remaining(&self) -> u32 {
        self.total.saturating_sub(self.used)
    }
}

/// Row of the customer directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: String,
    pub name: String,
    pub tier: Tier,
    pub email: String,
    pub phone: String,
    /// Display text, e.g. `₹42,500`
    pub spent: String,
    pub visits: u32,
    pub last_visit: String,
}

impl CustomerRecord {
    /// Case-insensitive match on name, email, or phone
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.phone.contains(&term)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedemptionOutcome {
    Success,
    Expired,
}

/// Brand admin redemption log row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionLogEntry {
    pub id: String,
    pub customer: String,
    pub offer: String,
    pub time: String,
    pub status: RedemptionOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RewardActivityKind {
    Earn,
    Redeem,
}

/// Points history row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardActivity {
    pub id: String,
    pub action: String,
    /// Signed points
    pub points: i64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: RewardActivityKind,
}

/// Wallet balances shown on the customer dashboard
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletSummary {
    pub balance: f64,
    pub bonus_balance: f64,
    pub points: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_filter() {
        assert!(LedgerFilter::All.matches(LedgerDirection::Debit));
        assert!(LedgerFilter::Credit.matches(LedgerDirection::Credit));
        assert!(!LedgerFilter::Credit.matches(LedgerDirection::Debit));
        assert!(!LedgerFilter::Debit.matches(LedgerDirection::Credit));
    }

    #[test]
    fn test_subscription_remaining() {
        let sub = Subscription {
            id: "s1".into(),
            name: "Morning Coffee Pack".into(),
            used: 3,
            total: 10,
            brand: "Nine Blue".into(),
            expiry: "15 Jan 2025".into(),
        };
        assert_eq!(sub.remaining(), 7);
    }

    #[test]
    fn test_customer_search() {
        let row = CustomerRecord {
            id: "1".into(),
            name: "Alice Johnson".into(),
            tier: Tier::Platinum,
            email: "alice@example.com".into(),
            phone: "9876543210".into(),
            spent: "₹42,500".into(),
            visits: 24,
            last_visit: "2 hours ago".into(),
        };
        assert!(row.matches("alice"));
        assert!(row.matches("EXAMPLE.COM"));
        assert!(row.matches("98765"));
        assert!(row.matches("  "));
        assert!(!row.matches("bob"));
    }
}
