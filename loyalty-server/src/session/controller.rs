//! Session state machine
//!
//! A session is a plain value. Every transition goes through
//! [`Session::apply`], which returns the next session or an error and never
//! mutates in place; the store swaps the whole value under one lock.

use std::collections::BTreeSet;

use serde::Serialize;
use shared::models::{Role, User, UserProfileUpdate, WalletSummary};
use shared::navigation::View;
use shared::util::now_millis;
use shared::{AppError, AppResult, ErrorCode};

use super::latency::SimulatedOp;

/// Operation currently running on the session (drives the loading spinner)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingOp {
    pub op: SimulatedOp,
    pub started_at: i64,
}

impl PendingOp {
    pub fn now(op: SimulatedOp) -> Self {
        Self {
            op,
            started_at: now_millis(),
        }
    }
}

/// OTP requested for a phone, awaiting verification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OtpChallenge {
    pub phone: String,
    pub role: Role,
}

/// One client's view of the application
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub identity: Option<User>,
    pub active_view: View,
    /// Brand shown to anonymous visitors and edited by super admins
    pub focused_brand_id: String,
    pub pending: Option<PendingOp>,
    pub otp: Option<OtpChallenge>,
    /// Customer balances, adjusted by redemptions within this session
    pub wallet: Option<WalletSummary>,
    /// Vouchers redeemed within this session
    pub redeemed_vouchers: BTreeSet<String>,
}

/// State transition
#[derive(Debug, Clone)]
pub enum SessionAction {
    Login {
        user: User,
        wallet: Option<WalletSummary>,
    },
    Logout,
    Navigate(View),
    /// Focus a brand and open its editor in one step
    EditLandingPage { brand_id: String },
    FocusBrand { brand_id: String },
    UpdateProfile(UserProfileUpdate),
    OtpSent(OtpChallenge),
    Begin(SimulatedOp),
    Complete(SimulatedOp),
    RedeemVoucher { voucher_id: String },
    AdjustWallet { balance_delta: f64, points_delta: i64 },
}

impl Session {
    /// Fresh anonymous session looking at `focused_brand_id`
    pub fn anonymous(focused_brand_id: impl Into<String>) -> Self {
        Self {
            identity: None,
            active_view: View::LandingPageView,
            focused_brand_id: focused_brand_id.into(),
            pending: None,
            otp: None,
            wallet: None,
            redeemed_vouchers: BTreeSet::new(),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(|u| u.role)
    }

    /// Logged-in user or `NotAuthenticated`
    pub fn require_identity(&self) -> AppResult<&User> {
        self.identity.as_ref().ok_or_else(AppError::not_authenticated)
    }

    /// Logged-in user holding one of `roles`
    pub fn require_role(&self, roles: &[Role]) -> AppResult<&User> {
        let user = self.require_identity()?;
        if !roles.contains(&user.role) {
            return Err(AppError::with_message(
                ErrorCode::RoleRequired,
                format!("{} cannot perform this action", user.role),
            )
            .with_detail("role", user.role.as_str()));
        }
        Ok(user)
    }

    /// Super admin, or the brand admin who owns `brand_id`
    pub fn require_brand_manager(&self, brand_id: &str) -> AppResult<&User> {
        let user = self.require_role(&[Role::SuperAdmin, Role::BrandAdmin])?;
        if user.role == Role::BrandAdmin && user.brand_id.as_deref() != Some(brand_id) {
            return Err(AppError::new(ErrorCode::BrandScopeDenied).with_detail("brand_id", brand_id));
        }
        Ok(user)
    }

    /// Compute the next session
    pub fn apply(&self, action: SessionAction) -> AppResult<Session> {
        let mut next = self.clone();
        match action {
            SessionAction::Login { user, wallet } => {
                if self.identity.is_some() {
                    return Err(AppError::new(ErrorCode::AlreadyAuthenticated));
                }
                if !user.has_valid_scope() {
                    return Err(AppError::validation("Brand admin must be bound to a brand")
                        .with_detail("user_id", user.id.clone()));
                }
                next.wallet = if user.role == Role::Customer { wallet } else { None };
                next.identity = Some(user);
                next.active_view = View::Dashboard;
                next.otp = None;
                next.pending = None;
            }
            SessionAction::Logout => {
                next.identity = None;
                next.active_view = View::LandingPageView;
                next.pending = None;
                next.otp = None;
                next.wallet = None;
                next.redeemed_vouchers.clear();
            }
            SessionAction::Navigate(view) => {
                self.require_identity()?;
                next.active_view = view;
            }
            SessionAction::EditLandingPage { brand_id } => {
                let user = self.require_identity()?;
                if user.role != Role::SuperAdmin {
                    return Err(AppError::new(ErrorCode::AdminRequired));
                }
                next.focused_brand_id = brand_id;
                next.active_view = View::LandingPage;
            }
            SessionAction::FocusBrand { brand_id } => {
                next.focused_brand_id = brand_id;
            }
            SessionAction::UpdateProfile(update) => {
                self.require_identity()?;
                if let Some(user) = next.identity.as_mut() {
                    user.apply(update);
                }
            }
            SessionAction::OtpSent(challenge) => {
                if self.identity.is_some() {
                    return Err(AppError::new(ErrorCode::AlreadyAuthenticated));
                }
                next.otp = Some(challenge);
            }
            SessionAction::Begin(op) => {
                if let Some(pending) = &self.pending {
                    return Err(AppError::invalid_request(format!(
                        "{} is still in progress",
                        pending.op
                    )));
                }
                next.pending = Some(PendingOp::now(op));
            }
            SessionAction::Complete(op) => {
                if self.pending.is_some_and(|p| p.op == op) {
                    next.pending = None;
                }
            }
            SessionAction::RedeemVoucher { voucher_id } => {
                self.require_identity()?;
                if !next.redeemed_vouchers.insert(voucher_id.clone()) {
                    return Err(AppError::new(ErrorCode::VoucherAlreadyRedeemed)
                        .with_detail("voucher_id", voucher_id));
                }
            }
            SessionAction::AdjustWallet {
                balance_delta,
                points_delta,
            } => {
                self.require_identity()?;
                let wallet = next.wallet.as_mut().ok_or_else(|| {
                    AppError::with_message(ErrorCode::FeatureNotAvailable, "No wallet on session")
                })?;
                let balance = wallet.balance + balance_delta;
                let points = wallet.points + points_delta;
                if balance < 0.0 {
                    return Err(AppError::new(ErrorCode::InsufficientBalance));
                }
                if points < 0 {
                    return Err(AppError::new(ErrorCode::InsufficientPoints));
                }
                wallet.balance = balance;
                wallet.points = points;
            }
        }
        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Tier;

    fn make_user(role: Role) -> User {
        User {
            id: "u1".into(),
            name: "Super Admin".into(),
            username: None,
            email: "admin@system.com".into(),
            mobile: "9999999999".into(),
            role,
            brand_id: (role == Role::BrandAdmin).then(|| "b1".to_string()),
            birthday: None,
            anniversary: None,
            marital_status: None,
            spouse_birthday: None,
            children: Vec::new(),
            preferences: None,
            tier: Tier::Platinum,
            profile_image: None,
            profile_complete: false,
        }
    }

    fn login(role: Role) -> Session {
        Session::anonymous("b1")
            .apply(SessionAction::Login {
                user: make_user(role),
                wallet: Some(WalletSummary {
                    balance: 12450.0,
                    bonus_balance: 1200.0,
                    points: 1240,
                }),
            })
            .unwrap()
    }

    #[test]
    fn test_login_resets_view_to_dashboard() {
        let session = login(Role::SuperAdmin);
        assert_eq!(session.active_view, View::Dashboard);
        assert!(session.wallet.is_none());
        assert_eq!(login(Role::Customer).wallet.unwrap().points, 1240);
    }

    #[test]
    fn test_login_twice_rejected() {
        let err = login(Role::Customer)
            .apply(SessionAction::Login {
                user: make_user(Role::Customer),
                wallet: None,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AlreadyAuthenticated);
    }

    #[test]
    fn test_brand_admin_without_brand_rejected() {
        let mut user = make_user(Role::BrandAdmin);
        user.brand_id = None;
        let err = Session::anonymous("b1")
            .apply(SessionAction::Login { user, wallet: None })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }

    #[test]
    fn test_logout_returns_to_public_landing() {
        let session = login(Role::SuperAdmin)
            .apply(SessionAction::EditLandingPage {
                brand_id: "b3".into(),
            })
            .unwrap()
            .apply(SessionAction::Begin(SimulatedOp::LandingPublish))
            .unwrap()
            .apply(SessionAction::Logout)
            .unwrap();
        assert!(session.identity.is_none());
        assert!(session.pending.is_none());
        assert_eq!(session.active_view, View::LandingPageView);
        assert_eq!(session.focused_brand_id, "b3");
    }

    #[test]
    fn test_navigate_requires_identity() {
        let err = Session::anonymous("b1")
            .apply(SessionAction::Navigate(View::Wallet))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotAuthenticated);
    }

    #[test]
    fn test_edit_landing_page_sets_both_fields() {
        let before = login(Role::SuperAdmin);
        let after = before
            .apply(SessionAction::EditLandingPage {
                brand_id: "b2".into(),
            })
            .unwrap();
        assert_eq!(after.focused_brand_id, "b2");
        assert_eq!(after.active_view, View::LandingPage);
        // the original value is untouched
        assert_eq!(before.focused_brand_id, "b1");
        assert_eq!(before.active_view, View::Dashboard);
    }

    #[test]
    fn test_edit_landing_page_super_admin_only() {
        let session = login(Role::BrandAdmin);
        let err = session
            .apply(SessionAction::EditLandingPage {
                brand_id: "b2".into(),
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::AdminRequired);
    }

    #[test]
    fn test_single_pending_op() {
        let session = login(Role::Customer)
            .apply(SessionAction::Begin(SimulatedOp::RewardsRedeem))
            .unwrap();
        assert!(
            session
                .apply(SessionAction::Begin(SimulatedOp::ScanPay))
                .is_err()
        );
        // completing a different op leaves the flag alone
        let same = session
            .apply(SessionAction::Complete(SimulatedOp::ScanPay))
            .unwrap();
        assert!(same.pending.is_some());
        let done = session
            .apply(SessionAction::Complete(SimulatedOp::RewardsRedeem))
            .unwrap();
        assert!(done.pending.is_none());
    }

    #[test]
    fn test_voucher_redeemed_once() {
        let session = login(Role::Customer)
            .apply(SessionAction::RedeemVoucher {
                voucher_id: "v1".into(),
            })
            .unwrap();
        let err = session
            .apply(SessionAction::RedeemVoucher {
                voucher_id: "v1".into(),
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::VoucherAlreadyRedeemed);
    }

    #[test]
    fn test_adjust_wallet_bounds() {
        let session = login(Role::Customer);
        let next = session
            .apply(SessionAction::AdjustWallet {
                balance_delta: 100.0,
                points_delta: -1000,
            })
            .unwrap();
        let wallet = next.wallet.unwrap();
        assert_eq!(wallet.balance, 12550.0);
        assert_eq!(wallet.points, 240);

        let err = next
            .apply(SessionAction::AdjustWallet {
                balance_delta: 0.0,
                points_delta: -1000,
            })
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::InsufficientPoints);
    }

    #[test]
    fn test_require_role() {
        let session = login(Role::Customer);
        assert!(session.require_role(&[Role::Customer]).is_ok());
        let err = session.require_role(&[Role::BrandAdmin]).unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleRequired);
    }

    #[test]
    fn test_brand_manager_scope() {
        assert!(login(Role::SuperAdmin).require_brand_manager("b3").is_ok());
        let admin = login(Role::BrandAdmin);
        assert!(admin.require_brand_manager("b1").is_ok());
        let err = admin.require_brand_manager("b2").unwrap_err();
        assert_eq!(err.code, ErrorCode::BrandScopeDenied);
        let err = login(Role::Customer).require_brand_manager("b1").unwrap_err();
        assert_eq!(err.code, ErrorCode::RoleRequired);
    }
}
