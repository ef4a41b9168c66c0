//! Simulated latency
//!
//! Cosmetic actions pause before they complete, the way the demo UI shows a
//! spinner. Every pause races the owning session's cancellation token, so a
//! logout ends the wait early and the completion is never committed.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use shared::{AppError, AppResult};
use tokio_util::sync::CancellationToken;

/// Operation shown as "in progress" on a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulatedOp {
    Login,
    CredentialCheck,
    OtpSend,
    OtpVerify,
    Signup,
    ProfileSave,
    LandingPublish,
    RedemptionVerify,
    CampaignSend,
    Payouts,
    RewardsRedeem,
    VoucherRedeem,
    ManualDeduction,
    ScanPay,
}

impl SimulatedOp {
    /// Unscaled delay in milliseconds
    pub const fn base_delay_ms(self) -> u64 {
        match self {
            Self::Login => 600,
            Self::CredentialCheck => 1000,
            Self::OtpSend => 1200,
            Self::OtpVerify => 1000,
            Self::Signup => 1500,
            Self::ProfileSave => 1200,
            Self::LandingPublish => 1500,
            Self::RedemptionVerify => 1500,
            Self::CampaignSend => 2000,
            Self::Payouts => 2500,
            Self::RewardsRedeem => 2000,
            Self::VoucherRedeem => 1500,
            Self::ManualDeduction => 1500,
            // scan 2000 + pay 1500
            Self::ScanPay => 3500,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::CredentialCheck => "credential_check",
            Self::OtpSend => "otp_send",
            Self::OtpVerify => "otp_verify",
            Self::Signup => "signup",
            Self::ProfileSave => "profile_save",
            Self::LandingPublish => "landing_publish",
            Self::RedemptionVerify => "redemption_verify",
            Self::CampaignSend => "campaign_send",
            Self::Payouts => "payouts",
            Self::RewardsRedeem => "rewards_redeem",
            Self::VoucherRedeem => "voucher_redeem",
            Self::ManualDeduction => "manual_deduction",
            Self::ScanPay => "scan_pay",
        }
    }
}

impl std::fmt::Display for SimulatedOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wait `delay`, or fail with `OperationCancelled` once `token` fires.
pub async fn simulate(token: &CancellationToken, op: SimulatedOp, delay: Duration) -> AppResult<()> {
    if token.is_cancelled() {
        return Err(AppError::cancelled(op.as_str()));
    }
    if delay.is_zero() {
        return Ok(());
    }

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            tracing::debug!(op = %op, "Simulated operation cancelled");
            Err(AppError::cancelled(op.as_str()))
        }
        _ = tokio::time::sleep(delay) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    #[tokio::test]
    async fn test_zero_delay_completes() {
        let token = CancellationToken::new();
        simulate(&token, SimulatedOp::Payouts, Duration::ZERO)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_cancel_interrupts_wait() {
        let token = CancellationToken::new();
        let child = token.clone();
        let handle = tokio::spawn(async move {
            simulate(&child, SimulatedOp::CampaignSend, Duration::from_secs(60)).await
        });
        token.cancel();
        let err = handle.await.unwrap().unwrap_err();
        assert_eq!(err.code, ErrorCode::OperationCancelled);
    }

    #[tokio::test]
    async fn test_already_cancelled_fails_fast() {
        let token = CancellationToken::new();
        token.cancel();
        let err = simulate(&token, SimulatedOp::Login, Duration::ZERO)
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::OperationCancelled);
    }

    #[test]
    fn test_delays_match_ui() {
        assert_eq!(SimulatedOp::Login.base_delay_ms(), 600);
        assert_eq!(SimulatedOp::Payouts.base_delay_ms(), 2500);
        assert_eq!(SimulatedOp::ScanPay.base_delay_ms(), 3500);
    }
}
