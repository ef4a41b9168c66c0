//! Rewards API Handlers

use axum::{Json, extract::State};
use serde::Serialize;
use shared::loyalty::format_inr;
use shared::models::{RewardActivity, Role, WalletSummary};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::api::CurrentSession;
use crate::core::ServerState;
use crate::session::{SessionAction, SimulatedOp};

/// Points spent per redemption
pub const REDEEM_POINTS: i64 = 1000;
/// Wallet credit granted per redemption
pub const REDEEM_CREDIT: f64 = 200.0;

/// GET /api/rewards/history - 积分记录
pub async fn history(
    State(state): State<ServerState>,
    current: CurrentSession,
) -> AppResult<Json<Vec<RewardActivity>>> {
    current.session.require_role(&[Role::Customer])?;
    Ok(Json(state.fixtures.records.rewards_history.clone()))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RedeemReceipt {
    pub points_spent: i64,
    pub credit: f64,
    pub wallet: Option<WalletSummary>,
}

/// POST /api/rewards/redeem - 1000 积分兑换 ₹200 钱包余额
pub async fn redeem(
    State(state): State<ServerState>,
    current: CurrentSession,
) -> AppResult<Json<ApiResponse<RedeemReceipt>>> {
    current.session.require_role(&[Role::Customer])?;
    let points = current.session.wallet.map(|w| w.points).unwrap_or_default();
    if points < REDEEM_POINTS {
        return Err(AppError::new(ErrorCode::InsufficientPoints)
            .with_detail("required", REDEEM_POINTS)
            .with_detail("available", points));
    }

    let guard = state
        .run_simulated(current.id, SimulatedOp::RewardsRedeem)
        .await?;
    let session = guard.commit(SessionAction::AdjustWallet {
        balance_delta: REDEEM_CREDIT,
        points_delta: -REDEEM_POINTS,
    })?;

    tracing::info!(session_id = %current.id, points = REDEEM_POINTS, "Points redeemed");
    Ok(Json(ApiResponse::success_with_message(
        format!("{} added to your wallet", format_inr(REDEEM_CREDIT)),
        RedeemReceipt {
            points_spent: REDEEM_POINTS,
            credit: REDEEM_CREDIT,
            wallet: session.wallet,
        },
    )))
}
