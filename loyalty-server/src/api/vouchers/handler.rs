//! Voucher API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Role, Voucher, VoucherStatus};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::api::CurrentSession;
use crate::core::ServerState;
use crate::session::{Session, SessionAction, SimulatedOp};

/// Fixture voucher with this session's redemptions applied
fn with_session_status(voucher: &Voucher, session: &Session) -> Voucher {
    let mut voucher = voucher.clone();
    if session.redeemed_vouchers.contains(&voucher.id) {
        voucher.status = VoucherStatus::Redeemed;
    }
    voucher
}

/// GET /api/vouchers - 我的优惠券
pub async fn list(
    State(state): State<ServerState>,
    current: CurrentSession,
) -> AppResult<Json<Vec<Voucher>>> {
    current.session.require_role(&[Role::Customer])?;
    let vouchers = state
        .fixtures
        .records
        .vouchers
        .iter()
        .map(|v| with_session_status(v, &current.session))
        .collect();
    Ok(Json(vouchers))
}

/// POST /api/vouchers/:id/redeem - 核销优惠券
pub async fn redeem(
    State(state): State<ServerState>,
    current: CurrentSession,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Voucher>>> {
    current.session.require_role(&[Role::Customer])?;
    let voucher = state
        .fixtures
        .records
        .vouchers
        .iter()
        .find(|v| v.id == id)
        .ok_or_else(|| AppError::new(ErrorCode::VoucherNotFound).with_detail("voucher_id", id.clone()))?;

    match with_session_status(voucher, &current.session).status {
        VoucherStatus::Expired => {
            return Err(AppError::new(ErrorCode::VoucherExpired).with_detail("voucher_id", id));
        }
        VoucherStatus::Redeemed => {
            return Err(
                AppError::new(ErrorCode::VoucherAlreadyRedeemed).with_detail("voucher_id", id)
            );
        }
        VoucherStatus::Active => {}
    }

    let guard = state
        .run_simulated(current.id, SimulatedOp::VoucherRedeem)
        .await?;
    let session = guard.commit(SessionAction::RedeemVoucher {
        voucher_id: voucher.id.clone(),
    })?;

    tracing::info!(session_id = %current.id, voucher_id = %voucher.id, "Voucher redeemed");
    Ok(Json(ApiResponse::success_with_message(
        format!("{} redeemed", voucher.name),
        with_session_status(voucher, &session),
    )))
}
