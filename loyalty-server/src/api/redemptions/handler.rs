//! Redemption API Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::models::{RedemptionLogEntry, Role, VoucherStatus};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::api::CurrentSession;
use crate::core::ServerState;
use crate::security_log;
use crate::session::SimulatedOp;

#[derive(Debug, Deserialize)]
pub struct VerifyRequest {
    pub code: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifiedRedemption {
    pub code: String,
    pub offer: String,
    pub brand: String,
}

/// POST /api/redemptions/verify - 校验会员出示的核销码
///
/// 仅匹配有效状态的优惠券，忽略大小写与首尾空白。
pub async fn verify(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<VerifyRequest>,
) -> AppResult<Json<ApiResponse<VerifiedRedemption>>> {
    current.session.require_role(&[Role::BrandAdmin])?;
    let code = req.code.trim().to_uppercase();
    if code.is_empty() {
        return Err(AppError::validation("Redemption code is required").with_detail("field", "code"));
    }

    let guard = state
        .run_simulated(current.id, SimulatedOp::RedemptionVerify)
        .await?;
    guard.finish()?;

    let voucher = state
        .fixtures
        .records
        .vouchers
        .iter()
        .find(|v| v.status == VoucherStatus::Active && v.code.eq_ignore_ascii_case(&code));

    let Some(voucher) = voucher else {
        security_log!(
            "WARN",
            "redemption_rejected",
            session_id = current.id.to_string(),
            code = code
        );
        return Err(AppError::new(ErrorCode::RedemptionCodeInvalid));
    };

    security_log!(
        "INFO",
        "redemption_verified",
        session_id = current.id.to_string(),
        code = voucher.code.clone()
    );
    Ok(Json(ApiResponse::success_with_message(
        "Redemption Successful!",
        VerifiedRedemption {
            code: voucher.code.clone(),
            offer: voucher.name.clone(),
            brand: voucher.brand.clone(),
        },
    )))
}

/// GET /api/redemptions/log - 最近核销记录
pub async fn log(
    State(state): State<ServerState>,
    current: CurrentSession,
) -> AppResult<Json<Vec<RedemptionLogEntry>>> {
    current.session.require_role(&[Role::BrandAdmin])?;
    Ok(Json(state.fixtures.records.redemption_log.clone()))
}
