//! Wallet API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use shared::loyalty::{TopUpPreview, format_inr, points_for_spend, topup_preview};
use shared::models::{
    Brand, LedgerEntry, LedgerFilter, Role, Settlement, SettlementStatus, WalletSummary,
};
use shared::{ApiResponse, AppError, AppResult, ErrorCode};

use crate::api::CurrentSession;
use crate::core::ServerState;
use crate::security_log;
use crate::session::credentials::normalize_phone;
use crate::session::{SessionAction, SimulatedOp};
use crate::utils::validation::{MAX_NOTE_LEN, validate_optional_text};

fn positive_amount(amount: f64) -> AppResult<f64> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(AppError::new(ErrorCode::TopUpAmountInvalid)
            .with_detail("amount", amount.to_string()));
    }
    Ok(amount)
}

fn wallet_brand(state: &ServerState, brand_id: &str) -> AppResult<Brand> {
    let brand = state
        .catalog
        .get(brand_id)
        .ok_or_else(|| AppError::brand_not_found(brand_id))?;
    if !brand.features.wallet {
        return Err(AppError::with_message(
            ErrorCode::FeatureNotAvailable,
            format!("Wallet is not enabled for {}", brand.name),
        )
        .with_detail("brand_id", brand_id));
    }
    Ok(brand)
}

/// Brand the calling brand admin manages
fn admin_brand(state: &ServerState, current: &CurrentSession) -> AppResult<Brand> {
    let user = current.session.require_role(&[Role::BrandAdmin])?;
    let brand_id = user
        .brand_id
        .as_deref()
        .ok_or_else(|| AppError::internal("Brand admin without brand"))?;
    wallet_brand(state, brand_id)
}

// =============================================================================
// Read-only lists
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct LedgerQuery {
    #[serde(default)]
    pub filter: LedgerFilter,
}

/// GET /api/wallet/ledger - 钱包流水
pub async fn ledger(
    State(state): State<ServerState>,
    current: CurrentSession,
    Query(query): Query<LedgerQuery>,
) -> AppResult<Json<Vec<LedgerEntry>>> {
    current.session.require_identity()?;
    let rows = state
        .fixtures
        .records
        .ledger
        .iter()
        .filter(|row| query.filter.matches(row.direction))
        .cloned()
        .collect();
    Ok(Json(rows))
}

/// GET /api/wallet/settlements - 品牌结算列表
pub async fn settlements(
    State(state): State<ServerState>,
    current: CurrentSession,
) -> AppResult<Json<Vec<Settlement>>> {
    current.session.require_role(&[Role::SuperAdmin])?;
    Ok(Json(state.fixtures.records.settlements.clone()))
}

// =============================================================================
// Payouts
// =============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PayoutRequest {
    /// 为空时处理全部待结算
    pub settlement_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutSummary {
    pub settlement_ids: Vec<String>,
    pub total_payable: f64,
    pub total_label: String,
}

/// POST /api/wallet/payouts - 处理待结算
///
/// 结算行为展示数据，不会被改写；响应仅汇总本次应付。
pub async fn payouts(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<PayoutRequest>,
) -> AppResult<Json<ApiResponse<PayoutSummary>>> {
    current.session.require_role(&[Role::SuperAdmin])?;

    let rows = &state.fixtures.records.settlements;
    let selected: Vec<&Settlement> = match &req.settlement_id {
        Some(id) => {
            let row = rows.iter().find(|s| &s.id == id).ok_or_else(|| {
                AppError::new(ErrorCode::SettlementNotFound).with_detail("settlement_id", id.clone())
            })?;
            vec![row]
        }
        None => rows.iter().collect(),
    };
    let pending: Vec<&Settlement> = selected
        .into_iter()
        .filter(|s| s.status == SettlementStatus::Pending)
        .collect();
    if pending.is_empty() {
        return Err(AppError::new(ErrorCode::NothingToSettle));
    }

    let guard = state.run_simulated(current.id, SimulatedOp::Payouts).await?;
    guard.finish()?;

    let total_payable: f64 = pending.iter().map(|s| s.payable).sum();
    let summary = PayoutSummary {
        settlement_ids: pending.iter().map(|s| s.id.clone()).collect(),
        total_payable,
        total_label: format_inr(total_payable),
    };
    security_log!(
        "INFO",
        "payouts_processed",
        session_id = current.id.to_string(),
        settlements = summary.settlement_ids.len(),
        total = summary.total_label.clone()
    );
    Ok(Json(ApiResponse::success_with_message(
        "Payouts processed successfully",
        summary,
    )))
}

// =============================================================================
// Brand admin adjustments
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerTopUpRequest {
    pub customer_phone: String,
    pub amount: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUpReceipt {
    pub brand_id: String,
    pub customer_phone: String,
    #[serde(flatten)]
    pub preview: TopUpPreview,
}

/// POST /api/wallet/topup - 品牌管理员为会员充值
pub async fn topup(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<CustomerTopUpRequest>,
) -> AppResult<Json<ApiResponse<TopUpReceipt>>> {
    let brand = admin_brand(&state, &current)?;
    let phone = normalize_phone(&req.customer_phone)?;
    let amount = positive_amount(req.amount)?;
    let preview = topup_preview(amount, brand.topup_bonus_percentage)
        .ok_or_else(|| AppError::new(ErrorCode::TopUpAmountInvalid))?;

    tracing::info!(
        brand_id = %brand.id,
        customer = %phone,
        total = preview.total_credited,
        "Wallet topped up"
    );
    Ok(Json(ApiResponse::success_with_message(
        format!("{} credited", format_inr(preview.total_credited)),
        TopUpReceipt {
            brand_id: brand.id,
            customer_phone: phone,
            preview,
        },
    )))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionRequest {
    pub customer_phone: String,
    pub amount: f64,
    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeductionReceipt {
    pub brand_id: String,
    pub customer_phone: String,
    pub amount: f64,
    pub note: Option<String>,
}

/// POST /api/wallet/deduct - 手动扣款
pub async fn deduct(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<DeductionRequest>,
) -> AppResult<Json<ApiResponse<DeductionReceipt>>> {
    let brand = admin_brand(&state, &current)?;
    let phone = normalize_phone(&req.customer_phone)?;
    if !req.amount.is_finite() || req.amount <= 0.0 {
        return Err(AppError::validation("Deduction amount must be greater than zero")
            .with_detail("field", "amount"));
    }
    validate_optional_text(&req.note, "note", MAX_NOTE_LEN)?;

    let guard = state
        .run_simulated(current.id, SimulatedOp::ManualDeduction)
        .await?;
    guard.finish()?;

    security_log!(
        "INFO",
        "manual_deduction",
        session_id = current.id.to_string(),
        brand_id = brand.id.clone(),
        customer = phone.clone(),
        amount = req.amount
    );
    Ok(Json(ApiResponse::success_with_message(
        format!("{} deducted", format_inr(req.amount)),
        DeductionReceipt {
            brand_id: brand.id,
            customer_phone: phone,
            amount: req.amount,
            note: req.note,
        },
    )))
}

// =============================================================================
// Customer scan & pay
// =============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanPayRequest {
    pub brand_id: String,
    pub amount: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub brand_id: String,
    pub amount: f64,
    pub points_earned: i64,
    pub wallet: Option<WalletSummary>,
}

/// POST /api/wallet/scan-pay - 扫码支付 (扫码 2000ms + 支付 1500ms)
pub async fn scan_pay(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(req): Json<ScanPayRequest>,
) -> AppResult<Json<ApiResponse<PaymentReceipt>>> {
    let user = current.session.require_role(&[Role::Customer])?;
    let tier = user.tier;
    let brand = wallet_brand(&state, &req.brand_id)?;
    if !req.amount.is_finite() || req.amount <= 0.0 {
        return Err(AppError::validation("Payment amount must be greater than zero")
            .with_detail("field", "amount"));
    }
    let balance = current.session.wallet.map(|w| w.balance).unwrap_or_default();
    if balance < req.amount {
        return Err(AppError::new(ErrorCode::InsufficientBalance));
    }

    let guard = state.run_simulated(current.id, SimulatedOp::ScanPay).await?;
    let points_earned = points_for_spend(req.amount, brand.points_earning_rate, tier);
    let session = guard.commit(SessionAction::AdjustWallet {
        balance_delta: -req.amount,
        points_delta: points_earned,
    })?;

    tracing::info!(
        session_id = %current.id,
        brand_id = %brand.id,
        amount = req.amount,
        points = points_earned,
        "Scan & pay completed"
    );
    Ok(Json(ApiResponse::success_with_message(
        format!("Paid {} to {}", format_inr(req.amount), brand.name),
        PaymentReceipt {
            brand_id: brand.id,
            amount: req.amount,
            points_earned,
            wallet: session.wallet,
        },
    )))
}
