//! Loyalty Preview Handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use shared::loyalty::{
    self, AudienceFilter, BASE_AUDIENCE, SlabPreview, TopUpPreview, estimate_audience,
    points_for_spend, points_value,
};
use shared::models::Tier;
use shared::{AppError, AppResult};

use crate::core::ServerState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopUpPreviewRequest {
    pub brand_id: String,
    pub amount: f64,
}

/// POST /api/loyalty/topup-preview - 按品牌赠送比例预览
///
/// 金额非正时返回 `null`，与界面隐藏预览一致。
pub async fn topup_preview(
    State(state): State<ServerState>,
    Json(req): Json<TopUpPreviewRequest>,
) -> AppResult<Json<Option<TopUpPreview>>> {
    let brand = state
        .catalog
        .get(&req.brand_id)
        .ok_or_else(|| AppError::brand_not_found(&req.brand_id))?;
    Ok(Json(loyalty::topup_preview(
        req.amount,
        brand.topup_bonus_percentage,
    )))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlabPreviewRequest {
    pub amount_paid: String,
    pub wallet_value: String,
}

/// POST /api/loyalty/slab-preview - 档位赠送预览 (原始表单文本)
pub async fn slab_preview(Json(req): Json<SlabPreviewRequest>) -> Json<Option<SlabPreview>> {
    Json(loyalty::slab_preview(&req.amount_paid, &req.wallet_value))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AudienceEstimate {
    pub estimate: u64,
    pub base: u64,
}

/// POST /api/loyalty/audience - 受众估算
pub async fn audience(Json(filter): Json<AudienceFilter>) -> Json<AudienceEstimate> {
    Json(AudienceEstimate {
        estimate: estimate_audience(&filter),
        base: BASE_AUDIENCE,
    })
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsRequest {
    pub spend: f64,
    pub brand_id: String,
    #[serde(default)]
    pub tier: Tier,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointsEstimate {
    pub points: i64,
    pub value: f64,
}

/// POST /api/loyalty/points - 消费可得积分及其价值
pub async fn points(
    State(state): State<ServerState>,
    Json(req): Json<PointsRequest>,
) -> AppResult<Json<PointsEstimate>> {
    let brand = state
        .catalog
        .get(&req.brand_id)
        .ok_or_else(|| AppError::brand_not_found(&req.brand_id))?;
    let points = points_for_spend(req.spend, brand.points_earning_rate, req.tier);
    Ok(Json(PointsEstimate {
        points,
        value: points_value(points),
    }))
}
