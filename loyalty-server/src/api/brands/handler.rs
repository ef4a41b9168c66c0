//! Brand API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;
use shared::loyalty::MAX_POINTS_EARNING_RATE;
use shared::models::{Brand, BrandContact, BrandPatch, LandingPageEdit, LandingPagePatch, Role};
use shared::{ApiResponse, AppError, AppResult};

use crate::api::CurrentSession;
use crate::catalog::{BrandDraft, BrandTemplate, SlabSummary, TEMPLATES, slab_summaries};
use crate::core::ServerState;
use crate::session::SimulatedOp;
use crate::utils::validate_request;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_URL_LEN, validate_optional_text, validate_range, validate_required_text,
};

/// GET /api/brands - 全部品牌
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Brand>>> {
    Ok(Json(state.catalog.get_all()))
}

/// GET /api/brands/:id - 单个品牌
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Brand>> {
    let brand = state
        .catalog
        .get(&id)
        .ok_or_else(|| AppError::brand_not_found(&id))?;
    Ok(Json(brand))
}

/// GET /api/brands/templates - 向导模板
pub async fn templates() -> Json<&'static [BrandTemplate]> {
    Json(TEMPLATES)
}

/// GET /api/brands/directory - 品牌联系方式 (会员端)
pub async fn directory(State(state): State<ServerState>) -> Json<Vec<BrandContact>> {
    let contacts = state
        .catalog
        .get_all()
        .iter()
        .map(BrandContact::from)
        .collect();
    Json(contacts)
}

/// PUT /api/brands/:id - 嵌套合并更新
pub async fn update(
    State(state): State<ServerState>,
    current: CurrentSession,
    Path(id): Path<String>,
    Json(patch): Json<BrandPatch>,
) -> AppResult<Json<Brand>> {
    current.session.require_brand_manager(&id)?;
    if let Some(name) = &patch.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    validate_optional_text(&patch.logo, "logo", MAX_URL_LEN)?;
    if let Some(pct) = patch.topup_bonus_percentage {
        validate_range(pct, "topupBonusPercentage", 0.0, 100.0)?;
    }
    if let Some(rate) = patch.points_earning_rate {
        validate_range(rate, "pointsEarningRate", 0.0, MAX_POINTS_EARNING_RATE)?;
    }
    let brand = state.catalog.update(&id, patch)?;
    Ok(Json(brand))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedBrand {
    #[serde(flatten)]
    pub brand: Brand,
    pub slab_previews: Vec<SlabSummary>,
}

/// POST /api/brands - 建店向导
pub async fn create(
    State(state): State<ServerState>,
    current: CurrentSession,
    Json(draft): Json<BrandDraft>,
) -> AppResult<Json<ApiResponse<CreatedBrand>>> {
    current.session.require_role(&[Role::SuperAdmin])?;
    validate_request(&draft)?;
    draft.check_limits()?;

    let brand = state.catalog.create(draft)?;
    Ok(Json(ApiResponse::success_with_message(
        format!("{} is live", brand.name),
        CreatedBrand {
            slab_previews: slab_summaries(&brand),
            brand,
        },
    )))
}

/// POST /api/brands/:id/landing-page/edits - 落地页编辑操作
pub async fn edit_landing_page(
    State(state): State<ServerState>,
    current: CurrentSession,
    Path(id): Path<String>,
    Json(edit): Json<LandingPageEdit>,
) -> AppResult<Json<Brand>> {
    current.session.require_brand_manager(&id)?;
    let brand = state.catalog.edit_landing_page(&id, edit)?;
    Ok(Json(brand))
}

/// POST /api/brands/:id/landing-page/publish - 发布落地页
///
/// 等待模拟延迟后整体合并；期间登出则不写入。
pub async fn publish_landing_page(
    State(state): State<ServerState>,
    current: CurrentSession,
    Path(id): Path<String>,
    Json(patch): Json<LandingPagePatch>,
) -> AppResult<Json<ApiResponse<Brand>>> {
    current.session.require_brand_manager(&id)?;
    if !state.catalog.contains(&id) {
        return Err(AppError::brand_not_found(&id));
    }

    let guard = state
        .run_simulated(current.id, SimulatedOp::LandingPublish)
        .await?;
    guard.finish()?;

    let brand = state.catalog.update(
        &id,
        BrandPatch {
            landing_page: Some(patch),
            ..Default::default()
        },
    )?;
    Ok(Json(ApiResponse::success_with_message(
        "Landing page published",
        brand,
    )))
}
