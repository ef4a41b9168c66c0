//! Directory API Handlers

use axum::{
    Json,
    extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use shared::AppResult;
use shared::loyalty::LoyaltyRules;
use shared::models::{CustomerRecord, Role, Subscription};

use crate::api::CurrentSession;
use crate::core::ServerState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CustomerQuery {
    pub search: String,
}

/// GET /api/customers - 客户目录，按姓名 / 邮箱 / 电话筛选
pub async fn customers(
    State(state): State<ServerState>,
    current: CurrentSession,
    Query(query): Query<CustomerQuery>,
) -> AppResult<Json<Vec<CustomerRecord>>> {
    current
        .session
        .require_role(&[Role::SuperAdmin, Role::BrandAdmin])?;
    let rows = state
        .fixtures
        .records
        .customers
        .iter()
        .filter(|c| c.matches(&query.search))
        .cloned()
        .collect();
    Ok(Json(rows))
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionView {
    #[serde(flatten)]
    pub subscription: Subscription,
    pub remaining: u32,
}

/// GET /api/subscriptions - 订阅套餐 (附剩余次数)
pub async fn subscriptions(
    State(state): State<ServerState>,
    current: CurrentSession,
) -> AppResult<Json<Vec<SubscriptionView>>> {
    current.session.require_role(&[Role::Customer])?;
    let rows = state
        .fixtures
        .records
        .subscriptions
        .iter()
        .map(|s| SubscriptionView {
            remaining: s.remaining(),
            subscription: s.clone(),
        })
        .collect();
    Ok(Json(rows))
}

/// GET /api/settings/tiers - 积分规则
pub async fn tiers(current: CurrentSession) -> AppResult<Json<LoyaltyRules>> {
    current.session.require_identity()?;
    Ok(Json(LoyaltyRules::default()))
}
