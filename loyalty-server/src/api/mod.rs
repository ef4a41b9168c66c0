//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`session`] - 会话、登录、导航
//! - [`brands`] - 品牌目录、落地页编辑、建店向导
//! - [`loyalty`] - 充值赠送 / 档位 / 受众 / 积分预览
//! - [`wallet`] - 钱包流水、结算、充值、扣款
//! - [`redemptions`] - 核销
//! - [`campaigns`] - 营销活动
//! - [`rewards`] - 积分兑换
//! - [`vouchers`] - 优惠券
//! - [`directory`] - 只读列表 (客户、订阅、会员规则)

pub mod extract;

pub mod brands;
pub mod campaigns;
pub mod directory;
pub mod health;
pub mod loyalty;
pub mod redemptions;
pub mod rewards;
pub mod session;
pub mod vouchers;
pub mod wallet;

use axum::{Router, error_handling::HandleErrorLayer};
use shared::{AppError, ErrorCode};
use tower::{BoxError, ServiceBuilder, timeout::TimeoutLayer};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

pub use extract::{CurrentSession, SESSION_HEADER};

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(session::router())
        .merge(brands::router())
        .merge(loyalty::router())
        .merge(wallet::router())
        .merge(redemptions::router())
        .merge(campaigns::router())
        .merge(rewards::router())
        .merge(vouchers::router())
        .merge(directory::router())
}

/// Build a fully configured application with all middleware
///
/// Used by both the HTTP server and in-process tests.
pub fn build_app(state: &ServerState) -> Router<ServerState> {
    build_router()
        // ========== Tower Middleware ==========
        // Timeout - drops the handler future (and any pending simulated op)
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(state.config.request_timeout())),
        )
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Trace - Request tracing
        .layer(TraceLayer::new_for_http())
}

async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::new(ErrorCode::TimeoutError)
    } else {
        tracing::error!(error = %err, "Unhandled middleware error");
        AppError::internal("Unhandled internal error")
    }
}
