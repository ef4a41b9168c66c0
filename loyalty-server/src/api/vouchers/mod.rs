//! Voucher API 模块 (会员)
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/vouchers | GET | 我的优惠券 (含本会话已核销状态) |
//! | /api/vouchers/{id}/redeem | POST | 出示核销 (模拟延迟) |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/vouchers", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}/redeem", post(handler::redeem))
}
