//! Rewards API 模块 (会员)
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/rewards/history | GET | 积分记录 |
//! | /api/rewards/redeem | POST | 积分兑换钱包余额 (模拟延迟) |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/rewards", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/history", get(handler::history))
        .route("/redeem", post(handler::redeem))
}
