//! Redemption API 模块 (品牌管理员)
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/redemptions/verify | POST | 核销码校验 (模拟延迟) |
//! | /api/redemptions/log | GET | 核销记录 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/redemptions", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/verify", post(handler::verify))
        .route("/log", get(handler::log))
}
