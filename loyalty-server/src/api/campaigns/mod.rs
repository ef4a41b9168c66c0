//! Campaign API 模块 (超级管理员)
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/campaigns/composer | GET | 默认模板、可选兴趣与渠道 |
//! | /api/campaigns/send | POST | 按受众发送 (模拟延迟) |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/campaigns", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/composer", get(handler::composer))
        .route("/send", post(handler::send))
}
