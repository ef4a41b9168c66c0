//! Loyalty 计算预览 API
//!
//! 纯计算，不修改任何状态，也无需登录。
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/loyalty/topup-preview | POST | 品牌充值赠送预览 |
//! | /api/loyalty/slab-preview | POST | 建店向导档位预览 |
//! | /api/loyalty/audience | POST | 营销受众估算 |
//! | /api/loyalty/points | POST | 消费积分估算 |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/loyalty", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/topup-preview", post(handler::topup_preview))
        .route("/slab-preview", post(handler::slab_preview))
        .route("/audience", post(handler::audience))
        .route("/points", post(handler::points))
}
