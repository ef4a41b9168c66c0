//! 只读列表 API
//!
//! | 路径 | 方法 | 说明 | 权限 |
//! |------|------|------|------|
//! | /api/customers | GET | 客户目录 (?search=) | 超级管理员 / 品牌管理员 |
//! | /api/subscriptions | GET | 订阅套餐 | 会员 |
//! | /api/settings/tiers | GET | 积分与会员等级规则 | 已登录 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/customers", get(handler::customers))
        .route("/api/subscriptions", get(handler::subscriptions))
        .route("/api/settings/tiers", get(handler::tiers))
}
