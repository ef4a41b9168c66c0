//! Brand API 模块
//!
//! | 路径 | 方法 | 说明 | 权限 |
//! |------|------|------|------|
//! | /api/brands | GET | 品牌列表 (展示顺序) | 公开 |
//! | /api/brands | POST | 建店向导创建品牌 | 超级管理员 |
//! | /api/brands/templates | GET | 向导模板 | 公开 |
//! | /api/brands/directory | GET | 品牌联系方式 | 公开 |
//! | /api/brands/{id} | GET | 单个品牌 (不存在返回 404) | 公开 |
//! | /api/brands/{id} | PUT | 嵌套合并更新 | 超级管理员 / 本品牌管理员 |
//! | /api/brands/{id}/landing-page/edits | POST | 落地页编辑操作 | 同上 |
//! | /api/brands/{id}/landing-page/publish | POST | 发布落地页 (模拟延迟) | 同上 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/brands", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/templates", get(handler::templates))
        .route("/directory", get(handler::directory))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/landing-page/edits", post(handler::edit_landing_page))
        .route("/{id}/landing-page/publish", post(handler::publish_landing_page))
}
