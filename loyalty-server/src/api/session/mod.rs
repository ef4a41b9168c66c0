//! Session API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /api/session | POST | 新建匿名会话 |
//! | /api/session | GET | 当前会话 |
//! | /api/session/screen | GET | 解析当前屏幕 |
//! | /api/session/menu | GET | 侧边栏菜单 |
//! | /api/session/login/password | POST | 账号密码登录 |
//! | /api/session/login/otp/send | POST | 发送 OTP |
//! | /api/session/login/otp/verify | POST | 校验 OTP 并登录 |
//! | /api/session/signup | POST | 注册新会员并登录 |
//! | /api/session/logout | POST | 登出 (取消进行中的操作) |
//! | /api/session/navigate | POST | 切换视图 |
//! | /api/session/edit-landing-page | POST | 聚焦品牌并打开编辑器 |
//! | /api/session/focus | POST | 匿名访客切换品牌 |
//! | /api/session/profile | PUT | 保存个人资料 |

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub use handler::SessionView;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/session", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", post(handler::create).get(handler::current))
        .route("/screen", get(handler::screen))
        .route("/menu", get(handler::menu))
        .route("/login/password", post(handler::login_password))
        .route("/login/otp/send", post(handler::send_otp))
        .route("/login/otp/verify", post(handler::verify_otp))
        .route("/signup", post(handler::signup))
        .route("/logout", post(handler::logout))
        .route("/navigate", post(handler::navigate))
        .route("/edit-landing-page", post(handler::edit_landing_page))
        .route("/focus", post(handler::focus))
        .route("/profile", put(handler::update_profile))
}
