//! Wallet API 模块
//!
//! | 路径 | 方法 | 说明 | 权限 |
//! |------|------|------|------|
//! | /api/wallet/ledger | GET | 钱包流水 (?filter=all\|credit\|debit) | 已登录 |
//! | /api/wallet/settlements | GET | 品牌结算 | 超级管理员 |
//! | /api/wallet/payouts | POST | 处理待结算 (模拟延迟) | 超级管理员 |
//! | /api/wallet/topup | POST | 为会员充值 (含品牌赠送) | 品牌管理员 |
//! | /api/wallet/deduct | POST | 手动扣款 (模拟延迟) | 品牌管理员 |
//! | /api/wallet/scan-pay | POST | 扫码支付并累积积分 (模拟延迟) | 会员 |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/wallet", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/ledger", get(handler::ledger))
        .route("/settlements", get(handler::settlements))
        .route("/payouts", post(handler::payouts))
        .route("/topup", post(handler::topup))
        .route("/deduct", post(handler::deduct))
        .route("/scan-pay", post(handler::scan_pay))
}
