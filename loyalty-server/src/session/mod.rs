//! 会话与导航控制
//!
//! # 模块结构
//!
//! - [`controller`] - 会话状态机 (纯函数 `Session::apply`)
//! - [`routes`] - 角色/视图路由表
//! - [`store`] - 并发会话表 + 取消令牌
//! - [`latency`] - 可取消的模拟延迟
//! - [`credentials`] - 演示账号与 OTP 校验

pub mod controller;
pub mod credentials;
pub mod latency;
pub mod routes;
pub mod store;

pub use controller::{OtpChallenge, PendingOp, Session, SessionAction};
pub use latency::{SimulatedOp, simulate};
pub use routes::{RouteContext, RouteTable};
pub use store::{PendingGuard, SessionStore};
