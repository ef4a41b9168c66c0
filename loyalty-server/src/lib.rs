//! Loyalty Server - 多租户会员忠诚度管理演示服务
//!
//! # 架构概述
//!
//! - **品牌目录** (`catalog`): 内存品牌配置，嵌套合并更新，落地页编辑器，建店向导
//! - **会话** (`session`): 纯函数状态机、角色/视图路由表、可取消的模拟延迟
//! - **HTTP API** (`api`): JSON 接口，统一 `ApiResponse` / `AppError` 信封
//! - **计算** (`shared::loyalty`): 充值赠送、档位预览、受众估算、积分
//!
//! # 模块结构
//!
//! ```text
//! loyalty-server/src/
//! ├── core/          # 配置、状态、错误、后台任务、服务器
//! ├── catalog/       # 品牌目录、种子数据、落地页编辑、建店向导
//! ├── session/       # 会话状态机、路由表、会话表、模拟延迟、演示账号
//! ├── api/           # HTTP 路由和处理器
//! └── utils/         # 日志、校验
//! ```

pub mod api;
pub mod catalog;
pub mod core;
pub mod session;
pub mod utils;

// Re-export 公共类型
pub use catalog::BrandCatalog;
pub use core::{Config, Server, ServerError, ServerState};
pub use session::{RouteTable, Session, SessionAction, SessionStore, SimulatedOp};
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

// Security logging macro - 支持 tracing 格式说明符
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = $value),*
        );
    };
}

pub fn print_banner() {
    println!(
        r#"
    __                     ____
   / /   ____  __  ______ / / /___  __
  / /   / __ \/ / / / __ `/ / __/ / / /
 / /___/ /_/ / /_/ / /_/ / / /_/ /_/ /
/_____/\____/\__, /\__,_/_/\__/\__, /
            /____/            /____/
    "#
    );
}
