use thiserror::Error;

/// 服务器启动与运行错误
///
/// 处理器内的业务错误使用 [`shared::AppError`]，这里只覆盖启动阶段。
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("种子数据无效: {0}")]
    Fixtures(#[from] serde_json::Error),

    #[error("路由表无效: {0}")]
    RouteTable(String),

    #[error("端口绑定失败: {0}")]
    Bind(#[from] std::io::Error),

    #[error("内部服务器错误")]
    Internal(#[from] anyhow::Error),
}

/// 启动流程的 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
